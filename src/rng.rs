//! Seeded shuffling. The seed comes from the browser at the call site so the
//! reducer itself stays deterministic.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

/// Fresh seed from the page's entropy (`Math.random` mixed with the clock).
pub fn browser_seed() -> u64 {
    let r = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let t = js_sys::Date::now() as u64;
    (r << 32) ^ t
}
