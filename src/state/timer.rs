// Owns the single pending transition timer; replacing or dropping it cancels.

use gloo_timers::callback::Timeout;

#[derive(Default)]
pub struct TransitionTimer {
    pending: Option<Timeout>,
}

impl TransitionTimer {
    pub fn schedule<F>(&mut self, delay_ms: u32, f: F)
    where
        F: 'static + FnOnce(),
    {
        // the previous Timeout is dropped here, which clears it
        self.pending = Some(Timeout::new(delay_ms, f));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
