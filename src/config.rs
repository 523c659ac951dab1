//! Game tuning loaded from localStorage (`cm_config`), falling back to defaults.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::model::Delay;
use crate::storage::{self, StorageError};

pub const CONFIG_KEY: &str = "cm_config";
pub const TUTORIAL_SEEN_KEY: &str = "cm_tutorial_seen";

const MIN_DELAY_MS: u32 = 1;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// How long the matched emotion is shown before the next target.
    pub success_delay_ms: u32,
    /// How long the wrong jar shakes before guessing resumes.
    pub wrong_delay_ms: u32,
    /// Skip the tutorial on later visits once it has been dismissed.
    pub remember_tutorial: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            success_delay_ms: 2500,
            wrong_delay_ms: 1000,
            remember_tutorial: false,
        }
    }
}

impl GameConfig {
    pub fn from_json(raw: &str) -> Result<Self, StorageError> {
        let cfg: GameConfig = serde_json::from_str(raw)?;
        Ok(cfg.normalized())
    }

    fn normalized(mut self) -> Self {
        self.success_delay_ms = self.success_delay_ms.max(MIN_DELAY_MS);
        self.wrong_delay_ms = self.wrong_delay_ms.max(MIN_DELAY_MS);
        self
    }

    pub fn delay_ms(&self, delay: Delay) -> u32 {
        match delay {
            Delay::Success => self.success_delay_ms,
            Delay::Wrong => self.wrong_delay_ms,
        }
    }

    /// Decodes what is stored under `cm_config`. The flag is true when nothing
    /// was stored, so the defaults get written back for editing from devtools.
    /// A malformed value is an error and is left in place.
    fn from_stored(raw: Option<&str>) -> Result<(Self, bool), StorageError> {
        match raw {
            Some(raw) => Ok((Self::from_json(raw)?, false)),
            None => Ok((Self::default(), true)),
        }
    }

    /// Never fails: storage or decode problems are logged and defaults are used.
    pub fn load() -> Self {
        let raw = match storage::get_raw(CONFIG_KEY) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "config storage unavailable");
                return Self::default();
            }
        };
        match Self::from_stored(raw.as_deref()) {
            Ok((cfg, true)) => {
                if let Err(e) = cfg.save() {
                    warn!(error = %e, "could not store default config");
                }
                cfg
            }
            Ok((cfg, false)) => {
                info!(?cfg, "loaded config");
                cfg
            }
            Err(e) => {
                warn!(error = %e, "ignoring stored config");
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<(), StorageError> {
        storage::set_json(CONFIG_KEY, self)
    }

    pub fn tutorial_seen(&self) -> bool {
        if !self.remember_tutorial {
            return false;
        }
        match storage::get_raw(TUTORIAL_SEEN_KEY) {
            Ok(v) => v.is_some(),
            Err(e) => {
                warn!(error = %e, "could not read tutorial flag");
                false
            }
        }
    }

    pub fn mark_tutorial_seen(&self) {
        if !self.remember_tutorial {
            return;
        }
        if let Err(e) = storage::set_raw(TUTORIAL_SEEN_KEY, "1") {
            warn!(error = %e, "could not persist tutorial flag");
        }
    }
}
