// Keyboard shortcuts: digits pick a jar, Enter/Space confirm.

use crate::model::{EMOTIONS, EmotionId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    /// Guess the jar at this position in the on-screen row.
    Jar(EmotionId),
    /// Start from the tutorial, or replay from the end screen.
    Confirm,
}

impl KeyCommand {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" | " " | "Space" | "Spacebar" => Some(KeyCommand::Confirm),
            k => {
                let n: usize = k.parse().ok()?;
                let e = EMOTIONS.get(n.checked_sub(1)?)?;
                Some(KeyCommand::Jar(e.id))
            }
        }
    }
}
