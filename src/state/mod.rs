pub mod keys;
pub mod timer;

pub use keys::KeyCommand;
pub use timer::TransitionTimer;
