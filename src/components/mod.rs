pub mod app;
pub mod emotion_jar;
pub mod game_over_panel;
pub mod instruction_line;
pub mod monster;
pub mod styles;
pub mod tutorial_overlay;
