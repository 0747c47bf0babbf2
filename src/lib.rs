pub mod config;
pub mod player;
pub mod ui;
pub mod util;
