pub mod action_log;
pub mod app;
pub mod components;
pub mod input;
pub mod message;
pub mod tui;
pub mod util;
