pub mod app;
pub mod controls;
pub mod display;
pub mod log_panel;
pub mod track_selector;
