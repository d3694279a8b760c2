//! Desktop shell: config, logging, the egui window and effect execution.
mod app;
mod config;
mod effects;
mod ui;

pub use app::run_app;
