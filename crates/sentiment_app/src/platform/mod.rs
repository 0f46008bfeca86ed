mod app;
mod effects;
mod ui;

pub use app::run_app;
