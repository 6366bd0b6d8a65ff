pub mod app;
pub mod effects;
pub mod headless;
pub mod logging;
mod ui;
