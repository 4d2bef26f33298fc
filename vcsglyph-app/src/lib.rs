pub mod app;
pub mod config;
pub mod icons;
pub mod logging;
