pub mod app;
pub mod cli;
pub mod csv_loader;
pub mod logging;
pub mod render;
pub mod utils;
pub mod validation;
