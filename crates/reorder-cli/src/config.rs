//! Layered run configuration: command-line arguments, then `--set` overrides and the TOML
//! file, then built-in defaults. With no arguments at all, missing values are asked for on
//! the terminal.

mod builder;
mod defaults;
mod file;
mod models;
mod prompt;

pub use builder::build_config;
pub use models::AppConfig;
