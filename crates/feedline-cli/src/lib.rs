mod args;
mod commands;
pub mod config;
mod handlers;
mod logging;
pub mod presentation;

pub use args::{Cli, Commands, LogLevel, OutputFormat};
pub use commands::run;
