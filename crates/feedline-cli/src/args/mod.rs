mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "feedline")]
#[command(about = "Browse a feed of posts and comment on them", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Config file (default: $FEEDLINE_CONFIG or the platform config dir)")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "TOML feed file to show instead of the built-in posts")]
    pub feed: Option<PathBuf>,

    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
