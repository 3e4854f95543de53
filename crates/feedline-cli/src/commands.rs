use super::args::{Cli, Commands, OutputFormat};
use super::handlers;
use super::logging::{self, LogSink};
use crate::config::Config;
use anyhow::Result;

const DEFAULT_LOG_LEVEL: &str = "warn";

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    let level = cli
        .log_level
        .map(|level| level.as_str())
        .or(config.log_level.as_deref())
        .unwrap_or(DEFAULT_LOG_LEVEL);
    let feed_path = cli.feed.or_else(|| config.feed_path.clone());
    let viewer = config.viewer();

    match cli.command.unwrap_or(Commands::View) {
        Commands::View => {
            logging::init(level, config.log_file.as_deref(), LogSink::FileOnly)?;
            handlers::view::handle(feed_path.as_deref(), viewer)
        }

        Commands::Render { format, now } => {
            logging::init(level, config.log_file.as_deref(), LogSink::Stderr)?;
            let json = matches!(format, OutputFormat::Json);
            handlers::render::handle(feed_path.as_deref(), viewer, json, now.as_deref())
        }
    }
}
