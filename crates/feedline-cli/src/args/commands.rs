use super::enums::OutputFormat;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open the interactive feed (default)")]
    View,

    #[command(about = "Print the feed once and exit")]
    Render {
        #[arg(long, value_enum, default_value = "plain")]
        format: OutputFormat,

        #[arg(long, help = "Clock used for relative times (RFC 3339)")]
        now: Option<String>,
    },
}
