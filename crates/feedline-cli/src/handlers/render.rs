use super::load_feed;
use crate::presentation::console::{self, ConsoleOptions};
use crate::presentation::presenters::build_feed_view_model;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use feedline_types::Author;
use std::path::Path;

pub fn handle(feed_path: Option<&Path>, viewer: Author, json: bool, now: Option<&str>) -> Result<()> {
    let now = match now {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .with_context(|| format!("invalid --now timestamp '{}'", raw))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };

    let feed = load_feed(feed_path, &viewer, now)?;
    let view_model = build_feed_view_model(&feed, &viewer, now);

    if json {
        println!("{}", serde_json::to_string_pretty(&view_model)?);
    } else {
        print!("{}", console::render_feed(&view_model, ConsoleOptions::detect()));
    }

    Ok(())
}
