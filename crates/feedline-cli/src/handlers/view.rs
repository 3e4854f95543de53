use super::load_feed;
use crate::presentation::tui::{AppState, TuiRenderer};
use anyhow::Result;
use chrono::Utc;
use feedline_types::Author;
use std::path::Path;

pub fn handle(feed_path: Option<&Path>, viewer: Author) -> Result<()> {
    let feed = load_feed(feed_path, &viewer, Utc::now())?;
    let state = AppState::new(feed, viewer);
    TuiRenderer::new().run(state)
}
