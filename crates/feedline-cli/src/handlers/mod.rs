pub mod render;
pub mod view;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use feedline_engine::{Feed, load_posts};
use feedline_types::Author;
use std::path::Path;

/// Build the feed from the configured file, or from the built-in posts.
fn load_feed(feed_path: Option<&Path>, viewer: &Author, now: DateTime<Utc>) -> Result<Feed> {
    match feed_path {
        Some(path) => {
            let posts = load_posts(path)
                .with_context(|| format!("failed to load feed {}", path.display()))?;
            Ok(Feed::new(posts, viewer, now))
        }
        None => Ok(Feed::seeded(viewer, now)),
    }
}
