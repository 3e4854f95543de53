use crate::seed::seed_posts;
use crate::thread::PostThread;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use feedline_types::{Author, Post};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// A post together with the comment thread it owns.
#[derive(Debug, Clone)]
pub struct PostCard {
    pub post: Post,
    pub thread: PostThread,
}

/// Posts in display order. Each card's thread is independent of the others.
#[derive(Debug, Clone)]
pub struct Feed {
    cards: Vec<PostCard>,
}

impl Feed {
    pub fn new(posts: Vec<Post>, commenter: &Author, now: DateTime<Utc>) -> Self {
        let cards = posts
            .into_iter()
            .map(|post| PostCard {
                post,
                thread: PostThread::new(commenter.clone(), now),
            })
            .collect();
        Self { cards }
    }

    pub fn seeded(commenter: &Author, now: DateTime<Utc>) -> Self {
        Self::new(seed_posts(), commenter, now)
    }

    pub fn cards(&self) -> &[PostCard] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<&PostCard> {
        self.cards.get(index)
    }

    pub fn card_mut(&mut self, index: usize) -> Option<&mut PostCard> {
        self.cards.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct FeedFile {
    #[serde(default)]
    posts: Vec<Post>,
}

/// Load posts from a TOML feed file.
///
/// ```toml
/// [[posts]]
/// id = 1
/// published_at = "2022-08-06T20:00:00-03:00"
///
/// [posts.author]
/// name = "Gabriel Brito Oliveira"
/// role = "Web Developer"
/// avatar_url = "https://example.com/a.png"
///
/// [[posts.content]]
/// type = "paragraph"
/// content = "Fala galeraa"
/// ```
pub fn load_posts(path: &Path) -> Result<Vec<Post>> {
    let content = std::fs::read_to_string(path)?;
    let posts = parse_posts(&content)?;
    tracing::info!(path = %path.display(), posts = posts.len(), "feed loaded");
    Ok(posts)
}

pub fn parse_posts(content: &str) -> Result<Vec<Post>> {
    let file: FeedFile = toml::from_str(content)?;

    let mut seen = HashSet::new();
    for post in &file.posts {
        if !seen.insert(post.id) {
            return Err(Error::InvalidFeed(format!("duplicate post id {}", post.id)));
        }
    }

    Ok(file.posts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::default_viewer;
    use crate::thread::SubmitOutcome;
    use feedline_types::ContentBlock;
    use tempfile::TempDir;

    const FEED: &str = r#"
[[posts]]
id = 7
published_at = "2022-08-06T20:00:00-03:00"

[posts.author]
name = "Ana Souza"
role = "Designer"
avatar_url = "https://example.com/ana.png"

[[posts.content]]
type = "paragraph"
content = "Oi"

[[posts.content]]
type = "video"
content = "clip.mp4"

[[posts.content]]
type = "link"
content = "example.com/x"
"#;

    #[test]
    fn test_parse_posts_with_unknown_block() {
        let posts = parse_posts(FEED).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, 7);
        assert_eq!(
            posts[0].content,
            vec![
                ContentBlock::paragraph("Oi"),
                ContentBlock::Unknown,
                ContentBlock::link("example.com/x"),
            ]
        );
    }

    #[test]
    fn test_parse_posts_rejects_duplicate_ids() {
        let doubled = format!("{FEED}\n{}", FEED.replace("Ana Souza", "Ana Clone"));
        let err = parse_posts(&doubled).unwrap_err();
        assert!(matches!(err, Error::InvalidFeed(_)));
    }

    #[test]
    fn test_parse_posts_reports_bad_toml() {
        let err = parse_posts("[[posts]\nid = ").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_load_posts_from_file() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("feed.toml");
        std::fs::write(&path, FEED)?;

        let posts = load_posts(&path)?;
        assert_eq!(posts[0].author.name, "Ana Souza");
        Ok(())
    }

    #[test]
    fn test_load_posts_missing_file_is_io_error() {
        let err = load_posts(Path::new("/nonexistent/feed.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_threads_are_independent_per_post() {
        let mut feed = Feed::seeded(&default_viewer(), Utc::now());
        assert_eq!(feed.len(), 2);

        let first = &mut feed.card_mut(0).unwrap().thread;
        first.update_draft("Nice!");
        assert!(matches!(first.submit_comment(Utc::now()), SubmitOutcome::Published(_)));

        assert_eq!(feed.card(0).unwrap().thread.comments().len(), 2);
        assert_eq!(feed.card(1).unwrap().thread.comments().len(), 1);
    }
}
