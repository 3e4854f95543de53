//! Behavior behind the feed: per-post comment threads, pt-BR date
//! formatting, content-block rendering and feed assembly.

pub mod content;
pub mod dates;
pub mod error;
pub mod feed;
pub mod seed;
pub mod thread;

pub use content::{ContentLine, render_blocks};
pub use error::{Error, Result};
pub use feed::{Feed, PostCard, load_posts};
pub use thread::{CommentEntry, PLACEHOLDER_COMMENT, PostThread, REQUIRED_FIELD_MESSAGE, SubmitOutcome};
