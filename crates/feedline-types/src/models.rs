use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Person shown in a post header or a comment row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub role: String,
    pub avatar_url: String,
}

impl Author {
    /// Up to two uppercase initials taken from the first and last words of the name.
    pub fn initials(&self) -> String {
        let mut words = self.name.split_whitespace();
        let first = words.next().and_then(|w| w.chars().next());
        let last = words.last().and_then(|w| w.chars().next());

        first
            .into_iter()
            .chain(last)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// One unit of a post body.
///
/// Serialized as `{"type": "paragraph", "content": "..."}`. Any `type` other
/// than `paragraph` or `link` becomes [`ContentBlock::Unknown`], which renders
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Paragraph {
        content: String,
    },
    Link {
        content: String,
    },
    #[serde(other)]
    Unknown,
}

impl ContentBlock {
    pub fn paragraph(text: impl Into<String>) -> Self {
        ContentBlock::Paragraph {
            content: text.into(),
        }
    }

    pub fn link(text: impl Into<String>) -> Self {
        ContentBlock::Link {
            content: text.into(),
        }
    }
}

/// A feed entry. Immutable for the lifetime of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub author: Author,
    pub content: Vec<ContentBlock>,
    pub published_at: DateTime<FixedOffset>,
}

/// Identifier of a comment, unique within the thread that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(pub u64);

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Visual style of an avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvatarStyle {
    #[default]
    Bordered,
    Plain,
}

impl AvatarStyle {
    pub fn from_has_border(has_border: bool) -> Self {
        if has_border {
            AvatarStyle::Bordered
        } else {
            AvatarStyle::Plain
        }
    }

    pub fn has_border(self) -> bool {
        matches!(self, AvatarStyle::Bordered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author(name: &str) -> Author {
        Author {
            name: name.to_string(),
            role: "Web Developer".to_string(),
            avatar_url: String::new(),
        }
    }

    #[test]
    fn test_initials_first_and_last_word() {
        assert_eq!(author("Gabriel Brito Oliveira").initials(), "GO");
        assert_eq!(author("ana").initials(), "A");
        assert_eq!(author("   ").initials(), "");
    }

    #[test]
    fn test_content_block_known_kinds() {
        let json = r#"[
            {"type": "paragraph", "content": "Fala galeraa"},
            {"type": "link", "content": "jane.design/doctorcare"}
        ]"#;
        let blocks: Vec<ContentBlock> = serde_json::from_str(json).unwrap();
        assert_eq!(
            blocks,
            vec![
                ContentBlock::paragraph("Fala galeraa"),
                ContentBlock::link("jane.design/doctorcare"),
            ]
        );
    }

    #[test]
    fn test_content_block_unknown_kind_is_tolerated() {
        let json = r#"{"type": "video", "content": "clip.mp4"}"#;
        let block: ContentBlock = serde_json::from_str(json).unwrap();
        assert_eq!(block, ContentBlock::Unknown);
    }

    #[test]
    fn test_avatar_style_defaults_to_bordered() {
        assert_eq!(AvatarStyle::default(), AvatarStyle::Bordered);
        assert!(AvatarStyle::from_has_border(true).has_border());
        assert!(!AvatarStyle::from_has_border(false).has_border());
    }
}
