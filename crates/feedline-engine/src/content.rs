use feedline_types::ContentBlock;
use serde::Serialize;

/// A renderable line of a post body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentLine {
    Text { text: String },
    Link { text: String, href: String },
}

impl ContentLine {
    pub fn text(&self) -> &str {
        match self {
            ContentLine::Text { text } | ContentLine::Link { text, .. } => text,
        }
    }
}

/// Map content blocks to display lines. Unknown blocks produce nothing.
pub fn render_blocks(blocks: &[ContentBlock]) -> Vec<ContentLine> {
    blocks.iter().filter_map(render_block).collect()
}

fn render_block(block: &ContentBlock) -> Option<ContentLine> {
    match block {
        ContentBlock::Paragraph { content } => Some(ContentLine::Text {
            text: content.clone(),
        }),
        ContentBlock::Link { content } => Some(ContentLine::Link {
            text: content.clone(),
            href: link_target(content),
        }),
        ContentBlock::Unknown => None,
    }
}

fn link_target(text: &str) -> String {
    if text.contains("://") {
        text.to_string()
    } else {
        format!("https://{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_wraps_literal_text() {
        let lines = render_blocks(&[ContentBlock::link("example.com/x")]);
        assert_eq!(
            lines,
            vec![ContentLine::Link {
                text: "example.com/x".to_string(),
                href: "https://example.com/x".to_string(),
            }]
        );
        assert_eq!(lines[0].text(), "example.com/x");
    }

    #[test]
    fn test_link_with_scheme_is_kept() {
        let lines = render_blocks(&[ContentBlock::link("http://a.b")]);
        assert!(matches!(&lines[0], ContentLine::Link { href, .. } if href == "http://a.b"));
    }

    #[test]
    fn test_unknown_blocks_render_nothing() {
        let lines = render_blocks(&[
            ContentBlock::paragraph("Fala galeraa"),
            ContentBlock::Unknown,
            ContentBlock::link("jane.design/doctorcare"),
        ]);
        let texts: Vec<&str> = lines.iter().map(ContentLine::text).collect();
        assert_eq!(texts, vec!["Fala galeraa", "jane.design/doctorcare"]);
    }
}
