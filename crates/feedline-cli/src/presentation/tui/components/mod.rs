//! TUI view components.
//!
//! Each component borrows a view model and maps it to ratatui lines or a
//! `Widget`. No state changes happen here.

pub mod avatar;
pub mod comment;
pub mod header;
pub mod post;
pub mod sidebar;
pub mod status_bar;

pub use avatar::AvatarView;
pub use comment::CommentView;
pub use header::HeaderView;
pub use post::{PostFocus, PostView};
pub use sidebar::SidebarView;
pub use status_bar::StatusBarView;

/// Word wrap on character counts that keeps every character of `text`.
///
/// Whitespace runs are never collapsed. A run that follows a word hangs at the
/// end of that line, the way a browser textarea wraps. Words longer than
/// `width` are split. Newlines start a new line and are not emitted.
pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph, width, &mut lines);
    }
    lines
}

fn wrap_paragraph(text: &str, width: usize, lines: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_len = 0;
    let mut has_word = false;

    for token in tokens(text) {
        let token_len = token.chars().count();

        if token.starts_with(char::is_whitespace) {
            if has_word {
                current.push_str(token);
                current_len += token_len;
                continue;
            }
            for c in token.chars() {
                if current_len == width {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                current.push(c);
                current_len += 1;
            }
            continue;
        }

        if current_len + token_len <= width {
            current.push_str(token);
            current_len += token_len;
            has_word = true;
            continue;
        }

        if current_len > 0 {
            lines.push(std::mem::take(&mut current));
        }
        let mut chars: Vec<char> = token.chars().collect();
        while chars.len() > width {
            lines.push(chars.drain(..width).collect());
        }
        current_len = chars.len();
        current = chars.into_iter().collect();
        has_word = true;
    }

    lines.push(current);
}

/// Alternating runs of whitespace and non-whitespace.
fn tokens(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_space = None;

    for (index, c) in text.char_indices() {
        let space = c.is_whitespace();
        if in_space.is_some_and(|previous| previous != space) {
            tokens.push(&text[start..index]);
            start = index;
        }
        in_space = Some(space);
    }
    if start < text.len() {
        tokens.push(&text[start..]);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::wrap_text;

    #[test]
    fn test_wrap_text_breaks_on_words() {
        assert_eq!(
            wrap_text("Fala galeraa tudo bem", 12),
            vec!["Fala galeraa ", "tudo bem"]
        );
    }

    #[test]
    fn test_wrap_text_splits_long_words() {
        assert_eq!(wrap_text("abcdefgh ij", 3), vec!["abc", "def", "gh ", "ij"]);
    }

    #[test]
    fn test_wrap_text_keeps_trailing_and_repeated_spaces() {
        assert_eq!(wrap_text("Nice ", 75), vec!["Nice "]);
        assert_eq!(wrap_text("a   b", 75), vec!["a   b"]);
        assert_eq!(wrap_text("   ", 10), vec!["   "]);
    }

    #[test]
    fn test_wrap_text_chunks_whitespace_only_input() {
        assert_eq!(wrap_text("     ", 2), vec!["  ", "  ", " "]);
    }

    #[test]
    fn test_wrap_text_loses_no_characters() {
        for text in ["Fala  galeraa,   tudo bem? ", "  x", "abcdefghijkl  mn", "", "ção é  ok"] {
            for width in 1..8 {
                assert_eq!(wrap_text(text, width).concat(), text, "width {width}");
            }
        }
    }

    #[test]
    fn test_wrap_text_newlines_start_new_lines() {
        assert_eq!(wrap_text("um\ndois", 20), vec!["um", "dois"]);
    }
}
