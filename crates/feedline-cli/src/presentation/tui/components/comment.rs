use super::AvatarView;
use super::wrap_text;
use crate::presentation::view_models::CommentViewModel;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const TEXT_INDENT: &str = "      ";

/// One comment row: plain avatar, author, time, text and like counter.
pub struct CommentView<'a> {
    model: &'a CommentViewModel,
    selected: bool,
}

impl<'a> CommentView<'a> {
    pub fn new(model: &'a CommentViewModel, selected: bool) -> Self {
        Self { model, selected }
    }

    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let model = self.model;
        let gutter = if self.selected {
            Span::styled("▌", Style::default().fg(Color::Yellow))
        } else {
            Span::raw(" ")
        };
        let dim = Style::default().fg(Color::DarkGray);

        let mut header = vec![gutter.clone()];
        header.extend(AvatarView::new(&model.author.initials, model.author.avatar).lines().remove(0).spans);
        header.push(Span::raw(" "));
        header.push(Span::styled(
            model.author.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        header.push(Span::styled(format!(" · {}", model.created.relative), dim));
        header.push(Span::styled("  [d] Deletar comentário", dim));

        let mut lines = vec![Line::from(header)];

        let text_width = (width as usize).saturating_sub(TEXT_INDENT.len() + 1);
        for row in wrap_text(&model.text, text_width) {
            lines.push(Line::from(vec![
                gutter.clone(),
                Span::raw(TEXT_INDENT),
                Span::raw(row),
            ]));
        }

        let like_style = if model.likes > 0 {
            Style::default().fg(Color::Green)
        } else {
            dim
        };
        lines.push(Line::from(vec![
            gutter,
            Span::raw(TEXT_INDENT),
            Span::styled(format!("[l] Aplaudir {}", model.likes), like_style),
        ]));

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{ProfileViewModel, TimestampViewModel};
    use feedline_types::{AvatarStyle, CommentId};

    fn model(likes: u32) -> CommentViewModel {
        CommentViewModel {
            id: CommentId(1),
            author: ProfileViewModel {
                name: "Gabriel Brito".to_string(),
                role: "Web Developer".to_string(),
                initials: "GB".to_string(),
                avatar_url: String::new(),
                avatar: AvatarStyle::Plain,
            },
            created: TimestampViewModel {
                relative: "há 5 minutos".to_string(),
                title: "6 de agosto às 20:00h".to_string(),
                datetime: "2022-08-06T20:00:00-03:00".to_string(),
            },
            text: "Post muito bacana, hein!".to_string(),
            likes,
        }
    }

    fn rows(view: &CommentView) -> Vec<String> {
        view.lines(60)
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_comment_lines() {
        let model = model(3);
        let rows = rows(&CommentView::new(&model, false));
        assert_eq!(rows.len(), 3);
        assert!(rows[0].contains("Gabriel Brito · há 5 minutos"));
        assert!(rows[1].ends_with("Post muito bacana, hein!"));
        assert!(rows[2].ends_with("[l] Aplaudir 3"));
    }

    #[test]
    fn test_selected_comment_has_gutter() {
        let model = model(0);
        let rows = rows(&CommentView::new(&model, true));
        assert!(rows.iter().all(|r| r.starts_with('▌')));
    }
}
