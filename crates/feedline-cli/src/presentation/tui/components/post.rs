use super::{AvatarView, CommentView, wrap_text};
use crate::presentation::view_models::PostViewModel;
use feedline_engine::ContentLine;
use std::ops::Range;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const DRAFT_PLACEHOLDER: &str = "Deixe um comentário";

/// Which part of the selected post has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostFocus {
    Header,
    Comment(usize),
    Draft,
}

/// A full post card: author header, body, comment form and comment list.
pub struct PostView<'a> {
    model: &'a PostViewModel,
    focus: Option<PostFocus>,
    scroll: u16,
}

/// Rendered lines plus where the form and each comment landed.
struct PostLayout {
    lines: Vec<Line<'static>>,
    form: Range<usize>,
    comments: Vec<Range<usize>>,
}

impl<'a> PostView<'a> {
    pub fn new(model: &'a PostViewModel) -> Self {
        Self {
            model,
            focus: None,
            scroll: 0,
        }
    }

    pub fn focused(mut self, focus: PostFocus) -> Self {
        self.focus = Some(focus);
        self
    }

    /// Rows needed to draw the card at `width`, borders included.
    pub fn height(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(2);
        (self.lines(inner).len() as u16).saturating_add(2)
    }

    /// Inner line range of the focused comment or of the comment form.
    pub fn focus_range(&self, inner_width: u16) -> Option<Range<usize>> {
        let layout = self.layout(inner_width);
        match self.focus? {
            PostFocus::Header => None,
            PostFocus::Draft => Some(layout.form),
            PostFocus::Comment(index) => layout.comments.get(index).cloned(),
        }
    }

    /// Scroll the card so the focused block fits in `height` rows (borders included).
    pub fn scrolled_to_focus(mut self, width: u16, height: u16) -> Self {
        let visible = height.saturating_sub(2) as usize;
        self.scroll = match self.focus_range(width.saturating_sub(2)) {
            Some(range) => range.end.saturating_sub(visible).min(range.start) as u16,
            None => 0,
        };
        self
    }

    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        self.layout(width).lines
    }

    fn layout(&self, width: u16) -> PostLayout {
        let model = self.model;
        let text_width = width.saturating_sub(2) as usize;
        let dim = Style::default().fg(Color::DarkGray);

        let mut lines = Vec::new();

        let avatar = AvatarView::new(&model.author.initials, model.author.avatar).lines();
        let beside = [
            Span::styled(
                model.author.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(model.author.role.clone(), dim),
            Span::styled(
                format!("{} ({})", model.published.relative, model.published.title),
                Style::default().fg(Color::Gray),
            ),
        ];
        for (row, label) in avatar.into_iter().zip(beside) {
            let mut spans = row.spans;
            spans.push(Span::raw(" "));
            spans.push(label);
            lines.push(Line::from(spans));
        }

        lines.push(Line::default());
        for content in &model.lines {
            match content {
                ContentLine::Text { text } => {
                    for row in wrap_text(text, text_width) {
                        lines.push(Line::from(format!(" {}", row)));
                    }
                }
                ContentLine::Link { text, .. } => {
                    for row in wrap_text(text, text_width) {
                        lines.push(Line::from(vec![
                            Span::raw(" "),
                            Span::styled(
                                row,
                                Style::default()
                                    .fg(Color::LightGreen)
                                    .add_modifier(Modifier::UNDERLINED),
                            ),
                        ]));
                    }
                }
            }
        }

        lines.push(Line::default());
        let form_start = lines.len();
        lines.extend(self.form_lines(text_width));
        let form = form_start..lines.len();

        let selected_comment = match self.focus {
            Some(PostFocus::Comment(index)) => Some(index),
            _ => None,
        };
        let mut comments = Vec::with_capacity(model.comments.len());
        for (index, comment) in model.comments.iter().enumerate() {
            lines.push(Line::default());
            let view = CommentView::new(comment, selected_comment == Some(index));
            let start = lines.len();
            lines.extend(view.lines(width));
            comments.push(start..lines.len());
        }

        PostLayout {
            lines,
            form,
            comments,
        }
    }

    fn form_lines(&self, text_width: usize) -> Vec<Line<'static>> {
        let form = &self.model.form;
        let editing = self.focus == Some(PostFocus::Draft);
        let mut lines = vec![Line::from(Span::styled(
            " Deixe seu feedback",
            Style::default().add_modifier(Modifier::BOLD),
        ))];

        let prompt_style = if editing {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let cursor = if editing { "▏" } else { "" };

        if form.draft.is_empty() {
            lines.push(Line::from(vec![
                Span::styled(" > ", prompt_style),
                Span::raw(cursor),
                Span::styled(DRAFT_PLACEHOLDER, Style::default().fg(Color::DarkGray)),
            ]));
        } else {
            let rows = wrap_text(&form.draft, text_width.saturating_sub(3));
            let last = rows.len() - 1;
            for (index, row) in rows.into_iter().enumerate() {
                let prefix = if index == 0 { " > " } else { "   " };
                let mut spans = vec![Span::styled(prefix, prompt_style), Span::raw(row)];
                if index == last {
                    spans.push(Span::raw(cursor));
                }
                lines.push(Line::from(spans));
            }
        }

        let publish = if form.can_publish {
            Span::styled(
                " [Enter] Publicar ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(" [Enter] Publicar ", Style::default().fg(Color::DarkGray))
        };
        let mut footer = vec![Span::raw(" "), publish];
        if let Some(message) = &form.validation_message {
            footer.push(Span::styled(
                format!("  {}", message),
                Style::default().fg(Color::Red),
            ));
        }
        lines.push(Line::from(footer));

        lines
    }
}

impl Widget for PostView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.focus.is_some() {
            Color::Green
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(self.lines(inner.width))
            .scroll((self.scroll, 0))
            .render(inner, buf);
    }
}
