use feedline_types::AvatarStyle;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Initials badge standing in for the profile picture.
///
/// `Bordered` draws a three-row box, `Plain` a single inverted cell run.
pub struct AvatarView<'a> {
    initials: &'a str,
    style: AvatarStyle,
}

impl<'a> AvatarView<'a> {
    pub fn new(initials: &'a str, style: AvatarStyle) -> Self {
        Self { initials, style }
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let label = format!("{:^2}", self.initials);
        match self.style {
            AvatarStyle::Bordered => {
                let border = Style::default().fg(Color::Green);
                let initials = Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD);
                vec![
                    Line::from(Span::styled("╭────╮", border)),
                    Line::from(vec![
                        Span::styled("│ ", border),
                        Span::styled(label, initials),
                        Span::styled(" │", border),
                    ]),
                    Line::from(Span::styled("╰────╯", border)),
                ]
            }
            AvatarStyle::Plain => vec![Line::from(Span::styled(
                format!(" {} ", label),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Gray)
                    .add_modifier(Modifier::BOLD),
            ))],
        }
    }
}
