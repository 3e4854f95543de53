use super::AvatarView;
use crate::presentation::view_models::ProfileViewModel;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Viewer profile and key bindings.
pub struct SidebarView<'a> {
    viewer: &'a ProfileViewModel,
}

impl<'a> SidebarView<'a> {
    pub fn new(viewer: &'a ProfileViewModel) -> Self {
        Self { viewer }
    }
}

impl Widget for SidebarView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        let key = Style::default().fg(Color::Yellow);
        let mut lines: Vec<Line> = AvatarView::new(&self.viewer.initials, self.viewer.avatar)
            .lines()
            .into_iter()
            .map(|line| line.centered())
            .collect();

        lines.extend([
            Line::default(),
            Line::from(Span::styled(
                self.viewer.name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .centered(),
            Line::from(Span::styled(
                self.viewer.role.as_str(),
                Style::default().fg(Color::DarkGray),
            ))
            .centered(),
            Line::default(),
            Line::from(Span::styled(
                "[ Editar seu perfil ]",
                Style::default().fg(Color::Green),
            ))
            .centered(),
            Line::default(),
            Line::from(vec![Span::styled("j/k ", key), Span::raw("navegar")]),
            Line::from(vec![Span::styled("c   ", key), Span::raw("comentários")]),
            Line::from(vec![Span::styled("i   ", key), Span::raw("escrever")]),
            Line::from(vec![Span::styled("l   ", key), Span::raw("aplaudir")]),
            Line::from(vec![Span::styled("d   ", key), Span::raw("deletar")]),
            Line::from(vec![Span::styled("Esc ", key), Span::raw("voltar")]),
            Line::from(vec![Span::styled("q   ", key), Span::raw("sair")]),
        ]);

        Paragraph::new(lines).render(inner, buf);
    }
}
