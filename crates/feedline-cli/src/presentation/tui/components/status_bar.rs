use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Bottom bar: focus mode, post position and the last status message.
pub struct StatusBarView<'a> {
    mode: &'a str,
    position: (usize, usize),
    message: Option<&'a str>,
}

impl<'a> StatusBarView<'a> {
    pub fn new(mode: &'a str, position: (usize, usize), message: Option<&'a str>) -> Self {
        Self {
            mode,
            position,
            message,
        }
    }
}

impl Widget for StatusBarView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::TOP);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(inner);

        let (current, total) = self.position;
        let mut status = vec![
            Span::styled(format!("{} ", self.mode), Style::default().fg(Color::Cyan)),
            Span::raw("| "),
            Span::raw(format!("Post {}/{} ", current, total)),
        ];
        if let Some(message) = self.message {
            status.push(Span::raw("| "));
            status.push(Span::styled(message, Style::default().fg(Color::Green)));
        }
        Paragraph::new(Line::from(status)).render(chunks[0], buf);

        let help = Line::from(vec![
            Span::styled("[q]", Style::default().fg(Color::Yellow)),
            Span::raw(" sair "),
            Span::styled("[j/k]", Style::default().fg(Color::Yellow)),
            Span::raw(" mover "),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" voltar"),
        ]);
        Paragraph::new(help).render(chunks[1], buf);
    }
}
