use chrono::{DateTime, Utc};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use super::app::{AppState, Focus};
use super::components::{HeaderView, PostFocus, PostView, SidebarView, StatusBarView};
use crate::presentation::presenters::build_feed_view_model;

const SIDEBAR_WIDTH: u16 = 26;

pub(crate) fn draw(f: &mut Frame, state: &AppState, now: DateTime<Utc>) {
    let feed = build_feed_view_model(state.feed(), state.viewer(), now);

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(f.area());

    f.render_widget(HeaderView::new(&feed.title), main_chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(main_chunks[1]);

    f.render_widget(SidebarView::new(&feed.viewer), body[0]);

    // Posts above the selected one scroll off the top; the selected one
    // scrolls internally to keep its focused comment or form visible.
    let area = body[1];
    let mut y = area.y;
    for (index, post) in feed.posts.iter().enumerate().skip(state.selected_post()) {
        let remaining = area.bottom().saturating_sub(y);
        if remaining == 0 {
            break;
        }

        let mut view = PostView::new(post);
        let selected = index == state.selected_post();
        if selected {
            view = view.focused(match state.focus() {
                Focus::Feed => PostFocus::Header,
                Focus::Comments => PostFocus::Comment(state.selected_comment()),
                Focus::Draft => PostFocus::Draft,
            });
        }

        let height = view.height(area.width).min(remaining);
        if selected {
            view = view.scrolled_to_focus(area.width, height);
        }
        f.render_widget(view, Rect::new(area.x, y, area.width, height));
        y = y.saturating_add(height).saturating_add(1);
    }

    let position = if feed.posts.is_empty() {
        (0, 0)
    } else {
        (state.selected_post() + 1, feed.posts.len())
    };
    f.render_widget(
        StatusBarView::new(state.focus().label(), position, state.status()),
        main_chunks[2],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedline_engine::Feed;
    use feedline_engine::seed::default_viewer;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2022-08-06T21:00:00-03:00")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn render(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 40)).unwrap();
        terminal.draw(|f| draw(f, state, now())).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_draw_shows_chrome_and_first_post() {
        let viewer = default_viewer();
        let state = AppState::new(Feed::seeded(&viewer, now()), viewer);

        let screen = render(&state);

        assert!(screen.contains("Ignite Feed"));
        assert!(screen.contains("Editar seu perfil"));
        assert!(screen.contains("Gabriel Brito Oliveira"));
        assert!(screen.contains("Fala galeraa"));
        assert!(screen.contains("Deixe seu feedback"));
        assert!(screen.contains("Post 1/2"));
    }

    #[test]
    fn test_selected_comment_stays_visible_in_long_thread() {
        use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

        let viewer = default_viewer();
        let mut state = AppState::new(Feed::seeded(&viewer, now()), viewer);
        let press = |state: &mut AppState, code: KeyCode| {
            state.handle_key(KeyEvent::new(code, KeyModifiers::NONE), now());
        };

        press(&mut state, KeyCode::Char('i'));
        for n in 0..10 {
            for c in format!("comentario {}", n).chars() {
                press(&mut state, KeyCode::Char(c));
            }
            press(&mut state, KeyCode::Enter);
        }
        press(&mut state, KeyCode::Esc);
        press(&mut state, KeyCode::Char('c'));
        for _ in 0..10 {
            press(&mut state, KeyCode::Char('j'));
        }
        assert_eq!(state.selected_comment(), 10);

        let screen = render(&state);
        let selected_row = screen
            .lines()
            .find(|line| line.contains("comentario 9"))
            .expect("last comment is on screen");
        assert!(selected_row.contains('▌'));
        assert!(!screen.contains("comentario 0"));
    }

    #[test]
    fn test_draw_tiny_terminal_does_not_panic() {
        let viewer = default_viewer();
        let state = AppState::new(Feed::seeded(&viewer, now()), viewer);
        let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();
        terminal.draw(|f| draw(f, &state, now())).unwrap();
    }
}
