use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use feedline_engine::{Feed, PostThread, SubmitOutcome};
use feedline_types::Author;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Feed,
    Comments,
    Draft,
}

impl Focus {
    pub fn label(self) -> &'static str {
        match self {
            Focus::Feed => "FEED",
            Focus::Comments => "COMENTÁRIOS",
            Focus::Draft => "ESCREVENDO",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Everything the TUI shows, plus the keyboard cursor.
pub struct AppState {
    feed: Feed,
    viewer: Author,
    focus: Focus,
    selected_post: usize,
    selected_comment: usize,
    status: Option<String>,
}

impl AppState {
    pub fn new(feed: Feed, viewer: Author) -> Self {
        Self {
            feed,
            viewer,
            focus: Focus::Feed,
            selected_post: 0,
            selected_comment: 0,
            status: None,
        }
    }

    pub fn feed(&self) -> &Feed {
        &self.feed
    }

    pub fn viewer(&self) -> &Author {
        &self.viewer
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn selected_post(&self) -> usize {
        self.selected_post
    }

    pub fn selected_comment(&self) -> usize {
        self.selected_comment
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: DateTime<Utc>) -> Control {
        if key.kind != KeyEventKind::Press {
            return Control::Continue;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Control::Quit;
        }

        match self.focus {
            Focus::Feed => self.handle_feed_key(key),
            Focus::Comments => self.handle_comments_key(key),
            Focus::Draft => self.handle_draft_key(key, now),
        }
    }

    fn handle_feed_key(&mut self, key: KeyEvent) -> Control {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Down | KeyCode::Char('j') => self.select_post(1),
            KeyCode::Up | KeyCode::Char('k') => self.select_post(-1),
            KeyCode::Char('c') | KeyCode::Tab => self.enter_comments(),
            KeyCode::Char('i') => self.enter_draft(),
            _ => {}
        }
        Control::Continue
    }

    fn handle_comments_key(&mut self, key: KeyEvent) -> Control {
        match key.code {
            KeyCode::Esc => self.focus = Focus::Feed,
            KeyCode::Char('q') => return Control::Quit,
            KeyCode::Down | KeyCode::Char('j') => self.select_comment(1),
            KeyCode::Up | KeyCode::Char('k') => self.select_comment(-1),
            KeyCode::Char('i') => self.enter_draft(),
            KeyCode::Char('l') => self.like_selected(),
            KeyCode::Char('d') => self.delete_selected(),
            _ => {}
        }
        Control::Continue
    }

    fn handle_draft_key(&mut self, key: KeyEvent, now: DateTime<Utc>) -> Control {
        let Some(thread) = self.thread_mut() else {
            self.focus = Focus::Feed;
            return Control::Continue;
        };

        match key.code {
            KeyCode::Esc => self.focus = Focus::Feed,
            KeyCode::Enter => {
                let outcome = thread.submit_comment(now);
                self.status = match outcome {
                    SubmitOutcome::Published(_) => Some("Comentário publicado".to_string()),
                    SubmitOutcome::Rejected => None,
                };
            }
            KeyCode::Backspace => {
                let mut draft = thread.draft().to_string();
                draft.pop();
                thread.update_draft(draft);
            }
            KeyCode::Char(c) => {
                let mut draft = thread.draft().to_string();
                draft.push(c);
                thread.update_draft(draft);
            }
            _ => {}
        }
        Control::Continue
    }

    fn select_post(&mut self, delta: isize) {
        if self.feed.is_empty() {
            return;
        }
        self.selected_post = step(self.selected_post, delta, self.feed.len());
        self.selected_comment = 0;
    }

    fn select_comment(&mut self, delta: isize) {
        let count = self.comment_count();
        if count > 0 {
            self.selected_comment = step(self.selected_comment, delta, count);
        }
    }

    fn enter_comments(&mut self) {
        if self.comment_count() == 0 {
            self.status = Some("Nenhum comentário".to_string());
            return;
        }
        self.selected_comment = self.selected_comment.min(self.comment_count() - 1);
        self.focus = Focus::Comments;
    }

    fn enter_draft(&mut self) {
        if self.feed.is_empty() {
            return;
        }
        self.focus = Focus::Draft;
    }

    fn like_selected(&mut self) {
        let index = self.selected_comment;
        if let Some(thread) = self.thread_mut()
            && let Some(id) = thread.comments().get(index).map(|c| c.id)
        {
            thread.like(id);
        }
    }

    fn delete_selected(&mut self) {
        let index = self.selected_comment;
        let Some(thread) = self.thread_mut() else {
            return;
        };
        let Some(id) = thread.comments().get(index).map(|c| c.id) else {
            return;
        };

        if thread.delete_comment(id) {
            self.status = Some("Comentário removido".to_string());
        }

        let remaining = self.comment_count();
        if remaining == 0 {
            self.selected_comment = 0;
            self.focus = Focus::Feed;
        } else {
            self.selected_comment = self.selected_comment.min(remaining - 1);
        }
    }

    fn comment_count(&self) -> usize {
        self.feed
            .card(self.selected_post)
            .map(|card| card.thread.comments().len())
            .unwrap_or(0)
    }

    fn thread_mut(&mut self) -> Option<&mut PostThread> {
        self.feed
            .card_mut(self.selected_post)
            .map(|card| &mut card.thread)
    }
}

/// Move `current` by `delta`, clamped to `0..len`.
fn step(current: usize, delta: isize, len: usize) -> usize {
    let next = current as isize + delta;
    next.clamp(0, len as isize - 1) as usize
}
