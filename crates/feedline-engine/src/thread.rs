use chrono::{DateTime, Utc};
use feedline_types::{Author, CommentId};
use serde::Serialize;

/// Comment every thread starts with.
pub const PLACEHOLDER_COMMENT: &str = "Post muito bacana, hein!";

/// Message shown when the comment form is submitted empty.
pub const REQUIRED_FIELD_MESSAGE: &str = "Esse campo é obrigatório!";

/// One submitted comment and its like counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentEntry {
    pub id: CommentId,
    pub text: String,
    pub likes: u32,
    pub author: Author,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Published(CommentId),
    /// Draft was empty; comments are unchanged and the validation message is set.
    Rejected,
}

/// Comment list and pending draft owned by a single post.
///
/// Comments keep insertion order and only leave the list through an explicit
/// delete. Ids come from a counter that never goes backwards, so a deleted
/// comment's id is never handed out again.
#[derive(Debug, Clone)]
pub struct PostThread {
    comments: Vec<CommentEntry>,
    draft: String,
    validation_message: Option<&'static str>,
    commenter: Author,
    next_id: u64,
}

impl PostThread {
    /// New thread seeded with [`PLACEHOLDER_COMMENT`].
    pub fn new(commenter: Author, seeded_at: DateTime<Utc>) -> Self {
        let mut thread = Self::empty(commenter);
        thread.push(PLACEHOLDER_COMMENT.to_string(), seeded_at);
        thread
    }

    fn empty(commenter: Author) -> Self {
        Self {
            comments: Vec::new(),
            draft: String::new(),
            validation_message: None,
            commenter,
            next_id: 1,
        }
    }

    pub fn comments(&self) -> &[CommentEntry] {
        &self.comments
    }

    pub fn comment(&self, id: CommentId) -> Option<&CommentEntry> {
        self.comments.iter().find(|c| c.id == id)
    }

    pub fn texts(&self) -> Vec<&str> {
        self.comments.iter().map(|c| c.text.as_str()).collect()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn validation_message(&self) -> Option<&str> {
        self.validation_message
    }

    /// Whether the publish control is disabled.
    pub fn is_draft_empty(&self) -> bool {
        self.draft.is_empty()
    }

    /// Replace the draft with the editor's current value.
    pub fn update_draft(&mut self, value: impl Into<String>) {
        self.validation_message = None;
        self.draft = value.into();
    }

    pub fn reject_empty_submit(&mut self) {
        self.validation_message = Some(REQUIRED_FIELD_MESSAGE);
    }

    /// Publish the draft as a new comment at the end of the list.
    pub fn submit_comment(&mut self, at: DateTime<Utc>) -> SubmitOutcome {
        if self.is_draft_empty() {
            self.reject_empty_submit();
            tracing::debug!("rejected empty comment submit");
            return SubmitOutcome::Rejected;
        }

        let text = std::mem::take(&mut self.draft);
        let id = self.push(text, at);
        tracing::info!(comment = %id, "comment published");
        SubmitOutcome::Published(id)
    }

    /// Remove the comment with `id`. Returns false if no such comment exists.
    pub fn delete_comment(&mut self, id: CommentId) -> bool {
        let before = self.comments.len();
        self.comments.retain(|c| c.id != id);
        let removed = self.comments.len() != before;
        if removed {
            tracing::info!(comment = %id, "comment deleted");
        }
        removed
    }

    /// Remove every comment whose text equals `text`, keeping the rest in order.
    pub fn delete_comments_matching(&mut self, text: &str) -> usize {
        let before = self.comments.len();
        self.comments.retain(|c| c.text != text);
        let removed = before - self.comments.len();
        tracing::info!(removed, "comments deleted by text");
        removed
    }

    /// Add one like to the comment with `id` and return the new count.
    pub fn like(&mut self, id: CommentId) -> Option<u32> {
        let entry = self.comments.iter_mut().find(|c| c.id == id)?;
        entry.likes = entry.likes.saturating_add(1);
        tracing::debug!(comment = %id, likes = entry.likes, "comment liked");
        Some(entry.likes)
    }

    fn push(&mut self, text: String, at: DateTime<Utc>) -> CommentId {
        let id = CommentId(self.next_id);
        self.next_id += 1;
        self.comments.push(CommentEntry {
            id,
            text,
            likes: 0,
            author: self.commenter.clone(),
            created_at: at,
        });
        id
    }
}
