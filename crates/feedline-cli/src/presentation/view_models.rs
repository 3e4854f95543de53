use feedline_engine::ContentLine;
use feedline_types::{AvatarStyle, CommentId};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedViewModel {
    pub title: String,
    pub viewer: ProfileViewModel,
    pub posts: Vec<PostViewModel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileViewModel {
    pub name: String,
    pub role: String,
    pub initials: String,
    pub avatar_url: String,
    pub avatar: AvatarStyle,
}

/// Two renderings of one instant: visible relative text plus the absolute
/// tooltip and machine-readable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimestampViewModel {
    pub relative: String,
    pub title: String,
    pub datetime: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostViewModel {
    pub id: u64,
    pub author: ProfileViewModel,
    pub published: TimestampViewModel,
    pub lines: Vec<ContentLine>,
    pub form: CommentFormViewModel,
    pub comments: Vec<CommentViewModel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentFormViewModel {
    pub draft: String,
    pub can_publish: bool,
    pub validation_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentViewModel {
    pub id: CommentId,
    pub author: ProfileViewModel,
    pub created: TimestampViewModel,
    pub text: String,
    pub likes: u32,
}
