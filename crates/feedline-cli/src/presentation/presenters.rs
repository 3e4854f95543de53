use super::APP_TITLE;
use super::view_models::{
    CommentFormViewModel, CommentViewModel, FeedViewModel, PostViewModel, ProfileViewModel,
    TimestampViewModel,
};
use chrono::{DateTime, FixedOffset, Utc};
use feedline_engine::dates::{format_published_absolute, format_relative_to, machine_readable};
use feedline_engine::{CommentEntry, Feed, PostCard, render_blocks};
use feedline_types::{Author, AvatarStyle};

pub fn build_feed_view_model(feed: &Feed, viewer: &Author, now: DateTime<Utc>) -> FeedViewModel {
    FeedViewModel {
        title: APP_TITLE.to_string(),
        viewer: build_profile(viewer, AvatarStyle::Bordered),
        posts: feed
            .cards()
            .iter()
            .map(|card| build_post_view_model(card, now))
            .collect(),
    }
}

pub fn build_post_view_model(card: &PostCard, now: DateTime<Utc>) -> PostViewModel {
    let thread = &card.thread;

    PostViewModel {
        id: card.post.id,
        author: build_profile(&card.post.author, AvatarStyle::Bordered),
        published: build_timestamp(&card.post.published_at, now),
        lines: render_blocks(&card.post.content),
        form: CommentFormViewModel {
            draft: thread.draft().to_string(),
            can_publish: !thread.is_draft_empty(),
            validation_message: thread.validation_message().map(str::to_string),
        },
        comments: thread
            .comments()
            .iter()
            .map(|comment| build_comment_view_model(comment, now))
            .collect(),
    }
}

fn build_comment_view_model(comment: &CommentEntry, now: DateTime<Utc>) -> CommentViewModel {
    CommentViewModel {
        id: comment.id,
        author: build_profile(&comment.author, AvatarStyle::Plain),
        created: build_timestamp(&comment.created_at.fixed_offset(), now),
        text: comment.text.clone(),
        likes: comment.likes,
    }
}

fn build_profile(author: &Author, avatar: AvatarStyle) -> ProfileViewModel {
    ProfileViewModel {
        name: author.name.clone(),
        role: author.role.clone(),
        initials: author.initials(),
        avatar_url: author.avatar_url.clone(),
        avatar,
    }
}

fn build_timestamp(at: &DateTime<FixedOffset>, now: DateTime<Utc>) -> TimestampViewModel {
    TimestampViewModel {
        relative: format_relative_to(at, now),
        title: format_published_absolute(at),
        datetime: machine_readable(at),
    }
}
