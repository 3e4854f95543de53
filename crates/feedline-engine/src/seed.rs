//! Built-in posts shown when no feed file is configured.

use chrono::{DateTime, FixedOffset};
use feedline_types::{Author, ContentBlock, Post};

const DEFAULT_AVATAR_URL: &str = "https://avatars.githubusercontent.com/u/71530159?v=4";

/// Profile used for the sidebar and for comments written during the run.
pub fn default_viewer() -> Author {
    Author {
        name: "Gabriel Brito".to_string(),
        role: "Web Developer".to_string(),
        avatar_url: DEFAULT_AVATAR_URL.to_string(),
    }
}

pub fn seed_posts() -> Vec<Post> {
    vec![
        doctorcare_post(1, "2022-08-06T20:00:00-03:00"),
        doctorcare_post(2, "2022-08-05T20:00:00-03:00"),
    ]
}

fn doctorcare_post(id: u64, published_at: &str) -> Post {
    Post {
        id,
        author: Author {
            name: "Gabriel Brito Oliveira".to_string(),
            role: "Web Developer".to_string(),
            avatar_url: DEFAULT_AVATAR_URL.to_string(),
        },
        content: vec![
            ContentBlock::paragraph("Fala galeraa"),
            ContentBlock::paragraph(
                "Acabei de subir mais um projeto no meu portifa. É um projeto que fiz no NLW Return, evento da Rocketseat. O nome do projeto é DoctorCare 🚀",
            ),
            ContentBlock::link("jane.design/doctorcare"),
        ],
        published_at: fixed(published_at),
    }
}

fn fixed(rfc3339: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(rfc3339).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_posts_are_newest_first() {
        let posts = seed_posts();
        assert_eq!(posts.len(), 2);
        assert!(posts[0].published_at > posts[1].published_at);
        assert_eq!(posts[0].published_at.to_rfc3339(), "2022-08-06T20:00:00-03:00");
    }
}
