use super::view_models::{CommentViewModel, FeedViewModel, PostViewModel};
use feedline_engine::ContentLine;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::fmt;

const RULE_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleOptions {
    pub enable_color: bool,
    /// Wrap links in OSC 8 escapes so terminals make them clickable.
    pub hyperlinks: bool,
}

impl ConsoleOptions {
    pub fn detect() -> Self {
        let tty = std::io::stdout().is_terminal();
        Self {
            enable_color: tty,
            hyperlinks: tty,
        }
    }
}

pub fn render_feed(feed: &FeedViewModel, options: ConsoleOptions) -> String {
    FeedView { feed, options }.to_string()
}

pub struct FeedView<'a> {
    pub feed: &'a FeedViewModel,
    pub options: ConsoleOptions,
}

impl fmt::Display for FeedView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let viewer = &self.feed.viewer;
        if self.options.enable_color {
            writeln!(f, "{}", self.feed.title.bold())?;
            writeln!(f, "{} · {}", viewer.name, viewer.role.dimmed())?;
        } else {
            writeln!(f, "{}", self.feed.title)?;
            writeln!(f, "{} · {}", viewer.name, viewer.role)?;
        }

        for post in &self.feed.posts {
            writeln!(f)?;
            writeln!(f, "{}", "─".repeat(RULE_WIDTH))?;
            write!(
                f,
                "{}",
                PostView {
                    post,
                    options: self.options
                }
            )?;
        }

        Ok(())
    }
}

struct PostView<'a> {
    post: &'a PostViewModel,
    options: ConsoleOptions,
}

impl fmt::Display for PostView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let post = self.post;
        let color = self.options.enable_color;

        if color {
            writeln!(
                f,
                "[{}] {} ({})",
                post.author.initials.green(),
                post.author.name.bold(),
                post.author.role.dimmed()
            )?;
            writeln!(
                f,
                "     {}  ({})",
                post.published.relative,
                post.published.title.dimmed()
            )?;
        } else {
            writeln!(
                f,
                "[{}] {} ({})",
                post.author.initials, post.author.name, post.author.role
            )?;
            writeln!(
                f,
                "     {}  ({})",
                post.published.relative, post.published.title
            )?;
        }

        writeln!(f)?;
        for line in &post.lines {
            match line {
                ContentLine::Text { text } => writeln!(f, "  {}", text)?,
                ContentLine::Link { text, href } => {
                    let label = if color {
                        text.green().underline().to_string()
                    } else {
                        text.clone()
                    };
                    if self.options.hyperlinks {
                        writeln!(f, "  {}", osc8_link(href, &label))?;
                    } else {
                        writeln!(f, "  {}", label)?;
                    }
                }
            }
        }

        writeln!(f)?;
        writeln!(f, "  Deixe seu feedback")?;
        let publish = if post.form.can_publish {
            "[Publicar]"
        } else {
            "[Publicar desabilitado]"
        };
        if post.form.draft.is_empty() {
            writeln!(f, "  > Deixe um comentário  {}", publish)?;
        } else {
            writeln!(f, "  > {}  {}", post.form.draft, publish)?;
        }
        if let Some(message) = &post.form.validation_message {
            writeln!(f, "  ! {}", message)?;
        }

        writeln!(f, "  Comentários ({})", post.comments.len())?;
        for comment in &post.comments {
            write!(
                f,
                "{}",
                CommentView {
                    comment,
                    enable_color: color
                }
            )?;
        }

        Ok(())
    }
}

struct CommentView<'a> {
    comment: &'a CommentViewModel,
    enable_color: bool,
}

impl fmt::Display for CommentView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let comment = self.comment;
        if self.enable_color {
            writeln!(
                f,
                "    {} {} · {}",
                comment.id.dimmed(),
                comment.author.name.bold(),
                comment.created.relative.dimmed()
            )?;
        } else {
            writeln!(
                f,
                "    {} {} · {}",
                comment.id, comment.author.name, comment.created.relative
            )?;
        }
        writeln!(f, "       {}", comment.text)?;
        writeln!(f, "       Aplaudir {}", comment.likes)
    }
}

fn osc8_link(href: &str, label: &str) -> String {
    format!("\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\", href, label)
}
