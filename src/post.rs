//! Post module for the posts feed.
//!
//! This module contains the Post struct, a single message together with
//! the user who wrote it.

use std::fmt::Display;

/// A message as it appears in somebody's feed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Post {
    author: String,
    message: String,
}

impl Post {
    pub fn new(author: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            message: message.into(),
        }
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for Post {
    /// Render the post as a report feed line, without the newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\t@{}: {}", self.author, self.message)
    }
}

/// Cut `message` down to at most `limit` characters.
///
/// Returns `None` when the message already fits.
pub fn truncate_message(message: &str, limit: usize) -> Option<String> {
    if message.chars().count() > limit {
        Some(message.chars().take(limit).collect())
    } else {
        None
    }
}
