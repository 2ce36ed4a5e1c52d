//! Report configuration.

/// Longest message kept in a feed, in characters.
pub const DEFAULT_MAX_MESSAGE_LEN: usize = 140;

/// Settings that shape how the posts feed is aggregated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Messages longer than this are truncated, with a warning.
    pub max_message_len: usize,
}

impl Config {
    pub fn new(max_message_len: usize) -> Self {
        Self { max_message_len }
    }

    pub fn with_max_message_len(mut self, max_message_len: usize) -> Self {
        self.max_message_len = max_message_len;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_MESSAGE_LEN)
    }
}
