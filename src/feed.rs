//! Feed module for aggregating posts per user.
//!
//! This module reads `<author>> <message>` lines and fans every post out to
//! its author and to each of the author's followers.
//! Within one user's feed, posts keep the order of the posts feed.

use std::collections::BTreeMap;

use crate::config::Config;
use crate::events::{Event, EventSink};
use crate::post::{truncate_message, Post};
use crate::relationships::Relationships;
use crate::tokenizer::{trim_space, Tokenizer};

/// The posts visible to each user, keyed by user name.
///
/// Users who see nothing have no entry; use [`feed_for`](Feeds::feed_for),
/// which returns an empty slice for them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Feeds {
    by_user: BTreeMap<String, Vec<Post>>,
}

impl Feeds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `post` to the end of `user`'s feed.
    pub fn push(&mut self, user: &str, post: Post) {
        self.by_user.entry(user.to_string()).or_default().push(post);
    }

    pub fn feed_for(&self, user: &str) -> &[Post] {
        self.by_user.get(user).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Users with at least one post in their feed, in ascending order.
    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.by_user.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_user.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_user.is_empty()
    }
}

/// Parse the posts feed and build every known user's feed.
///
/// Lines without a delimiter are reported and skipped, overlong messages
/// are truncated, and posts by users missing from `relationships` are
/// reported as errors and dropped.
pub fn parse_posts<I, S>(
    lines: I,
    relationships: &Relationships,
    config: &Config,
    sink: &dyn EventSink,
) -> Feeds
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut feeds = Feeds::new();
    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        let lineno = index + 1;

        let Some(parsed) = Tokenizer::new(line).post_line() else {
            if !trim_space(line).is_empty() {
                sink.emit(Event::MalformedPost { line: lineno });
            }
            continue;
        };

        let author = trim_space(parsed.author);
        let mut message = trim_space(parsed.message).to_string();
        if let Some(truncated) = truncate_message(&message, config.max_message_len) {
            sink.emit(Event::Truncated {
                line: lineno,
                limit: config.max_message_len,
            });
            message = truncated;
        }

        let Some(followers) = relationships.followers_of(author) else {
            sink.emit(Event::UnknownAuthor {
                line: lineno,
                author: author.to_string(),
            });
            continue;
        };

        let post = Post::new(author, message);
        // The author always sees their own post
        feeds.push(author, post.clone());
        for follower in followers {
            feeds.push(follower, post.clone());
        }
    }
    feeds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::RecordingSink;
    use crate::relationships::parse_relationships;

    fn parse(lines: &[&str], relationships: &Relationships) -> (Feeds, RecordingSink) {
        let sink = RecordingSink::new();
        let feeds = parse_posts(lines.iter(), relationships, &Config::default(), &sink);
        (feeds, sink)
    }

    fn only(user: &str) -> Relationships {
        let mut relationships = Relationships::new();
        relationships.ensure_user(user);
        relationships
    }

    #[test]
    fn test_single_line() {
        let (got, sink) = parse(&["a> post"], &only("a"));
        assert_eq!(got.feed_for("a"), &[Post::new("a", "post")]);
        assert_eq!(got.len(), 1);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_blanks_and_spaces() {
        let (got, sink) = parse(
            &["  a > post  ", "", "     ", "", "a>another  post", "", ""],
            &only("a"),
        );
        assert_eq!(
            got.feed_for("a"),
            &[Post::new("a", "post"), Post::new("a", "another  post")]
        );
        assert!(sink.is_empty());
    }

    #[test]
    fn test_separator_controls_are_trimmed() {
        let (got, sink) = parse(&["\x1ca\x1d> post\x1f", "\x1e"], &only("a"));
        assert_eq!(got.feed_for("a"), &[Post::new("a", "post")]);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_symbols() {
        let (got, _) = parse(&["a>>post>:"], &only("a"));
        assert_eq!(got.feed_for("a"), &[Post::new("a", ">post>:")]);
    }

    #[test]
    fn test_missing_post() {
        let (got, _) = parse(&["a>"], &only("a"));
        assert_eq!(got.feed_for("a"), &[Post::new("a", "")]);
    }

    #[test]
    fn test_missing_poster() {
        let (got, sink) = parse(&["> post"], &only("a"));
        assert!(got.is_empty());
        assert_eq!(sink.events(), vec![Event::MalformedPost { line: 1 }]);
    }

    #[test]
    fn test_no_valid_poster() {
        let (got, sink) = parse(&["a> post"], &only("b"));
        assert!(got.is_empty());
        assert_eq!(
            sink.at_level(tracing::Level::ERROR),
            vec![Event::UnknownAuthor {
                line: 1,
                author: "a".to_string()
            }]
        );
    }

    #[test]
    fn test_unknown_author_reaches_nobody() {
        let relationships = parse_relationships(["b follows a"], &RecordingSink::new());
        let (got, sink) = parse(&["c> hello", "a> hi"], &relationships);
        assert!(got.feed_for("c").is_empty());
        assert_eq!(got.feed_for("a"), &[Post::new("a", "hi")]);
        assert_eq!(got.feed_for("b"), &[Post::new("a", "hi")]);
        assert_eq!(sink.events().len(), 1);
    }

    #[test]
    fn test_truncation() {
        let exact = "x".repeat(140);
        let over = format!("a> {exact}y");
        let fits = format!("a> {exact}");
        let (got, sink) = parse(&[over.as_str(), fits.as_str()], &only("a"));
        assert_eq!(got.feed_for("a")[0].message(), exact);
        assert_eq!(got.feed_for("a")[1].message(), exact);
        assert_eq!(
            sink.events(),
            vec![Event::Truncated {
                line: 1,
                limit: 140
            }]
        );
    }

    #[test]
    fn test_truncation_uses_config() {
        let sink = RecordingSink::new();
        let config = Config::default().with_max_message_len(5);
        let got = parse_posts(["a> abcdefgh"], &only("a"), &config, &sink);
        assert_eq!(got.feed_for("a"), &[Post::new("a", "abcde")]);
        assert_eq!(
            sink.events(),
            vec![Event::Truncated { line: 1, limit: 5 }]
        );
    }

    #[test]
    fn test_fan_out_keeps_post_order() {
        let relationships = parse_relationships(
            ["Ward follows Alan", "Martin follows Alan, Ward"],
            &RecordingSink::new(),
        );
        let (got, sink) = parse(&["Alan> one", "Ward> two", "Alan> three"], &relationships);
        assert!(sink.is_empty());
        assert_eq!(
            got.feed_for("Alan"),
            &[Post::new("Alan", "one"), Post::new("Alan", "three")]
        );
        assert_eq!(
            got.feed_for("Ward"),
            &[
                Post::new("Alan", "one"),
                Post::new("Ward", "two"),
                Post::new("Alan", "three")
            ]
        );
        assert_eq!(
            got.feed_for("Martin"),
            &[
                Post::new("Alan", "one"),
                Post::new("Ward", "two"),
                Post::new("Alan", "three")
            ]
        );
    }

    #[test]
    fn test_known_user_without_posts_has_empty_feed() {
        let relationships =
            parse_relationships(["a follows b", "c follows"], &RecordingSink::new());
        let (got, _) = parse(&["b> hi"], &relationships);
        assert!(got.feed_for("c").is_empty());
        assert_eq!(got.users().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
