//! Relationship module for the follows feed.
//!
//! This module parses `<follower> follows <poster>, <poster>, ...` lines
//! into a mapping from each poster to the set of users following them.

use std::collections::{BTreeMap, BTreeSet};

use crate::events::{Event, EventSink};
use crate::tokenizer::{trim_space, Tokenizer};

/// Who follows whom, keyed by poster.
///
/// Every name seen in the relationships feed has a key, whether it was a
/// poster, a follower, or both. Both levels are ordered by name, which is
/// also the order followers receive a post in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Relationships {
    followers: BTreeMap<String, BTreeSet<String>>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` as a known user and return its follower set,
    /// creating an empty one if needed.
    pub fn ensure_user(&mut self, name: &str) -> &mut BTreeSet<String> {
        self.followers.entry(name.to_string()).or_default()
    }

    /// Record that `follower` follows `poster`. Registers `poster` but not
    /// `follower`; see [`ensure_user`](Self::ensure_user).
    pub fn add_follower(&mut self, poster: &str, follower: &str) {
        self.ensure_user(poster).insert(follower.to_string());
    }

    pub fn followers_of(&self, poster: &str) -> Option<&BTreeSet<String>> {
        self.followers.get(poster)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.followers.contains_key(name)
    }

    /// Every known user, in ascending order.
    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.followers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.followers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.followers.is_empty()
    }
}

/// Parse the relationships feed.
///
/// Badly formed lines are reported to `sink` and skipped. Blank lines are
/// skipped silently.
pub fn parse_relationships<I, S>(lines: I, sink: &dyn EventSink) -> Relationships
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut relationships = Relationships::new();
    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        match Tokenizer::new(line).follow_line() {
            Some(parsed) => {
                let follower = trim_space(parsed.follower);
                if let Some(posters) = parsed.posters {
                    for poster in posters.split(',') {
                        relationships.add_follower(trim_space(poster), follower);
                    }
                }
                relationships.ensure_user(follower);
            }
            None if !trim_space(line).is_empty() => {
                sink.emit(Event::MalformedRelationship { line: index + 1 });
            }
            None => {}
        }
    }
    relationships
}
