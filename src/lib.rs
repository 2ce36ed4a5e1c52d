//! # parrot-feed
//!
//! A Rust library for turning two plain-text feeds into per-user timelines.
//!
//! ## Overview
//!
//! The relationships feed declares who follows whom, one `<follower> follows <poster>, ...`
//! per line. The posts feed holds one `<author>> <message>` per line. parrot-feed builds,
//! for every user named in the relationships feed, the list of messages they get to see
//! (their own and those of everyone they follow) and renders it as a text report.
//!
//! Both feeds are messy by assumption. Malformed lines, non-ASCII bytes, overlong
//! messages and posts by unknown users are reported through an [`events::EventSink`]
//! and skipped, so a report is always produced from whatever could be parsed.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use parrot_feed::{config::Config, events::TracingSink};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let report = parrot_feed::generate_report_from_paths(
//!         Path::new("user.txt"),
//!         Path::new("tweet.txt"),
//!         &Config::default(),
//!         &TracingSink,
//!     )?;
//!     print!("{report}");
//!     Ok(())
//! }
//! ```

use std::io::Read;
use std::path::Path;

pub mod config;
pub mod error;
pub mod events;
pub mod feed;
pub mod post;
pub mod reader;
pub mod relationships;
pub mod report;
pub mod tokenizer;

use config::Config;
use error::Result;
use events::EventSink;
use reader::{decode_lines, decode_lines_from_path, Lines};

/// Build the report from two open byte sources.
pub fn generate_report<U: Read, P: Read>(
    users: U,
    posts: P,
    config: &Config,
    sink: &dyn EventSink,
) -> Result<String> {
    let users = decode_lines(users, sink)?;
    let posts = decode_lines(posts, sink)?;
    Ok(run(users, posts, config, sink))
}

/// Build the report from two feed files.
pub fn generate_report_from_paths(
    users: &Path,
    posts: &Path,
    config: &Config,
    sink: &dyn EventSink,
) -> Result<String> {
    let users = decode_lines_from_path(users, sink)?;
    let posts = decode_lines_from_path(posts, sink)?;
    Ok(run(users, posts, config, sink))
}

fn run(users: Lines<'_>, posts: Lines<'_>, config: &Config, sink: &dyn EventSink) -> String {
    let relationships = relationships::parse_relationships(users, sink);
    let feeds = feed::parse_posts(posts, &relationships, config, sink);
    tracing::debug!(
        users = relationships.len(),
        active = feeds.len(),
        "feeds aggregated"
    );
    report::format_report(&feeds, relationships.users())
}
