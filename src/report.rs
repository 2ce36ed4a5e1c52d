//! Report rendering.
//!
//! One block per known user in ascending name order: the user's name, one
//! `\t@author: message` line per post in their feed, then a blank line.

use std::collections::BTreeSet;

use crate::feed::Feeds;

/// Render the report for every user in `known_users`.
///
/// Users without posts still get their name line and separator.
pub fn format_report<'a, I>(feeds: &Feeds, known_users: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let users: BTreeSet<&str> = known_users.into_iter().collect();

    let mut output = String::new();
    for user in users {
        output.push_str(&format!("{user}\n"));
        for post in feeds.feed_for(user) {
            output.push_str(&format!("{post}\n"));
        }
        output.push('\n');
    }
    output
}
