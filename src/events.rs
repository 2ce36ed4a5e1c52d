//! Diagnostic events raised while reading the feeds.
//!
//! Parsers never log directly. They hand an [`Event`] to an injected
//! [`EventSink`], which lets the binary forward everything to `tracing`
//! while tests collect events with a [`RecordingSink`].

use std::cell::RefCell;
use std::fmt;

use tracing::Level;

/// Something worth reporting about the input, but not worth failing over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// A byte outside the 7-bit range was dropped while decoding.
    InvalidByte {
        line: usize,
        position: usize,
        byte: u8,
    },
    /// A non-blank relationships line did not match `<name> follows ...`.
    MalformedRelationship { line: usize },
    /// A non-blank posts line had no `>` delimiter.
    MalformedPost { line: usize },
    /// A message was cut down to the configured maximum length.
    Truncated { line: usize, limit: usize },
    /// A post was authored by someone missing from the relationships feed.
    UnknownAuthor { line: usize, author: String },
}

impl Event {
    /// Severity of the event. Only unknown authors are errors.
    pub fn level(&self) -> Level {
        match self {
            Event::UnknownAuthor { .. } => Level::ERROR,
            _ => Level::WARN,
        }
    }

    pub fn line(&self) -> usize {
        match self {
            Event::InvalidByte { line, .. }
            | Event::MalformedRelationship { line }
            | Event::MalformedPost { line }
            | Event::Truncated { line, .. }
            | Event::UnknownAuthor { line, .. } => *line,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::InvalidByte {
                line,
                position,
                byte,
            } => write!(
                f,
                "line {line}: dropped non-ASCII byte 0x{byte:02x} at position {position}"
            ),
            Event::MalformedRelationship { line } => {
                write!(f, "relationships line {line}: badly formed line")
            }
            Event::MalformedPost { line } => write!(f, "posts line {line}: badly formed line"),
            Event::Truncated { line, limit } => {
                write!(f, "posts line {line}: message truncated to {limit} characters")
            }
            Event::UnknownAuthor { line, author } => {
                write!(f, "posts line {line}: '{author}' is not a known user")
            }
        }
    }
}

/// Receiver for diagnostic events.
pub trait EventSink {
    fn emit(&self, event: Event);
}

/// Forwards every event to the `tracing` subscriber at the event's level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: Event) {
        match &event {
            Event::UnknownAuthor { line, author } => {
                tracing::error!(line, author = %author, "{event}");
            }
            Event::InvalidByte { line, byte, .. } => {
                tracing::warn!(line, byte, "{event}");
            }
            other => {
                tracing::warn!(line = other.line(), "{event}");
            }
        }
    }
}

/// Keeps every event in memory, in the order it was emitted.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: RefCell<Vec<Event>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    /// Events at exactly the given level.
    pub fn at_level(&self, level: Level) -> Vec<Event> {
        self.events
            .borrow()
            .iter()
            .filter(|event| event.level() == level)
            .cloned()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }
}
