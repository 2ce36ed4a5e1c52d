//! Line decoder for the raw feed files.
//!
//! Feeds are read as bytes, line endings are normalised to `\n` and every
//! line is decoded as 7-bit ASCII. Bytes outside that range are dropped and
//! reported, the rest of the line is kept.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};
use crate::events::{Event, EventSink};

/// Lazily decoded lines of a feed.
///
/// Lines are numbered from 1. Content ending in a newline yields a final
/// empty line, which every consumer treats as blank.
pub struct Lines<'s> {
    buffer: Vec<u8>,
    position: usize,
    line: usize,
    finished: bool,
    sink: &'s dyn EventSink,
}

impl<'s> Lines<'s> {
    fn new(raw: &[u8], sink: &'s dyn EventSink) -> Self {
        Self {
            buffer: normalize_line_endings(raw),
            position: 0,
            line: 0,
            finished: false,
            sink,
        }
    }
}

impl Iterator for Lines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.finished {
            return None;
        }

        let rest = &self.buffer[self.position..];
        let end = match rest.iter().position(|&b| b == b'\n') {
            Some(offset) => offset,
            None => {
                self.finished = true;
                rest.len()
            }
        };

        self.line += 1;
        let text = decode_ascii(&rest[..end], self.line, self.sink);
        self.position += end + 1;
        Some(text)
    }
}

/// Read a whole byte source and split it into decoded lines.
pub fn decode_lines<'s, R: Read>(mut source: R, sink: &'s dyn EventSink) -> Result<Lines<'s>> {
    let mut raw = Vec::new();
    source.read_to_end(&mut raw)?;
    Ok(Lines::new(&raw, sink))
}

/// Open `path` in binary mode and split it into decoded lines.
pub fn decode_lines_from_path<'s>(path: &Path, sink: &'s dyn EventSink) -> Result<Lines<'s>> {
    let raw = fs::read(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Lines::new(&raw, sink))
}

/// Turn every `\r\n` and every lone `\r` into `\n`.
fn normalize_line_endings(raw: &[u8]) -> Vec<u8> {
    let mut normalized = Vec::with_capacity(raw.len());
    let mut bytes = raw.iter().copied().peekable();
    while let Some(byte) = bytes.next() {
        if byte == b'\r' {
            bytes.next_if_eq(&b'\n');
            normalized.push(b'\n');
        } else {
            normalized.push(byte);
        }
    }
    normalized
}

fn decode_ascii(bytes: &[u8], line: usize, sink: &dyn EventSink) -> String {
    let mut text = String::with_capacity(bytes.len());
    for (position, &byte) in bytes.iter().enumerate() {
        if byte.is_ascii() {
            text.push(char::from(byte));
        } else {
            sink.emit(Event::InvalidByte {
                line,
                position,
                byte,
            });
        }
    }
    text
}
