//! Line parser for `.env`-style sources.
//!
//! Responsibilities:
//! - Split raw text into lines, tolerating both LF and CRLF terminators.
//! - Skip blank lines and `#` comment lines.
//! - Split each remaining line at the first `=` into a trimmed key/value pair.
//!
//! Does NOT handle:
//! - Opening files (see `loader`, which reads sources and funnels them here).
//! - Merge precedence or `${NAME}` expansion (see `loader`).
//!
//! Invariants:
//! - Pairs are returned in order of appearance; duplicate keys are preserved.
//! - Values are verbatim after trimming: no quote stripping, no escapes.
//! - A line without `=` fails the whole parse; no partial pairs escape.

use std::io::{self, Read};

use thiserror::Error;

/// One `KEY=VALUE` assignment as it appears in a source, before merging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub key: String,
    pub value: String,
}

/// A non-blank, non-comment line had no `=` separator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("line {line_number} is not a KEY=VALUE assignment: {line:?}")]
pub struct ParseError {
    /// 1-based line number within the source.
    pub line_number: usize,
    /// The offending line, trimmed.
    pub line: String,
}

/// Parse `.env`-style text into ordered pairs.
///
/// Blank lines and lines whose first non-whitespace character is `#` are
/// skipped. Every other line is split at its first `=`; the key and value
/// are trimmed of surrounding whitespace and otherwise kept verbatim, so a
/// value may contain further `=` characters.
///
/// # Errors
///
/// Returns [`ParseError`] for the first line that is neither blank, a
/// comment, nor a `KEY=VALUE` assignment.
pub fn parse_str(input: &str) -> Result<Vec<Pair>, ParseError> {
    let mut pairs = Vec::new();
    for (index, raw) in input.split('\n').enumerate() {
        // `split('\n')` leaves the `\r` of a CRLF terminator behind.
        let line = raw.strip_suffix('\r').unwrap_or(raw).trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            return Err(ParseError {
                line_number: index + 1,
                line: line.to_string(),
            });
        };
        pairs.push(Pair {
            key: key.trim().to_string(),
            value: value.trim().to_string(),
        });
    }
    Ok(pairs)
}

/// Parse `.env`-style text from a reader; the stream must be valid UTF-8.
///
/// Funnels into [`parse_str`] after reading the stream to its end.
///
/// # Errors
///
/// Returns the underlying I/O error if reading fails, or an
/// [`io::ErrorKind::InvalidData`] error wrapping the [`ParseError`] for a
/// malformed line.
pub fn parse_reader<R: Read>(mut reader: R) -> Result<Vec<Pair>, io::Error> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_str(&text).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}
