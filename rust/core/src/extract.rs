// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Text Extraction Utilities
//!
//! Delimiter-bounded substring extraction and whitespace numeric
//! tokenization. Every fixed- and variable-layout line in both mesh
//! formats goes through these two tokenizers, so they are the single
//! point of numeric-field extraction for the whole crate.
//!
//! # Performance
//! - Substring search uses SIMD-accelerated [memchr](https://docs.rs/memchr)
//! - Floats parse through [fast-float](https://docs.rs/fast-float),
//!   integers through [lexical-core](https://docs.rs/lexical-core)

use crate::error::{Error, Result};

/// Extract the substring strictly between the first occurrence of
/// `start` and the first occurrence of `stop` found anywhere in `buffer`.
///
/// Returns `Ok("")` when `start` is absent — callers probe for optional
/// sections this way. A missing `stop`, or a `stop` that ends before the
/// end of `start`, is an error: the span would be unspecified otherwise.
///
/// The result borrows from `buffer` (zero-copy).
pub fn extract_between<'a>(buffer: &'a str, start: &str, stop: &str) -> Result<&'a str> {
    let Some(start_pos) = memchr::memmem::find(buffer.as_bytes(), start.as_bytes()) else {
        return Ok("");
    };
    let content_start = start_pos + start.len();

    let stop_pos = memchr::memmem::find(buffer.as_bytes(), stop.as_bytes());
    match stop_pos {
        Some(p) if p >= content_start => Ok(&buffer[content_start..p]),
        _ => Err(Error::DelimiterOrder {
            start: start.to_string(),
            stop: stop.to_string(),
        }),
    }
}

/// Parse the unsigned integer between the first `[` and the first `]`
/// of `token`, recovering an instance id from names like
/// `BC_piston_pressure[3]`.
///
/// Returns `Ok(0)` when no `[` is present (unbracketed names carry
/// instance id 0).
pub fn extract_between_brackets(token: &str) -> Result<u64> {
    let bytes = token.as_bytes();
    let Some(open) = memchr::memchr(b'[', bytes) else {
        return Ok(0);
    };
    let close = memchr::memchr(b']', bytes).filter(|&c| c > open);

    close
        .and_then(|c| lexical_core::parse::<u64>(&bytes[open + 1..c]).ok())
        .ok_or_else(|| Error::BracketParse {
            token: token.to_string(),
        })
}

/// Tokenize whitespace-separated text into floating-point values,
/// left to right, stopping at the first token that is not fully numeric.
pub fn parse_floats(text: &str) -> Vec<f64> {
    text.split_ascii_whitespace()
        .map_while(|tok| {
            fast_float::parse_partial::<f64, _>(tok)
                .ok()
                .filter(|&(_, consumed)| consumed == tok.len())
                .map(|(value, _)| value)
        })
        .collect()
}

/// Tokenize whitespace-separated text into unsigned integers,
/// left to right, stopping at the first non-numeric token.
pub fn parse_uints(text: &str) -> Vec<u64> {
    text.split_ascii_whitespace()
        .map_while(|tok| lexical_core::parse::<u64>(tok.as_bytes()).ok())
        .collect()
}
