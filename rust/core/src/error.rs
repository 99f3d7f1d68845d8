// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for mesh-section decoding.

use thiserror::Error;

/// Result type for decoding operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding mesh sections
#[derive(Error, Debug)]
pub enum Error {
    /// The stop delimiter is missing or ends before the start delimiter.
    /// Section ordering is fixed by the file format; hitting this means
    /// the caller handed over a truncated or reordered buffer.
    #[error("delimiter '{stop}' not found after '{start}'")]
    DelimiterOrder { start: String, stop: String },

    /// An opening bracket without a closing one, or non-numeric content
    /// between brackets.
    #[error("cannot read bracketed id from '{token}'")]
    BracketParse { token: String },

    /// An entity-definition line stops before a field its layout declares.
    #[error("entity line is missing field {field} ({what}): '{line}'")]
    EntityField {
        field: usize,
        what: &'static str,
        line: String,
    },

    /// A section line has fewer tokens than its declared layout requires.
    /// Mesh data is all-or-nothing input to a solver, so this aborts the
    /// whole section.
    #[error("malformed {section} section, line {line}: {message}")]
    MalformedSection {
        section: &'static str,
        line: usize,
        message: String,
    },

    /// A coordinate line carries fewer columns than the declared dimension.
    #[error("node line {line} has {found} coordinate columns, expected {expected}")]
    DimensionMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A node id falls outside the declared node-count range.
    #[error("node id {id} out of range for table of {len} nodes")]
    NodeIdOutOfRange { id: usize, len: usize },

    /// An element block declares a type code the reader has no node count for.
    #[error("unsupported element type code {code}")]
    UnsupportedElementType { code: i32 },

    /// A recording-probe name carries an instance id above the 599 slots
    /// the 600-based code family can address.
    #[error("recording probe id {id} out of range (must be < 999)")]
    ProbeIdOutOfRange { id: u64 },
}
