// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for geometric entities.

use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building geometric entities
#[derive(Error, Debug)]
pub enum Error {
    /// A vertex references a row outside the coordinate table.
    #[error("node {node} out of range for table of {len} nodes")]
    NodeOutOfRange { node: usize, len: usize },

    /// Volume elements need a 3-D coordinate table.
    #[error("tetrahedron requires a 3-D coordinate table, got {dim}-D")]
    UnsupportedDimension { dim: usize },

    /// Core decoding error surfaced through a geometry call.
    #[error("core decoding error: {0}")]
    CoreError(#[from] msh_lite_core::Error),
}
