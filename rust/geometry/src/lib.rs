// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # MSH-Lite Geometry
//!
//! Geometric entities built over the coordinate table produced by
//! [msh-lite-core](https://docs.rs/msh-lite-core): node handles and the
//! 4-node tetrahedron with its signed-volume orientation check.
//!
//! ## Quick Start
//!
//! ```rust
//! use msh_lite_core::read_nodes_flat;
//! use msh_lite_geometry::Tetrahedron;
//!
//! let table = read_nodes_flat(
//!     "4\n1 0 0 0\n2 1 0 0\n3 0 1 0\n4 0 0 1\n", 4, 3,
//! ).unwrap();
//!
//! // Left-handed vertex order from the file
//! let mut tet = Tetrahedron::new(&table, 1, [0, 1, 3, 2], 4, 0).unwrap();
//! assert!(tet.volume() < 0.0);
//!
//! // One orientation check before simulation begins
//! tet.validate_orientation();
//! assert!(tet.volume() > 0.0);
//! ```
//!
//! A [`Tetrahedron`] borrows the coordinate table and must not outlive
//! it; the table stays owned by the caller.

pub mod error;
pub mod node;
pub mod tetrahedron;

pub use error::{Error, Result};
pub use node::Node;
pub use tetrahedron::Tetrahedron;
