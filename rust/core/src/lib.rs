// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # MSH-Lite Core
//!
//! Decoders for the textual sections of GMSH mesh files, formats 2.2
//! (flat) and 4.1 (block-structured), for a finite-element /
//! finite-volume preprocessing pipeline.
//!
//! ## Overview
//!
//! The crate turns raw section text into the structures a solver-setup
//! stage consumes:
//!
//! - **Text extraction**: delimiter-bounded substrings and numeric
//!   tokenization, accelerated by [memchr](https://docs.rs/memchr) and
//!   [fast-float](https://docs.rs/fast-float)
//! - **Tag dictionaries**: the closed boundary/domain naming convention,
//!   plus piston and recording-probe classifiers
//! - **Entity tag decoding**: plain and partitioned entity lines, with
//!   the variable-offset physical-tag fields decoded exactly
//! - **Node block reading**: flat and block layouts into one dense
//!   coordinate table
//! - **Element aggregation**: flattened connectivity with index-aligned
//!   physical/geometric/partition/type tag arrays
//!
//! ## Quick Start
//!
//! ```rust
//! use msh_lite_core::{extract_between, read_nodes_flat};
//!
//! let file = "$Nodes\n2\n1 0.0 0.0 0.0\n2 1.0 0.0 0.0\n$EndNodes\n";
//! let body = extract_between(file, "$Nodes\n", "$EndNodes").unwrap();
//!
//! // The body still carries its count line; the reader consumes it.
//! let table = read_nodes_flat(body, 2, 3).unwrap();
//! assert_eq!(table.coords(1).unwrap(), &[1.0, 0.0, 0.0]);
//! ```
//!
//! The caller owns file I/O and format-version detection; readers take
//! already-split section text plus the declared counts, and fail with an
//! explicit [`Error`] on any line that does not match its declared
//! layout. Decoding is synchronous and single-threaded; node blocks are
//! self-contained and may be decoded in parallel by the surrounding
//! system if it chooses.
//!
//! ## Feature Flags
//!
//! - `serde`: enable serialization of the decoded records

pub mod elements;
pub mod entity;
pub mod error;
pub mod extract;
pub mod nodes;
pub mod physical;
pub mod tags;

pub use elements::{
    nodes_per_element, read_elements_blocked, read_elements_flat, ElementAggregate,
    EntityTagInfo, EntityTagMap, TETRAHEDRON_TYPE,
};
pub use entity::{
    decode_entity, decode_partitioned_entity, EntityKind, EntityTags, PartitionedEntityTags,
    NO_TAG,
};
pub use error::{Error, Result};
pub use extract::{extract_between, extract_between_brackets, parse_floats, parse_uints};
pub use nodes::{read_nodes_blocked, read_nodes_flat, NodeTable};
pub use physical::{parse_physical_names, PhysicalName};
pub use tags::{
    boundary_code, domain_code, piston_code, probe_code, PISTON_PRESSURE_BASE,
    PISTON_STRESS_BASE, PISTON_VELOCITY_BASE, PROBE_BASE,
};
