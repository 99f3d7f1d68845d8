// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tetrahedron Geometric Entity
//!
//! A 4-node tetrahedral element referencing the shared coordinate table.
//! The signed volume is the scalar triple product
//! `(1/6)·(B−A)·[(C−A)×(D−A)]` of the vertices in connectivity order:
//! positive when the vertices are right-handed. The orientation check
//! swaps the third and fourth vertex when the volume is negative —
//! equivalent to swapping columns 3 and 4 of the connectivity row — and
//! a single swap flips the sign of this determinant, so no loop is
//! needed.

use std::fmt;

use msh_lite_core::NodeTable;
use nalgebra::Point3;

use crate::error::{Error, Result};

/// A validated-on-demand tetrahedral volume element.
///
/// Borrows the coordinate table for its whole lifetime: vertices are
/// references into the table, never copies it owns. Two states:
/// unvalidated (just constructed, volume from the file's vertex order)
/// and validated (the orientation check has run at least once). No
/// other mutation is permitted after construction.
#[derive(Debug, Clone)]
pub struct Tetrahedron<'m> {
    table: &'m NodeTable,
    id: usize,
    nodes: [usize; 4],
    element_type: i32,
    partition: i64,
    volume: f64,
    validated: bool,
}

impl<'m> Tetrahedron<'m> {
    /// Build a tetrahedron over rows `nodes` of `table` and eagerly
    /// compute its signed volume.
    ///
    /// All four referenced nodes must already exist in the table.
    pub fn new(
        table: &'m NodeTable,
        id: usize,
        nodes: [usize; 4],
        element_type: i32,
        partition: i64,
    ) -> Result<Self> {
        if table.dim() != 3 {
            return Err(Error::UnsupportedDimension { dim: table.dim() });
        }
        if let Some(&node) = nodes.iter().find(|&&n| n >= table.len()) {
            return Err(Error::NodeOutOfRange {
                node,
                len: table.len(),
            });
        }

        let mut tet = Self {
            table,
            id,
            nodes,
            element_type,
            partition,
            volume: 0.0,
            validated: false,
        };
        tet.volume = tet.signed_volume();
        Ok(tet)
    }

    fn point(&self, vertex: usize) -> Point3<f64> {
        // Ids are checked at construction; rows cannot move afterwards.
        let dim = self.table.dim();
        let row = &self.table.as_slice()[self.nodes[vertex] * dim..][..dim];
        Point3::new(row[0], row[1], row[2])
    }

    fn signed_volume(&self) -> f64 {
        let a = self.point(0);
        let b = self.point(1);
        let c = self.point(2);
        let d = self.point(3);
        (b - a).dot(&(c - a).cross(&(d - a))) / 6.0
    }

    /// Check and, if needed, correct the vertex orientation.
    ///
    /// A negative signed volume means the file listed the vertices
    /// left-handed: the third and fourth vertex are swapped and the
    /// volume recomputed. Idempotent — a second call on a corrected
    /// element changes nothing. Returns the (now non-negative under
    /// well-formed input) volume.
    pub fn validate_orientation(&mut self) -> f64 {
        if self.volume < 0.0 {
            self.nodes.swap(2, 3);
            self.volume = self.signed_volume();
        }
        self.validated = true;
        self.volume
    }

    /// Global element id
    pub fn id(&self) -> usize {
        self.id
    }

    /// Zero-based vertex ids, in connectivity order
    pub fn node_ids(&self) -> [usize; 4] {
        self.nodes
    }

    /// Position of vertex 0..=3
    pub fn vertex(&self, vertex: usize) -> Point3<f64> {
        self.point(vertex)
    }

    /// Element type code
    pub fn element_type(&self) -> i32 {
        self.element_type
    }

    /// Partition id
    pub fn partition(&self) -> i64 {
        self.partition
    }

    /// Signed volume under the current vertex order
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// True once the orientation check has run
    pub fn is_validated(&self) -> bool {
        self.validated
    }
}

impl fmt::Display for Tetrahedron<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tetrahedron: {}, ElementType: {}, Partition: {}, Volume: {}",
            self.id, self.element_type, self.partition, self.volume
        )
    }
}
