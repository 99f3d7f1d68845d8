// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Node handles over the shared coordinate table.

use msh_lite_core::NodeTable;
use nalgebra::Point3;

use crate::error::{Error, Result};

/// A non-owning view of one coordinate-table row: the zero-based node
/// id plus its position. Immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    id: usize,
    position: Point3<f64>,
}

impl Node {
    /// Build a handle for node `id` of `table`.
    ///
    /// Fails on an out-of-range id or a 2-D table (volume elements need
    /// three coordinates).
    pub fn from_table(table: &NodeTable, id: usize) -> Result<Self> {
        if table.dim() != 3 {
            return Err(Error::UnsupportedDimension { dim: table.dim() });
        }
        if id >= table.len() {
            return Err(Error::NodeOutOfRange {
                node: id,
                len: table.len(),
            });
        }
        let row = table.coords(id)?;
        Ok(Self {
            id,
            position: Point3::new(row[0], row[1], row[2]),
        })
    }

    /// Zero-based node id
    pub fn id(&self) -> usize {
        self.id
    }

    /// Node position
    pub fn position(&self) -> Point3<f64> {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use msh_lite_core::read_nodes_flat;

    #[test]
    fn test_node_from_table() {
        let table = read_nodes_flat("2\n1 0.5 1.5 2.5\n2 0.0 0.0 0.0\n", 2, 3).unwrap();
        let node = Node::from_table(&table, 0).unwrap();
        assert_eq!(node.id(), 0);
        assert_eq!(node.position(), Point3::new(0.5, 1.5, 2.5));
    }

    #[test]
    fn test_node_out_of_range() {
        let table = read_nodes_flat("1\n1 0.0 0.0 0.0\n", 1, 3).unwrap();
        assert!(matches!(
            Node::from_table(&table, 3),
            Err(Error::NodeOutOfRange { node: 3, len: 1 })
        ));
    }

    #[test]
    fn test_two_dimensional_table_rejected() {
        let table = read_nodes_flat("1\n1 0.0 0.0\n", 1, 2).unwrap();
        assert!(matches!(
            Node::from_table(&table, 0),
            Err(Error::UnsupportedDimension { dim: 2 })
        ));
    }
}
