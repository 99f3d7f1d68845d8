// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Node Block Reader
//!
//! Builds the shared coordinate table from the raw `$Nodes` section text,
//! in either the flat per-node layout (format 2.2) or the block layout
//! (format 4.1), where each block reports ids and coordinates in two
//! separate passes.
//!
//! Both readers take the section body with its leading count line still
//! attached and consume that line before iterating. Every row of the
//! resulting table is written exactly once during ingestion and never
//! updated afterwards; blocks are self-contained, so a surrounding
//! system may decode them in parallel, but within one block the id pass
//! must fully precede the coordinate pass (the target row of each
//! coordinate line is the id just read).

use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::extract::{parse_floats, parse_uints};

const SECTION: &str = "Nodes";

/// Dense `numNodes × dim` coordinate table, indexed by zero-based node id.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeTable {
    coords: Vec<f64>,
    dim: usize,
}

impl NodeTable {
    fn zeroed(num_nodes: usize, dim: usize) -> Self {
        Self {
            coords: vec![0.0; num_nodes * dim],
            dim,
        }
    }

    /// Number of nodes (rows)
    pub fn len(&self) -> usize {
        self.coords.len() / self.dim
    }

    /// True when the table holds no nodes
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Spatial dimension (2 or 3)
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Coordinates of one node, `dim` values
    pub fn coords(&self, node: usize) -> Result<&[f64]> {
        if node >= self.len() {
            return Err(Error::NodeIdOutOfRange {
                id: node,
                len: self.len(),
            });
        }
        Ok(&self.coords[node * self.dim..(node + 1) * self.dim])
    }

    /// Flat row-major view of the whole table
    pub fn as_slice(&self) -> &[f64] {
        &self.coords
    }

    fn write_row(&mut self, node: usize, values: &[f64]) {
        self.coords[node * self.dim..node * self.dim + self.dim].copy_from_slice(values);
    }
}

fn malformed(line: usize, message: impl Into<String>) -> Error {
    Error::MalformedSection {
        section: SECTION,
        line,
        message: message.into(),
    }
}

/// Pull the next line off the cursor, tracking the 1-based line number.
fn next_line<'a>(
    lines: &mut impl Iterator<Item = &'a str>,
    line_no: &mut usize,
    what: &str,
) -> Result<&'a str> {
    *line_no += 1;
    lines
        .next()
        .ok_or_else(|| malformed(*line_no, format!("section ended while reading {what}")))
}

/// Read a block-format (4.1) node section into a coordinate table.
///
/// Walks `num_blocks` blocks off the shared text cursor: a header
/// `entityDim entityTag parametric numNodesInBlock`, then exactly that
/// many node-id lines, then exactly that many coordinate lines, writing
/// each node at row `id − base`. Block order in the file is
/// authoritative; ids need not be contiguous across blocks.
pub fn read_nodes_blocked(
    section: &str,
    num_blocks: usize,
    num_nodes: usize,
    dim: usize,
    base: usize,
) -> Result<NodeTable> {
    let mut table = NodeTable::zeroed(num_nodes, dim);
    let mut lines = section.lines();
    let mut line_no = 0;

    // Leading count line: numBlocks numNodes minTag maxTag
    next_line(&mut lines, &mut line_no, "the section count line")?;

    for _ in 0..num_blocks {
        let header = next_line(&mut lines, &mut line_no, "a block header")?;
        let header = parse_uints(header);
        let &num_in_block = header
            .get(3)
            .ok_or_else(|| malformed(line_no, "block header has fewer than 4 fields"))?;

        // Ids pass
        let mut node_ids: SmallVec<[u64; 32]> = SmallVec::with_capacity(num_in_block as usize);
        for _ in 0..num_in_block {
            let id_line = next_line(&mut lines, &mut line_no, "a node id")?;
            let id = parse_uints(id_line)
                .first()
                .copied()
                .ok_or_else(|| malformed(line_no, "expected a node id"))?;
            node_ids.push(id);
        }

        // Coordinates pass, one line per id just read
        for &id in &node_ids {
            let coord_line = next_line(&mut lines, &mut line_no, "node coordinates")?;
            let values = parse_floats(coord_line);
            if values.len() < dim {
                return Err(Error::DimensionMismatch {
                    line: line_no,
                    expected: dim,
                    found: values.len(),
                });
            }

            let row = (id as usize).checked_sub(base).ok_or_else(|| {
                malformed(line_no, format!("node id {id} below id base {base}"))
            })?;
            if row >= num_nodes {
                return Err(Error::NodeIdOutOfRange {
                    id: row,
                    len: num_nodes,
                });
            }
            table.write_row(row, &values[..dim]);
        }
    }

    Ok(table)
}

/// Read a flat (2.2) node section into a coordinate table.
///
/// Exactly `num_nodes` lines of `id x y [z]`, written to row `i` in
/// file order. Ids are expected, but not required, to be sequential.
pub fn read_nodes_flat(section: &str, num_nodes: usize, dim: usize) -> Result<NodeTable> {
    let mut table = NodeTable::zeroed(num_nodes, dim);
    let mut lines = section.lines();
    let mut line_no = 0;

    // Leading count line
    next_line(&mut lines, &mut line_no, "the section count line")?;

    for i in 0..num_nodes {
        let line = next_line(&mut lines, &mut line_no, "a node line")?;
        let values = parse_floats(line);
        // First column is the node id, then the coordinates
        if values.len() < dim + 1 {
            return Err(Error::DimensionMismatch {
                line: line_no,
                expected: dim,
                found: values.len().saturating_sub(1),
            });
        }
        table.write_row(i, &values[1..dim + 1]);
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_reader_round_trip() {
        let section = "4\n\
                       1 0.0 0.0 0.0\n\
                       2 1.0 0.0 0.0\n\
                       3 0.0 1.0 0.0\n\
                       4 0.0 0.0 1.0\n";
        let table = read_nodes_flat(section, 4, 3).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.dim(), 3);
        assert_eq!(table.coords(0).unwrap(), &[0.0, 0.0, 0.0]);
        assert_eq!(table.coords(1).unwrap(), &[1.0, 0.0, 0.0]);
        assert_eq!(table.coords(2).unwrap(), &[0.0, 1.0, 0.0]);
        assert_eq!(table.coords(3).unwrap(), &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_flat_reader_two_dimensional() {
        let section = "2\n1 0.5 0.25\n2 1.5 1.25\n";
        let table = read_nodes_flat(section, 2, 2).unwrap();
        assert_eq!(table.coords(1).unwrap(), &[1.5, 1.25]);
    }

    #[test]
    fn test_flat_reader_missing_column_is_error() {
        let section = "2\n1 0.0 0.0 0.0\n2 1.0 0.0\n";
        let err = read_nodes_flat(section, 2, 3).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { line: 3, .. }));
    }

    #[test]
    fn test_flat_reader_truncated_section_is_error() {
        let section = "3\n1 0.0 0.0 0.0\n";
        assert!(read_nodes_flat(section, 3, 3).is_err());
    }

    #[test]
    fn test_block_reader_two_blocks() {
        // 2 blocks of sizes 3 and 5, ids 1..8, base = 1; coordinates
        // encode their id so any row mix-up is visible.
        let section = "2 8 1 8\n\
                       0 1 0 3\n1\n2\n3\n\
                       1.0 10.0 0.0\n2.0 20.0 0.0\n3.0 30.0 0.0\n\
                       2 1 0 5\n4\n5\n6\n7\n8\n\
                       4.0 40.0 0.0\n5.0 50.0 0.0\n6.0 60.0 0.0\n7.0 70.0 0.0\n8.0 80.0 0.0\n";
        let table = read_nodes_blocked(section, 2, 8, 3, 1).unwrap();
        assert_eq!(table.len(), 8);
        for id in 1..=8usize {
            let row = table.coords(id - 1).unwrap();
            assert_eq!(row, &[id as f64, id as f64 * 10.0, 0.0]);
        }
    }

    #[test]
    fn test_block_reader_block_order_not_id_order() {
        // Second block holds the lower ids; rows still land at id - 1.
        let section = "2 4 1 4\n\
                       1 5 0 2\n3\n4\n\
                       3.0 0.0 0.0\n4.0 0.0 0.0\n\
                       1 2 0 2\n1\n2\n\
                       1.0 0.0 0.0\n2.0 0.0 0.0\n";
        let table = read_nodes_blocked(section, 2, 4, 3, 1).unwrap();
        assert_eq!(table.coords(0).unwrap()[0], 1.0);
        assert_eq!(table.coords(3).unwrap()[0], 4.0);
    }

    #[test]
    fn test_block_reader_dimension_mismatch() {
        let section = "1 1 1 1\n0 1 0 1\n1\n0.5 0.5\n";
        let err = read_nodes_blocked(section, 1, 1, 3, 1).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { .. }));
    }

    #[test]
    fn test_block_reader_id_out_of_declared_range() {
        let section = "1 1 1 9\n0 1 0 1\n9\n0.5 0.5 0.5\n";
        let err = read_nodes_blocked(section, 1, 1, 3, 1).unwrap_err();
        assert!(matches!(err, Error::NodeIdOutOfRange { .. }));
    }
}
