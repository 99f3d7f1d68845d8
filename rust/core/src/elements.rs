// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Element Aggregate
//!
//! Flattened element connectivity paired with per-element tag arrays,
//! plus the readers that build the aggregate from the raw `$Elements`
//! section text of either format.
//!
//! The four tag arrays and the type array are index-aligned per element.
//! `etov` has no fixed row width: element types may vary per block, so
//! each element contributes its own node count to the flat array.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::entity::NO_TAG;
use crate::error::{Error, Result};
use crate::extract::parse_uints;

const SECTION: &str = "Elements";

/// Number of nodes for a first-order GMSH element type code.
///
/// 1 = 2-node line, 2 = 3-node triangle, 3 = 4-node quadrangle,
/// 4 = 4-node tetrahedron, 15 = 1-node point.
pub fn nodes_per_element(etype: i32) -> Result<usize> {
    match etype {
        1 => Ok(2),
        2 => Ok(3),
        3 => Ok(4),
        4 => Ok(4),
        15 => Ok(1),
        code => Err(Error::UnsupportedElementType { code }),
    }
}

/// GMSH type code for the 4-node tetrahedron
pub const TETRAHEDRON_TYPE: i32 = 4;

/// Per-entity tags carried over from the entity decoder, used to stamp
/// every element of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityTagInfo {
    pub physical_tag: i64,
    pub partition_tag: i64,
}

/// Lookup from (entity dimension, entity tag) to its decoded tags,
/// built by the caller from `decode_entity` / `decode_partitioned_entity`
/// outputs before the element section is read.
pub type EntityTagMap = FxHashMap<(u8, u64), EntityTagInfo>;

/// Flattened connectivity with index-aligned per-element tag arrays.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementAggregate {
    /// Element-to-vertex connectivity, flattened, 0-based node ids
    pub etov: Vec<usize>,
    /// Physical tag per element (−1 when the source entity declared none)
    pub phys_tag: Vec<i32>,
    /// Geometric entity tag per element
    pub geom_tag: Vec<i32>,
    /// Partition tag per element (−1 marks an interface entity)
    pub part_tag: Vec<i32>,
    /// Element type code per element
    pub etype: Vec<i32>,
}

impl ElementAggregate {
    /// Number of elements
    pub fn len(&self) -> usize {
        self.etype.len()
    }

    /// True when no elements have been read
    pub fn is_empty(&self) -> bool {
        self.etype.is_empty()
    }

    fn push(&mut self, nodes: &[usize], phys: i32, geom: i32, part: i32, etype: i32) {
        self.etov.extend_from_slice(nodes);
        self.phys_tag.push(phys);
        self.geom_tag.push(geom);
        self.part_tag.push(part);
        self.etype.push(etype);
    }
}

fn malformed(line: usize, message: impl Into<String>) -> Error {
    Error::MalformedSection {
        section: SECTION,
        line,
        message: message.into(),
    }
}

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

/// Read a block-format (4.1) element section.
///
/// Each block header is `entityDim entityTag elementType
/// numElementsInBlock`; every element line below it is
/// `elementTag node...` with the node count fixed by the block's
/// element type. Physical and partition tags come from `tag_map`,
/// keyed by the block's (dimension, entity tag); an entity absent from
/// the map stamps the sentinel −1 physical tag and partition 0.
/// Node ids are rebased by `base` to zero-based connectivity.
pub fn read_elements_blocked(
    section: &str,
    num_blocks: usize,
    tag_map: &EntityTagMap,
    base: usize,
) -> Result<ElementAggregate> {
    let mut aggregate = ElementAggregate::default();
    let mut lines = section.lines();
    let mut line_no = 0;

    // Leading count line: numBlocks numElements minTag maxTag
    next_line(&mut lines, &mut line_no, "the section count line")?;

    for _ in 0..num_blocks {
        let header = next_line(&mut lines, &mut line_no, "a block header")?;
        let header = parse_uints(header);
        if header.len() < 4 {
            return Err(malformed(line_no, "block header has fewer than 4 fields"));
        }
        let (entity_dim, entity_tag) = (header[0] as u8, header[1]);
        let etype = header[2] as i32;
        let num_in_block = header[3];

        let num_nodes = nodes_per_element(etype)?;
        let info = tag_map
            .get(&(entity_dim, entity_tag))
            .copied()
            .unwrap_or(EntityTagInfo {
                physical_tag: NO_TAG,
                partition_tag: 0,
            });

        for _ in 0..num_in_block {
            let element = next_line(&mut lines, &mut line_no, "an element line")?;
            let fields = parse_uints(element);
            // elementTag then the node ids
            if fields.len() < 1 + num_nodes {
                return Err(malformed(
                    line_no,
                    format!(
                        "element of type {etype} needs {num_nodes} nodes, found {}",
                        fields.len().saturating_sub(1)
                    ),
                ));
            }

            let mut nodes: SmallVec<[usize; 8]> = SmallVec::new();
            for &tag in &fields[1..1 + num_nodes] {
                let id = (tag as usize).checked_sub(base).ok_or_else(|| {
                    malformed(line_no, format!("node id {tag} below id base {base}"))
                })?;
                nodes.push(id);
            }

            aggregate.push(
                &nodes,
                info.physical_tag as i32,
                entity_tag as i32,
                info.partition_tag as i32,
                etype,
            );
        }
    }

    Ok(aggregate)
}

/// Read a flat (2.2) element section.
///
/// Rows are `elementTag elementType numTags tag... node...`. By the 2.2
/// convention tag 0 is the physical tag, tag 1 the geometric entity tag
/// and, when a partition tag list is present (`numTags >= 4`), tag 3 is
/// the owning partition. The variable tag count shifts the connectivity
/// offset per row — the same offset arithmetic as the entity decoder.
pub fn read_elements_flat(
    section: &str,
    num_elements: usize,
    base: usize,
) -> Result<ElementAggregate> {
    let mut aggregate = ElementAggregate::default();
    let mut lines = section.lines();
    let mut line_no = 0;

    // Leading count line
    next_line(&mut lines, &mut line_no, "the section count line")?;

    for _ in 0..num_elements {
        let element = next_line(&mut lines, &mut line_no, "an element line")?;
        let fields = parse_uints(element);
        if fields.len() < 3 {
            return Err(malformed(line_no, "element line has fewer than 3 fields"));
        }
        let etype = fields[1] as i32;
        let num_tags = fields[2] as usize;
        let num_nodes = nodes_per_element(etype)?;

        let connectivity_start = 3 + num_tags;
        if fields.len() < connectivity_start + num_nodes {
            return Err(malformed(
                line_no,
                format!(
                    "element of type {etype} needs {num_nodes} nodes after {num_tags} tags"
                ),
            ));
        }

        let phys = if num_tags > 0 { fields[3] as i32 } else { 0 };
        let geom = if num_tags > 1 { fields[4] as i32 } else { 0 };
        let part = if num_tags > 3 { fields[6] as i32 } else { 0 };

        let mut nodes: SmallVec<[usize; 8]> = SmallVec::new();
        for &tag in &fields[connectivity_start..connectivity_start + num_nodes] {
            let id = (tag as usize)
                .checked_sub(base)
                .ok_or_else(|| malformed(line_no, format!("node id {tag} below id base {base}")))?;
            nodes.push(id);
        }

        aggregate.push(&nodes, phys, geom, part, etype);
    }

    Ok(aggregate)
}
