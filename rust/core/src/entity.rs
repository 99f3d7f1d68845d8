// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entity Tag Decoder
//!
//! Decodes one physical-to-geometric-entity definition line from the
//! `$Entities` / `$PartitionedEntities` sections of the block format.
//!
//! The line layout depends on the entity kind: point entities carry a
//! 3-field location where curves, surfaces and volumes carry a 6-field
//! bounding box, which shifts the physical-tag fields from 4/5 to 7/8.
//! The partitioned variant additionally carries a variable-length
//! partition-tag list between the fixed header and the physical-tag
//! fields, so those offsets move by the partition count just read.
//! Getting these offsets wrong is the classic failure mode of this
//! format; they are fixed here exactly and covered by tests.
//!
//! Lines are tokenized as floats (`extract::parse_floats`) because tag
//! fields interleave with real-valued coordinates, then narrowed to the
//! integer types of each field.

use crate::error::{Error, Result};
use crate::extract::parse_floats;

/// Physical-tag sentinel for entities that declare zero physical tags,
/// and partition-tag sentinel for entities shared by several partitions.
pub const NO_TAG: i64 = -1;

/// Geometric entity kind, by dimension.
///
/// Only point-ness matters for the line layout, but keeping the four
/// kinds makes call sites read like the file they decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Point,
    Curve,
    Surface,
    Volume,
}

impl EntityKind {
    /// Map an entity dimension (0..=3) to its kind.
    pub fn from_dim(dim: u8) -> Self {
        match dim {
            0 => Self::Point,
            1 => Self::Curve,
            2 => Self::Surface,
            _ => Self::Volume,
        }
    }

    fn is_point(self) -> bool {
        self == Self::Point
    }
}

/// Tags decoded from one plain entity-definition line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityTags {
    /// Entity identifier (field 0)
    pub entity_tag: u64,
    /// Associated physical tag, or [`NO_TAG`] when the line declares none
    pub physical_tag: i64,
}

/// Tags decoded from one partitioned entity-definition line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartitionedEntityTags {
    /// Entity identifier (field 0)
    pub entity_tag: u64,
    /// Tag of the parent entity this partition piece was cut from
    pub parent_tag: u64,
    /// Owning partition, or [`NO_TAG`] when the entity straddles more
    /// than one partition (interface entity)
    pub partition_tag: i64,
    /// Associated physical tag, or [`NO_TAG`] when the line declares none
    pub physical_tag: i64,
}

fn field(values: &[f64], idx: usize, what: &'static str, line: &str) -> Result<f64> {
    values.get(idx).copied().ok_or_else(|| Error::EntityField {
        field: idx,
        what,
        line: line.to_string(),
    })
}

/// Decode the entity tag and physical tag from a plain entity line.
///
/// Point layout: `tag x y z numPhys [phys...]` — count at field 4.
/// Other kinds: `tag minX minY minZ maxX maxY maxZ numPhys [phys...]`
/// — count at field 7. A zero count yields the −1 sentinel.
pub fn decode_entity(line: &str, kind: EntityKind) -> Result<EntityTags> {
    let values = parse_floats(line);

    let entity_tag = field(&values, 0, "entity tag", line)? as u64;

    let count_idx = if kind.is_point() { 4 } else { 7 };
    let num_physical = field(&values, count_idx, "physical tag count", line)? as usize;
    let physical_tag = if num_physical == 0 {
        NO_TAG
    } else {
        field(&values, count_idx + 1, "physical tag", line)? as i64
    };

    Ok(EntityTags {
        entity_tag,
        physical_tag,
    })
}

/// Decode tags from a partitioned entity line.
///
/// Both layouts start `tag parentDim parentTag numPartitions
/// partitionTag...`; the partition-tag list length moves every later
/// field. With the partition count `p`, the physical-tag count sits at
/// `7 + p` for points and `10 + p` for the other kinds (the location /
/// bounding-box fields sit in between). More than one partition marks
/// an interface entity: its partition tag is forced to the −1 sentinel
/// and the individual partition values are not kept.
pub fn decode_partitioned_entity(line: &str, kind: EntityKind) -> Result<PartitionedEntityTags> {
    let values = parse_floats(line);

    let entity_tag = field(&values, 0, "entity tag", line)? as u64;
    let parent_tag = field(&values, 2, "parent entity tag", line)? as u64;

    let num_partitions = field(&values, 3, "partition count", line)? as usize;
    let partition_tag = if num_partitions > 1 {
        NO_TAG
    } else {
        field(&values, 4, "partition tag", line)? as i64
    };

    let count_idx = if kind.is_point() { 7 } else { 10 } + num_partitions;
    let num_physical = field(&values, count_idx, "physical tag count", line)? as usize;
    let physical_tag = if num_physical == 0 {
        NO_TAG
    } else {
        field(&values, count_idx + 1, "physical tag", line)? as i64
    };

    Ok(PartitionedEntityTags {
        entity_tag,
        parent_tag,
        partition_tag,
        physical_tag,
    })
}
