// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end ingestion of both mesh-format versions: section split,
//! physical names, entity tags, nodes, elements, tetrahedra.

use approx::assert_relative_eq;
use msh_lite_core::{
    boundary_code, decode_entity, domain_code, extract_between, nodes_per_element,
    parse_physical_names, parse_uints, read_elements_blocked, read_elements_flat,
    read_nodes_blocked, read_nodes_flat, ElementAggregate, EntityKind, EntityTagInfo,
    EntityTagMap, NodeTable, TETRAHEDRON_TYPE,
};
use msh_lite_geometry::Tetrahedron;

/// Five nodes, two tetrahedra sharing the face 2-3-4; the second one is
/// listed left-handed (2 3 5 4) and must be corrected at validation.
/// Exact volumes: 1/6 and 1/3.
const MESH_V4: &str = "\
$MeshFormat
4.1 0 8
$EndMeshFormat
$PhysicalNames
2
2 7 \"wall\"
3 10 \"fluid\"
$EndPhysicalNames
$Entities
0 0 0 1
1 0.0 0.0 0.0 1.0 1.0 1.0 1 10
$EndEntities
$Nodes
1 5 1 5
3 1 0 5
1
2
3
4
5
0.0 0.0 0.0
1.0 0.0 0.0
0.0 1.0 0.0
0.0 0.0 1.0
1.0 1.0 1.0
$EndNodes
$Elements
1 2 1 2
3 1 4 2
1 1 2 3 4
2 2 3 5 4
$EndElements
";

/// The same mesh in the flat 2.2 layout.
const MESH_V2: &str = "\
$MeshFormat
2.2 0 8
$EndMeshFormat
$PhysicalNames
2
2 7 \"wall\"
3 10 \"fluid\"
$EndPhysicalNames
$Nodes
5
1 0.0 0.0 0.0
2 1.0 0.0 0.0
3 0.0 1.0 0.0
4 0.0 0.0 1.0
5 1.0 1.0 1.0
$EndNodes
$Elements
2
1 4 2 10 1 1 2 3 4
2 4 2 10 1 2 3 5 4
$EndElements
";

/// Build one tetrahedron per 4-node volume element, validate each, and
/// return the corrected volumes.
fn validated_volumes(table: &NodeTable, aggregate: &ElementAggregate) -> Vec<f64> {
    let mut volumes = Vec::new();
    let mut offset = 0;
    for (i, &etype) in aggregate.etype.iter().enumerate() {
        let width = nodes_per_element(etype).unwrap();
        if etype == TETRAHEDRON_TYPE {
            let row = &aggregate.etov[offset..offset + 4];
            let mut tet = Tetrahedron::new(
                table,
                i + 1,
                [row[0], row[1], row[2], row[3]],
                etype,
                aggregate.part_tag[i] as i64,
            )
            .unwrap();
            volumes.push(tet.validate_orientation());
        }
        offset += width;
    }
    volumes
}

fn check_physical_names(file: &str) {
    let body = extract_between(file, "$PhysicalNames\n", "$EndPhysicalNames").unwrap();
    let names = parse_physical_names(body).unwrap();
    assert_eq!(names.len(), 2);
    assert_eq!(boundary_code(&names[0].name), Some(2));
    assert_eq!(domain_code(&names[1].name), Some(0));
}

#[test]
fn ingest_block_format() {
    check_physical_names(MESH_V4);

    // Entity section: counts line, then the single volume entity
    let entities = extract_between(MESH_V4, "$Entities\n", "$EndEntities").unwrap();
    let mut entity_lines = entities.lines();
    let counts = parse_uints(entity_lines.next().unwrap());
    assert_eq!(counts, vec![0, 0, 0, 1]);

    let volume_entity = decode_entity(entity_lines.next().unwrap(), EntityKind::Volume).unwrap();
    assert_eq!(volume_entity.physical_tag, 10);

    let mut tag_map = EntityTagMap::default();
    tag_map.insert(
        (3, volume_entity.entity_tag),
        EntityTagInfo {
            physical_tag: volume_entity.physical_tag,
            partition_tag: 0,
        },
    );

    // Node section header: numBlocks numNodes minTag maxTag
    let nodes = extract_between(MESH_V4, "$Nodes\n", "$EndNodes").unwrap();
    let header = parse_uints(nodes.lines().next().unwrap());
    let table = read_nodes_blocked(nodes, header[0] as usize, header[1] as usize, 3, 1).unwrap();
    assert_eq!(table.len(), 5);
    assert_eq!(table.coords(4).unwrap(), &[1.0, 1.0, 1.0]);

    // Element section
    let elements = extract_between(MESH_V4, "$Elements\n", "$EndElements").unwrap();
    let header = parse_uints(elements.lines().next().unwrap());
    let aggregate = read_elements_blocked(elements, header[0] as usize, &tag_map, 1).unwrap();
    assert_eq!(aggregate.len(), 2);
    assert_eq!(aggregate.phys_tag, vec![10, 10]);

    let volumes = validated_volumes(&table, &aggregate);
    assert_relative_eq!(volumes[0], 1.0 / 6.0, epsilon = 1e-12);
    assert_relative_eq!(volumes[1], 1.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn ingest_flat_format() {
    check_physical_names(MESH_V2);

    let nodes = extract_between(MESH_V2, "$Nodes\n", "$EndNodes").unwrap();
    let count: usize = nodes.lines().next().unwrap().trim().parse().unwrap();
    let table = read_nodes_flat(nodes, count, 3).unwrap();
    assert_eq!(table.len(), 5);

    let elements = extract_between(MESH_V2, "$Elements\n", "$EndElements").unwrap();
    let count: usize = elements.lines().next().unwrap().trim().parse().unwrap();
    let aggregate = read_elements_flat(elements, count, 1).unwrap();
    assert_eq!(aggregate.phys_tag, vec![10, 10]);
    assert_eq!(aggregate.geom_tag, vec![1, 1]);

    let volumes = validated_volumes(&table, &aggregate);
    assert_relative_eq!(volumes[0], 1.0 / 6.0, epsilon = 1e-12);
    assert_relative_eq!(volumes[1], 1.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn both_formats_agree() {
    let nodes_v4 = extract_between(MESH_V4, "$Nodes\n", "$EndNodes").unwrap();
    let table_v4 = read_nodes_blocked(nodes_v4, 1, 5, 3, 1).unwrap();

    let nodes_v2 = extract_between(MESH_V2, "$Nodes\n", "$EndNodes").unwrap();
    let table_v2 = read_nodes_flat(nodes_v2, 5, 3).unwrap();

    assert_eq!(table_v4.as_slice(), table_v2.as_slice());
}
