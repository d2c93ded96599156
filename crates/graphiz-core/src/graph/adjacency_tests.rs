//! Tests for adjacency snapshot construction.

use crate::error::Error;

use super::adjacency::{build_unweighted, build_weighted};
use super::store::GraphStore;
use super::types::{Color, Position, VertexId};

fn vertex(store: &mut GraphStore) -> VertexId {
    store.create_vertex(Position::new(0.0, 0.0), Color::BLACK)
}

#[test]
fn test_unweighted_keys_come_only_from_edges() {
    let mut store = GraphStore::new();
    let a = vertex(&mut store);
    let b = vertex(&mut store);
    let _isolated = vertex(&mut store);
    store.create_edge(a, b).unwrap();

    let adjacency = build_unweighted(&store);
    assert_eq!(adjacency.len(), 1);
    assert_eq!(adjacency["V0"], ["V1"]);
    assert!(!adjacency.contains_key("V1"));
    assert!(!adjacency.contains_key("V2"));
}

#[test]
fn test_unweighted_preserves_edge_creation_order() {
    let mut store = GraphStore::new();
    let a = vertex(&mut store);
    let b = vertex(&mut store);
    let c = vertex(&mut store);
    let d = vertex(&mut store);
    store.create_edge(a, c).unwrap();
    store.create_edge(a, b).unwrap();
    store.create_edge(a, d).unwrap();

    let adjacency = build_unweighted(&store);
    assert_eq!(adjacency["V0"], ["V2", "V1", "V3"]);
}

#[test]
fn test_weighted_seeds_every_usable_vertex() {
    let mut store = GraphStore::new();
    let a = vertex(&mut store);
    let b = vertex(&mut store);
    let _isolated = vertex(&mut store);
    store.create_weighted_edge(a, b, Some(4)).unwrap();

    let adjacency = build_weighted(&store).unwrap();
    assert_eq!(adjacency.len(), 3);
    assert_eq!(adjacency["V0"], [(4, "V1".to_string())]);
    assert!(adjacency["V1"].is_empty());
    assert!(adjacency["V2"].is_empty());
}

#[test]
fn test_weighted_excludes_deleted_vertices() {
    let mut store = GraphStore::new();
    let a = vertex(&mut store);
    let b = vertex(&mut store);
    let c = vertex(&mut store);
    store.create_weighted_edge(a, b, Some(1)).unwrap();
    store.create_weighted_edge(b, c, Some(2)).unwrap();
    store.delete_vertex(c).unwrap();

    let adjacency = build_weighted(&store).unwrap();
    assert_eq!(adjacency.len(), 2);
    assert!(!adjacency.contains_key("V2"));
    assert!(adjacency["V1"].is_empty());
}

#[test]
fn test_weighted_rejects_unweighted_edge() {
    let mut store = GraphStore::new();
    let a = vertex(&mut store);
    let b = vertex(&mut store);
    let plain = store.create_edge(a, b).unwrap();

    assert_eq!(build_weighted(&store), Err(Error::UnweightedEdge(plain)));
}

#[test]
fn test_duplicate_labels_merge_into_one_entry() {
    let mut store = GraphStore::new();
    let a = store
        .create_vertex_labeled(Position::new(0.0, 0.0), Color::BLACK, "hub")
        .unwrap();
    let b = store
        .create_vertex_labeled(Position::new(10.0, 0.0), Color::BLACK, "hub")
        .unwrap();
    let c = vertex(&mut store);
    store.create_edge(a, c).unwrap();
    store.create_edge(b, c).unwrap();

    let adjacency = build_unweighted(&store);
    assert_eq!(adjacency.len(), 1);
    assert_eq!(adjacency["hub"], ["V2", "V2"]);
}

#[test]
fn test_rebuild_reflects_mutations() {
    let mut store = GraphStore::new();
    let a = vertex(&mut store);
    let b = vertex(&mut store);
    let ab = store.create_edge(a, b).unwrap();

    assert_eq!(build_unweighted(&store).len(), 1);
    store.delete_edge(ab).unwrap();
    assert!(build_unweighted(&store).is_empty());
}
