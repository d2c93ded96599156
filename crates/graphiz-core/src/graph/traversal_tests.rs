//! Tests for BFS and DFS visit-order contracts.

use super::adjacency::AdjacencyMap;
use super::traversal::{bfs, dfs, Algorithm};

fn adjacency(entries: &[(&str, &[&str])]) -> AdjacencyMap {
    let mut map = AdjacencyMap::new();
    for (from, neighbors) in entries {
        map.insert(
            (*from).to_string(),
            neighbors.iter().map(|n| (*n).to_string()).collect(),
        );
    }
    map
}

/// Linear graph: A → B → C → D
fn linear() -> AdjacencyMap {
    adjacency(&[("A", &["B"]), ("B", &["C"]), ("C", &["D"])])
}

/// Diamond graph: A → B, A → C, B → D, C → D
fn diamond() -> AdjacencyMap {
    adjacency(&[("A", &["B", "C"]), ("B", &["D"]), ("C", &["D"])])
}

/// Cyclic graph: A → B → C → A
fn cycle() -> AdjacencyMap {
    adjacency(&[("A", &["B"]), ("B", &["C"]), ("C", &["A"])])
}

// ── BFS ────────────────────────────────────────────────────────────

#[test]
fn test_bfs_linear_order() {
    assert_eq!(bfs(&linear(), "A"), ["A", "B", "C", "D"]);
}

#[test]
fn test_bfs_diamond_visits_level_by_level() {
    assert_eq!(bfs(&diamond(), "A"), ["A", "B", "C", "D"]);
}

#[test]
fn test_bfs_cycle_terminates() {
    assert_eq!(bfs(&cycle(), "A"), ["A", "B", "C"]);
}

#[test]
fn test_bfs_mid_graph_start() {
    assert_eq!(bfs(&linear(), "C"), ["C", "D"]);
}

#[test]
fn test_bfs_unknown_start_is_visited_alone() {
    assert_eq!(bfs(&linear(), "Z"), ["Z"]);
}

#[test]
fn test_bfs_duplicate_neighbor_visited_once() {
    let map = adjacency(&[("A", &["B", "B"]), ("B", &[])]);
    assert_eq!(bfs(&map, "A"), ["A", "B"]);
}

#[test]
fn test_bfs_is_deterministic() {
    let map = diamond();
    let first = bfs(&map, "A");
    for _ in 0..10 {
        assert_eq!(bfs(&map, "A"), first);
    }
}

// ── DFS ────────────────────────────────────────────────────────────

#[test]
fn test_dfs_linear_order() {
    assert_eq!(dfs(&linear(), "A"), ["A", "B", "C", "D"]);
}

#[test]
fn test_dfs_expands_last_neighbor_first() {
    // A's neighbors are pushed in list order, so C (pushed last) pops first.
    assert_eq!(dfs(&diamond(), "A"), ["A", "C", "D", "B"]);
}

#[test]
fn test_dfs_marks_on_push_not_on_pop() {
    // B sits on the stack while C is expanded; C → B must not re-add it.
    let map = adjacency(&[("A", &["B", "C"]), ("C", &["B"])]);
    assert_eq!(dfs(&map, "A"), ["A", "C", "B"]);
}

#[test]
fn test_dfs_cycle_terminates() {
    assert_eq!(dfs(&cycle(), "A"), ["A", "B", "C"]);
}

#[test]
fn test_dfs_unknown_start_is_visited_alone() {
    assert_eq!(dfs(&diamond(), "Z"), ["Z"]);
}

#[test]
fn test_bfs_and_dfs_cover_the_same_vertices() {
    let map = diamond();
    let mut from_bfs = bfs(&map, "A");
    let mut from_dfs = dfs(&map, "A");
    from_bfs.sort();
    from_dfs.sort();
    assert_eq!(from_bfs, from_dfs);
}

// ── Algorithm captions ─────────────────────────────────────────────

#[test]
fn test_algorithm_captions() {
    assert_eq!(Algorithm::Bfs.name(), "Breadth-first search (BFS)");
    assert_eq!(Algorithm::Bfs.complexity(), "O(V+E)");
    assert_eq!(Algorithm::Dfs.complexity(), "O(V+E)");
    assert_eq!(Algorithm::Dijkstra.name(), "Dijkstra");
    assert_eq!(Algorithm::Dijkstra.complexity(), "O(E+V log V)");
    assert_eq!(Algorithm::Dfs.to_string(), "Depth-first search (DFS)");
}
