//! Label-keyed adjacency snapshots.
//!
//! Algorithm runs do not maintain incremental indices; they rebuild one of
//! these mappings from the store on demand, so every run reflects the exact
//! store state at call time. Insertion order is preserved throughout, which
//! keeps visit orders and distance tables deterministic.

use indexmap::IndexMap;

use crate::error::{Error, Result};

use super::store::GraphStore;

/// Neighbor labels per vertex label, in edge creation order.
pub type AdjacencyMap = IndexMap<String, Vec<String>>;

/// `(weight, neighbor label)` pairs per vertex label, in edge creation order.
pub type WeightedAdjacencyMap = IndexMap<String, Vec<(i64, String)>>;

/// Builds the unweighted adjacency mapping.
///
/// Keys appear only for vertices with at least one outgoing edge; vertices
/// that merely receive edges (or are isolated) have no entry. Edges with a
/// deleted endpoint are excluded. Duplicate labels share one entry.
///
/// # Example
///
/// ```rust
/// use graphiz_core::graph::{adjacency, Color, GraphStore, Position};
///
/// let mut store = GraphStore::new();
/// let a = store.create_vertex(Position::new(0.0, 0.0), Color::BLACK);
/// let b = store.create_vertex(Position::new(50.0, 0.0), Color::BLACK);
/// store.create_edge(a, b).unwrap();
///
/// let adjacency = adjacency::build_unweighted(&store);
/// assert_eq!(adjacency["V0"], ["V1"]);
/// assert!(!adjacency.contains_key("V1"));
/// ```
#[must_use]
pub fn build_unweighted(store: &GraphStore) -> AdjacencyMap {
    let mut adjacency = AdjacencyMap::new();
    for edge in store.all_edges() {
        let (Some(from), Some(to)) = (store.vertex(edge.from()), store.vertex(edge.to())) else {
            continue;
        };
        adjacency
            .entry(from.label().to_string())
            .or_default()
            .push(to.label().to_string());
    }
    adjacency
}

/// Builds the weighted adjacency mapping.
///
/// Unlike the unweighted form, every usable vertex gets an entry even when
/// it has no outgoing edges; shortest-path runs seed their distance table
/// from these keys, so isolated vertices must be present.
///
/// # Errors
///
/// Returns `Error::UnweightedEdge` if any included edge was created
/// unweighted.
pub fn build_weighted(store: &GraphStore) -> Result<WeightedAdjacencyMap> {
    let mut adjacency = WeightedAdjacencyMap::new();
    for vertex in store.usable_vertices() {
        adjacency.entry(vertex.label().to_string()).or_default();
    }
    for edge in store.all_edges() {
        let (Some(from), Some(to)) = (store.vertex(edge.from()), store.vertex(edge.to())) else {
            continue;
        };
        let weight = edge.weight().ok_or(Error::UnweightedEdge(edge.id()))?;
        adjacency
            .entry(from.label().to_string())
            .or_default()
            .push((weight.value(), to.label().to_string()));
    }
    Ok(adjacency)
}
