//! The graph model: entity store, adjacency snapshots and algorithms.
//!
//! [`GraphStore`] owns vertices, edges and the selection. Algorithm runs
//! never touch the store; they rebuild a label-keyed adjacency snapshot
//! ([`adjacency`]) and run over that, so a run always reflects the store
//! state at call time and mutating the store never invalidates a running
//! playback.
//!
//! # Example
//!
//! ```rust
//! use graphiz_core::graph::{Color, GraphStore, Position};
//!
//! let mut store = GraphStore::new();
//! let a = store.create_vertex(Position::new(100.0, 100.0), Color::BLACK);
//! let b = store.create_vertex(Position::new(300.0, 100.0), Color::BLACK);
//! let c = store.create_vertex(Position::new(200.0, 300.0), Color::BLACK);
//! store.create_weighted_edge(a, b, Some(1)).unwrap();
//! store.create_weighted_edge(b, c, Some(2)).unwrap();
//! store.create_weighted_edge(a, c, Some(10)).unwrap();
//!
//! let run = store.run_dijkstra("V0").unwrap();
//! assert_eq!(run.distance("V2").unwrap().value(), Some(3));
//! ```

pub mod adjacency;
pub mod dijkstra;
mod store;
pub mod traversal;
mod types;

#[cfg(test)]
mod adjacency_tests;
#[cfg(test)]
mod traversal_tests;
#[cfg(test)]
mod types_tests;

pub use adjacency::{build_unweighted, build_weighted, AdjacencyMap, WeightedAdjacencyMap};
pub use dijkstra::{dijkstra, DijkstraRun, DijkstraStep, Distance, DistanceTable};
pub use store::GraphStore;
pub use traversal::{bfs, dfs, Algorithm};
pub use types::{
    Color, Edge, EdgeId, EdgeView, EdgeWeight, GraphStats, Position, Selection, Vertex, VertexId,
    VertexView,
};
