//! # Graphiz Core
//!
//! In-memory directed-graph model with step-by-step algorithm playback.
//!
//! Graphiz keeps an editable graph (vertices, directed edges, optional
//! integer weights) and runs breadth-first search, depth-first search and
//! Dijkstra's shortest paths over label-keyed adjacency snapshots. Every
//! run yields a deterministic visit order or relaxation trace that can be
//! replayed frame by frame.
//!
//! ## Features
//!
//! - **Editable model**: vertex and edge CRUD with keystroke-level label
//!   and weight editing
//! - **Deterministic traversals**: BFS and DFS over insertion-ordered
//!   adjacency mappings
//! - **Shortest paths**: Dijkstra with a full relaxation trace and a final
//!   distance table
//! - **Playback**: current/frontier/visited highlight frames replayed over
//!   an immutable snapshot
//!
//! ## Quick Start
//!
//! ```rust
//! use graphiz_core::graph::{Color, GraphStore, Position};
//!
//! fn main() -> graphiz_core::Result<()> {
//!     let mut store = GraphStore::new();
//!     let a = store.create_vertex(Position::new(100.0, 100.0), Color::BLACK);
//!     let b = store.create_vertex(Position::new(300.0, 100.0), Color::BLACK);
//!     let c = store.create_vertex(Position::new(200.0, 250.0), Color::BLACK);
//!     store.create_weighted_edge(a, b, Some(4))?;
//!     store.create_weighted_edge(b, c, Some(1))?;
//!     store.create_weighted_edge(a, c, Some(9))?;
//!
//!     let order = store.run_bfs("V0");
//!     assert_eq!(order, ["V0", "V1", "V2"]);
//!
//!     let run = store.run_dijkstra("V0")?;
//!     assert_eq!(run.distance("V2").unwrap().value(), Some(5));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
// Clippy lints configured in workspace Cargo.toml [workspace.lints.clippy]
#![cfg_attr(
    test,
    allow(
        clippy::float_cmp,
        clippy::cast_precision_loss,
        clippy::uninlined_format_args
    )
)]

pub mod config;
pub mod error;
pub mod graph;
pub mod playback;

pub use config::{ConfigError, GraphizConfig};
pub use error::{Error, Result};
pub use graph::{Algorithm, Color, DijkstraRun, Distance, GraphStore, Position, Selection};
pub use playback::{HighlightState, PlaybackFrame, TraversalPlayback};
