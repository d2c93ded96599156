//! Step-by-step playback of a finished algorithm run.
//!
//! A playback captures an immutable snapshot of the store at construction
//! (vertex copies, resolved edge views and the per-step data), then hands
//! out one frame per step. Mutating the store afterwards has no effect on
//! the frames.
//!
//! Highlights follow the canvas painting rules: the current vertex wins,
//! vertices consumed in earlier frames show as visited, and a vertex stays
//! marked as frontier from the frame after its discovery until it is
//! consumed. Labels are not unique, so a frame highlights every vertex
//! carrying the current label; a current label matching no vertex produces
//! a frame without a current highlight instead of failing.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::graph::{
    adjacency, Algorithm, DijkstraRun, DistanceTable, EdgeView, GraphStore, Position, Vertex,
    VertexId,
};

/// Visual state of one vertex within a playback frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightState {
    /// Not yet part of the run.
    Idle,
    /// Discovered by an earlier frame, not consumed yet.
    Frontier,
    /// Consumed in an earlier frame.
    Visited,
    /// Consumed by this frame.
    Current,
}

/// One vertex of a playback frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaybackVertex {
    /// Vertex id.
    pub id: VertexId,
    /// Display label.
    pub label: String,
    /// Canvas position at snapshot time.
    pub position: Position,
    /// Highlight for this frame.
    pub highlight: HighlightState,
}

/// One rendered step of a playback.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaybackFrame {
    /// Algorithm the run belongs to.
    pub algorithm: Algorithm,
    /// Zero-based frame index.
    pub index: usize,
    /// Label consumed by this frame.
    pub current: String,
    /// All snapshot vertices with their highlights.
    pub vertices: Vec<PlaybackVertex>,
    /// Distance table snapshot, present for shortest-path playbacks.
    pub distances: Option<DistanceTable>,
}

struct PlaybackStep {
    current: String,
    neighbors: Vec<String>,
    distances: Option<DistanceTable>,
}

/// Replays a finished run one frame at a time over a store snapshot.
///
/// # Example
///
/// ```rust
/// use graphiz_core::graph::{Algorithm, Color, GraphStore, Position};
/// use graphiz_core::playback::{HighlightState, TraversalPlayback};
///
/// let mut store = GraphStore::new();
/// let a = store.create_vertex(Position::new(0.0, 0.0), Color::BLACK);
/// let b = store.create_vertex(Position::new(80.0, 0.0), Color::BLACK);
/// store.create_edge(a, b).unwrap();
///
/// let order = store.run_bfs("V0");
/// let mut playback = TraversalPlayback::from_visit_order(&store, Algorithm::Bfs, order);
///
/// let frame = playback.step().unwrap();
/// assert_eq!(frame.current, "V0");
/// assert_eq!(frame.vertices[0].highlight, HighlightState::Current);
/// ```
pub struct TraversalPlayback {
    algorithm: Algorithm,
    vertices: Vec<Vertex>,
    edges: Vec<EdgeView>,
    steps: VecDeque<PlaybackStep>,
    frontier: FxHashSet<String>,
    consumed: usize,
    total: usize,
}

impl TraversalPlayback {
    /// Builds a playback for a BFS or DFS visit order.
    ///
    /// The frontier shown around each consumed vertex comes from the
    /// unweighted adjacency mapping at construction time.
    #[must_use]
    pub fn from_visit_order(store: &GraphStore, algorithm: Algorithm, order: Vec<String>) -> Self {
        let adjacency = adjacency::build_unweighted(store);
        let steps = order
            .into_iter()
            .map(|label| PlaybackStep {
                neighbors: adjacency.get(&label).cloned().unwrap_or_default(),
                current: label,
                distances: None,
            })
            .collect();
        Self::assemble(store, algorithm, steps)
    }

    /// Builds a playback that replays a shortest-path trace edge by edge.
    ///
    /// Each frame carries the distance table snapshot of its trace entry.
    #[must_use]
    pub fn from_dijkstra(store: &GraphStore, run: &DijkstraRun) -> Self {
        let steps = run
            .trace
            .iter()
            .map(|entry| PlaybackStep {
                current: entry.current.clone(),
                neighbors: vec![entry.neighbor.clone()],
                distances: Some(entry.distances.clone()),
            })
            .collect();
        Self::assemble(store, Algorithm::Dijkstra, steps)
    }

    fn assemble(store: &GraphStore, algorithm: Algorithm, steps: VecDeque<PlaybackStep>) -> Self {
        let total = steps.len();
        Self {
            algorithm,
            vertices: store.usable_vertices().into_iter().cloned().collect(),
            edges: store.edge_views(),
            steps,
            frontier: FxHashSet::default(),
            consumed: 0,
            total,
        }
    }

    /// Produces the next frame, or `None` once the run is replayed.
    pub fn step(&mut self) -> Option<PlaybackFrame> {
        let PlaybackStep {
            current,
            neighbors,
            distances,
        } = self.steps.pop_front()?;

        let vertices = self
            .vertices
            .iter()
            .map(|v| PlaybackVertex {
                id: v.id(),
                label: v.label().to_string(),
                position: v.position(),
                highlight: self.highlight_for(v, &current),
            })
            .collect();
        let frame = PlaybackFrame {
            algorithm: self.algorithm,
            index: self.consumed,
            current: current.clone(),
            vertices,
            distances,
        };

        for vertex in &mut self.vertices {
            if vertex.label() == current {
                vertex.set_visited(true);
            }
        }
        self.frontier.extend(neighbors);
        self.consumed += 1;

        Some(frame)
    }

    fn highlight_for(&self, vertex: &Vertex, current: &str) -> HighlightState {
        if vertex.label() == current {
            HighlightState::Current
        } else if vertex.is_visited() {
            HighlightState::Visited
        } else if self.frontier.contains(vertex.label()) {
            HighlightState::Frontier
        } else {
            HighlightState::Idle
        }
    }

    /// Returns the algorithm being replayed.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Returns the edge views captured at snapshot time.
    #[must_use]
    pub fn edges(&self) -> &[EdgeView] {
        &self.edges
    }

    /// Returns the total number of frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.total
    }

    /// Returns true for a playback with no frames at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Returns the number of frames not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.steps.len()
    }

    /// Returns true once every frame has been consumed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.steps.is_empty()
    }
}
