//! In-memory entity store for vertices, edges and the current selection.
//!
//! Vertices are soft-deleted: the slot stays behind flagged unusable so ids
//! remain stable, while every edge touching the vertex is removed outright.
//! Mutations are synchronous and immediately consistent; algorithm runs
//! rebuild their adjacency snapshot from the store on demand.

use indexmap::IndexMap;

use crate::error::{Error, Result};

use super::adjacency;
use super::dijkstra::{self, DijkstraRun};
use super::traversal;
use super::types::{
    Color, Edge, EdgeId, EdgeView, EdgeWeight, GraphStats, Position, Selection, Vertex, VertexId,
    VertexView,
};

/// Label fallback used for algorithm runs when nothing is selected.
const FALLBACK_START_LABEL: &str = "V0";

fn is_printable(ch: char) -> bool {
    ch == ' ' || ch.is_ascii_graphic()
}

/// Owner of all graph entities, the selection and the id counters.
///
/// Ids are assigned from per-kind monotonic counters that only advance on
/// successful creation; deleting entities never frees an id for reuse.
///
/// # Example
///
/// ```rust
/// use graphiz_core::graph::{Color, GraphStore, Position};
///
/// let mut store = GraphStore::new();
/// let a = store.create_vertex(Position::new(120.0, 80.0), Color::BLACK);
/// let b = store.create_vertex(Position::new(300.0, 80.0), Color::BLACK);
/// store.create_edge(a, b).unwrap();
///
/// assert_eq!(store.run_bfs("V0"), ["V0", "V1"]);
/// ```
#[derive(Debug, Default)]
pub struct GraphStore {
    /// All vertices ever created, deleted ones included, in creation order.
    vertices: IndexMap<VertexId, Vertex>,
    /// Live edges in creation order.
    edges: IndexMap<EdgeId, Edge>,
    /// Current selection, resolved by lookup at time of use.
    selection: Selection,
    next_vertex_id: u64,
    next_edge_id: u64,
}

impl GraphStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ── Vertex CRUD ────────────────────────────────────────────────────

    /// Creates a vertex with the auto-generated `V{id}` label.
    pub fn create_vertex(&mut self, position: Position, color: Color) -> VertexId {
        let id = VertexId::new(self.next_vertex_id);
        let label = format!("V{id}");
        self.vertices
            .insert(id, Vertex::new(id, label, position, color));
        self.next_vertex_id += 1;
        tracing::debug!(vertex = %id, "vertex created");
        id
    }

    /// Creates a vertex with an explicit label.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidLabel` if the label contains characters outside
    /// the printable ASCII range.
    pub fn create_vertex_labeled(
        &mut self,
        position: Position,
        color: Color,
        label: &str,
    ) -> Result<VertexId> {
        validate_label(label)?;
        let id = VertexId::new(self.next_vertex_id);
        self.vertices
            .insert(id, Vertex::new(id, label.to_string(), position, color));
        self.next_vertex_id += 1;
        tracing::debug!(vertex = %id, label, "vertex created");
        Ok(id)
    }

    /// Gets a usable vertex by id.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id).filter(|v| v.is_usable())
    }

    /// Returns all usable vertices in creation order.
    #[must_use]
    pub fn usable_vertices(&self) -> Vec<&Vertex> {
        self.vertices.values().filter(|v| v.is_usable()).collect()
    }

    /// Finds the first usable vertex carrying the given label.
    ///
    /// Labels are not unique; duplicates resolve to the earliest creation.
    #[must_use]
    pub fn vertex_by_label(&self, label: &str) -> Option<&Vertex> {
        self.vertices
            .values()
            .find(|v| v.is_usable() && v.label() == label)
    }

    /// Soft-deletes a vertex and removes every edge touching it.
    ///
    /// The slot stays behind flagged unusable, so the id is never reused.
    /// Clears the selection if it pointed at the vertex or at a removed edge.
    /// Returns the number of cascaded edge removals.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownVertex` if the id does not resolve to a usable
    /// vertex.
    pub fn delete_vertex(&mut self, id: VertexId) -> Result<usize> {
        let vertex = self.usable_vertex_mut(id)?;
        vertex.set_usable(false);

        let cascade: Vec<EdgeId> = self
            .edges
            .values()
            .filter(|e| e.from() == id || e.to() == id)
            .map(Edge::id)
            .collect();
        for edge_id in &cascade {
            self.edges.shift_remove(edge_id);
            if self.selection == Selection::Edge(*edge_id) {
                self.selection = Selection::None;
            }
        }
        if self.selection == Selection::Vertex(id) {
            self.selection = Selection::None;
        }
        tracing::debug!(vertex = %id, cascaded_edges = cascade.len(), "vertex deleted");
        Ok(cascade.len())
    }

    /// Moves a vertex to a new position.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownVertex` if the id does not resolve to a usable
    /// vertex.
    pub fn set_position(&mut self, id: VertexId, position: Position) -> Result<()> {
        self.usable_vertex_mut(id)?.set_position(position);
        Ok(())
    }

    // ── Label editing ──────────────────────────────────────────────────

    /// Feeds one typed character into a vertex label.
    ///
    /// The first keystroke replaces an auto-generated `V{digits}` label
    /// wholesale; afterwards characters append. Input outside the printable
    /// ASCII range is ignored.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownVertex` if the id does not resolve to a usable
    /// vertex.
    pub fn type_label_char(&mut self, id: VertexId, ch: char) -> Result<()> {
        let vertex = self.usable_vertex_mut(id)?;
        if !is_printable(ch) {
            return Ok(());
        }
        if vertex.has_default_label() {
            vertex.set_label(ch.to_string());
        } else {
            vertex.push_label_char(ch);
        }
        Ok(())
    }

    /// Removes the last character of a vertex label, if any.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownVertex` if the id does not resolve to a usable
    /// vertex.
    pub fn backspace_label(&mut self, id: VertexId) -> Result<()> {
        self.usable_vertex_mut(id)?.pop_label_char();
        Ok(())
    }

    /// Replaces a vertex label wholesale.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownVertex` if the id does not resolve to a usable
    /// vertex, or `Error::InvalidLabel` for non-printable input.
    pub fn set_label(&mut self, id: VertexId, label: &str) -> Result<()> {
        validate_label(label)?;
        self.usable_vertex_mut(id)?.set_label(label.to_string());
        Ok(())
    }

    // ── Edge CRUD ──────────────────────────────────────────────────────

    /// Creates an unweighted directed edge.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownEndpoint` if either endpoint does not resolve
    /// to a usable vertex, `Error::SelfLoop` if both endpoints are the same
    /// vertex, or `Error::DuplicateEdge` if an edge with this direction
    /// already connects the pair.
    pub fn create_edge(&mut self, from: VertexId, to: VertexId) -> Result<EdgeId> {
        self.validate_new_edge(from, to)?;
        let id = EdgeId::new(self.next_edge_id);
        self.edges.insert(id, Edge::new(id, from, to, None));
        self.next_edge_id += 1;
        tracing::debug!(edge = %id, %from, %to, "edge created");
        Ok(id)
    }

    /// Creates a weighted directed edge.
    ///
    /// Without an initial value the weight text starts at the `"0"`
    /// placeholder, ready for keystroke editing.
    ///
    /// # Errors
    ///
    /// Same rejections as [`create_edge`](Self::create_edge).
    pub fn create_weighted_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        initial: Option<i64>,
    ) -> Result<EdgeId> {
        self.validate_new_edge(from, to)?;
        let weight = match initial {
            Some(value) => EdgeWeight::from_value(value),
            None => EdgeWeight::new(),
        };
        let id = EdgeId::new(self.next_edge_id);
        self.edges.insert(id, Edge::new(id, from, to, Some(weight)));
        self.next_edge_id += 1;
        tracing::debug!(edge = %id, %from, %to, "weighted edge created");
        Ok(id)
    }

    /// Gets an edge by id.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(&id)
    }

    /// Returns all edges in creation order.
    #[must_use]
    pub fn all_edges(&self) -> Vec<&Edge> {
        self.edges.values().collect()
    }

    /// Removes an edge outright, clearing the selection if it pointed there.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownEdge` if no edge with this id exists.
    pub fn delete_edge(&mut self, id: EdgeId) -> Result<()> {
        if self.edges.shift_remove(&id).is_none() {
            return Err(Error::UnknownEdge(id));
        }
        if self.selection == Selection::Edge(id) {
            self.selection = Selection::None;
        }
        tracing::debug!(edge = %id, "edge deleted");
        Ok(())
    }

    // ── Weight editing ─────────────────────────────────────────────────

    /// Feeds one typed character into an edge weight.
    ///
    /// Digits replace the `"0"` placeholder or append; a minus sign is only
    /// accepted into an empty buffer; everything else is ignored.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownEdge` if no edge with this id exists, or
    /// `Error::UnweightedEdge` if the edge was created unweighted.
    pub fn type_weight_char(&mut self, id: EdgeId, ch: char) -> Result<()> {
        self.edge_weight_mut(id)?.type_char(ch);
        Ok(())
    }

    /// Removes the last character of an edge weight, if any.
    ///
    /// # Errors
    ///
    /// Same rejections as [`type_weight_char`](Self::type_weight_char).
    pub fn backspace_weight(&mut self, id: EdgeId) -> Result<()> {
        self.edge_weight_mut(id)?.backspace();
        Ok(())
    }

    /// Replaces an edge weight wholesale.
    ///
    /// # Errors
    ///
    /// Same rejections as [`type_weight_char`](Self::type_weight_char).
    pub fn set_weight(&mut self, id: EdgeId, value: i64) -> Result<()> {
        self.edge_weight_mut(id)?.set_value(value);
        Ok(())
    }

    // ── Selection ──────────────────────────────────────────────────────

    /// Selects a vertex.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownVertex` if the id does not resolve to a usable
    /// vertex.
    pub fn select_vertex(&mut self, id: VertexId) -> Result<()> {
        if self.vertex(id).is_none() {
            return Err(Error::UnknownVertex(id));
        }
        self.selection = Selection::Vertex(id);
        Ok(())
    }

    /// Selects an edge.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownEdge` if no edge with this id exists.
    pub fn select_edge(&mut self, id: EdgeId) -> Result<()> {
        if self.edge(id).is_none() {
            return Err(Error::UnknownEdge(id));
        }
        self.selection = Selection::Edge(id);
        Ok(())
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selection = Selection::None;
    }

    /// Returns the current selection handle.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Resolves the selection to a vertex, if it points at a usable one.
    #[must_use]
    pub fn selected_vertex(&self) -> Option<&Vertex> {
        self.selection.vertex().and_then(|id| self.vertex(id))
    }

    /// Resolves the selection to an edge, if it points at one.
    #[must_use]
    pub fn selected_edge(&self) -> Option<&Edge> {
        self.selection.edge().and_then(|id| self.edge(id))
    }

    /// Returns the label algorithm runs start from.
    ///
    /// The selected vertex's label, falling back to `"V0"` when nothing is
    /// selected.
    #[must_use]
    pub fn start_label(&self) -> String {
        self.selected_vertex()
            .map_or_else(|| FALLBACK_START_LABEL.to_string(), |v| v.label().to_string())
    }

    // ── Views and counts ───────────────────────────────────────────────

    /// Returns render snapshots of all usable vertices in creation order.
    #[must_use]
    pub fn vertex_views(&self) -> Vec<VertexView> {
        self.vertices
            .values()
            .filter(|v| v.is_usable())
            .map(|v| VertexView {
                id: v.id(),
                label: v.label().to_string(),
                position: v.position(),
                color: v.color(),
                selected: self.selection == Selection::Vertex(v.id()),
            })
            .collect()
    }

    /// Returns render snapshots of all edges with endpoint positions
    /// resolved, in creation order.
    #[must_use]
    pub fn edge_views(&self) -> Vec<EdgeView> {
        self.edges
            .values()
            .filter_map(|e| {
                let from = self.vertex(e.from())?;
                let to = self.vertex(e.to())?;
                Some(EdgeView {
                    id: e.id(),
                    from: from.id(),
                    to: to.id(),
                    from_position: from.position(),
                    to_position: to.position(),
                    weight: e.weight().map(|w| w.text().to_string()),
                    selected: self.selection == Selection::Edge(e.id()),
                })
            })
            .collect()
    }

    /// Returns the number of usable vertices.
    #[must_use]
    pub fn usable_vertex_count(&self) -> usize {
        self.vertices.values().filter(|v| v.is_usable()).count()
    }

    /// Returns the number of vertices ever created, deleted ones included.
    #[must_use]
    pub fn total_vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges currently stored.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the counts shown by the details overlay.
    #[must_use]
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            usable_vertices: self.usable_vertex_count(),
            total_vertices: self.total_vertex_count(),
            edges: self.edge_count(),
        }
    }

    // ── Algorithm runs ─────────────────────────────────────────────────

    /// Runs breadth-first search from the given start label.
    ///
    /// Rebuilds the adjacency mapping from the current store state, so the
    /// returned visit order reflects all mutations up to this call.
    #[must_use]
    pub fn run_bfs(&self, start: &str) -> Vec<String> {
        let adjacency = adjacency::build_unweighted(self);
        let order = traversal::bfs(&adjacency, start);
        tracing::info!(algorithm = "bfs", start, visited = order.len(), "traversal finished");
        order
    }

    /// Runs depth-first search from the given start label.
    #[must_use]
    pub fn run_dfs(&self, start: &str) -> Vec<String> {
        let adjacency = adjacency::build_unweighted(self);
        let order = traversal::dfs(&adjacency, start);
        tracing::info!(algorithm = "dfs", start, visited = order.len(), "traversal finished");
        order
    }

    /// Runs Dijkstra's algorithm from the given start label.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnweightedEdge` if any edge between usable vertices
    /// was created unweighted; shortest paths need every weight present.
    pub fn run_dijkstra(&self, start: &str) -> Result<DijkstraRun> {
        let adjacency = adjacency::build_weighted(self)
            .inspect_err(|e| tracing::warn!(error = %e, "dijkstra refused"))?;
        let run = dijkstra::dijkstra(&adjacency, start);
        tracing::info!(
            algorithm = "dijkstra",
            start,
            steps = run.trace.len(),
            "shortest paths computed"
        );
        Ok(run)
    }

    // ── Internal helpers ───────────────────────────────────────────────

    fn usable_vertex_mut(&mut self, id: VertexId) -> Result<&mut Vertex> {
        self.vertices
            .get_mut(&id)
            .filter(|v| v.is_usable())
            .ok_or(Error::UnknownVertex(id))
    }

    fn edge_weight_mut(&mut self, id: EdgeId) -> Result<&mut EdgeWeight> {
        self.edges
            .get_mut(&id)
            .ok_or(Error::UnknownEdge(id))?
            .weight_mut()
            .ok_or(Error::UnweightedEdge(id))
    }

    fn validate_new_edge(&self, from: VertexId, to: VertexId) -> Result<()> {
        if self.vertex(from).is_none() {
            tracing::warn!(%from, %to, "edge rejected, source endpoint unusable");
            return Err(Error::UnknownEndpoint(from));
        }
        if self.vertex(to).is_none() {
            tracing::warn!(%from, %to, "edge rejected, target endpoint unusable");
            return Err(Error::UnknownEndpoint(to));
        }
        if from == to {
            tracing::warn!(%from, "edge rejected, self-loop");
            return Err(Error::SelfLoop(from));
        }
        if self
            .edges
            .values()
            .any(|e| e.from() == from && e.to() == to)
        {
            tracing::warn!(%from, %to, "edge rejected, duplicate");
            return Err(Error::DuplicateEdge { from, to });
        }
        Ok(())
    }
}

fn validate_label(label: &str) -> Result<()> {
    if label.chars().all(is_printable) {
        Ok(())
    } else {
        Err(Error::InvalidLabel(label.to_string()))
    }
}
