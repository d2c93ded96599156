//! Core model types for the directed graph.
//!
//! Vertices are soft-deleted (they keep their slot and id, flagged unusable)
//! while edges are removed outright, so ids stay unique for the lifetime of
//! a store and are never reused.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a vertex.
///
/// Assigned by the owning [`GraphStore`](super::GraphStore) from a monotonic
/// counter. Deleting a vertex never frees its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(u64);

impl VertexId {
    /// Wraps a raw id value.
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id value.
    #[must_use]
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an edge.
///
/// Numbered independently from vertex ids, also monotonic and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(u64);

impl EdgeId {
    /// Wraps a raw id value.
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id value.
    #[must_use]
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A 2D canvas position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate in canvas pixels.
    pub x: f32,
    /// Vertical coordinate in canvas pixels.
    pub y: f32,
}

impl Position {
    /// Creates a position from coordinates.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Black, the default vertex fill.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Gray, the ghost-vertex fill shown under the cursor.
    pub const GRAY: Self = Self::rgb(130, 130, 130);
    /// Light gray.
    pub const LIGHT_GRAY: Self = Self::rgb(200, 200, 200);
    /// White, the canvas background.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Red, the playback highlight for the current vertex.
    pub const RED: Self = Self::rgb(230, 41, 55);
    /// Green, the playback highlight for visited vertices.
    pub const GREEN: Self = Self::rgb(0, 228, 48);
    /// Yellow, the playback highlight for frontier vertices.
    pub const YELLOW: Self = Self::rgb(253, 249, 0);
    /// Blue.
    pub const BLUE: Self = Self::rgb(0, 121, 241);

    /// Creates an opaque color from RGB channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// A vertex of the graph.
///
/// Created through [`GraphStore`](super::GraphStore), which assigns the id
/// and the default `V{id}` label. The `visited` flag belongs to playback
/// snapshots; the live store never sets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    id: VertexId,
    label: String,
    position: Position,
    color: Color,
    usable: bool,
    visited: bool,
}

impl Vertex {
    pub(crate) fn new(id: VertexId, label: String, position: Position, color: Color) -> Self {
        Self {
            id,
            label,
            position,
            color,
            usable: true,
            visited: false,
        }
    }

    /// Returns the vertex id.
    #[must_use]
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the canvas position.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the fill color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns false once the vertex has been deleted.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.usable
    }

    /// Returns the playback visited mark.
    #[must_use]
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    /// Returns true while the label still is the auto-generated `V` followed
    /// by digits. The first typed character replaces such a label wholesale.
    #[must_use]
    pub fn has_default_label(&self) -> bool {
        self.label
            .strip_prefix('V')
            .is_some_and(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()))
    }

    pub(crate) fn set_label(&mut self, label: String) {
        self.label = label;
    }

    pub(crate) fn push_label_char(&mut self, ch: char) {
        self.label.push(ch);
    }

    pub(crate) fn pop_label_char(&mut self) {
        self.label.pop();
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub(crate) fn set_usable(&mut self, usable: bool) {
        self.usable = usable;
    }

    pub(crate) fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }
}

/// Incrementally edited weight text of a weighted edge.
///
/// Mirrors keystroke editing: the initial `"0"` is a placeholder replaced by
/// the first typed digit, a minus sign is only accepted into an empty buffer,
/// and backspace removes the last character. Text that does not parse as an
/// `i64` (empty, a bare `-`, or overflow) reads as 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeWeight {
    text: String,
}

impl EdgeWeight {
    pub(crate) fn new() -> Self {
        Self {
            text: "0".to_string(),
        }
    }

    pub(crate) fn from_value(value: i64) -> Self {
        Self {
            text: value.to_string(),
        }
    }

    /// Returns the raw weight text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Parses the weight text, reading unparseable text as 0.
    #[must_use]
    pub fn value(&self) -> i64 {
        self.text.parse().unwrap_or(0)
    }

    pub(crate) fn type_char(&mut self, ch: char) {
        if ch.is_ascii_digit() {
            if self.text == "0" {
                self.text.clear();
            }
            self.text.push(ch);
        } else if ch == '-' && self.text.is_empty() {
            self.text.push(ch);
        }
    }

    pub(crate) fn backspace(&mut self) {
        self.text.pop();
    }

    pub(crate) fn set_value(&mut self, value: i64) {
        self.text = value.to_string();
    }
}

/// A directed edge between two vertices.
///
/// Edges are removed outright on deletion, so unlike vertices they carry no
/// usable flag. `weight` is present only for edges created weighted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    id: EdgeId,
    from: VertexId,
    to: VertexId,
    weight: Option<EdgeWeight>,
}

impl Edge {
    pub(crate) fn new(id: EdgeId, from: VertexId, to: VertexId, weight: Option<EdgeWeight>) -> Self {
        Self {
            id,
            from,
            to,
            weight,
        }
    }

    /// Returns the edge id.
    #[must_use]
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Returns the source vertex id.
    #[must_use]
    pub fn from(&self) -> VertexId {
        self.from
    }

    /// Returns the target vertex id.
    #[must_use]
    pub fn to(&self) -> VertexId {
        self.to
    }

    /// Returns the weight, if the edge was created weighted.
    #[must_use]
    pub fn weight(&self) -> Option<&EdgeWeight> {
        self.weight.as_ref()
    }

    /// Returns true for edges created weighted.
    #[must_use]
    pub fn is_weighted(&self) -> bool {
        self.weight.is_some()
    }

    pub(crate) fn weight_mut(&mut self) -> Option<&mut EdgeWeight> {
        self.weight.as_mut()
    }
}

/// The current selection, addressed by id.
///
/// Selection is resolved by lookup at time of use, so deleting the selected
/// entity can never leave a dangling handle behind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Selection {
    /// Nothing is selected.
    #[default]
    None,
    /// A vertex is selected.
    Vertex(VertexId),
    /// An edge is selected.
    Edge(EdgeId),
}

impl Selection {
    /// Returns true when nothing is selected.
    #[must_use]
    pub fn is_none(self) -> bool {
        self == Self::None
    }

    /// Returns the selected vertex id, if a vertex is selected.
    #[must_use]
    pub fn vertex(self) -> Option<VertexId> {
        match self {
            Self::Vertex(id) => Some(id),
            _ => None,
        }
    }

    /// Returns the selected edge id, if an edge is selected.
    #[must_use]
    pub fn edge(self) -> Option<EdgeId> {
        match self {
            Self::Edge(id) => Some(id),
            _ => None,
        }
    }
}

/// Render snapshot of a usable vertex.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VertexView {
    /// Vertex id.
    pub id: VertexId,
    /// Display label.
    pub label: String,
    /// Canvas position.
    pub position: Position,
    /// Fill color.
    pub color: Color,
    /// True when this vertex is the current selection.
    pub selected: bool,
}

/// Render snapshot of an edge with both endpoint positions resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeView {
    /// Edge id.
    pub id: EdgeId,
    /// Source vertex id.
    pub from: VertexId,
    /// Target vertex id.
    pub to: VertexId,
    /// Position of the source vertex.
    pub from_position: Position,
    /// Position of the target vertex.
    pub to_position: Position,
    /// Weight text, for edges created weighted.
    pub weight: Option<String>,
    /// True when this edge is the current selection.
    pub selected: bool,
}

/// Counts shown by the details overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    /// Number of usable (not deleted) vertices.
    pub usable_vertices: usize,
    /// Number of vertices ever created, deleted ones included.
    pub total_vertices: usize,
    /// Number of edges currently stored.
    pub edges: usize,
}
