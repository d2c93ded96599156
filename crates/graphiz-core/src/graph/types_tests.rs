//! Tests for core model types.

use super::types::{Color, Edge, EdgeId, EdgeWeight, Position, Selection, Vertex, VertexId};

fn sample_vertex(id: u64, label: &str) -> Vertex {
    Vertex::new(
        VertexId::new(id),
        label.to_string(),
        Position::new(100.0, 100.0),
        Color::BLACK,
    )
}

// ── Ids ────────────────────────────────────────────────────────────

#[test]
fn test_id_display_is_raw_number() {
    assert_eq!(VertexId::new(7).to_string(), "7");
    assert_eq!(EdgeId::new(0).to_string(), "0");
}

#[test]
fn test_id_serializes_transparently() {
    let json = serde_json::to_string(&VertexId::new(42)).unwrap();
    assert_eq!(json, "42");
    let id: VertexId = serde_json::from_str("42").unwrap();
    assert_eq!(id, VertexId::new(42));
}

// ── Vertex ─────────────────────────────────────────────────────────

#[test]
fn test_new_vertex_is_usable_and_unvisited() {
    let vertex = sample_vertex(0, "V0");
    assert!(vertex.is_usable());
    assert!(!vertex.is_visited());
    assert_eq!(vertex.color(), Color::BLACK);
}

#[test]
fn test_default_label_detection() {
    assert!(sample_vertex(0, "V0").has_default_label());
    assert!(sample_vertex(12, "V12").has_default_label());
    assert!(!sample_vertex(1, "V").has_default_label());
    assert!(!sample_vertex(1, "Va").has_default_label());
    assert!(!sample_vertex(1, "V1a").has_default_label());
    assert!(!sample_vertex(1, "home").has_default_label());
    assert!(!sample_vertex(1, "").has_default_label());
}

// ── Edge weight text ───────────────────────────────────────────────

#[test]
fn test_weight_placeholder_cleared_by_first_digit() {
    let mut weight = EdgeWeight::new();
    assert_eq!(weight.text(), "0");
    weight.type_char('4');
    assert_eq!(weight.text(), "4");
    weight.type_char('2');
    assert_eq!(weight.text(), "42");
    assert_eq!(weight.value(), 42);
}

#[test]
fn test_weight_minus_only_into_empty_buffer() {
    let mut weight = EdgeWeight::new();
    weight.type_char('-');
    assert_eq!(weight.text(), "0");

    weight.backspace();
    assert_eq!(weight.text(), "");
    weight.type_char('-');
    assert_eq!(weight.text(), "-");
    weight.type_char('-');
    assert_eq!(weight.text(), "-");
    weight.type_char('5');
    assert_eq!(weight.text(), "-5");
    assert_eq!(weight.value(), -5);
}

#[test]
fn test_weight_unparseable_text_reads_as_zero() {
    let mut weight = EdgeWeight::new();
    weight.backspace();
    assert_eq!(weight.value(), 0);

    weight.type_char('-');
    assert_eq!(weight.value(), 0);
}

#[test]
fn test_weight_ignores_non_digit_input() {
    let mut weight = EdgeWeight::from_value(17);
    weight.type_char('x');
    weight.type_char(' ');
    weight.type_char('\n');
    assert_eq!(weight.text(), "17");
}

#[test]
fn test_weight_typing_zero_onto_placeholder_keeps_zero() {
    let mut weight = EdgeWeight::new();
    weight.type_char('0');
    assert_eq!(weight.text(), "0");
}

// ── Selection ──────────────────────────────────────────────────────

#[test]
fn test_selection_default_is_none() {
    let selection = Selection::default();
    assert!(selection.is_none());
    assert_eq!(selection.vertex(), None);
    assert_eq!(selection.edge(), None);
}

#[test]
fn test_selection_accessors() {
    let selection = Selection::Vertex(VertexId::new(3));
    assert!(!selection.is_none());
    assert_eq!(selection.vertex(), Some(VertexId::new(3)));
    assert_eq!(selection.edge(), None);

    let selection = Selection::Edge(EdgeId::new(9));
    assert_eq!(selection.edge(), Some(EdgeId::new(9)));
    assert_eq!(selection.vertex(), None);
}

#[test]
fn test_selection_serializes_tagged() {
    let json = serde_json::to_string(&Selection::Vertex(VertexId::new(1))).unwrap();
    assert_eq!(json, r#"{"kind":"vertex","id":1}"#);
    let json = serde_json::to_string(&Selection::None).unwrap();
    assert_eq!(json, r#"{"kind":"none"}"#);
}

// ── Edge ───────────────────────────────────────────────────────────

#[test]
fn test_unweighted_edge_has_no_weight() {
    let edge = Edge::new(EdgeId::new(0), VertexId::new(0), VertexId::new(1), None);
    assert!(!edge.is_weighted());
    assert!(edge.weight().is_none());
}

#[test]
fn test_weighted_edge_defaults_to_zero_text() {
    let edge = Edge::new(
        EdgeId::new(1),
        VertexId::new(0),
        VertexId::new(1),
        Some(EdgeWeight::new()),
    );
    assert!(edge.is_weighted());
    assert_eq!(edge.weight().map(EdgeWeight::text), Some("0"));
}

// ── Colors ─────────────────────────────────────────────────────────

#[test]
fn test_palette_constants() {
    assert_eq!(Color::default(), Color::BLACK);
    assert_eq!(Color::RED, Color::rgb(230, 41, 55));
    assert_eq!(Color::YELLOW, Color::rgb(253, 249, 0));
    assert_eq!(Color::GREEN, Color::rgb(0, 228, 48));
    assert_eq!(Color::BLACK.a, 255);
}
