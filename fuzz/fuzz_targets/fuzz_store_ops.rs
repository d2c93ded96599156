//! Fuzz target for graph store mutation sequences.
//!
//! This target replays arbitrary operation streams against the store to find:
//! - Panics in CRUD paths, selection handling or cascade deletes
//! - Edges left dangling after vertex deletion
//! - Algorithm runs diverging or panicking on odd graph shapes
//!
//! Weights come from an unsigned source, so shortest-path runs terminate
//! even when the fuzzer builds cycles.
//!
//! # Running
//!
//! ```bash
//! cd fuzz
//! cargo +nightly fuzz run fuzz_store_ops
//! ```

#![no_main]

use std::collections::HashSet;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use graphiz_core::graph::{Color, EdgeId, GraphStore, Position, VertexId};

/// One store mutation or algorithm run.
///
/// Entity references are indices into the list of ids handed out so far,
/// taken modulo its length, so deleted and missing entities get hit too.
#[derive(Arbitrary, Debug)]
enum Op {
    AddVertex { x: f32, y: f32 },
    AddLabeledVertex { label: String },
    AddEdge { from: u8, to: u8 },
    AddWeightedEdge { from: u8, to: u8, weight: u16 },
    DeleteVertex { index: u8 },
    DeleteEdge { index: u8 },
    SelectVertex { index: u8 },
    SelectEdge { index: u8 },
    ClearSelection,
    SetLabel { index: u8, label: String },
    SetWeight { index: u8, value: u16 },
    MoveVertex { index: u8, x: f32, y: f32 },
    Bfs,
    Dfs,
    Dijkstra,
}

fn pick<T: Copy>(ids: &[T], index: u8) -> Option<T> {
    if ids.is_empty() {
        None
    } else {
        Some(ids[index as usize % ids.len()])
    }
}

fuzz_target!(|ops: Vec<Op>| {
    let mut store = GraphStore::new();
    let mut vertex_ids: Vec<VertexId> = Vec::new();
    let mut edge_ids: Vec<EdgeId> = Vec::new();

    for op in ops {
        match op {
            Op::AddVertex { x, y } => {
                vertex_ids.push(store.create_vertex(Position::new(x, y), Color::BLACK));
            }
            Op::AddLabeledVertex { label } => {
                if let Ok(id) =
                    store.create_vertex_labeled(Position::new(0.0, 0.0), Color::BLACK, &label)
                {
                    vertex_ids.push(id);
                }
            }
            Op::AddEdge { from, to } => {
                if let (Some(from), Some(to)) = (pick(&vertex_ids, from), pick(&vertex_ids, to)) {
                    if let Ok(id) = store.create_edge(from, to) {
                        edge_ids.push(id);
                    }
                }
            }
            Op::AddWeightedEdge { from, to, weight } => {
                if let (Some(from), Some(to)) = (pick(&vertex_ids, from), pick(&vertex_ids, to)) {
                    if let Ok(id) = store.create_weighted_edge(from, to, Some(i64::from(weight))) {
                        edge_ids.push(id);
                    }
                }
            }
            Op::DeleteVertex { index } => {
                if let Some(id) = pick(&vertex_ids, index) {
                    let _ = store.delete_vertex(id);
                }
            }
            Op::DeleteEdge { index } => {
                if let Some(id) = pick(&edge_ids, index) {
                    let _ = store.delete_edge(id);
                }
            }
            Op::SelectVertex { index } => {
                if let Some(id) = pick(&vertex_ids, index) {
                    let _ = store.select_vertex(id);
                }
            }
            Op::SelectEdge { index } => {
                if let Some(id) = pick(&edge_ids, index) {
                    let _ = store.select_edge(id);
                }
            }
            Op::ClearSelection => store.clear_selection(),
            Op::SetLabel { index, label } => {
                if let Some(id) = pick(&vertex_ids, index) {
                    let _ = store.set_label(id, &label);
                }
            }
            Op::SetWeight { index, value } => {
                if let Some(id) = pick(&edge_ids, index) {
                    let _ = store.set_weight(id, i64::from(value));
                }
            }
            Op::MoveVertex { index, x, y } => {
                if let Some(id) = pick(&vertex_ids, index) {
                    let _ = store.set_position(id, Position::new(x, y));
                }
            }
            Op::Bfs => {
                let order = store.run_bfs(&store.start_label());
                let distinct: HashSet<&String> = order.iter().collect();
                assert_eq!(distinct.len(), order.len(), "bfs revisited a label");
            }
            Op::Dfs => {
                let order = store.run_dfs(&store.start_label());
                let distinct: HashSet<&String> = order.iter().collect();
                assert_eq!(distinct.len(), order.len(), "dfs revisited a label");
            }
            Op::Dijkstra => {
                if let Ok(run) = store.run_dijkstra(&store.start_label()) {
                    if let Some(last) = run.trace.last() {
                        assert_eq!(last.distances, run.distances, "final table drifted");
                    }
                }
            }
        }

        // Cascade deletes must leave no edge behind with a dead endpoint.
        assert_eq!(store.edge_views().len(), store.edge_count());
        assert!(store.usable_vertex_count() <= store.total_vertex_count());

        // A selection always resolves or is already cleared.
        match store.selection() {
            s if s.vertex().is_some() => assert!(store.selected_vertex().is_some()),
            s if s.edge().is_some() => assert!(store.selected_edge().is_some()),
            _ => {}
        }
    }
});
