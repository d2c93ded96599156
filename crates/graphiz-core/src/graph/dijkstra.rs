//! Dijkstra shortest paths with a per-edge relaxation trace.
//!
//! Every examined edge produces one trace entry carrying a full snapshot of
//! the distance table, so a consumer can replay how the table evolved step
//! by step instead of only seeing the final result.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::adjacency::WeightedAdjacencyMap;

/// Distance from the start vertex: a finite total weight or unreachable.
///
/// Every finite value orders below [`Distance::Infinity`]. Serializes as the
/// plain number, with infinity as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Distance {
    /// Reachable with this total weight.
    Finite(i64),
    /// Not reachable (yet).
    Infinity,
}

impl Distance {
    /// Returns true for finite distances.
    #[must_use]
    pub fn is_finite(self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// Returns the finite value, if any.
    #[must_use]
    pub fn value(self) -> Option<i64> {
        match self {
            Self::Finite(value) => Some(value),
            Self::Infinity => None,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(value) => write!(f, "{value}"),
            Self::Infinity => f.write_str("∞"),
        }
    }
}

/// Distances per vertex label, in adjacency key order.
pub type DistanceTable = IndexMap<String, Distance>;

/// One relaxation step: the edge examined from the popped vertex, plus the
/// distance table right after the examination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DijkstraStep {
    /// Label popped from the priority queue.
    pub current: String,
    /// Neighbor reached over the examined edge.
    pub neighbor: String,
    /// Weight of the examined edge.
    pub weight: i64,
    /// Snapshot of the distance table after this examination.
    pub distances: DistanceTable,
}

/// Result of a shortest-path run: the ordered trace and the final table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DijkstraRun {
    /// One entry per examined edge, in examination order.
    pub trace: Vec<DijkstraStep>,
    /// Final distances; equals the last trace snapshot once edges exist.
    pub distances: DistanceTable,
}

impl DijkstraRun {
    /// Returns the final distance to a label, if the label took part in the
    /// run.
    #[must_use]
    pub fn distance(&self, label: &str) -> Option<Distance> {
        self.distances.get(label).copied()
    }
}

/// Runs Dijkstra's algorithm from `start` over a weighted mapping.
///
/// The priority queue is keyed by `(distance, label)`, so equal distances
/// break ties on the label and runs are fully deterministic. A vertex popped
/// again with a stale distance is not skipped; its edges are re-examined
/// without improving anything, and those examinations appear in the trace.
/// Negative weights are taken as given; tables are only correct without
/// negative cycles. Distance additions saturate at the `i64` limits.
///
/// A start label absent from the mapping still gets a `0` entry in the
/// table; everything else stays at infinity.
#[must_use]
pub fn dijkstra(adjacency: &WeightedAdjacencyMap, start: &str) -> DijkstraRun {
    let mut distances: DistanceTable = adjacency
        .keys()
        .map(|label| (label.clone(), Distance::Infinity))
        .collect();
    distances.insert(start.to_string(), Distance::Finite(0));

    let mut heap = BinaryHeap::new();
    heap.push(Reverse((0_i64, start.to_string())));

    let mut trace = Vec::new();

    while let Some(Reverse((dist, current))) = heap.pop() {
        let Some(neighbors) = adjacency.get(&current) else {
            continue;
        };
        for (weight, neighbor) in neighbors {
            // Saturate so adversarial weights near i64::MAX cannot overflow.
            let candidate = dist.saturating_add(*weight);
            let improved = match distances.get(neighbor) {
                Some(Distance::Finite(best)) => candidate < *best,
                Some(Distance::Infinity) | None => true,
            };
            if improved {
                distances.insert(neighbor.clone(), Distance::Finite(candidate));
                heap.push(Reverse((candidate, neighbor.clone())));
            }
            trace.push(DijkstraStep {
                current: current.clone(),
                neighbor: neighbor.clone(),
                weight: *weight,
                distances: distances.clone(),
            });
        }
    }

    DijkstraRun { trace, distances }
}
