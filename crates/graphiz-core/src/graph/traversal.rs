//! Breadth-first and depth-first traversal over adjacency snapshots.
//!
//! Both functions mark vertices visited when they enter the frontier, not
//! when they leave it, and expand neighbor lists in insertion order. Given
//! the same adjacency mapping and start label the visit order is identical
//! on every run; consumers replay it step by step.

use std::collections::VecDeque;
use std::fmt;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::adjacency::AdjacencyMap;

/// The algorithm selected for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Breadth-first search.
    Bfs,
    /// Depth-first search.
    Dfs,
    /// Dijkstra's shortest paths.
    Dijkstra,
}

impl Algorithm {
    /// Returns the display name shown while a run plays back.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Bfs => "Breadth-first search (BFS)",
            Self::Dfs => "Depth-first search (DFS)",
            Self::Dijkstra => "Dijkstra",
        }
    }

    /// Returns the time complexity caption shown next to the name.
    #[must_use]
    pub fn complexity(self) -> &'static str {
        match self {
            Self::Bfs | Self::Dfs => "O(V+E)",
            Self::Dijkstra => "O(E+V log V)",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Breadth-first search from `start`, returning labels in visit order.
///
/// The frontier is a FIFO queue and vertices are marked visited at enqueue
/// time. A start label absent from the mapping is still visited (it is the
/// whole output); reachable vertices appear exactly once.
#[must_use]
pub fn bfs(adjacency: &AdjacencyMap, start: &str) -> Vec<String> {
    let mut order = Vec::new();
    let mut visited = FxHashSet::default();
    let mut queue = VecDeque::new();

    visited.insert(start.to_string());
    queue.push_back(start.to_string());

    while let Some(current) = queue.pop_front() {
        if let Some(neighbors) = adjacency.get(&current) {
            for neighbor in neighbors {
                if !visited.contains(neighbor) {
                    visited.insert(neighbor.clone());
                    queue.push_back(neighbor.clone());
                }
            }
        }
        order.push(current);
    }

    order
}

/// Depth-first search from `start`, returning labels in visit order.
///
/// The frontier is a LIFO stack and vertices are marked visited when pushed,
/// so a vertex already on the stack is never pushed again. Neighbors are
/// pushed in list order, which means the last neighbor of a vertex is
/// expanded first; this order is part of the contract.
#[must_use]
pub fn dfs(adjacency: &AdjacencyMap, start: &str) -> Vec<String> {
    let mut order = Vec::new();
    let mut visited = FxHashSet::default();
    let mut stack = Vec::new();

    visited.insert(start.to_string());
    stack.push(start.to_string());

    while let Some(current) = stack.pop() {
        if let Some(neighbors) = adjacency.get(&current) {
            for neighbor in neighbors {
                if !visited.contains(neighbor) {
                    visited.insert(neighbor.clone());
                    stack.push(neighbor.clone());
                }
            }
        }
        order.push(current);
    }

    order
}
