//! Error types for graph mutations and algorithm preconditions.

use thiserror::Error;

use crate::graph::{EdgeId, VertexId};

/// Errors returned by graph store operations and algorithm runs.
///
/// All failures are local and non-fatal: a rejected operation leaves the
/// store unchanged, including its id counters.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// Vertex id does not resolve to a usable vertex.
    #[error("Vertex {0} does not exist or was deleted")]
    UnknownVertex(VertexId),

    /// Edge id does not resolve to an existing edge.
    #[error("Edge {0} does not exist")]
    UnknownEdge(EdgeId),

    /// Edge endpoint does not resolve to a usable vertex.
    #[error("Edge endpoint {0} does not resolve to a usable vertex")]
    UnknownEndpoint(VertexId),

    /// An edge with the same direction already connects the two vertices.
    #[error("An edge from {from} to {to} already exists")]
    DuplicateEdge {
        /// Source vertex of the rejected edge.
        from: VertexId,
        /// Target vertex of the rejected edge.
        to: VertexId,
    },

    /// Both endpoints name the same vertex.
    #[error("Self-loop on vertex {0} is not allowed")]
    SelfLoop(VertexId),

    /// The edge carries no weight, so a weighted operation cannot use it.
    #[error("Edge {0} carries no weight")]
    UnweightedEdge(EdgeId),

    /// Label contains characters outside the printable ASCII range.
    #[error("Invalid label: {0}")]
    InvalidLabel(String),
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;
