//! Error types for the duograph library.

use thiserror::Error;

use super::node::NodeId;

/// Optional graph capabilities that must be enabled at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Minimum spanning tree (Kruskal).
    MinimumSpanningTree,
    /// Single-source shortest paths (Dijkstra).
    ShortestPaths,
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MinimumSpanningTree => write!(f, "minimum spanning tree"),
            Self::ShortestPaths => write!(f, "shortest paths"),
        }
    }
}

/// All errors that can occur in the duograph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Contradictory flags supplied at graph construction.
    #[error("Invalid graph configuration: {0}")]
    Configuration(String),

    /// Weighted graphs need a finite, non-negative weight on every edge.
    #[error("Expected a non-negative weight, got {0:?}")]
    InvalidWeight(Option<f64>),

    /// The node is not a member of this graph.
    #[error("Node {0} is not part of this graph")]
    NodeNotInGraph(NodeId),

    /// `search` was called while no traversal mode is selected.
    #[error("Traversal mode is turned off for this graph")]
    TraversalDisabled,

    /// The node carries no adjacency storage and cannot join an adjacency-list graph.
    #[error("Node {0} has no adjacency storage")]
    UnsupportedOperand(NodeId),

    /// The algorithm was not enabled when the graph was built.
    #[error("The {0} capability is disabled for this graph")]
    CapabilityDisabled(Capability),

    /// The graph was built with `printable = false`.
    #[error("Graph is marked as not renderable")]
    NotRenderable,

    /// A graph document references a label that was never declared.
    #[error("Unknown node label: {0}")]
    UnknownNode(u64),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON graph document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for duograph operations.
pub type GraphResult<T> = Result<T, GraphError>;
