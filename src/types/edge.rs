//! Edge records and the handles returned by graph insertion.

use std::sync::Arc;

use serde::Serialize;

use super::node::{AdjacencyLink, Node};

/// A centrally stored edge, used by edge-list graphs.
#[derive(Debug)]
pub struct Edge {
    source: Node,
    target: Node,
    weight: Option<f64>,
}

impl Edge {
    pub(crate) fn new(source: Node, target: Node, weight: Option<f64>) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// First endpoint (the origin in directed graphs).
    pub fn source(&self) -> &Node {
        &self.source
    }

    /// Second endpoint (the destination in directed graphs).
    pub fn target(&self) -> &Node {
        &self.target
    }

    /// Weight of the edge; `None` in unweighted graphs.
    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    /// True if this edge connects `a` to `b`, in either order unless `directed`.
    pub(crate) fn connects(&self, a: &Node, b: &Node, directed: bool) -> bool {
        (self.source == *a && self.target == *b)
            || (!directed && self.source == *b && self.target == *a)
    }
}

/// A stored edge as seen through either representation.
///
/// Two handles compare equal only if they refer to the same stored object,
/// so re-inserting an existing edge yields a handle equal to the first one.
#[derive(Debug, Clone)]
pub enum EdgeHandle {
    /// An edge held in the graph's edge list.
    Stored(Arc<Edge>),
    /// A link held by `owner` in its adjacency storage.
    Link {
        owner: Node,
        link: Arc<AdjacencyLink>,
    },
}

impl EdgeHandle {
    /// Origin of the edge.
    pub fn source(&self) -> &Node {
        match self {
            Self::Stored(edge) => edge.source(),
            Self::Link { owner, .. } => owner,
        }
    }

    /// Destination of the edge.
    pub fn target(&self) -> &Node {
        match self {
            Self::Stored(edge) => edge.target(),
            Self::Link { link, .. } => link.opposite(),
        }
    }

    /// Weight of the edge; `None` in unweighted graphs.
    pub fn weight(&self) -> Option<f64> {
        match self {
            Self::Stored(edge) => edge.weight(),
            Self::Link { link, .. } => link.weight(),
        }
    }
}

impl PartialEq for EdgeHandle {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Stored(a), Self::Stored(b)) => Arc::ptr_eq(a, b),
            (Self::Link { link: a, .. }, Self::Link { link: b, .. }) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for EdgeHandle {}

/// An edge expressed by node indices, for renderers and JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeRecord {
    /// Index of the source node.
    pub source: usize,
    /// Index of the target node.
    pub target: usize,
    /// Edge weight, absent for unweighted graphs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}
