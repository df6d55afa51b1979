//! Construction-time graph configuration.

use serde::{Deserialize, Serialize};

use crate::types::{GraphError, GraphResult};

use super::traversal::TraversalMode;

/// How a graph stores its edges. Fixed for the lifetime of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    /// Edges live in one central list owned by the graph.
    #[default]
    EdgeList,
    /// Each node owns the links leaving it.
    AdjacencyList,
}

impl Representation {
    /// Return a human-readable name for this representation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::EdgeList => "edge_list",
            Self::AdjacencyList => "adjacency_list",
        }
    }

    /// Parse a representation from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "edge_list" | "edgelist" | "edge" => Some(Self::EdgeList),
            "adjacency_list" | "adjacencylist" | "neighbour" | "neighbor" => {
                Some(Self::AdjacencyList)
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for Representation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// What a weighted graph does with a missing or negative weight.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "policy")]
pub enum WeightPolicy {
    /// Reject the insertion with `InvalidWeight`.
    #[default]
    Strict,
    /// Store `default` in place of the offending weight.
    Substitute { default: f64 },
}

impl WeightPolicy {
    /// Resolve the weight to store for a weighted edge.
    pub fn resolve(&self, weight: Option<f64>) -> GraphResult<f64> {
        match (self, weight) {
            (_, Some(w)) if is_valid_weight(w) => Ok(w),
            (Self::Strict, w) => Err(GraphError::InvalidWeight(w)),
            (Self::Substitute { default }, _) => Ok(*default),
        }
    }
}

fn is_valid_weight(w: f64) -> bool {
    w.is_finite() && w >= 0.0
}

/// All flags that shape a graph. Every field has a default, so partial
/// JSON objects deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Whether edge direction is meaningful.
    pub directed: bool,
    /// Whether edges carry weights.
    pub weighted: bool,
    /// Edge storage layout.
    pub representation: Representation,
    /// Search strategy; `None` disables `search`.
    pub traversal: Option<TraversalMode>,
    /// Whether renderers may print this graph.
    pub printable: bool,
    /// Enable `minimum_spanning_tree` (undirected, weighted graphs only).
    pub mst: bool,
    /// Enable `shortest_path_tree` (directed, weighted graphs only).
    pub sssp: bool,
    /// Handling of missing or negative weights.
    pub weight_policy: WeightPolicy,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            directed: false,
            weighted: false,
            representation: Representation::EdgeList,
            traversal: None,
            printable: true,
            mst: false,
            sssp: false,
            weight_policy: WeightPolicy::Strict,
        }
    }
}

impl GraphConfig {
    /// Reject contradictory flag combinations.
    pub fn validate(&self) -> GraphResult<()> {
        if self.mst && (self.directed || !self.weighted) {
            return Err(GraphError::Configuration(
                "MST only available for undirected, weighted graphs".into(),
            ));
        }
        if self.sssp && (!self.directed || !self.weighted) {
            return Err(GraphError::Configuration(
                "SSSP only available for directed, weighted graphs".into(),
            ));
        }
        if let WeightPolicy::Substitute { default } = self.weight_policy {
            if !is_valid_weight(default) {
                return Err(GraphError::Configuration(format!(
                    "substitute weight must be finite and non-negative, got {default}"
                )));
            }
        }
        Ok(())
    }
}
