//! JSON graph documents: a configuration plus an edge list over integer labels.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::graph::{Graph, GraphConfig};
use crate::types::{GraphError, GraphResult, Node, NodeId};

/// One edge of a document, between two node labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DocumentEdge {
    pub source: u64,
    pub target: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// Serializable description of a graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub config: GraphConfig,
    /// Node labels in index order. Labels missing here are indexed in the
    /// order they first appear in `edges`, after the listed ones.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<u64>,
    #[serde(default)]
    pub edges: Vec<DocumentEdge>,
}

/// A graph built from a document, with its label -> node mapping.
pub struct LoadedGraph {
    pub graph: Graph,
    labels: HashMap<u64, Node>,
    reverse: HashMap<NodeId, u64>,
}

impl LoadedGraph {
    /// The node created for `label`.
    pub fn node(&self, label: u64) -> GraphResult<&Node> {
        self.labels.get(&label).ok_or(GraphError::UnknownNode(label))
    }

    /// The label `node` was loaded from.
    pub fn label_of(&self, node: &Node) -> Option<u64> {
        self.reverse.get(&node.id()).copied()
    }

    /// Describe `derived` (a graph sharing this graph's nodes, such as a
    /// spanning tree) using this document's labels.
    pub fn relabel(&self, derived: &Graph) -> GraphResult<GraphDocument> {
        let nodes = derived
            .nodes()
            .iter()
            .map(|node| {
                self.label_of(node)
                    .ok_or(GraphError::NodeNotInGraph(node.id()))
            })
            .collect::<GraphResult<Vec<u64>>>()?;
        let mut edges = Vec::new();
        for edge in derived.edges() {
            let source = self
                .label_of(edge.source())
                .ok_or(GraphError::NodeNotInGraph(edge.source().id()))?;
            let target = self
                .label_of(edge.target())
                .ok_or(GraphError::NodeNotInGraph(edge.target().id()))?;
            edges.push(DocumentEdge {
                source,
                target,
                weight: edge.weight(),
            });
        }
        Ok(GraphDocument {
            config: derived.config().clone(),
            nodes,
            edges,
        })
    }
}

impl GraphDocument {
    /// Parse a document from JSON text.
    pub fn from_json(text: &str) -> GraphResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a document file.
    pub fn load(path: &Path) -> GraphResult<Self> {
        let text = std::fs::read_to_string(path)?;
        log::debug!("loading graph document {}", path.display());
        Self::from_json(&text)
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> GraphResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Describe an existing graph, labelling nodes by their index.
    pub fn from_graph(graph: &Graph) -> Self {
        Self {
            config: graph.config().clone(),
            nodes: (0..graph.size() as u64).collect(),
            edges: graph
                .edge_records()
                .into_iter()
                .map(|record| DocumentEdge {
                    source: record.source as u64,
                    target: record.target as u64,
                    weight: record.weight,
                })
                .collect(),
        }
    }

    /// Create one node per distinct label and insert every edge into a graph
    /// built from `config`.
    ///
    /// Listed `nodes` take the first indices, in list order. Every listed
    /// label must occur in some edge, since a graph holds no isolated nodes.
    pub fn build(&self) -> GraphResult<LoadedGraph> {
        let mut graph = Graph::new(self.config.clone())?;
        let mut labels: HashMap<u64, Node> = HashMap::new();
        if !self.nodes.is_empty() {
            let used: HashSet<u64> = self
                .edges
                .iter()
                .flat_map(|edge| [edge.source, edge.target])
                .collect();
            for label in &self.nodes {
                if !used.contains(label) {
                    return Err(GraphError::Configuration(format!(
                        "node {} is listed but has no edges",
                        label
                    )));
                }
                let node = labels.entry(*label).or_default();
                graph.register(node);
            }
        }
        for edge in &self.edges {
            let source = labels.entry(edge.source).or_default().clone();
            let target = labels.entry(edge.target).or_default().clone();
            graph.insert_edge(&source, &target, edge.weight)?;
        }
        let reverse = labels
            .iter()
            .map(|(label, node)| (node.id(), *label))
            .collect();
        Ok(LoadedGraph {
            graph,
            labels,
            reverse,
        })
    }
}
