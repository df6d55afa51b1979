//! Core graph structure: node sequence plus edges under one of two
//! representations.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::algo::{dijkstra, kruskal};
use crate::types::node::GraphId;
use crate::types::{
    AdjacencyLink, Capability, Edge, EdgeHandle, EdgeRecord, GraphError, GraphResult,
    HasAdjacency, Node, NodeId,
};

use super::builder::GraphBuilder;
use super::config::{GraphConfig, Representation};
use super::traversal::TraversalMode;

/// An in-memory graph.
///
/// Nodes are kept in first-seen order; a node's position in that sequence is
/// its stable external index. Under [`Representation::EdgeList`] edges live in
/// `edges`; under [`Representation::AdjacencyList`] every node owns the links
/// leaving it and `edges` stays empty.
pub struct Graph {
    /// Tag stamped on every link this graph creates.
    id: GraphId,
    config: GraphConfig,
    /// All member nodes, in insertion order.
    nodes: Vec<Node>,
    /// Node identity -> position in `nodes`.
    index: HashMap<NodeId, usize>,
    /// Central edge storage (edge-list representation only).
    edges: Vec<Arc<Edge>>,
}

impl Graph {
    /// Create an empty graph after validating `config`.
    pub fn new(config: GraphConfig) -> GraphResult<Self> {
        config.validate()?;
        log::debug!(
            "new graph: directed={} weighted={} representation={}",
            config.directed,
            config.weighted,
            config.representation
        );
        Ok(Self {
            id: GraphId::next(),
            config,
            nodes: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
        })
    }

    /// Start a fluent [`GraphBuilder`].
    pub fn builder() -> GraphBuilder {
        GraphBuilder::new()
    }

    /// The configuration this graph was built with (traversal reflects the
    /// current mode).
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn directed(&self) -> bool {
        self.config.directed
    }

    pub fn weighted(&self) -> bool {
        self.config.weighted
    }

    pub fn representation(&self) -> Representation {
        self.config.representation
    }

    pub fn printable(&self) -> bool {
        self.config.printable
    }

    /// Currently selected search strategy.
    pub fn traversal(&self) -> Option<TraversalMode> {
        self.config.traversal
    }

    /// Select the search strategy; `None` turns `search` off.
    pub fn set_traversal(&mut self, mode: Option<TraversalMode>) {
        self.config.traversal = mode;
    }

    /// Number of distinct nodes.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Number of logical edges.
    pub fn edge_count(&self) -> usize {
        match self.config.representation {
            Representation::EdgeList => self.edges.len(),
            Representation::AdjacencyList => {
                let mut links = 0;
                let mut self_loops = 0;
                for node in &self.nodes {
                    for link in self.links_of(node) {
                        links += 1;
                        if link.opposite() == node {
                            self_loops += 1;
                        }
                    }
                }
                if self.config.directed {
                    links
                } else {
                    // Undirected links come in pairs, except self-loops which store one.
                    (links + self_loops) / 2
                }
            }
        }
    }

    /// All nodes in index order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// True if `node` is a member of this graph.
    pub fn contains(&self, node: &Node) -> bool {
        self.index.contains_key(&node.id())
    }

    /// Stable 0-based index of `node` (its insertion order).
    pub fn node_index(&self, node: &Node) -> GraphResult<usize> {
        self.index
            .get(&node.id())
            .copied()
            .ok_or(GraphError::NodeNotInGraph(node.id()))
    }

    /// Insert an edge from `source` to `target`.
    ///
    /// Idempotent: if an equivalent edge exists (either orientation for
    /// undirected graphs) its handle is returned and nothing changes,
    /// including its weight. Under an undirected adjacency list each endpoint
    /// owns its own link, so `(b, a)` returns `b`'s half of the pair.
    /// Weights are validated by the configured [`WeightPolicy`](super::WeightPolicy)
    /// and ignored for unweighted graphs.
    pub fn insert_edge(
        &mut self,
        source: &Node,
        target: &Node,
        weight: Option<f64>,
    ) -> GraphResult<EdgeHandle> {
        let weight = if self.config.weighted {
            match self.config.weight_policy.resolve(weight) {
                Ok(w) => Some(w),
                Err(e) => {
                    log::debug!("rejected edge {} -> {}: {}", source.id(), target.id(), e);
                    return Err(e);
                }
            }
        } else {
            None
        };

        match self.config.representation {
            Representation::EdgeList => Ok(self.insert_stored(source, target, weight)),
            Representation::AdjacencyList => self.insert_link(source, target, weight),
        }
    }

    fn insert_stored(&mut self, source: &Node, target: &Node, weight: Option<f64>) -> EdgeHandle {
        let directed = self.config.directed;
        if let Some(existing) = self
            .edges
            .iter()
            .find(|edge| edge.connects(source, target, directed))
        {
            return EdgeHandle::Stored(Arc::clone(existing));
        }

        let edge = Arc::new(Edge::new(source.clone(), target.clone(), weight));
        self.edges.push(Arc::clone(&edge));
        self.register(source);
        self.register(target);
        log::trace!("edge {} -> {} stored", source.id(), target.id());
        EdgeHandle::Stored(edge)
    }

    fn insert_link(
        &mut self,
        source: &Node,
        target: &Node,
        weight: Option<f64>,
    ) -> GraphResult<EdgeHandle> {
        // Check both endpoints before touching either.
        let source_store = adjacency_of(source)?;
        let target_store = adjacency_of(target)?;

        if let Some(link) = source_store
            .links_of(self.id)
            .into_iter()
            .find(|link| link.opposite() == target)
        {
            return Ok(EdgeHandle::Link {
                owner: source.clone(),
                link,
            });
        }

        self.register(source);
        self.register(target);
        let link = source_store.add_link(AdjacencyLink::new(self.id, target.clone(), weight));
        if !self.config.directed && source != target {
            target_store.add_link(AdjacencyLink::new(self.id, source.clone(), weight));
        }
        log::trace!("link {} -> {} stored", source.id(), target.id());
        Ok(EdgeHandle::Link {
            owner: source.clone(),
            link,
        })
    }

    pub(crate) fn register(&mut self, node: &Node) {
        if !self.index.contains_key(&node.id()) {
            self.index.insert(node.id(), self.nodes.len());
            self.nodes.push(node.clone());
        }
    }

    /// Links owned by `node` that belong to this graph.
    fn links_of(&self, node: &Node) -> Vec<Arc<AdjacencyLink>> {
        node.adjacency()
            .map(|store| store.links_of(self.id))
            .unwrap_or_default()
    }

    /// The stored edge between `a` and `b`, respecting direction. `None` if
    /// either node is not a member.
    pub fn edge(&self, a: &Node, b: &Node) -> Option<EdgeHandle> {
        if !self.contains(a) || !self.contains(b) {
            return None;
        }
        match self.config.representation {
            Representation::EdgeList => self
                .edges
                .iter()
                .find(|edge| edge.connects(a, b, self.config.directed))
                .map(|edge| EdgeHandle::Stored(Arc::clone(edge))),
            Representation::AdjacencyList => self
                .links_of(a)
                .into_iter()
                .find(|link| link.opposite() == b)
                .map(|link| EdgeHandle::Link {
                    owner: a.clone(),
                    link,
                }),
        }
    }

    /// Nodes reachable from `node` over a single edge.
    pub fn neighbours(&self, node: &Node) -> GraphResult<Vec<Node>> {
        Ok(self
            .outgoing(node)?
            .into_iter()
            .map(|(neighbour, _)| neighbour)
            .collect())
    }

    /// `(neighbour, weight)` for every edge leaving `node`.
    pub(crate) fn outgoing(&self, node: &Node) -> GraphResult<Vec<(Node, Option<f64>)>> {
        if !self.contains(node) {
            return Err(GraphError::NodeNotInGraph(node.id()));
        }
        let out = match self.config.representation {
            Representation::EdgeList => self
                .edges
                .iter()
                .filter_map(|edge| {
                    if edge.source() == node {
                        Some((edge.target().clone(), edge.weight()))
                    } else if !self.config.directed && edge.target() == node {
                        Some((edge.source().clone(), edge.weight()))
                    } else {
                        None
                    }
                })
                .collect(),
            Representation::AdjacencyList => self
                .links_of(node)
                .iter()
                .map(|link| (link.opposite().clone(), link.weight()))
                .collect(),
        };
        Ok(out)
    }

    /// Every logical edge once.
    ///
    /// Edge lists come back in insertion order. Adjacency lists are walked
    /// node by node; for undirected graphs a link is skipped when its
    /// opposite node was already walked, since that node emitted the pair.
    pub fn edges(&self) -> Vec<EdgeHandle> {
        match self.config.representation {
            Representation::EdgeList => self
                .edges
                .iter()
                .map(|edge| EdgeHandle::Stored(Arc::clone(edge)))
                .collect(),
            Representation::AdjacencyList => {
                let mut walked = HashSet::new();
                let mut out = Vec::new();
                for node in &self.nodes {
                    for link in self.links_of(node) {
                        if !self.config.directed && walked.contains(&link.opposite().id()) {
                            continue;
                        }
                        out.push(EdgeHandle::Link {
                            owner: node.clone(),
                            link,
                        });
                    }
                    walked.insert(node.id());
                }
                out
            }
        }
    }

    /// Every edge as an index triple, in [`edges`](Self::edges) order.
    pub fn edge_records(&self) -> Vec<EdgeRecord> {
        self.edges()
            .iter()
            .filter_map(|edge| {
                let source = self.index.get(&edge.source().id())?;
                let target = self.index.get(&edge.target().id())?;
                Some(EdgeRecord {
                    source: *source,
                    target: *target,
                    weight: edge.weight(),
                })
            })
            .collect()
    }

    /// Sum of all edge weights (0 for unweighted graphs).
    pub fn total_weight(&self) -> f64 {
        self.edges().iter().filter_map(EdgeHandle::weight).sum()
    }

    /// Minimum spanning tree of this graph, computed with Kruskal's algorithm.
    pub fn minimum_spanning_tree(&self) -> GraphResult<Graph> {
        if !self.config.mst {
            return Err(GraphError::CapabilityDisabled(
                Capability::MinimumSpanningTree,
            ));
        }
        kruskal(self)
    }

    /// Shortest-path tree rooted at `source`, computed with Dijkstra's algorithm.
    pub fn shortest_path_tree(&self, source: &Node) -> GraphResult<Graph> {
        if !self.config.sssp {
            return Err(GraphError::CapabilityDisabled(Capability::ShortestPaths));
        }
        dijkstra(self, source)
    }
}

fn adjacency_of(node: &Node) -> GraphResult<&dyn HasAdjacency> {
    node.adjacency()
        .ok_or(GraphError::UnsupportedOperand(node.id()))
}

impl Drop for Graph {
    fn drop(&mut self) {
        // Nodes may outlive the graph; take back the links this graph gave them.
        if self.config.representation == Representation::AdjacencyList {
            for node in &self.nodes {
                if let Some(store) = node.adjacency() {
                    store.release(self.id);
                }
            }
        }
    }
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("config", &self.config)
            .field("nodes", &self.nodes.len())
            .field("edges", &self.edge_count())
            .finish()
    }
}
