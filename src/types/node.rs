//! Graph vertices and the adjacency links they own.

use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(0);
static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(0);

/// Process-unique identity of a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    fn next() -> Self {
        Self(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw identity value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identity of the graph that created a link.
///
/// Custom [`HasAdjacency`] implementations only compare these; they are
/// handed out by graphs and cannot be constructed outside the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphId(u64);

impl GraphId {
    pub(crate) fn next() -> Self {
        Self(NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// One outgoing connection owned by a node: the opposite endpoint plus an
/// optional weight.
#[derive(Debug)]
pub struct AdjacencyLink {
    opposite: Node,
    weight: Option<f64>,
    graph: GraphId,
}

impl AdjacencyLink {
    pub(crate) fn new(graph: GraphId, opposite: Node, weight: Option<f64>) -> Self {
        Self {
            opposite,
            weight,
            graph,
        }
    }

    /// The node this link points at.
    pub fn opposite(&self) -> &Node {
        &self.opposite
    }

    /// Weight of the link; `None` in unweighted graphs.
    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    /// The graph that created this link.
    pub fn graph(&self) -> GraphId {
        self.graph
    }
}

/// Capability required of anything that stores adjacency links for a node.
///
/// Adjacency-list graphs reach a node's links only through this trait. A
/// node may belong to several graphs at once, so every link carries the
/// [`GraphId`] of the graph that created it and implementations must keep
/// links from different graphs apart.
pub trait HasAdjacency: Send + Sync {
    /// Append a link and return the stored instance.
    fn add_link(&self, link: AdjacencyLink) -> Arc<AdjacencyLink>;

    /// All links currently stored, in insertion order.
    fn links(&self) -> Vec<Arc<AdjacencyLink>>;

    /// Keep only the links for which `keep` returns true.
    fn retain_links(&self, keep: &mut dyn FnMut(&AdjacencyLink) -> bool);

    /// Links created by one particular graph, in insertion order.
    fn links_of(&self, graph: GraphId) -> Vec<Arc<AdjacencyLink>> {
        self.links()
            .into_iter()
            .filter(|link| link.graph() == graph)
            .collect()
    }

    /// Drop every link created by `graph`.
    fn release(&self, graph: GraphId) {
        self.retain_links(&mut |link: &AdjacencyLink| link.graph() != graph);
    }
}

/// Default adjacency storage: an ordered list of owned links.
#[derive(Debug, Default)]
pub struct AdjacencyStore {
    links: RwLock<Vec<Arc<AdjacencyLink>>>,
}

impl AdjacencyStore {
    fn read(&self) -> RwLockReadGuard<'_, Vec<Arc<AdjacencyLink>>> {
        self.links.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Arc<AdjacencyLink>>> {
        self.links.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of stored links across every graph this node belongs to.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// True when no links are stored.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

impl HasAdjacency for AdjacencyStore {
    fn add_link(&self, link: AdjacencyLink) -> Arc<AdjacencyLink> {
        let link = Arc::new(link);
        self.write().push(Arc::clone(&link));
        link
    }

    fn links(&self) -> Vec<Arc<AdjacencyLink>> {
        self.read().clone()
    }

    fn retain_links(&self, keep: &mut dyn FnMut(&AdjacencyLink) -> bool) {
        self.write().retain(|link| keep(link));
    }

    fn links_of(&self, graph: GraphId) -> Vec<Arc<AdjacencyLink>> {
        self.read()
            .iter()
            .filter(|link| link.graph() == graph)
            .cloned()
            .collect()
    }
}

struct NodeInner {
    id: NodeId,
    adjacency: Option<Arc<dyn HasAdjacency>>,
}

/// A graph vertex.
///
/// Nodes have reference identity: clones are the same vertex, while two
/// separately constructed nodes are always distinct, even though they carry
/// no payload. Graphs derived from a graph (spanning trees, shortest-path
/// trees) share the original nodes rather than copying them.
#[derive(Clone)]
pub struct Node(Arc<NodeInner>);

impl Node {
    /// Create a node with the default [`AdjacencyStore`], usable under
    /// either representation.
    pub fn new() -> Self {
        Self::with_adjacency(Arc::new(AdjacencyStore::default()))
    }

    /// Create a node whose links live in `store`.
    pub fn with_adjacency(store: Arc<dyn HasAdjacency>) -> Self {
        Self(Arc::new(NodeInner {
            id: NodeId::next(),
            adjacency: Some(store),
        }))
    }

    /// Create an identity-only node. It can join edge-list graphs but is
    /// rejected by adjacency-list graphs.
    pub fn without_adjacency() -> Self {
        Self(Arc::new(NodeInner {
            id: NodeId::next(),
            adjacency: None,
        }))
    }

    /// This node's identity.
    pub fn id(&self) -> NodeId {
        self.0.id
    }

    /// The node's link storage, if it has any.
    pub fn adjacency(&self) -> Option<&dyn HasAdjacency> {
        self.0.adjacency.as_deref()
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.id.hash(state);
    }
}

// Links point back at nodes, so Debug must not descend into adjacency.
impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Node({})", self.0.id)
    }
}
