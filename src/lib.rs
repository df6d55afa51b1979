//! duograph: in-memory graphs with interchangeable storage.
//!
//! A [`Graph`] keeps its edges either in one central list or as links owned
//! by each node; every query, the BFS/DFS search, Kruskal's minimum spanning
//! tree and Dijkstra's shortest-path tree behave the same under both.
//!
//! Graphs and nodes are `Send + Sync`. Insertion takes `&mut Graph`, so a
//! graph shared between threads goes behind a `Mutex` or `RwLock`; queries
//! take `&Graph` and may run concurrently with each other.

pub mod algo;
pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use algo::{dijkstra, kruskal, shortest_distances, DisjointSets};
pub use format::{to_dot, DocumentEdge, GraphDocument, LoadedGraph};
pub use graph::{
    search_with, Frontier, Graph, GraphBuilder, GraphConfig, Representation, TraversalMode,
    WeightPolicy,
};
pub use types::{
    AdjacencyLink, AdjacencyStore, Capability, Edge, EdgeHandle, EdgeRecord, GraphError, GraphId,
    GraphResult, HasAdjacency, Node, NodeId,
};
