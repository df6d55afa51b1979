//! Graph algorithms. Each one reads a graph and returns a new one.

pub mod dijkstra;
pub mod kruskal;
pub mod union_find;

pub use dijkstra::{dijkstra, shortest_distances};
pub use kruskal::kruskal;
pub use union_find::DisjointSets;
