//! Minimum spanning tree via Kruskal's algorithm.

use crate::graph::{Graph, TraversalMode};
use crate::types::{EdgeHandle, GraphError, GraphResult};

use super::union_find::DisjointSets;

/// Build the minimum spanning tree (a forest, if `graph` is disconnected).
///
/// Edges are considered in ascending weight; the sort is stable, so equal
/// weights keep [`Graph::edges`] order. The result is a new undirected,
/// weighted edge-list graph with depth-first search enabled, sharing the
/// original nodes.
pub fn kruskal(graph: &Graph) -> GraphResult<Graph> {
    if graph.directed() || !graph.weighted() {
        return Err(GraphError::Configuration(
            "MST works only for undirected, weighted graphs".into(),
        ));
    }

    let mut edges = graph.edges();
    edges.sort_by(|a, b| weight_of(a).total_cmp(&weight_of(b)));

    let mut sets = DisjointSets::new(graph.size());
    let mut tree = Graph::builder()
        .weighted(true)
        .traversal(TraversalMode::DepthFirst)
        .build()?;

    for edge in &edges {
        let source = graph.node_index(edge.source())?;
        let target = graph.node_index(edge.target())?;
        if sets.union(source, target) {
            tree.insert_edge(edge.source(), edge.target(), edge.weight())?;
        }
    }

    log::debug!(
        "kruskal: {} of {} edges kept, total weight {}",
        tree.edge_count(),
        edges.len(),
        tree.total_weight()
    );
    Ok(tree)
}

fn weight_of(edge: &EdgeHandle) -> f64 {
    edge.weight().unwrap_or_default()
}
