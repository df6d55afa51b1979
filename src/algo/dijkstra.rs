//! Single-source shortest paths via Dijkstra's algorithm.

use crate::graph::{Graph, TraversalMode};
use crate::types::{GraphError, GraphResult, Node};

/// Distance and predecessor tables indexed by node index.
struct Settled {
    /// `None` until the node is reached; a reached node may sit at `+inf`
    /// when finite weights overflow.
    distance: Vec<Option<f64>>,
    /// (predecessor index, weight of the edge predecessor -> node)
    predecessor: Vec<Option<(usize, f64)>>,
}

/// Run Dijkstra from `source` using a linear scan for the minimum.
///
/// Ties between equally distant unsettled nodes go to the lowest node index.
fn settle(graph: &Graph, source: &Node) -> GraphResult<Settled> {
    if !graph.directed() || !graph.weighted() {
        return Err(GraphError::Configuration(
            "SSSP works only for directed, weighted graphs".into(),
        ));
    }
    let start = graph.node_index(source)?;
    let nodes = graph.nodes();
    let count = nodes.len();

    let mut distance: Vec<Option<f64>> = vec![None; count];
    let mut predecessor = vec![None; count];
    let mut settled = vec![false; count];
    distance[start] = Some(0.0);

    loop {
        // Unreached nodes are never picked, so the loop ends with them unsettled.
        let next = (0..count)
            .filter(|&i| !settled[i])
            .filter_map(|i| distance[i].map(|d| (i, d)))
            .min_by(|a, b| a.1.total_cmp(&b.1));
        let Some((current, base)) = next else {
            break;
        };
        settled[current] = true;
        for (neighbour, weight) in graph.outgoing(&nodes[current])? {
            let target = graph.node_index(&neighbour)?;
            let weight = weight.unwrap_or_default();
            let candidate = base + weight;
            let improves = match distance[target] {
                None => true,
                Some(known) => candidate < known,
            };
            if improves && !settled[target] {
                distance[target] = Some(candidate);
                predecessor[target] = Some((current, weight));
            }
        }
    }

    Ok(Settled {
        distance,
        predecessor,
    })
}

/// Build the shortest-path tree rooted at `source`.
///
/// The result is a new directed, weighted edge-list graph with depth-first
/// search enabled. It holds one edge `(predecessor, node)` per reachable
/// node, carrying the original edge weight; unreachable nodes are absent.
pub fn dijkstra(graph: &Graph, source: &Node) -> GraphResult<Graph> {
    let settled = settle(graph, source)?;
    let nodes = graph.nodes();

    let mut tree = Graph::builder()
        .directed(true)
        .weighted(true)
        .traversal(TraversalMode::DepthFirst)
        .build()?;
    for (index, entry) in settled.predecessor.iter().enumerate() {
        if let Some((previous, weight)) = entry {
            tree.insert_edge(&nodes[*previous], &nodes[index], Some(*weight))?;
        }
    }

    log::debug!(
        "dijkstra from {}: {} of {} nodes reached",
        source.id(),
        tree.size(),
        graph.size()
    );
    Ok(tree)
}

/// Shortest distance from `source` to every reachable node, in node index order.
pub fn shortest_distances(graph: &Graph, source: &Node) -> GraphResult<Vec<(Node, f64)>> {
    let settled = settle(graph, source)?;
    Ok(graph
        .nodes()
        .iter()
        .zip(settled.distance)
        .filter_map(|(node, distance)| distance.map(|d| (node.clone(), d)))
        .collect())
}
