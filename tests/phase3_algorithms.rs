//! Phase 3 tests: Kruskal MST and Dijkstra SSSP.

use duograph::algo::{dijkstra, kruskal, shortest_distances};
use duograph::graph::{Graph, Representation, TraversalMode};
use duograph::types::{Capability, GraphError, Node};

const REPRESENTATIONS: [Representation; 2] =
    [Representation::EdgeList, Representation::AdjacencyList];

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Nodes are labelled 1..=7; `n[0]` is unused padding.
fn mst_fixture(repr: Representation) -> (Graph, Vec<Node>) {
    let mut g = Graph::builder()
        .weighted(true)
        .representation(repr)
        .mst(true)
        .build()
        .unwrap();
    let n: Vec<Node> = (0..8).map(|_| Node::new()).collect();
    let edges = [
        (1, 2, 7.0),
        (1, 4, 5.0),
        (2, 3, 8.0),
        (2, 4, 9.0),
        (2, 5, 7.0),
        (3, 5, 5.0),
        (4, 5, 15.0),
        (4, 6, 6.0),
        (5, 6, 8.0),
        (5, 7, 9.0),
        (6, 7, 11.0),
    ];
    for (a, b, w) in edges {
        g.insert_edge(&n[a], &n[b], Some(w)).unwrap();
    }
    (g, n)
}

fn sssp_fixture(repr: Representation) -> (Graph, Vec<Node>) {
    let mut g = Graph::builder()
        .directed(true)
        .weighted(true)
        .representation(repr)
        .sssp(true)
        .build()
        .unwrap();
    let n: Vec<Node> = (0..7).map(|_| Node::new()).collect();
    let edges = [
        (0, 1, 5.0),
        (1, 0, 1.0),
        (0, 2, 20.0),
        (0, 3, 3.0),
        (2, 4, 6.0),
        (2, 3, 15.0),
        (3, 4, 1.0),
        (4, 5, 3.0),
        (4, 6, 12.0),
        (5, 6, 3.0),
    ];
    for (a, b, w) in edges {
        g.insert_edge(&n[a], &n[b], Some(w)).unwrap();
    }
    (g, n)
}

// ==================== MST ====================

#[test]
fn test_mst_weight_and_connectivity() {
    init_logger();
    for repr in REPRESENTATIONS {
        let (g, n) = mst_fixture(repr);
        assert_eq!(g.size(), 7);
        assert_eq!(g.edge_count(), 11);

        let tree = g.minimum_spanning_tree().unwrap();
        assert_eq!(tree.size(), 7);
        assert_eq!(tree.edge_count(), 6);
        assert_eq!(tree.total_weight(), 39.0);
        assert!(!tree.directed());
        assert!(tree.weighted());
        assert_eq!(tree.traversal(), Some(TraversalMode::DepthFirst));

        for a in &n[1..] {
            for b in &n[1..] {
                assert!(tree.search(a, b).unwrap());
            }
        }
    }
}

#[test]
fn test_mst_shares_original_nodes_and_leaves_source_intact() {
    let (g, n) = mst_fixture(Representation::AdjacencyList);
    let tree = kruskal(&g).unwrap();
    assert!(tree.nodes().iter().all(|node| g.contains(node)));
    for edge in tree.edges() {
        let original = g.edge(edge.source(), edge.target()).unwrap();
        assert_eq!(original.weight(), edge.weight());
    }
    assert_eq!(g.edge_count(), 11);
    assert!(tree.edge(&n[4], &n[5]).is_none(), "weight-15 edge is never needed");
}

#[test]
fn test_mst_tree_can_be_searched_again() {
    let (g, n) = mst_fixture(Representation::EdgeList);
    let mut tree = g.minimum_spanning_tree().unwrap();
    tree.set_traversal(Some(TraversalMode::BreadthFirst));
    assert!(tree.search(&n[7], &n[3]).unwrap());
}

#[test]
fn test_mst_requires_capability() {
    let mut g = Graph::builder().weighted(true).build().unwrap();
    g.insert_edge(&Node::new(), &Node::new(), Some(1.0)).unwrap();
    assert!(matches!(
        g.minimum_spanning_tree(),
        Err(GraphError::CapabilityDisabled(
            Capability::MinimumSpanningTree
        ))
    ));
    // The free function only checks the graph's shape.
    assert_eq!(kruskal(&g).unwrap().edge_count(), 1);
}

// ==================== SSSP ====================

#[test]
fn test_sssp_from_zero() {
    init_logger();
    for repr in REPRESENTATIONS {
        let (g, n) = sssp_fixture(repr);
        let tree = g.shortest_path_tree(&n[0]).unwrap();
        assert_eq!(tree.size(), 7);
        assert_eq!(tree.edge_count(), 6);
        assert_eq!(tree.total_weight(), 35.0);
        assert!(tree.directed());
        for node in &n {
            assert!(tree.search(&n[0], node).unwrap());
        }
    }
}

#[test]
fn test_sssp_from_three_excludes_unreachable() {
    for repr in REPRESENTATIONS {
        let (g, n) = sssp_fixture(repr);
        let tree = g.shortest_path_tree(&n[3]).unwrap();
        assert_eq!(tree.size(), 4);
        assert_eq!(tree.edge_count(), 3);
        assert_eq!(tree.total_weight(), 7.0);
        for absent in [&n[0], &n[1], &n[2]] {
            assert!(!tree.contains(absent));
        }
    }
}

#[test]
fn test_sssp_paths_are_shortest() {
    let (g, n) = sssp_fixture(Representation::EdgeList);
    let distances = shortest_distances(&g, &n[0]).unwrap();
    let expected = [0.0, 5.0, 20.0, 3.0, 4.0, 7.0, 10.0];
    for (node, distance) in &distances {
        let label = n.iter().position(|candidate| candidate == node).unwrap();
        assert_eq!(*distance, expected[label]);
    }

    // Walking predecessors in the tree reproduces each distance.
    let tree = dijkstra(&g, &n[0]).unwrap();
    for (node, distance) in &distances {
        let mut total = 0.0;
        let mut current = node.clone();
        while current != n[0] {
            let edge = tree
                .edges()
                .into_iter()
                .find(|edge| edge.target() == &current)
                .unwrap();
            total += edge.weight().unwrap();
            current = edge.source().clone();
        }
        assert_eq!(total, *distance);
    }
}

#[test]
fn test_sssp_rejects_unknown_source() {
    let (g, _) = sssp_fixture(Representation::AdjacencyList);
    assert!(matches!(
        g.shortest_path_tree(&Node::new()),
        Err(GraphError::NodeNotInGraph(_))
    ));
}

#[test]
fn test_sssp_requires_capability() {
    let mut g = Graph::builder().directed(true).weighted(true).build().unwrap();
    let n: Vec<Node> = (0..2).map(|_| Node::new()).collect();
    g.insert_edge(&n[0], &n[1], Some(2.0)).unwrap();
    assert!(matches!(
        g.shortest_path_tree(&n[0]),
        Err(GraphError::CapabilityDisabled(Capability::ShortestPaths))
    ));
}
