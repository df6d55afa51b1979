//! Phase 1 tests: graph store under both representations.

use std::sync::{Arc, RwLock};
use std::thread;

use duograph::graph::{Graph, Representation, TraversalMode, WeightPolicy};
use duograph::types::{GraphError, Node};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const REPRESENTATIONS: [Representation; 2] =
    [Representation::EdgeList, Representation::AdjacencyList];

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn nodes(count: usize) -> Vec<Node> {
    (0..count).map(|_| Node::new()).collect()
}

// ==================== Insertion ====================

#[test]
fn test_reinsertion_is_idempotent() {
    init_logger();
    for directed in [false, true] {
        for repr in REPRESENTATIONS {
            let mut g = Graph::builder()
                .directed(directed)
                .weighted(true)
                .representation(repr)
                .build()
                .unwrap();
            let n = nodes(3);
            let first = g.insert_edge(&n[0], &n[1], Some(4.0)).unwrap();
            g.insert_edge(&n[1], &n[2], Some(1.0)).unwrap();
            let (size, edges) = (g.size(), g.edge_count());

            let again = g.insert_edge(&n[0], &n[1], Some(9.0)).unwrap();
            assert_eq!(first, again);
            assert_eq!(again.weight(), Some(4.0), "weight must not be updated");
            assert_eq!(g.size(), size);
            assert_eq!(g.edge_count(), edges);
        }
    }
}

#[test]
fn test_node_count_ignores_duplicates() {
    let mut g = Graph::builder().build().unwrap();
    let n = nodes(4);
    g.insert_edge(&n[0], &n[1], None).unwrap();
    g.insert_edge(&n[0], &n[1], None).unwrap();
    g.insert_edge(&n[1], &n[0], None).unwrap();
    assert_eq!(g.size(), 2);
    g.insert_edge(&n[2], &n[1], None).unwrap();
    assert_eq!(g.size(), 3);
    g.insert_edge(&n[2], &n[3], None).unwrap();
    assert_eq!(g.size(), 4);
    g.insert_edge(&n[3], &n[0], None).unwrap();
    assert_eq!(g.size(), 4);
}

#[test]
fn test_assignment_graph_counts() {
    let mut g = Graph::builder().printable(false).build().unwrap();
    let n = nodes(8);
    for (a, b) in [(0, 1), (0, 2), (0, 3), (0, 4), (4, 5), (4, 6), (4, 7)] {
        g.insert_edge(&n[a], &n[b], None).unwrap();
    }
    assert_eq!(g.size(), 8);
    assert_eq!(g.edge_count(), 7);
}

#[test]
fn test_adjacency_edge_counts() {
    let mut directed = Graph::builder()
        .directed(true)
        .representation(Representation::AdjacencyList)
        .build()
        .unwrap();
    let n = nodes(3);
    directed.insert_edge(&n[0], &n[1], None).unwrap();
    directed.insert_edge(&n[1], &n[0], None).unwrap();
    directed.insert_edge(&n[1], &n[2], None).unwrap();
    directed.insert_edge(&n[0], &n[2], None).unwrap();
    assert_eq!(directed.edge_count(), 4);

    let mut undirected = Graph::builder()
        .representation(Representation::AdjacencyList)
        .build()
        .unwrap();
    let m = nodes(3);
    undirected.insert_edge(&m[0], &m[1], None).unwrap();
    undirected.insert_edge(&m[1], &m[2], None).unwrap();
    undirected.insert_edge(&m[0], &m[2], None).unwrap();
    assert_eq!(undirected.edge_count(), 3);
}

// ==================== Weights ====================

#[test]
fn test_negative_and_missing_weights_rejected() {
    for repr in REPRESENTATIONS {
        let mut g = Graph::builder()
            .weighted(true)
            .representation(repr)
            .build()
            .unwrap();
        let n = nodes(3);
        g.insert_edge(&n[0], &n[1], Some(1.0)).unwrap();

        let err = g.insert_edge(&n[1], &n[2], Some(-3.0)).unwrap_err();
        assert!(matches!(err, GraphError::InvalidWeight(Some(w)) if w == -3.0));
        let err = g.insert_edge(&n[1], &n[2], None).unwrap_err();
        assert!(matches!(err, GraphError::InvalidWeight(None)));

        assert_eq!(g.size(), 2);
        assert_eq!(g.edge_count(), 1);
        assert!(!g.contains(&n[2]));
    }
}

#[test]
fn test_substitute_policy() {
    let mut g = Graph::builder()
        .weighted(true)
        .weight_policy(WeightPolicy::Substitute { default: 2.0 })
        .build()
        .unwrap();
    let n = nodes(2);
    let edge = g.insert_edge(&n[0], &n[1], Some(-1.0)).unwrap();
    assert_eq!(edge.weight(), Some(2.0));
    assert_eq!(g.total_weight(), 2.0);
}

// ==================== Configuration ====================

#[test]
fn test_contradictory_capabilities_rejected() {
    let cases = [
        Graph::builder().directed(true).weighted(true).mst(true).build(),
        Graph::builder().mst(true).build(),
        Graph::builder().weighted(true).sssp(true).build(),
        Graph::builder().directed(true).sssp(true).build(),
    ];
    for result in cases {
        assert!(matches!(result, Err(GraphError::Configuration(_))));
    }
    assert!(Graph::builder().weighted(true).mst(true).build().is_ok());
    assert!(Graph::builder()
        .directed(true)
        .weighted(true)
        .sssp(true)
        .build()
        .is_ok());
}

// ==================== Queries ====================

#[test]
fn test_neighbours_of_unknown_node() {
    for repr in REPRESENTATIONS {
        let mut g = Graph::builder().representation(repr).build().unwrap();
        let n = nodes(2);
        g.insert_edge(&n[0], &n[1], None).unwrap();
        assert!(matches!(
            g.neighbours(&Node::new()),
            Err(GraphError::NodeNotInGraph(_))
        ));
    }
}

#[test]
fn test_undirected_neighbours_both_ways() {
    for repr in REPRESENTATIONS {
        let mut g = Graph::builder().representation(repr).build().unwrap();
        let n = nodes(3);
        g.insert_edge(&n[0], &n[1], None).unwrap();
        g.insert_edge(&n[2], &n[0], None).unwrap();
        let mut around = g.neighbours(&n[0]).unwrap();
        around.sort_by_key(|node| node.id());
        assert_eq!(around, vec![n[1].clone(), n[2].clone()]);
        assert_eq!(g.neighbours(&n[1]).unwrap(), vec![n[0].clone()]);
    }
}

#[test]
fn test_edge_lookup_respects_direction() {
    for repr in REPRESENTATIONS {
        let mut g = Graph::builder()
            .directed(true)
            .weighted(true)
            .representation(repr)
            .build()
            .unwrap();
        let n = nodes(2);
        g.insert_edge(&n[0], &n[1], Some(7.0)).unwrap();
        let edge = g.edge(&n[0], &n[1]).unwrap();
        assert_eq!(edge.source(), &n[0]);
        assert_eq!(edge.target(), &n[1]);
        assert_eq!(edge.weight(), Some(7.0));
        assert!(g.edge(&n[1], &n[0]).is_none());
    }
}

// ==================== Representation equivalence ====================

#[test]
fn test_representations_agree_on_random_graphs() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(7);
    for round in 0..20 {
        let directed = round % 2 == 0;
        let n = nodes(12);
        let mut graphs: Vec<Graph> = REPRESENTATIONS
            .iter()
            .map(|&repr| {
                Graph::builder()
                    .directed(directed)
                    .representation(repr)
                    .traversal(TraversalMode::BreadthFirst)
                    .build()
                    .unwrap()
            })
            .collect();

        for _ in 0..18 {
            let a = rng.gen_range(0..n.len());
            let b = rng.gen_range(0..n.len());
            for g in &mut graphs {
                g.insert_edge(&n[a], &n[b], None).unwrap();
            }
        }

        let (edges, adjacency) = (&graphs[0], &graphs[1]);
        assert_eq!(edges.size(), adjacency.size());
        assert_eq!(edges.edge_count(), adjacency.edge_count());
        assert_eq!(edges.edges().len(), adjacency.edges().len());
        for start in edges.nodes() {
            for goal in edges.nodes() {
                assert_eq!(
                    edges.search(start, goal).unwrap(),
                    adjacency.search(start, goal).unwrap()
                );
            }
        }
    }
}

// ==================== Threads ====================

#[test]
fn test_shared_graph_across_threads() {
    for repr in REPRESENTATIONS {
        let graph = Graph::builder()
            .directed(true)
            .weighted(true)
            .representation(repr)
            .traversal(TraversalMode::BreadthFirst)
            .build()
            .unwrap();
        let shared = Arc::new(RwLock::new(graph));
        let n = nodes(40);
        let pairs: Vec<&[Node]> = n.windows(2).collect();

        // Writers take turns through the lock, each inserting its own slice of a chain.
        thread::scope(|scope| {
            for chunk in pairs.chunks(10) {
                let shared = Arc::clone(&shared);
                scope.spawn(move || {
                    for pair in chunk {
                        let mut g = shared.write().unwrap();
                        g.insert_edge(&pair[0], &pair[1], Some(1.0)).unwrap();
                    }
                });
            }
        });

        let g = shared.read().unwrap();
        assert_eq!(g.size(), 40);
        assert_eq!(g.edge_count(), 39);

        // Readers query the same graph at once.
        thread::scope(|scope| {
            for i in 0..4 {
                let (g, n) = (&*g, &n);
                scope.spawn(move || {
                    assert!(g.search(&n[i], &n[39]).unwrap());
                    assert_eq!(g.neighbours(&n[i]).unwrap(), vec![n[i + 1].clone()]);
                    assert!(g.edge(&n[i], &n[i + 1]).is_some());
                });
            }
        });
    }
}
