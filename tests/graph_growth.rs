//! Matrix growth tests: edges must survive vertex registration.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use matrix_graph::graph::{DiMatrixGraph, UnMatrixGraph};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_growth_preserves_directed_edges() {
    init_logger();
    let mut graph: DiMatrixGraph<&str, i32> = DiMatrixGraph::new();
    graph.add_vertices(["A", "B"]);
    graph.add_edge(&"A", &"B", 1).unwrap();
    graph.add_edge(&"B", &"A", 2).unwrap();
    graph.add_edge(&"B", &"B", 3).unwrap();

    graph.add_vertex("C");
    graph.add_vertices(["D", "E", "F"]);

    assert_eq!(*graph.edge(&"A", &"B").unwrap(), 1);
    assert_eq!(*graph.edge(&"B", &"A").unwrap(), 2);
    assert_eq!(*graph.edge(&"B", &"B").unwrap(), 3);
    assert!(!graph.has_edge(&"A", &"A").unwrap());
    for new in ["C", "D", "E", "F"] {
        assert!(graph.neighbors(&new).unwrap().is_empty());
        assert!(!graph.has_edge(&"A", &new).unwrap());
        assert!(!graph.has_edge(&new, &"B").unwrap());
    }
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.edges().count(), 3);
}

#[test]
fn test_growth_preserves_undirected_edges() {
    let mut graph: UnMatrixGraph<u32, &str> = UnMatrixGraph::new();
    graph.add_vertices([10, 20, 30]);
    graph.add_edge(&10, &30, "long").unwrap();
    graph.add_edge(&20, &30, "short").unwrap();

    graph.add_vertex(40);
    graph.add_edge(&40, &10, "new").unwrap();

    assert_eq!(*graph.edge(&30, &10).unwrap(), "long");
    assert_eq!(*graph.edge(&10, &30).unwrap(), "long");
    assert_eq!(*graph.edge(&30, &20).unwrap(), "short");
    assert_eq!(*graph.edge(&10, &40).unwrap(), "new");
    assert!(!graph.has_edge(&10, &20).unwrap());
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn test_reregistering_does_not_touch_matrix() {
    let mut graph: DiMatrixGraph<&str, i32> = DiMatrixGraph::new();
    graph.add_vertices(["A", "B"]);
    graph.add_edge(&"A", &"B", 1).unwrap();

    graph.add_vertices(["B", "A"]);

    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.all_edges(), vec![("A", "B", 1)]);
}

#[test]
fn test_with_capacity_behaves_like_new() {
    let mut graph: DiMatrixGraph<usize, usize> = DiMatrixGraph::with_capacity(8);
    for v in 0..12 {
        graph.add_vertex(v);
        if v > 0 {
            graph.add_edge(&(v - 1), &v, v).unwrap();
        }
    }

    for v in 1..12 {
        assert_eq!(*graph.edge(&(v - 1), &v).unwrap(), v);
    }
    assert_eq!(graph.edge_count(), 11);
}

#[test]
fn test_growth_within_reserved_capacity_preserves_edges() {
    init_logger();
    let mut graph: DiMatrixGraph<u32, u32> = DiMatrixGraph::with_capacity(16);
    graph.add_vertices([0, 1, 2]);
    graph.add_edge(&0, &2, 1).unwrap();
    graph.add_edge(&2, &0, 2).unwrap();
    graph.add_edge(&1, &1, 3).unwrap();
    graph.add_edge(&2, &2, 4).unwrap();

    for v in 3..16 {
        graph.add_vertex(v);
        assert_eq!(*graph.edge(&0, &2).unwrap(), 1);
        assert_eq!(*graph.edge(&2, &0).unwrap(), 2);
        assert_eq!(*graph.edge(&1, &1).unwrap(), 3);
        assert_eq!(*graph.edge(&2, &2).unwrap(), 4);
        assert!(!graph.has_edge(&0, &1).unwrap());
        assert!(!graph.has_edge(&2, &1).unwrap());
        assert!(graph.neighbors(&v).unwrap().is_empty());
        assert_eq!(graph.edges().count(), 4);
    }

    graph.add_vertices(16..40);
    assert_eq!(graph.all_edges(), vec![(0, 2, 1), (1, 1, 3), (2, 0, 2), (2, 2, 4)]);
}

/// Interleave registrations and edge mutations, checking every pair against
/// a plain map after each step.
#[test]
fn test_random_growth_matches_reference_model() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut graph: DiMatrixGraph<u32, u32> = DiMatrixGraph::new();
    let mut reference: HashMap<(u32, u32), u32> = HashMap::new();
    let mut labels: Vec<u32> = Vec::new();

    for round in 0..40u32 {
        let batch = rng.gen_range(0..3);
        let new_labels: Vec<u32> = (0..batch).map(|_| rng.gen_range(0..64)).collect();
        graph.add_vertices(new_labels.iter().copied());
        for label in new_labels {
            if !labels.contains(&label) {
                labels.push(label);
            }
        }

        if labels.is_empty() {
            continue;
        }
        for _ in 0..5 {
            let src = labels[rng.gen_range(0..labels.len())];
            let dest = labels[rng.gen_range(0..labels.len())];
            if rng.gen_bool(0.7) {
                graph.add_edge(&src, &dest, round).unwrap();
                reference.insert((src, dest), round);
            } else {
                graph.remove_edge(&src, &dest).unwrap();
                reference.remove(&(src, dest));
            }
        }

        assert_eq!(graph.vertices(), labels.as_slice());
        assert_eq!(graph.edge_count(), reference.len());
        for &src in &labels {
            for &dest in &labels {
                match reference.get(&(src, dest)) {
                    Some(&value) => assert_eq!(*graph.edge(&src, &dest).unwrap(), value),
                    None => assert!(!graph.has_edge(&src, &dest).unwrap()),
                }
            }
        }
    }
}

/// Same interleaving on an undirected graph: both directions must agree
/// after every round.
#[test]
fn test_random_undirected_growth_stays_symmetric() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(0xd1ce);
    let mut graph: UnMatrixGraph<u32, u32> = UnMatrixGraph::new();
    let mut reference: HashMap<(u32, u32), u32> = HashMap::new();
    let mut labels: Vec<u32> = Vec::new();

    for round in 0..40u32 {
        let batch = rng.gen_range(0..3);
        let new_labels: Vec<u32> = (0..batch).map(|_| rng.gen_range(0..64)).collect();
        graph.add_vertices(new_labels.iter().copied());
        for label in new_labels {
            if !labels.contains(&label) {
                labels.push(label);
            }
        }

        if labels.is_empty() {
            continue;
        }
        for _ in 0..5 {
            let a = labels[rng.gen_range(0..labels.len())];
            let b = labels[rng.gen_range(0..labels.len())];
            let key = (a.min(b), a.max(b));
            if rng.gen_bool(0.7) {
                graph.add_edge(&a, &b, round).unwrap();
                reference.insert(key, round);
            } else {
                graph.remove_edge(&a, &b).unwrap();
                reference.remove(&key);
            }
        }

        assert_eq!(graph.edge_count(), reference.len());
        for &a in &labels {
            for &b in &labels {
                let forward = graph.has_edge(&a, &b).unwrap();
                assert_eq!(forward, graph.has_edge(&b, &a).unwrap());
                match reference.get(&(a.min(b), a.max(b))) {
                    Some(&value) => {
                        assert!(forward);
                        assert_eq!(*graph.edge(&a, &b).unwrap(), value);
                        assert_eq!(*graph.edge(&b, &a).unwrap(), value);
                    }
                    None => assert!(!forward),
                }
            }
        }
    }
}
