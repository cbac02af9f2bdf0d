use spt_engine::algorithm::cycle::{find_cycle, has_cycle};
use spt_engine::algorithm::relax::relax;
use spt_engine::algorithm::topological::topological_order;
use spt_engine::graph::format_path;
use spt_engine::{AcyclicPaths, BellmanFord, Dijkstra, Edge, Error, PathMode, ShortestPathTree, WeightedDigraph};

fn digraph(vertices: usize, edges: &[(usize, usize, f64)]) -> WeightedDigraph<f64> {
    let mut graph = WeightedDigraph::new(vertices);
    for &(from, to, weight) in edges {
        graph.add_edge(from, to, weight).unwrap();
    }
    graph
}

// tinyEWDAG: an 8-vertex edge-weighted DAG
fn tiny_ewdag() -> WeightedDigraph<f64> {
    digraph(
        8,
        &[
            (5, 4, 0.35), (4, 7, 0.37), (5, 7, 0.28), (5, 1, 0.32), (4, 0, 0.38), (0, 2, 0.26),
            (3, 7, 0.39), (1, 3, 0.29), (7, 2, 0.34), (6, 2, 0.40), (3, 6, 0.52), (6, 0, 0.58),
            (6, 4, 0.93),
        ],
    )
}

#[test]
fn test_dijkstra_and_acyclic_agree_on_dag() {
    let graph = tiny_ewdag();
    let sp = Dijkstra::new(&graph, 5).unwrap();
    let dag = AcyclicPaths::shortest(&graph, 5).unwrap();

    assert_eq!(format_path(&sp.path_to(0).unwrap()), "[5->4 0.35 4->0 0.38]");
    assert_eq!(sp.path_to(0).unwrap(), dag.path_to(0).unwrap());
    assert!((sp.dist_to(0).unwrap() - 0.73).abs() < 1e-12);

    for v in 0..8 {
        let (a, b) = (sp.dist_to(v).unwrap(), dag.dist_to(v).unwrap());
        assert!((a - b).abs() < 1e-12, "vertex {}: {} vs {}", v, a, b);
    }
    assert_eq!(sp.reachable(), 8);
}

#[test]
fn test_longest_paths_in_dag() {
    let lp = AcyclicPaths::longest(&tiny_ewdag(), 5).unwrap();
    assert!((lp.dist_to(0).unwrap() - 2.44).abs() < 1e-9);
    assert!((lp.dist_to(7).unwrap() - 2.43).abs() < 1e-9);
    assert!((lp.dist_to(6).unwrap() - 1.13).abs() < 1e-9);
    assert_eq!(
        format_path(&lp.path_to(0).unwrap()),
        "[5->1 0.32 1->3 0.29 3->6 0.52 6->4 0.93 4->0 0.38]"
    );
}

#[test]
fn test_relaxation_accepts_only_improvements() {
    let mut dist_to = vec![3.1, 3.3];
    let mut edge_to: Vec<Option<Edge<f64>>> = vec![None, None];

    let cheap = Edge::new(0, 1, 0.1);
    assert!(relax(&cheap, &mut dist_to, &mut edge_to, PathMode::Shortest));
    assert_eq!(edge_to[1], Some(cheap));
    assert!((dist_to[1] - 3.2).abs() < 1e-12);

    let mut dist_to = vec![3.1, 3.3];
    let mut edge_to: Vec<Option<Edge<f64>>> = vec![None, None];
    assert!(!relax(&Edge::new(0, 1, 1.3), &mut dist_to, &mut edge_to, PathMode::Shortest));
    assert_eq!(edge_to[1], None);
    assert_eq!(dist_to[1], 3.3);
}

#[test]
fn test_cycle_extraction() {
    let edges = [
        (4, 2), (2, 3), (3, 2), (6, 0), (0, 1), (2, 0), (11, 12), (12, 9), (9, 10), (9, 11), (7, 9),
        (10, 12), (11, 4), (4, 3), (3, 5), (6, 8), (8, 6), (5, 4), (0, 5), (6, 4), (6, 9), (7, 6),
    ];
    let mut graph = WeightedDigraph::new(13);
    for (from, to) in edges {
        graph.add_edge(from, to, 0.0).unwrap();
    }

    assert!(has_cycle(&graph));
    let cycle = find_cycle(&graph).unwrap();
    assert_eq!(format_path(&cycle), "[3->5 0.00 5->4 0.00 4->3 0.00]");

    match topological_order(&graph) {
        Err(Error::NotAcyclic(cycle)) => assert_eq!(cycle, "[3->5 0.00 5->4 0.00 4->3 0.00]"),
        other => panic!("expected NotAcyclic, got {:?}", other),
    }
    assert!(matches!(AcyclicPaths::shortest(&graph, 0), Err(Error::NotAcyclic(_))));
}

#[test]
fn test_unreachable_vertex_has_no_path() {
    let graph = digraph(4, &[(0, 1, 1.0), (2, 3, 1.0)]);

    let trees: Vec<Box<dyn ShortestPathTree<f64>>> = vec![
        Box::new(Dijkstra::new(&graph, 0).unwrap()),
        Box::new(BellmanFord::new(&graph, 0).unwrap()),
        Box::new(AcyclicPaths::shortest(&graph, 0).unwrap()),
        Box::new(AcyclicPaths::longest(&graph, 0).unwrap()),
    ];
    for tree in &trees {
        assert!(!tree.has_path_to(2).unwrap(), "{}", tree.name());
        assert!(tree.path_to(2).unwrap().is_empty(), "{}", tree.name());
        assert_eq!(tree.path_to(1).unwrap(), vec![Edge::new(0, 1, 1.0)]);
        assert_eq!(tree.reachable(), 2);
        assert_eq!(tree.dist_to(9), Err(Error::InvalidVertex(9)));
    }
}

#[test]
fn test_invalid_source_is_rejected() {
    let graph = digraph(2, &[(0, 1, 1.0)]);
    assert_eq!(Dijkstra::new(&graph, 2).unwrap_err(), Error::SourceNotFound(2));
    assert_eq!(BellmanFord::new(&graph, 2).unwrap_err(), Error::SourceNotFound(2));
    assert_eq!(AcyclicPaths::shortest(&graph, 2).unwrap_err(), Error::SourceNotFound(2));
    assert_eq!(graph.clone().add_edge(0, 2, 1.0), Err(Error::InvalidVertex(2)));
}

#[test]
fn test_empty_graph() {
    let graph: WeightedDigraph<f64> = WeightedDigraph::new(0);
    assert_eq!(topological_order(&graph).unwrap(), Vec::<usize>::new());
    assert!(find_cycle(&graph).is_none());
    assert_eq!(Dijkstra::new(&graph, 0).unwrap_err(), Error::SourceNotFound(0));
}
