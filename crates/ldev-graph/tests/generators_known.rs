use ldev_core::RngHandle;
use ldev_graph::{ErPolicy, GraphState};

#[test]
fn complete_graph_on_ten_vertices() {
    let mut graph = GraphState::new(10, false, false).unwrap();
    graph.generate_complete();
    assert_eq!(graph.edge_count(), 45);
    assert_eq!(graph.largest_component_size(), 10);
    assert_eq!(graph.component_count(), 1);
}

#[test]
fn complete_digraph_counts_ordered_pairs() {
    let mut graph = GraphState::new(6, true, false).unwrap();
    graph.generate_complete();
    assert_eq!(graph.edge_count(), 30);
    for i in 0..6 {
        assert!(!graph.has_edge(i, i));
    }
}

#[test]
fn empty_graph_observables() {
    let mut graph = GraphState::new(10, false, false).unwrap();
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.largest_component_size(), 1);
    assert_eq!(graph.component_count(), 10);
}

#[test]
fn line_graph_is_a_single_chain() {
    let mut graph = GraphState::new(10, false, false).unwrap();
    graph.generate_line();
    assert_eq!(graph.edge_count(), 9);
    assert_eq!(graph.largest_component_size(), 10);
    assert_eq!(graph.component_count(), 1);
    for i in 0..9 {
        assert!(graph.has_edge(i + 1, i));
    }
}

#[test]
fn line_graph_resets_previous_edges() {
    let mut graph = GraphState::new(5, false, false).unwrap();
    graph.generate_complete();
    graph.generate_line();
    assert_eq!(graph.edge_count(), 4);
    assert!(!graph.has_edge(4, 0));
}

#[test]
fn single_vertex_graphs_are_degenerate_but_valid() {
    let mut graph = GraphState::new(1, false, false).unwrap();
    graph.generate_line();
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.largest_component_size(), 1);
}

#[test]
fn er_extreme_connectivities_pin_the_graph() {
    let mut rng = RngHandle::from_seed(11);
    let n = 12;

    let mut graph = GraphState::new(n, false, false).unwrap();
    let saturated = ErPolicy::new(2.0 * n as f64, n);
    graph.generate_random(&saturated, &mut rng);
    // p = 2 > any draw, so every feasible edge is present.
    assert_eq!(graph.edge_count(), n * (n - 1) / 2);
    assert_eq!(graph.largest_component_size(), n);

    let vacuous = ErPolicy::new(-1.0, n);
    graph.generate_random(&vacuous, &mut rng);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.component_count(), n);
}

#[test]
fn zero_vertex_graph_is_rejected() {
    let err = GraphState::new(0, false, false).unwrap_err();
    assert_eq!(err.info().code, "empty-graph");
}
