use felt_engine::interactions::InteractionGraph;

#[test]
fn round_with_k_seats_adds_k_times_k_minus_1_edges() {
    let mut graph = InteractionGraph::new();
    let names = ["A", "B", "C", "D"];
    graph.record_round(&names, 50);
    // 4 seats -> 6 unordered pairs, each recorded twice
    assert_eq!(graph.edge_count(), 12);
}

#[test]
fn edges_are_symmetric_and_weighted() {
    let mut graph = InteractionGraph::new();
    graph.record("A", "B", 75);

    assert_eq!(graph.interactions_of("A"), vec![("B".to_string(), 75)]);
    assert_eq!(graph.interactions_of("B"), vec![("A".to_string(), 75)]);
}

#[test]
fn graph_only_grows_across_rounds() {
    let mut graph = InteractionGraph::new();
    graph.record_round(&["A", "B", "C"], 10);
    assert_eq!(graph.edge_count(), 6);
    // the same pairs interact again at a new bet: nothing is replaced
    graph.record_round(&["A", "B", "C"], 30);
    assert_eq!(graph.edge_count(), 12);

    let a = graph.interactions_of("A");
    assert_eq!(a.len(), 4);
    assert_eq!(a[0], ("B".to_string(), 10));
    assert_eq!(a[2], ("B".to_string(), 30));
}

#[test]
fn folded_seats_simply_never_appear() {
    let mut graph = InteractionGraph::new();
    graph.record_round(&["A", "C"], 20);
    assert!(graph.interactions_of("B").is_empty());
    assert_eq!(graph.players(), vec!["A".to_string(), "C".to_string()]);
}

#[test]
fn single_seat_round_records_nothing() {
    let mut graph = InteractionGraph::new();
    graph.record_round(&["Lonely"], 100);
    assert_eq!(graph.edge_count(), 0);
}
