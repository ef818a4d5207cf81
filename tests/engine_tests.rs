use johnson_apsp::{EngineState, Error, JohnsonEngine};
use ordered_float::OrderedFloat;

fn w(x: f64) -> OrderedFloat<f64> {
    OrderedFloat(x)
}

// Test helper: a three-node engine with a computed result
fn ready_engine() -> JohnsonEngine<OrderedFloat<f64>> {
    let mut engine = JohnsonEngine::new();
    for name in ["A", "B", "C"] {
        assert!(engine.add_node(name));
    }
    assert!(engine.add_edge("A", "B", w(4.0)));
    assert!(engine.add_edge("A", "C", w(1.0)));
    assert!(engine.add_edge("C", "B", w(1.0)));
    engine.compute().expect("compute should succeed");
    assert_eq!(engine.state(), EngineState::Ready);
    engine
}

#[test]
fn test_queries_require_a_computed_result() {
    let mut engine: JohnsonEngine<OrderedFloat<f64>> = JohnsonEngine::new();
    engine.add_node("A");
    engine.add_node("B");

    assert!(matches!(engine.distance("A", "B"), Err(Error::EngineNotReady)));
    assert!(matches!(engine.path("A", "B"), Err(Error::EngineNotReady)));
    assert!(matches!(engine.all_distances(), Err(Error::EngineNotReady)));
    assert_eq!(engine.state(), EngineState::Stale);
}

#[test]
fn test_effective_mutation_invalidates() {
    let mut engine = ready_engine();

    assert!(engine.add_edge("B", "C", w(2.0)));
    assert_eq!(engine.state(), EngineState::Stale);
    assert!(engine.result().is_none());
    assert!(matches!(engine.distance("A", "B"), Err(Error::EngineNotReady)));

    engine.compute().unwrap();
    assert_eq!(engine.distance("A", "B").unwrap(), Some(w(2.0)));
}

#[test]
fn test_noop_mutations_keep_the_result() {
    let mut engine = ready_engine();

    // Duplicate node, duplicate edge, absent removals, rejected input
    assert!(!engine.add_node("A"));
    assert!(!engine.add_node(""));
    assert!(!engine.add_edge("A", "B", w(9.0)));
    assert!(!engine.add_edge("A", "Z", w(1.0)));
    assert!(!engine.add_edge("A", "B", w(f64::NAN)));
    assert!(!engine.remove_node("Z"));
    assert!(!engine.remove_edge("B", "A"));
    assert!(!engine.update_edge_weight("A", "B", w(f64::INFINITY)));
    assert!(!engine.update_edge_weight("B", "A", w(1.0)));

    assert_eq!(engine.state(), EngineState::Ready);
    assert_eq!(engine.distance("A", "B").unwrap(), Some(w(2.0)));
}

#[test]
fn test_update_edge_weight_invalidates_and_applies() {
    let mut engine = ready_engine();

    assert!(engine.update_edge_weight("A", "C", w(5.0)));
    assert_eq!(engine.graph().edge_weight("A", "C"), Some(w(5.0)));
    assert_eq!(engine.state(), EngineState::Stale);

    engine.compute().unwrap();
    // The detour through C now costs 6, the direct edge wins
    assert_eq!(engine.distance("A", "B").unwrap(), Some(w(4.0)));
    assert_eq!(engine.path("A", "B").unwrap(), vec!["A", "B"]);
}

#[test]
fn test_explicit_invalidate() {
    let mut engine = ready_engine();
    engine.invalidate();

    assert_eq!(engine.state(), EngineState::Stale);
    assert!(engine.result().is_none());
}

#[test]
fn test_recovery_from_failed_state() {
    let mut engine = JohnsonEngine::new();
    engine.add_node("A");
    engine.add_node("B");
    engine.add_edge("A", "B", w(-1.0));
    engine.add_edge("B", "A", w(-1.0));

    assert!(matches!(engine.compute(), Err(Error::NegativeCycle)));
    assert_eq!(engine.state(), EngineState::Failed);

    // Breaking the cycle makes the graph computable again
    assert!(engine.remove_edge("B", "A"));
    assert_eq!(engine.state(), EngineState::Stale);

    engine.compute().unwrap();
    assert_eq!(engine.state(), EngineState::Ready);
    assert_eq!(engine.distance("A", "B").unwrap(), Some(w(-1.0)));
}

#[test]
fn test_failed_compute_discards_previous_result() {
    let mut engine = ready_engine();

    assert!(engine.add_edge("B", "A", w(-10.0)));
    assert!(matches!(engine.compute(), Err(Error::NegativeCycle)));

    // The previously valid result must not resurface
    assert_eq!(engine.state(), EngineState::Failed);
    assert!(engine.result().is_none());
    assert!(matches!(engine.distance("A", "B"), Err(Error::EngineNotReady)));
}

#[test]
fn test_unknown_node_queries() {
    let engine = ready_engine();

    assert!(matches!(
        engine.distance("A", "Z"),
        Err(Error::UnknownNode(name)) if name == "Z"
    ));
    assert!(matches!(
        engine.path("Z", "A"),
        Err(Error::UnknownNode(name)) if name == "Z"
    ));
}

#[test]
fn test_queries_resolve_against_the_computed_snapshot() {
    let mut engine = ready_engine();

    // D exists in the model but not in the snapshot the result was built
    // from, so the stale result must not answer for it
    assert!(engine.add_node("D"));
    assert!(matches!(engine.distance("A", "D"), Err(Error::EngineNotReady)));

    engine.compute().unwrap();
    assert_eq!(engine.distance("A", "D").unwrap(), None);
}

#[test]
fn test_remove_node_drops_incident_edges() {
    let mut engine = ready_engine();

    assert!(engine.remove_node("C"));
    assert_eq!(engine.graph().node_count(), 2);
    assert_eq!(engine.graph().edge_count(), 1);
    assert!(engine.graph().has_edge("A", "B"));
    assert!(!engine.graph().has_edge("A", "C"));

    engine.compute().unwrap();
    // Without the detour the direct edge is the only path
    assert_eq!(engine.distance("A", "B").unwrap(), Some(w(4.0)));
}

#[test]
fn test_clear_empties_the_graph() {
    let mut engine = ready_engine();

    assert!(engine.clear());
    assert_eq!(engine.state(), EngineState::Stale);
    assert_eq!(engine.graph().node_count(), 0);
    assert_eq!(engine.graph().edge_count(), 0);

    // Clearing an already empty graph is a no-op
    assert!(!engine.clear());
}

#[test]
fn test_matrix_follows_node_order() {
    let engine = ready_engine();
    let matrix = engine.all_distances().unwrap();

    assert_eq!(matrix.nodes(), &["A", "B", "C"]);
    assert_eq!(matrix.get(0, 0), Some(Some(w(0.0))));
    assert_eq!(matrix.get(0, 1), Some(Some(w(2.0))));
    assert_eq!(matrix.get(0, 2), Some(Some(w(1.0))));
    // B has no outgoing edges: in range but unreachable
    assert_eq!(matrix.get(1, 0), Some(None));
    assert_eq!(matrix.get(1, 2), Some(None));
    // Out-of-range indices stay distinguishable from unreachable pairs
    assert_eq!(matrix.get(0, 3), None);
    assert_eq!(matrix.get(3, 0), None);
}
