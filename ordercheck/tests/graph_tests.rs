use ordercheck::{ParsedLog, RequestId, SuccessorGraph};

fn log(name: &str, requests: &[&str]) -> ParsedLog {
    ParsedLog {
        source_name: name.to_string(),
        requests: requests.iter().map(|r| RequestId::from(*r)).collect(),
    }
}

fn successor_names<'a>(graph: &'a SuccessorGraph, id: &str) -> Vec<&'a str> {
    graph
        .successors(&RequestId::from(id))
        .iter()
        .map(|r| r.as_str())
        .collect()
}

#[test_log::test]
fn test_merges_adjacencies_and_dedups_edges() {
    // Two logs share the 2->3 ordering and one continues 2->4 instead;
    // the repeated 2->3 edge is recorded once.
    let logs = [
        log("g1_s0.log", &["1", "2", "3", "4"]),
        log("g2_s0.log", &["1", "2", "4", "6"]),
        log("g3_s0.log", &["1", "2", "3", "4"]),
    ];
    let graph = SuccessorGraph::from_logs(&logs);

    assert_eq!(successor_names(&graph, "1"), vec!["2"]);
    assert_eq!(successor_names(&graph, "2"), vec!["3", "4"]);
    assert_eq!(successor_names(&graph, "3"), vec!["4"]);
    assert_eq!(successor_names(&graph, "4"), vec!["6"]);
}

#[test_log::test]
fn test_trailing_ids_become_keys_with_no_successors() {
    let logs = [
        log("g1_s0.log", &["1", "2", "3", "4"]),
        log("g2_s0.log", &["1", "2", "4", "6"]),
    ];
    let graph = SuccessorGraph::from_logs(&logs);

    // 6 only ever appears last, but it is still a node of the graph.
    assert!(graph.contains(&RequestId::from("6")));
    assert!(successor_names(&graph, "6").is_empty());
    assert_eq!(graph.len(), 5);
}

#[test_log::test]
fn test_nodes_iterate_in_first_insertion_order() {
    let logs = [log("g1_s0.log", &["b", "a"]), log("g2_s0.log", &["c", "a"])];
    let graph = SuccessorGraph::from_logs(&logs);

    let order: Vec<&str> = graph.nodes().map(|r| r.as_str()).collect();
    assert_eq!(order, vec!["b", "a", "c"]);
}

#[test_log::test]
fn test_single_element_log() {
    let graph = SuccessorGraph::from_logs(&[log("g1_s0.log", &["only"])]);
    assert_eq!(graph.len(), 1);
    assert!(successor_names(&graph, "only").is_empty());
}

#[test_log::test]
fn test_empty_logs_build_an_empty_graph() {
    let graph = SuccessorGraph::from_logs(&[log("g1_s0.log", &[])]);
    assert!(graph.is_empty());
    assert_eq!(graph.nodes().count(), 0);
}

#[test_log::test]
fn test_duplicate_adjacency_within_one_log_dedups_too() {
    let graph = SuccessorGraph::from_logs(&[log("g1_s0.log", &["a", "b", "a", "b"])]);
    assert_eq!(successor_names(&graph, "a"), vec!["b"]);
    assert_eq!(successor_names(&graph, "b"), vec!["a"]);
    assert_eq!(graph.len(), 2);
}

#[test_log::test]
fn test_unknown_id_has_no_successors() {
    let graph = SuccessorGraph::from_logs(&[log("g1_s0.log", &["a", "b"])]);
    assert!(graph.successors(&RequestId::from("zzz")).is_empty());
    assert!(!graph.contains(&RequestId::from("zzz")));
}
