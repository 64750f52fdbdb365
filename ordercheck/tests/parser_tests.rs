use std::path::Path;

use ordercheck::test_harness::{milestone_line, noise_line, replica_log, uuid_like, write_file};
use ordercheck::{
    AnalysisConfig, InputError, Patterns, RequestId, extract_group_id, extract_requests,
    parse_log_file,
};

fn default_patterns() -> Patterns {
    AnalysisConfig::default().compile().unwrap()
}

#[test_log::test]
fn test_extracts_milestones_in_line_order() {
    let ids: Vec<String> = (1..=4).map(uuid_like).collect();
    let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
    let text = replica_log(2, 1, &refs);

    let requests = extract_requests(&text, &default_patterns());

    let expected: Vec<RequestId> = ids.iter().map(|id| RequestId::from(id.as_str())).collect();
    assert_eq!(requests, expected);
}

#[test_log::test]
fn test_noise_lines_are_skipped_silently() {
    let mut text = String::new();
    for message in [
        "Request has reached minimum receive count",
        "Response is cached",
        "Request is client request",
    ] {
        text.push_str(&noise_line(1, 0, message));
        text.push('\n');
    }

    let requests = extract_requests(&text, &default_patterns());
    assert!(requests.is_empty(), "noise produced ids: {:?}", requests);
}

#[test_log::test]
fn test_phrase_without_id_label_does_not_match() {
    // The completion phrase alone is not a milestone; the id label must
    // be on the same line.
    let text = noise_line(1, 0, "Request locally handled");
    assert!(extract_requests(&text, &default_patterns()).is_empty());
}

#[test_log::test]
fn test_id_without_phrase_does_not_match() {
    let id = uuid_like(7);
    let line = milestone_line(1, 0, &id).replace("Request locally handled", "Request forwarded");
    assert!(extract_requests(&line, &default_patterns()).is_empty());
}

#[test_log::test]
fn test_duplicate_ids_are_kept() {
    let id = uuid_like(9);
    let text = format!("{}\n{}\n", milestone_line(1, 0, &id), milestone_line(1, 0, &id));

    let requests = extract_requests(&text, &default_patterns());
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0], requests[1]);
}

#[test_log::test]
fn test_empty_input_yields_empty_sequence() {
    assert!(extract_requests("", &default_patterns()).is_empty());
}

#[test_log::test]
fn test_older_vocabulary_via_config_override() {
    // Earlier engine versions wrote a lowercase label and a flipped
    // phrase. The patterns are data, not code.
    let config = AnalysisConfig {
        milestone_label: "id".to_string(),
        milestone_phrase: "Request handled locally".to_string(),
        ..AnalysisConfig::default()
    };
    let patterns = config.compile().unwrap();

    let id = uuid_like(3);
    let line = format!(
        "2024-08-14T21:16:22.243746502 dev.agst.byzcast.replica.RequestHandler:111 INFO \
         id={id} source=REPLICA Request handled locally"
    );

    let requests = extract_requests(&line, &patterns);
    assert_eq!(requests, vec![RequestId(id)]);
}

#[test_log::test]
fn test_group_id_recovery_from_file_names() {
    let patterns = default_patterns();

    let group = extract_group_id("logs/g2_s1.log", &patterns);
    assert_eq!(group.map(|g| g.0), Some("g2".to_string()));

    let group = extract_group_id("g12_s0.log", &patterns);
    assert_eq!(group.map(|g| g.0), Some("g12".to_string()));

    assert!(extract_group_id("node0.log", &patterns).is_none());

    // Tokens in directory components do not count.
    assert!(extract_group_id("runs/g9/node0.log", &patterns).is_none());
}

#[test_log::test]
fn test_parse_log_file_reads_and_names() {
    let dir = tempfile::tempdir().unwrap();
    let id = uuid_like(1);
    let path = write_file(dir.path(), "g1_s0.log", &replica_log(1, 0, &[&id]));

    let parsed = parse_log_file(&path, &default_patterns()).unwrap();
    assert!(parsed.source_name.ends_with("g1_s0.log"));
    assert_eq!(parsed.requests, vec![RequestId(id)]);
}

#[test_log::test]
fn test_unreadable_file_is_an_input_error() {
    let missing = Path::new("/nonexistent/g1_s0.log");
    let err = parse_log_file(missing, &default_patterns()).unwrap_err();
    assert!(
        matches!(err, InputError::Io { .. }),
        "unexpected error: {:?}",
        err
    );
}
