//! Phase 3 tests: JSON graph files, demo graphs and the query engine.

use std::io::Cursor;

use tempfile::NamedTempFile;

use bfs_lab::demo;
use bfs_lab::engine::{QueryEngine, SearchParams, TraversalParams};
use bfs_lab::format::{GraphReader, GraphWriter};
use bfs_lab::graph::{is_valid_path, GraphBuilder};
use bfs_lab::types::BfsError;

const CHAPTER_JSON: &str = r#"{
    "you": ["alice", "bob", "claire"],
    "bob": ["anuj", "peggy"],
    "alice": ["peggy"],
    "claire": ["thom", "jonny"],
    "anuj": [],
    "peggy": [],
    "thom": [],
    "jonny": []
}"#;

// ==================== Reader Tests ====================

#[test]
fn test_read_chapter_graph() {
    let graph = GraphReader::from_str(CHAPTER_JSON).unwrap();
    assert_eq!(graph, demo::social_network());
}

#[test]
fn test_read_preserves_document_order() {
    let graph = GraphReader::from_str(r#"{"z": ["b", "a"], "a": [], "m": ["z"]}"#).unwrap();
    let order: Vec<&str> = graph.nodes().map(String::as_str).collect();
    assert_eq!(order, vec!["z", "a", "m"]);
    assert_eq!(graph.neighbors(&"z".to_string()), &["b", "a"]);
}

#[test]
fn test_read_from_reader() {
    let mut cursor = Cursor::new(CHAPTER_JSON.as_bytes());
    let graph = GraphReader::read_from(&mut cursor).unwrap();
    assert_eq!(graph.node_count(), 8);
    assert_eq!(graph.edge_count(), 8);
}

#[test]
fn test_read_rejects_non_object() {
    match GraphReader::from_str(r#"["you", "alice"]"#) {
        Err(BfsError::Json(_)) => {}
        other => panic!("Expected Json error, got {:?}", other.map(|g| g.node_count())),
    }
}

#[test]
fn test_read_rejects_non_string_neighbors() {
    assert!(matches!(
        GraphReader::from_str(r#"{"you": [1, 2]}"#),
        Err(BfsError::Json(_))
    ));
}

#[test]
fn test_read_rejects_blank_names() {
    assert!(matches!(
        GraphReader::from_str(r#"{"": ["a"]}"#),
        Err(BfsError::InvalidNode(_))
    ));
    match GraphReader::from_str(r#"{"you": ["alice", "  "]}"#) {
        Err(BfsError::InvalidNode(name)) => assert_eq!(name, "  "),
        other => panic!("Expected InvalidNode, got {:?}", other.map(|g| g.node_count())),
    }
}

#[test]
fn test_read_missing_file() {
    let tmp = NamedTempFile::new().unwrap();
    let path = tmp.path().to_path_buf();
    drop(tmp);
    assert!(matches!(
        GraphReader::read_from_file(&path),
        Err(BfsError::Io(_))
    ));
}

// ==================== Writer Tests ====================

#[test]
fn test_write_and_read_file() {
    let graph = demo::social_network();
    let tmp = NamedTempFile::new().unwrap();

    GraphWriter::new(true)
        .write_to_file(&graph, tmp.path())
        .unwrap();
    let loaded = GraphReader::read_from_file(tmp.path()).unwrap();

    assert_eq!(loaded, graph);
    let order: Vec<&String> = loaded.nodes().collect();
    assert_eq!(order[0], "you");
}

#[test]
fn test_compact_output() {
    let graph = GraphBuilder::new()
        .node("a".to_string(), vec!["b".to_string()])
        .leaf("b".to_string())
        .build();
    let s = GraphWriter::new(false).to_string(&graph).unwrap();
    assert_eq!(s, r#"{"a":["b"],"b":[]}"#);

    let mut buf = Vec::new();
    GraphWriter::new(false).write_to(&graph, &mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), format!("{}\n", s));
}

// ==================== Demo Graph Tests ====================

#[test]
fn test_demo_lookup() {
    for name in demo::DEMO_NAMES {
        assert!(demo::by_name(name).is_ok(), "demo {} missing", name);
    }
    assert!(matches!(
        demo::by_name("nope"),
        Err(BfsError::UnknownDemo(name)) if name == "nope"
    ));
}

#[test]
fn test_demo_shapes() {
    let social = demo::social_network();
    assert_eq!(social.node_count(), 8);
    assert_eq!(social.edge_count(), 8);

    let peggy = demo::peggy_network();
    assert_eq!(peggy.node_count(), 5);
    assert_eq!(peggy.edge_count(), 5);

    let disconnected = demo::disconnected();
    assert_eq!(disconnected.node_count(), 3);
    assert_eq!(disconnected.edge_count(), 1);

    assert_eq!(demo::mango_free_network().node_count(), 3);
}

// ==================== Query Engine Tests ====================

#[test]
fn test_engine_mango_search() {
    let graph = demo::social_network();
    let result = QueryEngine::new().search(&graph, SearchParams::mango_seller("you".to_string()));
    assert_eq!(result.start, "you");
    assert_eq!(result.found.as_deref(), Some("thom"));

    let lonely = demo::mango_free_network();
    let result = QueryEngine::new().search(&lonely, SearchParams::mango_seller("you".to_string()));
    assert_eq!(result.found, None);
}

#[test]
fn test_engine_custom_suffix() {
    let graph = demo::social_network();
    let result = QueryEngine::new().search(
        &graph,
        SearchParams {
            start: "you".to_string(),
            suffix: 'y',
        },
    );
    // peggy and jonny are both two hops away; peggy is discovered first.
    assert_eq!(result.found.as_deref(), Some("peggy"));
}

#[test]
fn test_engine_shortest_path() {
    let graph = demo::social_network();
    let qe = QueryEngine::new();

    let result = qe.shortest_path(&graph, "you".to_string(), "thom".to_string());
    assert_eq!(result.hops(), Some(2));
    let path = result.path.unwrap();
    assert!(is_valid_path(&graph, &path));

    let result = qe.shortest_path(&graph, "you".to_string(), "you".to_string());
    assert_eq!(result.hops(), Some(0));

    let disconnected = demo::disconnected();
    let result = qe.shortest_path(&disconnected, "a".to_string(), "c".to_string());
    assert_eq!(result.path, None);
    assert_eq!(result.hops(), None);
}

#[test]
fn test_engine_traverse() {
    let graph = demo::peggy_network();
    let result = QueryEngine::new().traverse(&graph, TraversalParams::from_start("you".to_string()));
    assert_eq!(result.order, vec!["you", "alice", "bob", "peggy", "anuj"]);
    assert_eq!(result.depth(&"anuj".to_string()), Some(2));

    let limited = QueryEngine::default().traverse(
        &graph,
        TraversalParams {
            start: "you".to_string(),
            max_depth: 1,
            max_results: 10,
        },
    );
    assert_eq!(limited.len(), 3);
}
