use super::*;

fn node(id: &str, order: i64) -> LessonNode {
    LessonNode {
        id: id.to_owned(),
        title: format!("Lesson {id}"),
        summary: String::new(),
        content: String::new(),
        order,
        difficulty: None,
        kind: None,
    }
}

// =============================================================
// Wire format
// =============================================================

#[test]
fn paths_payload_decodes_with_optional_fields() {
    let raw = r#"[{
        "title": "Space Pirates",
        "description": "Sail the stars",
        "nodes": [
            {"id": "n1", "title": "Ahoy", "summary": "s", "content": "c", "order": 1, "type": "video"},
            {"id": "n0", "title": "Map", "summary": "s", "content": "c", "order": 0, "difficulty": "easy"}
        ]
    }]"#;
    let paths: Vec<LearningPath> = serde_json::from_str(raw).unwrap();
    assert_eq!(paths.len(), 1);
    let nodes = &paths[0].nodes;
    assert_eq!(nodes[0].category(), NodeCategory::Video);
    assert_eq!(nodes[0].difficulty, None);
    assert_eq!(nodes[1].difficulty.as_deref(), Some("easy"));
    assert_eq!(nodes[1].category(), NodeCategory::Lesson);
}

#[test]
fn progress_without_ids_is_empty() {
    let resp: ProgressResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(CompletionSet::from(resp).iter().count(), 0);
}

#[test]
fn toggle_request_uses_snake_case_keys() {
    let req = ToggleRequest {
        user_id: "guest".into(),
        path_title: "Space Pirates".into(),
        node_id: "n0".into(),
    };
    let v = serde_json::to_value(&req).unwrap();
    assert_eq!(
        v,
        serde_json::json!({"user_id": "guest", "path_title": "Space Pirates", "node_id": "n0"})
    );
}

// =============================================================
// Nodes and paths
// =============================================================

#[test]
fn body_falls_back_to_summary() {
    let mut n = node("a", 0);
    n.summary = "short".into();
    assert_eq!(n.body(), "short");
    n.content = "long".into();
    assert_eq!(n.body(), "long");
}

#[test]
fn quiz_kind_maps_to_quiz_category() {
    let mut n = node("a", 0);
    n.kind = Some("quiz".into());
    assert_eq!(n.category(), NodeCategory::Quiz);
    n.kind = Some("reading".into());
    assert_eq!(n.category(), NodeCategory::Lesson);
}

// =============================================================
// Catalog reducer
// =============================================================

#[test]
fn catalog_starts_loading_with_no_paths() {
    let catalog = Catalog::default();
    assert_eq!(catalog, Catalog::Loading);
    assert!(catalog.loaded().is_none());
}

#[test]
fn failed_catalog_exposes_no_paths_for_progress_fetches() {
    let catalog = Rc::new(Catalog::default())
        .reduce(CatalogAction::Failed(LOAD_FAILED_MESSAGE.to_owned()));
    assert!(matches!(&*catalog, Catalog::Failed(m) if m == LOAD_FAILED_MESSAGE));
    assert!(catalog.loaded().is_none());
}

#[test]
fn only_failed_or_empty_catalogs_carry_a_notice() {
    assert_eq!(Catalog::Loading.notice(), None);
    let failed = Catalog::Failed(LOAD_FAILED_MESSAGE.to_owned());
    assert_eq!(failed.notice(), Some(LOAD_FAILED_MESSAGE));
    let empty = Rc::new(Catalog::default()).reduce(CatalogAction::Loaded(vec![]));
    assert_eq!(empty.notice(), Some(NO_PATHS_MESSAGE));
    let one = LearningPath { title: "A".into(), description: String::new(), nodes: vec![] };
    let loaded = Rc::new(Catalog::default()).reduce(CatalogAction::Loaded(vec![one]));
    assert_eq!(loaded.notice(), None);
}

#[test]
fn loaded_catalog_keeps_backend_order() {
    let paths = vec![
        LearningPath { title: "B".into(), description: String::new(), nodes: vec![] },
        LearningPath { title: "A".into(), description: String::new(), nodes: vec![] },
    ];
    let catalog = Rc::new(Catalog::default()).reduce(CatalogAction::Loaded(paths));
    let titles: Vec<&str> = catalog
        .loaded()
        .map(|paths| paths.iter().map(|p| p.title.as_str()).collect())
        .unwrap_or_default();
    assert_eq!(titles, vec!["B", "A"]);
}
