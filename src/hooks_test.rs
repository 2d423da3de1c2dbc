use super::*;
use crate::model::ProgressResponse;

fn set(ids: &[&str]) -> CompletionSet {
    ids.iter().copied().collect()
}

fn server_error() -> ApiError {
    ApiError::Status {
        url: "http://localhost:8000/progress/guest/Space%20Pirates".into(),
        status: 500,
    }
}

/// Folds settled requests into a cache the way the hook does.
fn apply(cache: CompletionSet, alive: bool, result: Settled) -> CompletionSet {
    next_cache(alive, result).unwrap_or(cache)
}

#[test]
fn toggle_reply_replaces_whole_cache() {
    let resp: ProgressResponse =
        serde_json::from_str(r#"{"completed_node_ids": ["a", "b"]}"#).unwrap();
    let cache = apply(set(&["x", "y"]), true, Ok(resp.into()));
    assert_eq!(cache, set(&["a", "b"]));
    assert!(!cache.contains("x"));
}

#[test]
fn empty_reply_clears_cache() {
    assert_eq!(apply(set(&["a"]), true, Ok(set(&[]))), set(&[]));
}

#[test]
fn failed_request_leaves_cache_untouched() {
    assert_eq!(next_cache(true, Err(server_error())), None);
    assert_eq!(apply(set(&["a"]), true, Err(server_error())), set(&["a"]));
}

#[test]
fn late_failed_load_does_not_wipe_toggle_result() {
    // Slow initial load, toggle lands first, then the load fails.
    let cache = CompletionSet::default();
    let cache = apply(cache, true, Ok(set(&["a"])));
    let cache = apply(cache, true, Err(server_error()));
    assert_eq!(cache, set(&["a"]));
}

#[test]
fn reply_after_unmount_is_dropped() {
    assert_eq!(next_cache(false, Ok(set(&["a"]))), None);
    assert_eq!(next_cache(false, Err(server_error())), None);
}
