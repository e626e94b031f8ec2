#![cfg(not(feature = "hydrate"))]

use localstate::todo::{TodoAction, TodoList};
use localstate::{HydrationPhase, PersistedStore};

use super::*;

#[test]
fn browser_storage_is_unavailable_without_hydrate() {
    assert!(!BrowserStorage.is_available());
    assert!(matches!(BrowserStorage.get_item("k"), Err(StoreError::Unavailable)));
}

#[test]
fn draft_helpers_degrade_to_none() {
    save_json("draft", &"hello");
    assert_eq!(load_json::<String>("draft"), None);
    clear_json("draft");
}

#[test]
fn store_on_server_is_ready_with_default() {
    let mut store = PersistedStore::open("personal_todo_tasks_v1", TodoList::default(), BrowserStorage);
    assert_eq!(store.phase(), HydrationPhase::Ready);
    let applied = store
        .dispatch(TodoAction::Add { title: "x".to_owned(), created_at: "2024-01-01T00:00:00Z".to_owned() })
        .expect("ready");
    assert!(applied);
}

#[test]
fn classify_detects_quota_errors() {
    let err = classify_js_error("k", 12, "JsValue(QuotaExceededError: storage full)");
    assert!(matches!(err, StoreError::QuotaExceeded { bytes: 12, .. }));
    let err = classify_js_error("k", 0, "JsValue(SecurityError)");
    assert!(matches!(err, StoreError::Backend(_)));
}
