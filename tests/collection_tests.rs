//! Link collection integration tests
//!
//! Covers loading, the pure filter view, and the delete-then-refetch
//! contract: no optimistic removal, exactly one re-fetch per confirmed
//! delete, and untouched local state on failure.

mod support;

use linkdeck::errors::LinkdeckError;
use linkdeck::tui::app::{App, LoadState};

use support::{ApiCall, FakeApi, RecordingClipboard, test_config};

fn new_app(api: &FakeApi, clipboard: &RecordingClipboard, dir: &tempfile::TempDir) -> App {
    App::new(api.boxed(), clipboard.boxed(), &test_config(dir))
}

#[tokio::test]
async fn refresh_replaces_collection() {
    let dir = tempfile::tempdir().unwrap();
    let api = FakeApi::new();
    api.push_item("abc", "https://one.example.com");
    api.push_item("def", "https://two.example.com");
    let clipboard = RecordingClipboard::new();
    let mut app = new_app(&api, &clipboard, &dir);

    app.refresh_links().await;

    assert_eq!(app.load_state, LoadState::Loaded);
    assert_eq!(app.items.len(), 2);
}

#[tokio::test]
async fn failed_refresh_keeps_prior_collection() {
    let dir = tempfile::tempdir().unwrap();
    let api = FakeApi::new();
    api.push_item("abc", "https://one.example.com");
    let clipboard = RecordingClipboard::new();
    let mut app = new_app(&api, &clipboard, &dir);

    app.refresh_links().await;
    assert_eq!(app.items.len(), 1);

    api.set_list_error(LinkdeckError::network("connection refused"));
    app.refresh_links().await;

    assert!(matches!(app.load_state, LoadState::Failed(_)));
    assert_eq!(app.items.len(), 1, "failed load must not clear the list");
    assert!(!app.error_message.is_empty());
}

#[tokio::test]
async fn filter_narrows_visible_items_without_mutating_source() {
    let dir = tempfile::tempdir().unwrap();
    let api = FakeApi::new();
    api.push_item("promo", "https://example.com/sale");
    api.push_item("docs", "https://example.com/docs");
    api.push_item("blog", "https://blog.example.com/promo-post");
    let clipboard = RecordingClipboard::new();
    let mut app = new_app(&api, &clipboard, &dir);
    app.refresh_links().await;

    app.filter_input = "PROMO".to_string();
    assert_eq!(app.visible_count(), 2, "matches code or URL, any case");
    assert_eq!(app.items.len(), 3, "source collection untouched");

    app.clear_filter();
    assert_eq!(app.visible_count(), 3);
}

#[tokio::test]
async fn selection_follows_the_filtered_view() {
    let dir = tempfile::tempdir().unwrap();
    let api = FakeApi::new();
    api.push_item("aaa", "https://one.example.com");
    api.push_item("bbb", "https://two.example.com");
    api.push_item("ccc", "https://three.example.com");
    let clipboard = RecordingClipboard::new();
    let mut app = new_app(&api, &clipboard, &dir);
    app.refresh_links().await;

    app.move_selection_down();
    app.move_selection_down();
    assert_eq!(app.get_selected_link().unwrap().code, "ccc");

    // Narrowing the view clamps the selection into range
    app.filter_input = "aaa".to_string();
    app.clamp_selection();
    assert_eq!(app.get_selected_link().unwrap().code, "aaa");
}

#[tokio::test]
async fn confirmed_delete_refetches_exactly_once() {
    let dir = tempfile::tempdir().unwrap();
    let api = FakeApi::new();
    api.push_item("abc", "https://one.example.com");
    api.push_item("def", "https://two.example.com");
    let clipboard = RecordingClipboard::new();
    let mut app = new_app(&api, &clipboard, &dir);
    app.refresh_links().await;

    app.delete_selected_link().await;

    assert_eq!(
        api.count_calls(|c| matches!(c, ApiCall::Delete(code) if code == "abc")),
        1
    );
    // One initial load plus exactly one post-delete re-fetch
    assert_eq!(api.count_calls(|c| matches!(c, ApiCall::List)), 2);
    assert_eq!(app.items.len(), 1);
    assert_eq!(app.items[0].code, "def");
    assert!(app.status_message.contains("abc"));
}

#[tokio::test]
async fn delete_happens_before_the_refetch() {
    let dir = tempfile::tempdir().unwrap();
    let api = FakeApi::new();
    api.push_item("abc", "https://one.example.com");
    let clipboard = RecordingClipboard::new();
    let mut app = new_app(&api, &clipboard, &dir);
    app.refresh_links().await;

    app.delete_selected_link().await;

    let calls = api.calls();
    let delete_pos = calls
        .iter()
        .position(|c| matches!(c, ApiCall::Delete(_)))
        .unwrap();
    let last_list_pos = calls
        .iter()
        .rposition(|c| matches!(c, ApiCall::List))
        .unwrap();
    assert!(delete_pos < last_list_pos, "reload starts after the delete");
}

#[tokio::test]
async fn failed_delete_leaves_collection_and_skips_refetch() {
    let dir = tempfile::tempdir().unwrap();
    let api = FakeApi::new();
    api.push_item("abc", "https://one.example.com");
    let clipboard = RecordingClipboard::new();
    let mut app = new_app(&api, &clipboard, &dir);
    app.refresh_links().await;

    api.set_delete_error(LinkdeckError::not_found("already gone"));
    app.delete_selected_link().await;

    assert_eq!(app.items.len(), 1, "no optimistic removal");
    // Only the initial load; failure must not trigger a re-fetch
    assert_eq!(api.count_calls(|c| matches!(c, ApiCall::List)), 1);
    assert!(!app.error_message.is_empty());
}

#[tokio::test]
async fn delete_with_empty_collection_is_a_noop() {
    let dir = tempfile::tempdir().unwrap();
    let api = FakeApi::new();
    let clipboard = RecordingClipboard::new();
    let mut app = new_app(&api, &clipboard, &dir);
    app.refresh_links().await;

    app.delete_selected_link().await;

    assert_eq!(api.count_calls(|c| matches!(c, ApiCall::Delete(_))), 0);
}

#[tokio::test]
async fn copy_selected_short_url_uses_display_host() {
    let dir = tempfile::tempdir().unwrap();
    let api = FakeApi::new();
    api.push_item("abc", "https://one.example.com");
    let clipboard = RecordingClipboard::new();
    let mut app = new_app(&api, &clipboard, &dir);
    app.refresh_links().await;

    app.copy_selected_short_url();

    assert_eq!(clipboard.copies(), vec![format!("{}/abc", support::SHORT_BASE)]);
}
