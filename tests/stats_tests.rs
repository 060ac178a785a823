//! Stats screen integration tests
//!
//! The aggregation itself is covered by unit tests; these verify the
//! fetch-derive-display flow and that reloads recompute the series.

mod support;

use linkdeck::errors::LinkdeckError;
use linkdeck::tui::app::{App, CurrentScreen};

use support::{FakeApi, RecordingClipboard, stats_response, test_config};

fn new_app(api: &FakeApi, clipboard: &RecordingClipboard, dir: &tempfile::TempDir) -> App {
    App::new(api.boxed(), clipboard.boxed(), &test_config(dir))
}

#[tokio::test]
async fn opening_stats_derives_the_daily_series() {
    let dir = tempfile::tempdir().unwrap();
    let api = FakeApi::new();
    api.push_item("abc", "https://example.com/page");
    api.set_stats(stats_response(
        "abc",
        120,
        &[
            "2024-01-02T01:00:00Z",
            "2024-01-01T22:00:00Z",
            "2024-01-01T09:00:00Z",
        ],
    ));
    let clipboard = RecordingClipboard::new();
    let mut app = new_app(&api, &clipboard, &dir);
    app.refresh_links().await;

    app.open_stats_for_selected().await;

    assert_eq!(app.current_screen, CurrentScreen::Stats);
    let stats = app.stats.as_ref().unwrap();
    assert_eq!(stats.data.total_clicks, 120);
    // Total reflects lifetime clicks; the series only the recent window
    assert_eq!(stats.data.last_clicks.len(), 3);
    let total_in_series: u64 = stats.series.iter().map(|d| d.count).sum();
    assert_eq!(total_in_series, 3);
    // Ascending day order
    let days: Vec<&str> = stats.series.iter().map(|d| d.day.as_str()).collect();
    let mut sorted = days.clone();
    sorted.sort();
    assert_eq!(days, sorted);
}

#[tokio::test]
async fn stats_failure_stays_on_main_screen() {
    let dir = tempfile::tempdir().unwrap();
    let api = FakeApi::new();
    api.push_item("abc", "https://example.com/page");
    // No stats configured: the fake answers NotFound
    let clipboard = RecordingClipboard::new();
    let mut app = new_app(&api, &clipboard, &dir);
    app.refresh_links().await;

    app.open_stats_for_selected().await;

    assert_eq!(app.current_screen, CurrentScreen::Main);
    assert!(app.stats.is_none());
    assert!(!app.error_message.is_empty());
}

#[tokio::test]
async fn reload_recomputes_the_series() {
    let dir = tempfile::tempdir().unwrap();
    let api = FakeApi::new();
    api.push_item("abc", "https://example.com/page");
    api.set_stats(stats_response("abc", 1, &["2024-01-01T09:00:00Z"]));
    let clipboard = RecordingClipboard::new();
    let mut app = new_app(&api, &clipboard, &dir);
    app.refresh_links().await;
    app.open_stats_for_selected().await;
    assert_eq!(app.stats.as_ref().unwrap().series.len(), 1);

    api.set_stats(stats_response(
        "abc",
        3,
        &[
            "2024-01-03T09:00:00Z",
            "2024-01-02T09:00:00Z",
            "2024-01-01T09:00:00Z",
        ],
    ));
    app.reload_stats().await;

    let stats = app.stats.as_ref().unwrap();
    assert_eq!(stats.data.total_clicks, 3);
    assert_eq!(stats.series.len(), 3);
}

#[tokio::test]
async fn reload_failure_keeps_previous_stats() {
    let dir = tempfile::tempdir().unwrap();
    let api = FakeApi::new();
    api.push_item("abc", "https://example.com/page");
    api.set_stats(stats_response("abc", 5, &["2024-01-01T09:00:00Z"]));
    let clipboard = RecordingClipboard::new();
    let mut app = new_app(&api, &clipboard, &dir);
    app.refresh_links().await;
    app.open_stats_for_selected().await;

    api.set_stats_error(LinkdeckError::network("connection reset"));
    app.reload_stats().await;

    let stats = app.stats.as_ref().unwrap();
    assert_eq!(stats.data.total_clicks, 5, "previous stats stay on screen");
    assert!(!app.error_message.is_empty());
}
