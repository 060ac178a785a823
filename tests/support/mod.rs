//! Shared test doubles: an in-memory API fake that records every call,
//! and a clipboard that records copies instead of touching the system.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use linkdeck::api::{
    Click, ShortenRequest, ShortenResponse, ShortenerApi, StatsResponse, UrlItem,
};
use linkdeck::clipboard::ClipboardSink;
use linkdeck::config::Config;
use linkdeck::errors::{LinkdeckError, Result};

pub const SHORT_BASE: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    Create(ShortenRequest),
    List,
    Delete(String),
    Stats(String),
}

#[derive(Default)]
struct FakeState {
    calls: Mutex<Vec<ApiCall>>,
    items: Mutex<Vec<UrlItem>>,
    fail_create: Mutex<Option<LinkdeckError>>,
    fail_list: Mutex<Option<LinkdeckError>>,
    fail_delete: Mutex<Option<LinkdeckError>>,
    fail_stats: Mutex<Option<LinkdeckError>>,
    stats: Mutex<Option<StatsResponse>>,
}

/// In-memory stand-in for the remote service. Cloning shares state, so a
/// test can keep a handle while the app owns a boxed clone.
#[derive(Clone, Default)]
pub struct FakeApi {
    state: Arc<FakeState>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn boxed(&self) -> Box<dyn ShortenerApi> {
        Box::new(self.clone())
    }

    pub fn push_item(&self, code: &str, original_url: &str) {
        self.state.items.lock().unwrap().push(UrlItem {
            code: code.to_string(),
            original_url: original_url.to_string(),
            created_at: Utc::now(),
            expires_at: None,
            total_clicks: 0,
        });
    }

    pub fn set_create_error(&self, err: LinkdeckError) {
        *self.state.fail_create.lock().unwrap() = Some(err);
    }

    pub fn set_list_error(&self, err: LinkdeckError) {
        *self.state.fail_list.lock().unwrap() = Some(err);
    }

    pub fn set_delete_error(&self, err: LinkdeckError) {
        *self.state.fail_delete.lock().unwrap() = Some(err);
    }

    pub fn set_stats_error(&self, err: LinkdeckError) {
        *self.state.fail_stats.lock().unwrap() = Some(err);
    }

    pub fn set_stats(&self, stats: StatsResponse) {
        *self.state.stats.lock().unwrap() = Some(stats);
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.state.calls.lock().unwrap().clone()
    }

    pub fn count_calls(&self, pred: impl Fn(&ApiCall) -> bool) -> usize {
        self.calls().iter().filter(|c| pred(c)).count()
    }

    fn record(&self, call: ApiCall) {
        self.state.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ShortenerApi for FakeApi {
    async fn create_short_link(&self, req: &ShortenRequest) -> Result<ShortenResponse> {
        self.record(ApiCall::Create(req.clone()));
        if let Some(err) = self.state.fail_create.lock().unwrap().take() {
            return Err(err);
        }
        let code = req
            .custom_alias
            .clone()
            .unwrap_or_else(|| "gen123".to_string());
        self.state.items.lock().unwrap().push(UrlItem {
            code: code.clone(),
            original_url: req.original_url.clone(),
            created_at: Utc::now(),
            expires_at: req.expires_at,
            total_clicks: 0,
        });
        Ok(ShortenResponse {
            short_url: format!("{}/{}", SHORT_BASE, code),
            code,
            expires_at: req.expires_at,
        })
    }

    async fn list_links(&self) -> Result<Vec<UrlItem>> {
        self.record(ApiCall::List);
        if let Some(err) = self.state.fail_list.lock().unwrap().take() {
            return Err(err);
        }
        Ok(self.state.items.lock().unwrap().clone())
    }

    async fn delete_link(&self, code: &str) -> Result<()> {
        self.record(ApiCall::Delete(code.to_string()));
        if let Some(err) = self.state.fail_delete.lock().unwrap().take() {
            return Err(err);
        }
        self.state.items.lock().unwrap().retain(|it| it.code != code);
        Ok(())
    }

    async fn fetch_stats(&self, code: &str) -> Result<StatsResponse> {
        self.record(ApiCall::Stats(code.to_string()));
        if let Some(err) = self.state.fail_stats.lock().unwrap().take() {
            return Err(err);
        }
        match self.state.stats.lock().unwrap().clone() {
            Some(stats) => Ok(stats),
            None => Err(LinkdeckError::not_found(format!(
                "no stats for '{}'",
                code
            ))),
        }
    }
}

/// Clipboard that records instead of copying.
#[derive(Clone, Default)]
pub struct RecordingClipboard {
    copies: Arc<Mutex<Vec<String>>>,
}

impl RecordingClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn boxed(&self) -> Box<dyn ClipboardSink> {
        Box::new(self.clone())
    }

    pub fn copies(&self) -> Vec<String> {
        self.copies.lock().unwrap().clone()
    }
}

impl ClipboardSink for RecordingClipboard {
    fn copy(&mut self, text: &str) -> bool {
        self.copies.lock().unwrap().push(text.to_string());
        true
    }
}

pub fn stats_response(code: &str, total: u64, clicked_at: &[&str]) -> StatsResponse {
    StatsResponse {
        code: code.to_string(),
        original_url: "https://example.com/page".to_string(),
        created_at: Utc::now(),
        expires_at: None,
        total_clicks: total,
        last_clicks: clicked_at
            .iter()
            .map(|at| Click {
                clicked_at: at.parse().unwrap(),
                ip_address: None,
                user_agent: None,
            })
            .collect(),
    }
}

/// Config pointing the theme file at a throwaway location so tests never
/// touch a real preference file.
pub fn test_config(dir: &tempfile::TempDir) -> Config {
    let mut config = Config::default();
    config.display.theme_file = dir
        .path()
        .join("theme.toml")
        .to_string_lossy()
        .into_owned();
    config
}
