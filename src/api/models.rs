//! Request and response types of the REST/JSON contract
//!
//! Field names on the wire are camelCase; timestamps are RFC 3339 instants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST {base}/urls`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    pub original_url: String,
    /// User-chosen code; absent lets the backend assign one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_alias: Option<String>,
    /// Absent means the backend default applies (documented as 7 days).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub code: String,
    pub short_url: String,
    pub expires_at: Option<DateTime<Utc>>,
}

/// One row of `GET {base}/urls`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlItem {
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub total_clicks: u64,
}

impl UrlItem {
    /// Derived display URL; the backend never sends one per row.
    pub fn short_url(&self, short_base: &str) -> String {
        format!("{}/{}", short_base.trim_end_matches('/'), self.code)
    }

    /// Presentational only: never affects filtering or deletion eligibility.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => Utc::now() > expires_at,
            None => false,
        }
    }
}

/// One recorded visit through a short link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Click {
    pub clicked_at: DateTime<Utc>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

/// Response of `GET {base}/urls/{code}/stats`.
///
/// `last_clicks` is a bounded most-recent window, not the full history:
/// `total_clicks` may exceed `last_clicks.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub total_clicks: u64,
    #[serde(default)]
    pub last_clicks: Vec<Click>,
}
