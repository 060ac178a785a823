//! HTTP client for the shortening/analytics API
//!
//! Status codes map onto the error taxonomy at this boundary: 409 is an
//! alias conflict, 404 an unknown code, 5xx a server/limit failure, any
//! other 4xx a validation rejection. Transport failures never carry a
//! status and surface as `Network`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use crate::errors::{LinkdeckError, Result};

use super::models::{ShortenRequest, ShortenResponse, StatsResponse, UrlItem};

/// Operations the remote service exposes.
///
/// Workflows depend on this trait rather than on the HTTP implementation
/// so they can be exercised against an in-memory fake.
#[async_trait]
pub trait ShortenerApi: Send + Sync {
    async fn create_short_link(&self, req: &ShortenRequest) -> Result<ShortenResponse>;
    async fn list_links(&self) -> Result<Vec<UrlItem>>;
    async fn delete_link(&self, code: &str) -> Result<()>;
    async fn fetch_stats(&self, code: &str) -> Result<StatsResponse>;
}

/// `reqwest`-backed production client.
pub struct HttpApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpApiClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| LinkdeckError::config(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Map a non-success response to the error taxonomy, using the body text
/// as the detail message when the backend provides one.
fn error_for_status(status: StatusCode, body: String) -> LinkdeckError {
    let detail = if body.is_empty() {
        status.to_string()
    } else {
        body
    };
    match status {
        StatusCode::CONFLICT => LinkdeckError::conflict(detail),
        s if s.is_server_error() => LinkdeckError::server(detail),
        _ => LinkdeckError::validation(detail),
    }
}

/// Variant for operations addressing an existing code (delete, stats),
/// where 404 means that code is unknown. On create/list a 404 is just a
/// rejected request.
fn error_for_code_status(status: StatusCode, body: String) -> LinkdeckError {
    if status == StatusCode::NOT_FOUND {
        let detail = if body.is_empty() {
            status.to_string()
        } else {
            body
        };
        return LinkdeckError::not_found(detail);
    }
    error_for_status(status, body)
}

#[async_trait]
impl ShortenerApi for HttpApiClient {
    async fn create_short_link(&self, req: &ShortenRequest) -> Result<ShortenResponse> {
        debug!("POST /urls alias={:?}", req.custom_alias);
        let resp = self.http.post(self.url("/urls")).json(req).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(error_for_status(status, resp.text().await.unwrap_or_default()));
        }
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(Into::into)
    }

    async fn list_links(&self) -> Result<Vec<UrlItem>> {
        debug!("GET /urls");
        let resp = self.http.get(self.url("/urls")).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(error_for_status(status, resp.text().await.unwrap_or_default()));
        }
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(Into::into)
    }

    async fn delete_link(&self, code: &str) -> Result<()> {
        debug!("DELETE /urls/{}", code);
        let resp = self
            .http
            .delete(self.url(&format!("/urls/{}", code)))
            .send()
            .await?;
        let status = resp.status();
        // Any 2xx is success, including 204 No Content
        if !status.is_success() {
            return Err(error_for_code_status(
                status,
                resp.text().await.unwrap_or_default(),
            ));
        }
        Ok(())
    }

    async fn fetch_stats(&self, code: &str) -> Result<StatsResponse> {
        debug!("GET /urls/{}/stats", code);
        let resp = self
            .http
            .get(self.url(&format!("/urls/{}/stats", code)))
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(error_for_code_status(
                status,
                resp.text().await.unwrap_or_default(),
            ));
        }
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(Into::into)
    }
}
