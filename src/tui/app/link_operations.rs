//! Remote operations: submit, reload, delete, stats
//!
//! All calls are awaited inline on the event loop, so a delete-then-reload
//! sequence is strictly ordered and a submit can never overlap itself.

use tracing::{info, warn};

use super::{App, CurrentScreen, LoadState, StatsView, SubmitState};
use crate::analytics::daily_series;

impl App {
    /// Fetch the full collection. A failed load surfaces the error and
    /// leaves the prior collection untouched; there is no partial merge.
    pub async fn refresh_links(&mut self) {
        self.load_state = LoadState::Loading;
        let result = self.api.list_links().await;
        match result {
            Ok(items) => {
                info!("loaded {} links", items.len());
                self.items = items;
                self.load_state = LoadState::Loaded;
                self.clamp_selection();
            }
            Err(e) => {
                warn!("list failed: {}", e);
                self.load_state = LoadState::Failed(e.format_simple());
                self.set_error(e.format_simple());
            }
        }
    }

    /// Run the shorten workflow: validate locally, submit, then copy the
    /// short URL best-effort and reload the collection.
    pub async fn submit_shorten(&mut self) {
        // Re-entrant submit is rejected while a request is pending
        if self.form.submit_state == SubmitState::Submitting {
            return;
        }

        self.form.submit_state = SubmitState::Validating;
        let req = match self.form.build_request() {
            Ok(req) => req,
            Err(e) => {
                // Resolved locally, no network call was made
                self.form.submit_state = SubmitState::Failed(e.user_message());
                return;
            }
        };

        self.form.submit_state = SubmitState::Submitting;
        let result = self.api.create_short_link(&req).await;
        match result {
            Ok(resp) => {
                info!("created short link {}", resp.code);
                self.form.copied = self.clipboard.copy(&resp.short_url);
                self.form.submit_state = SubmitState::Success(resp);
                self.refresh_links().await;
            }
            Err(e) => {
                warn!("shorten failed: {}", e);
                self.form.submit_state = SubmitState::Failed(e.user_message());
            }
        }
    }

    /// Delete the selected link. On success the collection is re-fetched
    /// in full (no optimistic removal); on failure local state is left
    /// alone and the error is surfaced.
    pub async fn delete_selected_link(&mut self) {
        let Some(link) = self.get_selected_link() else {
            self.set_error("No link selected".to_string());
            return;
        };
        let code = link.code.clone();

        let result = self.api.delete_link(&code).await;
        match result {
            Ok(()) => {
                info!("deleted {}", code);
                self.set_status(format!("Deleted '{}'", code));
                // Reload only begins after the delete resolved
                self.refresh_links().await;
            }
            Err(e) => {
                warn!("delete {} failed: {}", code, e);
                self.set_error(e.user_message());
            }
        }
    }

    /// Fetch stats for the selected link and derive its daily series.
    pub async fn open_stats_for_selected(&mut self) {
        let Some(link) = self.get_selected_link() else {
            return;
        };
        let code = link.code.clone();

        let result = self.api.fetch_stats(&code).await;
        match result {
            Ok(data) => {
                let series = daily_series(&data.last_clicks);
                self.stats = Some(StatsView { data, series });
                self.current_screen = CurrentScreen::Stats;
            }
            Err(e) => {
                warn!("stats for {} failed: {}", code, e);
                self.set_error(e.user_message());
            }
        }
    }

    /// Re-fetch the stats currently on screen.
    pub async fn reload_stats(&mut self) {
        let Some(code) = self.stats.as_ref().map(|s| s.data.code.clone()) else {
            return;
        };
        let result = self.api.fetch_stats(&code).await;
        match result {
            Ok(data) => {
                let series = daily_series(&data.last_clicks);
                self.stats = Some(StatsView { data, series });
            }
            Err(e) => self.set_error(e.user_message()),
        }
    }
}
