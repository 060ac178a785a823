//! App state definition and basic state management

mod form;
mod link_operations;
mod navigation;

pub use form::{EditingField, ShortenForm, SubmitState};

use crate::analytics::DayCount;
use crate::api::{ShortenerApi, StatsResponse, UrlItem};
use crate::clipboard::ClipboardSink;
use crate::config::Config;
use crate::theme::{Palette, Theme};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Main,
    Shorten,
    DeleteConfirm,
    Stats,
    Help,
    Exiting,
}

/// Collection load state. While `Loading`, the previous collection stays
/// visible; a failed load leaves it untouched and surfaces the error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    Failed(String),
}

/// Stats for a single code plus the series derived from its click window.
/// The series is recomputed whenever a new response arrives; between
/// responses it is reused as-is.
pub struct StatsView {
    pub data: StatsResponse,
    pub series: Vec<DayCount>,
}

pub struct App {
    pub api: Box<dyn ShortenerApi>,
    pub clipboard: Box<dyn ClipboardSink>,

    // Link collection
    pub items: Vec<UrlItem>,
    pub load_state: LoadState,
    pub filter_input: String,
    pub inline_filter_mode: bool,
    pub selected_index: usize,

    // Screens
    pub current_screen: CurrentScreen,
    pub form: ShortenForm,
    pub stats: Option<StatsView>,

    // Messages
    pub status_message: String,
    pub error_message: String,

    // Display settings
    pub short_base: String,
    pub url_truncate: usize,
    pub theme: Theme,
    theme_file: String,
}

impl App {
    pub fn new(api: Box<dyn ShortenerApi>, clipboard: Box<dyn ClipboardSink>, config: &Config) -> App {
        App {
            api,
            clipboard,
            items: Vec::new(),
            load_state: LoadState::Loading,
            filter_input: String::new(),
            inline_filter_mode: false,
            selected_index: 0,
            current_screen: CurrentScreen::Main,
            form: ShortenForm::new(),
            stats: None,
            status_message: String::new(),
            error_message: String::new(),
            short_base: config.api.short_base.clone(),
            url_truncate: config.display.url_truncate,
            theme: Theme::load(&config.display.theme_file),
            theme_file: config.display.theme_file.clone(),
        }
    }

    pub fn palette(&self) -> &'static Palette {
        self.theme.palette()
    }

    /// Flip the dark/light preference and persist it immediately.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        if let Err(e) = self.theme.save(&self.theme_file) {
            warn!("failed to persist theme preference: {}", e);
        }
        self.set_status(format!("Theme: {}", self.theme.label()));
    }

    /// Links currently visible, after the filter is applied.
    pub fn visible_items(&self) -> Vec<&UrlItem> {
        filter_links(&self.items, &self.filter_input)
    }

    pub fn visible_count(&self) -> usize {
        self.visible_items().len()
    }

    pub fn get_selected_link(&self) -> Option<&UrlItem> {
        self.visible_items().get(self.selected_index).copied()
    }

    /// Keep the selection inside the visible range after the collection
    /// or the filter changed.
    pub fn clamp_selection(&mut self) {
        let count = self.visible_count();
        if count == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= count {
            self.selected_index = count - 1;
        }
    }

    pub fn clear_filter(&mut self) {
        self.filter_input.clear();
        self.inline_filter_mode = false;
        self.clamp_selection();
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = message;
        self.error_message.clear();
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = message;
        self.status_message.clear();
    }

    /// Copy the selected link's short URL, best effort.
    pub fn copy_selected_short_url(&mut self) {
        let Some(link) = self.get_selected_link() else {
            return;
        };
        let short_url = link.short_url(&self.short_base);
        if self.clipboard.copy(&short_url) {
            self.set_status(format!("Copied: {}", short_url));
        }
    }
}

/// Case-insensitive substring filter over code OR original URL.
///
/// Pure: never mutates the source collection; an empty query yields the
/// identity view.
pub fn filter_links<'a>(items: &'a [UrlItem], query: &str) -> Vec<&'a UrlItem> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|it| {
            it.code.to_lowercase().contains(&q) || it.original_url.to_lowercase().contains(&q)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn item(code: &str, url: &str) -> UrlItem {
        UrlItem {
            code: code.to_string(),
            original_url: url.to_string(),
            created_at: Utc::now(),
            expires_at: None,
            total_clicks: 0,
        }
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let items = vec![item("abc", "https://a.com"), item("def", "https://b.com")];
        let filtered = filter_links(&items, "");
        assert_eq!(filtered.len(), items.len());
        let filtered = filter_links(&items, "   ");
        assert_eq!(filtered.len(), items.len());
    }

    #[test]
    fn test_filter_matches_code_or_url() {
        let items = vec![
            item("promo", "https://example.com/sale"),
            item("abc123", "https://other.org/promo-page"),
            item("xyz", "https://nothing.net"),
        ];
        let filtered = filter_links(&items, "promo");
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|it| {
            it.code.to_lowercase().contains("promo")
                || it.original_url.to_lowercase().contains("promo")
        }));
    }

    #[test]
    fn test_filter_case_insensitive() {
        let items = vec![item("PROMO", "https://example.com")];
        assert_eq!(filter_links(&items, "promo").len(), 1);
        assert_eq!(filter_links(&items, "PrOmO").len(), 1);
        let items = vec![item("x", "https://EXAMPLE.com/Path")];
        assert_eq!(filter_links(&items, "example").len(), 1);
    }

    #[test]
    fn test_filter_result_is_subset() {
        let items = vec![
            item("a", "https://one.com"),
            item("b", "https://two.com"),
            item("c", "https://three.com"),
        ];
        let filtered = filter_links(&items, "t");
        assert!(filtered.len() <= items.len());
        for it in &filtered {
            assert!(items.iter().any(|src| src.code == it.code));
        }
        // Source untouched
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_filter_no_match_is_empty() {
        let items = vec![item("abc", "https://a.com")];
        assert!(filter_links(&items, "zzz").is_empty());
    }
}
