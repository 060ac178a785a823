//! Shorten form state
//!
//! Holds the inputs of the shorten workflow and its submission state
//! machine: `Idle → Validating → Submitting → {Success | Failed} → Idle`.

use crate::api::{ShortenRequest, ShortenResponse};
use crate::errors::{LinkdeckError, Result};
use crate::tui::constants::MAX_ALIAS_LENGTH;
use crate::utils::parse_expiry_date;
use crate::utils::url_validator::validate_url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditingField {
    #[default]
    OriginalUrl,
    CustomAlias,
    ExpiresAt,
}

impl EditingField {
    const ALL: [Self; 3] = [Self::OriginalUrl, Self::CustomAlias, Self::ExpiresAt];

    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|x| x == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn display_title(&self) -> &'static str {
        match self {
            Self::OriginalUrl => "Original URL",
            Self::CustomAlias => "Custom Alias",
            Self::ExpiresAt => "Expires At",
        }
    }
}

/// Submission state machine. `Submitting` is entered at most once at a
/// time per form: re-entrant submits are rejected while pending.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success(ShortenResponse),
    Failed(String),
}

#[derive(Debug, Default)]
pub struct ShortenForm {
    pub original_url: String,
    pub custom_alias: String,
    /// Calendar date input (`YYYY-MM-DD`); empty lets the backend default apply.
    pub expires_at: String,
    pub currently_editing: Option<EditingField>,
    pub submit_state: SubmitState,
    /// Whether the short URL of the last success reached the clipboard.
    pub copied: bool,
}

impl ShortenForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.original_url.clear();
        self.custom_alias.clear();
        self.expires_at.clear();
        self.currently_editing = None;
        self.submit_state = SubmitState::Idle;
        self.copied = false;
    }

    pub fn toggle_field(&mut self) {
        self.currently_editing = Some(match &self.currently_editing {
            Some(field) => field.next(),
            None => EditingField::default(),
        });
    }

    /// Append a character to the active field. The alias cap is enforced
    /// here, at the input boundary, not as display truncation.
    pub fn push_char(&mut self, c: char) {
        match self.currently_editing {
            Some(EditingField::OriginalUrl) => self.original_url.push(c),
            Some(EditingField::CustomAlias) => {
                if self.custom_alias.chars().count() < MAX_ALIAS_LENGTH {
                    self.custom_alias.push(c);
                }
            }
            Some(EditingField::ExpiresAt) => self.expires_at.push(c),
            None => {}
        }
    }

    pub fn pop_char(&mut self) {
        match self.currently_editing {
            Some(EditingField::OriginalUrl) => {
                self.original_url.pop();
            }
            Some(EditingField::CustomAlias) => {
                self.custom_alias.pop();
            }
            Some(EditingField::ExpiresAt) => {
                self.expires_at.pop();
            }
            None => {}
        }
    }

    /// Inline validation hint while the URL is being typed. Empty input
    /// is not an error yet; submission still runs the same check.
    pub fn url_error(&self) -> Option<String> {
        let url = self.original_url.trim();
        if url.is_empty() {
            return None;
        }
        validate_url(url).err().map(|e| e.to_string())
    }

    /// Derived preview of the short URL while an alias is being typed.
    /// Display only; never sent to the backend as an availability check.
    pub fn alias_preview(&self, short_base: &str) -> Option<String> {
        let alias = self.custom_alias.trim();
        if alias.is_empty() {
            None
        } else {
            Some(format!("{}/{}", short_base.trim_end_matches('/'), alias))
        }
    }

    /// Validate the inputs and build the outgoing request.
    ///
    /// Failing here means no network call is made: an unparseable URL or
    /// a non-http(s) scheme yields `InvalidUrl`, a bad date `DateParse`.
    pub fn build_request(&self) -> Result<ShortenRequest> {
        validate_url(&self.original_url)
            .map_err(|e| LinkdeckError::invalid_url(e.to_string()))?;

        let alias = self.custom_alias.trim();
        let custom_alias = if alias.is_empty() {
            None
        } else {
            // push_char already caps the input; cap again so the request
            // can never carry more than the backend accepts
            Some(alias.chars().take(MAX_ALIAS_LENGTH).collect())
        };

        let expires_at = if self.expires_at.trim().is_empty() {
            None
        } else {
            Some(parse_expiry_date(&self.expires_at)?)
        };

        Ok(ShortenRequest {
            original_url: self.original_url.trim().to_string(),
            custom_alias,
            expires_at,
        })
    }
}
