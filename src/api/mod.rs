//! Typed boundary to the remote shortening/analytics service
//!
//! All entities are owned by the backend; the client holds transient,
//! request-scoped copies and never writes back locally. Any mutation is
//! followed by a full re-fetch so the view cannot diverge from server state.

mod client;
mod models;

pub use client::{HttpApiClient, ShortenerApi};
pub use models::{Click, ShortenRequest, ShortenResponse, StatsResponse, UrlItem};
