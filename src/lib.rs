//! Linkdeck - a terminal dashboard client for a URL-shortening service
//!
//! This library provides the client-side data orchestration for a remote
//! shortening/analytics backend, plus the terminal interface built on top.
//!
//! # Architecture
//! - `api`: typed request/response boundary to the remote service
//! - `analytics`: day-bucketed click series and summary metrics
//! - `clipboard`: best-effort copy-to-clipboard with fallback
//! - `config`: configuration management
//! - `theme`: persisted dark/light preference and palettes
//! - `tui`: terminal interface (state, event handling, rendering)

pub mod analytics;
pub mod api;
pub mod clipboard;
pub mod config;
pub mod errors;
pub mod logging;
pub mod theme;
pub mod tui;
pub mod utils;
