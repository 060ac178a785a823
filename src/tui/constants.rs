//! TUI constants

/// Hard cap on custom alias length, enforced at the input boundary.
pub const MAX_ALIAS_LENGTH: usize = 16;

/// User agents longer than this are truncated for display.
pub const USER_AGENT_TRUNCATE: usize = 100;

/// Width of the daily chart bars.
pub const CHART_BAR_WIDTH: u16 = 7;
