//! Expiry-date normalization
//!
//! Users pick a calendar date; the backend expects an absolute instant.
//! The date is normalized to the end of that day in the local zone before
//! conversion, so a link "expiring on the 15th" stays usable through the
//! whole 15th.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

use crate::errors::{LinkdeckError, Result};

/// Parse a `YYYY-MM-DD` date and normalize it to the end of that day in
/// the local zone, as a UTC instant.
pub fn parse_expiry_date(input: &str) -> Result<DateTime<Utc>> {
    parse_expiry_date_in(input, &Local)
}

/// Zone-explicit variant of [`parse_expiry_date`].
pub fn parse_expiry_date_in<Tz: TimeZone>(input: &str, tz: &Tz) -> Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|e| LinkdeckError::date_parse(format!("'{}': {}", input.trim(), e)))?;

    let end_of_day = date
        .and_hms_milli_opt(23, 59, 59, 999)
        .ok_or_else(|| LinkdeckError::date_parse(format!("'{}' has no end of day", input)))?;

    // earliest() picks the first valid instant around DST transitions
    tz.from_local_datetime(&end_of_day)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| {
            LinkdeckError::date_parse(format!("'{}' is not a valid local time", input))
        })
}
