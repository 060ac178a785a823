//! Shared helpers: URL validation and expiry-date normalization

mod expiry;
pub mod url_validator;

pub use expiry::parse_expiry_date;
