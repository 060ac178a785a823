use std::fmt;

#[derive(Debug, Clone)]
pub enum LinkdeckError {
    /// Client-side pre-flight validation failed; never reaches the network.
    InvalidUrl(String),
    /// Alias collision reported by the backend (HTTP 409).
    Conflict(String),
    /// Backend internal error or size limit exceeded (HTTP 5xx).
    Server(String),
    /// Request rejected by the backend (other 4xx).
    Validation(String),
    /// Unknown code on delete/stats (HTTP 404).
    NotFound(String),
    /// Transport failure, no HTTP response received.
    Network(String),
    /// Malformed backend response body.
    Decode(String),
    /// Local configuration or state-file problem.
    Config(String),
    DateParse(String),
}

impl LinkdeckError {
    pub fn code(&self) -> &'static str {
        match self {
            LinkdeckError::InvalidUrl(_) => "E001",
            LinkdeckError::Conflict(_) => "E002",
            LinkdeckError::Server(_) => "E003",
            LinkdeckError::Validation(_) => "E004",
            LinkdeckError::NotFound(_) => "E005",
            LinkdeckError::Network(_) => "E006",
            LinkdeckError::Decode(_) => "E007",
            LinkdeckError::Config(_) => "E008",
            LinkdeckError::DateParse(_) => "E009",
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            LinkdeckError::InvalidUrl(_) => "Invalid URL",
            LinkdeckError::Conflict(_) => "Alias Conflict",
            LinkdeckError::Server(_) => "Server Error",
            LinkdeckError::Validation(_) => "Validation Error",
            LinkdeckError::NotFound(_) => "Not Found",
            LinkdeckError::Network(_) => "Network Error",
            LinkdeckError::Decode(_) => "Response Decode Error",
            LinkdeckError::Config(_) => "Configuration Error",
            LinkdeckError::DateParse(_) => "Date Parse Error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            LinkdeckError::InvalidUrl(msg)
            | LinkdeckError::Conflict(msg)
            | LinkdeckError::Server(msg)
            | LinkdeckError::Validation(msg)
            | LinkdeckError::NotFound(msg)
            | LinkdeckError::Network(msg)
            | LinkdeckError::Decode(msg)
            | LinkdeckError::Config(msg)
            | LinkdeckError::DateParse(msg) => msg,
        }
    }

    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// Single user-facing message per workflow, keyed on error class.
    /// Exact wording is presentation; the class mapping is the contract.
    pub fn user_message(&self) -> String {
        match self {
            LinkdeckError::InvalidUrl(_) => {
                "Invalid URL (must include http(s)://)".to_string()
            }
            LinkdeckError::Conflict(_) => {
                "That alias is already in use, try another one".to_string()
            }
            LinkdeckError::Server(_) => {
                "Server error or size limit reached, try again later".to_string()
            }
            LinkdeckError::NotFound(_) => "That short code no longer exists".to_string(),
            LinkdeckError::Network(_) => "Could not reach the server".to_string(),
            _ => "Something went wrong, check the submitted data".to_string(),
        }
    }
}

impl fmt::Display for LinkdeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LinkdeckError {}

impl LinkdeckError {
    pub fn invalid_url<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::InvalidUrl(msg.into())
    }

    pub fn conflict<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::Conflict(msg.into())
    }

    pub fn server<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::Server(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::NotFound(msg.into())
    }

    pub fn network<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::Network(msg.into())
    }

    pub fn decode<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::Decode(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::Config(msg.into())
    }

    pub fn date_parse<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::DateParse(msg.into())
    }
}

impl From<reqwest::Error> for LinkdeckError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            LinkdeckError::Decode(err.to_string())
        } else {
            LinkdeckError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for LinkdeckError {
    fn from(err: serde_json::Error) -> Self {
        LinkdeckError::Decode(err.to_string())
    }
}

impl From<chrono::ParseError> for LinkdeckError {
    fn from(err: chrono::ParseError) -> Self {
        LinkdeckError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LinkdeckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(LinkdeckError::invalid_url("x").code(), "E001");
        assert_eq!(LinkdeckError::conflict("x").code(), "E002");
        assert_eq!(LinkdeckError::server("x").code(), "E003");
        assert_eq!(LinkdeckError::network("x").code(), "E006");
    }

    #[test]
    fn test_display_uses_simple_format() {
        let err = LinkdeckError::not_found("code 'abc' does not exist");
        assert_eq!(format!("{}", err), "Not Found: code 'abc' does not exist");
    }

    #[test]
    fn test_user_message_classes() {
        // The conflict class must be distinguishable from the generic class.
        let conflict = LinkdeckError::conflict("alias taken").user_message();
        let server = LinkdeckError::server("boom").user_message();
        let generic = LinkdeckError::validation("bad body").user_message();
        assert!(conflict.contains("alias"));
        assert!(server.contains("Server error") || server.contains("size limit"));
        assert_ne!(conflict, generic);
        assert_ne!(server, generic);
    }

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let converted: LinkdeckError = err.into();
        assert!(matches!(converted, LinkdeckError::Decode(_)));
    }

    #[test]
    fn test_error_is_std_error() {
        let err = LinkdeckError::config("missing base url");
        let _: &dyn std::error::Error = &err;
    }
}
