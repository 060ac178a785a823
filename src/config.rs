use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base path of the shortening/analytics REST API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Host prepended to codes when displaying short links. Never sent to
    /// the backend; the backend reports its own `shortUrl` on create.
    #[serde(default = "default_short_base")]
    pub short_base: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Column width before original URLs are truncated in the list view.
    #[serde(default = "default_url_truncate")]
    pub url_truncate: usize,
    /// File the dark/light preference is persisted to.
    #[serde(default = "default_theme_file")]
    pub theme_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. The TUI owns the terminal, so logs never go to stdout;
    /// an empty value disables logging entirely.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_short_base() -> String {
    "http://localhost:8080".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_url_truncate() -> usize {
    60
}

fn default_theme_file() -> String {
    "linkdeck_theme.toml".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "linkdeck.log".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            display: DisplayConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            short_base: default_short_base(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            url_truncate: default_url_truncate(),
            theme_file: default_theme_file(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file with environment variable fallback
    pub fn load() -> Self {
        let mut config = Self::load_from_file();
        config.override_with_env();
        config
    }

    fn load_from_file() -> Self {
        let config_paths = [
            "config.toml",
            "linkdeck.toml",
            "config/linkdeck.toml",
            "/etc/linkdeck/config.toml",
        ];

        for path in &config_paths {
            if Path::new(path).exists() {
                debug!("Loading config from: {}", path);
                match fs::read_to_string(path) {
                    Ok(content) => match toml::from_str::<Config>(&content) {
                        Ok(config) => {
                            debug!("Successfully loaded config from: {}", path);
                            return config;
                        }
                        Err(e) => {
                            warn!("Failed to parse config file {}: {}", path, e);
                        }
                    },
                    Err(e) => {
                        warn!("Failed to read config file {}: {}", path, e);
                    }
                }
            }
        }

        debug!("No config file found, using defaults");
        Self::default()
    }

    fn override_with_env(&mut self) {
        if let Ok(base_url) = env::var("LINKDECK_API_BASE") {
            self.api.base_url = base_url;
        }
        if let Ok(short_base) = env::var("LINKDECK_SHORT_BASE") {
            self.api.short_base = short_base;
        }
        if let Ok(timeout) = env::var("LINKDECK_TIMEOUT_SECS")
            && let Ok(secs) = timeout.parse()
        {
            self.api.timeout_secs = secs;
        }
        if let Ok(truncate) = env::var("LINKDECK_URL_TRUNCATE")
            && let Ok(width) = truncate.parse()
        {
            self.display.url_truncate = width;
        }
        if let Ok(theme_file) = env::var("LINKDECK_THEME_FILE") {
            self.display.theme_file = theme_file;
        }
        if let Ok(log_level) = env::var("RUST_LOG") {
            self.logging.level = log_level;
        }
        if let Ok(log_file) = env::var("LINKDECK_LOG_FILE") {
            self.logging.file = log_file;
        }
    }
}

// Global configuration instance
use std::sync::OnceLock;
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Get the global configuration instance
pub fn get_config() -> &'static Config {
    CONFIG.get_or_init(Config::load)
}

/// Initialize the global configuration
pub fn init_config() {
    CONFIG.get_or_init(Config::load);
}
