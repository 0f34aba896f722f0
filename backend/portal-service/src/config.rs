/// Configuration management for Portal Service
///
/// Everything is read from environment variables once at startup. The
/// playback section is handed to the resolver as an immutable value.
use db_pool::env;
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Playback URL settings
    pub playback: PlaybackConfig,
    /// One-shot notice cookie settings
    pub notice: NoticeSettings,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development, staging, production)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Inputs of the URL composer and the home channel descriptor.
///
/// Empty `base_url` or `program_path` is tolerated: composed URLs simply
/// lose that segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    pub base_url: String,
    pub program_path: String,
    pub official_channel_name: String,
    pub promo_playlist: String,
}

/// Cookie used to carry a notice across a redirect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeSettings {
    pub cookie_name: String,
    pub max_age_secs: i64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            program_path: String::new(),
            official_channel_name: default_official_channel_name(),
            promo_playlist: default_promo_playlist(),
        }
    }
}

impl Default for NoticeSettings {
    fn default() -> Self {
        Self {
            cookie_name: default_notice_cookie_name(),
            max_age_secs: default_notice_max_age_secs(),
        }
    }
}

impl PlaybackConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: env::string_or_empty("HLS_BASE_URL"),
            program_path: env::string_or_empty("HLS_PROGRAM_PATH"),
            official_channel_name: env::string_or(
                "OFFICIAL_CHANNEL_NAME",
                &default_official_channel_name(),
            ),
            promo_playlist: env::string_or("PROMO_PLAYLIST", &default_promo_playlist()),
        }
    }

    /// Names of settings that are empty and will degrade composed URLs.
    pub fn missing_settings(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.base_url.trim().is_empty() {
            missing.push("HLS_BASE_URL");
        }
        if self.program_path.trim().is_empty() {
            missing.push("HLS_PROGRAM_PATH");
        }
        missing
    }
}

impl NoticeSettings {
    pub fn from_env() -> Self {
        Self {
            cookie_name: env::string_or("NOTICE_COOKIE_NAME", &default_notice_cookie_name()),
            max_age_secs: env::parse_or("NOTICE_MAX_AGE_SECS", default_notice_max_age_secs()),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        Ok(Config {
            app: AppConfig {
                env: env::string_or("APP_ENV", "development"),
                host: env::string_or("PORTAL_HOST", "0.0.0.0"),
                port: env::parse_strict("PORTAL_PORT", 8000)?,
            },
            database: DatabaseConfig {
                url: std::env::var("DATABASE_URL")
                    .map_err(|_| "DATABASE_URL environment variable not set".to_string())?,
                max_connections: env::parse_or("DATABASE_MAX_CONNECTIONS", 10),
            },
            playback: PlaybackConfig::from_env(),
            notice: NoticeSettings::from_env(),
        })
    }
}

fn default_official_channel_name() -> String {
    "Official Channel".to_string()
}

fn default_promo_playlist() -> String {
    "promo.m3u8".to_string()
}

fn default_notice_cookie_name() -> String {
    "portal_notice".to_string()
}

fn default_notice_max_age_secs() -> i64 {
    60
}
