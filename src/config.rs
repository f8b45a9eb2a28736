use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    pub feedback: FeedbackSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingSettings {
    /// Simulated backend latency for rental searches
    #[serde(default)]
    pub vehicle_latency_ms: u64,
    /// Simulated backend latency for hotel searches
    #[serde(default)]
    pub hotel_latency_ms: u64,
    /// Simulated latency before feedback is acknowledged
    #[serde(default)]
    pub feedback_latency_ms: u64,
    pub max_vehicle_results: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackSettings {
    pub recipient: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with TRAVILLO_)
    /// 5. A bare `PORT` variable, for `server.port` only
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., TRAVILLO__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("TRAVILLO")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        apply_platform_overrides(settings, platform_port())?.try_deserialize()
    }

    /// Load configuration from a custom path, then env and `PORT` as in [`Settings::load`]
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("TRAVILLO")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        apply_platform_overrides(settings, platform_port())?.try_deserialize()
    }
}

/// Bare `PORT` variable set by hosting platforms, if it holds a port number
fn platform_port() -> Option<u16> {
    std::env::var("PORT").ok().and_then(|p| p.trim().parse::<u16>().ok())
}

/// `port` wins over every other source for `server.port`
fn apply_platform_overrides(settings: Config, port: Option<u16>) -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(settings);
    if let Some(port) = port {
        builder = builder.set_override("server.port", i64::from(port))?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "compact");
    }

    #[test]
    fn test_optional_sections_default() {
        let settings: Settings = Config::builder()
            .add_source(File::from_str(
                r#"
                [server]
                host = "127.0.0.1"
                port = 8080

                [feedback]
                recipient = "team@travillo.example"
                "#,
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.matching.vehicle_latency_ms, 0);
        assert_eq!(settings.matching.max_vehicle_results, None);
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.server.workers, None);
    }

    fn bundled_defaults() -> Config {
        Config::builder()
            .add_source(File::with_name(concat!(env!("CARGO_MANIFEST_DIR"), "/config/default")))
            .build()
            .unwrap()
    }

    #[test]
    fn test_platform_port_overrides_file() {
        let settings: Settings = apply_platform_overrides(bundled_defaults(), Some(9090))
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.server.host, "0.0.0.0");
    }

    #[test]
    fn test_no_platform_port_keeps_file_value() {
        let settings: Settings = apply_platform_overrides(bundled_defaults(), None)
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.server.port, 8080);
    }

    #[test]
    fn test_bundled_default_file_parses() {
        let settings = Settings::load_from(concat!(env!("CARGO_MANIFEST_DIR"), "/config/default.toml")).unwrap();

        assert_eq!(settings.matching.vehicle_latency_ms, 1200);
        assert_eq!(settings.matching.hotel_latency_ms, 1000);
    }
}
