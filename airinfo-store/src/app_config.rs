use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_store_timeout_ms")]
    pub timeout_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    #[serde(default = "default_weather_url")]
    pub base_url: String,
    #[serde(default = "default_weather_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_url(),
            timeout_ms: default_weather_timeout_ms(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeedConfig {
    pub enabled: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

fn default_max_connections() -> u32 { 5 }
fn default_store_timeout_ms() -> u64 { 3000 }
fn default_weather_timeout_ms() -> u64 { 5000 }
fn default_weather_url() -> String { "http://localhost:9876/metar".to_string() }

impl DatabaseConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl WeatherConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides are optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `AIRINFO__WEATHER__BASE_URL=http://wx:9876/metar`
            .add_source(config::Environment::with_prefix("AIRINFO").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> Result<Config, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn test_defaults_fill_optional_keys() {
        let cfg = parse(
            r#"
            [server]
            port = 8080

            [database]
            url = "postgres://localhost/airinfo"

            [weather]
            "#,
        )
        .unwrap();

        assert_eq!(cfg.database.max_connections, 5);
        assert_eq!(cfg.database.timeout(), Duration::from_secs(3));
        assert_eq!(cfg.weather.base_url, "http://localhost:9876/metar");
        assert_eq!(cfg.weather.timeout(), Duration::from_secs(5));
        assert!(cfg.seed.enabled);
    }

    #[test]
    fn test_explicit_values_win() {
        let cfg = parse(
            r#"
            [server]
            port = 9000

            [database]
            url = "postgres://db/airinfo"
            timeout_ms = 750

            [weather]
            base_url = "http://wx.internal/metar"
            timeout_ms = 1200

            [seed]
            enabled = false
            "#,
        )
        .unwrap();

        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.database.timeout(), Duration::from_millis(750));
        assert_eq!(cfg.weather.base_url, "http://wx.internal/metar");
        assert_eq!(cfg.weather.timeout(), Duration::from_millis(1200));
        assert!(!cfg.seed.enabled);
    }

    #[test]
    fn test_missing_database_url_is_rejected() {
        let err = parse(
            r#"
            [server]
            port = 8080

            [database]

            [weather]
            "#,
        );
        assert!(err.is_err());
    }
}
