//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Reporting engine configuration.
    #[serde(default)]
    pub reporting: ReportingConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// Reporting engine configuration.
///
/// The fixed/variable cost split used by the break-even model is a policy
/// assumption, not something derived from ledger data, so it lives here where
/// operators can override it.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportingConfig {
    /// Share of average monthly expenses treated as fixed costs.
    #[serde(default = "default_fixed_cost_ratio")]
    pub fixed_cost_ratio: Decimal,
    /// Year used by report endpoints when the request omits one.
    ///
    /// When unset, handlers fall back to the current calendar year at the
    /// HTTP boundary; the reporting core itself never reads the clock.
    #[serde(default)]
    pub default_year: Option<i32>,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            fixed_cost_ratio: default_fixed_cost_ratio(),
            default_year: None,
        }
    }
}

/// Default fixed-cost share of average monthly expenses (60%).
#[must_use]
pub fn default_fixed_cost_ratio() -> Decimal {
    Decimal::new(6, 1)
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("HOSTELOPS").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reporting_defaults() {
        let reporting = ReportingConfig::default();
        assert_eq!(reporting.fixed_cost_ratio, dec!(0.6));
        assert_eq!(reporting.default_year, None);
    }

    #[test]
    fn test_server_defaults() {
        let server: ServerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8080);
    }
}
