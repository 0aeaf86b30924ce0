use std::env;

use auth::TokenConfig;
use auth::TokenConfigError;
use chrono::Duration;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub issuer: String,
    pub audience: String,
    pub secret: String,
    #[serde(default = "default_access_token_lifetime_minutes")]
    pub access_token_lifetime_minutes: i64,
    #[serde(default = "default_refresh_token_lifetime_days")]
    pub refresh_token_lifetime_days: i64,
}

fn default_access_token_lifetime_minutes() -> i64 {
    TokenConfig::DEFAULT_ACCESS_LIFETIME_MINUTES
}

fn default_refresh_token_lifetime_days() -> i64 {
    TokenConfig::DEFAULT_REFRESH_LIFETIME_DAYS
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (JWT__SECRET, JWT__ISSUER, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        Ok(config)
    }
}

impl JwtConfig {
    /// Build the validated process-wide token configuration.
    ///
    /// Fails fast at startup rather than on first use.
    ///
    /// # Errors
    /// * `EmptyField` - Issuer, audience, or secret is missing
    /// * `NonPositiveLifetime` - A configured lifetime is zero or negative
    pub fn token_config(&self) -> Result<TokenConfig, TokenConfigError> {
        TokenConfig::new(
            self.issuer.clone(),
            self.audience.clone(),
            self.secret.clone(),
            Duration::minutes(self.access_token_lifetime_minutes),
            Duration::days(self.refresh_token_lifetime_days),
        )
    }
}
