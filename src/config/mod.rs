//! Typed configuration, loaded from the environment.
//!
//! Settings come in through `SALOMAO`-prefixed environment variables with
//! `__` separating nested sections (a `.env` file is honored in
//! development). `config` deserializes them into the section structs here;
//! [`AppConfig::validate`] then checks the semantic rules the types alone
//! cannot express.
//!
//! ```no_run
//! use salomao::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod ai;
mod auth;
mod database;
mod error;
mod server;

pub use ai::AiConfig;
pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Every setting the backend reads, grouped by concern.
///
/// Only the database section is mandatory; the rest carry workable
/// development defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    pub database: DatabaseConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub ai: AiConfig,
}

impl AppConfig {
    /// Reads the environment into an [`AppConfig`].
    ///
    /// Variable names follow `SALOMAO__<SECTION>__<FIELD>`, so
    /// `SALOMAO__SERVER__PORT=5000` lands in `server.port`. A missing
    /// required section or an unparseable value surfaces as
    /// [`ConfigError::LoadError`].
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SALOMAO")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Runs every section's semantic checks, failing on the first hit.
    ///
    /// Auth validation depends on the environment: production demands a
    /// strong JWT secret, development does not.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate(&self.server.environment)?;
        self.ai.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
