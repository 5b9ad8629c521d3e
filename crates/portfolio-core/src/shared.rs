//! Shared types used across the portfolio crates.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::Path;

/// Site owner shown on the page when config does not override it.
const DEFAULT_OWNER: &str = "Prajwal";

/// Global application configuration (gateway + identity). Load from TOML or env.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Application identity reported by `/v1/status`.
    pub app_name: String,
    /// Name the page and the canned answers speak for.
    pub owner: String,
    /// HTTP port for the gateway.
    pub port: u16,
    /// Interface to bind, e.g. "127.0.0.1" or "0.0.0.0".
    pub bind_address: String,
    /// If true, `portfolio-gateway` serves the static page from `portfolio-frontend/`.
    pub frontend_enabled: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            app_name: "Portfolio Gateway".to_string(),
            owner: DEFAULT_OWNER.to_string(),
            port: 8001,
            bind_address: "127.0.0.1".to_string(),
            frontend_enabled: true,
        }
    }
}

impl CoreConfig {
    /// Load config from file and environment. Precedence: env `PORTFOLIO_CONFIG` path > `config/gateway.toml` > defaults.
    /// `PORTFOLIO_<KEY>` variables (e.g. `PORTFOLIO_PORT`) override whatever the file set.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("PORTFOLIO_CONFIG").unwrap_or_else(|_| "config/gateway.toml".to_string());
        Self::load_from(Path::new(&config_path))
    }

    /// Like [`CoreConfig::load`] but with an explicit file. A missing file falls back to defaults.
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        Self::load_with_env(path, config::Environment::with_prefix("PORTFOLIO"))
    }

    /// Layers `env` over the file at `path` over the defaults. `env` is normally the process
    /// environment; a `source` map can stand in for it.
    pub fn load_with_env(
        path: &Path,
        env: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        let builder = config::Config::builder()
            .set_default("app_name", defaults.app_name)?
            .set_default("owner", defaults.owner)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("bind_address", defaults.bind_address)?
            .set_default("frontend_enabled", defaults.frontend_enabled)?;

        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else {
            builder
        };

        let built = builder
            .add_source(env.prefix_separator("_").separator("__"))
            .build()?;

        built.try_deserialize()
    }

    /// Address the gateway listens on.
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        let ip: IpAddr = self.bind_address.parse()?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
