//! Server configuration parsed from environment variables.
//!
//! Site options (`CMP_*`) belong to `client::config::SiteConfig` and are
//! fixed at build time; only the listener and the assets directory are read
//! at runtime.

use std::path::PathBuf;

use client::config::SiteConfig;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ASSETS_DIR: &str = "public";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT '{0}': expected an integer in 1..=65535")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub assets_dir: PathBuf,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `ASSETS_DIR`: directory served at `/assets`, default `public`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT").map(|raw| raw.trim().to_owned()) {
            None => DEFAULT_PORT,
            Some(raw) if raw.is_empty() => DEFAULT_PORT,
            Some(raw) => parse_port(&raw)?,
        };
        let assets_dir = lookup("ASSETS_DIR")
            .map(|raw| raw.trim().to_owned())
            .filter(|raw| !raw.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR), PathBuf::from);

        Ok(Self { port, assets_dir })
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    match raw.parse::<u16>() {
        Ok(0) | Err(_) => Err(ConfigError::InvalidPort(raw.to_owned())),
        Ok(port) => Ok(port),
    }
}

/// Display form of a secret: whether it is set, never its value.
pub fn redact(secret: &str) -> &'static str {
    if secret.is_empty() { "<unset>" } else { "<redacted>" }
}

/// Log the resolved configuration once at startup.
pub fn log_summary(server: &ServerConfig, site: &SiteConfig) {
    tracing::info!(
        port = server.port,
        assets_dir = %server.assets_dir.display(),
        site_url = %site.site_url,
        default_locale = site.default_locale.as_str(),
        cloudinary = %site.cloudinary_cloud_name,
        cms_provider = site.cms_provider.as_str(),
        cms_api_key = redact(&site.cms_api_key),
        contact_endpoint = %site.contact_form_endpoint,
        analytics = site.analytics_enabled(),
        "configuration loaded"
    );
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
