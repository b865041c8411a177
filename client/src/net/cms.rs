//! Remote content source seam.
//!
//! The site ships with every record compiled in (`crate::content`), so the
//! default `static` provider never goes to the network. A named provider
//! enables [`fetch_from_cms`], which GETs JSON from the configured API with a
//! bearer token. Nothing in the page tree depends on it yet.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "cms_test.rs"]
mod cms_test;

use serde::de::DeserializeOwned;

use crate::config::SiteConfig;

/// Where page content comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CmsProvider {
    /// Compiled-in content.
    #[default]
    Static,
    /// A remote headless CMS, by provider name.
    Remote(String),
}

impl CmsProvider {
    /// `None`, blank or `static` (any case) selects [`CmsProvider::Static`].
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Self::Static,
            Some(name) if name.eq_ignore_ascii_case("static") => Self::Static,
            Some(name) => Self::Remote(name.to_ascii_lowercase()),
        }
    }

    pub fn is_static(&self) -> bool {
        matches!(self, Self::Static)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Static => "static",
            Self::Remote(name) => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CmsError {
    #[error("cms provider is static; no remote content to fetch")]
    StaticProvider,
    #[error("cms api url is not configured")]
    MissingApiUrl,
    #[error("cms request failed: {0}")]
    Network(String),
    #[error("cms returned status {0}")]
    Status(u16),
    #[error("cms response could not be decoded: {0}")]
    Decode(String),
    #[error("cms is only reachable from the browser")]
    Unavailable,
}

/// Join the API base and an endpoint path with exactly one slash.
fn cms_url(api_url: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        api_url.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

/// Resolve the request URL for `endpoint`, or the reason there is none.
fn request_url(config: &SiteConfig, endpoint: &str) -> Result<String, CmsError> {
    if config.cms_provider.is_static() {
        return Err(CmsError::StaticProvider);
    }
    if config.cms_api_url.is_empty() {
        return Err(CmsError::MissingApiUrl);
    }
    Ok(cms_url(&config.cms_api_url, endpoint))
}

/// Fetch and decode `endpoint` from the configured remote CMS.
///
/// # Errors
///
/// [`CmsError::StaticProvider`] in static mode, [`CmsError::MissingApiUrl`]
/// when no base URL is set, and transport, status or decode failures from
/// the request itself.
pub async fn fetch_from_cms<T: DeserializeOwned>(config: &SiteConfig, endpoint: &str) -> Result<T, CmsError> {
    let url = request_url(config, endpoint)?;
    #[cfg(feature = "hydrate")]
    {
        let mut request = gloo_net::http::Request::get(&url).header("Accept", "application/json");
        if !config.cms_api_key.is_empty() {
            request = request.header("Authorization", &format!("Bearer {}", config.cms_api_key));
        }
        let resp = request
            .send()
            .await
            .map_err(|e| CmsError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(CmsError::Status(resp.status()));
        }
        resp.json::<T>().await.map_err(|e| CmsError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(CmsError::Unavailable)
    }
}
