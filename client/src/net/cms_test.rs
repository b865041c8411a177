use super::*;

fn remote_config(api_url: &str) -> SiteConfig {
    SiteConfig {
        cms_provider: CmsProvider::Remote("strapi".to_owned()),
        cms_api_url: api_url.to_owned(),
        ..SiteConfig::default()
    }
}

#[test]
fn parse_defaults_to_static() {
    assert_eq!(CmsProvider::parse(None), CmsProvider::Static);
    assert_eq!(CmsProvider::parse(Some("  ")), CmsProvider::Static);
    assert_eq!(CmsProvider::parse(Some("Static")), CmsProvider::Static);
    assert!(CmsProvider::default().is_static());
}

#[test]
fn parse_keeps_remote_provider_name() {
    let provider = CmsProvider::parse(Some(" Contentful "));
    assert_eq!(provider, CmsProvider::Remote("contentful".to_owned()));
    assert!(!provider.is_static());
    assert_eq!(provider.as_str(), "contentful");
}

#[test]
fn cms_url_joins_with_single_slash() {
    assert_eq!(cms_url("https://cms.test/api/", "/products"), "https://cms.test/api/products");
    assert_eq!(cms_url("https://cms.test/api", "products"), "https://cms.test/api/products");
}

#[test]
fn static_provider_refuses_to_build_url() {
    assert_eq!(
        request_url(&SiteConfig::default(), "/products"),
        Err(CmsError::StaticProvider)
    );
}

#[test]
fn remote_provider_requires_api_url() {
    assert_eq!(request_url(&remote_config(""), "/products"), Err(CmsError::MissingApiUrl));
    assert_eq!(
        request_url(&remote_config("https://cms.test/api"), "/products").as_deref(),
        Ok("https://cms.test/api/products")
    );
}

#[tokio::test]
async fn fetch_in_static_mode_fails_before_any_request() {
    let result = fetch_from_cms::<serde_json::Value>(&SiteConfig::default(), "/products").await;
    assert_eq!(result, Err(CmsError::StaticProvider));
}

#[tokio::test]
async fn fetch_outside_browser_is_unavailable() {
    let result = fetch_from_cms::<serde_json::Value>(&remote_config("https://cms.test"), "/products").await;
    assert_eq!(result, Err(CmsError::Unavailable));
}
