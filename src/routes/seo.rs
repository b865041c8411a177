//! Crawler files derived from the page list and the configured site URL.

use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use client::config::SiteConfig;
use client::state::route::Page;

#[cfg(test)]
#[path = "seo_test.rs"]
mod tests;

/// `sitemap.xml` body listing every page under `site_url`.
pub fn sitemap(site_url: &str) -> String {
    let base = site_url.trim_end_matches('/');
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for page in Page::ALL {
        let priority = if page == Page::Home { "1.0" } else { "0.8" };
        xml.push_str(&format!(
            "  <url><loc>{base}{}</loc><changefreq>monthly</changefreq><priority>{priority}</priority></url>\n",
            page.path()
        ));
    }
    xml.push_str("</urlset>\n");
    xml
}

pub fn robots(site_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n",
        site_url.trim_end_matches('/')
    )
}

pub async fn sitemap_xml() -> impl IntoResponse {
    (
        [(CONTENT_TYPE, "application/xml; charset=utf-8")],
        sitemap(&SiteConfig::current().site_url),
    )
}

pub async fn robots_txt() -> impl IntoResponse {
    (
        [(CONTENT_TYPE, "text/plain; charset=utf-8")],
        robots(&SiteConfig::current().site_url),
    )
}
