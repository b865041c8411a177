use axum::http::StatusCode;

use super::*;

#[test]
fn sitemap_lists_every_page_once() {
    let xml = sitemap("https://cmpindustri.com/");
    for page in Page::ALL {
        let loc = format!("<loc>https://cmpindustri.com{}</loc>", page.path());
        assert_eq!(xml.matches(&loc).count(), 1, "{loc}");
    }
    assert_eq!(xml.matches("<url>").count(), Page::ALL.len());
    assert!(xml.starts_with("<?xml"));
    assert!(xml.trim_end().ends_with("</urlset>"));
}

#[test]
fn home_has_top_priority() {
    let xml = sitemap("http://localhost:3000");
    let home = format!("<loc>http://localhost:3000{}</loc>", Page::Home.path());
    let line = xml.lines().find(|l| l.contains(&home)).unwrap();
    assert!(line.contains("<priority>1.0</priority>"));
}

#[test]
fn robots_points_at_sitemap() {
    let body = robots("https://cmpindustri.com/");
    assert!(body.contains("User-agent: *"));
    assert!(body.contains("Sitemap: https://cmpindustri.com/sitemap.xml"));
}

#[tokio::test]
async fn handlers_set_content_types() {
    let response = sitemap_xml().await.into_response();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[CONTENT_TYPE],
        "application/xml; charset=utf-8"
    );

    let response = robots_txt().await.into_response();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.ends_with("/sitemap.xml\n"));
}
