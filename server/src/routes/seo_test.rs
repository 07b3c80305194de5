use axum::http::StatusCode;
use client::routing::{RouteDefinition, RouteName, RoutePattern};
use client::seo::{Robots, SeoMetadata};

use super::*;

#[test]
fn site_sitemap_lists_home_and_showcase_only() {
    let urls = indexable_urls(&RouteTable::site());
    assert_eq!(urls, vec!["https://martingreenwood.com/", "https://martingreenwood.com/showcase"]);
}

#[test]
fn noindex_routes_are_left_out() {
    let table = RouteTable::new(vec![
        RouteDefinition::new(RouteName::Home, RoutePattern::root()),
        RouteDefinition::new(RouteName::Showcase, RoutePattern::literal("showcase"))
            .with_meta(SeoMetadata::page("/showcase", "Showcase", "Buttons").with_robots(Robots::NoIndexFollow)),
        RouteDefinition::new(RouteName::NotFound, RoutePattern::catch_all("path")),
    ])
    .unwrap();
    assert_eq!(indexable_urls(&table), vec!["https://martingreenwood.com/"]);
}

#[test]
fn sitemap_escapes_urls() {
    let xml = render_sitemap(&["https://example.test/?a=1&b=2&tag=<x>".to_owned()]);
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
    assert!(xml.contains("<loc>https://example.test/?a=1&amp;b=2&amp;tag=&lt;x&gt;</loc>"));
    assert!(xml.trim_end().ends_with("</urlset>"));
}

#[test]
fn robots_points_at_sitemap() {
    let robots = render_robots();
    assert!(robots.starts_with("User-agent: *\n"));
    assert!(robots.contains("Sitemap: https://martingreenwood.com/sitemap.xml"));
}

#[tokio::test]
async fn sitemap_handler_serves_xml() {
    let response = sitemap_xml().await.into_response();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/xml; charset=utf-8"
    );
}

#[tokio::test]
async fn robots_handler_serves_text() {
    let response = robots_txt().await.into_response();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get(header::CONTENT_TYPE).unwrap(), "text/plain; charset=utf-8");
}
