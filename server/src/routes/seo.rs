//! Crawler-facing files derived from the client route table.

use axum::http::header;
use axum::response::IntoResponse;
use client::routing::RouteTable;
use client::seo::BASE_URL;

/// Canonical URLs of every route that allows indexing and has a fixed path.
pub fn indexable_urls(table: &RouteTable) -> Vec<String> {
    table
        .routes()
        .iter()
        .filter(|route| route.pattern.static_path().is_some())
        .map(client::routing::RouteDefinition::metadata)
        .filter(|meta| meta.robots.indexable())
        .map(|meta| meta.canonical_url)
        .collect()
}

pub fn render_robots() -> String {
    format!("User-agent: *\nAllow: /\n\nSitemap: {BASE_URL}/sitemap.xml\n")
}

pub fn render_sitemap(urls: &[String]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for url in urls {
        xml.push_str("  <url><loc>");
        xml.push_str(&html_escape::encode_text(url));
        xml.push_str("</loc></url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

pub async fn robots_txt() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], render_robots())
}

pub async fn sitemap_xml() -> impl IntoResponse {
    let urls = indexable_urls(&RouteTable::site());
    tracing::debug!(count = urls.len(), "rendering sitemap");
    ([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], render_sitemap(&urls))
}

#[cfg(test)]
#[path = "seo_test.rs"]
mod tests;
