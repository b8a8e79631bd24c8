//! Crawler-facing endpoints: sitemap and robots.

use std::env;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use folio_shared::post_store;

use crate::state::AppState;

fn site_base_url() -> String {
    env::var("SITE_BASE_URL").unwrap_or_else(|_| "https://alexmorgan.dev".to_string())
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// GET /sitemap.xml
pub async fn sitemap_xml(State(state): State<AppState>) -> Response {
    let posts = match post_store::scan_posts(state.content_dir()).await {
        Ok(posts) => posts,
        Err(err) => {
            tracing::warn!("sitemap: failed to scan posts: {}", err);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to generate sitemap")
                .into_response();
        }
    };

    let base = site_base_url();
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
"#,
    );

    // Landing page and blog index
    xml.push_str(&format!(
        "  <url>\n    <loc>{}</loc>\n    <changefreq>weekly</changefreq>\n    \
         <priority>1.0</priority>\n  </url>\n",
        xml_escape(&base)
    ));
    xml.push_str(&format!(
        "  <url>\n    <loc>{}/blog</loc>\n    <changefreq>daily</changefreq>\n    \
         <priority>0.9</priority>\n  </url>\n",
        xml_escape(&base)
    ));

    for post in &posts {
        let loc = format!("{}/blog/{}", base, urlencoding::encode(&post.slug));
        xml.push_str(&format!("  <url>\n    <loc>{}</loc>\n", xml_escape(&loc)));
        if !post.date.is_empty() {
            xml.push_str(&format!("    <lastmod>{}</lastmod>\n", xml_escape(&post.date)));
        }
        xml.push_str("    <changefreq>weekly</changefreq>\n    <priority>0.8</priority>\n  </url>\n");
    }

    xml.push_str("</urlset>\n");

    (StatusCode::OK, [(header::CONTENT_TYPE, "application/xml; charset=utf-8")], xml)
        .into_response()
}

/// GET /robots.txt
pub async fn robots_txt() -> Response {
    let base = site_base_url();
    let body = format!("User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n", base);
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response()
}
