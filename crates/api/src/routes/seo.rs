//! Crawler-facing endpoints: sitemap.xml and robots.txt.
//!
//! Mounted at root level (crawlers fetch fixed paths, not `/api/v1`).
//! Both degrade gracefully: an unreadable catalog produces an empty but
//! valid sitemap rather than an error status.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use chrono::Utc;

use crate::state::AppState;

/// GET /sitemap.xml -- one `<url>` entry per loaded template.
async fn sitemap_xml(State(state): State<AppState>) -> impl IntoResponse {
    let templates = state.store.load_all().await;
    let base_url = &state.config.public_base_url;
    let now = Utc::now().to_rfc3339();

    let mut body = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for template in &templates {
        let lastmod = template
            .updated_at
            .or(template.created_at)
            .map(|dt| dt.to_rfc3339())
            .unwrap_or_else(|| now.clone());

        body.push_str(&format!(
            "  <url>\n    <loc>{base_url}/{slug}/</loc>\n    <lastmod>{lastmod}</lastmod>\n    <changefreq>weekly</changefreq>\n    <priority>0.8</priority>\n  </url>\n",
            slug = xml_escape(&template.slug),
        ));
    }

    body.push_str("</urlset>\n");

    (
        [
            (header::CONTENT_TYPE, "application/xml"),
            (
                header::CACHE_CONTROL,
                "public, max-age=86400, s-maxage=86400, stale-while-revalidate=604800",
            ),
        ],
        body,
    )
}

/// GET /robots.txt -- crawl policy. The admin paths are disallowed even
/// though production also answers 404 for them.
async fn robots_txt(State(state): State<AppState>) -> impl IntoResponse {
    let base_url = &state.config.public_base_url;

    let body = format!(
        "User-agent: *\n\
         Allow: /\n\
         \n\
         # Block admin/pipeline pages\n\
         Disallow: /api/v1/keywords\n\
         \n\
         Sitemap: {base_url}/sitemap.xml\n"
    );

    (
        [
            (header::CONTENT_TYPE, "text/plain"),
            (header::CACHE_CONTROL, "public, max-age=86400, s-maxage=86400"),
        ],
        body,
    )
}

/// Minimal XML text escaping. Slugs are normally allow-list clean, but the
/// slug field inside a JSON file is free text.
fn xml_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Mount crawler routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sitemap.xml", get(sitemap_xml))
        .route("/robots.txt", get(robots_txt))
}
