pub mod categories;
pub mod health;
pub mod keywords;
pub mod search;
pub mod seo;
pub mod templates;

use axum::middleware::from_fn_with_state;
use axum::Router;

use crate::middleware::admin::require_admin;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /templates                  list (?category=&limit=)
/// /templates/latest           newest N
/// /templates/featured         top N by popularity score
/// /templates/{slug}           detail (404 when missing)
/// /templates/{slug}/related   same-category suggestions
///
/// /categories                 registry with per-category counts
/// /categories/{slug}          single category + its templates (404 unknown)
///
/// /search                     ?q= substring search over the corpus
/// /stats                      catalog aggregates
///
/// /keywords                   keyword table (admin-gated)
/// /keywords/stats             per-status tallies (admin-gated)
/// ```
pub fn api_routes(state: &AppState) -> Router<AppState> {
    // The keyword subtree is firewalled from production deployments.
    let admin = keywords::router().layer(from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .merge(templates::router())
        .merge(categories::router())
        .merge(search::router())
        .merge(admin)
}
