//! Client search widget backend.
//!
//! Case-insensitive substring match over title, keyword, and description of
//! the loaded corpus. Small catalog, linear scan; no index.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use sheetstack_core::template::Template;

use crate::error::AppResult;
use crate::query::{clamp_limit, SearchParams};
use crate::response::DataResponse;
use crate::state::AppState;

const DEFAULT_SEARCH_LIMIT: usize = 10;

/// One search hit, shaped for the dropdown widget.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub category: String,
    /// Site-relative detail page URL.
    pub url: String,
}

impl From<Template> for SearchResult {
    fn from(template: Template) -> Self {
        Self {
            url: format!("/{}", template.slug),
            slug: template.slug,
            title: template.title,
            description: template.description,
            category: template.category,
        }
    }
}

/// GET /search?q= -- substring search over the template corpus.
///
/// An empty query yields an empty result set (the widget only queries after
/// the first keystroke).
async fn search_templates(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<DataResponse<Vec<SearchResult>>>> {
    let needle = params.q.trim().to_lowercase();
    if needle.is_empty() {
        return Ok(Json(DataResponse { data: Vec::new() }));
    }

    let limit = clamp_limit(params.limit, DEFAULT_SEARCH_LIMIT);

    let results: Vec<SearchResult> = state
        .store
        .load_all()
        .await
        .into_iter()
        .filter(|t| matches(t, &needle))
        .take(limit)
        .map(SearchResult::from)
        .collect();

    Ok(Json(DataResponse { data: results }))
}

fn matches(template: &Template, needle: &str) -> bool {
    template.title.to_lowercase().contains(needle)
        || template
            .keyword
            .as_deref()
            .is_some_and(|k| k.to_lowercase().contains(needle))
        || template.description.to_lowercase().contains(needle)
}

pub fn router() -> Router<AppState> {
    Router::new().route("/search", get(search_templates))
}
