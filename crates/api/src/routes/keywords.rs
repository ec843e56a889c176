//! Admin keyword-table endpoints.
//!
//! Thin HTTP shell over the pure filter/sort engine in `sheetstack_core`.
//! The whole subtree sits behind the admin gate (see
//! `middleware::admin::require_admin`); production deployments answer 404.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};

use sheetstack_catalog::load_keywords;
use sheetstack_core::filter::{
    filter_keywords, keyword_status_counts, FilteredKeywords, KeywordFilter, KeywordStatusCounts,
};

use crate::error::AppResult;
use crate::query::KeywordListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /keywords -- filtered and sorted keyword table.
///
/// Unknown status/sort values are a 400, not a silent default: the admin UI
/// only ever sends values from its own dropdowns, so anything else is a bug
/// worth surfacing.
async fn list_keywords(
    State(state): State<AppState>,
    Query(params): Query<KeywordListParams>,
) -> AppResult<Json<DataResponse<FilteredKeywords>>> {
    let filter = parse_filter(&params)?;
    let keywords = load_keywords(state.store.data_dir()).await;
    let result = filter_keywords(&keywords, &filter);

    Ok(Json(DataResponse { data: result }))
}

/// GET /keywords/stats -- per-status tallies for the dashboard header.
async fn keyword_stats(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<KeywordStatusCounts>>> {
    let keywords = load_keywords(state.store.data_dir()).await;
    Ok(Json(DataResponse {
        data: keyword_status_counts(&keywords),
    }))
}

fn parse_filter(params: &KeywordListParams) -> AppResult<KeywordFilter> {
    let mut filter = KeywordFilter::default();
    if let Some(status) = params.status.as_deref() {
        filter.status = status.parse()?;
    }
    if let Some(search) = &params.search {
        filter.search = search.clone();
    }
    if let Some(sort_by) = params.sort_by.as_deref() {
        filter.sort_by = sort_by.parse()?;
    }
    if let Some(sort_order) = params.sort_order.as_deref() {
        filter.sort_order = sort_order.parse()?;
    }
    Ok(filter)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/keywords", get(list_keywords))
        .route("/keywords/stats", get(keyword_stats))
}
