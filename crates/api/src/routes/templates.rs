//! Template catalog endpoints: listing, detail, featured/latest slices,
//! related suggestions, and the homepage stats strip.

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};

use sheetstack_core::stats::CatalogStats;
use sheetstack_core::template::Template;

use crate::error::{not_found, AppResult};
use crate::query::{clamp_limit, LimitParams, TemplateListParams, DEFAULT_LIMIT};
use crate::response::DataResponse;
use crate::state::AppState;

/// Default size of the latest/featured homepage sections.
const DEFAULT_SECTION_LIMIT: usize = 3;

/// GET /templates -- list templates, optionally restricted to a category.
async fn list_templates(
    State(state): State<AppState>,
    Query(params): Query<TemplateListParams>,
) -> AppResult<Json<DataResponse<Vec<Template>>>> {
    let mut templates = match params.category.as_deref() {
        Some(category) => state.store.load_by_category(category).await,
        None => state.store.load_all().await,
    };
    templates.truncate(clamp_limit(params.limit, DEFAULT_LIMIT));

    Ok(Json(DataResponse { data: templates }))
}

/// GET /templates/latest -- the newest templates.
async fn latest_templates(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<DataResponse<Vec<Template>>>> {
    let limit = clamp_limit(params.limit, DEFAULT_SECTION_LIMIT);
    let templates = state.store.load_latest(limit).await;
    Ok(Json(DataResponse { data: templates }))
}

/// GET /templates/featured -- top templates by popularity score.
async fn featured_templates(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<DataResponse<Vec<Template>>>> {
    let limit = clamp_limit(params.limit, DEFAULT_SECTION_LIMIT);
    let templates = state.store.load_featured(limit).await;
    Ok(Json(DataResponse { data: templates }))
}

/// GET /templates/{slug} -- single template detail.
///
/// Missing file, empty file, and malformed JSON all surface as 404; the
/// loader never distinguishes them.
async fn get_template(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<DataResponse<Template>>> {
    let template = state
        .store
        .load_by_slug(&slug)
        .await
        .ok_or_else(|| not_found("template", slug))?;

    Ok(Json(DataResponse { data: template }))
}

/// GET /templates/{slug}/related -- same-category suggestions, the current
/// template excluded.
async fn related_templates(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<DataResponse<Vec<Template>>>> {
    let template = state
        .store
        .load_by_slug(&slug)
        .await
        .ok_or_else(|| not_found("template", slug))?;

    let related = state
        .store
        .load_related(&template.slug, &template.category, DEFAULT_SECTION_LIMIT)
        .await;

    Ok(Json(DataResponse { data: related }))
}

/// GET /stats -- catalog-wide aggregates for the homepage stats strip.
async fn catalog_stats(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<CatalogStats>>> {
    Ok(Json(DataResponse {
        data: state.store.stats().await,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/templates", get(list_templates))
        .route("/templates/latest", get(latest_templates))
        .route("/templates/featured", get(featured_templates))
        .route("/templates/{slug}", get(get_template))
        .route("/templates/{slug}/related", get(related_templates))
        .route("/stats", get(catalog_stats))
}
