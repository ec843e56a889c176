//! Category registry endpoints.
//!
//! The registry itself is a fixed table in `sheetstack_core`; these handlers
//! enrich it with per-category template counts from the loaded corpus. A
//! category with zero templates is a valid "in preparation" state, not an
//! error.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use sheetstack_core::category::{category_by_slug, Category, CATEGORIES};
use sheetstack_core::template::Template;

use crate::error::{not_found, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// A registry entry plus how many loaded templates belong to it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    #[serde(flatten)]
    pub category: Category,
    pub template_count: usize,
}

/// A single category with its templates, for the category landing page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDetail {
    #[serde(flatten)]
    pub category: Category,
    pub template_count: usize,
    pub templates: Vec<Template>,
}

/// GET /categories -- the full registry with template counts.
async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<CategorySummary>>>> {
    let templates = state.store.load_all().await;

    let summaries = CATEGORIES
        .iter()
        .map(|category| CategorySummary {
            category: *category,
            template_count: templates
                .iter()
                .filter(|t| t.matches_category(category.id))
                .count(),
        })
        .collect();

    Ok(Json(DataResponse { data: summaries }))
}

/// GET /categories/{slug} -- one category and its templates.
async fn get_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<DataResponse<CategoryDetail>>> {
    let category = category_by_slug(&slug).ok_or_else(|| not_found("category", slug))?;

    let templates = state.store.load_by_category(category.id).await;

    Ok(Json(DataResponse {
        data: CategoryDetail {
            category: *category,
            template_count: templates.len(),
            templates,
        },
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{slug}", get(get_category))
}
