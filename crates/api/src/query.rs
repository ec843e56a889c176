//! Shared query parameter types for API handlers.
//!
//! Common query structs that appear across multiple handler modules are
//! extracted here to avoid duplication.

use serde::Deserialize;

/// Generic `?limit=` parameter for list endpoints. Values are clamped by
/// [`clamp_limit`] in the handlers.
#[derive(Debug, Deserialize)]
pub struct LimitParams {
    pub limit: Option<usize>,
}

/// Query parameters for the template list endpoint.
#[derive(Debug, Deserialize)]
pub struct TemplateListParams {
    /// Restrict to one category (case-insensitive).
    pub category: Option<String>,
    pub limit: Option<usize>,
}

/// Query parameters for the search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub limit: Option<usize>,
}

/// Raw keyword-table query parameters; parsed into a
/// [`sheetstack_core::filter::KeywordFilter`] by the handler so unknown
/// values become 400s rather than silent defaults.
#[derive(Debug, Default, Deserialize)]
pub struct KeywordListParams {
    pub status: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// Default page size for list endpoints.
pub const DEFAULT_LIMIT: usize = 20;

/// Hard cap on list endpoint page size.
pub const MAX_LIMIT: usize = 100;

/// Clamp an optional `?limit=` value into `1..=MAX_LIMIT`.
pub fn clamp_limit(limit: Option<usize>, default: usize) -> usize {
    limit.unwrap_or(default).clamp(1, MAX_LIMIT)
}
