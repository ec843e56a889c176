//! Catalog-wide aggregate statistics for the homepage stats strip.

use serde::Serialize;
use std::collections::HashSet;

use crate::template::Template;

/// Shown when the true download sum is zero. The marketing site never
/// displays an empty catalog as "0 downloads".
pub const FALLBACK_TOTAL_DOWNLOADS: u64 = 50_000;

/// Shown when the catalog is empty and no average exists.
pub const FALLBACK_AVERAGE_RATING: f64 = 4.9;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_templates: usize,
    pub total_downloads: u64,
    /// Rounded to one decimal place.
    pub average_rating: f64,
    /// Number of distinct category labels in the corpus.
    pub categories: usize,
}

/// Aggregate display statistics over the loaded corpus.
pub fn catalog_stats(templates: &[Template]) -> CatalogStats {
    let sum: u64 = templates.iter().map(|t| u64::from(t.download_count)).sum();
    let total_downloads = if sum == 0 { FALLBACK_TOTAL_DOWNLOADS } else { sum };

    let average_rating = if templates.is_empty() {
        FALLBACK_AVERAGE_RATING
    } else {
        let avg = templates.iter().map(|t| t.rating).sum::<f64>() / templates.len() as f64;
        (avg * 10.0).round() / 10.0
    };

    let categories = templates
        .iter()
        .map(|t| t.category.trim().to_lowercase())
        .collect::<HashSet<_>>()
        .len();

    CatalogStats {
        total_templates: templates.len(),
        total_downloads,
        average_rating,
        categories,
    }
}
