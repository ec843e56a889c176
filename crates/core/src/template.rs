//! Template records: the raw on-disk JSON shape and its normalized form.
//!
//! Template JSON files are produced by an external content-generation
//! pipeline and are loosely typed: from the loader's perspective every field
//! is optional. Normalization applies the fallback chains so downstream
//! page rendering never sees a record without a slug or a title.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::metrics::{popularity_score, MetricsPolicy};

/// Category label applied when a record carries none.
pub const DEFAULT_CATEGORY: &str = "geral";

/// Structured body content rendered into the template detail page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateContent {
    pub introduction: String,
    pub benefits: Vec<String>,
    pub how_to_use: String,
    pub features: Vec<String>,
    pub conclusions: String,
}

/// A question/answer pair rendered into the FAQ section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TemplateFaq {
    pub question: String,
    pub answer: String,
}

/// One SEO body section (anchor id, heading, copy).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SeoSection {
    pub id: String,
    pub title: String,
    pub content: String,
}

/// Optional long-form SEO content block.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SeoContent {
    pub sections: Vec<SeoSection>,
}

/// The raw, loosely-typed shape of a template JSON file.
///
/// Everything is optional; [`Template::from_raw`] applies defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawTemplate {
    pub slug: Option<String>,
    pub keyword: Option<String>,
    pub category: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub h1: Option<String>,
    pub excel_url: Option<String>,
    pub download_count: Option<u32>,
    pub rating: Option<f64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub content: Option<TemplateContent>,
    pub features: Option<Vec<String>>,
    pub faqs: Option<Vec<TemplateFaq>>,
    pub seo_content: Option<SeoContent>,
}

/// A normalized template record.
///
/// Invariant: `slug` and `title` are always non-empty.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    pub category: String,
    pub title: String,
    pub description: String,
    pub meta_title: String,
    pub meta_description: String,
    pub h1: String,
    /// Absent while the downloadable file is still in preparation. Gates
    /// whether download UI renders at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excel_url: Option<String>,
    pub download_count: u32,
    pub rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub content: TemplateContent,
    pub features: Vec<String>,
    pub faqs: Vec<TemplateFaq>,
    pub seo_content: SeoContent,
}

impl Template {
    /// Normalize a raw record.
    ///
    /// Fallback chains:
    /// - `slug`: record field, else `file_stem` (the JSON filename without
    ///   extension)
    /// - `title`: record field, else `keyword`, else the slug
    /// - `description`: record field, else `content.introduction`
    /// - `meta_title` / `h1`: else `title`; `meta_description`: else
    ///   `description`
    /// - `download_count` / `rating`: else synthesized by `policy`
    ///
    /// Returns `None` only when no usable slug exists (both the field and
    /// the file stem are empty after trimming), which would otherwise
    /// produce broken links downstream.
    pub fn from_raw(raw: RawTemplate, file_stem: &str, policy: &MetricsPolicy) -> Option<Self> {
        let slug = non_empty(raw.slug).unwrap_or_else(|| file_stem.trim().to_string());
        if slug.is_empty() {
            return None;
        }

        let keyword = non_empty(raw.keyword);
        let title = non_empty(raw.title)
            .or_else(|| keyword.clone())
            .unwrap_or_else(|| slug.clone());

        let content = raw.content.unwrap_or_default();
        let description = non_empty(raw.description).unwrap_or_else(|| content.introduction.clone());

        let meta_title = non_empty(raw.meta_title).unwrap_or_else(|| title.clone());
        let meta_description =
            non_empty(raw.meta_description).unwrap_or_else(|| description.clone());
        let h1 = non_empty(raw.h1).unwrap_or_else(|| title.clone());

        let category = non_empty(raw.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

        let download_count = raw
            .download_count
            .unwrap_or_else(|| policy.download_count(&slug));
        let rating = raw.rating.unwrap_or_else(|| policy.rating(&slug));

        Some(Self {
            slug,
            keyword,
            category,
            title,
            description,
            meta_title,
            meta_description,
            h1,
            excel_url: non_empty(raw.excel_url),
            download_count,
            rating,
            created_at: raw.created_at.as_deref().and_then(parse_timestamp),
            updated_at: raw.updated_at.as_deref().and_then(parse_timestamp),
            content,
            features: raw.features.unwrap_or_default(),
            faqs: raw.faqs.unwrap_or_default(),
            seo_content: raw.seo_content.unwrap_or_default(),
        })
    }

    /// Case-insensitive, trimmed category match.
    pub fn matches_category(&self, category: &str) -> bool {
        self.category.trim().eq_ignore_ascii_case(category.trim())
    }

    /// Composite featured-section score (0.7 x rating + 0.3 x downloads/1000).
    pub fn popularity_score(&self) -> f64 {
        popularity_score(self.rating, self.download_count)
    }

    /// Descending recency ordering. Records without a `created_at` sort
    /// last so that sort-by-recency is deterministic across loads.
    pub fn cmp_by_recency(&self, other: &Self) -> Ordering {
        match (self.created_at, other.created_at) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }

    /// Descending popularity ordering (featured sections).
    pub fn cmp_by_popularity(&self, other: &Self) -> Ordering {
        other
            .popularity_score()
            .total_cmp(&self.popularity_score())
    }

    /// Rating-then-downloads descending ordering (related templates).
    pub fn cmp_by_rating(&self, other: &Self) -> Ordering {
        other
            .rating
            .total_cmp(&self.rating)
            .then_with(|| other.download_count.cmp(&self.download_count))
    }
}

/// ISO-8601 / RFC 3339 timestamp parse; anything unparsable counts as
/// missing rather than failing the record.
fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> MetricsPolicy {
        MetricsPolicy::default()
    }

    #[test]
    fn slug_falls_back_to_file_stem() {
        let raw = RawTemplate {
            title: Some("Fluxo de Caixa".into()),
            ..Default::default()
        };
        let t = Template::from_raw(raw, "fluxo-de-caixa", &policy()).unwrap();
        assert_eq!(t.slug, "fluxo-de-caixa");
    }

    #[test]
    fn no_usable_slug_is_rejected() {
        let raw = RawTemplate::default();
        assert!(Template::from_raw(raw, "  ", &policy()).is_none());
    }

    #[test]
    fn title_falls_back_to_keyword_then_slug() {
        let raw = RawTemplate {
            keyword: Some("planilha de vendas".into()),
            ..Default::default()
        };
        let t = Template::from_raw(raw, "planilha-vendas", &policy()).unwrap();
        assert_eq!(t.title, "planilha de vendas");

        let bare = Template::from_raw(RawTemplate::default(), "so-slug", &policy()).unwrap();
        assert_eq!(bare.title, "so-slug");
    }

    #[test]
    fn meta_fields_chain_through_title_and_description() {
        let raw = RawTemplate {
            title: Some("Controle de Estoque".into()),
            content: Some(TemplateContent {
                introduction: "Controle entradas e saidas.".into(),
                ..Default::default()
            }),
            ..Default::default()
        };
        let t = Template::from_raw(raw, "controle-estoque", &policy()).unwrap();
        assert_eq!(t.meta_title, "Controle de Estoque");
        assert_eq!(t.h1, "Controle de Estoque");
        assert_eq!(t.description, "Controle entradas e saidas.");
        assert_eq!(t.meta_description, "Controle entradas e saidas.");
    }

    #[test]
    fn explicit_metrics_are_kept() {
        let raw = RawTemplate {
            title: Some("t".into()),
            download_count: Some(42),
            rating: Some(4.0),
            ..Default::default()
        };
        let t = Template::from_raw(raw, "t", &policy()).unwrap();
        assert_eq!(t.download_count, 42);
        assert_eq!(t.rating, 4.0);
    }

    #[test]
    fn missing_metrics_are_synthesized_in_range() {
        let t = Template::from_raw(RawTemplate::default(), "qualquer", &policy()).unwrap();
        assert!((100..=1100).contains(&t.download_count));
        assert!((4.5..=4.9).contains(&t.rating));

        // Same slug, same synthesized values.
        let again = Template::from_raw(RawTemplate::default(), "qualquer", &policy()).unwrap();
        assert_eq!(t.download_count, again.download_count);
        assert_eq!(t.rating, again.rating);
    }

    #[test]
    fn bad_timestamp_counts_as_missing() {
        let raw = RawTemplate {
            created_at: Some("not-a-date".into()),
            updated_at: Some("2024-03-01T10:00:00Z".into()),
            ..Default::default()
        };
        let t = Template::from_raw(raw, "datas", &policy()).unwrap();
        assert!(t.created_at.is_none());
        assert!(t.updated_at.is_some());
    }

    #[test]
    fn recency_puts_undated_records_last() {
        let dated = Template::from_raw(
            RawTemplate {
                created_at: Some("2024-01-01T00:00:00Z".into()),
                ..Default::default()
            },
            "dated",
            &policy(),
        )
        .unwrap();
        let undated = Template::from_raw(RawTemplate::default(), "undated", &policy()).unwrap();

        assert_eq!(dated.cmp_by_recency(&undated), Ordering::Less);
        assert_eq!(undated.cmp_by_recency(&dated), Ordering::Greater);
    }

    #[test]
    fn category_match_is_case_insensitive_and_trimmed() {
        let raw = RawTemplate {
            category: Some(" Financeiro ".into()),
            ..Default::default()
        };
        let t = Template::from_raw(raw, "caixa", &policy()).unwrap();
        assert!(t.matches_category("financeiro"));
        assert!(t.matches_category("FINANCEIRO"));
        assert!(!t.matches_category("vendas"));
    }

    #[test]
    fn popularity_prefers_rating_over_downloads() {
        let raw_high_rating = RawTemplate {
            rating: Some(5.0),
            download_count: Some(0),
            ..Default::default()
        };
        let raw_high_downloads = RawTemplate {
            rating: Some(4.5),
            download_count: Some(100),
            ..Default::default()
        };
        let a = Template::from_raw(raw_high_rating, "a", &policy()).unwrap();
        let b = Template::from_raw(raw_high_downloads, "b", &policy()).unwrap();
        assert_eq!(a.cmp_by_popularity(&b), Ordering::Less);
    }

    #[test]
    fn camel_case_json_round_trips_into_raw() {
        let json = r#"{
            "slug": "fluxo-de-caixa",
            "metaTitle": "Fluxo de Caixa Gratis",
            "excelUrl": "/downloads/fluxo.xlsx",
            "downloadCount": 321,
            "seoContent": { "sections": [{ "id": "intro", "title": "Intro", "content": "..." }] }
        }"#;
        let raw: RawTemplate = serde_json::from_str(json).unwrap();
        assert_eq!(raw.meta_title.as_deref(), Some("Fluxo de Caixa Gratis"));
        assert_eq!(raw.download_count, Some(321));
        assert_eq!(raw.seo_content.unwrap().sections.len(), 1);
    }
}
