//! Keyword filter/sort engine.
//!
//! Pure function from (collection, filter spec) to (filtered + sorted
//! subset, counts). Drives the admin keyword table; recomputed on every
//! input change, no caching and no I/O.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::CoreError;
use crate::keyword::{Keyword, KeywordStatus};

/// Status predicate: a concrete status, or the `"all"` sentinel.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    #[serde(untagged)]
    Only(KeywordStatus),
}

impl FromStr for StatusFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(StatusFilter::All)
        } else {
            s.parse().map(StatusFilter::Only)
        }
    }
}

/// Field to order the table by.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Keyword,
    Volume,
    Difficulty,
    Cpc,
    Status,
}

impl FromStr for SortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keyword" => Ok(SortKey::Keyword),
            "volume" => Ok(SortKey::Volume),
            "difficulty" => Ok(SortKey::Difficulty),
            "cpc" => Ok(SortKey::Cpc),
            "status" => Ok(SortKey::Status),
            other => Err(CoreError::Validation(format!("Unknown sort key: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(CoreError::Validation(format!(
                "Unknown sort order: {other}"
            ))),
        }
    }
}

/// Filter and ordering specification for the keyword table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordFilter {
    pub status: StatusFilter,
    /// Case-insensitive substring match against the keyword text only.
    pub search: String,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
}

/// Filter output plus the counts the UI shows as "N of M results".
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilteredKeywords {
    pub items: Vec<Keyword>,
    /// Pre-filter size of the collection.
    pub total_count: usize,
    /// Post-filter size (equals `items.len()`).
    pub filtered_count: usize,
}

/// Apply `filter` to `keywords`: one linear filter pass (status AND search),
/// then one stable sort. Ties keep input order.
pub fn filter_keywords(keywords: &[Keyword], filter: &KeywordFilter) -> FilteredKeywords {
    let search = filter.search.to_lowercase();

    let mut items: Vec<Keyword> = keywords
        .iter()
        .filter(|k| {
            let matches_status = match filter.status {
                StatusFilter::All => true,
                StatusFilter::Only(status) => k.status == status,
            };
            matches_status && k.keyword.to_lowercase().contains(&search)
        })
        .cloned()
        .collect();

    let filtered_count = items.len();

    items.sort_by(|a, b| {
        let ordering = compare(a, b, filter.sort_by);
        match filter.sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    FilteredKeywords {
        items,
        total_count: keywords.len(),
        filtered_count,
    }
}

fn compare(a: &Keyword, b: &Keyword, key: SortKey) -> Ordering {
    match key {
        SortKey::Keyword => a.keyword.to_lowercase().cmp(&b.keyword.to_lowercase()),
        SortKey::Volume => a.volume.cmp(&b.volume),
        SortKey::Difficulty => a.difficulty.rank().cmp(&b.difficulty.rank()),
        SortKey::Cpc => a.cpc.total_cmp(&b.cpc),
        SortKey::Status => a.status.rank().cmp(&b.status.rank()),
    }
}

/// Per-status tally for the admin dashboard header.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KeywordStatusCounts {
    pub total: usize,
    pub pending: usize,
    pub new: usize,
    pub excel_generated: usize,
    pub seo_generated: usize,
    pub completed: usize,
}

pub fn keyword_status_counts(keywords: &[Keyword]) -> KeywordStatusCounts {
    let mut counts = KeywordStatusCounts {
        total: keywords.len(),
        ..Default::default()
    };
    for keyword in keywords {
        match keyword.status {
            KeywordStatus::Pending => counts.pending += 1,
            KeywordStatus::New => counts.new += 1,
            KeywordStatus::ExcelGenerated => counts.excel_generated += 1,
            KeywordStatus::SeoGenerated => counts.seo_generated += 1,
            KeywordStatus::Completed => counts.completed += 1,
        }
    }
    counts
}
