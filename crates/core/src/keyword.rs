//! Keyword records for the admin content-pipeline table.
//!
//! Keywords move forward through a generation workflow (pending -> excel ->
//! seo -> completed). Nothing here enforces transitions; the admin UI simply
//! reflects whatever status the corpus carries.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CoreError;

/// Workflow status of a keyword.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum KeywordStatus {
    Pending,
    New,
    ExcelGenerated,
    SeoGenerated,
    Completed,
}

impl KeywordStatus {
    /// Workflow progression rank, used for status sorting.
    ///
    /// This is deliberately NOT alphabetical: "completed" must sort after
    /// "excel_generated" even though it precedes it lexically.
    pub fn rank(self) -> u8 {
        match self {
            KeywordStatus::Pending => 0,
            KeywordStatus::New => 1,
            KeywordStatus::ExcelGenerated => 2,
            KeywordStatus::SeoGenerated => 3,
            KeywordStatus::Completed => 4,
        }
    }
}

impl FromStr for KeywordStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(KeywordStatus::Pending),
            "new" => Ok(KeywordStatus::New),
            "excel_generated" => Ok(KeywordStatus::ExcelGenerated),
            "seo_generated" => Ok(KeywordStatus::SeoGenerated),
            "completed" => Ok(KeywordStatus::Completed),
            other => Err(CoreError::Validation(format!(
                "Unknown keyword status: {other}"
            ))),
        }
    }
}

/// SEO difficulty bucket, ranked for sorting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum KeywordDifficulty {
    Easy,
    Medium,
    Hard,
}

impl KeywordDifficulty {
    pub fn rank(self) -> u8 {
        match self {
            KeywordDifficulty::Easy => 0,
            KeywordDifficulty::Medium => 1,
            KeywordDifficulty::Hard => 2,
        }
    }
}

/// A single keyword row in the admin table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Keyword {
    pub id: String,
    pub keyword: String,
    /// Monthly search volume.
    pub volume: u32,
    pub difficulty: KeywordDifficulty,
    /// Cost per click, in the ad platform's currency.
    pub cpc: f64,
    pub status: KeywordStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excel_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_url: Option<String>,
}
