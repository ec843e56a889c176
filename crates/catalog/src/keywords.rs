use std::path::Path;

use sheetstack_core::keyword::Keyword;

/// Load the admin keyword corpus from `<data_dir>/keywords.json`.
///
/// The file holds a JSON array of keyword records. Same swallow-and-default
/// policy as the template loader: missing file or malformed JSON yields an
/// empty list, never an error.
pub async fn load_keywords(data_dir: &Path) -> Vec<Keyword> {
    let path = data_dir.join("keywords.json");

    let content = match tokio::fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "Keyword corpus not readable, list is empty");
            return Vec::new();
        }
    };

    match serde_json::from_str(&content) {
        Ok(keywords) => keywords,
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "Keyword corpus is not valid JSON, list is empty");
            Vec::new()
        }
    }
}
