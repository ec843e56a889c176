use std::path::{Path, PathBuf};

use sheetstack_core::metrics::MetricsPolicy;
use sheetstack_core::slug::sanitize_slug;
use sheetstack_core::stats::{catalog_stats, CatalogStats};
use sheetstack_core::template::{RawTemplate, Template};

/// Filename reserved for the admin keyword corpus; never a template.
const KEYWORDS_FILE: &str = "keywords.json";

/// Read-only query interface over the template data directory.
///
/// All operations swallow I/O and parse failures: a bulk load skips the
/// offending file with a warning, a single-record load returns `None`.
/// Nothing here returns an error to the caller.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    data_dir: PathBuf,
    policy: MetricsPolicy,
}

impl TemplateStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            policy: MetricsPolicy::default(),
        }
    }

    /// Override the synthesized-metrics policy (e.g. a fixed base seed per
    /// deployment so display numbers stay stable across releases).
    pub fn with_policy(mut self, policy: MetricsPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load every well-formed template in the data directory, sorted by
    /// recency descending (records without a `createdAt` last).
    ///
    /// Partial success is the contract: a file that fails to read or parse
    /// is logged and skipped, never aborting the load. A missing data
    /// directory yields an empty catalog.
    pub async fn load_all(&self) -> Vec<Template> {
        let mut entries = match tokio::fs::read_dir(&self.data_dir).await {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(dir = %self.data_dir.display(), %err, "Data directory not readable, catalog is empty");
                return Vec::new();
            }
        };

        let mut templates = Vec::new();
        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(err) => {
                    tracing::warn!(dir = %self.data_dir.display(), %err, "Stopped scanning data directory");
                    break;
                }
            };

            let path = entry.path();
            let Some(stem) = json_file_stem(&path) else {
                continue;
            };
            if path.file_name().and_then(|n| n.to_str()) == Some(KEYWORDS_FILE) {
                continue;
            }
            if let Some(template) = self.read_template(&path, stem).await {
                templates.push(template);
            }
        }

        templates.sort_by(|a, b| a.cmp_by_recency(b));
        templates
    }

    /// Templates whose category label matches `category` case-insensitively.
    pub async fn load_by_category(&self, category: &str) -> Vec<Template> {
        self.load_all()
            .await
            .into_iter()
            .filter(|t| t.matches_category(category))
            .collect()
    }

    /// Load a single template by slug.
    ///
    /// The slug is passed through the allow-list sanitizer before touching
    /// the filesystem, so traversal input (`../../etc/passwd`) cannot
    /// escape the data directory. Missing file, empty file, and malformed
    /// JSON all resolve to `None` -- "not found", never an error.
    pub async fn load_by_slug(&self, slug: &str) -> Option<Template> {
        let sanitized = sanitize_slug(slug);
        if sanitized.is_empty() {
            tracing::warn!(slug, "Rejected slug with no valid characters");
            return None;
        }

        let path = self.data_dir.join(format!("{sanitized}.json"));
        self.read_template(&path, &sanitized).await
    }

    /// The `n` most recent templates.
    pub async fn load_latest(&self, n: usize) -> Vec<Template> {
        let mut templates = self.load_all().await;
        templates.truncate(n);
        templates
    }

    /// The `n` highest-scoring templates by popularity
    /// (`rating * 0.7 + downloads/1000 * 0.3`). Used for featured sections.
    pub async fn load_featured(&self, n: usize) -> Vec<Template> {
        let mut templates = self.load_all().await;
        templates.sort_by(|a, b| a.cmp_by_popularity(b));
        templates.truncate(n);
        templates
    }

    /// Up to `n` templates in the same category, excluding `slug` itself,
    /// ordered by rating then download count.
    pub async fn load_related(&self, slug: &str, category: &str, n: usize) -> Vec<Template> {
        let mut related: Vec<Template> = self
            .load_by_category(category)
            .await
            .into_iter()
            .filter(|t| t.slug != slug)
            .collect();
        related.sort_by(|a, b| a.cmp_by_rating(b));
        related.truncate(n);
        related
    }

    /// Aggregate display statistics over the whole catalog.
    pub async fn stats(&self) -> CatalogStats {
        catalog_stats(&self.load_all().await)
    }

    async fn read_template(&self, path: &Path, stem: &str) -> Option<Template> {
        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(err) => {
                tracing::debug!(path = %path.display(), %err, "Template file not readable");
                return None;
            }
        };

        if content.trim().is_empty() {
            tracing::warn!(path = %path.display(), "Template file is empty, skipping");
            return None;
        }

        let raw: RawTemplate = match serde_json::from_str(&content) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "Template file is not valid JSON, skipping");
                return None;
            }
        };

        Template::from_raw(raw, stem, &self.policy)
    }
}

/// File stem for `*.json` files; `None` for anything else.
fn json_file_stem(path: &Path) -> Option<&str> {
    if path.extension().and_then(|e| e.to_str()) != Some("json") {
        return None;
    }
    path.file_stem().and_then(|s| s.to_str())
}
