//! Slug sanitization.
//!
//! Slugs double as URL path segments and as filenames (`<slug>.json` in the
//! data directory), so user-supplied slug text must never reach the
//! filesystem unfiltered.

/// Strip every character outside `[A-Za-z0-9_-]` from a slug.
///
/// The allow-list guarantees the result cannot contain path separators or
/// `..` traversal sequences, so it is safe to join onto the data directory.
/// An input consisting entirely of rejected characters yields an empty
/// string, which callers must treat as "not found".
///
/// # Examples
///
/// ```
/// use sheetstack_core::slug::sanitize_slug;
///
/// assert_eq!(sanitize_slug("fluxo-de-caixa"), "fluxo-de-caixa");
/// assert_eq!(sanitize_slug("../../etc/passwd"), "etcpasswd");
/// assert_eq!(sanitize_slug("!!!"), "");
/// ```
pub fn sanitize_slug(slug: &str) -> String {
    slug.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}
