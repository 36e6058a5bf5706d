//! Slug text normalization.

/// Normalizes free text into a URL-safe slug.
///
/// Unicode-lowercases, collapses every run of non-alphanumeric characters
/// into a single `-`, strips leading and trailing separators, and truncates
/// to at most `max_length` characters.
pub fn normalize_slug(source: &str, max_length: usize) -> String {
    let mut slug = String::new();
    let mut pending_separator = false;
    for ch in source.chars() {
        if ch.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            for lowered in ch.to_lowercase() {
                // Lowercasing can expand to combining marks; keep the slug
                // alphanumeric-only.
                if lowered.is_alphanumeric() {
                    slug.push(lowered);
                }
            }
        } else {
            pending_separator = true;
        }
    }
    let truncated: String = slug.chars().take(max_length).collect();
    truncated.trim_end_matches('-').to_string()
}

/// True when `text` already is a normalized slug.
pub fn is_normalized_slug(text: &str) -> bool {
    !text.is_empty() && normalize_slug(text, text.chars().count()) == text
}
