//! Title slug helper.

/// Converts a title into a lowercase hyphenated URL slug.
///
/// Alphanumeric runs are kept, everything else collapses into a single
/// hyphen; leading and trailing hyphens are trimmed.
#[must_use]
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_separator = false;

    for ch in input.chars() {
        if ch.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            for lower in ch.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_separator = true;
        }
    }

    slug
}
