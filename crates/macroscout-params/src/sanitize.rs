// SPDX-License-Identifier: Apache-2.0

use regex::Regex;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

/// Maximum accepted search query length, in characters.
pub const QUERY_MAX_CHARS: usize = 100;

fn markup_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"<[^>]*>|[<>]").expect("static pattern"))
}

/// Strips markup-like substrings, trims, and truncates to
/// [`QUERY_MAX_CHARS`] on a char boundary. Returns `None` when nothing
/// survives. The repaired value differing from the input is the caller's
/// invalid-parameter signal.
#[must_use]
pub fn sanitize_search_query(raw: &str) -> Option<String> {
    let stripped = markup_pattern().replace_all(raw, "");
    let trimmed = stripped.trim();
    if trimmed.is_empty() {
        return None;
    }
    let truncated: String = trimmed.chars().take(QUERY_MAX_CHARS).collect();
    // Truncation can expose trailing whitespace; the cleaned form must be
    // a fixed point of this function.
    let truncated = truncated.trim_end();
    if truncated.is_empty() {
        return None;
    }
    Some(truncated.to_string())
}

/// Canonical lookup form of a search query: NFKC + Unicode lowercase, the
/// same normalization the search collaborator indexes under.
#[must_use]
pub fn normalize_query_lookup(input: &str) -> String {
    input.nfkc().collect::<String>().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_stray_angle_brackets() {
        assert_eq!(
            sanitize_search_query("whey <script>alert(1)</script> isolate"),
            Some("whey alert(1) isolate".to_string())
        );
        assert_eq!(sanitize_search_query("5g < protein"), Some("5g  protein".to_string()));
    }

    #[test]
    fn empty_after_cleaning_is_none() {
        assert_eq!(sanitize_search_query("   "), None);
        assert_eq!(sanitize_search_query("<b></b>"), None);
    }

    #[test]
    fn truncates_on_char_boundary() {
        let raw = "프".repeat(QUERY_MAX_CHARS + 20);
        let cleaned = sanitize_search_query(&raw).expect("non-empty");
        assert_eq!(cleaned.chars().count(), QUERY_MAX_CHARS);
    }

    #[test]
    fn lookup_form_folds_width_and_case() {
        assert_eq!(normalize_query_lookup("ＷＨＥＹ Gold"), "whey gold");
    }
}
