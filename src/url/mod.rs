//! Fragment normalization and URL construction
//!
//! A fragment is the normalized identity of one input row's URL field
//! (e.g. `walmart.com`). It is the key used for deduplication, artifact
//! file naming, and result storage.

/// Normalizes a raw URL field into a fragment
///
/// # Normalization Steps
///
/// 1. Trim surrounding whitespace
/// 2. Reject blank input (`None`)
/// 3. Strip exactly one trailing `/` if present
/// 4. Reject the result if nothing remains (a bare `/` row is blank,
///    not a fragment)
///
/// Pure and total; no I/O. Idempotent in the sense that re-normalizing an
/// already-normalized fragment with a trailing slash re-appended yields the
/// same fragment.
///
/// # Examples
///
/// ```
/// use pagegrep::url::normalize_fragment;
///
/// assert_eq!(normalize_fragment("walmart.com/"), Some("walmart.com".to_string()));
/// assert_eq!(normalize_fragment("   "), None);
/// ```
pub fn normalize_fragment(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let fragment = trimmed.strip_suffix('/').unwrap_or(trimmed);
    if fragment.is_empty() {
        return None;
    }
    Some(fragment.to_string())
}

/// Builds the fetch URL for a fragment
///
/// Fragments usually carry no scheme (`walmart.com`); those get `http://`
/// prepended. Fragments that already start with a scheme are left alone.
pub fn fragment_url(fragment: &str) -> String {
    if fragment.starts_with("http://") || fragment.starts_with("https://") {
        fragment.to_string()
    } else {
        format!("http://{}", fragment)
    }
}

/// Maps a fragment to a flat file name stem
///
/// Fragments may contain path separators or port colons
/// (`host:8080/path`); every character outside `[A-Za-z0-9._-]` becomes
/// `_` so each fragment has one deterministic artifact name under the
/// raw/ and text/ folders.
pub fn artifact_stem(fragment: &str) -> String {
    fragment
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_trailing_slash() {
        assert_eq!(
            normalize_fragment("walmart.com/"),
            Some("walmart.com".to_string())
        );
    }

    #[test]
    fn test_no_trailing_slash_unchanged() {
        assert_eq!(
            normalize_fragment("walmart.com"),
            Some("walmart.com".to_string())
        );
    }

    #[test]
    fn test_only_one_slash_stripped() {
        assert_eq!(
            normalize_fragment("walmart.com//"),
            Some("walmart.com/".to_string())
        );
    }

    #[test]
    fn test_blank_rejected() {
        assert_eq!(normalize_fragment(""), None);
        assert_eq!(normalize_fragment("   "), None);
        assert_eq!(normalize_fragment("\t\n"), None);
    }

    #[test]
    fn test_slash_only_rejected() {
        assert_eq!(normalize_fragment("/"), None);
        assert_eq!(normalize_fragment("  /  "), None);
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(
            normalize_fragment("  google.com  "),
            Some("google.com".to_string())
        );
    }

    #[test]
    fn test_normalization_idempotent() {
        let normalized = normalize_fragment("example.com/").unwrap();
        let renormalized = normalize_fragment(&format!("{}/", normalized)).unwrap();
        assert_eq!(normalized, renormalized);
    }

    #[test]
    fn test_fragment_url_prepends_scheme() {
        assert_eq!(fragment_url("walmart.com"), "http://walmart.com");
    }

    #[test]
    fn test_fragment_url_keeps_existing_scheme() {
        assert_eq!(fragment_url("http://walmart.com"), "http://walmart.com");
        assert_eq!(fragment_url("https://walmart.com"), "https://walmart.com");
    }

    #[test]
    fn test_artifact_stem_plain_domain() {
        assert_eq!(artifact_stem("walmart.com"), "walmart.com");
    }

    #[test]
    fn test_artifact_stem_sanitizes_separators() {
        assert_eq!(
            artifact_stem("127.0.0.1:8080/page"),
            "127.0.0.1_8080_page"
        );
    }
}
