//! Canonicalization for user-supplied link URLs.

/// Makes a user-supplied URL absolute and scheme-qualified.
///
/// Total over every input string: an existing `http://` or `https://` prefix
/// is kept as-is, a protocol-relative `//` gets `https:` prepended, anything
/// else gets `https://` prepended (the empty string becomes `https://`).
pub fn normalize_url(raw: &str) -> String {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        return raw.to_string();
    }

    if raw.starts_with("//") {
        return format!("https:{raw}");
    }

    format!("https://{raw}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_host_gets_https_scheme() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
        assert_eq!(normalize_url("example.com/me?tab=repos"), "https://example.com/me?tab=repos");
    }

    #[test]
    fn protocol_relative_url_gets_https() {
        assert_eq!(normalize_url("//example.com"), "https://example.com");
    }

    #[test]
    fn scheme_qualified_urls_pass_through() {
        assert_eq!(normalize_url("http://x"), "http://x");
        assert_eq!(normalize_url("https://example.com/a"), "https://example.com/a");
    }

    #[test]
    fn empty_input_is_defined() {
        assert_eq!(normalize_url(""), "https://");
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in ["example.com", "//example.com", "http://x", "https://y", "", "ftp.example.com"] {
            let once = normalize_url(raw);
            assert_eq!(normalize_url(&once), once);
        }
    }
}
