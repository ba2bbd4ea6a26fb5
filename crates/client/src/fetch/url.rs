//! URL canonicalization for consistent cache keys.

/// Error type for URL canonicalization failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum UrlError {
    #[error("empty URL")]
    Empty,

    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// Canonicalize a URL string into a cache key.
///
/// Normalization steps:
/// 1. Trim leading/trailing whitespace
/// 2. Default scheme to https:// if missing
/// 3. Lowercase the host
/// 4. Remove fragment (#...)
/// 5. Keep query string intact (do not reorder)
/// 6. Apply `port` if given; otherwise the scheme default (443/80) applies
///
/// Default ports are never written into the result, so `https://host:443/`
/// and `https://host/` produce the same key.
pub fn canonicalize(input: &str, port: Option<u16>) -> Result<url::Url, UrlError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(UrlError::Empty);
    }

    let url_str = if trimmed.contains("://") { trimmed.to_string() } else { format!("https://{trimmed}") };

    let mut parsed = url::Url::parse(&url_str).map_err(|e| UrlError::InvalidUrl(e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => return Err(UrlError::UnsupportedScheme(scheme.to_string())),
    }

    if let Some(mut host) = parsed.host_str() {
        let h = host.to_lowercase();
        host = h.as_str();
        parsed
            .set_host(Some(host))
            .map_err(|e| UrlError::InvalidUrl(e.to_string()))?;
    }

    parsed.set_fragment(None);

    match port {
        Some(port) => {
            parsed
                .set_port(Some(port))
                .map_err(|()| UrlError::InvalidUrl(format!("cannot set port {port}")))?;
        }
        None if parsed.port().is_none() => {
            tracing::info!(
                scheme = parsed.scheme(),
                port = parsed.port_or_known_default(),
                "defaulting to scheme port"
            );
        }
        None => {}
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize_basic() {
        let url = canonicalize("https://example.com", None).unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("example.com"));
        assert_eq!(url.as_str(), "https://example.com/");
    }

    #[test]
    fn test_canonicalize_default_scheme() {
        let url = canonicalize("example.com", None).unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn test_canonicalize_lowercase_host() {
        let url = canonicalize("https://EXAMPLE.COM", None).unwrap();
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn test_canonicalize_remove_fragment() {
        let url = canonicalize("https://example.com#section", None).unwrap();
        assert_eq!(url.fragment(), None);
        assert_eq!(url.path(), "/");
    }

    #[test]
    fn test_canonicalize_preserve_query() {
        let url = canonicalize("https://example.com?a=1&b=2", None).unwrap();
        assert_eq!(url.query(), Some("a=1&b=2"));
    }

    #[test]
    fn test_canonicalize_trim_whitespace() {
        let url = canonicalize("  https://example.com  ", None).unwrap();
        assert_eq!(url.as_str(), "https://example.com/");
    }

    #[test]
    fn test_canonicalize_unsupported_scheme() {
        let result = canonicalize("file:///etc/passwd", None);
        assert!(matches!(result, Err(UrlError::UnsupportedScheme(_))));
    }

    #[test]
    fn test_canonicalize_unsupported_scheme_with_port() {
        let result = canonicalize("ftp://example.com", Some(21));
        assert!(matches!(result, Err(UrlError::UnsupportedScheme(_))));
    }

    #[test]
    fn test_canonicalize_empty() {
        let result = canonicalize("", None);
        assert!(matches!(result, Err(UrlError::Empty)));
    }

    #[test]
    fn test_canonicalize_whitespace_only() {
        let result = canonicalize("   ", None);
        assert!(matches!(result, Err(UrlError::Empty)));
    }

    #[test]
    fn test_canonicalize_invalid() {
        let result = canonicalize("https://exa mple.com", None);
        assert!(matches!(result, Err(UrlError::InvalidUrl(_))));
    }

    #[test]
    fn test_canonicalize_http_allowed() {
        let url = canonicalize("http://example.com", None).unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.port_or_known_default(), Some(80));
    }

    #[test]
    fn test_canonicalize_port_override() {
        let url = canonicalize("https://example.com/a", Some(8443)).unwrap();
        assert_eq!(url.as_str(), "https://example.com:8443/a");
    }

    #[test]
    fn test_canonicalize_port_override_replaces_existing() {
        let url = canonicalize("http://example.com:8080/a", Some(9090)).unwrap();
        assert_eq!(url.port(), Some(9090));
    }

    #[test]
    fn test_canonicalize_default_port_is_elided() {
        let explicit = canonicalize("https://example.com:443/a", None).unwrap();
        let overridden = canonicalize("https://example.com/a", Some(443)).unwrap();
        let implicit = canonicalize("https://example.com/a", None).unwrap();
        assert_eq!(explicit, implicit);
        assert_eq!(overridden, implicit);
    }

    #[test]
    fn test_canonicalize_complex_path() {
        let url = canonicalize("https://example.com/path/to/resource?query=value#fragment", None).unwrap();
        assert_eq!(url.path(), "/path/to/resource");
        assert_eq!(url.query(), Some("query=value"));
        assert_eq!(url.fragment(), None);
    }
}
