//! Normalization of user-submitted page URLs.
//!
//! Users often type `example.com/docs` instead of a full URL. The page form
//! accepts that and stores `http://example.com/docs`.

use url::Url;

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Enter a valid URL.")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS URLs are allowed.")]
    UnsupportedProtocol,

    #[error("Enter a URL.")]
    Empty,
}

/// Normalizes a page URL submitted through a form.
///
/// # Normalization Rules
///
/// 1. Surrounding whitespace is trimmed
/// 2. `http://` is prepended when the URL starts with neither `http://` nor `https://`
/// 3. The result must parse as an absolute URL with a host
///
/// The URL text is otherwise stored as typed: no case folding, no trailing
/// slash insertion.
///
/// # Errors
///
/// Returns [`UrlNormalizationError::Empty`] for blank input.
/// Returns [`UrlNormalizationError::InvalidFormat`] for malformed URLs.
/// Returns [`UrlNormalizationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     normalize_page_url("www.djangoproject.com").unwrap(),
///     "http://www.djangoproject.com"
/// );
///
/// assert_eq!(
///     normalize_page_url("https://docs.python.org/3/").unwrap(),
///     "https://docs.python.org/3/"
/// );
/// ```
pub fn normalize_page_url(input: &str) -> Result<String, UrlNormalizationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlNormalizationError::Empty);
    }

    let lower = trimmed.to_ascii_lowercase();
    let candidate = if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else if lower.contains("://") || has_opaque_scheme(trimmed) {
        return Err(UrlNormalizationError::UnsupportedProtocol);
    } else {
        format!("http://{trimmed}")
    };

    let url =
        Url::parse(&candidate).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlNormalizationError::InvalidFormat(
            "missing host".to_string(),
        ));
    }

    Ok(candidate)
}

/// Detects `scheme:rest` forms such as `mailto:` or `javascript:`.
///
/// `host:port` also parses as a scheme, so a colon followed by a digit is
/// left alone.
fn has_opaque_scheme(input: &str) -> bool {
    if Url::parse(input).is_err() {
        return false;
    }

    input
        .split_once(':')
        .is_some_and(|(_, rest)| !rest.starts_with(|c: char| c.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_http_url() {
        let result = normalize_page_url("http://www.python.org/");
        assert_eq!(result.unwrap(), "http://www.python.org/");
    }

    #[test]
    fn test_keeps_https_url() {
        let result = normalize_page_url("https://docs.djangoproject.com/en/stable/");
        assert_eq!(result.unwrap(), "https://docs.djangoproject.com/en/stable/");
    }

    #[test]
    fn test_prepends_http_when_scheme_missing() {
        let result = normalize_page_url("bottlepy.org/docs/dev/");
        assert_eq!(result.unwrap(), "http://bottlepy.org/docs/dev/");
    }

    #[test]
    fn test_trims_whitespace() {
        let result = normalize_page_url("  flask.pocoo.org  ");
        assert_eq!(result.unwrap(), "http://flask.pocoo.org");
    }

    #[test]
    fn test_uppercase_scheme_is_kept() {
        let result = normalize_page_url("HTTP://EXAMPLE.COM/Path");
        assert_eq!(result.unwrap(), "HTTP://EXAMPLE.COM/Path");
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            normalize_page_url("   "),
            Err(UrlNormalizationError::Empty)
        ));
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert!(matches!(
            normalize_page_url("ftp://example.com/file"),
            Err(UrlNormalizationError::UnsupportedProtocol)
        ));
        assert!(matches!(
            normalize_page_url("javascript://alert(1)"),
            Err(UrlNormalizationError::UnsupportedProtocol)
        ));
        assert!(matches!(
            normalize_page_url("mailto:someone@example.com"),
            Err(UrlNormalizationError::UnsupportedProtocol)
        ));
        assert!(matches!(
            normalize_page_url("javascript:alert(1)"),
            Err(UrlNormalizationError::UnsupportedProtocol)
        ));
    }

    #[test]
    fn test_host_with_port_gets_scheme() {
        let result = normalize_page_url("localhost:8000/docs");
        assert_eq!(result.unwrap(), "http://localhost:8000/docs");
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            normalize_page_url("http://"),
            Err(UrlNormalizationError::InvalidFormat(_))
        ));
        assert!(matches!(
            normalize_page_url("not a url at all"),
            Err(UrlNormalizationError::InvalidFormat(_))
        ));
    }
}
