//! Input normalization for user-entered URLs

use thiserror::Error;

/// Placeholder the input field is pre-filled with as a hint. Submitting
/// it verbatim must be rejected, not sent to the server.
const URL_PLACEHOLDER: &str = "https://";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("URL input is empty or still the placeholder")]
    Empty,
}

/// Normalize raw user text into a canonical absolute URL string.
///
/// Trims surrounding whitespace and prepends `https://` when no
/// `http://`/`https://` scheme is present (case-insensitive). No further
/// URL-syntax validation happens here: a malformed URL is forwarded to
/// the analysis service, which reports it back as a server error.
pub fn normalize(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() || trimmed == URL_PLACEHOLDER {
        return Err(ValidationError::Empty);
    }

    let lowered = trimmed.to_ascii_lowercase();
    if lowered.starts_with("http://") || lowered.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("https://{trimmed}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_rejected() {
        assert_eq!(normalize(""), Err(ValidationError::Empty));
        assert_eq!(normalize("   "), Err(ValidationError::Empty));
        assert_eq!(normalize("\t\n"), Err(ValidationError::Empty));
    }

    #[test]
    fn test_placeholder_alone_is_rejected() {
        assert_eq!(normalize("https://"), Err(ValidationError::Empty));
        assert_eq!(normalize("  https://  "), Err(ValidationError::Empty));
    }

    #[test]
    fn test_scheme_is_prepended_when_missing() {
        assert_eq!(normalize("example.com").unwrap(), "https://example.com");
        assert_eq!(
            normalize("  example.com/login  ").unwrap(),
            "https://example.com/login"
        );
    }

    #[test]
    fn test_existing_scheme_is_kept() {
        assert_eq!(
            normalize("http://example.com").unwrap(),
            "http://example.com"
        );
        assert_eq!(
            normalize("https://example.com").unwrap(),
            "https://example.com"
        );
    }

    #[test]
    fn test_scheme_check_is_case_insensitive() {
        assert_eq!(
            normalize("HTTPS://Example.com").unwrap(),
            "HTTPS://Example.com"
        );
        assert_eq!(normalize("HTTP://x.y").unwrap(), "HTTP://x.y");
    }

    #[test]
    fn test_placeholder_with_host_is_accepted() {
        assert_eq!(normalize("https://a").unwrap(), "https://a");
    }
}
