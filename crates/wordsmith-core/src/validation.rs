//! Synchronous field validation for the settings form

use thiserror::Error;

/// Why a base URL was rejected. The display text is shown under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BaseUrlError {
    #[error("Base Url cannot be empty.")]
    Empty,

    #[error("Base Url should start with http:// or https://")]
    MissingScheme,

    #[error("Base Url should not end with /")]
    TrailingSlash,
}

/// Validate a provider base URL.
///
/// Runs on every edit, so it must stay cheap and allocation-free.
pub fn validate_base_url(value: &str) -> Result<(), BaseUrlError> {
    if value.trim().is_empty() {
        return Err(BaseUrlError::Empty);
    }
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(BaseUrlError::MissingScheme);
    }
    if value.ends_with('/') {
        return Err(BaseUrlError::TrailingSlash);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_rejected() {
        assert_eq!(validate_base_url(""), Err(BaseUrlError::Empty));
        assert_eq!(validate_base_url("   \t"), Err(BaseUrlError::Empty));
        assert!(BaseUrlError::Empty.to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_wrong_scheme_is_rejected() {
        assert_eq!(validate_base_url("ftp://x"), Err(BaseUrlError::MissingScheme));
        assert_eq!(validate_base_url("localhost:8080"), Err(BaseUrlError::MissingScheme));
        assert_eq!(
            BaseUrlError::MissingScheme.to_string(),
            "Base Url should start with http:// or https://"
        );
    }

    #[test]
    fn test_trailing_slash_is_rejected() {
        assert_eq!(validate_base_url("http://x/"), Err(BaseUrlError::TrailingSlash));
        assert_eq!(
            validate_base_url("https://api.example.com/v1/"),
            Err(BaseUrlError::TrailingSlash)
        );
        assert_eq!(
            BaseUrlError::TrailingSlash.to_string(),
            "Base Url should not end with /"
        );
    }

    #[test]
    fn test_valid_urls() {
        assert_eq!(validate_base_url("http://x"), Ok(()));
        assert_eq!(validate_base_url("https://api.openai.com/v1"), Ok(()));
        assert_eq!(validate_base_url("http://127.0.0.1:11434"), Ok(()));
    }
}
