use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Rate limited: retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Repository not found: {0}")]
    NotFound(String),

    #[error("Unexpected status: {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    #[error("Failed to parse tag list: {0}")]
    Parse(String),
}

impl RegistryError {
    /// Returns true when the response arrived but its body could not be decoded.
    ///
    /// Every other variant is a fetch failure.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, RegistryError::Parse(_))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("Repository reference is empty")]
    Empty,

    #[error("Invalid repository reference: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_parse_error_only_matches_parse_variant() {
        assert!(RegistryError::Parse("eof".to_string()).is_parse_error());
        assert!(!RegistryError::NotFound("a/b".to_string()).is_parse_error());
        assert!(
            !RegistryError::UnexpectedStatus(reqwest::StatusCode::BAD_GATEWAY).is_parse_error()
        );
        assert!(
            !RegistryError::RateLimited {
                retry_after_secs: None
            }
            .is_parse_error()
        );
    }
}
