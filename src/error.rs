use thiserror::Error;

/// Errors raised while building or loading a search index.
///
/// Both index operations are all-or-nothing: a failed build writes no blob
/// and a failed load yields no partial entries.
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("failed to encode entry at {location:?}: {source}")]
    Encoding {
        location: String,
        source: serde_json::Error,
    },

    #[error("malformed search index: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for index operations
pub type Result<T> = std::result::Result<T, IndexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err: IndexError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(err.to_string().starts_with("malformed search index:"));
    }
}
