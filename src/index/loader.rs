use crate::error::Result;
use crate::index::types::SearchIndex;
use std::fs;
use std::path::Path;

/// Parse a search index from a string.
///
/// Accepts both the raw JSON blob (`{"docs":[...]}`) and the script-wrapped
/// form published by generated documentation sites
/// (`var documenterSearchIndex = {"docs":[...]}`). A malformed blob fails
/// with `IndexError::Parse` and yields no partial entries.
pub fn load_str(input: &str) -> Result<SearchIndex> {
    let json = strip_script_wrapper(input).unwrap_or(input);
    let index = serde_json::from_str(json)?;
    Ok(index)
}

/// Load a search index from a file.
///
/// One blocking read; the file handle is released before parsing starts.
pub fn load_path(path: &Path) -> Result<SearchIndex> {
    let content = fs::read_to_string(path)?;
    load_str(&content)
}

/// Extract the JSON object from a `var <ident> = {...}` script wrapper.
///
/// Returns `None` when the input does not look like an assignment, so the
/// caller falls back to raw JSON parsing and surfaces the parser's own
/// error for genuinely malformed input.
fn strip_script_wrapper(input: &str) -> Option<&str> {
    let bytes = input.as_bytes();
    let start = memchr::memchr(b'{', bytes)?;

    let prefix = input[..start].trim_start();
    if !prefix.starts_with("var ") || !prefix.contains('=') {
        return None;
    }

    // Trailing semicolon or newline after the object is tolerated
    let end = memchr::memrchr(b'}', bytes)?;
    if end < start {
        return None;
    }

    Some(&input[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IndexError;

    #[test]
    fn test_load_raw_json() {
        let index = load_str(r#"{"docs":[]}"#).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn test_load_script_wrapped() {
        let input = concat!(
            "var documenterSearchIndex = {\"docs\":\n",
            "[{\"location\":\"/a\",\"page\":\"A\",\"title\":\"Foo\",",
            "\"text\":\"bar baz\",\"category\":\"page\"}]\n}\n"
        );
        let index = load_str(input).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.docs[0].title, "Foo");
    }

    #[test]
    fn test_load_script_with_trailing_semicolon() {
        let input = "var searchIndex = {\"docs\":[]};\n";
        let index = load_str(input).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = load_str("{\"docs\": [{]}").unwrap_err();
        assert!(matches!(err, IndexError::Parse(_)));
    }

    #[test]
    fn test_truncated_script_is_parse_error() {
        let err = load_str("var documenterSearchIndex = {\"docs\": [").unwrap_err();
        assert!(matches!(err, IndexError::Parse(_)));
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        // "title" absent
        let input = r#"{"docs":[{"location":"/a","page":"A","text":"","category":"page"}]}"#;
        let err = load_str(input).unwrap_err();
        assert!(matches!(err, IndexError::Parse(_)));
    }

    #[test]
    fn test_wrong_field_type_is_parse_error() {
        let input = r#"{"docs":[{"location":1,"page":"A","title":"T","text":"","category":"page"}]}"#;
        assert!(load_str(input).is_err());
    }

    #[test]
    fn test_leading_whitespace_raw_json() {
        let index = load_str("  \n {\"docs\":[]}").unwrap();
        assert!(index.is_empty());
    }
}
