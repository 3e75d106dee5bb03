//! Record store: reads speaker records from a JSON data file.
//!
//! Two document shapes are accepted:
//!
//! ```json
//! [ { "name": "Ada", "title": "..." } ]
//! ```
//!
//! ```json
//! { "speakers": [ { "name": "Ada", "title": "..." } ] }
//! ```
//!
//! A wrapper object without a `speakers` field is an empty collection.
//! Anything else is rejected with [`Error::UnrecognizedFormat`].

use std::path::Path;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::Speaker;

const SPEAKERS_FIELD: &str = "speakers";

/// Load speaker records from the file at `path`.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the file does not exist, and a parse or
/// format error if its contents are not a recognised speaker document.
pub fn load(path: &Path) -> Result<Vec<Speaker>> {
    if !path.exists() {
        return Err(Error::NotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    let speakers = parse(&content)?;

    log::info!("Loaded {} speakers from {}", speakers.len(), path.display());
    Ok(speakers)
}

/// Parse a speaker document from JSON text.
///
/// # Errors
///
/// Returns an error if `content` is not valid JSON or not one of the
/// accepted document shapes.
pub fn parse(content: &str) -> Result<Vec<Speaker>> {
    let document: Value = serde_json::from_str(content)?;
    from_document(document)
}

fn from_document(document: Value) -> Result<Vec<Speaker>> {
    let records = match document {
        Value::Array(records) => records,
        Value::Object(mut fields) => match fields.remove(SPEAKERS_FIELD) {
            None => {
                log::debug!("Document has no '{}' field", SPEAKERS_FIELD);
                Vec::new()
            }
            Some(Value::Array(records)) => records,
            Some(_) => return Err(Error::UnrecognizedFormat),
        },
        _ => return Err(Error::UnrecognizedFormat),
    };

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            serde_json::from_value(record).map_err(|source| Error::InvalidRecord { index, source })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_list() {
        let speakers = parse(r#"[{"name": "Ada"}, {"name": "Amy"}]"#).unwrap();
        assert_eq!(speakers.len(), 2);
        assert_eq!(speakers[1].name.as_deref(), Some("Amy"));
    }

    #[test]
    fn test_parse_wrapped_list() {
        let speakers = parse(r#"{"speakers": [{"name": "Ada", "theme": "AI"}]}"#).unwrap();
        assert_eq!(speakers.len(), 1);
        assert_eq!(speakers[0].theme.as_deref(), Some("AI"));
    }

    #[test]
    fn test_parse_wrapper_without_speakers_is_empty() {
        let speakers = parse(r#"{"event": "Spring showcase"}"#).unwrap();
        assert!(speakers.is_empty());
    }

    #[test]
    fn test_parse_rejects_scalar_document() {
        let result = parse("42");
        assert!(matches!(result, Err(Error::UnrecognizedFormat)));
    }

    #[test]
    fn test_parse_rejects_non_list_speakers() {
        let result = parse(r#"{"speakers": {"name": "Ada"}}"#);
        assert!(matches!(result, Err(Error::UnrecognizedFormat)));
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let result = parse("[{\"name\": ");
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_parse_reports_invalid_record_position() {
        let result = parse(r#"[{"name": "Ada"}, "not a record"]"#);
        assert!(matches!(result, Err(Error::InvalidRecord { index: 1, .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load(Path::new("/definitely/not/here/presentations.json"));
        match result {
            Err(Error::NotFound { path }) => {
                assert!(path.ends_with("presentations.json"));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
