use std::fs;
use std::path::Path;

use error_stack::{Result, ResultExt};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JsonWriterError {
    #[error("Failed to serialize data to JSON")]
    Serialize,
    #[error("Failed to write output file")]
    Write,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonStyle {
    Compact,
    /// 2-space indentation.
    Pretty,
}

/// Serializes `data` fully in memory, then overwrites `path` in a single
/// write. The destination is never touched before serialization succeeds.
pub fn write_json<T: Serialize>(
    path: &Path,
    data: &T,
    style: JsonStyle,
) -> Result<(), JsonWriterError> {
    let bytes = match style {
        JsonStyle::Compact => serde_json::to_vec(data),
        JsonStyle::Pretty => serde_json::to_vec_pretty(data),
    }
    .change_context(JsonWriterError::Serialize)?;

    fs::write(path, bytes)
        .change_context(JsonWriterError::Write)
        .attach_printable_lazy(|| format!("path: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn writes_compact_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("values.json");

        write_json(&path, &json!([["a", "b"], ["1", "2"]]), JsonStyle::Compact).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            r#"[["a","b"],["1","2"]]"#
        );
    }

    #[test]
    fn writes_pretty_json_with_two_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("values.json");

        write_json(&path, &json!([["a"]]), JsonStyle::Pretty).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "[\n  [\n    \"a\"\n  ]\n]"
        );
    }

    #[test]
    fn overwrites_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        write_json(
            &path,
            &json!({"old": "much longer content here"}),
            JsonStyle::Compact,
        )
        .unwrap();
        write_json(&path, &json!({"new": 1}), JsonStyle::Compact).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"new":1}"#);
    }

    #[test]
    fn rewriting_identical_data_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let data = json!([["a", "b"], [1, 2]]);

        write_json(&path, &data, JsonStyle::Pretty).unwrap();
        let first = fs::read(&path).unwrap();
        write_json(&path, &data, JsonStyle::Pretty).unwrap();
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn missing_parent_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.json");

        let result = write_json(&path, &json!([]), JsonStyle::Compact);

        assert!(result.is_err());
    }
}
