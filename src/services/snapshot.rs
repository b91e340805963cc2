use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::ReportError;

/// Snapshot entries in file order: address paired with its raw hex amount.
pub type Snapshot = Vec<(String, String)>;

/// Reads and parses the snapshot file into address/amount pairs.
///
/// The root must be a JSON object whose values are all strings. Amounts are
/// kept raw here; numeric parsing happens in the conversion pass.
pub fn load_snapshot(path: &Path) -> Result<Snapshot, ReportError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ReportError::SnapshotNotFound(path.to_path_buf()))
        }
        Err(e) => return Err(ReportError::Io(e)),
    };

    let object: Map<String, Value> =
        serde_json::from_str(&content).map_err(|e| ReportError::Parse(e.to_string()))?;

    let mut entries = Vec::with_capacity(object.len());
    for (address, value) in object {
        let raw = value.as_str().ok_or_else(|| {
            ReportError::Parse(format!("amount for {} is not a string", address))
        })?;
        entries.push((address, raw.to_string()));
    }

    tracing::info!("Loaded {} snapshot entries", entries.len());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_snapshot(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("airdrop-snapshot.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_entries_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_snapshot(&dir, r#"{"0xBBB": "0x1", "0xAAA": "0x2"}"#);

        let entries = load_snapshot(&path).unwrap();
        assert_eq!(
            entries,
            vec![
                ("0xBBB".to_string(), "0x1".to_string()),
                ("0xAAA".to_string(), "0x2".to_string()),
            ]
        );
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_snapshot(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ReportError::SnapshotNotFound(_)));
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_snapshot(&dir, "not json");
        assert!(matches!(load_snapshot(&path), Err(ReportError::Parse(_))));
    }

    #[test]
    fn array_root_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_snapshot(&dir, r#"["0xAAA"]"#);
        assert!(matches!(load_snapshot(&path), Err(ReportError::Parse(_))));
    }

    #[test]
    fn non_string_value_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_snapshot(&dir, r#"{"0xAAA": 12}"#);
        assert!(matches!(load_snapshot(&path), Err(ReportError::Parse(_))));
    }

    #[test]
    fn empty_object_is_empty_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_snapshot(&dir, "{}");
        assert!(load_snapshot(&path).unwrap().is_empty());
    }
}
