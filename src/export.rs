//! JSON export of extracted records.
//!
//! Each category is written to `{package}-{category}.json` as a single
//! top-level array, pretty-printed with 4-space indentation. Non-ASCII text
//! is written as-is.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;

use crate::category::Category;
use crate::error::{OptxError, Result};

/// Output file name for a category of a package.
pub fn output_file_name(package: &str, category: Category) -> String {
    format!("{}-{}.json", package, category.dir_name())
}

/// Serialize records to the pretty JSON layout used for output files.
pub fn to_json<T: Serialize>(records: &[T]) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;
    Ok(buf)
}

/// Write a category's records into `output_dir`, replacing any existing file.
///
/// Returns the path written.
pub fn write_records<T: Serialize>(
    output_dir: &Path,
    package: &str,
    category: Category,
    records: &[T],
) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).map_err(|e| OptxError::Io {
        path: output_dir.to_path_buf(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    let path = output_dir.join(output_file_name(package, category));
    let json = to_json(records).map_err(|e| OptxError::Io {
        path: path.clone(),
        message: format!("Failed to serialize records: {}", e),
    })?;
    fs::write(&path, json).map_err(|e| OptxError::Io {
        path: path.clone(),
        message: format!("Failed to write output: {}", e),
    })?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EventRecord, EventRef};
    use tempfile::tempdir;

    fn event(id: i64, name: &str) -> EventRecord {
        EventRecord {
            event: EventRef {
                id,
                name: Some(name.to_string()),
            },
            info_type: 1,
            always_open: true,
        }
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(
            output_file_name("A000", Category::MapBonusMusic),
            "A000-mapBonusMusic.json"
        );
    }

    #[test]
    fn test_layout() {
        let json = to_json(&[event(1, "無期限常時解放")]).unwrap();

        assert_eq!(
            String::from_utf8(json).unwrap(),
            concat!(
                "[\n",
                "    {\n",
                "        \"eventId\": 1,\n",
                "        \"eventName\": \"無期限常時解放\",\n",
                "        \"infoType\": 1,\n",
                "        \"alwaysOpen\": true\n",
                "    }\n",
                "]"
            )
        );
    }

    #[test]
    fn test_empty_records() {
        let records: Vec<EventRecord> = vec![];
        assert_eq!(to_json(&records).unwrap(), b"[]");
    }

    #[test]
    fn test_write_creates_directory_and_overwrites() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("nested/out");

        let first = write_records(&output, "A000", Category::Event, &[event(1, "a"), event(2, "b")])
            .unwrap();
        let second = write_records(&output, "A000", Category::Event, &[event(3, "c")]).unwrap();

        assert_eq!(first, second);
        assert_eq!(second, output.join("A000-event.json"));

        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&second).unwrap()).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 1);
        assert_eq!(parsed[0]["eventId"], 3);
    }
}
