//! On-disk output: persisted summary records and rendered images.

use std::fs;
use std::path::PathBuf;

use pcsg_core::{OutputDirs, SummaryError, SummaryRecord};
use tracing::debug;

/// Extension of rendered summary images; also what the sent ledger scans for
pub const IMAGE_EXTENSION: &str = "JPG";

pub struct SummaryStore {
    dirs: OutputDirs,
}

impl SummaryStore {
    pub fn new(dirs: OutputDirs) -> Self {
        Self { dirs }
    }

    /// Create every output directory
    pub fn ensure(&self) -> Result<(), SummaryError> {
        for dir in [&self.dirs.json, &self.dirs.temp, &self.dirs.sent] {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    pub fn record_path(&self, filename: &str) -> PathBuf {
        self.dirs.json.join(format!("{filename}.json"))
    }

    pub fn image_path(&self, filename: &str) -> PathBuf {
        self.dirs.temp.join(format!("{filename}.{IMAGE_EXTENSION}"))
    }

    /// Write the record as pretty JSON, replacing any earlier copy
    pub fn write_record(&self, summary: &SummaryRecord) -> Result<PathBuf, SummaryError> {
        let path = self.record_path(&summary.filename);
        let json = serde_json::to_string_pretty(summary)?;
        fs::write(&path, json)?;
        debug!(path = %path.display(), "wrote summary record");
        Ok(path)
    }

    /// Write rendered image bytes to the temp directory
    pub fn write_image(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf, SummaryError> {
        let path = self.image_path(filename);
        fs::write(&path, bytes)?;
        debug!(path = %path.display(), bytes = bytes.len(), "wrote summary image");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_creates_layout() {
        let temp_dir = TempDir::new().unwrap();
        let store = SummaryStore::new(OutputDirs::under(temp_dir.path()));
        store.ensure().unwrap();
        assert!(temp_dir.path().join("json").is_dir());
        assert!(temp_dir.path().join("jpg").join("temp").is_dir());
        assert!(temp_dir.path().join("jpg").join("sent").is_dir());

        // Idempotent
        store.ensure().unwrap();
    }

    #[test]
    fn test_record_is_pretty_json_in_field_order() {
        let temp_dir = TempDir::new().unwrap();
        let store = SummaryStore::new(OutputDirs::under(temp_dir.path()));
        store.ensure().unwrap();

        let summary = SummaryRecord {
            match_type: "DCL A DIVISION".into(),
            filename: "2024_06_15 Exeter CC 1st XI vs Sidmouth 1st XI".into(),
            ..Default::default()
        };
        let path = store.write_record(&summary).unwrap();
        assert_eq!(path.file_name().unwrap(), "2024_06_15 Exeter CC 1st XI vs Sidmouth 1st XI.json");

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("{\n  \"match_type\": \"DCL A DIVISION\""));
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 36);
    }

    #[test]
    fn test_image_goes_to_temp() {
        let temp_dir = TempDir::new().unwrap();
        let store = SummaryStore::new(OutputDirs::under(temp_dir.path()));
        store.ensure().unwrap();

        let path = store.write_image("2024_06_15 A vs B", &[1, 2, 3]).unwrap();
        assert_eq!(path, temp_dir.path().join("jpg").join("temp").join("2024_06_15 A vs B.JPG"));
        assert_eq!(fs::read(path).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_write_without_dirs_fails() {
        let temp_dir = TempDir::new().unwrap();
        let store = SummaryStore::new(OutputDirs::under(temp_dir.path().join("missing")));
        assert!(matches!(store.write_image("x", &[0]), Err(SummaryError::Io(_))));
    }
}
