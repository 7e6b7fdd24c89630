use super::SettingsStore;
use crate::error::{Result, VantageError};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed settings store: all options in one JSON document.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_doc(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path).map_err(VantageError::Io)?;
        let doc: BTreeMap<String, String> =
            serde_json::from_str(&content).map_err(VantageError::Serialization)?;
        Ok(doc)
    }

    fn save_doc(&self, doc: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(VantageError::Io)?;
            }
        }
        let content = serde_json::to_string_pretty(doc).map_err(VantageError::Serialization)?;
        fs::write(&self.path, content).map_err(VantageError::Io)?;
        Ok(())
    }
}

impl SettingsStore for FileStore {
    fn get_option(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load_doc()?.remove(key))
    }

    fn set_option(&mut self, key: &str, value: &str) -> Result<()> {
        let mut doc = self.load_doc()?;
        doc.insert(key.to_string(), value.to_string());
        self.save_doc(&doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("settings.json"));
        assert_eq!(store.get_option("vantage_elements").unwrap(), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("settings.json"));
        store.set_option("vantage_layouts", "L1, public, Details;").unwrap();
        assert_eq!(
            store.get_option("vantage_layouts").unwrap().as_deref(),
            Some("L1, public, Details;")
        );
    }

    #[test]
    fn creates_parent_directories_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested").join("settings.json"));
        store.set_option("k", "v").unwrap();
        assert_eq!(store.get_option("k").unwrap().as_deref(), Some("v"));
    }
}
