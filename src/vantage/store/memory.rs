use super::SettingsStore;
use crate::error::Result;
use std::collections::BTreeMap;

/// In-memory settings store for tests and embedded hosts.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    options: BTreeMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

impl SettingsStore for InMemoryStore {
    fn get_option(&self, key: &str) -> Result<Option<String>> {
        Ok(self.options.get(key).cloned())
    }

    fn set_option(&mut self, key: &str, value: &str) -> Result<()> {
        self.options.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
