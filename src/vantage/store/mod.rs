//! # Settings storage
//!
//! Administrator configuration lives in an external settings store as
//! key/string pairs. The [`SettingsStore`] trait abstracts that store so the
//! engine can run against different backends.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON document on disk
//! - [`memory::InMemoryStore`]: no persistence, for testing
//!
//! Writes exist for a single reason: first-run self-healing, where blank
//! element/layout options are seeded with built-in defaults (see
//! `config::SearchOptions::load`). Everything else is read-only.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for the key/string settings store.
pub trait SettingsStore {
    /// Read an option's raw text, `None` if never set.
    fn get_option(&self, key: &str) -> Result<Option<String>>;

    /// Persist an option's raw text.
    fn set_option(&mut self, key: &str, value: &str) -> Result<()>;
}
