//! Parsed administrator configuration and its persistence keys.
//!
//! `SearchOptions::load` is the only place that writes to the settings
//! store: when the element or layout text is absent or blank, the built-in
//! defaults are substituted and persisted back (first-run initialization).

use crate::error::Result;
use crate::model::{DetailLayoutRow, ElementDefinition, LayoutDraft};
use crate::store::SettingsStore;
use std::collections::BTreeSet;

pub mod parse;

pub const OPTION_ELEMENTS: &str = "vantage_elements";
pub const OPTION_LAYOUTS: &str = "vantage_layouts";
pub const OPTION_PRIVATE_ELEMENTS: &str = "vantage_private_elements";
pub const OPTION_DETAIL_LAYOUT: &str = "vantage_detail_layout";

pub const DEFAULT_ELEMENTS: &str = "Identifier: Item;\nTitle: Title;";
pub const DEFAULT_LAYOUTS: &str = "L1, public, Details;";

/// The administrator's configuration, parsed and ready for registry
/// construction. Rebuilt from the store once per request context.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub elements: Vec<ElementDefinition>,
    pub layouts: Vec<LayoutDraft>,
    pub private_elements: BTreeSet<String>,
    pub detail_layout: Vec<DetailLayoutRow>,
}

impl SearchOptions {
    /// Loads and parses all option texts, seeding blank element/layout
    /// options with the built-in defaults.
    pub fn load<S: SettingsStore>(store: &mut S) -> Result<Self> {
        let elements_text = load_or_seed(store, OPTION_ELEMENTS, DEFAULT_ELEMENTS)?;
        let layouts_text = load_or_seed(store, OPTION_LAYOUTS, DEFAULT_LAYOUTS)?;
        let private_text = store.get_option(OPTION_PRIVATE_ELEMENTS)?.unwrap_or_default();
        let detail_text = store.get_option(OPTION_DETAIL_LAYOUT)?.unwrap_or_default();

        Ok(Self::from_texts(
            &elements_text,
            &layouts_text,
            &private_text,
            &detail_text,
        ))
    }

    /// Parses configuration from raw texts without touching a store.
    pub fn from_texts(elements: &str, layouts: &str, private: &str, detail: &str) -> Self {
        Self {
            elements: parse::parse_elements(elements),
            layouts: parse::parse_layouts(layouts),
            private_elements: parse::parse_private_elements(private),
            detail_layout: parse::parse_detail_layout(detail),
        }
    }
}

fn load_or_seed<S: SettingsStore>(store: &mut S, key: &str, default: &str) -> Result<String> {
    match store.get_option(key)? {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => {
            log::warn!("option {key} is blank, seeding built-in default");
            store.set_option(key, default)?;
            Ok(default.to_string())
        }
    }
}
