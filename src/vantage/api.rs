//! Thin facade over the resolution pipeline.
//!
//! [`ViewEngine`] is the single entry point hosts use: it loads (and, on
//! first run, seeds) the stored configuration, parses the query string, and
//! hands everything to [`resolve`](crate::resolve::resolve). No policy of
//! its own — the pieces stay independently testable underneath.

use crate::config::SearchOptions;
use crate::elements::{ElementCatalog, InMemoryCatalog};
use crate::error::Result;
use crate::model::SearchMode;
use crate::registry::{ColumnRegistry, LayoutRegistry};
use crate::request::RequestParameters;
use crate::store::SettingsStore;
use crate::view::ResolvedView;

/// Resolution engine bound to a settings store.
///
/// Generic over `SettingsStore` so hosts and tests pick their backend.
pub struct ViewEngine<S: SettingsStore> {
    store: S,
    mode: SearchMode,
}

impl<S: SettingsStore> ViewEngine<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            mode: SearchMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Loads the current configuration, seeding first-run defaults.
    pub fn options(&mut self) -> Result<SearchOptions> {
        SearchOptions::load(&mut self.store)
    }

    /// Resolves a raw query string into a view model.
    pub fn resolve<C: ElementCatalog>(
        &mut self,
        query: &str,
        catalog: &C,
        authenticated: bool,
    ) -> Result<ResolvedView> {
        let options = self.options()?;
        let params = RequestParameters::from_query_str(query);
        Ok(crate::resolve::resolve(
            &options,
            &params,
            catalog,
            authenticated,
            self.mode,
        ))
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

/// Builds a stand-in catalog from the configured columns, for hosts that
/// have no live element table. Ids are assigned in column order.
pub fn catalog_from_options(options: &SearchOptions) -> InMemoryCatalog {
    let layouts = LayoutRegistry::build(&options.layouts);
    let columns = ColumnRegistry::build(&options.elements, &layouts, &options.detail_layout);
    InMemoryCatalog::from_names(columns.names())
}
