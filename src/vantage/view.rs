//! The resolved view model and its rendering-facing helpers.
//!
//! [`ResolvedView`] is the immutable output of resolution: every selection
//! validated, every registry filtered for the caller. It exposes accessors
//! and small derived lookups only; no further policy lives here.

use crate::access::FieldGroups;
use crate::model::{
    Column, DetailLayoutRow, ElementId, KeywordsCondition, LayoutId, SortOrder, ViewKind,
};
use crate::registry::{ColumnRegistry, LayoutRegistry};
use serde::Serialize;

/// Header sort state for one column, consumed by the header renderer.
/// The active column shows its current direction and toggles to the other;
/// inactive columns always target ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeaderSort {
    pub active: bool,
    pub order: SortOrder,
    pub toggle: SortOrder,
}

/// Pagination bounds for a result page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageBounds {
    pub first: u64,
    pub last: u64,
    pub total: u64,
}

/// Computes the 1-based result range shown for a page.
pub fn page_bounds(total: u64, page: u64, per_page: u64) -> PageBounds {
    let page = page.max(1);
    let per_page = per_page.max(1);
    let mut last = page * per_page;
    let first = last - per_page + 1;
    if last > total {
        last = total;
    }
    PageBounds { first, last, total }
}

/// The user-facing results message. Zero results is an explanation, not an
/// error.
pub fn results_message(bounds: PageBounds) -> String {
    match bounds.total {
        0 => "No items found. Check the spelling of your keywords or try using fewer keywords."
            .to_string(),
        1 => "1 item found".to_string(),
        total => format!("{} - {} of {} results", bounds.first, bounds.last, total),
    }
}

/// The index view shows a total, never a page range.
pub fn results_message_for_index_view(total: u64) -> String {
    match total {
        0 => "No items found. Check the spelling of your keywords or try using fewer keywords."
            .to_string(),
        1 => "1 item found".to_string(),
        total => format!("{total} results"),
    }
}

/// CSS class for a column: lowercased, spaces to dashes, `<>#` stripped,
/// prefixed `search-<tag>-`.
pub fn column_class(column_name: &str, tag: &str) -> String {
    let slug: String = column_name
        .to_lowercase()
        .replace(' ', "-")
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '#'))
        .collect();
    format!("search-{tag}-{slug}")
}

/// Space-separated layout classes (`L1 L3`) for a column's memberships.
pub fn layout_classes(column: &Column) -> String {
    column
        .layouts
        .iter()
        .map(|id| format!("L{id}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// The immutable result of resolving one request against one configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedView {
    pub(crate) layout_id: LayoutId,
    pub(crate) sort_field_id: ElementId,
    pub(crate) sort_field_name: String,
    pub(crate) sort_order: SortOrder,
    pub(crate) view_kind: ViewKind,
    pub(crate) filter_id: u8,
    pub(crate) limit: u32,
    pub(crate) index_field_id: ElementId,
    pub(crate) index_field_name: String,
    pub(crate) keywords: String,
    pub(crate) keywords_condition: KeywordsCondition,
    pub(crate) search_titles_only: bool,
    pub(crate) show_relationships: bool,
    pub(crate) columns: ColumnRegistry,
    pub(crate) layouts: LayoutRegistry,
    pub(crate) detail_rows: Vec<DetailLayoutRow>,
    pub(crate) fields: FieldGroups,
    pub(crate) sort_options: Vec<String>,
    pub(crate) index_options: Vec<String>,
}

impl ResolvedView {
    pub fn layout_id(&self) -> LayoutId {
        self.layout_id
    }

    pub fn sort_field_id(&self) -> ElementId {
        self.sort_field_id
    }

    pub fn sort_field_name(&self) -> &str {
        &self.sort_field_name
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn view_kind(&self) -> ViewKind {
        self.view_kind
    }

    pub fn filter_id(&self) -> u8 {
        self.filter_id
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn index_field_id(&self) -> ElementId {
        self.index_field_id
    }

    pub fn index_field_name(&self) -> &str {
        &self.index_field_name
    }

    pub fn keywords(&self) -> &str {
        &self.keywords
    }

    pub fn keywords_condition(&self) -> KeywordsCondition {
        self.keywords_condition
    }

    pub fn search_titles_only(&self) -> bool {
        self.search_titles_only
    }

    pub fn show_relationships(&self) -> bool {
        self.show_relationships
    }

    pub fn columns(&self) -> &ColumnRegistry {
        &self.columns
    }

    pub fn layouts(&self) -> &LayoutRegistry {
        &self.layouts
    }

    pub fn detail_rows(&self) -> &[DetailLayoutRow] {
        &self.detail_rows
    }

    pub fn fields(&self) -> &FieldGroups {
        &self.fields
    }

    pub fn sort_options(&self) -> &[String] {
        &self.sort_options
    }

    pub fn index_options(&self) -> &[String] {
        &self.index_options
    }

    /// Header sort state for a column, keyed by the resolved sort field.
    pub fn header_sort(&self, column_name: &str) -> HeaderSort {
        let active = column_name == self.sort_field_name;
        if !active {
            return HeaderSort {
                active: false,
                order: SortOrder::Ascending,
                toggle: SortOrder::Ascending,
            };
        }
        HeaderSort {
            active: true,
            order: self.sort_order,
            toggle: self.sort_order.toggled(),
        }
    }

    /// Position of the resolved sort field in the sort option list;
    /// 0 (relevance) when it isn't listed.
    pub fn selected_sort_option(&self) -> usize {
        self.sort_options
            .iter()
            .position(|name| name == &self.sort_field_name)
            .unwrap_or(0)
    }

    /// Position of the resolved index field in the index option list,
    /// falling back to Title's slot, then 0.
    pub fn selected_index_option(&self) -> usize {
        self.index_options
            .iter()
            .position(|name| name == &self.index_field_name)
            .or_else(|| {
                self.index_options
                    .iter()
                    .position(|name| name == crate::model::TITLE_COLUMN)
            })
            .unwrap_or(0)
    }

    /// The currently selected layout, when it is still configured.
    pub fn selected_layout(&self) -> Option<&crate::model::Layout> {
        self.layouts.get(self.layout_id)
    }
}

/// Capability interface over the closed set of result views. Variants are
/// selected by [`ViewKind`] and delegate to the shared [`ResolvedView`].
pub trait ResultsView {
    fn kind(&self) -> ViewKind;

    fn resolved(&self) -> &ResolvedView;

    fn results_message(&self, total: u64, page: u64) -> String;
}

/// The tabular multi-item view.
pub struct TableResultsView {
    view: ResolvedView,
}

impl TableResultsView {
    pub fn new(view: ResolvedView) -> Self {
        Self { view }
    }

    pub fn has_detail_layout(&self) -> bool {
        self.view.layouts.has_detail_layout()
    }
}

impl ResultsView for TableResultsView {
    fn kind(&self) -> ViewKind {
        ViewKind::Table
    }

    fn resolved(&self) -> &ResolvedView {
        &self.view
    }

    fn results_message(&self, total: u64, page: u64) -> String {
        results_message(page_bounds(total, page, self.view.limit as u64))
    }
}

/// The alphabetical-entry browsing view keyed by one chosen field.
pub struct IndexResultsView {
    view: ResolvedView,
}

impl IndexResultsView {
    pub fn new(view: ResolvedView) -> Self {
        Self { view }
    }

    pub fn index_field_id(&self) -> ElementId {
        self.view.index_field_id
    }
}

impl ResultsView for IndexResultsView {
    fn kind(&self) -> ViewKind {
        ViewKind::Index
    }

    fn resolved(&self) -> &ResolvedView {
        &self.view
    }

    fn results_message(&self, total: u64, _page: u64) -> String {
        results_message_for_index_view(total)
    }
}

/// Wraps a resolved view in the variant its view kind selects.
pub fn results_view_for(view: ResolvedView) -> Box<dyn ResultsView> {
    match view.view_kind {
        ViewKind::Table => Box::new(TableResultsView::new(view)),
        ViewKind::Index => Box::new(IndexResultsView::new(view)),
    }
}
