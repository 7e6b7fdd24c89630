//! Request resolution.
//!
//! Each resolver is a pure function of the request parameters and the
//! applicable registry. The shared policy: an absent, malformed, or
//! out-of-domain value silently becomes the documented default — URLs are
//! hand-edited, bookmarked, and shared, so bad parameters are expected
//! input, not errors.

use crate::access;
use crate::config::SearchOptions;
use crate::elements::ElementCatalog;
use crate::model::{
    DetailLayoutRow, ElementId, KeywordsCondition, LayoutId, SearchMode, SortOrder, ViewKind,
    DEFAULT_RESULT_LIMIT, RELEVANCE_LABEL, RESULT_LIMITS,
};
use crate::registry::{ColumnRegistry, LayoutRegistry};
use crate::request::RequestParameters;
use crate::view::ResolvedView;

/// Detail row substituted under shared searching.
const SHARED_DETAIL_ROW: [&str; 5] = ["Type", "Subject", "Creator", "Place", "Date"];

/// Resolves one request against one configuration into a [`ResolvedView`].
///
/// Deterministic: identical `(options, params, authenticated, mode)` always
/// yield a field-for-field identical view.
pub fn resolve<C: ElementCatalog>(
    options: &SearchOptions,
    params: &RequestParameters,
    catalog: &C,
    authenticated: bool,
    mode: SearchMode,
) -> ResolvedView {
    let detail_rows = detail_rows_for_mode(options, mode);

    let layouts = if mode.shared_searching {
        LayoutRegistry::builtin()
    } else {
        LayoutRegistry::build(&options.layouts)
    };
    let columns = ColumnRegistry::build(&options.elements, &layouts, &detail_rows);

    let visible_layouts = access::filter_layouts(&layouts, authenticated);
    let visible_columns = access::filter_columns(&columns, &visible_layouts);
    let detail_rows =
        access::filter_detail_rows(&detail_rows, &options.private_elements, authenticated);
    let fields = access::partition_fields(
        &catalog.all_fields(),
        &options.private_elements,
        authenticated,
    );

    let sort_field_id = resolve_element_arg(params, "sort", catalog);
    let index_field_id = resolve_index_field(params, &visible_columns, catalog);

    ResolvedView {
        layout_id: resolve_layout_id(params, &visible_layouts),
        sort_field_id,
        sort_field_name: catalog.element_name_for_id(sort_field_id).unwrap_or_default(),
        sort_order: resolve_sort_order(params),
        view_kind: resolve_view_kind(params),
        filter_id: resolve_filter_id(params),
        limit: resolve_limit(params),
        index_field_id,
        index_field_name: catalog
            .element_name_for_id(index_field_id)
            .unwrap_or_default(),
        keywords: resolve_keywords(params),
        keywords_condition: resolve_keywords_condition(params),
        search_titles_only: resolve_flag(params, "titles"),
        show_relationships: resolve_flag(params, "relationships"),
        sort_options: build_option_list(&visible_columns),
        index_options: build_option_list(&visible_columns),
        columns: visible_columns,
        layouts: visible_layouts,
        detail_rows,
        fields,
    }
}

fn detail_rows_for_mode(options: &SearchOptions, mode: SearchMode) -> Vec<DetailLayoutRow> {
    let rows: Vec<DetailLayoutRow> = if mode.shared_searching {
        vec![SHARED_DETAIL_ROW.map(String::from).to_vec()]
    } else {
        options.detail_layout.clone()
    };

    if mode.merge_detail_rows && rows.len() > 1 {
        vec![rows.into_iter().flatten().collect()]
    } else {
        rows
    }
}

/// Clamps the `layout` parameter to the visible registry: out of
/// `[first, last]` or simply not present, the first visible layout wins.
pub fn resolve_layout_id(params: &RequestParameters, layouts: &LayoutRegistry) -> LayoutId {
    let first = layouts.first();
    let last = layouts.last();

    let requested = params
        .get("layout")
        .and_then(leading_int)
        .unwrap_or(first as i64);

    if requested < first as i64 || requested > last as i64 {
        log::debug!("layout {requested} out of range [{first}, {last}], using {first}");
        return first;
    }
    let id = requested as LayoutId;
    if !layouts.contains(id) {
        log::debug!("layout {id} not visible, using {first}");
        return first;
    }
    id
}

/// Legacy-compatible element resolution for `sort`-shaped parameters.
///
/// A non-zero integer is treated as an element id and verified; anything
/// else is treated as an element name and looked up. Either failure falls
/// back to the Title element, so stale bookmarked URLs keep working.
pub fn resolve_element_arg<C: ElementCatalog>(
    params: &RequestParameters,
    key: &str,
    catalog: &C,
) -> ElementId {
    let raw = params.get(key).unwrap_or("").trim();

    let resolved = match leading_int(raw) {
        Some(id) if id != 0 => u32::try_from(id)
            .ok()
            .filter(|id| catalog.element_name_for_id(*id).is_some()),
        _ => catalog.element_id_for_name(raw),
    };

    resolved.unwrap_or_else(|| {
        log::debug!("{key}={raw:?} is not a known element, using Title");
        catalog.title_element_id()
    })
}

/// Reads a signed integer prefix from a raw parameter value, so `12abc`
/// means 12 and `-1x` means -1. Values with no leading digits (or digits
/// past the i64 range) yield `None` and take the non-numeric path.
fn leading_int(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

pub fn resolve_sort_order(params: &RequestParameters) -> SortOrder {
    match params.get("order") {
        Some("d") => SortOrder::Descending,
        _ => SortOrder::Ascending,
    }
}

pub fn resolve_view_kind(params: &RequestParameters) -> ViewKind {
    params
        .get("view")
        .and_then(|raw| raw.trim().parse::<u32>().ok())
        .and_then(ViewKind::from_id)
        .unwrap_or(ViewKind::Table)
}

pub fn resolve_filter_id(params: &RequestParameters) -> u8 {
    match params.get("filter").and_then(|raw| raw.trim().parse::<i64>().ok()) {
        Some(id @ 0..=1) => id as u8,
        _ => 0,
    }
}

pub fn resolve_limit(params: &RequestParameters) -> u32 {
    params
        .get("limit")
        .and_then(|raw| raw.trim().parse::<u32>().ok())
        .filter(|limit| RESULT_LIMITS.contains(limit))
        .unwrap_or(DEFAULT_RESULT_LIMIT)
}

/// Resolves the index field: the specifier must name an element that is
/// present among the columns; anything else falls back to Title.
pub fn resolve_index_field<C: ElementCatalog>(
    params: &RequestParameters,
    columns: &ColumnRegistry,
    catalog: &C,
) -> ElementId {
    let candidate = resolve_element_arg(params, "index", catalog);
    let among_columns = catalog
        .element_name_for_id(candidate)
        .is_some_and(|name| columns.contains(&name));
    if among_columns {
        candidate
    } else {
        catalog.title_element_id()
    }
}

/// Keywords come from the Advanced Search box, else the Simple Search box.
pub fn resolve_keywords(params: &RequestParameters) -> String {
    let keywords = params.get("keywords").unwrap_or("");
    if keywords.is_empty() {
        params.get("query").unwrap_or("").to_string()
    } else {
        keywords.to_string()
    }
}

pub fn resolve_keywords_condition(params: &RequestParameters) -> KeywordsCondition {
    params
        .get("condition")
        .and_then(|raw| raw.trim().parse::<u32>().ok())
        .and_then(KeywordsCondition::from_id)
        .unwrap_or(KeywordsCondition::AllWords)
}

fn resolve_flag(params: &RequestParameters, key: &str) -> bool {
    params.get(key).map(str::trim) == Some("1")
}

/// Builds a sort/index option list: column names alphabetically ordered,
/// position 0 replaced by the relevance label.
pub fn build_option_list(columns: &ColumnRegistry) -> Vec<String> {
    let mut names: Vec<String> = columns.names().map(str::to_string).collect();
    names.sort();
    match names.first_mut() {
        Some(first) => *first = RELEVANCE_LABEL.to_string(),
        None => names.push(RELEVANCE_LABEL.to_string()),
    }
    names
}
