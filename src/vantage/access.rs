//! Access filtering.
//!
//! Every function here returns a view-specific copy: the source registries
//! are never mutated, and the order of surviving entries is preserved.

use crate::model::{Column, DetailLayoutRow, ElementId};
use crate::registry::{ColumnRegistry, LayoutRegistry};
use serde::Serialize;
use std::collections::BTreeSet;

/// Removes admin-only layouts unless the caller is authenticated.
pub fn filter_layouts(layouts: &LayoutRegistry, authenticated: bool) -> LayoutRegistry {
    LayoutRegistry::from_layouts(
        layouts
            .iter()
            .filter(|layout| authenticated || !layout.is_admin_only)
            .cloned(),
    )
}

/// Drops column memberships of layouts that are not in the visible set, so
/// layout-class grouping never names a hidden layout.
pub fn filter_columns(columns: &ColumnRegistry, visible: &LayoutRegistry) -> ColumnRegistry {
    ColumnRegistry::from_columns(columns.iter().map(|column| Column {
        layouts: column
            .layouts
            .iter()
            .copied()
            .filter(|id| visible.contains(*id))
            .collect(),
        ..column.clone()
    }))
}

/// Redacts private element references from detail rows for unauthenticated
/// callers. Rows keep their position even when emptied.
pub fn filter_detail_rows(
    rows: &[DetailLayoutRow],
    private_elements: &BTreeSet<String>,
    authenticated: bool,
) -> Vec<DetailLayoutRow> {
    if authenticated {
        return rows.to_vec();
    }
    rows.iter()
        .map(|row| {
            row.iter()
                .filter(|name| !private_elements.contains(*name))
                .cloned()
                .collect()
        })
        .collect()
}

/// The advanced-search field list, split into public and private groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldGroups {
    pub public: Vec<(ElementId, String)>,
    pub private: Vec<(ElementId, String)>,
}

/// Partitions fields by the private-element set. The private group is
/// omitted entirely for unauthenticated callers.
pub fn partition_fields(
    all_fields: &[(ElementId, String)],
    private_elements: &BTreeSet<String>,
    authenticated: bool,
) -> FieldGroups {
    let mut groups = FieldGroups::default();
    for (id, name) in all_fields {
        if private_elements.contains(name) {
            if authenticated {
                groups.private.push((*id, name.clone()));
            }
        } else {
            groups.public.push((*id, name.clone()));
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse::{parse_detail_layout, parse_layouts, parse_private_elements};
    use crate::registry::LayoutRegistry;

    fn registry() -> LayoutRegistry {
        LayoutRegistry::build(&parse_layouts(
            "L1, public, Details;\nL2, admin, Internal, Notes;\nL3, public, Dates, Date;",
        ))
    }

    #[test]
    fn admin_layouts_hidden_from_unauthenticated_callers() {
        let visible = filter_layouts(&registry(), false);
        assert_eq!(visible.len(), 2);
        assert!(!visible.contains(2));
        assert_eq!(visible.first(), 1);
        assert_eq!(visible.last(), 3);
    }

    #[test]
    fn admin_layouts_kept_for_authenticated_callers() {
        let visible = filter_layouts(&registry(), true);
        assert_eq!(visible.len(), 3);
        assert!(visible.contains(2));
    }

    #[test]
    fn filtering_does_not_mutate_the_source() {
        let layouts = registry();
        let _ = filter_layouts(&layouts, false);
        assert_eq!(layouts.len(), 3);
    }

    #[test]
    fn hidden_layout_memberships_are_stripped_from_columns() {
        let layouts = registry();
        let columns = crate::registry::ColumnRegistry::build(&[], &layouts, &[]);
        assert_eq!(columns.get("Notes").unwrap().layouts, [2]);

        let visible = filter_layouts(&layouts, false);
        let filtered = filter_columns(&columns, &visible);
        assert!(filtered.get("Notes").unwrap().layouts.is_empty());
        assert_eq!(filtered.get("Date").unwrap().layouts, [3]);
    }

    #[test]
    fn private_entries_redacted_only_when_unauthenticated() {
        let rows = parse_detail_layout("Subject, Notes, Type;");
        let private = parse_private_elements("Notes");

        let redacted = filter_detail_rows(&rows, &private, false);
        assert_eq!(redacted[0], ["Subject", "Type"]);

        let retained = filter_detail_rows(&rows, &private, true);
        assert_eq!(retained[0], ["Subject", "Notes", "Type"]);
    }

    #[test]
    fn emptied_rows_keep_their_position() {
        let rows = parse_detail_layout("Notes;\nSubject;");
        let private = parse_private_elements("Notes");
        let redacted = filter_detail_rows(&rows, &private, false);
        assert_eq!(redacted.len(), 2);
        assert!(redacted[0].is_empty());
        assert_eq!(redacted[1], ["Subject"]);
    }

    #[test]
    fn private_fields_grouped_only_for_authenticated_callers() {
        let fields = vec![
            (3, "Date".to_string()),
            (9, "Notes".to_string()),
            (2, "Title".to_string()),
        ];
        let private = parse_private_elements("Notes");

        let public_only = partition_fields(&fields, &private, false);
        assert_eq!(public_only.public.len(), 2);
        assert!(public_only.private.is_empty());

        let both = partition_fields(&fields, &private, true);
        assert_eq!(both.public.len(), 2);
        assert_eq!(both.private, [(9, "Notes".to_string())]);
    }
}
