use crate::model::{Layout, LayoutDraft, LayoutId, Visibility, DETAIL_LAYOUT_ID};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeMap;

/// The built-in layout triple used when shared searching is active.
static BUILTIN_LAYOUTS: Lazy<Vec<Layout>> = Lazy::new(|| {
    vec![
        Layout {
            id: 1,
            name: "Details".to_string(),
            is_admin_only: false,
            columns: Vec::new(),
        },
        Layout {
            id: 2,
            name: "Type | Subject".to_string(),
            is_admin_only: false,
            columns: ["Identifier", "Title", "Type", "Subject"]
                .map(String::from)
                .to_vec(),
        },
        Layout {
            id: 3,
            name: "Place | Date".to_string(),
            is_admin_only: false,
            columns: ["Identifier", "Title", "Place", "Date"]
                .map(String::from)
                .to_vec(),
        },
    ]
});

/// The selectable layouts, keyed by their 1-based ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LayoutRegistry {
    layouts: BTreeMap<LayoutId, Layout>,
}

impl LayoutRegistry {
    pub fn build(drafts: &[LayoutDraft]) -> Self {
        let layouts = drafts
            .iter()
            .map(|draft| {
                (
                    draft.id,
                    Layout {
                        id: draft.id,
                        name: draft.name.clone(),
                        is_admin_only: draft.visibility == Visibility::Admin,
                        columns: draft.columns.clone(),
                    },
                )
            })
            .collect();
        Self { layouts }
    }

    /// The fixed Details / Type+Subject / Place+Date triple, substituted
    /// for parsed configuration under shared searching.
    pub fn builtin() -> Self {
        let layouts = BUILTIN_LAYOUTS
            .iter()
            .map(|layout| (layout.id, layout.clone()))
            .collect();
        Self { layouts }
    }

    pub(crate) fn from_layouts<I: IntoIterator<Item = Layout>>(layouts: I) -> Self {
        Self {
            layouts: layouts.into_iter().map(|l| (l.id, l)).collect(),
        }
    }

    /// Minimum present id, 0 when no layouts are configured.
    pub fn first(&self) -> LayoutId {
        self.layouts.keys().next().copied().unwrap_or(0)
    }

    /// Maximum present id, 0 when no layouts are configured.
    pub fn last(&self) -> LayoutId {
        self.layouts.keys().next_back().copied().unwrap_or(0)
    }

    pub fn get(&self, id: LayoutId) -> Option<&Layout> {
        self.layouts.get(&id)
    }

    pub fn contains(&self, id: LayoutId) -> bool {
        self.layouts.contains_key(&id)
    }

    /// Whether the reserved detail layout is configured.
    pub fn has_detail_layout(&self) -> bool {
        self.contains(DETAIL_LAYOUT_ID)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Layout> {
        self.layouts.values()
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse::parse_layouts;

    #[test]
    fn builds_from_drafts() {
        let drafts = parse_layouts("L1, public, Details;\nL2, admin, Internal, Notes;");
        let registry = LayoutRegistry::build(&drafts);

        assert_eq!(registry.len(), 2);
        assert!(!registry.get(1).unwrap().is_admin_only);
        assert!(registry.get(2).unwrap().is_admin_only);
        assert!(registry.has_detail_layout());
    }

    #[test]
    fn first_and_last_span_present_ids() {
        let drafts = parse_layouts("L1, public, A;\nL2, public, B;\nL3, public, C;");
        let registry = LayoutRegistry::build(&drafts);
        assert_eq!(registry.first(), 1);
        assert_eq!(registry.last(), 3);
    }

    #[test]
    fn empty_registry_signals_zero() {
        let registry = LayoutRegistry::build(&[]);
        assert_eq!(registry.first(), 0);
        assert_eq!(registry.last(), 0);
        assert!(!registry.has_detail_layout());
    }

    #[test]
    fn builtin_triple_for_shared_searching() {
        let registry = LayoutRegistry::builtin();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.get(1).unwrap().name, "Details");
        assert_eq!(registry.get(2).unwrap().columns[2], "Type");
        assert_eq!(registry.get(3).unwrap().name, "Place | Date");
        assert!(registry.iter().all(|l| !l.is_admin_only));
    }
}
