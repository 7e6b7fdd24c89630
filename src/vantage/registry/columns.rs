use super::LayoutRegistry;
use crate::model::{
    is_pseudo_token, Column, DetailLayoutRow, ElementDefinition, DESCRIPTION_COLUMN,
    DETAIL_LAYOUT_ID, IDENTIFIER_COLUMN, TITLE_COLUMN,
};
use serde::Serialize;

/// The canonical set of result columns, keyed by name, insertion-ordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColumnRegistry {
    columns: Vec<Column>,
}

impl ColumnRegistry {
    /// Builds the registry: columns seeded from element definitions, then
    /// implicit columns for detail-row and layout references, then layout
    /// memberships, and finally the guaranteed Description column.
    pub fn build(
        elements: &[ElementDefinition],
        layouts: &LayoutRegistry,
        detail_rows: &[DetailLayoutRow],
    ) -> Self {
        let mut registry = Self::default();

        for element in elements {
            if element.is_pseudo {
                continue;
            }
            registry.insert(Column {
                name: element.name.clone(),
                alias: element.label.clone(),
                width: element.width,
                align: element.align,
                layouts: Vec::new(),
            });
        }

        registry.add_detail_row_columns(detail_rows);
        registry.add_layout_memberships(layouts);

        // The detail layout renders Description unconditionally.
        if !registry.contains(DESCRIPTION_COLUMN) {
            registry.insert(Column::implicit(DESCRIPTION_COLUMN));
        }

        registry
    }

    fn add_detail_row_columns(&mut self, detail_rows: &[DetailLayoutRow]) {
        for row in detail_rows {
            for reference in row {
                if is_pseudo_token(reference) || self.contains(reference) {
                    continue;
                }
                self.insert(Column::implicit(reference.clone()));
            }
        }
    }

    fn add_layout_memberships(&mut self, layouts: &LayoutRegistry) {
        for layout in layouts.iter() {
            for column_name in &layout.columns {
                // The detail layout renders Identifier and Title outside the
                // generic column loop, so it never counts as a membership.
                if layout.id == DETAIL_LAYOUT_ID
                    && (column_name == IDENTIFIER_COLUMN || column_name == TITLE_COLUMN)
                {
                    continue;
                }

                if !self.contains(column_name) {
                    self.insert(Column::implicit(column_name.clone()));
                }
                if let Some(column) = self.columns.iter_mut().find(|c| &c.name == column_name) {
                    if !column.layouts.contains(&layout.id) {
                        column.layouts.push(layout.id);
                    }
                }
            }
        }
    }

    fn insert(&mut self, column: Column) {
        // First creation wins; later references only add memberships.
        if !self.contains(&column.name) {
            self.columns.push(column);
        }
    }

    pub(crate) fn from_columns<I: IntoIterator<Item = Column>>(columns: I) -> Self {
        let mut registry = Self::default();
        for column in columns {
            registry.insert(column);
        }
        registry
    }

    pub fn get(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse::{parse_detail_layout, parse_elements, parse_layouts};
    use crate::model::Align;

    fn build(elements: &str, layouts: &str, detail: &str) -> ColumnRegistry {
        ColumnRegistry::build(
            &parse_elements(elements),
            &LayoutRegistry::build(&parse_layouts(layouts)),
            &parse_detail_layout(detail),
        )
    }

    #[test]
    fn seeds_columns_from_element_definitions() {
        let registry = build("Date: Date, 80, right;\nCreator: Made By;", "", "");
        let date = registry.get("Date").unwrap();
        assert_eq!(date.width, 80);
        assert_eq!(date.align, Align::Right);
        assert_eq!(registry.get("Creator").unwrap().alias, "Made By");
    }

    #[test]
    fn pseudo_elements_never_become_columns() {
        let registry = build("<tags>: Tags;\nTitle: Title;", "", "");
        assert!(!registry.contains("<tags>"));
        assert!(registry.contains("Title"));
    }

    #[test]
    fn layout_references_synthesize_implicit_columns() {
        let registry = build("", "L1, public, Details;\nL2, public, Dates, Identifier, Date;", "");
        let date = registry.get("Date").unwrap();
        assert_eq!(date.width, 0);
        assert_eq!(date.align, Align::None);
        assert_eq!(date.layouts, [2]);
    }

    #[test]
    fn detail_row_references_synthesize_columns_but_skip_pseudo() {
        let registry = build("", "", "Subject, <tags>;\nCreator;");
        assert!(registry.contains("Subject"));
        assert!(registry.contains("Creator"));
        assert!(!registry.contains("<tags>"));
    }

    #[test]
    fn detail_layout_identifier_and_title_are_not_memberships() {
        let registry = build(
            "Identifier: Item;\nTitle: Title;",
            "L1, public, Details, Identifier, Title, Description;\nL2, public, Wide, Identifier, Title;",
            "",
        );
        assert_eq!(registry.get("Identifier").unwrap().layouts, [2]);
        assert_eq!(registry.get("Title").unwrap().layouts, [2]);
        // L1's other columns still count.
        assert_eq!(registry.get("Description").unwrap().layouts, [1]);
    }

    #[test]
    fn description_column_always_exists() {
        let registry = build("Title: Title;", "L1, public, Details;", "");
        let description = registry.get(DESCRIPTION_COLUMN).unwrap();
        assert_eq!(description.width, 0);
        assert_eq!(description.align, Align::None);
    }

    #[test]
    fn duplicate_references_collapse_to_first_creation() {
        let registry = build(
            "Date: Date, 80, right;",
            "L1, public, Details;\nL2, public, A, Date;\nL3, public, B, Date;",
            "Date;",
        );
        assert_eq!(registry.len(), 2); // Date + Description
        let date = registry.get("Date").unwrap();
        assert_eq!(date.width, 80); // authored definition wins
        assert_eq!(date.layouts, [2, 3]);
    }
}
