//! Element catalog abstraction.
//!
//! The item repository owns the element table; this core only needs id/name
//! lookups and the designated Title element. The trait keeps resolution
//! testable without a repository, mirroring the storage seam in `store/`.

use crate::model::ElementId;

/// Lookup interface over the repository's metadata elements.
pub trait ElementCatalog {
    fn element_id_for_name(&self, name: &str) -> Option<ElementId>;

    fn element_name_for_id(&self, id: ElementId) -> Option<String>;

    /// The element every sort/index fallback lands on.
    fn title_element_id(&self) -> ElementId;

    /// All searchable fields as `(id, name)`, ordered by name.
    fn all_fields(&self) -> Vec<(ElementId, String)>;
}

/// A fixed catalog, used by hosts without a live repository and by tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    fields: Vec<(ElementId, String)>,
    title_id: ElementId,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, id: ElementId, name: impl Into<String>) -> Self {
        let name = name.into();
        if name == crate::model::TITLE_COLUMN {
            self.title_id = id;
        }
        self.fields.push((id, name));
        self
    }

    /// Builds a catalog from element names, assigning sequential ids
    /// starting at 1. The Title element, if present, becomes the title id;
    /// otherwise the first field does.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut catalog = Self::new();
        for (i, name) in names.into_iter().enumerate() {
            catalog = catalog.with_field(i as ElementId + 1, name);
        }
        if catalog.title_id == 0 {
            if let Some((id, _)) = catalog.fields.first() {
                catalog.title_id = *id;
            }
        }
        catalog
    }
}

impl ElementCatalog for InMemoryCatalog {
    fn element_id_for_name(&self, name: &str) -> Option<ElementId> {
        self.fields
            .iter()
            .find(|(_, n)| n == name)
            .map(|(id, _)| *id)
    }

    fn element_name_for_id(&self, id: ElementId) -> Option<String> {
        self.fields
            .iter()
            .find(|(i, _)| *i == id)
            .map(|(_, n)| n.clone())
    }

    fn title_element_id(&self) -> ElementId {
        self.title_id
    }

    fn all_fields(&self) -> Vec<(ElementId, String)> {
        let mut fields = self.fields.clone();
        fields.sort_by(|(_, a), (_, b)| a.cmp(b));
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_names_assigns_sequential_ids() {
        let catalog = InMemoryCatalog::from_names(["Identifier", "Title", "Date"]);
        assert_eq!(catalog.element_id_for_name("Identifier"), Some(1));
        assert_eq!(catalog.element_id_for_name("Date"), Some(3));
        assert_eq!(catalog.element_name_for_id(2), Some("Title".to_string()));
        assert_eq!(catalog.element_id_for_name("Missing"), None);
    }

    #[test]
    fn title_id_tracks_the_title_field() {
        let catalog = InMemoryCatalog::from_names(["Identifier", "Title"]);
        assert_eq!(catalog.title_element_id(), 2);

        let no_title = InMemoryCatalog::from_names(["Creator", "Date"]);
        assert_eq!(no_title.title_element_id(), 1);
    }

    #[test]
    fn all_fields_are_name_ordered() {
        let catalog = InMemoryCatalog::from_names(["Title", "Date", "Creator"]);
        let names: Vec<_> = catalog.all_fields().into_iter().map(|(_, n)| n).collect();
        assert_eq!(names, ["Creator", "Date", "Title"]);
    }
}
