use serde::{Deserialize, Serialize};

/// Id of a metadata element in the underlying item repository.
pub type ElementId = u32;

/// 1-based layout ordinal. Layout 1 is the reserved detail layout.
pub type LayoutId = u32;

/// The layout whose rows render outside the generic column loop.
pub const DETAIL_LAYOUT_ID: LayoutId = 1;

pub const IDENTIFIER_COLUMN: &str = "Identifier";
pub const TITLE_COLUMN: &str = "Title";
pub const DESCRIPTION_COLUMN: &str = "Description";

/// Label pinned to the top of the sort and index option lists.
pub const RELEVANCE_LABEL: &str = "relevance";

/// Valid values for the `limit` request parameter.
pub const RESULT_LIMITS: [u32; 5] = [10, 25, 50, 100, 200];
pub const DEFAULT_RESULT_LIMIT: u32 = 10;

/// True for reserved non-metadata markers like `<tags>` or `<score>`.
pub fn is_pseudo_token(name: &str) -> bool {
    name.len() > 2 && name.starts_with('<') && name.ends_with('>')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Right,
    Center,
    #[default]
    None,
}

impl Align {
    pub fn parse(s: &str) -> Option<Align> {
        match s.to_lowercase().as_str() {
            "left" => Some(Align::Left),
            "right" => Some(Align::Right),
            "center" => Some(Align::Center),
            "" => Some(Align::None),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Right => "right",
            Align::Center => "center",
            Align::None => "",
        }
    }
}

/// One record from the administrator's element list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementDefinition {
    pub name: String,
    pub label: String,
    pub width: u32,
    pub align: Align,
    pub is_pseudo: bool,
}

impl ElementDefinition {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        let name = name.into();
        let is_pseudo = is_pseudo_token(&name);
        Self {
            name,
            label: label.into(),
            width: 0,
            align: Align::None,
            is_pseudo,
        }
    }
}

/// A result column, derived from element definitions or synthesized from
/// layout/detail-layout references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub name: String,
    pub alias: String,
    pub width: u32,
    pub align: Align,
    /// Ids of the layouts that render this column, in layout order.
    pub layouts: Vec<LayoutId>,
}

impl Column {
    /// An implicit column: referenced somewhere but never authored.
    pub fn implicit(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            alias: name.clone(),
            name,
            width: 0,
            align: Align::None,
            layouts: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Admin,
}

impl Visibility {
    pub fn parse(s: &str) -> Option<Visibility> {
        match s.to_lowercase().as_str() {
            "public" => Some(Visibility::Public),
            "admin" => Some(Visibility::Admin),
            _ => None,
        }
    }
}

/// A parsed layout record, before registry construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutDraft {
    pub id: LayoutId,
    pub visibility: Visibility,
    pub name: String,
    pub columns: Vec<String>,
}

/// A selectable result layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub id: LayoutId,
    pub name: String,
    pub is_admin_only: bool,
    pub columns: Vec<String>,
}

/// One visual row of the non-tabular detail view: ordered element
/// references, possibly including pseudo-element tokens.
pub type DetailLayoutRow = Vec<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// The single-letter query-parameter form (`a` / `d`).
    pub fn as_param(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "a",
            SortOrder::Descending => "d",
        }
    }

    pub fn toggled(&self) -> SortOrder {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeywordsCondition {
    AllWords,
    Contains,
    Boolean,
}

impl KeywordsCondition {
    pub fn from_id(id: u32) -> Option<KeywordsCondition> {
        match id {
            1 => Some(KeywordsCondition::AllWords),
            2 => Some(KeywordsCondition::Contains),
            3 => Some(KeywordsCondition::Boolean),
            _ => None,
        }
    }

    pub fn id(&self) -> u32 {
        match self {
            KeywordsCondition::AllWords => 1,
            KeywordsCondition::Contains => 2,
            KeywordsCondition::Boolean => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            KeywordsCondition::AllWords => "All words",
            KeywordsCondition::Contains => "Contains",
            KeywordsCondition::Boolean => "Boolean",
        }
    }
}

/// The closed set of result view kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewKind {
    Table,
    Index,
}

impl ViewKind {
    pub fn from_id(id: u32) -> Option<ViewKind> {
        match id {
            1 => Some(ViewKind::Table),
            2 => Some(ViewKind::Index),
            _ => None,
        }
    }

    pub fn id(&self) -> u32 {
        match self {
            ViewKind::Table => 1,
            ViewKind::Index => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ViewKind::Table => "Table",
            ViewKind::Index => "Index",
        }
    }

    /// The view a user lands on after clicking an index entry.
    pub fn index_target() -> ViewKind {
        ViewKind::Table
    }
}

/// Environment-mode switches, always supplied explicitly by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchMode {
    /// Substitute the built-in layout triple for parsed configuration.
    pub shared_searching: bool,
    /// Collapse detail rows into a single row.
    pub merge_detail_rows: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pseudo_tokens_are_angle_bracket_wrapped() {
        assert!(is_pseudo_token("<tags>"));
        assert!(is_pseudo_token("<score>"));
        assert!(!is_pseudo_token("Title"));
        assert!(!is_pseudo_token("<>"));
    }

    #[test]
    fn align_parses_known_values_only() {
        assert_eq!(Align::parse("Right"), Some(Align::Right));
        assert_eq!(Align::parse(""), Some(Align::None));
        assert_eq!(Align::parse("middle"), None);
    }

    #[test]
    fn sort_order_toggles() {
        assert_eq!(SortOrder::Ascending.toggled(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggled(), SortOrder::Ascending);
    }

    #[test]
    fn view_kind_ids_round_trip() {
        assert_eq!(ViewKind::from_id(1), Some(ViewKind::Table));
        assert_eq!(ViewKind::from_id(2), Some(ViewKind::Index));
        assert_eq!(ViewKind::from_id(9), None);
        assert_eq!(ViewKind::Index.id(), 2);
    }
}
