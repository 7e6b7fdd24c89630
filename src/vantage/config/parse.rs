//! Parsers for the administrator-authored option texts.
//!
//! All four options share the same line discipline: semicolon-terminated
//! records that may span lines, surrounding whitespace ignored. Malformed
//! records are skipped with a warning, never fatal — a half-edited
//! configuration must not take the search page down.

use crate::model::{
    is_pseudo_token, Align, DetailLayoutRow, ElementDefinition, LayoutDraft, LayoutId, Visibility,
};
use std::collections::BTreeSet;

fn records(text: &str) -> impl Iterator<Item = &str> {
    text.split(';').map(str::trim).filter(|r| !r.is_empty())
}

/// Parses element records of the form `name: label[, width[, align]];`.
///
/// Angle-bracket-wrapped names (`<tags>`, `<score>`) are pseudo-elements,
/// kept verbatim. A duplicate name overwrites the earlier definition.
pub fn parse_elements(text: &str) -> Vec<ElementDefinition> {
    let mut elements: Vec<ElementDefinition> = Vec::new();

    for record in records(text) {
        let Some((name, rest)) = record.split_once(':') else {
            log::warn!("skipping malformed element record: {record:?}");
            continue;
        };
        let name = name.trim();
        if name.is_empty() {
            log::warn!("skipping element record with empty name: {record:?}");
            continue;
        }

        let mut parts = rest.split(',').map(str::trim);
        let label = parts.next().unwrap_or("");
        let width = parts.next().and_then(|w| w.parse::<u32>().ok()).unwrap_or(0);
        let align = parts.next().and_then(Align::parse).unwrap_or(Align::None);

        let definition = ElementDefinition {
            name: name.to_string(),
            label: if label.is_empty() { name.to_string() } else { label.to_string() },
            width,
            align,
            is_pseudo: is_pseudo_token(name),
        };

        // Last definition wins on duplicate names.
        match elements.iter().position(|e| e.name == definition.name) {
            Some(pos) => elements[pos] = definition,
            None => elements.push(definition),
        }
    }

    elements
}

/// Parses layout records of the form `Lk, visibility, Name[, col1, ...];`.
///
/// `k` must be assigned in order starting at 1; a record whose ordinal is
/// out of sequence is skipped along with everything else malformed.
pub fn parse_layouts(text: &str) -> Vec<LayoutDraft> {
    let mut drafts: Vec<LayoutDraft> = Vec::new();

    for record in records(text) {
        let mut parts = record.split(',').map(str::trim);

        let id = match parts.next().and_then(parse_layout_ordinal) {
            Some(id) => id,
            None => {
                log::warn!("skipping layout record without an Lk ordinal: {record:?}");
                continue;
            }
        };
        let expected = drafts.len() as LayoutId + 1;
        if id != expected {
            log::warn!("skipping layout record with out-of-order ordinal L{id} (expected L{expected})");
            continue;
        }

        let Some(visibility) = parts.next().and_then(Visibility::parse) else {
            log::warn!("skipping layout record with unknown visibility: {record:?}");
            continue;
        };

        let name = parts.next().unwrap_or("");
        if name.is_empty() {
            log::warn!("skipping layout record without a name: {record:?}");
            continue;
        }

        let columns = parts
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();

        drafts.push(LayoutDraft {
            id,
            visibility,
            name: name.to_string(),
            columns,
        });
    }

    drafts
}

fn parse_layout_ordinal(token: &str) -> Option<LayoutId> {
    let digits = token.strip_prefix('L').or_else(|| token.strip_prefix('l'))?;
    digits.parse::<LayoutId>().ok().filter(|id| *id >= 1)
}

/// Parses the private-element list: names separated by `;`, `,` or newlines.
pub fn parse_private_elements(text: &str) -> BTreeSet<String> {
    text.split([';', ',', '\n'])
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses the detail layout: each record is one row of comma-separated
/// element references, which may include pseudo-element tokens.
pub fn parse_detail_layout(text: &str) -> Vec<DetailLayoutRow> {
    records(text)
        .map(|record| {
            record
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect::<DetailLayoutRow>()
        })
        .filter(|row| !row.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_element_records() {
        let elements = parse_elements("Identifier: Item;\nTitle: Title;\nDate: Date, 120, right;");
        assert_eq!(elements.len(), 3);
        assert_eq!(elements[0].name, "Identifier");
        assert_eq!(elements[0].label, "Item");
        assert!(!elements[0].is_pseudo);
        assert_eq!(elements[2].width, 120);
        assert_eq!(elements[2].align, Align::Right);
    }

    #[test]
    fn element_label_defaults_to_name() {
        let elements = parse_elements("Creator: ;");
        assert_eq!(elements[0].label, "Creator");
    }

    #[test]
    fn pseudo_elements_are_kept_verbatim() {
        let elements = parse_elements("<tags>: Tags;\n<score>: Score;");
        assert!(elements.iter().all(|e| e.is_pseudo));
        assert_eq!(elements[0].name, "<tags>");
    }

    #[test]
    fn malformed_element_records_are_skipped() {
        let elements = parse_elements("no colon here;\nTitle: Title;\n: empty name;");
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].name, "Title");
    }

    #[test]
    fn duplicate_element_definitions_last_wins() {
        let elements = parse_elements("Title: First;\nTitle: Second;");
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].label, "Second");
    }

    #[test]
    fn parses_layout_records() {
        let drafts = parse_layouts(
            "L1, public, Details;\nL2, admin, Internal, Identifier, Title, Notes;",
        );
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].name, "Details");
        assert!(drafts[0].columns.is_empty());
        assert_eq!(drafts[1].visibility, Visibility::Admin);
        assert_eq!(drafts[1].columns, ["Identifier", "Title", "Notes"]);
    }

    #[test]
    fn layout_ordinals_must_be_sequential_from_one() {
        let drafts = parse_layouts("L2, public, Wrong Start;");
        assert!(drafts.is_empty());

        let drafts = parse_layouts("L1, public, A;\nL3, public, Gap;\nL2, public, B;");
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[1].name, "B");
    }

    #[test]
    fn layout_with_bad_visibility_is_skipped() {
        let drafts = parse_layouts("L1, private, Oops;\nL1, public, Details;");
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].name, "Details");
    }

    #[test]
    fn parses_private_elements_on_any_separator() {
        let private = parse_private_elements("Notes; Status\nDonor, Accession Number");
        assert_eq!(private.len(), 4);
        assert!(private.contains("Notes"));
        assert!(private.contains("Accession Number"));
    }

    #[test]
    fn parses_detail_layout_rows() {
        let rows = parse_detail_layout("Subject, Type;\nCreator, <tags>;");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], ["Subject", "Type"]);
        assert_eq!(rows[1], ["Creator", "<tags>"]);
    }

    #[test]
    fn empty_configuration_parses_to_nothing() {
        assert!(parse_elements("").is_empty());
        assert!(parse_layouts("  \n ").is_empty());
        assert!(parse_private_elements("").is_empty());
        assert!(parse_detail_layout(";;;").is_empty());
    }
}
