//! Request parameters as an explicit immutable value.
//!
//! Resolution never reads ambient request state; the host parses the query
//! string once into [`RequestParameters`] and passes it in. Advanced-search
//! clauses use the `advanced[N][element_id|type|terms]` key convention so
//! URLs stay compatible with hand-edited and bookmarked forms.

use crate::model::{ElementId, ViewKind};
use serde::Serialize;
use std::borrow::Cow;
use std::collections::BTreeMap;

/// One advanced-search clause: `field <condition> terms`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AdvancedClause {
    pub element_id: ElementId,
    pub condition: String,
    pub terms: String,
}

/// Immutable, ordered request parameters plus advanced clauses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParameters {
    params: Vec<(String, String)>,
    advanced: Vec<AdvancedClause>,
}

impl RequestParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a raw query string. Never fails: pairs that don't decode are
    /// kept verbatim, keys without `=` get an empty value.
    pub fn from_query_str(raw: &str) -> Self {
        let raw = raw.trim_start_matches('?');
        let mut params = Vec::new();
        let mut advanced: BTreeMap<usize, AdvancedClause> = BTreeMap::new();

        for pair in raw.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = match pair.split_once('=') {
                Some((k, v)) => (decode(k), decode(v)),
                None => (decode(pair), String::new()),
            };

            if let Some((index, field)) = parse_advanced_key(&key) {
                let clause = advanced.entry(index).or_default();
                match field.as_str() {
                    "element_id" => clause.element_id = value.parse().unwrap_or(0),
                    "type" => clause.condition = value,
                    "terms" => clause.terms = value,
                    _ => log::warn!("ignoring unknown advanced field {field:?}"),
                }
            } else {
                params.push((key, value));
            }
        }

        Self {
            params,
            advanced: advanced.into_values().collect(),
        }
    }

    /// The first value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.params.iter().position(|(k, _)| k == key) {
            Some(pos) => self.params[pos].1 = value,
            None => self.params.push((key.to_string(), value)),
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.params.retain(|(k, _)| k != key);
    }

    pub fn advanced(&self) -> &[AdvancedClause] {
        &self.advanced
    }

    pub fn push_advanced(&mut self, clause: AdvancedClause) {
        self.advanced.push(clause);
    }

    /// Re-encodes parameters and advanced clauses as `key=value&...`.
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<String> = self
            .params
            .iter()
            .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
            .collect();

        for (i, clause) in self.advanced.iter().enumerate() {
            pairs.push(format!(
                "{}={}",
                encode(&format!("advanced[{i}][element_id]")),
                clause.element_id
            ));
            pairs.push(format!(
                "{}={}",
                encode(&format!("advanced[{i}][type]")),
                encode(&clause.condition)
            ));
            pairs.push(format!(
                "{}={}",
                encode(&format!("advanced[{i}][terms]")),
                encode(&clause.terms)
            ));
        }

        pairs.join("&")
    }

    /// Builds the cross-navigation URL for an index entry: the current
    /// parameters, switched to the index-target view, with the `index`
    /// parameter dropped and one advanced clause requiring the field to
    /// match the entry.
    pub fn index_entry_url(&self, entry: &str, field_id: ElementId, condition: &str) -> String {
        let mut params = self.clone();
        params.set("view", ViewKind::index_target().id().to_string());
        params.remove("index");
        params.push_advanced(AdvancedClause {
            element_id: field_id,
            condition: condition.to_string(),
            terms: entry.to_string(),
        });
        format!("find?{}", params.to_query_string())
    }
}

fn decode(s: &str) -> String {
    let s = s.replace('+', " ");
    match urlencoding::decode(&s) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => s,
    }
}

fn encode(s: &str) -> Cow<'_, str> {
    urlencoding::encode(s)
}

/// Splits `advanced[N][field]` into `(N, field)`.
fn parse_advanced_key(key: &str) -> Option<(usize, String)> {
    let rest = key.strip_prefix("advanced[")?;
    let (index, rest) = rest.split_once(']')?;
    let index = index.parse::<usize>().ok()?;
    let field = rest.strip_prefix('[')?.strip_suffix(']')?;
    Some((index, field.to_string()))
}
