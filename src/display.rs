//! Field classification into display groups for the detail panel.
//!
//! Routing is an explicit ordered rule table: several predicates can match
//! the same field name, and the first match decides the outcome.

use indexmap::IndexMap;

use crate::constants::display::{
    MISSING_VALUE_PLACEHOLDER, TITLE_LINE_SEPARATOR, UNTITLED_PLACEHOLDER,
};
use crate::constants::fields::{
    GEO_MARKER, IMAGE_CODE_FIELD, LINK_FIELDS, PERSON_ROLE_FIELDS, SUMMARY_FIELD,
    TRANSCRIPT_MARKER, YEAR_FIELD,
};
use crate::record::{Detail, FieldValue, Record};
use crate::types::FieldName;

/// Display destination for one detail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailCategory {
    /// Long-form summary block.
    Summary,
    /// Transcript tab keyed by full field name.
    Transcript,
    /// Links block.
    Link,
    /// Per-role people list.
    PersonRole,
    /// Never displayed.
    Hidden,
    /// Generic attribute grid.
    Attribute,
}

/// Field-name predicate for one routing rule.
#[derive(Clone, Copy, Debug)]
enum FieldMatcher {
    Exact(&'static str),
    Contains(&'static str),
    OneOf(&'static [&'static str]),
}

impl FieldMatcher {
    fn matches(&self, field_name: &str) -> bool {
        match self {
            FieldMatcher::Exact(name) => field_name == *name,
            FieldMatcher::Contains(marker) => field_name.contains(marker),
            FieldMatcher::OneOf(names) => names.contains(&field_name),
        }
    }
}

/// Routing table, evaluated top-to-bottom; the first matching rule wins.
const ROUTING_RULES: &[(FieldMatcher, DetailCategory)] = &[
    (FieldMatcher::Exact(SUMMARY_FIELD), DetailCategory::Summary),
    (
        FieldMatcher::Contains(TRANSCRIPT_MARKER),
        DetailCategory::Transcript,
    ),
    (FieldMatcher::OneOf(LINK_FIELDS), DetailCategory::Link),
    (
        FieldMatcher::OneOf(PERSON_ROLE_FIELDS),
        DetailCategory::PersonRole,
    ),
    (FieldMatcher::Contains(GEO_MARKER), DetailCategory::Hidden),
    (FieldMatcher::Exact(IMAGE_CODE_FIELD), DetailCategory::Hidden),
];

/// Route a field name to its display category.
pub fn categorize(field_name: &str) -> DetailCategory {
    ROUTING_RULES
        .iter()
        .find(|(matcher, _)| matcher.matches(field_name))
        .map(|(_, category)| *category)
        .unwrap_or(DetailCategory::Attribute)
}

/// Classified view of one record for the detail panel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayModel {
    /// Record title with line breaks flattened; placeholder when empty.
    pub title: String,
    /// Generic attributes in record order.
    pub main_attributes: Vec<(FieldName, String)>,
    /// Long-form summary text, when present.
    pub summary: Option<String>,
    /// Transcript texts keyed by full field name, in record order.
    pub transcripts: IndexMap<FieldName, String>,
    /// People grouped by role, accumulated in record order.
    pub people_by_role: IndexMap<FieldName, Vec<String>>,
    /// Link entries in record order.
    pub links: Vec<(FieldName, String)>,
}

/// Partitions a record's details into display groups.
pub struct DetailClassifier;

impl DetailClassifier {
    /// Classify `record` into a complete display model.
    ///
    /// Missing or empty groups stay empty; classification never fails.
    pub fn classify(record: &Record) -> DisplayModel {
        let title = if record.title.trim().is_empty() {
            UNTITLED_PLACEHOLDER.to_string()
        } else {
            flatten_lines(&record.title, " ")
        };
        let mut model = DisplayModel {
            title,
            ..DisplayModel::default()
        };
        for detail in &record.details {
            let value = Self::display_text(detail);
            match categorize(&detail.field_name) {
                DetailCategory::Summary => model.summary = Some(value),
                DetailCategory::Transcript => {
                    model.transcripts.insert(detail.field_name.clone(), value);
                }
                DetailCategory::Link => model.links.push((detail.field_name.clone(), value)),
                DetailCategory::PersonRole => model
                    .people_by_role
                    .entry(detail.field_name.clone())
                    .or_default()
                    .push(value),
                DetailCategory::Hidden => {}
                DetailCategory::Attribute => {
                    model.main_attributes.push((detail.field_name.clone(), value))
                }
            }
        }
        model
    }

    /// Display text for one detail.
    ///
    /// The year field with a structured value goes through the year
    /// precedence instead of the generic title/stringify precedence.
    fn display_text(detail: &Detail) -> String {
        if detail.field_name == YEAR_FIELD
            && matches!(detail.value, FieldValue::DateRange { .. })
        {
            return detail
                .year()
                .map(|year| year.to_string())
                .unwrap_or_else(|| MISSING_VALUE_PLACEHOLDER.to_string());
        }
        match detail.display_value() {
            Some(value) if !value.is_empty() => {
                if detail.term_label.is_none()
                    && matches!(detail.value, FieldValue::Reference { .. })
                {
                    flatten_lines(&value, TITLE_LINE_SEPARATOR)
                } else {
                    value
                }
            }
            _ => MISSING_VALUE_PLACEHOLDER.to_string(),
        }
    }
}

/// Replace embedded line breaks with `separator`.
fn flatten_lines(text: &str, separator: &str) -> String {
    text.replace('\n', separator)
}
