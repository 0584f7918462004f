use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::constants::entities::FALLBACK_ENTITY_TYPE;
use crate::constants::fields::{FACETABLE_FIELD_TYPES, YEAR_FIELD};
use crate::types::{EntityType, FieldName, RecordId};

/// One archival record from the loaded collection.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Record {
    /// Stable record identifier, unique within the collection.
    #[serde(rename = "rec_ID")]
    pub id: RecordId,
    /// Record title; embedded line breaks are display-only.
    #[serde(rename = "rec_Title", default)]
    pub title: String,
    /// Entity category; absent records fall into the fallback category.
    #[serde(rename = "rec_RecTypeName", default)]
    pub entity_type: Option<EntityType>,
    /// Ordered field/value entries attached to the record.
    ///
    /// Order matters for display grouping only, never for filtering.
    #[serde(default)]
    pub details: Vec<Detail>,
}

impl Record {
    /// Entity type with the fallback category applied.
    pub fn effective_entity_type(&self) -> &str {
        self.entity_type.as_deref().unwrap_or(FALLBACK_ENTITY_TYPE)
    }

    /// First detail carrying `field_name`.
    pub fn detail(&self, field_name: &str) -> Option<&Detail> {
        self.details
            .iter()
            .find(|detail| detail.field_name == field_name)
    }

    /// Production year via the year extraction precedence.
    ///
    /// `None` when the record has no year detail or none of its encodings
    /// parse; such records are excluded from active year-range filters.
    pub fn year(&self) -> Option<i32> {
        self.detail(YEAR_FIELD).and_then(Detail::year)
    }
}

/// One field/value entry attached to a record.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Detail {
    /// Facet/display key for this entry.
    #[serde(rename = "fieldName")]
    pub field_name: FieldName,
    /// Declared field type; absent is treated as filterable.
    #[serde(rename = "fieldType", default)]
    pub field_type: Option<String>,
    /// Display label that overrides the raw value when present.
    #[serde(rename = "termLabel", default)]
    pub term_label: Option<String>,
    /// The value itself, classified into the closed variant set.
    #[serde(default)]
    pub value: FieldValue,
}

impl Detail {
    /// Whether this detail may be offered as a facet dimension.
    pub fn is_facetable(&self) -> bool {
        match self.field_type.as_deref() {
            Some(field_type) => FACETABLE_FIELD_TYPES.contains(&field_type),
            None => true,
        }
    }

    /// Display value via the uniform extraction precedence.
    ///
    /// A non-empty term label wins over the value; reference titles win over
    /// stringification; geographic values never yield text.
    pub fn display_value(&self) -> Option<String> {
        if let Some(label) = self.term_label.as_deref() {
            if !label.is_empty() {
                return Some(label.to_string());
            }
        }
        self.value.as_text()
    }

    /// Year via the year precedence (earliest, estimated minimum, scalar).
    pub fn year(&self) -> Option<i32> {
        self.value.year()
    }
}

/// Closed value variant for a record detail.
///
/// The source format is schema-less JSON; each observed object shape maps to
/// one variant so downstream code never duck-types.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// Plain text scalar.
    Text(String),
    /// Numeric scalar.
    Number(f64),
    /// Structured reference to another resource, keyed by its title.
    Reference {
        /// Title of the referenced resource.
        title: String,
    },
    /// Structured date/range object with heterogeneous year encodings.
    DateRange {
        /// Earliest year of the range (`start.earliest` in the source shape).
        earliest_year: Option<i32>,
        /// Year of the estimated minimum date (`estMinDate`).
        estimated_min_year: Option<i32>,
        /// Original object, kept for full-text stringification.
        raw: Value,
    },
    /// Structured geographic object carrying a well-known-text point.
    Geo {
        /// Well-known-text encoding, e.g. `POINT(-43.2 -22.9)`.
        wkt: String,
    },
    /// Unrecognized value, stringified as compact JSON where needed.
    Other(Value),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Other(Value::Null)
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(FieldValue::from_json(Value::deserialize(deserializer)?))
    }
}

impl FieldValue {
    /// Classify a raw JSON value into the closed variant set.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::String(text) => FieldValue::Text(text),
            Value::Number(number) => FieldValue::Number(number.as_f64().unwrap_or(0.0)),
            Value::Object(fields) => {
                if let Some(wkt) = fields
                    .get("geo")
                    .and_then(|geo| geo.get("wkt"))
                    .and_then(Value::as_str)
                {
                    return FieldValue::Geo {
                        wkt: wkt.to_string(),
                    };
                }
                if fields.contains_key("start") || fields.contains_key("estMinDate") {
                    let earliest_year = fields
                        .get("start")
                        .and_then(|start| start.get("earliest"))
                        .and_then(year_of_scalar);
                    let estimated_min_year = fields.get("estMinDate").and_then(year_of_scalar);
                    return FieldValue::DateRange {
                        earliest_year,
                        estimated_min_year,
                        raw: Value::Object(fields),
                    };
                }
                if let Some(title) = fields.get("title").and_then(Value::as_str) {
                    return FieldValue::Reference {
                        title: title.to_string(),
                    };
                }
                FieldValue::Other(Value::Object(fields))
            }
            other => FieldValue::Other(other),
        }
    }

    /// Textual form used for facets, equality matching, and search.
    ///
    /// Geographic values yield `None` so they never leak into text surfaces.
    pub fn as_text(&self) -> Option<String> {
        match self {
            FieldValue::Text(text) => Some(text.clone()),
            FieldValue::Number(number) => Some(format_scalar_number(*number)),
            FieldValue::Reference { title } => Some(title.clone()),
            FieldValue::DateRange { raw, .. } => serde_json::to_string(raw).ok(),
            FieldValue::Geo { .. } => None,
            FieldValue::Other(Value::Null) => None,
            FieldValue::Other(Value::String(text)) => Some(text.clone()),
            FieldValue::Other(value) => serde_json::to_string(value).ok(),
        }
    }

    /// Year via the precedence: earliest year, estimated minimum, scalar.
    pub fn year(&self) -> Option<i32> {
        match self {
            FieldValue::DateRange {
                earliest_year,
                estimated_min_year,
                ..
            } => earliest_year.or(*estimated_min_year),
            FieldValue::Text(text) => parse_leading_int(text),
            FieldValue::Number(number) => Some(number.trunc() as i32),
            _ => None,
        }
    }

    /// The well-known-text string of a geographic value.
    pub fn wkt(&self) -> Option<&str> {
        match self {
            FieldValue::Geo { wkt } => Some(wkt),
            _ => None,
        }
    }
}

/// Extract a year from a raw JSON scalar (string or number).
fn year_of_scalar(value: &Value) -> Option<i32> {
    match value {
        Value::Number(number) => number.as_f64().map(|v| v.trunc() as i32),
        Value::String(text) => parse_year_text(text),
        _ => None,
    }
}

/// Parse a year from a date-ish string.
///
/// Accepts a bare year (`1640`), an ISO date (`1640-01-01`), or the decimal
/// day encoding some exports use (`1640.0101`). Returns `None` otherwise.
fn parse_year_text(text: &str) -> Option<i32> {
    let trimmed = text.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date.year());
    }
    parse_leading_int(trimmed)
}

/// Parse the leading signed integer of a string.
///
/// Trailing non-digit text is ignored, so `1700-1705` parses as `1700`.
fn parse_leading_int(text: &str) -> Option<i32> {
    let trimmed = text.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i32>().ok().map(|value| sign * value)
}

/// Format a numeric scalar without a spurious fractional part.
fn format_scalar_number(number: f64) -> String {
    if number.fract() == 0.0 && number.abs() < i64::MAX as f64 {
        format!("{}", number as i64)
    } else {
        number.to_string()
    }
}
