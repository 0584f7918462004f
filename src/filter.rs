//! Filter state and the combined predicate evaluator.
//!
//! `FilterState` is a single immutable value rebuilt whole on every input
//! event; the engine evaluates it against the full collection each time, so
//! there is never partially-applied filter state to observe.

use indexmap::IndexMap;

use crate::constants::entities::RELATIONSHIP_ENTITY_TYPE;
use crate::record::Record;
use crate::types::{EntityType, FacetValue, FieldName};

/// Entity-type restriction for exploration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EntitySelection {
    /// Explore every entity type.
    #[default]
    All,
    /// Restrict to one entity type, matched exactly.
    Only(EntityType),
}

impl EntitySelection {
    /// Whether a record's effective entity type passes this selection.
    pub fn matches(&self, entity_type: &str) -> bool {
        match self {
            EntitySelection::All => true,
            EntitySelection::Only(selected) => selected == entity_type,
        }
    }
}

/// Inclusive production-year bounds.
///
/// An unset side is an open bound, not a `0`/`9999` default: this is how
/// "no year filter" stays distinguishable from "filter with default bounds".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct YearRange {
    /// Lower bound, inclusive.
    pub min: Option<i32>,
    /// Upper bound, inclusive.
    pub max: Option<i32>,
}

impl YearRange {
    /// Whether any bound was explicitly supplied.
    pub fn is_active(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    /// Whether `year` satisfies the bounds (missing side unbounded).
    pub fn contains(&self, year: i32) -> bool {
        self.min.map_or(true, |min| year >= min) && self.max.map_or(true, |max| year <= max)
    }
}

/// Complete, immutable filter state for one recomputation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterState {
    /// Entity-type restriction.
    pub entity: EntitySelection,
    /// Production-year bounds.
    pub years: YearRange,
    /// Per-field exact-match requirements, in selection order.
    pub equality: IndexMap<FieldName, FacetValue>,
    /// Free-text query, matched case-insensitively as a substring.
    pub search: String,
}

impl FilterState {
    /// Restrict to one entity type.
    pub fn with_entity(mut self, entity: impl Into<EntityType>) -> Self {
        self.entity = EntitySelection::Only(entity.into());
        self
    }

    /// Set the production-year bounds.
    pub fn with_year_range(mut self, min: Option<i32>, max: Option<i32>) -> Self {
        self.years = YearRange { min, max };
        self
    }

    /// Require `field` to equal `value` exactly.
    pub fn with_equality(mut self, field: impl Into<FieldName>, value: impl Into<FacetValue>) -> Self {
        self.equality.insert(field.into(), value.into());
        self
    }

    /// Set the free-text query.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }
}

/// Evaluates the active filter state against the record collection.
pub struct FilterEngine;

impl FilterEngine {
    /// Apply `state` to `records`, preserving their relative order.
    ///
    /// Predicates are conjunctions evaluated in fixed order with per-record
    /// short-circuiting; the search predicate alone is a disjunction across
    /// the title and every detail value.
    pub fn apply<'a, I>(records: I, state: &FilterState) -> Vec<&'a Record>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let needle = state.search.trim().to_lowercase();
        records
            .into_iter()
            .filter(|record| Self::matches(record, state, &needle))
            .collect()
    }

    fn matches(record: &Record, state: &FilterState, needle: &str) -> bool {
        let entity_type = record.effective_entity_type();
        // Link-table rows are never first-class explorable entities.
        if entity_type == RELATIONSHIP_ENTITY_TYPE {
            return false;
        }
        if !state.entity.matches(entity_type) {
            return false;
        }
        if state.years.is_active() {
            match record.year() {
                Some(year) if state.years.contains(year) => {}
                _ => return false,
            }
        }
        for (field_name, required) in &state.equality {
            let satisfied = record.details.iter().any(|detail| {
                detail.field_name == *field_name
                    && detail
                        .display_value()
                        .map(|value| value.trim() == required.as_str())
                        .unwrap_or(false)
            });
            if !satisfied {
                return false;
            }
        }
        if !needle.is_empty() && !Self::matches_search(record, needle) {
            return false;
        }
        true
    }

    /// Full-text scan over the record's entire semantic content.
    ///
    /// Covers the title and every detail value, transcripts included;
    /// geographic values yield no text and are skipped.
    fn matches_search(record: &Record, needle: &str) -> bool {
        if record.title.to_lowercase().contains(needle) {
            return true;
        }
        record.details.iter().any(|detail| {
            detail
                .display_value()
                .map(|value| value.to_lowercase().contains(needle))
                .unwrap_or(false)
        })
    }
}
