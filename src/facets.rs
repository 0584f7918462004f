//! Facet discovery over the record collection.
//!
//! Discovery is schema-less: the filterable fields and their value sets are
//! whatever the records in scope actually carry, recomputed whenever the
//! entity selection changes.

use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::config::FacetPolicy;
use crate::constants::entities::RELATIONSHIP_ENTITY_TYPE;
use crate::constants::fields::{SUMMARY_FIELD, TRANSCRIPT_MARKER, YEAR_FIELD};
use crate::filter::EntitySelection;
use crate::record::Record;
use crate::types::{EntityType, FacetValue, FieldName};

/// Distinct observed values per field name, per entity type.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacetSet {
    /// Entity type, then field name, then distinct observed values.
    pub fields: IndexMap<EntityType, IndexMap<FieldName, BTreeSet<FacetValue>>>,
    /// Whether any record in scope carries a parsable production year.
    ///
    /// Gates whether a year-range control should be offered at all.
    pub has_year_data: bool,
}

/// One surfaced facet control: a field plus its selectable values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Facet {
    /// Field name acting as the filter dimension.
    pub field_name: FieldName,
    /// Sorted distinct values observed for the field.
    pub values: Vec<FacetValue>,
}

impl FacetSet {
    /// Facets actually offered to filter controls under `policy`.
    ///
    /// Each field name appears at most once; values are unioned across the
    /// entity types in scope and returned sorted.
    pub fn surfaced(&self, policy: &FacetPolicy, selection: &EntitySelection) -> Vec<Facet> {
        let mut facets = Vec::new();
        for field_name in policy.surfaced_fields(selection) {
            let mut values = BTreeSet::new();
            for by_field in self.fields.values() {
                if let Some(observed) = by_field.get(&field_name) {
                    values.extend(observed.iter().cloned());
                }
            }
            if !values.is_empty() {
                facets.push(Facet {
                    field_name,
                    values: values.into_iter().collect(),
                });
            }
        }
        facets
    }
}

/// Derives filterable fields and observed values for an entity selection.
pub struct FacetCatalog;

impl FacetCatalog {
    /// Discover facetable fields and values among `records` under `selection`.
    ///
    /// Long-form fields (summary, transcripts) and the year field never
    /// become value facets; the year field only feeds `has_year_data`.
    pub fn compute<'a, I>(records: I, selection: &EntitySelection) -> FacetSet
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut set = FacetSet::default();
        for record in records {
            let entity_type = record.effective_entity_type();
            if entity_type == RELATIONSHIP_ENTITY_TYPE || !selection.matches(entity_type) {
                continue;
            }
            for detail in &record.details {
                if detail.field_name == YEAR_FIELD {
                    if !set.has_year_data && detail.year().is_some() {
                        set.has_year_data = true;
                    }
                    continue;
                }
                if Self::is_long_form(&detail.field_name) || !detail.is_facetable() {
                    continue;
                }
                let Some(value) = detail.display_value() else {
                    continue;
                };
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    continue;
                }
                set.fields
                    .entry(entity_type.to_string())
                    .or_default()
                    .entry(detail.field_name.clone())
                    .or_default()
                    .insert(trimmed.to_string());
            }
        }
        set
    }

    /// Sorted distinct entity types for the entity selector control.
    ///
    /// Only records with an explicit entity type contribute; relationship
    /// rows are never offered.
    pub fn entity_types<'a, I>(records: I) -> Vec<EntityType>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut types = BTreeSet::new();
        for record in records {
            if let Some(entity_type) = record.entity_type.as_deref() {
                if entity_type != RELATIONSHIP_ENTITY_TYPE {
                    types.insert(entity_type.to_string());
                }
            }
        }
        types.into_iter().collect()
    }

    fn is_long_form(field_name: &str) -> bool {
        field_name == SUMMARY_FIELD || field_name.contains(TRANSCRIPT_MARKER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Record {
        serde_json::from_value(value).unwrap()
    }

    fn sample() -> Vec<Record> {
        vec![
            record(json!({
                "rec_ID": "1",
                "rec_RecTypeName": "Documento",
                "details": [
                    { "fieldName": "Ano(s) de produção", "value": "1700" },
                    { "fieldName": "Nação", "fieldType": "enum", "value": "3051", "termLabel": "Angola" },
                    { "fieldName": "Resumo do documento", "value": "Um resumo longo." },
                    { "fieldName": "Transcrição modernizada", "value": "Texto integral." },
                    { "fieldName": "Código interno", "fieldType": "resource", "value": "x1" },
                ],
            })),
            record(json!({
                "rec_ID": "2",
                "rec_RecTypeName": "Pessoa",
                "details": [
                    { "fieldName": "Nação", "value": "  Benguela  " },
                ],
            })),
            record(json!({
                "rec_ID": "3",
                "rec_RecTypeName": "Record relationship",
                "details": [
                    { "fieldName": "Nação", "value": "Oculta" },
                ],
            })),
        ]
    }

    #[test]
    fn discovery_skips_long_form_year_and_undeclared_types() {
        let records = sample();
        let set = FacetCatalog::compute(&records, &EntitySelection::All);

        let documento = &set.fields["Documento"];
        assert!(documento.contains_key("Nação"));
        assert!(!documento.contains_key("Resumo do documento"));
        assert!(!documento.contains_key("Transcrição modernizada"));
        assert!(!documento.contains_key("Ano(s) de produção"));
        assert!(!documento.contains_key("Código interno"));
        assert!(set.has_year_data);
    }

    #[test]
    fn values_are_trimmed_and_deduplicated() {
        let records = sample();
        let set = FacetCatalog::compute(&records, &EntitySelection::All);
        let values = &set.fields["Pessoa"]["Nação"];
        assert!(values.contains("Benguela"));
        assert!(!values.iter().any(|value| value.starts_with(' ')));
    }

    #[test]
    fn relationship_rows_never_contribute_facets() {
        let records = sample();
        let set = FacetCatalog::compute(&records, &EntitySelection::All);
        assert!(!set.fields.contains_key("Record relationship"));
        for by_field in set.fields.values() {
            for values in by_field.values() {
                assert!(!values.contains("Oculta"));
            }
        }
    }

    #[test]
    fn entity_restriction_limits_scope_and_year_flag() {
        let records = sample();
        let set = FacetCatalog::compute(&records, &EntitySelection::Only("Pessoa".to_string()));
        assert!(set.fields.contains_key("Pessoa"));
        assert!(!set.fields.contains_key("Documento"));
        assert!(!set.has_year_data);
    }

    #[test]
    fn surfaced_facets_union_values_across_entity_types() {
        let records = sample();
        let set = FacetCatalog::compute(&records, &EntitySelection::All);
        let facets = set.surfaced(&FacetPolicy::default(), &EntitySelection::All);

        let nacao = facets
            .iter()
            .find(|facet| facet.field_name == "Nação")
            .expect("surfaced facet");
        assert_eq!(nacao.values, vec!["Angola", "Benguela"]);
        // Discovered but not in the priority list.
        assert!(!facets.iter().any(|facet| facet.field_name == "Código interno"));
    }

    #[test]
    fn entity_types_are_sorted_and_exclude_relationships() {
        let records = sample();
        assert_eq!(
            FacetCatalog::entity_types(&records),
            vec!["Documento".to_string(), "Pessoa".to_string()]
        );
    }

    #[test]
    fn empty_collection_yields_empty_facets() {
        let set = FacetCatalog::compute(std::iter::empty::<&Record>(), &EntitySelection::All);
        assert!(set.fields.is_empty());
        assert!(!set.has_year_data);
    }
}
