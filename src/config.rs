use crate::constants::entities::{DOCUMENT_ENTITY_TYPE, PERSON_ENTITY_TYPE};
use crate::constants::facets::{DOCUMENT_EXTRA_FIELDS, PERSON_EXTRA_FIELDS, PRIORITY_FIELDS};
use crate::filter::EntitySelection;
use crate::types::FieldName;

/// Controls which discovered facet fields are surfaced to filter controls.
///
/// Discovery finds every facetable field; the policy limits the surfaced set
/// to a fixed priority list, extended for specific entity selections.
#[derive(Clone, Debug)]
pub struct FacetPolicy {
    /// Fields surfaced for every entity selection, in display order.
    pub priority_fields: Vec<FieldName>,
    /// Extra fields appended when the person entity type is selected.
    pub person_fields: Vec<FieldName>,
    /// Extra fields appended when the document entity type is selected.
    pub document_fields: Vec<FieldName>,
}

impl Default for FacetPolicy {
    fn default() -> Self {
        Self {
            priority_fields: to_owned_fields(PRIORITY_FIELDS),
            person_fields: to_owned_fields(PERSON_EXTRA_FIELDS),
            document_fields: to_owned_fields(DOCUMENT_EXTRA_FIELDS),
        }
    }
}

impl FacetPolicy {
    /// Resolved surfacing order for an entity selection.
    pub fn surfaced_fields(&self, selection: &EntitySelection) -> Vec<FieldName> {
        let mut fields = self.priority_fields.clone();
        if let EntitySelection::Only(entity) = selection {
            if entity == PERSON_ENTITY_TYPE {
                fields.extend(self.person_fields.iter().cloned());
            } else if entity == DOCUMENT_ENTITY_TYPE {
                fields.extend(self.document_fields.iter().cloned());
            }
        }
        fields
    }
}

fn to_owned_fields(fields: &[&str]) -> Vec<FieldName> {
    fields.iter().map(|field| field.to_string()).collect()
}
