//! Session wiring: one immutable store, one mutable filter state.
//!
//! Every output is recomputed from the full store on demand, so a completed
//! recomputation always supersedes the previous one and no partial state is
//! ever observable.

use tracing::debug;

use crate::config::FacetPolicy;
use crate::display::{DetailClassifier, DisplayModel};
use crate::facets::{Facet, FacetCatalog, FacetSet};
use crate::filter::{EntitySelection, FilterEngine, FilterState, YearRange};
use crate::geo::{GeoExtractor, GeoPoint};
use crate::record::Record;
use crate::store::RecordStore;
use crate::types::{EntityType, FacetValue, FieldName};

/// Single-threaded exploration session over one immutable store.
pub struct ExplorerSession {
    store: RecordStore,
    policy: FacetPolicy,
    state: FilterState,
}

impl ExplorerSession {
    /// Start a session with the default facet policy and default filters.
    pub fn new(store: RecordStore) -> Self {
        Self::with_policy(store, FacetPolicy::default())
    }

    /// Start a session with an explicit facet policy.
    pub fn with_policy(store: RecordStore, policy: FacetPolicy) -> Self {
        Self {
            store,
            policy,
            state: FilterState::default(),
        }
    }

    /// The underlying record store.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// The active filter state.
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Replace the whole filter state.
    pub fn set_state(&mut self, state: FilterState) {
        self.state = state;
    }

    /// Change the entity-type selection.
    ///
    /// Equality selections are discarded: the facet controls are regenerated
    /// for the new selection and previous choices no longer apply to them.
    pub fn set_entity(&mut self, entity: EntitySelection) {
        self.state.entity = entity;
        self.state.equality.clear();
    }

    /// Set the production-year bounds.
    pub fn set_year_range(&mut self, years: YearRange) {
        self.state.years = years;
    }

    /// Require `field` to equal `value` exactly.
    pub fn set_equality_filter(&mut self, field: FieldName, value: FacetValue) {
        self.state.equality.insert(field, value);
    }

    /// Drop the equality requirement for `field`.
    pub fn clear_equality_filter(&mut self, field: &str) {
        self.state.equality.shift_remove(field);
    }

    /// Set the free-text query.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.state.search = search.into();
    }

    /// Reset every filter input to its default.
    pub fn clear(&mut self) {
        self.state = FilterState::default();
    }

    /// Entity types available in the selector.
    pub fn entity_types(&self) -> Vec<EntityType> {
        FacetCatalog::entity_types(self.store.records())
    }

    /// Facet set recomputed for the current entity selection.
    pub fn facets(&self) -> FacetSet {
        FacetCatalog::compute(self.store.records(), &self.state.entity)
    }

    /// Facets surfaced to filter controls under the session policy.
    pub fn surfaced_facets(&self) -> Vec<Facet> {
        self.facets().surfaced(&self.policy, &self.state.entity)
    }

    /// Records passing the active filter state, in original order.
    pub fn filtered(&self) -> Vec<&Record> {
        let filtered = FilterEngine::apply(self.store.records(), &self.state);
        debug!(
            total = self.store.len(),
            visible = filtered.len(),
            "filters applied"
        );
        filtered
    }

    /// Map points for the current filtered subset.
    pub fn points(&self) -> Vec<GeoPoint> {
        GeoExtractor::extract_points(self.filtered())
    }

    /// Display model for one record id, from a list click or map marker.
    ///
    /// Unknown ids yield `None`; selection is by id so markers and list rows
    /// share one code path.
    pub fn select(&self, record_id: &str) -> Option<DisplayModel> {
        self.store.get(record_id).map(DetailClassifier::classify)
    }
}
