#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Facet surfacing policy.
pub mod config;
/// Centralized field, entity, and display constants.
pub mod constants;
/// Field classification into display groups.
pub mod display;
/// Reusable demo runners shared by the demo binaries.
pub mod example_apps;
/// Facet discovery over the record collection.
pub mod facets;
/// Filter state and the combined predicate evaluator.
pub mod filter;
/// Geographic point extraction for map placement.
pub mod geo;
/// Record, detail, and value variant types.
pub mod record;
/// Session wiring for interactive exploration.
pub mod session;
/// Immutable record collection and dataset loading.
pub mod store;
/// Shared type aliases.
pub mod types;

mod errors;

pub use config::FacetPolicy;
pub use display::{DetailCategory, DetailClassifier, DisplayModel};
pub use errors::ExplorerError;
pub use facets::{Facet, FacetCatalog, FacetSet};
pub use filter::{EntitySelection, FilterEngine, FilterState, YearRange};
pub use geo::{GeoExtractor, GeoPoint};
pub use record::{Detail, FieldValue, Record};
pub use session::ExplorerSession;
pub use store::RecordStore;
pub use types::{EntityType, FacetValue, FieldName, RecordId};
