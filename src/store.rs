//! Immutable record collection for an exploration session.
//!
//! The store is built once from the exported dataset shape and never mutated.
//! Structural problems at this boundary are fatal; everything downstream
//! degrades per record instead of failing.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::constants::dataset::{RECORDS_KEY, RECORDS_NAMESPACE};
use crate::errors::ExplorerError;
use crate::record::Record;
use crate::types::RecordId;

/// Outermost exported dataset shape.
#[derive(Deserialize)]
struct RawDataset {
    #[serde(rename = "heurist")]
    namespace: Option<RawNamespace>,
}

/// Namespace object wrapping the record array.
#[derive(Deserialize)]
struct RawNamespace {
    records: Option<Vec<Record>>,
}

/// Immutable record collection, keyed by record id in original order.
#[derive(Debug)]
pub struct RecordStore {
    records: IndexMap<RecordId, Record>,
}

impl RecordStore {
    /// Build a store from prebuilt records.
    ///
    /// Duplicate ids are a structural fault: exploration relies on ids being
    /// unique and stable for the whole session.
    pub fn new(records: Vec<Record>) -> Result<Self, ExplorerError> {
        let mut indexed = IndexMap::with_capacity(records.len());
        for record in records {
            let id = record.id.clone();
            if indexed.insert(id.clone(), record).is_some() {
                return Err(ExplorerError::InvalidStructure {
                    details: format!("duplicate record id '{id}'"),
                });
            }
        }
        debug!(records = indexed.len(), "record store built");
        Ok(Self { records: indexed })
    }

    /// Build a store from an in-memory dataset value.
    ///
    /// The expected shape is `{ "heurist": { "records": [...] } }`; a missing
    /// namespace or record array is a fatal initialization fault.
    pub fn from_json_value(value: Value) -> Result<Self, ExplorerError> {
        Self::from_raw(serde_json::from_value(value)?)
    }

    /// Parse and load a dataset from JSON text.
    pub fn from_json_str(data: &str) -> Result<Self, ExplorerError> {
        Self::from_raw(serde_json::from_str(data)?)
    }

    /// Read and load a dataset from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ExplorerError> {
        let data = fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    fn from_raw(raw: RawDataset) -> Result<Self, ExplorerError> {
        let namespace = raw
            .namespace
            .ok_or(ExplorerError::MissingNamespace(RECORDS_NAMESPACE))?;
        let records = namespace
            .records
            .ok_or_else(|| ExplorerError::InvalidStructure {
                details: format!("namespace '{RECORDS_NAMESPACE}' has no '{RECORDS_KEY}' array"),
            })?;
        Self::new(records)
    }

    /// All records in their original relative order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Look up one record by id.
    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.get(id)
    }

    /// Number of records in the collection.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
