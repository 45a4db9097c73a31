use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::sync::Arc;

use crate::value::CoercedValue;

/// A single ingested row: field name to raw string value.
///
/// A field may be missing entirely or present with a null value; both read as
/// absent. Records are never mutated after ingestion.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, Option<String>>,
}

impl Record {
    pub fn new(fields: IndexMap<String, Option<String>>) -> Self {
        Self { fields }
    }

    /// Returns the raw value of a field, or `None` when it is missing or null
    pub fn raw(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(|v| v.as_deref())
    }

    /// Returns the raw value used as a grouping key. Absent keys group under `""`.
    pub fn key(&self, field: &str) -> &str {
        self.raw(field).unwrap_or("")
    }

    pub fn number(&self, field: &str) -> CoercedValue {
        CoercedValue::parse(self.raw(field))
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), Some(v.into())))
                .collect(),
        }
    }
}

/// The full, ordered set of records the pipeline runs over.
///
/// A reload builds a new `RecordSet`; there is no way to mutate one in place.
/// Clones share the same backing storage.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordSet {
    records: Arc<Vec<Record>>,
}

impl RecordSet {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records: Arc::new(records),
        }
    }

    pub fn records(&self) -> &[Record] {
        self.records.as_slice()
    }
}

impl Deref for RecordSet {
    type Target = [Record];

    fn deref(&self) -> &Self::Target {
        self.records.as_slice()
    }
}

impl From<Vec<Record>> for RecordSet {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<Record> for RecordSet {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
