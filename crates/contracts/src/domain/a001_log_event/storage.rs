//! Persisted snapshot of the filter panel.
//!
//! The snapshot is written on every successful apply and read back once when the
//! panel mounts. Storage itself is injected through [`KeyValueStorage`] so the
//! browser's `sessionStorage` can be swapped for [`MemoryStorage`].

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use serde_json::{Map, Value};

use super::dimension::{MultiDimension, SingleDimension, TIME_RANGE_SNAPSHOT_KEY};
use super::error::FilterError;
use super::selection::FilterSelection;

/// Key of the serialized filters inside session storage
pub const FILTERS_STORAGE_KEY: &str = "LogEventsFilters";

/// String key-value store with `sessionStorage` semantics.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove_item(&self, key: &str);
}

/// In-memory storage. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// Filters as of the last successful apply.
///
/// Every field is optional: a snapshot read back from storage only carries
/// the fields that were present and well-formed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSnapshot {
    multi: BTreeMap<MultiDimension, Vec<String>>,
    single: BTreeMap<SingleDimension, String>,
    creation_time: Option<(String, String)>,
}

impl FilterSnapshot {
    /// Full copy of the selection, sets written in display order
    pub fn capture(selection: &FilterSelection) -> Self {
        let multi = MultiDimension::all()
            .into_iter()
            .map(|dim| {
                let labels = dim
                    .members()
                    .iter()
                    .filter(|m| selection.is_selected(dim, m.label))
                    .map(|m| m.label.to_string())
                    .collect();
                (dim, labels)
            })
            .collect();
        let single = SingleDimension::all()
            .into_iter()
            .map(|dim| (dim, selection.value(dim).to_string()))
            .collect();
        let range = selection.time_range();

        Self {
            multi,
            single,
            creation_time: Some((range.start.clone(), range.end.clone())),
        }
    }

    pub fn members(&self, dimension: MultiDimension) -> Option<&[String]> {
        self.multi.get(&dimension).map(Vec::as_slice)
    }

    pub fn value(&self, dimension: SingleDimension) -> Option<&str> {
        self.single.get(&dimension).map(String::as_str)
    }

    pub fn creation_time(&self) -> Option<(&str, &str)> {
        self.creation_time
            .as_ref()
            .map(|(start, end)| (start.as_str(), end.as_str()))
    }

    /// Parse a stored payload field by field.
    ///
    /// Returns `None` when the payload is not a JSON object. Fields with an
    /// unexpected shape are skipped and keep their defaults on restore.
    pub fn from_json(raw: &str) -> Option<Self> {
        let value: Value = match serde_json::from_str(raw) {
            Ok(v) => v,
            Err(e) => {
                log::warn!("Cached log events filters are not valid JSON: {}", e);
                return None;
            }
        };
        let Value::Object(fields) = value else {
            log::warn!("Cached log events filters are not an object, ignoring");
            return None;
        };

        let mut snapshot = Self::default();
        for dim in MultiDimension::all() {
            if let Some(labels) = field::<Vec<String>>(&fields, dim.snapshot_key()) {
                snapshot.multi.insert(dim, labels);
            }
        }
        for dim in SingleDimension::all() {
            if let Some(value) = field::<String>(&fields, dim.snapshot_key()) {
                snapshot.single.insert(dim, value);
            }
        }
        snapshot.creation_time = field::<(String, String)>(&fields, TIME_RANGE_SNAPSHOT_KEY);

        Some(snapshot)
    }

    pub fn to_json(&self) -> Result<String, FilterError> {
        let mut fields = Map::new();
        for (dim, labels) in &self.multi {
            fields.insert(dim.snapshot_key().to_string(), Value::from(labels.clone()));
        }
        for (dim, value) in &self.single {
            fields.insert(dim.snapshot_key().to_string(), Value::from(value.as_str()));
        }
        if let Some((start, end)) = &self.creation_time {
            fields.insert(
                TIME_RANGE_SNAPSHOT_KEY.to_string(),
                Value::from(vec![start.as_str(), end.as_str()]),
            );
        }
        Ok(serde_json::to_string(&Value::Object(fields))?)
    }

    /// Overlay the stored fields onto `selection`.
    pub fn apply_to(&self, mut selection: FilterSelection) -> FilterSelection {
        for (dim, labels) in &self.multi {
            selection.set_selected(*dim, labels.iter().map(String::as_str));
        }
        for (dim, value) in &self.single {
            selection.set_value(*dim, value.clone());
        }
        if let Some((start, end)) = &self.creation_time {
            selection.set_time_range(start.clone(), end.clone());
        }
        selection
    }
}

fn field<T: serde::de::DeserializeOwned>(fields: &Map<String, Value>, key: &str) -> Option<T> {
    let value = fields.get(key)?;
    match serde_json::from_value(value.clone()) {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("Skipping cached filter field '{}': {}", key, e);
            None
        }
    }
}

/// Reads and writes the filter snapshot under a single storage key.
#[derive(Clone, Debug)]
pub struct FilterPersistence<S> {
    storage: S,
    key: &'static str,
}

impl<S: KeyValueStorage> FilterPersistence<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, FILTERS_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: &'static str) -> Self {
        Self { storage, key }
    }

    /// Last applied snapshot, `None` when absent or malformed
    pub fn snapshot(&self) -> Option<FilterSnapshot> {
        let raw = self.storage.get_item(self.key)?;
        FilterSnapshot::from_json(&raw)
    }

    /// Restore the stored filters on top of `defaults`.
    ///
    /// Also returns the snapshot itself, which is the panel's applied baseline.
    pub fn restore(&self, defaults: FilterSelection) -> Option<(FilterSelection, FilterSnapshot)> {
        let snapshot = self.snapshot()?;
        log::info!("Restoring cached log events filters");
        Some((snapshot.apply_to(defaults), snapshot))
    }

    /// Replace the stored snapshot with `selection`.
    ///
    /// Storage failures are logged and absorbed; the returned snapshot is what
    /// the panel treats as applied either way.
    pub fn save(&self, selection: &FilterSelection) -> FilterSnapshot {
        let snapshot = FilterSnapshot::capture(selection);
        match snapshot.to_json() {
            Ok(raw) => {
                if let Err(e) = self.storage.set_item(self.key, &raw) {
                    log::warn!("Failed to cache log events filters: {}", e);
                }
            }
            Err(e) => log::warn!("Failed to cache log events filters: {}", e),
        }
        snapshot
    }
}
