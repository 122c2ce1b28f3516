use chrono::TimeZone;
use serde_json::Value;

use super::error::FilterError;
use super::options::OptionLists;
use super::query::{to_query_params, QueryParams};
use super::selection::FilterSelection;
use super::storage::{FilterPersistence, FilterSnapshot, KeyValueStorage};
use super::validation::first_issue;

/// Receiver of finished request parameters (the log events table).
pub trait DataSetHandler {
    /// `extra` carries client-side filters; currently always an empty object
    fn apply(&self, params: QueryParams, extra: Value);
}

impl<F> DataSetHandler for F
where
    F: Fn(QueryParams, Value),
{
    fn apply(&self, params: QueryParams, extra: Value) {
        self(params, extra)
    }
}

/// Submit the filter panel.
///
/// Validates, builds the parameters, hands them to `handler` once and stores the
/// selection as the new applied snapshot, which is returned. An invalid
/// selection touches neither the handler nor storage.
pub fn apply_filters<S, Tz, H>(
    selection: &FilterSelection,
    options: &OptionLists,
    tz: &Tz,
    persistence: &FilterPersistence<S>,
    handler: &H,
) -> Result<FilterSnapshot, FilterError>
where
    S: KeyValueStorage,
    Tz: TimeZone,
    H: DataSetHandler + ?Sized,
{
    if let Some(issue) = first_issue(selection, options, tz) {
        return Err(FilterError::Invalid(issue));
    }

    let params = to_query_params(selection, tz)?;
    log::debug!("Applying log events filters: {} params", params.len());
    handler.apply(params, Value::Object(Default::default()));

    Ok(persistence.save(selection))
}
