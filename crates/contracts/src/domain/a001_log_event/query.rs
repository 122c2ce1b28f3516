//! Translation of the filter selection into data request parameters.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::Serialize;

use super::dimension::{MultiDimension, SingleDimension, ALL_VALUE, TIME_END_PARAM, TIME_START_PARAM};
use super::error::FilterError;
use super::selection::{parse_local_time, FilterSelection};

/// UTC timestamps travel with a space between date and time
pub const UTC_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Flag(bool),
    Text(String),
}

/// Flat parameter object handed to the data-set handler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryParams(BTreeMap<&'static str, ParamValue>);

impl QueryParams {
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    pub fn flag(&self, name: &str) -> Option<bool> {
        match self.0.get(name)? {
            ParamValue::Flag(v) => Some(*v),
            ParamValue::Text(_) => None,
        }
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        match self.0.get(name)? {
            ParamValue::Text(v) => Some(v.as_str()),
            ParamValue::Flag(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Build request parameters from a selection.
///
/// Dropdowns on "All" are left out, every checkbox member becomes its own
/// boolean flag and both ends of the time range are sent as UTC. Succeeds for
/// every selection the validator accepts.
pub fn to_query_params<Tz: TimeZone>(selection: &FilterSelection, tz: &Tz) -> Result<QueryParams, FilterError> {
    let mut params = BTreeMap::new();

    for dim in SingleDimension::all() {
        let value = selection.value(dim);
        if value != ALL_VALUE {
            params.insert(dim.column(), ParamValue::Text(value.to_string()));
        }
    }

    for dim in MultiDimension::all() {
        for member in dim.members() {
            let checked = selection.is_selected(dim, member.label);
            params.insert(member.param, ParamValue::Flag(checked));
        }
    }

    let range = selection.time_range();
    params.insert(TIME_START_PARAM, ParamValue::Text(local_to_utc(&range.start, tz)?));
    params.insert(TIME_END_PARAM, ParamValue::Text(local_to_utc(&range.end, tz)?));

    Ok(QueryParams(params))
}

/// "2023-03-14T09:26" in UTC+3 -> "2023-03-14 06:26:00"
pub fn local_to_utc<Tz: TimeZone>(value: &str, tz: &Tz) -> Result<String, FilterError> {
    let naive = parse_local_time(value).ok_or_else(|| FilterError::InvalidTime {
        value: value.to_string(),
    })?;
    Ok(resolve_local(tz, naive).format(UTC_TIMESTAMP_FORMAT).to_string())
}

/// Ambiguous local times take the earliest instant. Times skipped by a DST
/// jump move forward by an hour, as browser `Date` parsing does.
pub(crate) fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> DateTime<Utc> {
    if let Some(dt) = tz.from_local_datetime(&naive).earliest() {
        return dt.with_timezone(&Utc);
    }
    let shifted = naive + chrono::Duration::hours(1);
    tz.from_local_datetime(&shifted)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&naive))
}
