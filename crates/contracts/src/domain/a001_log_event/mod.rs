//! Log events: table DTO and the filter panel core.
//!
//! The filter core is split the same way the panel works at runtime:
//! `selection` holds the live values, `storage` restores and saves snapshots,
//! `options` loads dropdown lists, `validation` and `diff` derive the button state,
//! `query` builds request parameters and `apply` ties submission together.

pub mod apply;
pub mod diff;
pub mod dimension;
pub mod dto;
pub mod error;
pub mod options;
pub mod query;
pub mod selection;
pub mod storage;
#[cfg(test)]
mod test_zones;
pub mod validation;

pub use apply::{apply_filters, DataSetHandler};
pub use diff::has_unapplied_changes;
pub use dimension::{Member, MultiDimension, SingleDimension, ALL_VALUE};
pub use error::FilterError;
pub use options::{load_column, ColumnSource, LoadEpoch, LoadTask, LoadTicket, OptionLists, OptionLoader};
pub use query::{to_query_params, ParamValue, QueryParams};
pub use selection::{parse_local_time, FilterSelection, FilterUpdate, TimeRange};
pub use storage::{
    FilterPersistence, FilterSnapshot, KeyValueStorage, MemoryStorage, FILTERS_STORAGE_KEY,
};
pub use validation::{first_issue, is_invalid, ValidationIssue};
