pub mod filters;
pub mod list;

pub use filters::LogEventsFilters;
pub use list::LogEventsTable;
