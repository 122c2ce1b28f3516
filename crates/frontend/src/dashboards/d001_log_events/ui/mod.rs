mod dashboard;

pub use dashboard::LogEventsDashboard;
