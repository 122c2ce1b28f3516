pub mod d001_log_events;

pub use d001_log_events::ui::LogEventsDashboard;
