//! Timezones with DST transitions for tests.

use chrono::{Duration, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, TimeZone};

/// Central European zone around the 2023 spring change: UTC+1 until
/// 2023-03-26 01:00 UTC, UTC+2 after. Local 02:00..03:00 that day does not exist.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SpringForward;

impl SpringForward {
    fn switch_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 3, 26)
            .and_then(|d| d.and_hms_opt(1, 0, 0))
            .expect("valid switch instant")
    }

    fn winter() -> FixedOffset {
        FixedOffset::east_opt(3600).expect("valid offset")
    }

    fn summer() -> FixedOffset {
        FixedOffset::east_opt(2 * 3600).expect("valid offset")
    }
}

impl TimeZone for SpringForward {
    type Offset = FixedOffset;

    fn from_offset(_offset: &FixedOffset) -> Self {
        SpringForward
    }

    fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
        match local.and_hms_opt(0, 0, 0) {
            Some(midnight) => self.offset_from_local_datetime(&midnight),
            None => LocalResult::None,
        }
    }

    fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
        let switch = Self::switch_at();
        let as_winter = *local - Duration::hours(1) < switch;
        let as_summer = *local - Duration::hours(2) >= switch;
        match (as_winter, as_summer) {
            (true, false) => LocalResult::Single(Self::winter()),
            (false, true) => LocalResult::Single(Self::summer()),
            (true, true) => LocalResult::Ambiguous(Self::winter(), Self::summer()),
            (false, false) => LocalResult::None,
        }
    }

    fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
        match utc.and_hms_opt(0, 0, 0) {
            Some(midnight) => self.offset_from_utc_datetime(&midnight),
            None => Self::winter(),
        }
    }

    fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
        if *utc < Self::switch_at() {
            Self::winter()
        } else {
            Self::summer()
        }
    }
}
