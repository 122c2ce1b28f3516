use chrono::TimeZone;
use thiserror::Error;

use super::dimension::{MultiDimension, SingleDimension, ALL_VALUE};
use super::options::OptionLists;
use super::query::resolve_local;
use super::selection::{parse_local_time, FilterSelection};

/// Reason the filter panel cannot be submitted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("select at least one of {}", .0.display_name())]
    NothingSelected(MultiDimension),

    #[error("both start and end time are required")]
    MissingTime,

    #[error("'{0}' is not a valid date and time")]
    UnreadableTime(String),

    #[error("end time is before start time")]
    InvertedRange,

    #[error("'{value}' is not a known {}", .dimension.display_name())]
    UnknownValue {
        dimension: SingleDimension,
        value: String,
    },
}

/// First problem found, checked in panel order: checkbox groups, time range, dropdowns.
///
/// The range is compared as the instants the request will carry, so a start
/// inside a DST gap is judged after it moves forward.
pub fn first_issue<Tz: TimeZone>(
    selection: &FilterSelection,
    options: &OptionLists,
    tz: &Tz,
) -> Option<ValidationIssue> {
    if let Some(dim) = MultiDimension::all()
        .into_iter()
        .find(|dim| selection.selected(*dim).is_empty())
    {
        return Some(ValidationIssue::NothingSelected(dim));
    }

    let range = selection.time_range();
    if range.start.trim().is_empty() || range.end.trim().is_empty() {
        return Some(ValidationIssue::MissingTime);
    }
    let Some(start) = parse_local_time(&range.start) else {
        return Some(ValidationIssue::UnreadableTime(range.start.clone()));
    };
    let Some(end) = parse_local_time(&range.end) else {
        return Some(ValidationIssue::UnreadableTime(range.end.clone()));
    };
    if resolve_local(tz, end) < resolve_local(tz, start) {
        return Some(ValidationIssue::InvertedRange);
    }

    SingleDimension::all().into_iter().find_map(|dim| {
        let value = selection.value(dim);
        if value == ALL_VALUE || options.contains(dim, value) {
            None
        } else {
            Some(ValidationIssue::UnknownValue {
                dimension: dim,
                value: value.to_string(),
            })
        }
    })
}

/// Submit must stay disabled while this is `true`.
pub fn is_invalid<Tz: TimeZone>(selection: &FilterSelection, options: &OptionLists, tz: &Tz) -> bool {
    first_issue(selection, options, tz).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_log_event::selection::FilterUpdate;
    use crate::domain::a001_log_event::test_zones::SpringForward;
    use chrono::{NaiveDate, NaiveDateTime, Utc};

    fn moment() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 3, 14)
            .and_then(|d| d.and_hms_opt(9, 26, 53))
            .expect("valid date")
    }

    fn loaded_options() -> OptionLists {
        let mut options = OptionLists::default();
        for dim in SingleDimension::all() {
            options.set(dim, dim.fallback_options().iter().map(|s| s.to_string()).collect());
        }
        options
    }

    #[test]
    fn test_defaults_are_valid() {
        let sel = FilterSelection::new(moment());
        assert!(!is_invalid(&sel, &OptionLists::default(), &Utc));
    }

    #[test]
    fn test_empty_group_is_invalid() {
        let mut sel = FilterSelection::new(moment());
        sel.apply(FilterUpdate::SelectAll {
            dimension: MultiDimension::Priority,
            checked: false,
        });
        assert_eq!(
            first_issue(&sel, &OptionLists::default(), &Utc),
            Some(ValidationIssue::NothingSelected(MultiDimension::Priority))
        );
    }

    #[test]
    fn test_missing_time_is_invalid() {
        let mut sel = FilterSelection::new(moment());
        sel.apply(FilterUpdate::SetEnd(String::new()));
        assert_eq!(
            first_issue(&sel, &OptionLists::default(), &Utc),
            Some(ValidationIssue::MissingTime)
        );
    }

    #[test]
    fn test_unreadable_time_is_invalid() {
        let mut sel = FilterSelection::new(moment());
        sel.apply(FilterUpdate::SetStart("2023-13-40T99:00".into()));
        assert!(matches!(
            first_issue(&sel, &OptionLists::default(), &Utc),
            Some(ValidationIssue::UnreadableTime(_))
        ));
    }

    #[test]
    fn test_inverted_range_with_warning_only() {
        // Warning only, other groups untouched, dropdowns on All, end before start
        let mut sel = FilterSelection::new(moment());
        sel.set_selected(MultiDimension::Severity, ["Warning"]);
        sel.set_time_range("2023-03-14T10:00", "2023-03-14T09:59:59");

        assert!(is_invalid(&sel, &OptionLists::default(), &Utc));
        assert_eq!(
            first_issue(&sel, &OptionLists::default(), &Utc),
            Some(ValidationIssue::InvertedRange)
        );
    }

    #[test]
    fn test_equal_endpoints_are_valid() {
        let mut sel = FilterSelection::new(moment());
        sel.set_time_range("2023-03-14T10:00", "2023-03-14T10:00:00");
        assert!(!is_invalid(&sel, &OptionLists::default(), &Utc));
    }

    #[test]
    fn test_start_in_dst_gap_is_compared_after_shift() {
        // 02:30 does not exist and becomes 03:30, which is after 03:00
        let mut sel = FilterSelection::new(moment());
        sel.set_time_range("2023-03-26T02:30", "2023-03-26T03:00");

        assert!(!is_invalid(&sel, &OptionLists::default(), &Utc));
        assert_eq!(
            first_issue(&sel, &OptionLists::default(), &SpringForward),
            Some(ValidationIssue::InvertedRange)
        );
    }

    #[test]
    fn test_range_across_dst_gap_is_valid() {
        let mut sel = FilterSelection::new(moment());
        sel.set_time_range("2023-03-26T01:30", "2023-03-26T03:00");
        assert!(!is_invalid(&sel, &OptionLists::default(), &SpringForward));
    }

    #[test]
    fn test_dropdown_value_must_be_known() {
        let options = loaded_options();
        let mut sel = FilterSelection::new(moment());

        sel.set_value(SingleDimension::Application, "CRM");
        assert!(!is_invalid(&sel, &options, &Utc));

        sel.set_value(SingleDimension::Application, "Mainframe");
        assert_eq!(
            first_issue(&sel, &options, &Utc),
            Some(ValidationIssue::UnknownValue {
                dimension: SingleDimension::Application,
                value: "Mainframe".into(),
            })
        );
    }

    #[test]
    fn test_value_becomes_invalid_when_list_is_replaced() {
        let mut options = loaded_options();
        let mut sel = FilterSelection::new(moment());
        sel.set_value(SingleDimension::EventContext, "ShipOrder");
        assert!(!is_invalid(&sel, &options, &Utc));

        options.set(SingleDimension::EventContext, vec!["CreateOrder".into()]);
        assert!(is_invalid(&sel, &options, &Utc));
        assert_eq!(sel.value(SingleDimension::EventContext), "ShipOrder");
    }

    #[test]
    fn test_issue_messages() {
        assert_eq!(
            ValidationIssue::NothingSelected(MultiDimension::Severity).to_string(),
            "select at least one of Severities"
        );
        assert_eq!(
            ValidationIssue::UnknownValue {
                dimension: SingleDimension::EventContext,
                value: "X".into(),
            }
            .to_string(),
            "'X' is not a known Process/Service"
        );
    }
}
