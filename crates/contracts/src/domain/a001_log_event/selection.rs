use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDateTime;

use super::dimension::{MultiDimension, SingleDimension, ALL_VALUE};

/// Format of `datetime-local` inputs with seconds precision
pub const LOCAL_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Fraction-tolerant parse format; minute-precision input is padded first
const LOCAL_DATETIME_PARSE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

static NONE_SELECTED: BTreeSet<&'static str> = BTreeSet::new();

/// Parse a `datetime-local` value, with or without seconds.
///
/// "2023-03-14T09:26" -> 2023-03-14 09:26:00
pub fn parse_local_time(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.len() == 16 {
        let padded = format!("{}:00", value);
        return NaiveDateTime::parse_from_str(&padded, LOCAL_DATETIME_PARSE_FORMAT).ok();
    }
    NaiveDateTime::parse_from_str(value, LOCAL_DATETIME_PARSE_FORMAT).ok()
}

/// Creation time range as entered by the user, both ends in local time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
}

impl TimeRange {
    /// Range collapsed onto a single instant
    pub fn at(moment: NaiveDateTime) -> Self {
        let value = moment.format(LOCAL_DATETIME_FORMAT).to_string();
        Self {
            start: value.clone(),
            end: value,
        }
    }
}

/// A single edit of the filter panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterUpdate {
    /// Check or uncheck one member of a checkbox group
    Toggle {
        dimension: MultiDimension,
        label: String,
        checked: bool,
    },
    /// The group-level "All" checkbox: select every member or none
    SelectAll {
        dimension: MultiDimension,
        checked: bool,
    },
    SetValue {
        dimension: SingleDimension,
        value: String,
    },
    SetStart(String),
    SetEnd(String),
}

/// Current value of every filter dimension.
///
/// Checkbox groups hold the universe's own labels, so a member outside the
/// universe can never be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    multi: BTreeMap<MultiDimension, BTreeSet<&'static str>>,
    single: BTreeMap<SingleDimension, String>,
    time_range: TimeRange,
}

impl FilterSelection {
    /// Defaults: every member checked, every dropdown on "All", both ends at `now`.
    pub fn new(now: NaiveDateTime) -> Self {
        let multi = MultiDimension::all()
            .into_iter()
            .map(|dim| (dim, dim.members().iter().map(|m| m.label).collect()))
            .collect();
        let single = SingleDimension::all()
            .into_iter()
            .map(|dim| (dim, ALL_VALUE.to_string()))
            .collect();

        Self {
            multi,
            single,
            time_range: TimeRange::at(now),
        }
    }

    /// Defaults anchored at the current local time
    pub fn now_local() -> Self {
        Self::new(chrono::Local::now().naive_local())
    }

    pub fn selected(&self, dimension: MultiDimension) -> &BTreeSet<&'static str> {
        self.multi.get(&dimension).unwrap_or(&NONE_SELECTED)
    }

    pub fn is_selected(&self, dimension: MultiDimension, label: &str) -> bool {
        self.selected(dimension).contains(label)
    }

    /// `true` when every member of the universe is checked
    pub fn is_all_selected(&self, dimension: MultiDimension) -> bool {
        self.selected(dimension).len() == dimension.members().len()
    }

    /// Replace the whole set. Labels outside the universe are dropped.
    pub fn set_selected<'a, I>(&mut self, dimension: MultiDimension, labels: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let set = labels
            .into_iter()
            .filter_map(|label| dimension.member(label))
            .map(|m| m.label)
            .collect();
        self.multi.insert(dimension, set);
    }

    pub fn value(&self, dimension: SingleDimension) -> &str {
        self.single
            .get(&dimension)
            .map(String::as_str)
            .unwrap_or(ALL_VALUE)
    }

    pub fn set_value(&mut self, dimension: SingleDimension, value: impl Into<String>) {
        self.single.insert(dimension, value.into());
    }

    pub fn time_range(&self) -> &TimeRange {
        &self.time_range
    }

    pub fn set_time_range(&mut self, start: impl Into<String>, end: impl Into<String>) {
        self.time_range = TimeRange {
            start: start.into(),
            end: end.into(),
        };
    }

    /// Single entry point for every edit coming from the panel.
    pub fn apply(&mut self, update: FilterUpdate) {
        match update {
            FilterUpdate::Toggle {
                dimension,
                label,
                checked,
            } => {
                let Some(member) = dimension.member(&label) else {
                    log::debug!(
                        "Ignoring unknown {} label '{}'",
                        dimension.display_name(),
                        label
                    );
                    return;
                };
                let set = self.multi.entry(dimension).or_default();
                if checked {
                    set.insert(member.label);
                } else {
                    set.remove(member.label);
                }
            }
            FilterUpdate::SelectAll { dimension, checked } => {
                // "All" is a meta-control, unchecking it empties the group
                if checked {
                    self.set_selected(dimension, dimension.members().iter().map(|m| m.label));
                } else {
                    self.multi.insert(dimension, BTreeSet::new());
                }
            }
            FilterUpdate::SetValue { dimension, value } => self.set_value(dimension, value),
            FilterUpdate::SetStart(start) => self.time_range.start = start,
            FilterUpdate::SetEnd(end) => self.time_range.end = end,
        }
    }

    /// Number of dimensions narrowed below "everything" (badge in the panel header).
    /// The time range always narrows and is not counted.
    pub fn active_filter_count(&self) -> usize {
        let multi = MultiDimension::all()
            .into_iter()
            .filter(|dim| !self.is_all_selected(*dim))
            .count();
        let single = SingleDimension::all()
            .into_iter()
            .filter(|dim| self.value(*dim) != ALL_VALUE)
            .count();
        multi + single
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn moment() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 3, 14)
            .and_then(|d| d.and_hms_opt(9, 26, 53))
            .expect("valid date")
    }

    #[test]
    fn test_parse_local_time() {
        assert_eq!(parse_local_time("2023-03-14T09:26"), Some(moment() - chrono::Duration::seconds(53)));
        assert_eq!(parse_local_time("2023-03-14T09:26:53"), Some(moment()));
        assert_eq!(parse_local_time("2023-03-14T09:26:53.000"), Some(moment()));
        assert_eq!(parse_local_time(""), None);
        assert_eq!(parse_local_time("2023-03-14"), None);
        assert_eq!(parse_local_time("yesterday"), None);
    }

    #[test]
    fn test_defaults() {
        let sel = FilterSelection::new(moment());
        for dim in MultiDimension::all() {
            assert!(sel.is_all_selected(dim));
        }
        for dim in SingleDimension::all() {
            assert_eq!(sel.value(dim), ALL_VALUE);
        }
        assert_eq!(sel.time_range().start, "2023-03-14T09:26:53");
        assert_eq!(sel.time_range().start, sel.time_range().end);
        assert_eq!(sel.active_filter_count(), 0);
    }

    #[test]
    fn test_toggle_member() {
        let mut sel = FilterSelection::new(moment());
        sel.apply(FilterUpdate::Toggle {
            dimension: MultiDimension::Severity,
            label: "Info".into(),
            checked: false,
        });
        assert!(!sel.is_selected(MultiDimension::Severity, "Info"));
        assert_eq!(sel.selected(MultiDimension::Severity).len(), 3);
        assert_eq!(sel.active_filter_count(), 1);

        sel.apply(FilterUpdate::Toggle {
            dimension: MultiDimension::Severity,
            label: "Info".into(),
            checked: true,
        });
        assert!(sel.is_all_selected(MultiDimension::Severity));
    }

    #[test]
    fn test_toggle_unknown_label_is_ignored() {
        let mut sel = FilterSelection::new(moment());
        sel.apply(FilterUpdate::Toggle {
            dimension: MultiDimension::Priority,
            label: "Urgent".into(),
            checked: true,
        });
        assert_eq!(sel.selected(MultiDimension::Priority).len(), 3);
        assert!(!sel.is_selected(MultiDimension::Priority, "Urgent"));
    }

    #[test]
    fn test_all_control_clears_whole_group() {
        let mut sel = FilterSelection::new(moment());
        sel.apply(FilterUpdate::SelectAll {
            dimension: MultiDimension::Category,
            checked: false,
        });
        assert!(sel.selected(MultiDimension::Category).is_empty());

        sel.apply(FilterUpdate::SelectAll {
            dimension: MultiDimension::Category,
            checked: true,
        });
        assert!(sel.is_all_selected(MultiDimension::Category));
    }

    #[test]
    fn test_set_selected_filters_universe() {
        let mut sel = FilterSelection::new(moment());
        sel.set_selected(MultiDimension::Severity, ["Error", "All", "Fatal", "Info"]);
        let selected: Vec<_> = sel.selected(MultiDimension::Severity).iter().copied().collect();
        assert_eq!(selected, vec!["Error", "Info"]);
    }

    #[test]
    fn test_single_value_and_time_updates() {
        let mut sel = FilterSelection::new(moment());
        sel.apply(FilterUpdate::SetValue {
            dimension: SingleDimension::Application,
            value: "CRM".into(),
        });
        sel.apply(FilterUpdate::SetStart("2023-03-01T00:00".into()));
        sel.apply(FilterUpdate::SetEnd("2023-03-02T00:00".into()));

        assert_eq!(sel.value(SingleDimension::Application), "CRM");
        assert_eq!(sel.value(SingleDimension::EaiDomain), ALL_VALUE);
        assert_eq!(sel.time_range().start, "2023-03-01T00:00");
        assert_eq!(sel.time_range().end, "2023-03-02T00:00");
        assert_eq!(sel.active_filter_count(), 1);
    }
}
