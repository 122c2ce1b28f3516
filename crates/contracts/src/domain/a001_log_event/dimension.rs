//! Filter dimensions of the log events panel.
//!
//! Every dimension is enumerated here together with everything the rest of the
//! filter core needs to know about it: labels, universes, request parameter names,
//! snapshot field names and the static fallback options.

/// Wildcard value of a single-valued dimension: no narrowing on that column.
pub const ALL_VALUE: &str = "All";

/// One selectable member of a multi-valued dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Member {
    /// Checkbox label, also the value written to the snapshot
    pub label: &'static str,
    /// Boolean request parameter carrying this member
    pub param: &'static str,
}

const SEVERITIES: &[Member] = &[
    Member { label: "Error", param: "sev_err" },
    Member { label: "Warning", param: "sev_warn" },
    Member { label: "Success", param: "sev_succ" },
    Member { label: "Info", param: "sev_info" },
];

const PRIORITIES: &[Member] = &[
    Member { label: "High", param: "priority_high" },
    Member { label: "Medium", param: "priority_med" },
    Member { label: "Low", param: "priority_low" },
];

const CATEGORIES: &[Member] = &[
    Member { label: "Status", param: "status" },
    Member { label: "Start", param: "start" },
    Member { label: "Stop", param: "stop" },
    Member { label: "Security", param: "security" },
    Member { label: "Heartbeat", param: "heartbeat" },
];

/// Checkbox-group dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MultiDimension {
    Severity,
    Priority,
    Category,
}

impl MultiDimension {
    /// Every dimension, in display order
    pub fn all() -> [MultiDimension; 3] {
        [
            MultiDimension::Severity,
            MultiDimension::Priority,
            MultiDimension::Category,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MultiDimension::Severity => "Severities",
            MultiDimension::Priority => "Priorities",
            MultiDimension::Category => "Categories",
        }
    }

    /// Field name inside the persisted snapshot
    pub fn snapshot_key(&self) -> &'static str {
        match self {
            MultiDimension::Severity => "severity",
            MultiDimension::Priority => "priority",
            MultiDimension::Category => "categoryName",
        }
    }

    /// The fixed universe of this dimension, in display order
    pub fn members(&self) -> &'static [Member] {
        match self {
            MultiDimension::Severity => SEVERITIES,
            MultiDimension::Priority => PRIORITIES,
            MultiDimension::Category => CATEGORIES,
        }
    }

    /// Look up a member by label. Labels outside the universe yield `None`.
    pub fn member(&self, label: &str) -> Option<&'static Member> {
        self.members().iter().find(|m| m.label == label)
    }
}

/// Dropdown dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SingleDimension {
    EaiDomain,
    BusinessDomain,
    BusinessSubdomain,
    Application,
    EventContext,
}

impl SingleDimension {
    pub fn all() -> [SingleDimension; 5] {
        [
            SingleDimension::EaiDomain,
            SingleDimension::BusinessDomain,
            SingleDimension::BusinessSubdomain,
            SingleDimension::Application,
            SingleDimension::EventContext,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SingleDimension::EaiDomain => "EAI Domain",
            SingleDimension::BusinessDomain => "Business Domain",
            SingleDimension::BusinessSubdomain => "Business SubDomain",
            SingleDimension::Application => "Application",
            SingleDimension::EventContext => "Process/Service",
        }
    }

    /// DOM id of the dropdown
    pub fn element_id(&self) -> &'static str {
        match self {
            SingleDimension::EaiDomain => "EAI_DOMAIN_ID",
            SingleDimension::BusinessDomain => "BUSINESS_DOMAIN_ID",
            SingleDimension::BusinessSubdomain => "BUSINESS_SUBDOMAIN_ID",
            SingleDimension::Application => "APPLICATION_ID",
            SingleDimension::EventContext => "PROCESS_SERVICE_ID",
        }
    }

    /// Column name used both for column enumeration and as the request parameter
    pub fn column(&self) -> &'static str {
        match self {
            SingleDimension::EaiDomain => "eai_domain",
            SingleDimension::BusinessDomain => "business_domain",
            SingleDimension::BusinessSubdomain => "business_subdomain",
            SingleDimension::Application => "application",
            SingleDimension::EventContext => "event_context",
        }
    }

    pub fn snapshot_key(&self) -> &'static str {
        match self {
            SingleDimension::EaiDomain => "eaiDomain",
            SingleDimension::BusinessDomain => "businessDomain",
            SingleDimension::BusinessSubdomain => "businessSubdomain",
            SingleDimension::Application => "application",
            SingleDimension::EventContext => "eventContext",
        }
    }

    /// Static option list used when the column request fails
    pub fn fallback_options(&self) -> &'static [&'static str] {
        match self {
            SingleDimension::EaiDomain => &["CORP", "RETAIL", "WHOLESALE"],
            SingleDimension::BusinessDomain => &["Finance", "Human Resources", "Logistics", "Sales"],
            SingleDimension::BusinessSubdomain => &[
                "Accounts Payable",
                "Accounts Receivable",
                "Payroll",
                "Shipping",
                "Orders",
            ],
            SingleDimension::Application => &["Billing", "CRM", "ERP", "Inventory", "Payments"],
            SingleDimension::EventContext => &[
                "CreateOrder",
                "ShipOrder",
                "PostInvoice",
                "SyncCustomer",
                "RunPayroll",
            ],
        }
    }
}

/// Snapshot field holding the `[start, end]` pair
pub const TIME_RANGE_SNAPSHOT_KEY: &str = "creationTime";
pub const TIME_START_PARAM: &str = "creation_time_start";
pub const TIME_END_PARAM: &str = "creation_time_end";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_lookup() {
        assert_eq!(
            MultiDimension::Severity.member("Warning").map(|m| m.param),
            Some("sev_warn")
        );
        assert!(MultiDimension::Severity.member("All").is_none());
        assert!(MultiDimension::Priority.member("Error").is_none());
    }

    #[test]
    fn test_param_names_are_unique() {
        let mut names: Vec<&str> = MultiDimension::all()
            .iter()
            .flat_map(|d| d.members().iter().map(|m| m.param))
            .chain(SingleDimension::all().iter().map(|d| d.column()))
            .chain([TIME_START_PARAM, TIME_END_PARAM])
            .collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_fallback_options_never_contain_wildcard() {
        for dim in SingleDimension::all() {
            assert!(!dim.fallback_options().is_empty());
            assert!(!dim.fallback_options().contains(&ALL_VALUE));
        }
    }
}
