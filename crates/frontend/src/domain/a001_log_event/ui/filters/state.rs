use contracts::domain::a001_log_event::{FilterPersistence, FilterSelection, FilterSnapshot, OptionLists};
use leptos::prelude::*;

use crate::shared::session_storage::SessionStorage;

#[derive(Clone, Debug)]
pub struct LogEventsFiltersState {
    // form
    pub selection: FilterSelection,

    // dropdown option lists, empty until loaded
    pub options: OptionLists,

    // last submitted snapshot, drives the red/green outline
    pub applied: Option<FilterSnapshot>,
}

impl Default for LogEventsFiltersState {
    fn default() -> Self {
        Self {
            selection: FilterSelection::now_local(),
            options: OptionLists::default(),
            applied: None,
        }
    }
}

pub fn persistence() -> FilterPersistence<SessionStorage> {
    FilterPersistence::new(SessionStorage)
}

/// Defaults, overlaid with whatever the tab applied last
pub fn create_state() -> RwSignal<LogEventsFiltersState> {
    let mut state = LogEventsFiltersState::default();

    if let Some((selection, applied)) = persistence().restore(state.selection.clone()) {
        state.selection = selection;
        state.applied = Some(applied);
    }

    RwSignal::new(state)
}
