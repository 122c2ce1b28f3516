//! Filter panel of the log events dashboard.

mod checkbox_group;
mod dropdown;
pub mod state;
mod time_range;

use std::rc::Rc;

use contracts::domain::a001_log_event::{
    apply_filters, first_issue, has_unapplied_changes, MultiDimension, OptionLoader,
    QueryParams, SingleDimension,
};
use leptos::prelude::*;
use serde_json::Value;

use self::checkbox_group::CheckboxGroup;
use self::dropdown::DimensionDropdown;
use self::state::{create_state, persistence};
use self::time_range::CreationTimeRange;
use crate::domain::a001_log_event::api::HttpColumnSource;
use crate::shared::components::filter_panel::FilterPanel;
use crate::system::auth::context::use_auth;

#[component]
pub fn LogEventsFilters(
    /// Receives the request parameters and the (empty) client-side extras
    data_set_handler: Callback<(QueryParams, Value)>,
) -> impl IntoView {
    let state = create_state();
    let is_expanded = RwSignal::new(true);
    let (auth_state, _) = use_auth();

    // Dropped with the component, which discards option lists still in flight
    let loader = StoredValue::new_local(OptionLoader::new(Rc::new(HttpColumnSource)));

    Effect::new(move |_| {
        let Some(token) = auth_state.with(|a| a.token.clone()) else {
            // Signed out: lists still loading belong to the old session
            let _ = loader.try_with_value(|l| l.cancel());
            return;
        };
        let deliver = move |dimension: SingleDimension, values: Vec<String>| {
            if state
                .try_update(|s| s.options.set(dimension, values))
                .is_none()
            {
                log::debug!("Filters are gone, {} options dropped", dimension.column());
            }
        };

        let Some(tasks) = loader.try_with_value(|l| l.start(Some(token), deliver)) else {
            return;
        };
        for task in tasks {
            wasm_bindgen_futures::spawn_local(task);
        }
    });

    let issue = Signal::derive(move || {
        state.with(|s| first_issue(&s.selection, &s.options, &chrono::Local))
    });
    let is_dirty = Signal::derive(move || {
        state.with(|s| has_unapplied_changes(&s.selection, s.applied.as_ref()))
    });
    let active_filters_count =
        Signal::derive(move || state.with(|s| s.selection.active_filter_count()));

    let on_submit = Callback::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let handler = |params: QueryParams, extra: Value| data_set_handler.run((params, extra));
        let result = state.with_untracked(|s| {
            apply_filters(
                &s.selection,
                &s.options,
                &chrono::Local,
                &persistence(),
                &handler,
            )
        });

        match result {
            Ok(snapshot) => state.update(|s| s.applied = Some(snapshot)),
            Err(e) => log::warn!("Log events filters not applied: {}", e),
        }
    });

    let actions = move || {
        view! {
            <button
                type="submit"
                class="btn-primary"
                disabled=move || issue.with(Option::is_some)
                title=move || issue.with(|i| i.as_ref().map(ToString::to_string).unwrap_or_default())
            >
                {move || if is_dirty.get() { "Apply" } else { "Applied" }}
            </button>
        }
        .into_any()
    };

    view! {
        <FilterPanel
            is_expanded=is_expanded
            active_filters_count=active_filters_count
            is_dirty=is_dirty
            on_submit=on_submit
            actions=actions
        >
            <div class="filter-panel__row">
                {MultiDimension::all()
                    .into_iter()
                    .map(|dimension| view! { <CheckboxGroup dimension=dimension state=state/> })
                    .collect_view()}
            </div>
            <div class="filter-panel__row">
                {SingleDimension::all()
                    .into_iter()
                    .map(|dimension| view! { <DimensionDropdown dimension=dimension state=state/> })
                    .collect_view()}
            </div>
            <CreationTimeRange state=state/>
        </FilterPanel>
    }
}
