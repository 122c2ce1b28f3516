use contracts::domain::a001_log_event::{FilterUpdate, SingleDimension, ALL_VALUE};
use leptos::prelude::*;

use super::state::LogEventsFiltersState;

/// "All" followed by the loaded column values.
///
/// A restored value that is not among the options yet keeps its own entry, so
/// the form still shows it (the validator flags it until the list arrives).
#[component]
pub fn DimensionDropdown(
    dimension: SingleDimension,
    state: RwSignal<LogEventsFiltersState>,
) -> impl IntoView {
    let current = move || state.with(|s| s.selection.value(dimension).to_string());

    let choices = move || {
        state.with(|s| {
            let mut values = vec![ALL_VALUE.to_string()];
            values.extend(s.options.get(dimension).iter().cloned());

            let selected = s.selection.value(dimension);
            if !values.iter().any(|v| v == selected) {
                values.push(selected.to_string());
            }
            values
        })
    };

    let on_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        state.update(|s| s.selection.apply(FilterUpdate::SetValue { dimension, value }));
    };

    view! {
        <div class="form-group filter-dropdown">
            <label for=dimension.element_id()>{dimension.display_name()}</label>
            <select
                id=dimension.element_id()
                name=dimension.column()
                prop:value=current
                on:change=on_change
            >
                {move || {
                    let selected = current();
                    choices()
                        .into_iter()
                        .map(|value| {
                            let is_selected = value == selected;
                            view! {
                                <option value=value.clone() selected=is_selected>
                                    {value.clone()}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}
