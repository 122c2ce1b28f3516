use contracts::domain::a001_log_event::{FilterUpdate, MultiDimension};
use leptos::prelude::*;

use super::state::LogEventsFiltersState;

/// One checkbox per member plus the group-level "All".
#[component]
pub fn CheckboxGroup(
    dimension: MultiDimension,
    state: RwSignal<LogEventsFiltersState>,
) -> impl IntoView {
    let all_checked =
        move || state.with(|s| s.selection.is_all_selected(dimension));

    let on_all = move |ev: leptos::ev::Event| {
        let checked = event_target_checked(&ev);
        state.update(|s| {
            s.selection
                .apply(FilterUpdate::SelectAll { dimension, checked })
        });
    };

    let group_name = dimension.snapshot_key();

    view! {
        <fieldset class="filter-group">
            <legend class="filter-group__title">{dimension.display_name()}</legend>

            <label class="filter-group__item filter-group__item--all">
                <input
                    type="checkbox"
                    name=group_name
                    prop:checked=all_checked
                    on:change=on_all
                />
                "All"
            </label>

            {dimension
                .members()
                .iter()
                .map(|member| {
                    let label = member.label;
                    let is_checked = move || {
                        state.with(|s| s.selection.is_selected(dimension, label))
                    };
                    let on_change = move |ev: leptos::ev::Event| {
                        let checked = event_target_checked(&ev);
                        state.update(|s| {
                            s.selection.apply(FilterUpdate::Toggle {
                                dimension,
                                label: label.to_string(),
                                checked,
                            })
                        });
                    };

                    view! {
                        <label class="filter-group__item">
                            <input
                                type="checkbox"
                                name=group_name
                                value=label
                                prop:checked=is_checked
                                on:change=on_change
                            />
                            {label}
                        </label>
                    }
                })
                .collect_view()}
        </fieldset>
    }
}
