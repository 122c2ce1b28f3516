use contracts::domain::a001_log_event::FilterUpdate;
use leptos::prelude::*;

use super::state::LogEventsFiltersState;

/// Start and end of the creation time window, in local time.
#[component]
pub fn CreationTimeRange(state: RwSignal<LogEventsFiltersState>) -> impl IntoView {
    let start = move || state.with(|s| s.selection.time_range().start.clone());
    let end = move || state.with(|s| s.selection.time_range().end.clone());

    view! {
        <fieldset class="filter-group filter-group--time">
            <legend class="filter-group__title">"Creation Time"</legend>

            <div class="form-group">
                <label for="creation_time_start">"From"</label>
                <input
                    type="datetime-local"
                    id="creation_time_start"
                    step="1"
                    prop:value=start
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.selection.apply(FilterUpdate::SetStart(value)));
                    }
                />
            </div>

            <div class="form-group">
                <label for="creation_time_end">"To"</label>
                <input
                    type="datetime-local"
                    id="creation_time_end"
                    step="1"
                    prop:value=end
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.selection.apply(FilterUpdate::SetEnd(value)));
                    }
                />
            </div>
        </fieldset>
    }
}
