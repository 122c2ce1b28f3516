use crate::shared::icons::icon;
use leptos::prelude::*;

const DIRTY_BORDER_COLOR: &str = "rgb(255, 0, 0)";
const CLEAN_BORDER_COLOR: &str = "rgb(82, 152, 68)";

/// FilterPanel component - collapsible filter form with an actions column
///
/// The outline turns red while the form holds changes that were not applied yet.
#[component]
pub fn FilterPanel<A>(
    /// Whether the filter panel is expanded
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Form differs from what was last applied
    #[prop(into)]
    is_dirty: Signal<bool>,

    /// Form submit handler
    on_submit: Callback<leptos::ev::SubmitEvent>,

    /// Submit button and friends, hidden while collapsed
    actions: A,

    /// Filter content (form fields)
    children: Children,
) -> impl IntoView
where
    A: Fn() -> AnyView + 'static + Send,
{
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    let border_color = move || {
        if is_dirty.get() {
            DIRTY_BORDER_COLOR
        } else {
            CLEAN_BORDER_COLOR
        }
    };

    view! {
        <form
            class="filter-panel"
            style:border-color=border_color
            on:submit=move |ev| on_submit.run(ev)
        >
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=toggle_expanded
                >
                    <svg
                        width="16"
                        height="16"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        class=move || {
                            if is_expanded.get() {
                                "filter-panel__chevron filter-panel__chevron--expanded"
                            } else {
                                "filter-panel__chevron"
                            }
                        }
                    >
                        <polyline points="6 9 12 15 18 9"></polyline>
                    </svg>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        if count > 0 {
                            view! {
                                <span class="badge badge--primary">{count}</span>
                            }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                </div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    {children()}
                </div>
                <div class="filter-panel-actions">
                    {actions()}
                </div>
            </div>
        </form>
    }
}
