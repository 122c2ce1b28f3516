use contracts::domain::a001_log_event::QueryParams;
use leptos::prelude::*;
use serde_json::Value;
use thaw::*;

use crate::domain::a001_log_event::ui::{LogEventsFilters, LogEventsTable};
use crate::shared::icons::icon;
use crate::system::auth::context::{sign_out, use_auth};

/// Log events dashboard: filter panel above the events table
#[component]
pub fn LogEventsDashboard() -> impl IntoView {
    let (_, set_auth_state) = use_auth();

    // Parameters of the last applied filter set
    let (request, set_request) = signal::<Option<QueryParams>>(None);

    let on_apply = Callback::new(move |(params, _extra): (QueryParams, Value)| {
        set_request.set(Some(params));
    });

    view! {
        <div class="dashboard">
            <header class="dashboard__header">
                <h1 class="dashboard__title">"CLOG Monitor"</h1>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| sign_out(set_auth_state)
                >
                    {icon("log-out")}
                    " Logout"
                </Button>
            </header>

            <LogEventsFilters data_set_handler=on_apply/>
            <LogEventsTable request=request/>
        </div>
    }
}
