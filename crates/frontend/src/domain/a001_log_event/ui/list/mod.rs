use contracts::domain::a001_log_event::dto::LogEventDto;
use contracts::domain::a001_log_event::QueryParams;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_log_event::api::fetch_log_events;
use crate::shared::date_utils::format_utc_as_local;
use crate::system::auth::context::use_auth;

fn cell(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn severity_class(severity: &str) -> &'static str {
    match severity {
        "Error" => "badge badge--error",
        "Warning" => "badge badge--warning",
        "Success" => "badge badge--success",
        _ => "badge",
    }
}

/// Rows for the most recently applied filters
#[component]
pub fn LogEventsTable(
    /// `None` until the filters are applied for the first time
    #[prop(into)]
    request: Signal<Option<QueryParams>>,
) -> impl IntoView {
    let (events, set_events) = signal::<Vec<LogEventDto>>(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    // Only the latest request may fill the table
    let generation = StoredValue::new(0u64);

    let (auth_state, _) = use_auth();

    Effect::new(move |_| {
        let Some(params) = request.get() else {
            return;
        };
        let token = auth_state.with_untracked(|a| a.token.clone());

        generation.update_value(|g| *g += 1);
        let current = generation.get_value();

        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = fetch_log_events(token.as_deref(), &params).await;
            if generation.try_get_value() != Some(current) {
                return;
            }

            match result {
                Ok(rows) => {
                    log::info!("Loaded {} log events", rows.len());
                    let _ = set_events.try_set(rows);
                }
                Err(e) => {
                    log::error!("Failed to load log events: {}", e);
                    let _ = set_events.try_set(Vec::new());
                    let _ = set_error.try_set(Some(e));
                }
            }
            let _ = set_loading.try_set(false);
        });
    });

    view! {
        <div class="log-events-table">
            <Show when=move || loading.get()>
                <div class="log-events-table__loading">
                    <Spinner/>
                    "Loading log events..."
                </div>
            </Show>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <Show
                when=move || request.with(Option::is_some)
                fallback=|| view! { <p class="log-events-table__hint">"Apply the filters to load log events."</p> }
            >
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Creation Time"</th>
                            <th>"Severity"</th>
                            <th>"Priority"</th>
                            <th>"Category"</th>
                            <th>"EAI Domain"</th>
                            <th>"Business Domain"</th>
                            <th>"Business SubDomain"</th>
                            <th>"Application"</th>
                            <th>"Process/Service"</th>
                            <th>"Host"</th>
                            <th>"Activity"</th>
                            <th>"Message"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || events.get()
                            key=|row: &LogEventDto| row.global_instance_id.clone()
                            children=move |row: LogEventDto| {
                                view! {
                                    <tr>
                                        <td>{format_utc_as_local(&row.creation_time)}</td>
                                        <td>
                                            <span class=severity_class(&row.severity)>
                                                {row.severity.clone()}
                                            </span>
                                        </td>
                                        <td>{row.priority.clone()}</td>
                                        <td>{row.category_name.clone()}</td>
                                        <td>{cell(&row.eai_domain)}</td>
                                        <td>{cell(&row.business_domain)}</td>
                                        <td>{cell(&row.business_subdomain)}</td>
                                        <td>{cell(&row.application)}</td>
                                        <td>{cell(&row.event_context)}</td>
                                        <td>{cell(&row.hostname)}</td>
                                        <td>{cell(&row.activity)}</td>
                                        <td>{cell(&row.msg)}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_class() {
        assert_eq!(severity_class("Error"), "badge badge--error");
        assert_eq!(severity_class("Info"), "badge");
    }

    #[test]
    fn test_missing_cell_is_blank() {
        assert_eq!(cell(&None), "");
        assert_eq!(cell(&Some("CRM".into())), "CRM");
    }
}
