//! Application Shell - auth gate.
//!
//! Shows `LoginPage` until a session token exists, then the log events dashboard.

use crate::dashboards::LogEventsDashboard;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

#[component]
pub fn AppShell() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <LogEventsDashboard />
        </Show>
    }
}
