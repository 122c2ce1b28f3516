use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;
use crate::system::auth::{api, context::sign_in, context::use_auth};

const INVALID_USERNAME: &str = "invalid username";
const INVALID_PASSWORD: &str = "invalid password";
const SUPPORT_CONTACT: &str = "Please contact support at xxx-xxx-xxxx or at example@email.com";

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (login_failed, set_login_failed) = signal(false);
    let (show_help, set_show_help) = signal(false);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get();
        let password_val = password.get();

        set_is_loading.set(true);
        set_login_failed.set(false);

        spawn_local(async move {
            match api::validate_credential(username_val, password_val).await {
                Ok(token) => {
                    log::info!("Login succeeded");
                    set_is_loading.set(false);
                    // Switches the shell over to the dashboard
                    sign_in(set_auth_state, token);
                }
                Err(e) => {
                    // The cause is not shown, only the generic messages
                    log::warn!("Login failed: {}", e);
                    set_login_failed.set(true);
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <div class="login-box__icon">{icon("lock")}</div>
                <h1>"CLOG Monitor Sign In"</h1>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="uname">"Username"</label>
                        <input
                            type="text"
                            id="uname"
                            name="uname"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                        <Show when=move || login_failed.get()>
                            <div class="error">{INVALID_USERNAME}</div>
                        </Show>
                    </div>

                    <div class="form-group">
                        <label for="pass">"Password"</label>
                        <input
                            type="password"
                            id="pass"
                            name="pass"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                        <Show when=move || login_failed.get()>
                            <div class="error">{INVALID_PASSWORD}</div>
                        </Show>
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <div class="login-help">
                    <button type="button" on:click=move |_| set_show_help.update(|v| *v = !*v)>
                        "Forgot Password?"
                    </button>
                    <Show when=move || show_help.get()>
                        <p class="login-help__text">{SUPPORT_CONTACT}</p>
                    </Show>
                </div>
            </div>
        </div>
    }
}
