use leptos::prelude::*;

use super::context::{passcode_matches, use_auth, AuthState};
use super::storage;
use crate::shared::config::use_config;

/// Экран ввода кода доступа
#[component]
pub fn PasswordGate() -> impl IntoView {
    let config = use_config();
    let auth = use_auth();
    let passcode = RwSignal::new(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let expected = config.passcode().map(String::from);
    let session_key = config.auth.session_key.clone();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let entered = passcode.get_untracked();
        if entered.is_empty() {
            set_error_message.set(Some("Please enter the access code.".to_string()));
            return;
        }
        if passcode_matches(expected.as_deref(), &entered) {
            storage::save_session(&session_key);
            set_error_message.set(None);
            auth.set(AuthState::Authenticated);
        } else {
            log::warn!("rejected access code");
            set_error_message.set(Some("Incorrect access code.".to_string()));
            passcode.set(String::new());
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Survey Report"</h1>
                <h2>"Enter the access code to continue"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="passcode">"Access code"</label>
                        <input
                            type="password"
                            id="passcode"
                            autocomplete="current-password"
                            prop:value=move || passcode.get()
                            on:input=move |ev| passcode.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <button type="submit" class="btn-primary">
                        "Sign in"
                    </button>
                </form>
            </div>
        </div>
    }
}
