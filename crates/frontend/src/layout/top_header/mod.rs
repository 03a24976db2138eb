//! TopHeader - верхняя панель консоли.
//!
//! Содержит заголовок, состояние API и кнопку выхода.

use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use crate::system::health::HealthBadge;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let config = use_config();
    let auth = use_auth();
    let gated = config.passcode().is_some();
    let session_key = StoredValue::new(config.auth.session_key.clone());

    let logout = move |_| session_key.with_value(|key| do_logout(auth, key));

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Survey Report"</span>
            </div>

            <div class="top-header__actions">
                <HealthBadge />

                // Без кода доступа выходить некуда
                {gated.then(|| view! {
                    <button class="top-header__icon-btn" on:click=logout title="Lock">
                        {icon("log-out")}
                    </button>
                })}
            </div>
        </div>
    }
}
