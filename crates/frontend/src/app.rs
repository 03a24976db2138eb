use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_utils::ApiClient;
use crate::shared::config::AppConfig;
use crate::system::auth::AuthState;
use leptos::prelude::*;

#[component]
pub fn App(config: AppConfig, auth: AuthState) -> impl IntoView {
    provide_context(ApiClient::from_config(&config));
    provide_context(config);
    provide_context(RwSignal::new(auth));
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    view! {
        <AppShell />
    }
}
