//! Application Shell - корневые компоненты приложения
//!
//! Содержит:
//! - `AppShell` - auth gate (показывает PasswordGate или MainLayout)
//! - `MainLayout` - основной layout приложения (Header + Tabs)

use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::auth::PasswordGate;
use leptos::prelude::*;

/// Main application layout.
///
/// Инициализирует синхронизацию вкладки с URL (?tab=...).
#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // Runs once when the layout is created.
    ctx.init_router_integration();

    view! { <Shell /> }
}

/// Application shell - auth gate component.
#[component]
pub fn AppShell() -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.get().is_authenticated()
            fallback=|| view! { <PasswordGate /> }
        >
            <MainLayout />
        </Show>
    }
}
