pub mod app;
pub mod app_shell;
pub mod domain;
pub mod layout;
pub mod shared;
pub mod system;

use app::App;
use leptos::prelude::*;
use shared::config::{load_config, AppConfig};
use system::auth::AuthState;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("invalid configuration, using defaults: {}", e);
            AppConfig::default()
        }
    };
    let auth = AuthState::restore(config.passcode(), &config.auth.session_key);
    log::debug!("api base {}, auth {:?}", config.api.base_url, auth);

    leptos::mount::mount_to_body(move || view! { <App config=config auth=auth /> });
}
