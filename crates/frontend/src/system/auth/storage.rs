use web_sys::window;

/// Value stored under the session key once the passcode was accepted
const AUTHENTICATED: &str = "true";

fn get_session_storage() -> Option<web_sys::Storage> {
    window()?.session_storage().ok()?
}

/// Was the passcode already accepted in this browser tab session
pub fn is_session_authenticated(key: &str) -> bool {
    get_session_storage()
        .and_then(|s| s.get_item(key).ok().flatten())
        .as_deref()
        == Some(AUTHENTICATED)
}

/// Remember the accepted passcode for this session
pub fn save_session(key: &str) {
    if let Some(storage) = get_session_storage() {
        let _ = storage.set_item(key, AUTHENTICATED);
    }
}

/// Forget the session
pub fn clear_session(key: &str) {
    if let Some(storage) = get_session_storage() {
        let _ = storage.remove_item(key);
    }
}
