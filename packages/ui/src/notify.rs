//! Blocking browser dialogs for errors and destructive confirmations.
//!
//! Outside the browser there is nobody to ask: [`alert`] only logs and
//! [`confirm`] answers "no", so nothing is ever deleted unattended.

pub fn alert(message: &str) {
    tracing::warn!(message, "alert");
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!(message, "confirmation declined outside the browser");
        false
    }
}
