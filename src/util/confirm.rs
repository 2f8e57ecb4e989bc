//! Native confirm dialog for destructive actions.
//!
//! Requires a browser environment; outside it the answer is always "no"
//! so nothing gets deleted from an SSR code path.

/// Ask the user to confirm via `window.confirm`.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}
