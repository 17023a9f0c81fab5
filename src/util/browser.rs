//! Thin wrappers over browser window APIs used by page handlers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Clipboard, new-tab navigation, the native prompt dialog and the wall clock
//! only exist in the browser. Native builds get inert fallbacks so handlers
//! stay free of `cfg` noise.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Open `url` in a new browser tab.
pub fn open_in_new_tab(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.open_with_url_and_target(url, "_blank").is_err() {
                log::warn!("failed to open {url} in a new tab");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

/// Write `text` to the system clipboard. Returns whether the write was issued.
pub fn copy_to_clipboard(text: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Some(clipboard) = window.navigator().clipboard() {
                let _ = clipboard.write_text(text);
                return true;
            }
        }
        false
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        false
    }
}

/// Ask the user for a line of text with the native prompt dialog.
///
/// Returns `None` when cancelled or left blank.
pub fn prompt_text(message: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let raw = web_sys::window()?.prompt_with_message(message).ok().flatten()?;
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        None
    }
}

/// Milliseconds since the Unix epoch, or `0` outside the browser.
pub fn now_ms() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            js_sys::Date::now() as u64
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}
