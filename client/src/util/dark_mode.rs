//! Theme application for the dark mode setting.
//!
//! The preference itself is [`localstate::settings::SettingKey::DarkMode`]
//! and persists with the rest of the settings record. This module only
//! reflects it onto the `data-theme` attribute of `<html>`.
//!
//! TRADE-OFFS
//! ==========
//! Server rendering always emits the light theme; the hydrated client flips
//! the attribute once settings have loaded.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

/// Value written to `data-theme`.
#[must_use]
pub fn theme_name(enabled: bool) -> &'static str {
    if enabled { "dark" } else { "light" }
}

/// Whether the OS asks for a dark color scheme. `false` outside the browser.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                if let Err(e) = el.set_attribute("data-theme", theme_name(enabled)) {
                    log::warn!("dark_mode: set data-theme failed: {e:?}");
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}
