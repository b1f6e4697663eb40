//! Display timestamps for chat messages.

/// Current local time as the browser formats it (`toLocaleTimeString`).
///
/// Returns `None` outside the browser.
pub fn now() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        Some(String::from(js_sys::Date::new_0().to_locale_time_string("default")))
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
