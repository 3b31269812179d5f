// src/config.rs

// Net config
pub const USER_AGENT: &str = concat!("css_locator/", env!("CARGO_PKG_VERSION"));
pub const FETCH_TIMEOUT_SECS: u64 = 15;

// Selector output
// parse_document() always wraps content in these two implicit elements;
// they are stripped from returned selectors (but kept for evaluation).
pub const ROOT_WRAPPERS: [&str; 2] = ["html", "body"];
