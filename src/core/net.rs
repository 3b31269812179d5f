// src/core/net.rs

// Blocking GET; body text becomes the markup. A non-success status is
// not an error here, the caller searches whatever the server sent.

use std::time::Duration;

use crate::config::{FETCH_TIMEOUT_SECS, USER_AGENT};

pub fn fetch_text(url: &str) -> Result<String, reqwest::Error> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    client.get(url).send()?.text()
}
