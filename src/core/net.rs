// src/core/net.rs
//
// Blocking HTTP GET. Callers that sit on the UI thread must run this on a
// worker thread (see gui::app).

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};

pub fn http_get(url: &str) -> Result<String, reqwest::Error> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?;

    let resp = client.get(url).send()?.error_for_status()?;
    resp.text()
}
