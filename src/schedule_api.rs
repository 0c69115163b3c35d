use crate::errors::AppError;
use chrono::NaiveDate;
use log::{debug, info};
use reqwest::StatusCode;
use serde_json::Value;

pub const BASE_API_URL: &str = "https://prod95-cdn.dr-massive.com/api/schedules";
pub const CHANNEL_IDS: &str = "20875,20876,20892,22463,192099";

/// Fixed query parameters after `channels` and `date`, already URL-encoded.
const FIXED_PARAMS: &[(&str, &str)] = &[
    ("device", "web_browser"),
    ("duration", "24"),
    ("ff", "idp%2Cldp%2Crpt"),
    ("geoLocation", "abroad"),
    ("hour", "23"),
    ("isDeviceAbroad", "true"),
    ("lang", "da"),
    ("segments", "drtv%2Coptedin"),
    ("sub", "Anonymous2"),
];

pub fn schedule_url(date: NaiveDate) -> String {
    let mut url = format!(
        "{}?channels={}&date={}",
        BASE_API_URL,
        CHANNEL_IDS,
        date.format("%Y-%m-%d")
    );
    for (k, v) in FIXED_PARAMS {
        url.push('&');
        url.push_str(k);
        url.push('=');
        url.push_str(v);
    }
    url
}

/// Non-2xx is fatal, as is a body that is not JSON.
pub fn decode_response(status: StatusCode, body: &str) -> Result<Value, AppError> {
    if !status.is_success() {
        return Err(AppError::Status(status.as_u16()));
    }
    serde_json::from_str(body)
        .map_err(|e| AppError::Parse(format!("schedule response is not JSON: {}", e)))
}

/// One blocking GET for `date`; returns the raw JSON document.
pub fn fetch_schedule(client: &reqwest::blocking::Client, date: NaiveDate) -> Result<Value, AppError> {
    let url = schedule_url(date);
    info!("GET {}", url);

    let response = client
        .get(&url)
        .send()
        .map_err(|e| AppError::Http(format!("request to schedule API failed: {}", e)))?;
    let status = response.status();
    let body = response.text()?;
    debug!("schedule API answered {} with {} bytes", status, body.len());

    decode_response(status, &body)
}
