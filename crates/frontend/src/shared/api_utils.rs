//! HTTP helpers for talking to the backend.
//!
//! Error bodies of the backend are `{"message": "..."}`; the message is
//! surfaced as the `Err` string so views can show it as is.

use contracts::shared::list::ApiError;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Base URL of the API: same host as the page, port 3000
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Builds `a=1&b=2` from optional pairs, skipping `None` and blank values
pub fn query_string(pairs: &[(&str, Option<String>)]) -> String {
    pairs
        .iter()
        .filter_map(|(key, value)| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| format!("{}={}", key, urlencoding::encode(v)))
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// `path` with `query` appended when it is not empty
pub fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.json::<ApiError>().await {
        Ok(body) if !body.message.is_empty() => body.message,
        _ => format!("HTTP {}", status),
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(error_message(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

async fn expect_ok(response: Response) -> Result<(), String> {
    if response.ok() {
        Ok(())
    } else {
        Err(error_message(response).await)
    }
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    read_json(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| format!("Failed to encode request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    read_json(response).await
}

/// POST with a JSON body and no response body
pub async fn post_unit<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| format!("Failed to encode request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    expect_ok(response).await
}

/// POST without a body, e.g. document posting commands
pub async fn post_empty(path: &str) -> Result<(), String> {
    let response = Request::post(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    expect_ok(response).await
}

pub async fn post_empty_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::post(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    read_json(response).await
}

pub async fn delete(path: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    expect_ok(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_skips_blanks_and_encodes() {
        let qs = query_string(&[
            ("page", Some("2".into())),
            ("q", Some("reactive blue".into())),
            ("start_date", None),
            ("end_date", Some("  ".into())),
        ]);
        assert_eq!(qs, "page=2&q=reactive%20blue");
    }

    #[test]
    fn test_with_query() {
        assert_eq!(with_query("/api/x", ""), "/api/x");
        assert_eq!(with_query("/api/x", "a=1"), "/api/x?a=1");
    }
}
