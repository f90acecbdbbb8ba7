//! HTTP API Bindings
//!
//! Every call issues one request and settles into an `ApiResponse`;
//! transport and decode failures are logged and become status 500.

mod operation;
mod user;

use gloo_net::http::{Request, RequestBuilder};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::config;

pub use operation::*;
pub use user::*;

/// Status reported when the request never produced a usable reply
pub const INTERNAL_ERROR_STATUS: u16 = 500;

/// Characters kept verbatim in path segments and query values
const URL_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Uniform result of an API call
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn new(status: u16, data: Option<T>) -> Self {
        Self { status, data }
    }

    pub fn ok(data: T) -> Self {
        Self::new(200, Some(data))
    }

    pub fn status_only(status: u16) -> Self {
        Self::new(status, None)
    }

    pub fn internal_error() -> Self {
        Self::status_only(INTERNAL_ERROR_STATUS)
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Status and body text of a completed exchange
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// ========================
// Request Helpers
// ========================

fn with_headers(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    let builder = builder.header("Content-Type", "application/json");
    match token {
        Some(token) => builder.header("Authorization", token),
        None => builder,
    }
}

async fn dispatch(request: Request) -> Result<RawResponse, ApiError> {
    log::debug!("[API] -> {}", request.url());
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;
    Ok(RawResponse { status, body })
}

pub(crate) async fn send_empty(
    builder: RequestBuilder,
    token: Option<&str>,
) -> Result<RawResponse, ApiError> {
    let request = with_headers(builder, token).build()?;
    dispatch(request).await
}

pub(crate) async fn send_json<B: Serialize>(
    builder: RequestBuilder,
    token: Option<&str>,
    body: &B,
) -> Result<RawResponse, ApiError> {
    let request = with_headers(builder, token).json(body)?;
    dispatch(request).await
}

/// Log a failed exchange and substitute `fallback`
pub(crate) fn settle<T>(
    context: &str,
    result: Result<ApiResponse<T>, ApiError>,
    fallback: impl FnOnce() -> ApiResponse<T>,
) -> ApiResponse<T> {
    result.unwrap_or_else(|e| {
        log::error!("{}: {}", context, e);
        fallback()
    })
}

// ========================
// Response Decoding
// ========================

/// Status only, 2xx folded to 200
pub(crate) fn decode_status(raw: &RawResponse) -> ApiResponse<()> {
    if raw.is_ok() {
        ApiResponse::status_only(200)
    } else {
        ApiResponse::status_only(raw.status)
    }
}

/// Body text with the untouched status
pub(crate) fn decode_text(raw: RawResponse) -> ApiResponse<String> {
    ApiResponse::new(raw.status, Some(raw.body))
}

/// JSON body on 2xx, nothing otherwise
pub(crate) fn decode_json_if_ok<T: DeserializeOwned>(
    raw: &RawResponse,
) -> Result<ApiResponse<T>, ApiError> {
    if raw.is_ok() {
        Ok(ApiResponse::ok(serde_json::from_str(&raw.body)?))
    } else {
        Ok(ApiResponse::status_only(raw.status))
    }
}

// ========================
// URLs
// ========================

pub(crate) fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URL_COMPONENT).to_string()
}

pub(crate) fn api_url(path: &str) -> String {
    format!("{}{}", config::api_base_url(), path)
}
