//! User Calls
//!
//! Login, registration, logout and balance lookups.

use gloo_net::http::Request;

use super::{
    api_url, decode_json_if_ok, decode_status, encode_component, send_empty, send_json, settle,
    ApiError, ApiResponse, RawResponse, INTERNAL_ERROR_STATUS,
};
use crate::config;
use crate::models::{Balance, Credentials, RegisterReply};

/// Body reported for a login that never reached the server
pub const LOGIN_TRANSPORT_MESSAGE: &str = "Internal server error";

pub async fn login(username: &str, password: &str) -> ApiResponse<String> {
    let url = api_url("/user/login");
    let result = send_json(Request::post(&url), None, &Credentials { username, password })
        .await
        .map(decode_login);
    settle("Error logging in", result, || {
        ApiResponse::new(INTERNAL_ERROR_STATUS, Some(LOGIN_TRANSPORT_MESSAGE.to_string()))
    })
}

pub async fn register(username: &str, password: &str) -> ApiResponse<RegisterReply> {
    let url = api_url("/user/register");
    let result = send_json(Request::post(&url), None, &Credentials { username, password })
        .await
        .and_then(|raw| decode_register(&raw));
    settle("Error registering user", result, ApiResponse::internal_error)
}

pub async fn logout(token: &str) -> ApiResponse<()> {
    let url = api_url("/user/logout");
    let result = send_empty(Request::post(&url), Some(token))
        .await
        .map(|raw| decode_status(&raw));
    settle("Error logging out", result, ApiResponse::internal_error)
}

pub async fn fetch_balance(token: &str, username: &str) -> ApiResponse<Balance> {
    let url = user_url(config::api_base_url(), username);
    let result = send_empty(Request::get(&url), Some(token))
        .await
        .and_then(|raw| decode_json_if_ok(&raw));
    settle("Error fetching balance", result, ApiResponse::internal_error)
}

/// Token text on 2xx, the server's message text otherwise
fn decode_login(raw: RawResponse) -> ApiResponse<String> {
    let status = if raw.is_ok() { 200 } else { raw.status };
    ApiResponse::new(status, Some(raw.body))
}

/// Registration always answers JSON, whatever the status
fn decode_register(raw: &RawResponse) -> Result<ApiResponse<RegisterReply>, ApiError> {
    let reply: RegisterReply = serde_json::from_str(&raw.body)?;
    Ok(ApiResponse::new(raw.status, Some(reply)))
}

fn user_url(base: &str, username: &str) -> String {
    format!("{}/user/{}", base, encode_component(username))
}
