//! Build-time Configuration
//!
//! Values are baked in at compile time via environment variables so the
//! static bundle needs no runtime config fetch.

use std::str::FromStr;

/// Fallback backend address
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Page size of the record-count probe query
pub const PROBE_PAGE_SIZE: u32 = 200;

/// Delay before the register form flips back to login
pub const REGISTER_REVERT_MS: u32 = 2_000;

/// Backend base URL without trailing slash
pub fn api_base_url() -> &'static str {
    normalize_base_url(option_env!("CALC_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

/// Console log level, `CALC_LOG_LEVEL` or debug
pub fn log_level() -> log::Level {
    parse_log_level(option_env!("CALC_LOG_LEVEL"))
}

fn normalize_base_url(url: &str) -> &str {
    url.trim_end_matches('/')
}

fn parse_log_level(value: Option<&str>) -> log::Level {
    value
        .and_then(|v| log::Level::from_str(v).ok())
        .unwrap_or(log::Level::Debug)
}
