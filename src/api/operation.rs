//! Operation Calls
//!
//! Perform an operation, list the record history, delete a record.

use gloo_net::http::Request;

use super::{
    api_url, decode_json_if_ok, decode_text, encode_component, send_empty, send_json, settle,
    ApiResponse,
};
use crate::config;
use crate::models::{OperationRequest, Record};
use crate::query::QueryState;

/// Fetch one page of the user's records.
///
/// `page` and `size` are passed separately so the same filters serve both
/// the count probe and the displayed page.
pub async fn get_records(
    username: &str,
    token: &str,
    query: &QueryState,
    page: u32,
    size: u32,
) -> ApiResponse<Vec<Record>> {
    let url = records_url(config::api_base_url(), username, query, page, size);
    let result = send_empty(Request::get(&url), Some(token))
        .await
        .and_then(|raw| decode_json_if_ok(&raw));
    settle("Error fetching records", result, ApiResponse::internal_error)
}

pub async fn perform_operation(request: &OperationRequest, token: &str) -> ApiResponse<String> {
    let url = api_url("/operation/");
    let result = send_json(Request::post(&url), Some(token), request)
        .await
        .map(decode_text);
    settle("Error performing operation", result, ApiResponse::internal_error)
}

pub async fn delete_record(record_id: u64, token: &str) -> ApiResponse<String> {
    let url = api_url(&format!("/operation/record/{}", record_id));
    let result = send_empty(Request::delete(&url), Some(token))
        .await
        .map(decode_text);
    settle("Error deleting record", result, ApiResponse::internal_error)
}

fn records_url(base: &str, username: &str, query: &QueryState, page: u32, size: u32) -> String {
    format!(
        "{}/operation/user/{}?page={}&size={}&sortBy={}&direction={}&search={}",
        base,
        encode_component(username),
        page,
        size,
        query.sort_by.as_str(),
        query.direction.as_str(),
        encode_component(&query.search),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{PageSize, SortDirection, SortField};

    #[test]
    fn test_records_url_defaults() {
        let query = QueryState::default();
        assert_eq!(
            records_url("http://localhost:8080", "alice", &query, 0, 10),
            "http://localhost:8080/operation/user/alice?page=0&size=10&sortBy=id&direction=desc&search="
        );
    }

    #[test]
    fn test_records_url_carries_filters() {
        let query = QueryState {
            page: 3,
            size: PageSize::Fifty,
            sort_by: SortField::Amount,
            direction: SortDirection::Asc,
            search: "SQUARE ROOT".to_string(),
        };
        assert_eq!(
            records_url("http://api", "bob", &query, query.page, query.size.get()),
            "http://api/operation/user/bob?page=3&size=50&sortBy=amount&direction=asc&search=SQUARE%20ROOT"
        );
    }

    #[test]
    fn test_probe_url_uses_page_zero() {
        let query = QueryState {
            page: 7,
            search: "ADD".to_string(),
            ..Default::default()
        };
        let url = records_url("http://api", "bob", &query, 0, config::PROBE_PAGE_SIZE);
        assert!(url.contains("page=0&size=200"));
        assert!(url.ends_with("search=ADD"));
    }
}
