//! API utilities for frontend-backend communication
//!
//! Query-string construction, the JSON fetch used by every list endpoint and
//! the error taxonomy surfaced to the list controllers.

use contracts::shared::{ExportFormat, QueryFilters, SortState};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use std::cell::Cell;
use std::rc::Rc;
use thiserror::Error;
use web_sys::AbortController;

use crate::shared::config::AppConfig;

/// Failure of a single API call.
///
/// The controllers only keep the `Display` text of it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("Failed to send request: {0}")]
    Transport(String),
    #[error("Request timed out after {0} ms")]
    Timeout(u32),
    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },
    #[error("Unexpected response format: {0}")]
    MalformedEnvelope(String),
}

/// Ordered query-string builder.
///
/// Each key appears at most once: pushing a key again replaces its value in
/// place. Absent and empty values are never emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &str, value: impl ToString) -> &mut Self {
        let value = value.to_string();
        if value.is_empty() {
            self.pairs.retain(|(k, _)| k != key);
            return self;
        }
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key.to_string(), value)),
        }
        self
    }

    pub fn push_opt(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        if let Some(v) = value {
            self.push(key, v);
        }
        self
    }

    pub fn extend_filters(&mut self, filters: &impl QueryFilters) -> &mut Self {
        for (key, value) in filters.query_pairs() {
            self.push_opt(key, value);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `"?k=v&…"`, or an empty string when there is nothing to send.
    pub fn to_query_string(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }
        let joined = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("?{}", joined)
    }
}

/// Query for one page of a list endpoint.
pub fn list_query(
    page: u32,
    page_size: u32,
    sort: &SortState,
    filters: &impl QueryFilters,
) -> QueryParams {
    let mut params = QueryParams::new();
    params
        .push("page", page)
        .push("pageSize", page_size)
        .push("sortBy", &sort.sort_by)
        .push("sortOrder", sort.sort_order)
        .extend_filters(filters);
    params
}

/// Query for an export endpoint: the filters plus `format`, no paging or sort.
pub fn export_query(filters: &impl QueryFilters, format: ExportFormat) -> QueryParams {
    let mut params = QueryParams::new();
    params.extend_filters(filters).push("format", format);
    params
}

/// Connection settings shared by every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    timeout_ms: u32,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout_ms: u32) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_ms,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api.base_url.clone(), config.api.request_timeout_ms)
    }

    /// Build a full API URL from a path and a query
    ///
    /// # Example
    /// ```rust,ignore
    /// let url = client.url("/responses", &list_query(1, 25, &sort, &filters));
    /// ```
    pub fn url(&self, path: &str, query: &QueryParams) -> String {
        format!("{}{}{}", self.base_url, path, query.to_query_string())
    }

    /// GET a JSON document. Any non-2xx status is an `Api` error.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ClientError> {
        let (status, body) = self.get_text(url).await?;
        if !(200..300).contains(&status) {
            return Err(ClientError::Api { status, body });
        }
        parse_body(&body)
    }

    /// GET returning the status and the raw body, whatever the status is.
    pub async fn get_text(&self, url: &str) -> Result<(u16, String), ClientError> {
        log::debug!("GET {}", url);

        let controller =
            AbortController::new().map_err(|e| ClientError::Transport(format!("{:?}", e)))?;
        let timed_out = Rc::new(Cell::new(false));
        let timer = {
            let controller = controller.clone();
            let timed_out = Rc::clone(&timed_out);
            Timeout::new(self.timeout_ms, move || {
                timed_out.set(true);
                controller.abort();
            })
        };

        let signal = controller.signal();
        let result = async {
            let response = Request::get(url)
                .abort_signal(Some(&signal))
                .send()
                .await
                .map_err(|e| ClientError::Transport(e.to_string()))?;
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| ClientError::Transport(e.to_string()))?;
            Ok((status, body))
        }
        .await;

        drop(timer);
        if timed_out.get() {
            log::warn!("GET {} aborted after {} ms", url, self.timeout_ms);
            return Err(ClientError::Timeout(self.timeout_ms));
        }
        result
    }
}

/// Client provided at the root of the component tree.
pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient not provided")
}

/// Deserializes a response body, reporting shape mismatches as `MalformedEnvelope`.
pub fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ClientError> {
    serde_json::from_str(body).map_err(|e| ClientError::MalformedEnvelope(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_survey_response::{ResponseFilters, SurveyResponse};
    use contracts::domain::a002_participant::ParticipantFilters;
    use contracts::shared::{Envelope, SortOrder};

    fn decode(qs: &str) -> Vec<(String, String)> {
        qs.trim_start_matches('?')
            .split('&')
            .filter(|p| !p.is_empty())
            .map(|p| {
                let (k, v) = p.split_once('=').unwrap();
                (
                    urlencoding::decode(k).unwrap().into_owned(),
                    urlencoding::decode(v).unwrap().into_owned(),
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_params() {
        assert_eq!(QueryParams::new().to_query_string(), "");
    }

    #[test]
    fn test_push_replaces_repeated_key() {
        let mut params = QueryParams::new();
        params.push("page", 1).push("sortBy", "id").push("page", 3);
        assert_eq!(params.to_query_string(), "?page=3&sortBy=id");
    }

    #[test]
    fn test_push_opt_skips_absent_and_empty() {
        let mut params = QueryParams::new();
        params
            .push_opt("search", None)
            .push_opt("questionId", Some(""))
            .push_opt("inputMethod", Some("voice"));
        assert_eq!(params.to_query_string(), "?inputMethod=voice");
    }

    #[test]
    fn test_list_query_order_and_filters() {
        let filters = ResponseFilters {
            question_id: Some("q1".into()),
            search: Some(String::new()),
            ..Default::default()
        };
        let qs = list_query(2, 25, &SortState::desc("created_at"), &filters).to_query_string();
        assert_eq!(
            qs,
            "?page=2&pageSize=25&sortBy=created_at&sortOrder=desc&questionId=q1"
        );
    }

    #[test]
    fn test_values_roundtrip_through_encoding() {
        let filters = ResponseFilters {
            search: Some("café & crème=50%".into()),
            start_date: Some("2026-01-01".into()),
            ..Default::default()
        };
        let qs = list_query(1, 10, &SortState::asc("id"), &filters).to_query_string();
        let pairs = decode(&qs);
        assert!(pairs.contains(&("search".to_string(), "café & crème=50%".to_string())));
        assert!(pairs.contains(&("startDate".to_string(), "2026-01-01".to_string())));
        let mut keys: Vec<_> = pairs.iter().map(|(k, _)| k.clone()).collect();
        let total = keys.len();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }

    #[test]
    fn test_export_query_has_no_paging() {
        let filters = ParticipantFilters {
            search: Some("alice".into()),
            ..Default::default()
        };
        let params = export_query(&filters, ExportFormat::Csv);
        assert_eq!(params.to_query_string(), "?search=alice&format=csv");
        assert_eq!(params.get("page"), None);
        assert_eq!(params.get("sortBy"), None);
    }

    #[test]
    fn test_client_url() {
        let client = ApiClient::new("https://host/api/", 1000);
        let mut q = QueryParams::new();
        q.push("format", ExportFormat::Xlsx);
        assert_eq!(
            client.url("/questions/export", &q),
            "https://host/api/questions/export?format=xlsx"
        );
    }

    #[test]
    fn test_api_error_message() {
        let err = ClientError::Api {
            status: 500,
            body: "db down".into(),
        };
        assert_eq!(err.to_string(), "API error 500: db down");
    }

    #[test]
    fn test_parse_body_rejects_bad_envelope() {
        let missing = parse_body::<Envelope<SurveyResponse>>(r#"{"data":[]}"#);
        assert!(matches!(missing, Err(ClientError::MalformedEnvelope(_))));
        let not_array =
            parse_body::<Envelope<SurveyResponse>>(r#"{"data":{},"pagination":{"page":1,"pageSize":25,"totalRecords":0,"totalPages":0}}"#);
        assert!(matches!(not_array, Err(ClientError::MalformedEnvelope(_))));
    }

    #[test]
    fn test_sort_order_display_in_query() {
        let mut params = QueryParams::new();
        params.push("sortOrder", SortOrder::Asc);
        assert_eq!(params.get("sortOrder"), Some("asc"));
    }
}
