use contracts::system::health::HealthStatus;

use crate::shared::api_utils::{parse_body, ApiClient, ClientError, QueryParams};

/// Fetch API health. A 503 still carries a health document.
pub async fn fetch_health(client: &ApiClient) -> Result<HealthStatus, ClientError> {
    let url = client.url("/health", &QueryParams::new());
    let (status, body) = client.get_text(&url).await?;
    health_from_response(status, &body)
}

fn health_from_response(status: u16, body: &str) -> Result<HealthStatus, ClientError> {
    match status {
        200 | 503 => parse_body(body),
        _ => Err(ClientError::Api {
            status,
            body: body.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_503_is_a_health_document() {
        let health = health_from_response(
            503,
            r#"{"status":"unhealthy","database":"error: timeout"}"#,
        )
        .unwrap();
        assert!(!health.is_healthy());
    }

    #[test]
    fn test_other_status_is_api_error() {
        let err = health_from_response(404, "Not Found").unwrap_err();
        assert_eq!(err.to_string(), "API error 404: Not Found");
    }
}
