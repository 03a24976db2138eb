use contracts::domain::a001_survey_response::{ResponseFilters, SurveyResponse};
use contracts::shared::{Envelope, ExportFormat, SortState};

use crate::shared::api_utils::{export_query, list_query, ApiClient, ClientError};

const LIST_PATH: &str = "/responses";
const EXPORT_PATH: &str = "/responses/export";

/// Fetch one page of survey responses
pub async fn fetch_page(
    client: &ApiClient,
    page: u32,
    page_size: u32,
    sort: &SortState,
    filters: &ResponseFilters,
) -> Result<Envelope<SurveyResponse>, ClientError> {
    let url = client.url(LIST_PATH, &list_query(page, page_size, sort, filters));
    client.get_json(&url).await
}

/// Download URL for the filtered responses
pub fn export_url(client: &ApiClient, filters: &ResponseFilters, format: ExportFormat) -> String {
    client.url(EXPORT_PATH, &export_query(filters, format))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_url_keeps_filters() {
        let client = ApiClient::new("/api", 30_000);
        let filters = ResponseFilters {
            question_id: Some("q3".into()),
            processed: Some("false".into()),
            ..Default::default()
        };
        assert_eq!(
            export_url(&client, &filters, ExportFormat::Xlsx),
            "/api/responses/export?questionId=q3&processed=false&format=xlsx"
        );
    }

    #[test]
    fn test_export_url_without_filters() {
        let client = ApiClient::new("/api", 30_000);
        assert_eq!(
            export_url(&client, &ResponseFilters::default(), ExportFormat::Csv),
            "/api/responses/export?format=csv"
        );
    }
}
