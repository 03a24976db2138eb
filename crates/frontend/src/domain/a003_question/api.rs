use contracts::domain::a003_question::{Question, QuestionFilters};
use contracts::shared::{Envelope, ExportFormat, SortState};

use crate::shared::api_utils::{export_query, list_query, ApiClient, ClientError};

const LIST_PATH: &str = "/questions";
const EXPORT_PATH: &str = "/questions/export";

/// Fetch questions.
///
/// The endpoint ignores paging and returns every match; `page` and
/// `pageSize` are still sent so all lists build their queries the same way.
pub async fn fetch_page(
    client: &ApiClient,
    page: u32,
    page_size: u32,
    sort: &SortState,
    filters: &QuestionFilters,
) -> Result<Envelope<Question>, ClientError> {
    let url = client.url(LIST_PATH, &list_query(page, page_size, sort, filters));
    client.get_json(&url).await
}

/// Download URL for the filtered questions
pub fn export_url(client: &ApiClient, filters: &QuestionFilters, format: ExportFormat) -> String {
    client.url(EXPORT_PATH, &export_query(filters, format))
}
