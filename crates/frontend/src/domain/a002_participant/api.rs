use contracts::domain::a002_participant::{Participant, ParticipantFilters};
use contracts::shared::{Envelope, ExportFormat, SortState};

use crate::shared::api_utils::{export_query, list_query, ApiClient, ClientError};

const LIST_PATH: &str = "/participants";
const EXPORT_PATH: &str = "/participants/export";

/// Fetch one page of participants
pub async fn fetch_page(
    client: &ApiClient,
    page: u32,
    page_size: u32,
    sort: &SortState,
    filters: &ParticipantFilters,
) -> Result<Envelope<Participant>, ClientError> {
    let url = client.url(LIST_PATH, &list_query(page, page_size, sort, filters));
    client.get_json(&url).await
}

/// Download URL for the filtered participants
pub fn export_url(client: &ApiClient, filters: &ParticipantFilters, format: ExportFormat) -> String {
    client.url(EXPORT_PATH, &export_query(filters, format))
}
