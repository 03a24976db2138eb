pub mod columns;

use contracts::domain::a002_participant::{Participant, ParticipantFilters};
use contracts::shared::filters::non_empty;
use contracts::shared::SortState;
use leptos::prelude::*;

use self::columns::PARTICIPANT_COLUMNS;
use crate::domain::a002_participant::api::{export_url, fetch_page};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::navigation::Navigation;
use crate::shared::api_utils::use_api_client;
use crate::shared::components::{DataTable, DateFilter, ExportButton, FilterToolbar};
use crate::shared::config::use_config;
use crate::shared::query_state::use_query_state;

/// Вкладка участников. Клик по строке открывает ответы участника.
#[component]
pub fn ParticipantsList() -> impl IntoView {
    let config = use_config();
    let client = use_api_client();
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let fetch_client = client.clone();
    let query = use_query_state(
        move |page, page_size, sort, filters: ParticipantFilters| {
            let client = fetch_client.clone();
            async move { fetch_page(&client, page, page_size, &sort, &filters).await }
        },
        SortState::desc("created_at"),
        ParticipantFilters::default(),
        config.table.default_page_size,
    );

    let on_row_click = Callback::new(move |participant: Participant| {
        match Navigation::from_record_click(participant.into()) {
            Navigation::OpenResponses(seed) => ctx.open_responses(seed),
            Navigation::ShowResponseDetail(_) | Navigation::Stay => {
                log::debug!("participant row without submission id");
            }
        }
    });

    let build_url = Callback::new(move |format| {
        export_url(&client, &query.filters_untracked(), format)
    });

    view! {
        <div class="page">
            <div class="page__toolbar">
                <FilterToolbar
                    search_value=Signal::derive(move || {
                        query.filters().with(|f| f.search.clone().unwrap_or_default())
                    })
                    on_search_change=Callback::new(move |s: String| {
                        query.update_filters(|f| f.search = non_empty(&s))
                    })
                    on_refresh=Callback::new(move |_| query.refresh())
                    loading=query.loading()
                    placeholder="Search by name or email..."
                >
                    <DateFilter
                        label="From"
                        value=Signal::derive(move || query.filters().with(|f| f.start_date.clone()))
                        on_change=Callback::new(move |v| query.update_filters(|f| f.start_date = v))
                    />
                    <DateFilter
                        label="To"
                        value=Signal::derive(move || query.filters().with(|f| f.end_date.clone()))
                        on_change=Callback::new(move |v| query.update_filters(|f| f.end_date = v))
                    />
                    <ExportButton build_url=build_url disabled=query.loading() />
                </FilterToolbar>
            </div>

            <DataTable
                columns=PARTICIPANT_COLUMNS
                data=query.data()
                pagination=query.pagination()
                page_size=query.page_size()
                sort=query.sort()
                loading=query.loading()
                error=query.error()
                on_sort_change=Callback::new(move |sort| query.set_sort(sort))
                on_page_change=Callback::new(move |page| query.set_page(page))
                on_page_size_change=Callback::new(move |size| query.set_page_size(size))
                on_row_click=on_row_click
                page_size_options=config.table.page_size_options.clone()
            />
        </div>
    }
}
