pub mod columns;

use contracts::domain::a003_question::{Question, QuestionFilters};
use contracts::shared::filters::non_empty;
use contracts::shared::SortState;
use leptos::prelude::*;

use self::columns::{ACTIVE_OPTIONS, QUESTION_COLUMNS};
use crate::domain::a003_question::api::{export_url, fetch_page};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::navigation::Navigation;
use crate::shared::api_utils::use_api_client;
use crate::shared::components::{DataTable, ExportButton, FilterToolbar, SelectFilter};
use crate::shared::config::use_config;
use crate::shared::query_state::use_query_state;

/// Вкладка вопросов. Сервер отдаёт все вопросы одной страницей.
#[component]
pub fn QuestionsList() -> impl IntoView {
    let config = use_config();
    let client = use_api_client();
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let fetch_client = client.clone();
    let query = use_query_state(
        move |page, page_size, sort, filters: QuestionFilters| {
            let client = fetch_client.clone();
            async move { fetch_page(&client, page, page_size, &sort, &filters).await }
        },
        SortState::asc("question_order"),
        QuestionFilters::default(),
        config.table.default_page_size,
    );

    let on_row_click = Callback::new(move |question: Question| {
        if let Navigation::OpenResponses(seed) = Navigation::from_record_click(question.into()) {
            ctx.open_responses(seed);
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
                    placeholder="Search questions..."
                >
                    <SelectFilter
                        label="Status"
                        options=ACTIVE_OPTIONS
                        all_label="All Status"
                        value=Signal::derive(move || query.filters().with(|f| f.is_active.clone()))
                        on_change=Callback::new(move |v| query.update_filters(|f| f.is_active = v))
                    />
                    <ExportButton build_url=build_url disabled=query.loading() />
                </FilterToolbar>
            </div>

            <DataTable
                columns=QUESTION_COLUMNS
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
