pub mod columns;

use contracts::domain::a001_survey_response::{ResponseFilters, SurveyResponse};
use contracts::shared::filters::non_empty;
use contracts::shared::SortState;
use leptos::prelude::*;
use thaw::*;

use self::columns::{INPUT_METHOD_OPTIONS, PROCESSED_OPTIONS, QUESTION_OPTIONS, RESPONSE_COLUMNS};
use crate::domain::a001_survey_response::api::{export_url, fetch_page};
use crate::domain::a001_survey_response::ui::details::ResponseDetail;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::navigation::{Navigation, ResponseSeed};
use crate::shared::api_utils::use_api_client;
use crate::shared::components::{
    DataTable, DateFilter, ExportButton, FilterToolbar, SelectFilter,
};
use crate::shared::config::use_config;
use crate::shared::query_state::use_query_state;

/// Вкладка ответов.
///
/// `seed` приходит при переходе с вкладок участников и вопросов.
#[component]
pub fn ResponsesList(#[prop(optional)] seed: Option<ResponseSeed>) -> impl IntoView {
    let config = use_config();
    let client = use_api_client();
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let initial_filters = seed.as_ref().map(ResponseSeed::filters).unwrap_or_default();
    let fetch_client = client.clone();
    let query = use_query_state(
        move |page, page_size, sort, filters: ResponseFilters| {
            let client = fetch_client.clone();
            async move { fetch_page(&client, page, page_size, &sort, &filters).await }
        },
        SortState::desc("created_at"),
        initial_filters,
        config.table.default_page_size,
    );

    let selected = RwSignal::new(None::<SurveyResponse>);
    let seed = StoredValue::new(seed);

    let seed_label = Memo::new(move |_| {
        let filters = query.filters().get();
        seed.with_value(|s| s.as_ref().and_then(|s| s.active_label(&filters)))
    });
    let clear_seed = move |_| {
        if let Some(s) = seed.get_value() {
            query.update_filters(|f| s.clear(f));
        }
    };

    let on_row_click = Callback::new(move |response: SurveyResponse| {
        match Navigation::from_record_click(response.into()) {
            Navigation::ShowResponseDetail(response) => selected.set(Some(response)),
            Navigation::OpenResponses(seed) => ctx.open_responses(seed),
            Navigation::Stay => {}
        }
    });

    let build_url = Callback::new(move |format| {
        export_url(&client, &query.filters_untracked(), format)
    });

    let search_value =
        Signal::derive(move || query.filters().with(|f| f.search.clone().unwrap_or_default()));

    view! {
        <div class="page">
            <div class="page__toolbar">
                <FilterToolbar
                    search_value=search_value
                    on_search_change=Callback::new(move |s: String| {
                        query.update_filters(|f| f.search = non_empty(&s))
                    })
                    on_refresh=Callback::new(move |_| query.refresh())
                    loading=query.loading()
                    placeholder="Search responses..."
                >
                    <SelectFilter
                        label="Question"
                        options=QUESTION_OPTIONS
                        all_label="All questions"
                        value=Signal::derive(move || query.filters().with(|f| f.question_id.clone()))
                        on_change=Callback::new(move |v| query.update_filters(|f| f.question_id = v))
                    />
                    <SelectFilter
                        label="Input"
                        options=INPUT_METHOD_OPTIONS
                        value=Signal::derive(move || query.filters().with(|f| f.input_method.clone()))
                        on_change=Callback::new(move |v| query.update_filters(|f| f.input_method = v))
                    />
                    <SelectFilter
                        label="Status"
                        options=PROCESSED_OPTIONS
                        value=Signal::derive(move || query.filters().with(|f| f.processed.clone()))
                        on_change=Callback::new(move |v| query.update_filters(|f| f.processed = v))
                    />
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

            {move || seed_label.get().map(|label| view! {
                <div class="filter-chip">
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        {label}
                    </Badge>
                    <Button
                        appearance=ButtonAppearance::Transparent
                        size=ButtonSize::Small
                        on_click=clear_seed
                        attr:aria-label="Remove filter"
                    >
                        "×"
                    </Button>
                </div>
            })}

            <DataTable
                columns=RESPONSE_COLUMNS
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

            <ResponseDetail selected=selected />
        </div>
    }
}
