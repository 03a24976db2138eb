use crate::shared::list_utils::PagerState;
use contracts::shared::PageInfo;
use leptos::prelude::*;
use thaw::*;

/// Значения по умолчанию для выбора размера страницы
pub const DEFAULT_PAGE_SIZE_OPTIONS: [u32; 4] = [10, 25, 50, 100];

/// PaginationControls - панель пагинации под таблицей
///
/// Страницы нумеруются с 1. Компонент не хранит своего состояния:
/// все изменения уходят наружу через callbacks.
#[component]
pub fn PaginationControls(
    /// Пагинация последнего загруженного ответа
    #[prop(into)]
    pagination: Signal<PageInfo>,

    /// Текущий размер страницы запроса
    #[prop(into)]
    page_size: Signal<u32>,

    /// Callback при смене страницы
    on_page_change: Callback<u32>,

    /// Callback при смене размера страницы
    on_page_size_change: Callback<u32>,

    /// Доступные размеры страницы (по умолчанию 10/25/50/100)
    #[prop(optional)]
    page_size_options: Option<Vec<u32>>,
) -> impl IntoView {
    let page_size_opts =
        page_size_options.unwrap_or_else(|| DEFAULT_PAGE_SIZE_OPTIONS.to_vec());
    let pager = Memo::new(move |_| PagerState::from(&pagination.get()));

    view! {
        <div class="pagination-controls">
            <div class="pagination-controls__size">
                <span class="pagination-info">"Rows per page:"</span>
                <select
                    class="page-size-select"
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                            on_page_size_change.run(size);
                        }
                    }
                    prop:value=move || page_size.get().to_string()
                >
                    {page_size_opts.into_iter().map(|size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </div>

            <span class="pagination-info">{move || pager.with(|p| p.range_label.clone())}</span>

            <div class="pagination-controls__pages">
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    on_click=move |_| {
                        let p = pager.get_untracked();
                        if !p.prev_disabled {
                            on_page_change.run(p.page - 1);
                        }
                    }
                    disabled=Signal::derive(move || pager.with(|p| p.prev_disabled))
                    attr:aria-label="Previous page"
                >
                    "‹"
                </Button>
                <span class="pagination-info">{move || pager.with(|p| p.page_label.clone())}</span>
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    on_click=move |_| {
                        let p = pager.get_untracked();
                        if !p.next_disabled {
                            on_page_change.run(p.page + 1);
                        }
                    }
                    disabled=Signal::derive(move || pager.with(|p| p.next_disabled))
                    attr:aria-label="Next page"
                >
                    "›"
                </Button>
            </div>
        </div>
    }
}
