use leptos::prelude::*;
use thaw::*;

/// Панель фильтров над таблицей: поиск, дополнительные фильтры, обновление.
///
/// Поиск применяется по Enter или кнопкой, а не на каждый ввод.
#[component]
pub fn FilterToolbar(
    /// Применённое значение поиска
    #[prop(into)]
    search_value: Signal<String>,
    on_search_change: Callback<String>,
    on_refresh: Callback<()>,
    #[prop(optional, into)] loading: Signal<bool>,
    #[prop(optional, into)] placeholder: Option<String>,
    /// Дополнительные фильтры (select, экспорт)
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_else(|| "Search...".to_string());
    let local_search = RwSignal::new(search_value.get_untracked());

    // Внешний сброс фильтров синхронизирует поле ввода
    Effect::new(move |_| {
        let applied = search_value.get();
        untrack(move || local_search.set(applied));
    });

    let submit = move || on_search_change.run(local_search.get_untracked().trim().to_string());
    let clear = move |_| {
        local_search.set(String::new());
        on_search_change.run(String::new());
    };

    view! {
        <div class="filter-toolbar">
            <div
                class="filter-toolbar__search"
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        submit();
                    }
                }
            >
                <Input value=local_search placeholder=placeholder />
                <Show when=move || !local_search.get().is_empty()>
                    <Button
                        appearance=ButtonAppearance::Transparent
                        size=ButtonSize::Small
                        on_click=clear
                        attr:aria-label="Clear search"
                    >
                        "×"
                    </Button>
                </Show>
            </div>
            <Button appearance=ButtonAppearance::Primary on_click=move |_| submit()>
                "Search"
            </Button>
            {children.map(|c| c())}
            <Button
                appearance=ButtonAppearance::Subtle
                on_click=move |_| on_refresh.run(())
                disabled=loading
                attr:aria-label="Refresh data"
            >
                {move || if loading.get() { "Loading..." } else { "Refresh" }}
            </Button>
        </div>
    }
}
