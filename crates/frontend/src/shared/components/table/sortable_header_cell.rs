//! Компонент ячейки заголовка таблицы с индикатором сортировки
//!
//! # Пример
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Created"
//!     field="created_at"
//!     sortable=true
//!     sort=query.sort()
//!     on_sort=Callback::new(move |field: String| { /* next_sort(...) */ })
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::shared::SortState;
use leptos::prelude::*;
use thaw::*;

/// Ячейка заголовка: клик по сортируемой колонке передаёт ключ колонки в `on_sort`
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Ключ колонки
    #[prop(into)]
    field: String,

    /// Можно ли сортировать по колонке
    #[prop(optional)]
    sortable: bool,

    /// Текущая сортировка списка
    #[prop(into)]
    sort: Signal<SortState>,

    on_sort: Callback<String>,

    /// Минимальная ширина колонки, px
    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// Максимальная ширина колонки, px
    #[prop(default = None)]
    max_width: Option<f64>,
) -> impl IntoView {
    let style = match (sortable, max_width) {
        (true, Some(max)) => format!("cursor: pointer; user-select: none; max-width: {}px;", max),
        (true, None) => "cursor: pointer; user-select: none;".to_string(),
        (false, Some(max)) => format!("cursor: default; max-width: {}px;", max),
        (false, None) => "cursor: default;".to_string(),
    };

    let field_for_click = field.clone();
    let handle_click = move |_| {
        if sortable {
            on_sort.run(field_for_click.clone());
        }
    };

    let indicator = sortable.then(|| {
        let field_for_class = field.clone();
        let field_for_indicator = field.clone();
        view! {
            <span class=move || sort.with(|s| get_sort_class(s, &field_for_class))>
                {move || sort.with(|s| get_sort_indicator(s, &field_for_indicator))}
            </span>
        }
    });

    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div class="table__sortable-header" style=style on:click=handle_click>
                {label}
                {indicator}
            </div>
        </TableHeaderCell>
    }
}
