//! Универсальная таблица с серверной сортировкой и пагинацией.
//!
//! Таблица ничего не знает о конкретной записи: колонки описываются
//! статическим списком `ColumnDef`, значения берутся через `TableRecord::field`.

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::list_utils::{next_sort, CellValue, TableRecord};
use contracts::shared::{PageInfo, SortState};
use leptos::prelude::*;
use thaw::*;

/// Цвет бейджа в ячейке
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Brand,
    Informative,
    Success,
    Subtle,
    Danger,
}

impl Tone {
    fn badge_color(self) -> BadgeColor {
        match self {
            Tone::Brand => BadgeColor::Brand,
            Tone::Informative => BadgeColor::Informative,
            Tone::Success => BadgeColor::Success,
            Tone::Subtle => BadgeColor::Subtle,
            Tone::Danger => BadgeColor::Danger,
        }
    }
}

/// Содержимое ячейки после форматирования
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellFragment {
    Text(String),
    /// Второстепенный текст (серый)
    Muted(String),
    Badge { text: String, tone: Tone },
}

pub type CellRender<R> = fn(&CellValue, &R) -> CellFragment;

/// Описание колонки таблицы
pub struct ColumnDef<R> {
    pub key: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    pub min_width: f64,
    pub max_width: Option<f64>,
    pub render: Option<CellRender<R>>,
}

impl<R> ColumnDef<R> {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            sortable: false,
            min_width: 100.0,
            max_width: None,
            render: None,
        }
    }

    pub const fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub const fn min_width(mut self, min: f64) -> Self {
        self.min_width = min;
        self
    }

    pub const fn width(mut self, min: f64, max: f64) -> Self {
        self.min_width = min;
        self.max_width = Some(max);
        self
    }

    pub const fn render(mut self, render: CellRender<R>) -> Self {
        self.render = Some(render);
        self
    }
}

/// Что показывать в теле таблицы
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBodyState {
    Loading,
    Error(String),
    Empty,
    Rows,
}

/// Загрузка важнее ошибки и устаревших данных, ошибка важнее пустого списка.
pub fn table_body_state(loading: bool, error: Option<&str>, len: usize) -> TableBodyState {
    if loading {
        TableBodyState::Loading
    } else if let Some(message) = error {
        TableBodyState::Error(message.to_string())
    } else if len == 0 {
        TableBodyState::Empty
    } else {
        TableBodyState::Rows
    }
}

/// Содержимое ячейки: результат `render` колонки или строковое значение поля
pub fn render_cell<R: TableRecord>(column: &ColumnDef<R>, record: &R) -> CellFragment {
    let value = record.field(column.key);
    match column.render {
        Some(render) => render(&value, record),
        None => CellFragment::Text(value.to_string()),
    }
}

/// Строка состояния (загрузка, ошибка, пусто) занимает все колонки
pub fn body_colspan<R>(columns: &[ColumnDef<R>]) -> usize {
    columns.len().max(1)
}

fn fragment_view(fragment: CellFragment) -> AnyView {
    match fragment {
        CellFragment::Text(text) => view! { <span>{text}</span> }.into_any(),
        CellFragment::Muted(text) => view! { <span class="text-muted">{text}</span> }.into_any(),
        CellFragment::Badge { text, tone } => view! {
            <Badge appearance=BadgeAppearance::Tint color=tone.badge_color()>
                {text}
            </Badge>
        }
        .into_any(),
    }
}

fn cell_style<R>(column: &ColumnDef<R>) -> String {
    match column.max_width {
        Some(max) => format!("min-width: {}px; max-width: {}px;", column.min_width, max),
        None => format!("min-width: {}px;", column.min_width),
    }
}

#[component]
pub fn DataTable<R: TableRecord>(
    columns: &'static [ColumnDef<R>],
    #[prop(into)] data: Signal<Vec<R>>,
    #[prop(into)] pagination: Signal<PageInfo>,
    /// Размер страницы текущего запроса (может отличаться от пагинации ответа)
    #[prop(into)]
    page_size: Signal<u32>,
    #[prop(into)] sort: Signal<SortState>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    on_sort_change: Callback<SortState>,
    on_page_change: Callback<u32>,
    on_page_size_change: Callback<u32>,
    /// Клик по строке; без него строки не кликабельны
    #[prop(optional)]
    on_row_click: Option<Callback<R>>,
    #[prop(optional)] page_size_options: Option<Vec<u32>>,
) -> impl IntoView {
    let colspan = body_colspan(columns);

    let on_header_click = Callback::new(move |key: String| {
        let Some(column) = columns.iter().find(|c| c.key == key) else {
            return;
        };
        if let Some(next) = next_sort(&sort.get_untracked(), column.key, column.sortable) {
            on_sort_change.run(next);
        }
    });

    let body_state = Memo::new(move |_| {
        let len = data.with(|d| d.len());
        error.with(|e| table_body_state(loading.get(), e.as_deref(), len))
    });

    let row_style = if on_row_click.is_some() {
        "cursor: pointer;"
    } else {
        "cursor: default;"
    };

    view! {
        <div class="data-table">
            <div class="table-wrapper">
                <Table attr:style="width: 100%; min-width: 800px;">
                    <TableHeader>
                        <TableRow>
                            {columns.iter().map(|column| {
                                view! {
                                    <SortableHeaderCell
                                        label=column.label
                                        field=column.key
                                        sortable=column.sortable
                                        sort=sort
                                        on_sort=on_header_click
                                        min_width=column.min_width
                                        max_width=column.max_width
                                    />
                                }
                            }).collect_view()}
                        </TableRow>
                    </TableHeader>

                    <TableBody>
                        {move || match body_state.get() {
                            TableBodyState::Loading => view! {
                                <TableRow>
                                    <TableCell attr:colspan=colspan>
                                        <Flex justify=FlexJustify::Center>
                                            <Spinner label="Loading data..." />
                                        </Flex>
                                    </TableCell>
                                </TableRow>
                            }.into_any(),
                            TableBodyState::Error(message) => view! {
                                <TableRow>
                                    <TableCell attr:colspan=colspan>
                                        <div class="alert alert--error">{format!("Error: {}", message)}</div>
                                    </TableCell>
                                </TableRow>
                            }.into_any(),
                            TableBodyState::Empty => view! {
                                <TableRow>
                                    <TableCell attr:colspan=colspan>
                                        <TableCellLayout>
                                            <span class="text-muted">"No records found. Try adjusting your filters."</span>
                                        </TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }.into_any(),
                            TableBodyState::Rows => view! {
                                <For
                                    each=move || data.get()
                                    key=|record| record.row_key()
                                    children=move |record: R| {
                                        let clicked = record.clone();
                                        view! {
                                            <TableRow
                                                attr:style=row_style
                                                on:click=move |_| {
                                                    if let Some(cb) = on_row_click {
                                                        cb.run(clicked.clone());
                                                    }
                                                }
                                            >
                                                {columns.iter().map(|column| {
                                                    let title = record.field(column.key).to_string();
                                                    let fragment = render_cell(column, &record);
                                                    view! {
                                                        <TableCell attr:title=title attr:style=cell_style(column)>
                                                            <TableCellLayout truncate=true>
                                                                {fragment_view(fragment)}
                                                            </TableCellLayout>
                                                        </TableCell>
                                                    }
                                                }).collect_view()}
                                            </TableRow>
                                        }
                                    }
                                />
                            }.into_any(),
                        }}
                    </TableBody>
                </Table>
            </div>

            <PaginationControls
                pagination=pagination
                page_size=page_size
                on_page_change=on_page_change
                on_page_size_change=on_page_size_change
                page_size_options=page_size_options.unwrap_or_else(|| {
                    crate::shared::components::pagination_controls::DEFAULT_PAGE_SIZE_OPTIONS.to_vec()
                })
            />
        </div>
    }
}
