/// Универсальные утилиты для списков: значения ячеек, сортировка, пагинация
use contracts::shared::{PageInfo, SortState};
use std::fmt;

/// Значение поля записи, пригодное для отображения в таблице
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Int(i64),
    Bool(bool),
    Null,
}

impl CellValue {
    pub fn text(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }

    pub fn opt_text(value: Option<&str>) -> Self {
        value.map_or(CellValue::Null, CellValue::text)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Bool(b) => Some(*b),
            CellValue::Int(n) => Some(*n != 0),
            _ => None,
        }
    }
}

/// `Null` становится пустой строкой
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Int(n) => write!(f, "{}", n),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Null => Ok(()),
        }
    }
}

/// Запись, которую умеет показывать универсальная таблица
pub trait TableRecord: Clone + Send + Sync + 'static {
    /// Значение поля по ключу колонки; неизвестный ключ даёт `Null`
    fn field(&self, key: &str) -> CellValue;

    /// Стабильный ключ строки для `<For>`
    fn row_key(&self) -> String;
}

/// Следующее состояние сортировки после клика по заголовку.
///
/// Та же колонка меняет направление, другая колонка включается по возрастанию,
/// несортируемая колонка ничего не меняет.
pub fn next_sort(current: &SortState, column: &str, sortable: bool) -> Option<SortState> {
    if !sortable {
        return None;
    }
    if current.is_active(column) {
        Some(SortState::new(column, current.sort_order.flipped()))
    } else {
        Some(SortState::asc(column))
    }
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(sort: &SortState, field: &str) -> &'static str {
    if sort.is_active(field) {
        match sort.sort_order {
            contracts::shared::SortOrder::Asc => " ▲",
            contracts::shared::SortOrder::Desc => " ▼",
        }
    } else {
        ""
    }
}

/// CSS класс индикатора сортировки
pub fn get_sort_class(sort: &SortState, field: &str) -> &'static str {
    if sort.is_active(field) {
        "sort-icon active"
    } else {
        "sort-icon"
    }
}

/// Состояние панели пагинации, вычисленное из `PageInfo`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerState {
    pub page: u32,
    pub total_pages: u32,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub range_label: String,
    pub page_label: String,
}

impl From<&PageInfo> for PagerState {
    fn from(info: &PageInfo) -> Self {
        let range_label = if info.total_records == 0 {
            "No records".to_string()
        } else {
            format!(
                "{}–{} of {}",
                info.first_row(),
                info.last_row(),
                info.total_records
            )
        };
        Self {
            page: info.page,
            total_pages: info.total_pages,
            prev_disabled: info.page <= 1,
            next_disabled: info.page >= info.total_pages,
            range_label,
            page_label: format!("Page {} of {}", info.page, info.total_pages),
        }
    }
}

/// Сокращённый UUID для узких колонок: первые 8 символов и многоточие
pub fn short_id(value: &str) -> String {
    if value.chars().count() <= 8 {
        return value.to_string();
    }
    let head: String = value.chars().take(8).collect();
    format!("{}…", head)
}
