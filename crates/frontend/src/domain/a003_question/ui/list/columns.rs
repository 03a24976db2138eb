use contracts::domain::a003_question::Question;

use crate::shared::components::{CellFragment, ColumnDef, Tone};
use crate::shared::date_utils::format_datetime;
use crate::shared::list_utils::{CellValue, TableRecord};

impl TableRecord for Question {
    fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => CellValue::Int(self.id),
            "question_id" => CellValue::text(&self.question_id),
            "question_text" => CellValue::text(&self.question_text),
            "question_order" => CellValue::Int(self.question_order),
            "is_active" => CellValue::Bool(self.is_active),
            "created_at" => CellValue::text(&self.created_at),
            _ => CellValue::Null,
        }
    }

    fn row_key(&self) -> String {
        self.id.to_string()
    }
}

fn status_cell(value: &CellValue, _: &Question) -> CellFragment {
    if value.as_bool().unwrap_or(false) {
        CellFragment::Badge {
            text: "Active".to_string(),
            tone: Tone::Success,
        }
    } else {
        CellFragment::Badge {
            text: "Inactive".to_string(),
            tone: Tone::Danger,
        }
    }
}

fn created_cell(value: &CellValue, _: &Question) -> CellFragment {
    CellFragment::Text(format_datetime(&value.to_string()))
}

pub const QUESTION_COLUMNS: &[ColumnDef<Question>] = &[
    ColumnDef::new("id", "ID").sortable().width(60.0, 80.0),
    ColumnDef::new("question_id", "Question ID")
        .sortable()
        .width(100.0, 120.0),
    ColumnDef::new("question_text", "Question Text").min_width(300.0),
    ColumnDef::new("question_order", "Order")
        .sortable()
        .width(70.0, 90.0),
    ColumnDef::new("is_active", "Status")
        .sortable()
        .width(80.0, 100.0)
        .render(status_cell),
    ColumnDef::new("created_at", "Created")
        .sortable()
        .width(140.0, 180.0)
        .render(created_cell),
];

pub const ACTIVE_OPTIONS: &[(&str, &str)] = &[("true", "Active"), ("false", "Inactive")];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::components::data_table::render_cell;

    #[test]
    fn test_question_status_badge() {
        let q = Question {
            id: 1,
            question_id: "q1".into(),
            question_text: "How did you hear about us?".into(),
            question_order: 1,
            is_active: false,
            created_at: "2025-12-01T00:00:00".into(),
            updated_at: None,
        };
        let status = QUESTION_COLUMNS.iter().find(|c| c.key == "is_active").unwrap();
        assert_eq!(
            render_cell(status, &q),
            CellFragment::Badge {
                text: "Inactive".into(),
                tone: Tone::Danger
            }
        );
        let order = QUESTION_COLUMNS.iter().find(|c| c.key == "question_order").unwrap();
        assert_eq!(render_cell(order, &q), CellFragment::Text("1".into()));
    }

    #[test]
    fn test_question_text_not_sortable() {
        let text = QUESTION_COLUMNS.iter().find(|c| c.key == "question_text").unwrap();
        assert!(!text.sortable);
    }
}
