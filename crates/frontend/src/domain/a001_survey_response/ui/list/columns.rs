use contracts::domain::a001_survey_response::SurveyResponse;

use crate::shared::components::{CellFragment, ColumnDef, Tone};
use crate::shared::date_utils::format_datetime;
use crate::shared::list_utils::{short_id, CellValue, TableRecord};

impl TableRecord for SurveyResponse {
    fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => CellValue::Int(self.id),
            "submission_id" => CellValue::text(&self.submission_id),
            "question_id" => CellValue::text(&self.question_id),
            "question_text" => CellValue::opt_text(self.question_text.as_deref()),
            "response_text" => CellValue::opt_text(self.response_text.as_deref()),
            "input_method" => CellValue::text(&self.input_method),
            "processed" => CellValue::Bool(self.processed),
            "created_at" => CellValue::text(&self.created_at),
            _ => CellValue::Null,
        }
    }

    fn row_key(&self) -> String {
        self.id.to_string()
    }
}

fn submission_cell(value: &CellValue, _: &SurveyResponse) -> CellFragment {
    CellFragment::Text(short_id(&value.to_string()))
}

fn response_cell(value: &CellValue, _: &SurveyResponse) -> CellFragment {
    match value {
        CellValue::Text(text) if !text.trim().is_empty() => CellFragment::Text(text.clone()),
        _ => CellFragment::Muted("No response".to_string()),
    }
}

pub fn input_method_cell(value: &CellValue, _: &SurveyResponse) -> CellFragment {
    let text = value.to_string();
    let tone = match text.as_str() {
        "voice" => Tone::Brand,
        "text" => Tone::Informative,
        _ => Tone::Subtle,
    };
    CellFragment::Badge { text, tone }
}

fn processed_cell(value: &CellValue, _: &SurveyResponse) -> CellFragment {
    if value.as_bool().unwrap_or(false) {
        CellFragment::Badge {
            text: "Yes".to_string(),
            tone: Tone::Success,
        }
    } else {
        CellFragment::Badge {
            text: "No".to_string(),
            tone: Tone::Subtle,
        }
    }
}

fn created_cell(value: &CellValue, _: &SurveyResponse) -> CellFragment {
    CellFragment::Text(format_datetime(&value.to_string()))
}

pub const RESPONSE_COLUMNS: &[ColumnDef<SurveyResponse>] = &[
    ColumnDef::new("id", "ID").sortable().width(60.0, 80.0),
    ColumnDef::new("submission_id", "Submission")
        .sortable()
        .width(120.0, 180.0)
        .render(submission_cell),
    ColumnDef::new("question_id", "Question")
        .sortable()
        .width(80.0, 100.0),
    ColumnDef::new("response_text", "Response")
        .width(200.0, 400.0)
        .render(response_cell),
    ColumnDef::new("input_method", "Input")
        .sortable()
        .width(70.0, 90.0)
        .render(input_method_cell),
    ColumnDef::new("processed", "Processed")
        .sortable()
        .width(80.0, 100.0)
        .render(processed_cell),
    ColumnDef::new("created_at", "Created")
        .sortable()
        .width(140.0, 180.0)
        .render(created_cell),
];

pub const QUESTION_OPTIONS: &[(&str, &str)] = &[
    ("q1", "Q1"),
    ("q2", "Q2"),
    ("q3", "Q3"),
    ("q4", "Q4"),
    ("q5", "Q5"),
];

pub const INPUT_METHOD_OPTIONS: &[(&str, &str)] = &[("voice", "Voice"), ("text", "Text")];

pub const PROCESSED_OPTIONS: &[(&str, &str)] = &[("true", "Processed"), ("false", "Pending")];
