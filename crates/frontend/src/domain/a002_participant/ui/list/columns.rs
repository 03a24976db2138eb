use contracts::domain::a002_participant::Participant;

use crate::shared::components::{CellFragment, ColumnDef, Tone};
use crate::shared::date_utils::format_datetime;
use crate::shared::list_utils::{short_id, CellValue, TableRecord};

impl TableRecord for Participant {
    fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => CellValue::Int(self.id),
            "submission_id" => CellValue::text(&self.submission_id),
            "first_name" => CellValue::opt_text(self.first_name.as_deref()),
            "last_name" => CellValue::opt_text(self.last_name.as_deref()),
            "email" => CellValue::opt_text(self.email.as_deref()),
            "consent_given" => CellValue::Bool(self.consent_given),
            "consent_timestamp" => CellValue::opt_text(self.consent_timestamp.as_deref()),
            "created_at" => CellValue::text(&self.created_at),
            _ => CellValue::Null,
        }
    }

    fn row_key(&self) -> String {
        self.id.to_string()
    }
}

fn submission_cell(value: &CellValue, _: &Participant) -> CellFragment {
    CellFragment::Text(short_id(&value.to_string()))
}

fn consent_cell(value: &CellValue, _: &Participant) -> CellFragment {
    let (text, tone) = if value.as_bool().unwrap_or(false) {
        ("Yes", Tone::Success)
    } else {
        ("No", Tone::Subtle)
    };
    CellFragment::Badge {
        text: text.to_string(),
        tone,
    }
}

fn timestamp_cell(value: &CellValue, _: &Participant) -> CellFragment {
    if value.is_null() {
        CellFragment::Muted("-".to_string())
    } else {
        CellFragment::Text(format_datetime(&value.to_string()))
    }
}

pub const PARTICIPANT_COLUMNS: &[ColumnDef<Participant>] = &[
    ColumnDef::new("id", "ID").sortable().width(60.0, 80.0),
    ColumnDef::new("submission_id", "Submission")
        .sortable()
        .width(120.0, 180.0)
        .render(submission_cell),
    ColumnDef::new("first_name", "First Name").sortable(),
    ColumnDef::new("last_name", "Last Name").sortable(),
    ColumnDef::new("email", "Email").sortable().min_width(180.0),
    ColumnDef::new("consent_given", "Consent")
        .sortable()
        .width(70.0, 90.0)
        .render(consent_cell),
    ColumnDef::new("consent_timestamp", "Consent Time")
        .sortable()
        .width(140.0, 180.0)
        .render(timestamp_cell),
    ColumnDef::new("created_at", "Created")
        .sortable()
        .width(140.0, 180.0)
        .render(timestamp_cell),
];
