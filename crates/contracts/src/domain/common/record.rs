use crate::domain::a001_survey_response::SurveyResponse;
use crate::domain::a002_participant::Participant;
use crate::domain::a003_question::Question;
use serde::{Deserialize, Serialize};

/// Any row of the three collections, tagged by kind.
///
/// Used where a record leaves its own list, e.g. a row click that switches
/// to another tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SurveyRecord {
    Response(SurveyResponse),
    Participant(Participant),
    Question(Question),
}

impl SurveyRecord {
    pub fn id(&self) -> i64 {
        match self {
            SurveyRecord::Response(r) => r.id,
            SurveyRecord::Participant(p) => p.id,
            SurveyRecord::Question(q) => q.id,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SurveyRecord::Response(_) => "response",
            SurveyRecord::Participant(_) => "participant",
            SurveyRecord::Question(_) => "question",
        }
    }
}

impl From<SurveyResponse> for SurveyRecord {
    fn from(value: SurveyResponse) -> Self {
        SurveyRecord::Response(value)
    }
}

impl From<Participant> for SurveyRecord {
    fn from(value: Participant) -> Self {
        SurveyRecord::Participant(value)
    }
}

impl From<Question> for SurveyRecord {
    fn from(value: Question) -> Self {
        SurveyRecord::Question(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_roundtrip_keeps_kind() {
        let q = Question {
            id: 4,
            question_id: "q4".into(),
            question_text: "Anything else?".into(),
            question_order: 4,
            is_active: true,
            created_at: "2025-12-01T00:00:00".into(),
            updated_at: None,
        };
        let record = SurveyRecord::from(q);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["kind"], "question");
        assert_eq!(record.id(), 4);
        assert_eq!(record.kind(), "question");
    }
}
