use crate::shared::filters::QueryFilters;
use crate::shared::flag::deserialize_flag;
use serde::{Deserialize, Serialize};

/// One answer given by a participant to one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyResponse {
    pub id: i64,
    #[serde(default)]
    pub participant_id: Option<i64>,
    pub submission_id: String,
    pub question_id: String,
    #[serde(default)]
    pub question_text: Option<String>,
    #[serde(default)]
    pub response_text: Option<String>,
    /// `voice` or `text`
    pub input_method: String,
    #[serde(deserialize_with = "deserialize_flag")]
    pub processed: bool,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Filters accepted by `GET /responses` and `GET /responses/export`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_method: Option<String>,
    /// `"true"` / `"false"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl ResponseFilters {
    pub fn for_submission(submission_id: impl Into<String>) -> Self {
        Self {
            submission_id: Some(submission_id.into()),
            ..Self::default()
        }
    }

    pub fn for_question(question_id: impl Into<String>) -> Self {
        Self {
            question_id: Some(question_id.into()),
            ..Self::default()
        }
    }
}

impl QueryFilters for ResponseFilters {
    fn query_pairs(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("questionId", self.question_id.as_deref()),
            ("inputMethod", self.input_method.as_deref()),
            ("processed", self.processed.as_deref()),
            ("startDate", self.start_date.as_deref()),
            ("endDate", self.end_date.as_deref()),
            ("submissionId", self.submission_id.as_deref()),
            ("search", self.search.as_deref()),
        ]
    }
}
