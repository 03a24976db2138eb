use crate::shared::filters::QueryFilters;
use crate::shared::flag::deserialize_flag;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question_id: String,
    pub question_text: String,
    pub question_order: i64,
    #[serde(deserialize_with = "deserialize_flag")]
    pub is_active: bool,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Filters accepted by `GET /questions`. The endpoint returns every match in
/// one page whatever `page`/`pageSize` say.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionFilters {
    /// `"true"` / `"false"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl QueryFilters for QuestionFilters {
    fn query_pairs(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("isActive", self.is_active.as_deref()),
            ("search", self.search.as_deref()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_question_bool_flag() {
        let raw = r#"{
            "id": 1,
            "question_id": "q1",
            "question_text": "How did you hear about us?",
            "question_order": 1,
            "is_active": false,
            "created_at": "2025-12-01T00:00:00",
            "updated_at": "2025-12-01T00:00:00"
        }"#;
        let q: Question = serde_json::from_str(raw).unwrap();
        assert!(!q.is_active);
        assert_eq!(q.question_order, 1);
    }

    #[test]
    fn test_filters_camel_case() {
        let filters = QuestionFilters {
            is_active: Some("true".into()),
            search: None,
        };
        assert_eq!(
            serde_json::to_string(&filters).unwrap(),
            r#"{"isActive":"true"}"#
        );
    }
}
