use crate::shared::filters::QueryFilters;
use crate::shared::flag::deserialize_flag;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: i64,
    pub submission_id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(deserialize_with = "deserialize_flag")]
    pub consent_given: bool,
    #[serde(default)]
    pub consent_timestamp: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Participant {
    pub fn full_name(&self) -> String {
        let first = self.first_name.as_deref().unwrap_or("");
        let last = self.last_name.as_deref().unwrap_or("");
        format!("{} {}", first, last).trim().to_string()
    }
}

/// Filters accepted by `GET /participants`; `search` matches name and email.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl QueryFilters for ParticipantFilters {
    fn query_pairs(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("search", self.search.as_deref()),
            ("startDate", self.start_date.as_deref()),
            ("endDate", self.end_date.as_deref()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_participant() {
        let raw = r#"{
            "id": 3,
            "submission_id": "abc",
            "first_name": "Alice",
            "last_name": "Moreau",
            "email": "alice@example.org",
            "consent_given": true,
            "consent_timestamp": null,
            "created_at": "2026-02-01T08:00:00"
        }"#;
        let p: Participant = serde_json::from_str(raw).unwrap();
        assert!(p.consent_given);
        assert_eq!(p.consent_timestamp, None);
        assert_eq!(p.updated_at, None);
        assert_eq!(p.full_name(), "Alice Moreau");
    }

    #[test]
    fn test_full_name_without_last_name() {
        let p = Participant {
            id: 1,
            submission_id: "s".into(),
            first_name: Some("Bob".into()),
            last_name: None,
            email: None,
            consent_given: false,
            consent_timestamp: None,
            created_at: "2026-02-01T08:00:00".into(),
            updated_at: None,
        };
        assert_eq!(p.full_name(), "Bob");
    }
}
