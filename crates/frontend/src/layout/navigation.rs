//! Переходы между вкладками по клику на строку.

use contracts::domain::a001_survey_response::{ResponseFilters, SurveyResponse};
use contracts::domain::common::SurveyRecord;
use contracts::shared::filters::non_empty;

use crate::shared::list_utils::short_id;

/// Фильтр, с которым открывается вкладка ответов после перехода
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseSeed {
    Submission(String),
    Question(String),
}

impl ResponseSeed {
    pub fn filters(&self) -> ResponseFilters {
        match self {
            ResponseSeed::Submission(id) => ResponseFilters::for_submission(id.clone()),
            ResponseSeed::Question(id) => ResponseFilters::for_question(id.clone()),
        }
    }

    /// Текст чипа, пока фильтр перехода ещё применён
    pub fn active_label(&self, filters: &ResponseFilters) -> Option<String> {
        match self {
            ResponseSeed::Submission(id) if filters.submission_id.as_deref() == Some(id.as_str()) => {
                Some(format!("Submission {}", short_id(id)))
            }
            ResponseSeed::Question(id) if filters.question_id.as_deref() == Some(id.as_str()) => {
                Some(format!("Question {}", id))
            }
            _ => None,
        }
    }

    /// Снимает фильтр перехода, остальные фильтры не трогает
    pub fn clear(&self, filters: &mut ResponseFilters) {
        match self {
            ResponseSeed::Submission(_) => filters.submission_id = None,
            ResponseSeed::Question(_) => filters.question_id = None,
        }
    }
}

/// Что делать после клика по строке
#[derive(Debug, Clone, PartialEq)]
pub enum Navigation {
    /// Открыть карточку ответа
    ShowResponseDetail(SurveyResponse),
    /// Перейти на вкладку ответов с фильтром
    OpenResponses(ResponseSeed),
    Stay,
}

impl Navigation {
    pub fn from_record_click(record: SurveyRecord) -> Self {
        log::debug!("row click on {} #{}", record.kind(), record.id());
        match record {
            SurveyRecord::Response(response) => Navigation::ShowResponseDetail(response),
            SurveyRecord::Participant(participant) => non_empty(&participant.submission_id)
                .map(|id| Navigation::OpenResponses(ResponseSeed::Submission(id)))
                .unwrap_or(Navigation::Stay),
            SurveyRecord::Question(question) => non_empty(&question.question_id)
                .map(|id| Navigation::OpenResponses(ResponseSeed::Question(id)))
                .unwrap_or(Navigation::Stay),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_participant::Participant;
    use contracts::domain::a003_question::Question;

    fn participant(submission_id: &str) -> Participant {
        Participant {
            id: 1,
            submission_id: submission_id.to_string(),
            first_name: Some("Alice".into()),
            last_name: None,
            email: None,
            consent_given: true,
            consent_timestamp: None,
            created_at: "2026-02-01T08:00:00".into(),
            updated_at: None,
        }
    }

    #[test]
    fn test_participant_click_opens_responses_by_submission() {
        let nav = Navigation::from_record_click(participant("9f1c2e7a-0001").into());
        assert_eq!(
            nav,
            Navigation::OpenResponses(ResponseSeed::Submission("9f1c2e7a-0001".into()))
        );
    }

    #[test]
    fn test_participant_without_submission_stays() {
        let nav = Navigation::from_record_click(participant("  ").into());
        assert_eq!(nav, Navigation::Stay);
    }

    #[test]
    fn test_question_click_opens_responses_by_question() {
        let question = Question {
            id: 2,
            question_id: "q2".into(),
            question_text: "Why?".into(),
            question_order: 2,
            is_active: true,
            created_at: "2025-12-01T00:00:00".into(),
            updated_at: None,
        };
        let nav = Navigation::from_record_click(question.into());
        assert_eq!(nav, Navigation::OpenResponses(ResponseSeed::Question("q2".into())));
    }

    #[test]
    fn test_response_click_shows_detail() {
        let response = SurveyResponse {
            id: 5,
            participant_id: Some(1),
            submission_id: "abc".into(),
            question_id: "q1".into(),
            question_text: None,
            response_text: Some("Great".into()),
            input_method: "text".into(),
            processed: false,
            created_at: "2026-01-15T10:20:30".into(),
            updated_at: None,
        };
        let nav = Navigation::from_record_click(response.clone().into());
        assert_eq!(nav, Navigation::ShowResponseDetail(response));
    }

    #[test]
    fn test_seed_chip_follows_filters() {
        let seed = ResponseSeed::Submission("9f1c2e7a-aaaa-bbbb".into());
        let mut filters = seed.filters();
        filters.input_method = Some("voice".into());
        assert_eq!(
            seed.active_label(&filters),
            Some("Submission 9f1c2e7a…".to_string())
        );

        seed.clear(&mut filters);
        assert_eq!(seed.active_label(&filters), None);
        assert_eq!(filters.input_method.as_deref(), Some("voice"));
    }

    #[test]
    fn test_question_seed_chip_hidden_after_select_change() {
        let seed = ResponseSeed::Question("q2".into());
        let mut filters = seed.filters();
        filters.question_id = Some("q4".into());
        assert_eq!(seed.active_label(&filters), None);
    }
}
