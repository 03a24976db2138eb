use contracts::domain::a001_survey_response::SurveyResponse;
use leptos::prelude::*;
use thaw::*;

use crate::shared::date_utils::format_datetime;

/// Строка метаданных под текстом ответа
pub fn detail_meta(response: &SurveyResponse) -> String {
    format!(
        "Submission: {} | Input: {} | Created: {}",
        response.submission_id,
        response.input_method,
        format_datetime(&response.created_at)
    )
}

/// Карточка ответа. Открыта, пока `selected` содержит запись.
#[component]
pub fn ResponseDetail(selected: RwSignal<Option<SurveyResponse>>) -> impl IntoView {
    let open = RwSignal::new(false);

    Effect::new(move |_| {
        let has_record = selected.with(|s| s.is_some());
        untrack(move || open.set(has_record));
    });

    // Закрытие диалога (Esc, клик мимо) сбрасывает выбранную запись
    Effect::new(move |_| {
        if !open.get() {
            untrack(move || {
                if selected.with_untracked(|s| s.is_some()) {
                    selected.set(None);
                }
            });
        }
    });

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>
                        {move || selected.with(|s| {
                            s.as_ref()
                                .map(|r| format!("Response #{}", r.id))
                                .unwrap_or_default()
                        })}
                    </DialogTitle>
                    <DialogContent>
                        {move || selected.get().map(|response| {
                            let question = response
                                .question_text
                                .clone()
                                .unwrap_or_else(|| response.question_id.clone());
                            let meta = detail_meta(&response);
                            let text = response.response_text.clone().filter(|t| !t.trim().is_empty());
                            view! {
                                <div class="response-detail">
                                    <div class="response-detail__question">
                                        <strong>{response.question_id.to_uppercase()}": "</strong>
                                        {question}
                                    </div>
                                    <div class="response-detail__text">
                                        {match text {
                                            Some(text) => view! { <p>{text}</p> }.into_any(),
                                            None => view! {
                                                <p class="text-muted">"No response text"</p>
                                            }.into_any(),
                                        }}
                                    </div>
                                    <div class="response-detail__meta text-muted">{meta}</div>
                                </div>
                            }
                        })}
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| selected.set(None)>
                            "Close"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_meta() {
        let response = SurveyResponse {
            id: 5,
            participant_id: None,
            submission_id: "abc-123".into(),
            question_id: "q1".into(),
            question_text: None,
            response_text: Some("Fine".into()),
            input_method: "text".into(),
            processed: false,
            created_at: "2026-02-03T04:05:06".into(),
            updated_at: None,
        };
        assert_eq!(
            detail_meta(&response),
            "Submission: abc-123 | Input: text | Created: 2026-02-03 04:05:06"
        );
    }
}
