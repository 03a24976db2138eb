use crate::shared::date_utils::is_valid_filter_date;
use contracts::shared::filters::non_empty;
use leptos::prelude::*;

/// Выпадающий фильтр: пустое значение означает «все»
#[component]
pub fn SelectFilter(
    label: &'static str,
    /// Пары (значение, подпись)
    options: &'static [(&'static str, &'static str)],
    #[prop(into)] value: Signal<Option<String>>,
    on_change: Callback<Option<String>>,
    #[prop(optional)] all_label: Option<&'static str>,
) -> impl IntoView {
    let all_label = all_label.unwrap_or("All");

    view! {
        <div class="doc-filter">
            <label class="doc-filter__label">{label}</label>
            <select
                class="doc-filter__select"
                prop:value=move || value.get().unwrap_or_default()
                on:change=move |ev| on_change.run(non_empty(&event_target_value(&ev)))
            >
                <option value="">{all_label}</option>
                {options.iter().map(|(value, text)| {
                    view! { <option value=*value>{*text}</option> }
                }).collect_view()}
            </select>
        </div>
    }
}

/// Поле даты `YYYY-MM-DD` с нативным календарём.
///
/// Пустое поле снимает фильтр, неполная дата игнорируется.
#[component]
pub fn DateFilter(
    label: &'static str,
    #[prop(into)] value: Signal<Option<String>>,
    on_change: Callback<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="doc-filter">
            <label class="doc-filter__label">{label}</label>
            <input
                type="date"
                class="doc-filter__date"
                prop:value=move || value.get().unwrap_or_default()
                on:change=move |ev| {
                    let raw = event_target_value(&ev);
                    match date_filter_value(&raw) {
                        Ok(date) => on_change.run(date),
                        Err(()) => log::debug!("ignoring incomplete date {:?}", raw),
                    }
                }
            />
        </div>
    }
}

/// `Ok(None)` снимает фильтр, `Err` означает «не менять»
fn date_filter_value(raw: &str) -> Result<Option<String>, ()> {
    match non_empty(raw) {
        None => Ok(None),
        Some(date) if is_valid_filter_date(&date) => Ok(Some(date)),
        Some(_) => Err(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_filter_value() {
        assert_eq!(date_filter_value(""), Ok(None));
        assert_eq!(date_filter_value("  "), Ok(None));
        assert_eq!(
            date_filter_value("2026-03-01"),
            Ok(Some("2026-03-01".to_string()))
        );
        assert_eq!(date_filter_value("2026-13-01"), Err(()));
    }
}
