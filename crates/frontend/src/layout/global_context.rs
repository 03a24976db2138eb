use leptos::prelude::Effect;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

use super::navigation::ResponseSeed;

/// Вкладки консоли
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabId {
    #[default]
    Responses,
    Participants,
    Questions,
}

impl TabId {
    pub const ALL: [TabId; 3] = [TabId::Responses, TabId::Participants, TabId::Questions];

    pub fn as_str(&self) -> &'static str {
        match self {
            TabId::Responses => "responses",
            TabId::Participants => "participants",
            TabId::Questions => "questions",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TabId::Responses => "Responses",
            TabId::Participants => "Participants",
            TabId::Questions => "Questions",
        }
    }

    pub fn parse(value: &str) -> Option<TabId> {
        TabId::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

/// Query string of the page: `?tab=participants`
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct TabQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tab: Option<String>,
}

/// Reads the tab from a location search string; unknown values fall back to the default tab.
pub fn tab_from_search(search: &str) -> TabId {
    serde_qs::from_str::<TabQuery>(search.trim_start_matches('?'))
        .ok()
        .and_then(|q| q.tab)
        .and_then(|t| TabId::parse(&t))
        .unwrap_or_default()
}

pub fn search_for_tab(tab: TabId) -> String {
    let query = serde_qs::to_string(&TabQuery {
        tab: Some(tab.as_str().to_string()),
    })
    .unwrap_or_default();
    format!("?{}", query)
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Значение выбранной вкладки для `TabList`
    pub selected: RwSignal<String>,
    /// Фильтр перехода на вкладку ответов
    pub response_seed: RwSignal<Option<ResponseSeed>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            selected: RwSignal::new(TabId::default().as_str().to_string()),
            response_seed: RwSignal::new(None),
        }
    }

    pub fn active_tab(&self) -> TabId {
        self.selected.with(|v| TabId::parse(v).unwrap_or_default())
    }

    /// Переход на вкладку ответов с фильтром
    pub fn open_responses(&self, seed: ResponseSeed) {
        log::debug!("navigate to responses with {:?}", seed);
        self.response_seed.set(Some(seed));
        self.selected.set(TabId::Responses.as_str().to_string());
    }

    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let initial = tab_from_search(&search);
        self.selected.set(initial.as_str().to_string());

        let this = *self;
        Effect::new(move |_| {
            let tab = this.active_tab();

            // Ручной уход с вкладки ответов сбрасывает фильтр перехода
            if tab != TabId::Responses {
                untrack(|| {
                    if this.response_seed.get_untracked().is_some() {
                        this.response_seed.set(None);
                    }
                });
            }

            let new_url = search_for_tab(tab);
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_from_search() {
        assert_eq!(tab_from_search("?tab=participants"), TabId::Participants);
        assert_eq!(tab_from_search("tab=questions"), TabId::Questions);
        assert_eq!(tab_from_search(""), TabId::Responses);
        assert_eq!(tab_from_search("?tab=unknown"), TabId::Responses);
    }

    #[test]
    fn test_search_for_tab() {
        assert_eq!(search_for_tab(TabId::Questions), "?tab=questions");
        assert_eq!(tab_from_search(&search_for_tab(TabId::Participants)), TabId::Participants);
    }

    #[test]
    fn test_parse() {
        assert_eq!(TabId::parse("responses"), Some(TabId::Responses));
        assert_eq!(TabId::parse("Responses"), None);
    }
}
