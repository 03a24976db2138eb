//! Вкладки консоли
//!
//! Содержит:
//! - `ConsoleTabs` - переключатель вкладок
//! - `TabContent` - содержимое активной вкладки

use crate::domain::a001_survey_response::ui::ResponsesList;
use crate::domain::a002_participant::ui::ParticipantsList;
use crate::domain::a003_question::ui::QuestionsList;
use crate::layout::global_context::{AppGlobalContext, TabId};
use crate::layout::navigation::ResponseSeed;
use crate::shared::icons::icon;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ConsoleTabs() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <TabList selected_value=ctx.selected>
            {TabId::ALL.into_iter().map(|tab| {
                view! {
                    <Tab value=tab.as_str()>
                        <span class="console-tab">
                            {icon(tab.as_str())}
                            {tab.label()}
                        </span>
                    </Tab>
                }
            }).collect_view()}
        </TabList>
    }
}

/// Что монтировать: фильтр перехода важен только для вкладки ответов,
/// поэтому его сброс после ухода с неё не пересоздаёт новую вкладку.
pub fn mount_key(tab: TabId, seed: Option<ResponseSeed>) -> (TabId, Option<ResponseSeed>) {
    match tab {
        TabId::Responses => (tab, seed),
        _ => (tab, None),
    }
}

/// Монтирует контроллер активной вкладки.
///
/// Смена вкладки или фильтра перехода пересоздаёт контроллер,
/// предыдущий освобождается вместе со своим состоянием запроса.
#[component]
pub fn TabContent() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let current = Memo::new(move |_| mount_key(ctx.active_tab(), ctx.response_seed.get()));

    move || {
        let (tab, seed) = current.get();
        log!("mount tab {}", tab.as_str());
        match tab {
            TabId::Responses => match seed {
                Some(seed) => view! { <ResponsesList seed=seed /> }.into_any(),
                None => view! { <ResponsesList /> }.into_any(),
            },
            TabId::Participants => view! { <ParticipantsList /> }.into_any(),
            TabId::Questions => view! { <QuestionsList /> }.into_any(),
        }
    }
}
