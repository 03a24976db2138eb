pub mod global_context;
pub mod navigation;
pub mod tabs;
pub mod top_header;

use leptos::prelude::*;
use tabs::{ConsoleTabs, TabContent};
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |              ConsoleTabs                 |
/// +------------------------------------------+
/// |              TabContent                  |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-main">
                <ConsoleTabs />
                <div class="app-content">
                    <TabContent />
                </div>
            </div>
        </div>
    }
}
