pub mod global_context;
pub mod header;
pub mod skeleton;

use crate::domain::a002_conversation::ui::{ChatTranscript, PromptInput, SettingsPanel};
use global_context::AppGlobalContext;
use header::TopHeader;
use leptos::prelude::*;

/// Live playground layout.
///
/// ```text
/// +------------------------------------------+
/// |               TopHeader                  |
/// +------------------------------------------+
/// |  Settings  |   ChatTranscript            |
/// |  (drawer   |                             |
/// |  on mobile)|   PromptInput               |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body" class:settings-open=move || ctx.settings_open.get()>
                <SettingsPanel />
                <main class="app-main">
                    <ChatTranscript />
                    <PromptInput />
                </main>
            </div>
        </div>
    }
}
