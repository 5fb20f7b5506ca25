//! Top bar: title, transcript summary and the global actions (settings
//! drawer, export, theme).

use crate::domain::a002_conversation::use_conversation;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ui::Button;
use crate::shared::export::download_chat_history;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let store = use_conversation();
    let message_count = store.message_count();
    let current_model = store.current_model();

    let download = move |_: leptos::ev::MouseEvent| {
        let history = store.history_untracked();
        if let Err(e) = download_chat_history(&history) {
            log::error!("Chat export failed: {}", e);
        }
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <Button
                    variant="icon".to_string()
                    class="top-header__icon-btn top-header__settings-toggle".to_string()
                    title="Settings".to_string()
                    on_click=Callback::new(move |_| ctx.toggle_settings())
                >
                    {icon("settings")}
                </Button>
                <span class="top-header__title">"Model Playground"</span>
            </div>

            <div class="top-header__summary">
                <span>
                    {move || current_model
                        .get()
                        .map(|m| format!("{} · {}", m.name, m.provider))
                        .unwrap_or_else(|| "Unknown model".to_string())}
                </span>
                <span>
                    {move || match message_count.get() {
                        1 => "1 message".to_string(),
                        n => format!("{} messages", n),
                    }}
                </span>
            </div>

            <div class="top-header__actions">
                <Button
                    variant="icon".to_string()
                    class="top-header__icon-btn".to_string()
                    title="Download chat history".to_string()
                    on_click=Callback::new(download)
                >
                    {icon("download")}
                </Button>
                <ThemeToggle />
            </div>
        </header>
    }
}
