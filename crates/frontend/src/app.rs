use crate::app_shell::AppShell;
use crate::domain::a001_model::CatalogStore;
use crate::domain::a002_conversation::ConversationStore;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::init_config;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = init_config();

    // The catalog loads exactly once, when the root mounts.
    let catalog = CatalogStore::new();
    catalog.load(config.simulation.catalog_latency_ms);
    let conversation = ConversationStore::new(catalog, config.simulation.reply_latency_ms);

    provide_context(config);
    provide_context(catalog);
    provide_context(conversation);
    provide_context(AppGlobalContext::new());

    view! {
        <ThemeProvider>
            <AppShell />
        </ThemeProvider>
    }
}
