use super::ParametersPanel;
use crate::domain::a001_model::ui::{ModelSelect, TemplateList};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Model, parameters and templates. A sidebar on wide screens, a drawer
/// toggled from the header on narrow ones.
#[component]
pub fn SettingsPanel() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="settings-panel__backdrop" on:click=move |_| ctx.close_settings()></div>
        <aside class="settings-panel">
            <div class="settings-panel__header">
                <h2>"Settings"</h2>
                <button
                    type="button"
                    class="top-header__icon-btn settings-panel__close"
                    title="Close settings"
                    on:click=move |_| ctx.close_settings()
                >
                    {icon("close")}
                </button>
            </div>
            <ModelSelect />
            <ParametersPanel />
            <TemplateList />
        </aside>
    }
}
