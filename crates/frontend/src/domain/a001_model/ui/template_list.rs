use crate::domain::a001_model::use_catalog;
use crate::domain::a002_conversation::use_conversation;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Prompt templates. Clicking one replaces the prompt with its full text
/// and closes the settings drawer.
#[component]
pub fn TemplateList() -> impl IntoView {
    let catalog = use_catalog();
    let conversation = use_conversation();
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="template-list">
            <div class="form__label">"Prompt templates"</div>
            <For
                each=move || catalog.templates().get().into_iter().enumerate()
                key=|(i, _)| *i
                children=move |(index, text): (usize, String)| {
                    let title = text.clone();
                    view! {
                        <button
                            type="button"
                            class="template-list__item"
                            title=title
                            on:click=move |_| {
                                conversation.apply_template(index);
                                ctx.close_settings();
                            }
                        >
                            {icon("template")}
                            <span>{text}</span>
                        </button>
                    }
                }
            />
        </div>
    }
}
