use crate::domain::a001_model::use_catalog;
use crate::domain::a002_conversation::use_conversation;
use contracts::domain::a001_model::Model;
use leptos::prelude::*;

/// Dropdown with one option per catalog model. Choosing one selects it in
/// the conversation store.
#[component]
pub fn ModelSelect() -> impl IntoView {
    let catalog = use_catalog();
    let conversation = use_conversation();
    let current = conversation.current_model_id();

    view! {
        <div class="form__group">
            <label class="form__label" for="model-select">"Model"</label>
            <select
                id="model-select"
                class="form__select"
                prop:value=move || current.get()
                on:change=move |ev| conversation.select_model(event_target_value(&ev))
            >
                <For
                    each=move || catalog.models().get()
                    key=|m| m.id.clone()
                    children=move |m: Model| {
                        let id = m.id.clone();
                        let is_selected = move || current.get() == id;
                        view! {
                            <option value=m.id.clone() selected=is_selected>
                                {format!("{} ({})", m.name, m.provider)}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
