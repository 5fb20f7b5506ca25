use crate::domain::a002_conversation::use_conversation;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// What a key press in the prompt field should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    Submit,
    /// Let the browser insert the newline.
    Newline,
    Other,
}

/// Enter submits; Shift+Enter inserts a newline. Enter while an IME
/// composition is active belongs to the IME.
pub fn key_intent(key: &str, shift: bool, composing: bool) -> KeyIntent {
    match key {
        "Enter" if composing => KeyIntent::Other,
        "Enter" if shift => KeyIntent::Newline,
        "Enter" => KeyIntent::Submit,
        _ => KeyIntent::Other,
    }
}

#[component]
pub fn PromptInput() -> impl IntoView {
    let store = use_conversation();
    let prompt = store.prompt();
    let can_submit = store.can_submit();
    let is_responding = store.is_responding();

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if key_intent(&ev.key(), ev.shift_key(), ev.is_composing()) == KeyIntent::Submit {
            ev.prevent_default();
            store.submit_prompt();
        }
    };

    view! {
        <div class="prompt-input">
            <textarea
                id="prompt-input"
                class="form__textarea prompt-input__field"
                rows=3
                placeholder="Type a prompt... (Enter to send, Shift+Enter for a new line)"
                prop:value=move || prompt.get()
                on:input=move |ev| store.set_prompt(event_target_value(&ev))
                on:keydown=on_keydown
            ></textarea>
            <Button
                variant="primary".to_string()
                class="prompt-input__send".to_string()
                title="Send".to_string()
                disabled=Signal::derive(move || !can_submit.get())
                on_click=Callback::new(move |_| store.submit_prompt())
            >
                {icon("send")}
                <span>{move || if is_responding.get() { "Responding..." } else { "Send" }}</span>
            </Button>
        </div>
    }
}
