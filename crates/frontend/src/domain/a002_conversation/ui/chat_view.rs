use crate::domain::a002_conversation::use_conversation;
use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use contracts::domain::a002_conversation::ChatMessage;
use leptos::prelude::*;
use std::time::Duration;

/// The transcript in chronological order, followed by the typing indicator
/// while a reply is pending.
#[component]
pub fn ChatTranscript() -> impl IntoView {
    let store = use_conversation();
    let chat_history = store.chat_history();
    let message_count = store.message_count();
    let is_responding = store.is_responding();
    let current_model = store.current_model();
    let current_model_id = store.current_model_id();
    let container_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest entry in view
    Effect::new(move |_| {
        message_count.track();
        is_responding.track();
        if let Some(container) = container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    view! {
        <div class="chat-transcript" node_ref=container_ref>
            <Show when=move || message_count.get() == 0>
                <div class="chat-transcript__empty">
                    {icon("bot")}
                    <p>
                        {move || {
                            let name = current_model
                                .get()
                                .map(|m| m.name)
                                .unwrap_or_else(|| current_model_id.get());
                            format!("Start a conversation with {}.", name)
                        }}
                    </p>
                    <p class="chat-transcript__hint">
                        "Pick a template or type a prompt. Enter sends, Shift+Enter adds a new line."
                    </p>
                </div>
            </Show>

            <For
                each=move || chat_history.get().into_iter().enumerate()
                key=|(i, _)| *i
                children=move |(_, message): (usize, ChatMessage)| {
                    view! { <ChatBubble message=message /> }
                }
            />

            <Show when=move || is_responding.get()>
                <TypingIndicator />
            </Show>
        </div>
    }
}

#[component]
fn ChatBubble(message: ChatMessage) -> impl IntoView {
    let is_user = message.is_user();
    let is_error = message.is_error();
    let author = if is_user {
        "You".to_string()
    } else {
        message.model.clone().unwrap_or_else(|| "AI".to_string())
    };

    let bubble_class = if is_error {
        "chat-bubble chat-bubble--ai chat-bubble--error"
    } else if is_user {
        "chat-bubble chat-bubble--user"
    } else {
        "chat-bubble chat-bubble--ai"
    };

    let copy_button = (!is_user).then(|| {
        let content = message.content.clone();
        view! { <CopyButton content=content /> }
    });

    view! {
        <div class=if is_user { "chat-row chat-row--user" } else { "chat-row chat-row--ai" }>
            <div class=bubble_class>
                <div class="chat-bubble__meta">
                    {if is_error { icon("alert") } else if is_user { icon("user") } else { icon("bot") }}
                    <span>{author}</span>
                    {copy_button}
                </div>
                <div class="chat-bubble__content">{message.content}</div>
            </div>
        </div>
    }
}

/// Copies the raw message text. The "copied" state lasts for the configured
/// flash period; another copy restarts it.
#[component]
fn CopyButton(content: String) -> impl IntoView {
    let flash = Duration::from_millis(use_config().ui.copied_flash_ms as u64);
    let copied = RwSignal::new(false);
    let reset_handle = StoredValue::new(None::<TimeoutHandle>);
    let content = StoredValue::new(content);

    let on_copy = move |_| {
        let text = content.get_value();
        copy_to_clipboard_with_callback(&text, move || {
            if let Some(handle) = reset_handle.get_value() {
                handle.clear();
            }
            copied.set(true);
            match set_timeout_with_handle(move || copied.set(false), flash) {
                Ok(handle) => reset_handle.set_value(Some(handle)),
                Err(e) => {
                    log::warn!("Failed to schedule copy indicator reset: {:?}", e);
                    copied.set(false);
                }
            }
        });
    };

    view! {
        <button
            type="button"
            class="chat-bubble__copy"
            title=move || if copied.get() { "Copied" } else { "Copy to clipboard" }
            on:click=on_copy
        >
            {move || if copied.get() { icon("check") } else { icon("copy") }}
            <Show when=move || copied.get()>
                <span>"Copied"</span>
            </Show>
        </button>
    }
}

#[component]
fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="chat-row chat-row--ai">
            <div class="chat-bubble chat-bubble--ai typing-indicator" aria-label="Model is typing">
                <span class="typing-indicator__dot"></span>
                <span class="typing-indicator__dot"></span>
                <span class="typing-indicator__dot"></span>
            </div>
        </div>
    }
}
