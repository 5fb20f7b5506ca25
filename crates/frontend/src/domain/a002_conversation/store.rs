//! Conversation store.
//!
//! Wraps a [`Session`] in a signal. Views read through the accessor
//! signals and write through the intent methods; none of them touch the
//! session directly. `submit_prompt` accepts the prompt synchronously and
//! finishes on a local task after the reply latency, so the rest of the UI
//! stays interactive while a reply is pending.

use crate::domain::a001_model::CatalogStore;
use contracts::domain::a001_model::Model;
use contracts::domain::a002_conversation::{ChatMessage, Session, Submission};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

#[derive(Clone, Copy)]
pub struct ConversationStore {
    session: RwSignal<Session>,
    catalog: CatalogStore,
    reply_latency_ms: u32,
}

impl ConversationStore {
    pub fn new(catalog: CatalogStore, reply_latency_ms: u32) -> Self {
        Self {
            session: RwSignal::new(Session::default()),
            catalog,
            reply_latency_ms,
        }
    }

    pub fn prompt(&self) -> Signal<String> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.prompt().to_string()))
    }

    pub fn current_model_id(&self) -> Signal<String> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.current_model_id().to_string()))
    }

    /// Catalog entry for the selected id, if it resolves.
    pub fn current_model(&self) -> Signal<Option<Model>> {
        let store = *self;
        Signal::derive(move || {
            let id = store.session.with(|s| s.current_model_id().to_string());
            store.catalog.find_model(&id)
        })
    }

    pub fn temperature(&self) -> Signal<f64> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.parameters().temperature()))
    }

    pub fn max_tokens(&self) -> Signal<u32> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.parameters().max_tokens()))
    }

    pub fn chat_history(&self) -> Signal<Vec<ChatMessage>> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.chat_history().to_vec()))
    }

    pub fn message_count(&self) -> Signal<usize> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.chat_history().len()))
    }

    pub fn is_responding(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.with(Session::is_responding))
    }

    pub fn can_submit(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.with(Session::can_submit))
    }

    pub fn set_prompt(&self, prompt: String) {
        self.session.update(|s| s.set_prompt(prompt));
    }

    pub fn select_model(&self, model_id: String) {
        log::debug!("Model selected: {}", model_id);
        self.session.update(|s| s.select_model(model_id));
    }

    /// Overwrite the prompt with template `index`.
    pub fn apply_template(&self, index: usize) {
        let catalog = self.catalog.catalog_untracked();
        let applied = self
            .session
            .try_update(|s| s.apply_template(&catalog, index))
            .unwrap_or(false);
        if !applied {
            log::warn!("Template {} does not exist", index);
        }
    }

    pub fn set_temperature(&self, value: f64) {
        self.session.update(|s| s.set_temperature(value));
    }

    pub fn set_max_tokens(&self, value: u32) {
        self.session.update(|s| s.set_max_tokens(value));
    }

    /// Snapshot of the transcript for export.
    pub fn history_untracked(&self) -> Vec<ChatMessage> {
        self.session.with_untracked(|s| s.chat_history().to_vec())
    }

    /// Submit the current prompt. A blank prompt or a pending reply makes
    /// this a no-op.
    pub fn submit_prompt(&self) {
        if let Some(submission) = self.begin_submission() {
            spawn_local(
                self.complete_after(submission, TimeoutFuture::new(self.reply_latency_ms)),
            );
        }
    }

    /// Accept the prompt: append the user turn and enter the responding state.
    pub fn begin_submission(&self) -> Option<Submission> {
        if !self.session.with_untracked(Session::can_submit) {
            log::debug!("Submit ignored: prompt is blank or a reply is pending");
            return None;
        }

        let catalog = self.catalog.catalog_untracked();
        let submission = self
            .session
            .try_update(|s| s.begin_submission(&catalog))
            .flatten()?;

        log::info!(
            "Prompt submitted to {} ({} chars)",
            submission.model_id(),
            submission.prompt().chars().count()
        );
        Some(submission)
    }

    /// Wait out `latency`, then append the reply (or the error and fallback
    /// pair) and leave the responding state.
    pub async fn complete_after<F>(self, submission: Submission, latency: F)
    where
        F: Future<Output = ()>,
    {
        let outcome = submission.simulate(latency).await;
        match &outcome {
            Ok(reply) => log::info!("Simulated reply from {}", reply.model_name),
            Err(failure) => log::warn!("Simulation failed: {}", failure),
        }
        self.session
            .update(|s| s.complete_submission(&submission, outcome));
    }
}

pub fn use_conversation() -> ConversationStore {
    use_context::<ConversationStore>().expect("ConversationStore not found in component tree")
}
