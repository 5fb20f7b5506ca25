//! Conversation session: selected model, parameters, prompt and transcript.
//!
//! A submission is split in two halves so the caller can own the wait in
//! between: [`Session::begin_submission`] applies the guard, appends the
//! user turn and raises `is_responding`; [`Session::complete_submission`]
//! appends the outcome and lowers the flag. While the flag is up every
//! further `begin_submission` is rejected, so replies never interleave.

use super::message::ChatMessage;
use super::parameters::Parameters;
use super::reply::{SimulatedReply, SimulationFailure, Submission};
use crate::domain::a001_model::{Catalog, DEFAULT_MODEL_ID};

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    current_model_id: String,
    parameters: Parameters,
    prompt: String,
    chat_history: Vec<ChatMessage>,
    is_responding: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL_ID)
    }
}

impl Session {
    pub fn new(model_id: impl Into<String>) -> Self {
        Self {
            current_model_id: model_id.into(),
            parameters: Parameters::default(),
            prompt: String::new(),
            chat_history: Vec::new(),
            is_responding: false,
        }
    }

    pub fn current_model_id(&self) -> &str {
        &self.current_model_id
    }

    pub fn select_model(&mut self, model_id: impl Into<String>) {
        self.current_model_id = model_id.into();
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    /// Replace the prompt with template `index`. Returns `false` and leaves
    /// the prompt untouched when the index is out of range.
    pub fn apply_template(&mut self, catalog: &Catalog, index: usize) -> bool {
        match catalog.template(index) {
            Some(text) => {
                self.prompt = text.to_string();
                true
            }
            None => false,
        }
    }

    pub fn parameters(&self) -> Parameters {
        self.parameters
    }

    pub fn set_temperature(&mut self, value: f64) {
        self.parameters.set_temperature(value);
    }

    pub fn set_max_tokens(&mut self, value: u32) {
        self.parameters.set_max_tokens(value);
    }

    pub fn chat_history(&self) -> &[ChatMessage] {
        &self.chat_history
    }

    pub fn is_responding(&self) -> bool {
        self.is_responding
    }

    /// Whether a submit would be accepted right now.
    pub fn can_submit(&self) -> bool {
        !self.is_responding && !self.prompt.trim().is_empty()
    }

    /// Accept the current prompt. Returns `None` without touching any state
    /// when the prompt is blank or a reply is already pending.
    pub fn begin_submission(&mut self, catalog: &Catalog) -> Option<Submission> {
        if !self.can_submit() {
            return None;
        }

        let prompt = std::mem::take(&mut self.prompt);
        self.chat_history.push(ChatMessage::user(prompt.clone()));
        self.is_responding = true;

        let model = catalog.find_model(&self.current_model_id).cloned();
        Some(Submission::new(prompt, self.current_model_id.clone(), model))
    }

    /// Append the outcome of `submission` and clear `is_responding`.
    ///
    /// Failure always appends the error bubble followed by the fallback
    /// bubble, never one without the other.
    pub fn complete_submission(
        &mut self,
        submission: &Submission,
        outcome: Result<SimulatedReply, SimulationFailure>,
    ) {
        match outcome {
            Ok(reply) => {
                self.chat_history
                    .push(ChatMessage::ai(reply.content, reply.model_name));
            }
            Err(failure) => {
                self.chat_history
                    .push(ChatMessage::simulation_error(&failure.to_string()));
                self.chat_history
                    .push(ChatMessage::fallback(submission.prompt()));
            }
        }
        self.is_responding = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_conversation::message::{SIMULATOR_MODEL_LABEL, SYSTEM_MODEL_LABEL};
    use crate::enums::Sender;
    use std::future::ready;

    async fn submit(session: &mut Session, catalog: &Catalog) -> bool {
        match session.begin_submission(catalog) {
            Some(submission) => {
                let outcome = submission.simulate(ready(())).await;
                session.complete_submission(&submission, outcome);
                true
            }
            None => false,
        }
    }

    #[tokio::test]
    async fn test_known_model_scenario() {
        let catalog = Catalog::standard();
        let mut session = Session::new("gpt-4-turbo");
        session.set_prompt("Hello");

        assert!(submit(&mut session, &catalog).await);

        let history = session.chat_history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], ChatMessage::user("Hello"));
        assert_eq!(history[1].sender, Sender::Ai);
        assert_eq!(history[1].model.as_deref(), Some("GPT-4 Turbo"));
        assert_eq!(history[1].content.matches("\"Hello\"").count(), 1);
        assert_eq!(history[1].is_error, None);
        assert!(!session.is_responding());
        assert_eq!(session.prompt(), "");
    }

    #[tokio::test]
    async fn test_unknown_model_appends_error_then_fallback() {
        let catalog = Catalog::standard();
        let mut session = Session::new("no-such-model");
        session.set_prompt("Anyone there?");

        assert!(submit(&mut session, &catalog).await);

        let history = session.chat_history();
        assert_eq!(history.len(), 3);
        assert!(history[0].is_user());

        assert_eq!(history[1].sender, Sender::Ai);
        assert_eq!(history[1].is_error, Some(true));
        assert_eq!(history[1].model.as_deref(), Some(SYSTEM_MODEL_LABEL));
        assert!(history[1]
            .content
            .starts_with("An error occurred during simulation: "));

        assert_eq!(history[2].sender, Sender::Ai);
        assert_eq!(history[2].model.as_deref(), Some(SIMULATOR_MODEL_LABEL));
        assert!(history[2].content.ends_with("\"Anyone there?\""));
        assert!(!session.is_responding());
    }

    #[test]
    fn test_blank_prompt_is_rejected() {
        let catalog = Catalog::standard();
        for prompt in ["", "   ", "\n\t "] {
            let mut session = Session::default();
            session.set_prompt(prompt);
            let before = session.clone();
            assert!(session.begin_submission(&catalog).is_none());
            assert_eq!(session, before);
        }
    }

    #[test]
    fn test_second_submit_while_responding_is_rejected() {
        let catalog = Catalog::standard();
        let mut session = Session::default();
        session.set_prompt("first");
        let pending = session.begin_submission(&catalog).unwrap();
        assert!(session.is_responding());
        assert_eq!(pending.prompt(), "first");

        session.set_prompt("second");
        let before = session.clone();
        assert!(session.begin_submission(&catalog).is_none());
        assert_eq!(session, before);
        assert_eq!(session.chat_history().len(), 1);
    }

    #[tokio::test]
    async fn test_rapid_submits_serialize() {
        let catalog = Catalog::standard();
        let mut session = Session::default();
        let mut accepted = 0;

        for round in 0..5 {
            session.set_prompt(format!("prompt {round}"));
            let first = session.begin_submission(&catalog).unwrap();
            accepted += 1;
            // Triggers fired while the reply is pending are dropped.
            for _ in 0..3 {
                session.set_prompt("spam");
                assert!(session.begin_submission(&catalog).is_none());
            }
            let outcome = first.simulate(ready(())).await;
            session.complete_submission(&first, outcome);
        }

        let history = session.chat_history();
        assert_eq!(history.len(), accepted * 2);
        for (i, pair) in history.chunks(2).enumerate() {
            assert_eq!(pair[0], ChatMessage::user(format!("prompt {i}")));
            assert_eq!(pair[1].sender, Sender::Ai);
            assert!(pair[1].content.contains(&format!("\"prompt {i}\"")));
        }
    }

    #[tokio::test]
    async fn test_history_is_append_only() {
        let catalog = Catalog::standard();
        let mut session = Session::default();
        let mut snapshot: Vec<ChatMessage> = Vec::new();

        for (i, model) in ["gpt-4-turbo", "missing", "gemini-pro"].iter().enumerate() {
            session.select_model(*model);
            session.set_prompt(format!("q{i}"));
            submit(&mut session, &catalog).await;

            let history = session.chat_history();
            assert!(history.len() >= snapshot.len());
            assert_eq!(&history[..snapshot.len()], snapshot.as_slice());
            snapshot = history.to_vec();
        }
        assert_eq!(snapshot.len(), 2 + 3 + 2);
    }

    #[test]
    fn test_template_replaces_prompt() {
        let catalog = Catalog::standard();
        let mut session = Session::default();
        session.set_prompt("something I was typing");
        assert!(session.apply_template(&catalog, 2));
        assert_eq!(session.prompt(), catalog.templates[2]);
    }

    #[test]
    fn test_template_out_of_range_keeps_prompt() {
        let catalog = Catalog::standard();
        let mut session = Session::default();
        session.set_prompt("draft");
        assert!(!session.apply_template(&catalog, 99));
        assert_eq!(session.prompt(), "draft");
    }

    #[test]
    fn test_parameters_are_clamped_through_session() {
        let mut session = Session::default();
        session.set_temperature(3.0);
        session.set_max_tokens(0);
        assert_eq!(session.parameters().temperature(), 1.0);
        assert_eq!(session.parameters().max_tokens(), 256);
    }
}
