//! Simulated replies.
//!
//! A [`Submission`] is the snapshot taken when a prompt is accepted: the
//! prompt text (captured before the input is cleared), the selected model
//! id and the catalog entry it resolved to, if any. [`Submission::simulate`]
//! turns that snapshot into a reply after the latency future completes.

use crate::domain::a001_model::catalog::{CLAUDE_3_OPUS, GEMINI_PRO, GPT_4_TURBO};
use crate::domain::a001_model::Model;
use std::future::Future;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationFailure {
    #[error("Selected model '{model_id}' not found")]
    ModelNotFound { model_id: String },
}

/// Successful outcome of a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedReply {
    pub content: String,
    pub model_name: String,
}

/// Canned reply text for `model_id`. The prompt is embedded verbatim in
/// double quotes.
pub fn compose_reply(model_id: &str, prompt: &str) -> String {
    match model_id {
        GPT_4_TURBO => format!(
            "As GPT-4 Turbo, I've analyzed your request: \"{}\". Here is a detailed, \
             structured answer drawing on broad general knowledge, with the key points \
             first and supporting context after.",
            prompt
        ),
        CLAUDE_3_OPUS => format!(
            "Claude 3 Opus here. Regarding \"{}\", I'd like to offer a careful, nuanced \
             perspective that weighs the trade-offs before reaching a conclusion.",
            prompt
        ),
        GEMINI_PRO => format!(
            "Gemini Pro responding to \"{}\". Let me break this down step by step and \
             highlight the most relevant facts along the way.",
            prompt
        ),
        other => format!(
            "Simulated response from model '{}' to your prompt: \"{}\"",
            other, prompt
        ),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    prompt: String,
    model_id: String,
    model: Option<Model>,
}

impl Submission {
    pub fn new(prompt: String, model_id: String, model: Option<Model>) -> Self {
        Self {
            prompt,
            model_id,
            model,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Resolve the reply. A missing model fails immediately without waiting
    /// on `latency`; otherwise the reply is composed and returned once
    /// `latency` completes.
    pub async fn simulate<F>(&self, latency: F) -> Result<SimulatedReply, SimulationFailure>
    where
        F: Future<Output = ()>,
    {
        let model = self
            .model
            .as_ref()
            .ok_or_else(|| SimulationFailure::ModelNotFound {
                model_id: self.model_id.clone(),
            })?;

        let content = compose_reply(&self.model_id, &self.prompt);
        latency.await;

        Ok(SimulatedReply {
            content,
            model_name: model.name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::ready;

    #[test]
    fn test_known_models_quote_prompt() {
        for id in [GPT_4_TURBO, CLAUDE_3_OPUS, GEMINI_PRO] {
            let reply = compose_reply(id, "Hello");
            assert_eq!(reply.matches("\"Hello\"").count(), 1, "{id}: {reply}");
        }
    }

    #[test]
    fn test_known_models_have_distinct_templates() {
        let a = compose_reply(GPT_4_TURBO, "x");
        let b = compose_reply(CLAUDE_3_OPUS, "x");
        let c = compose_reply(GEMINI_PRO, "x");
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn test_unmatched_model_names_model_and_prompt() {
        let reply = compose_reply("mistral-large", "Why?");
        assert!(reply.contains("mistral-large"));
        assert!(reply.contains("\"Why?\""));
    }

    #[tokio::test]
    async fn test_simulate_success() {
        let model = Model::new(GPT_4_TURBO, "GPT-4 Turbo", "OpenAI");
        let submission = Submission::new("Hello".into(), GPT_4_TURBO.into(), Some(model));
        let reply = submission.simulate(ready(())).await.unwrap();
        assert_eq!(reply.model_name, "GPT-4 Turbo");
        assert!(reply.content.contains("\"Hello\""));
    }

    #[tokio::test]
    async fn test_simulate_missing_model() {
        let submission = Submission::new("Hello".into(), "ghost".into(), None);
        let err = submission.simulate(ready(())).await.unwrap_err();
        assert_eq!(
            err,
            SimulationFailure::ModelNotFound {
                model_id: "ghost".into()
            }
        );
        assert_eq!(err.to_string(), "Selected model 'ghost' not found");
    }

    #[tokio::test]
    async fn test_catalog_entry_without_template_uses_generic_reply() {
        let model = Model::new("local-7b", "Local 7B", "Self-hosted");
        let submission = Submission::new("Ping".into(), "local-7b".into(), Some(model));
        let reply = submission.simulate(ready(())).await.unwrap();
        assert_eq!(reply.model_name, "Local 7B");
        assert!(reply.content.contains("local-7b"));
    }
}
