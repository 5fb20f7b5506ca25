use crate::enums::Sender;
use serde::{Deserialize, Serialize};

/// Label used on the error bubble of a failed submission.
pub const SYSTEM_MODEL_LABEL: &str = "System";
/// Label used on the fallback bubble that follows an error bubble.
pub const SIMULATOR_MODEL_LABEL: &str = "Simulator";

/// One entry of the transcript.
///
/// Serialised field names match the exported JSON
/// (`sender`, `content`, `model`, `isError`); absent options are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub sender: Sender,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            content: content.into(),
            model: None,
            is_error: None,
        }
    }

    pub fn ai(content: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            sender: Sender::Ai,
            content: content.into(),
            model: Some(model.into()),
            is_error: None,
        }
    }

    /// Error bubble: `An error occurred during simulation: <details>.`
    pub fn simulation_error(details: &str) -> Self {
        Self {
            sender: Sender::Ai,
            content: format!("An error occurred during simulation: {}.", details),
            model: Some(SYSTEM_MODEL_LABEL.to_string()),
            is_error: Some(true),
        }
    }

    /// Fallback bubble that always follows [`ChatMessage::simulation_error`].
    pub fn fallback(prompt: &str) -> Self {
        Self::ai(
            format!(
                "This is a fallback simulated response. Your prompt was: \"{}\"",
                prompt
            ),
            SIMULATOR_MODEL_LABEL,
        )
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }

    pub fn is_error(&self) -> bool {
        self.is_error.unwrap_or(false)
    }
}
