//! Chat history export: the JSON text and the file name it is saved under.

use crate::domain::a002_conversation::ChatMessage;
use chrono::{DateTime, SecondsFormat, Utc};

/// Serialise the transcript as a 2-space indented JSON array.
pub fn history_to_json(history: &[ChatMessage]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(history)
}

/// `chat-history-<ISO 8601 timestamp>.json`, millisecond precision, UTC.
pub fn export_filename(at: DateTime<Utc>) -> String {
    format!(
        "chat-history-{}.json",
        at.to_rfc3339_opts(SecondsFormat::Millis, true)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_history() -> Vec<ChatMessage> {
        vec![
            ChatMessage::user("Hello"),
            ChatMessage::ai("Hi \"there\"\nsecond line", "GPT-4 Turbo"),
            ChatMessage::simulation_error("Selected model 'x' not found"),
            ChatMessage::fallback("Hello"),
        ]
    }

    #[test]
    fn test_json_round_trip() {
        let history = sample_history();
        let json = history_to_json(&history).unwrap();
        let parsed: Vec<ChatMessage> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, history);
    }

    #[test]
    fn test_json_is_two_space_indented() {
        let json = history_to_json(&[ChatMessage::user("Hi")]).unwrap();
        assert_eq!(
            json,
            "[\n  {\n    \"sender\": \"user\",\n    \"content\": \"Hi\"\n  }\n]"
        );
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(history_to_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_filename() {
        let at = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(
            export_filename(at),
            "chat-history-2024-03-15T14:02:26.000Z.json"
        );
    }
}
