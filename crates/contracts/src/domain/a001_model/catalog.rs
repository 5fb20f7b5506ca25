//! Static catalog of simulated models and prompt templates.
//!
//! The catalog never comes from the network. [`load_catalog`] only waits on
//! the latency future it is given, so callers decide how long "loading"
//! takes (a browser timeout in the app, nothing at all in tests).

use super::aggregate::{Catalog, Model};
use std::future::Future;

pub const GPT_4_TURBO: &str = "gpt-4-turbo";
pub const CLAUDE_3_OPUS: &str = "claude-3-opus";
pub const GEMINI_PRO: &str = "gemini-pro";

/// Model selected when the session starts.
pub const DEFAULT_MODEL_ID: &str = GPT_4_TURBO;

const TEMPLATES: [&str; 4] = [
    "Explain quantum computing in simple terms.",
    "Write a short poem about the ocean at night.",
    "Summarize the key differences between TCP and UDP.",
    "Suggest three names for a coffee shop run by robots.",
];

fn standard_models() -> Vec<Model> {
    vec![
        Model::new(GPT_4_TURBO, "GPT-4 Turbo", "OpenAI"),
        Model::new(CLAUDE_3_OPUS, "Claude 3 Opus", "Anthropic"),
        Model::new(GEMINI_PRO, "Gemini Pro", "Google"),
    ]
}

impl Catalog {
    /// The fixed catalog shipped with the playground.
    pub fn standard() -> Self {
        Self {
            models: standard_models(),
            templates: TEMPLATES.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Resolve the catalog after `latency` completes. Always succeeds.
pub async fn load_catalog<F>(latency: F) -> Catalog
where
    F: Future<Output = ()>,
{
    latency.await;
    Catalog::standard()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_ids_are_unique() {
        let catalog = Catalog::standard();
        let mut ids: Vec<&str> = catalog.models.iter().map(|m| m.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.models.len());
    }

    #[test]
    fn test_default_model_is_in_catalog() {
        let catalog = Catalog::standard();
        let model = catalog.find_model(DEFAULT_MODEL_ID).unwrap();
        assert_eq!(model.name, "GPT-4 Turbo");
    }

    #[test]
    fn test_find_unknown_model() {
        assert!(Catalog::standard().find_model("llama-2").is_none());
        assert!(Catalog::default().find_model(GPT_4_TURBO).is_none());
    }

    #[test]
    fn test_template_lookup() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.template(2), Some(TEMPLATES[2]));
        assert_eq!(catalog.template(TEMPLATES.len()), None);
    }

    #[tokio::test]
    async fn test_load_catalog_resolves_standard() {
        let catalog = load_catalog(std::future::ready(())).await;
        assert_eq!(catalog, Catalog::standard());
        assert_eq!(catalog.models.len(), 3);
    }
}
