//! Model catalog store.
//!
//! Starts in the loading state; [`CatalogStore::load`] resolves the static
//! catalog after the configured delay and clears `is_loading`. The root
//! shows a skeleton until then.

use contracts::domain::a001_model::{load_catalog, Catalog, Model};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

#[derive(Clone, Copy)]
pub struct CatalogStore {
    catalog: RwSignal<Catalog>,
    is_loading: RwSignal<bool>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            catalog: RwSignal::new(Catalog::default()),
            is_loading: RwSignal::new(true),
        }
    }

    /// Kick off the one-time load. Called once by the root component.
    pub fn load(&self, latency_ms: u32) {
        log::info!("Loading model catalog ({} ms)", latency_ms);
        spawn_local(self.load_after(TimeoutFuture::new(latency_ms)));
    }

    /// Resolve the catalog once `latency` completes and leave the loading state.
    pub async fn load_after<F>(self, latency: F)
    where
        F: Future<Output = ()>,
    {
        let catalog = load_catalog(latency).await;
        log::info!(
            "Catalog loaded: {} models, {} templates",
            catalog.models.len(),
            catalog.templates.len()
        );
        self.catalog.set(catalog);
        self.is_loading.set(false);
    }

    pub fn is_loading(&self) -> Signal<bool> {
        self.is_loading.into()
    }

    pub fn models(&self) -> Signal<Vec<Model>> {
        let catalog = self.catalog;
        Signal::derive(move || catalog.with(|c| c.models.clone()))
    }

    pub fn templates(&self) -> Signal<Vec<String>> {
        let catalog = self.catalog;
        Signal::derive(move || catalog.with(|c| c.templates.clone()))
    }

    /// Snapshot without subscribing.
    pub fn catalog_untracked(&self) -> Catalog {
        self.catalog.get_untracked()
    }

    pub fn find_model(&self, id: &str) -> Option<Model> {
        self.catalog.with(|c| c.find_model(id).cloned())
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_catalog() -> CatalogStore {
    use_context::<CatalogStore>().expect("CatalogStore not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::ready;

    #[tokio::test]
    async fn test_load_after_clears_loading() {
        let store = CatalogStore::new();
        assert!(store.is_loading().get_untracked());
        assert!(store.find_model("gpt-4-turbo").is_none());

        store.load_after(ready(())).await;

        assert!(!store.is_loading().get_untracked());
        assert_eq!(store.models().get_untracked().len(), 3);
        assert_eq!(store.templates().get_untracked().len(), 4);
        assert_eq!(store.find_model("claude-3-opus").unwrap().provider, "Anthropic");
    }
}
