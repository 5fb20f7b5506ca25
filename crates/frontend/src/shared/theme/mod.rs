//! Theme store.
//!
//! Holds the current [`Theme`] in a signal provided through context. Every
//! change is written to localStorage and applied to `<html>` (a `dark` class
//! plus a `data-theme` attribute) so stylesheet rules follow immediately.
//! On startup the stored value wins, then the system dark-mode preference,
//! then light.

mod theme_toggle;

pub use theme_toggle::ThemeToggle;

use crate::shared::config::use_config;
use contracts::enums::Theme;
use leptos::prelude::*;
use std::sync::Arc;
use web_sys::window;

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Stored theme name. Any storage failure reads as "absent".
fn load_theme_from_storage(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

fn save_theme_to_storage(key: &str, theme: Theme) {
    match local_storage() {
        Some(storage) => {
            if storage.set_item(key, theme.as_str()).is_err() {
                log::warn!("Failed to persist theme '{}'", theme);
            }
        }
        None => log::warn!("localStorage unavailable, theme '{}' not persisted", theme),
    }
}

/// One-shot read of `prefers-color-scheme: dark`.
fn system_prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn apply_theme(theme: Theme) {
    let root = match window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        Some(root) => root,
        None => return,
    };

    let _ = root.class_list().toggle_with_force("dark", theme.is_dark());
    let _ = root.set_attribute("data-theme", theme.as_str());
}

/// Writes a theme change out of the app: `(storage_key, theme)`.
pub type ThemeSink = Arc<dyn Fn(&str, Theme) + Send + Sync>;

/// Persist to localStorage and restyle `<html>`.
fn browser_sink() -> ThemeSink {
    Arc::new(|key, theme| {
        save_theme_to_storage(key, theme);
        apply_theme(theme);
    })
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
    storage_key: StoredValue<String>,
    sink: StoredValue<ThemeSink>,
}

impl ThemeContext {
    pub fn new(initial: Theme, storage_key: String, sink: ThemeSink) -> Self {
        Self {
            theme: RwSignal::new(initial),
            storage_key: StoredValue::new(storage_key),
            sink: StoredValue::new(sink),
        }
    }

    /// Reactive read of the current theme.
    pub fn theme(&self) -> Signal<Theme> {
        self.theme.into()
    }

    pub fn get_theme(&self) -> Theme {
        self.theme.get()
    }

    /// Set the theme, persist it and apply it to the document.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        let sink = self.sink.get_value();
        self.storage_key.with_value(|key| sink(key, theme));
        log::info!("Theme set to {}", theme);
    }

    pub fn toggle_theme(&self) {
        let next = self.theme.get_untracked().toggled();
        self.set_theme(next);
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let storage_key = use_config().ui.theme_storage_key;
    let stored = load_theme_from_storage(&storage_key);
    let initial_theme = Theme::resolve_initial(stored.as_deref(), system_prefers_dark());
    log::debug!(
        "Initial theme {} (stored: {:?})",
        initial_theme,
        stored.as_deref()
    );

    apply_theme(initial_theme);

    provide_context(ThemeContext::new(initial_theme, storage_key, browser_sink()));

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    type Writes = Arc<Mutex<Vec<(String, String)>>>;

    fn recording_context(initial: Theme, key: &str) -> (ThemeContext, Writes) {
        let writes = Arc::new(Mutex::new(Vec::new()));
        let log = writes.clone();
        let sink: ThemeSink = Arc::new(move |key, theme| {
            log.lock().unwrap().push((key.to_string(), theme.as_str().to_string()));
        });
        (ThemeContext::new(initial, key.to_string(), sink), writes)
    }

    #[test]
    fn test_toggle_persists_current_theme() {
        let (ctx, writes) = recording_context(Theme::Light, "theme");

        ctx.toggle_theme();
        let current = ctx.theme().get_untracked();
        assert_eq!(current, Theme::Dark);
        assert_eq!(
            writes.lock().unwrap().last().cloned(),
            Some(("theme".to_string(), current.as_str().to_string()))
        );

        ctx.toggle_theme();
        let current = ctx.theme().get_untracked();
        assert_eq!(current, Theme::Light);
        assert_eq!(
            writes.lock().unwrap().last().map(|(_, v)| v.clone()),
            Some(current.as_str().to_string())
        );
        assert_eq!(writes.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_set_theme_writes_under_storage_key() {
        let (ctx, writes) = recording_context(Theme::Light, "playground-theme");

        ctx.set_theme(Theme::Dark);
        assert_eq!(
            writes.lock().unwrap().as_slice(),
            &[("playground-theme".to_string(), "dark".to_string())]
        );
    }
}
