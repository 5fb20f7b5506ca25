use leptos::prelude::*;

/// Ephemeral layout state. Not part of the session and never persisted.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub settings_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            settings_open: RwSignal::new(false),
        }
    }

    pub fn toggle_settings(&self) {
        self.settings_open.update(|open| *open = !*open);
    }

    pub fn close_settings(&self) {
        if self.settings_open.get_untracked() {
            self.settings_open.set(false);
        }
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_drawer_toggle() {
        let ctx = AppGlobalContext::new();
        assert!(!ctx.settings_open.get_untracked());
        ctx.toggle_settings();
        assert!(ctx.settings_open.get_untracked());
        ctx.close_settings();
        assert!(!ctx.settings_open.get_untracked());
        ctx.close_settings();
        assert!(!ctx.settings_open.get_untracked());
    }
}
