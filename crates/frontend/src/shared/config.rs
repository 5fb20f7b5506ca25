//! Runtime configuration.
//!
//! Defaults are embedded in `contracts`. A page may override any field with
//! an inline TOML block:
//!
//! ```html
//! <script type="application/toml" id="playground-config">
//! [simulation]
//! reply_latency_ms = 500
//! </script>
//! ```

use contracts::shared::config::{load_config, Config};
use leptos::prelude::*;

const CONFIG_ELEMENT_ID: &str = "playground-config";

fn read_config_override() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}

/// Read the configuration once at startup. An invalid override is logged
/// and the defaults are used instead.
pub fn init_config() -> Config {
    let overrides = read_config_override();
    match load_config(overrides.as_deref()) {
        Ok(config) => {
            if overrides.is_some() {
                log::info!("Loaded configuration override from #{}", CONFIG_ELEMENT_ID);
            }
            config
        }
        Err(e) => {
            log::error!("Invalid configuration override, using defaults: {}", e);
            Config::default()
        }
    }
}

pub fn use_config() -> Config {
    use_context::<Config>().unwrap_or_default()
}
