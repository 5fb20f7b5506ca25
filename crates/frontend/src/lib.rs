pub mod app;
pub mod app_shell;
pub mod domain;
pub mod layout;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

/// Wasm entry point: logging and panic hook first, then mount the app.
#[wasm_bindgen(start)]
pub fn start() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    log::info!("Model playground starting");
    leptos::mount::mount_to_body(app::App);
}
