//! Root switch between the loading skeleton and the live playground.

use crate::domain::a001_model::use_catalog;
use crate::layout::skeleton::LoadingSkeleton;
use crate::layout::Shell;
use leptos::prelude::*;

/// Shows [`LoadingSkeleton`] while the catalog is loading and [`Shell`]
/// afterwards. Nothing else gates the UI.
#[component]
pub fn AppShell() -> impl IntoView {
    let is_loading = use_catalog().is_loading();

    view! {
        <Show
            when=move || !is_loading.get()
            fallback=|| view! { <LoadingSkeleton /> }
        >
            <Shell />
        </Show>
    }
}
