use leptos::prelude::*;
use thaw::*;

/// Placeholder shown while the catalog loads.
#[component]
pub fn LoadingSkeleton() -> impl IntoView {
    view! {
        <div class="app-skeleton" aria-busy="true">
            <div class="skeleton skeleton--header"></div>
            <div class="app-skeleton__body">
                <div class="skeleton skeleton--sidebar"></div>
                <div class="app-skeleton__main">
                    <Flex align=FlexAlign::Center justify=FlexJustify::Center style="flex: 1; gap: 12px;">
                        <Spinner />
                        <span>"Loading models..."</span>
                    </Flex>
                    <div class="skeleton skeleton--input"></div>
                </div>
            </div>
        </div>
    }
}
