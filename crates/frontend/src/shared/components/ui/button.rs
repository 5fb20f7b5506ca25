use leptos::prelude::*;

fn variant_class(variant: Option<&str>) -> &'static str {
    match variant {
        Some("icon") => "button--icon",
        _ => "button--primary",
    }
}

/// Button component with a filled (`primary`) and a bare `icon` variant
#[component]
pub fn Button(
    /// Button variant: "primary" (default) or "icon"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Tooltip, also used as the accessible label for icon-only buttons
    #[prop(optional, into)]
    title: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant_css = move || variant_class(variant.get().as_deref());

    let additional_class = move || class.get().unwrap_or_default();
    let label = move || title.get().unwrap_or_default();

    view! {
        <button
            type="button"
            class=move || format!("button {} {}", variant_css(), additional_class())
            title=label
            aria-label=label
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
