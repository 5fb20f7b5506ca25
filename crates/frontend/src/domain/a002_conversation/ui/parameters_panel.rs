use crate::domain::a002_conversation::use_conversation;
use crate::shared::components::ui::RangeSlider;
use contracts::domain::a002_conversation::parameters::{
    MAX_TOKENS_MAX, MAX_TOKENS_MIN, MAX_TOKENS_STEP, TEMPERATURE_MAX, TEMPERATURE_MIN,
    TEMPERATURE_STEP,
};
use leptos::prelude::*;

fn format_temperature(v: f64) -> String {
    format!("{:.1}", v)
}

fn format_tokens(v: f64) -> String {
    format!("{}", v.round() as u32)
}

/// Temperature and max-token sliders. Each input event writes straight
/// into the store, which clamps to the allowed range.
#[component]
pub fn ParametersPanel() -> impl IntoView {
    let store = use_conversation();
    let temperature = store.temperature();
    let max_tokens = store.max_tokens();

    view! {
        <div class="parameters-panel">
            <RangeSlider
                label="Temperature"
                id="temperature-slider"
                value=temperature
                min=TEMPERATURE_MIN
                max=TEMPERATURE_MAX
                step=TEMPERATURE_STEP
                format=format_temperature
                on_input=Callback::new(move |v: f64| store.set_temperature(v))
            />
            <RangeSlider
                label="Max tokens"
                id="max-tokens-slider"
                value=Signal::derive(move || max_tokens.get() as f64)
                min=MAX_TOKENS_MIN as f64
                max=MAX_TOKENS_MAX as f64
                step=MAX_TOKENS_STEP as f64
                format=format_tokens
                on_input=Callback::new(move |v: f64| store.set_max_tokens(v.round() as u32))
            />
        </div>
    }
}
