use leptos::prelude::*;

/// Parse the `value` of a range input. Empty or non-numeric text yields
/// `None` so the bound value is left alone.
pub fn parse_slider_value(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Labelled `<input type="range">` with the current value shown beside the
/// label. Every input event is forwarded immediately.
#[component]
pub fn RangeSlider(
    /// Label text
    #[prop(into)]
    label: String,
    /// ID for the input element
    #[prop(into)]
    id: String,
    /// Current value
    #[prop(into)]
    value: Signal<f64>,
    min: f64,
    max: f64,
    step: f64,
    /// Formats the value shown next to the label
    #[prop(optional)]
    format: Option<fn(f64) -> String>,
    /// Input event handler
    on_input: Callback<f64>,
) -> impl IntoView {
    let display = move || {
        let v = value.get();
        match format {
            Some(f) => f(v),
            None => v.to_string(),
        }
    };
    let label_for = id.clone();

    view! {
        <div class="form__group range-slider">
            <label class="form__label range-slider__label" for=label_for>
                <span>{label}</span>
                <span class="range-slider__value">{display}</span>
            </label>
            <input
                id=id
                class="range-slider__input"
                type="range"
                min=min.to_string()
                max=max.to_string()
                step=step.to_string()
                prop:value=move || value.get().to_string()
                on:input=move |ev| {
                    if let Some(v) = parse_slider_value(&event_target_value(&ev)) {
                        on_input.run(v);
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slider_value() {
        assert_eq!(parse_slider_value("0.7"), Some(0.7));
        assert_eq!(parse_slider_value("2048"), Some(2048.0));
        assert_eq!(parse_slider_value(" 1 "), Some(1.0));
    }

    #[test]
    fn test_parse_slider_value_rejects_garbage() {
        assert_eq!(parse_slider_value(""), None);
        assert_eq!(parse_slider_value("abc"), None);
        assert_eq!(parse_slider_value("NaN"), None);
        assert_eq!(parse_slider_value("inf"), None);
    }
}
