//! Labeled Input Component
//!
//! Text input with label and per-field validation message.

use leptos::prelude::*;

#[component]
pub fn FieldInput(
    #[prop(into)] label: String,
    #[prop(into)] input_type: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label>{label}</label>
            <input
                type=input_type
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || error.get().map(|message| view! {
                <p class="field-error">{message}</p>
            })}
        </div>
    }
}
