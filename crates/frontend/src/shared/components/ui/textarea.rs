use leptos::prelude::*;

/// Textarea component with label and validation error support
#[component]
pub fn Textarea(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Textarea value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Disabled state
    #[prop(optional)]
    disabled: bool,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
    /// Validation error shown under the field (reactive)
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// Help text shown under the field when there is no error
    #[prop(optional, into)]
    help: MaybeProp<String>,
    /// ID for the textarea element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let textarea_id = move || id.get().unwrap_or_default();
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();
    let textarea_rows = rows.unwrap_or(3);
    let has_error = move || error.get().map(|e| !e.is_empty()).unwrap_or(false);
    let textarea_class = move || {
        if has_error() {
            format!("form__textarea form__textarea--invalid {}", additional_class())
        } else {
            format!("form__textarea {}", additional_class())
        }
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=textarea_id>
                    {l}
                    {required.then(|| view! { <span class="form__required">"*"</span> })}
                </label>
            })}
            <textarea
                id=textarea_id
                class=textarea_class
                placeholder=textarea_placeholder
                disabled=disabled
                required=required
                rows=textarea_rows
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                {move || value.get()}
            </textarea>
            {move || error.get().filter(|e| !e.is_empty()).map(|e| view! {
                <div class="form__error">{e}</div>
            })}
            {move || {
                if has_error() {
                    None
                } else {
                    help.get().filter(|h| !h.is_empty()).map(|h| view! {
                        <div class="form__help">{h}</div>
                    })
                }
            }}
        </div>
    }
}
