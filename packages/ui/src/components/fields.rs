use dioxus::prelude::*;

/// Labelled single-line input with an inline error.
#[component]
pub fn TextField(
    id: String,
    label: String,
    value: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] placeholder: String,
    #[props(default)] error: Option<String>,
    #[props(default)] disabled: bool,
    #[props(default)] required: bool,
    oninput: EventHandler<String>,
) -> Element {
    let class = if error.is_some() { "input input-invalid" } else { "input" };
    rsx! {
        div {
            class: "field",
            label { r#for: "{id}", "{label}" if required { span { class: "required", " *" } } }
            input {
                id: "{id}",
                class,
                r#type: "{input_type}",
                placeholder: "{placeholder}",
                value: "{value}",
                disabled,
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
            if let Some(error) = &error {
                p { class: "field-error", role: "alert", "{error}" }
            }
        }
    }
}

/// Labelled textarea with a character counter.
#[component]
pub fn TextAreaField(
    id: String,
    label: String,
    value: String,
    #[props(default)] max_chars: Option<usize>,
    #[props(default = 8)] rows: u32,
    #[props(default)] placeholder: String,
    #[props(default)] error: Option<String>,
    #[props(default)] disabled: bool,
    #[props(default)] required: bool,
    oninput: EventHandler<String>,
) -> Element {
    let class = if error.is_some() { "input input-invalid" } else { "input" };
    let count = value.chars().count();
    rsx! {
        div {
            class: "field",
            label { r#for: "{id}", "{label}" if required { span { class: "required", " *" } } }
            textarea {
                id: "{id}",
                class,
                rows: "{rows}",
                placeholder: "{placeholder}",
                value: "{value}",
                disabled,
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
            div {
                class: "field-footer",
                if let Some(error) = &error {
                    p { class: "field-error", role: "alert", "{error}" }
                }
                if let Some(max) = max_chars {
                    span {
                        class: if count > max { "counter counter-over" } else { "counter" },
                        "{count} / {max}"
                    }
                }
            }
        }
    }
}
