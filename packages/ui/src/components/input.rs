use dioxus::prelude::*;

/// Labelled text input with an optional guidance line.
///
/// The hint stays hidden until the user has typed something, so an untouched
/// form is not covered in "required" messages.
#[component]
pub fn AuthInput(
    title: String,
    value: String,
    oninput: EventHandler<FormEvent>,
    #[props(default = "text".to_string())] input_type: String,
    /// Validator message for the current value; empty when valid.
    #[props(default)]
    hint: String,
) -> Element {
    let id = format!("auth-{}", title.replace(' ', "-"));
    let show_hint = !value.is_empty() && !hint.is_empty();
    let input_class = if show_hint {
        "Auth-input Auth-input--invalid"
    } else {
        "Auth-input"
    };

    rsx! {
        div {
            class: "Auth-field",
            label {
                class: "Auth-label",
                r#for: "{id}",
                "{title}"
            }
            input {
                id: "{id}",
                class: "{input_class}",
                r#type: "{input_type}",
                placeholder: "{title}",
                value: "{value}",
                oninput: move |evt| oninput.call(evt),
            }
            if show_hint {
                p { class: "Auth-hint", "{hint}" }
            }
        }
    }
}
