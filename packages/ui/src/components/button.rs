use dioxus::prelude::*;

/// Submit button for the auth forms. Disabled unless `valid` is true.
#[component]
pub fn AuthButton(title: String, valid: bool) -> Element {
    rsx! {
        button {
            class: "Auth-button",
            r#type: "submit",
            disabled: !valid,
            "{title}"
        }
    }
}
