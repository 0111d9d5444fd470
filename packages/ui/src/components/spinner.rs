use dioxus::prelude::*;

#[component]
pub fn Spinner() -> Element {
    rsx! {
        div {
            class: "Auth-spinner",
            role: "status",
            aria_label: "Loading",
            div { class: "Auth-spinner__ring" }
        }
    }
}
