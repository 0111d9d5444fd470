use dioxus::prelude::*;

use crate::Icon;
use crate::icons::{FaCircleExclamation, FaXmark};

/// Outlined error alert with a close button.
#[component]
pub fn ErrorAlert(message: String, ondismiss: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "Auth-authErrMsg",
            role: "alert",
            Icon { icon: FaCircleExclamation, width: 16, height: 16 }
            span { class: "Auth-authErrMsg__text", "{message}" }
            button {
                class: "Auth-authErrMsg__close",
                r#type: "button",
                title: "Dismiss",
                onclick: move |_| ondismiss.call(()),
                Icon { icon: FaXmark, width: 14, height: 14 }
            }
        }
    }
}
