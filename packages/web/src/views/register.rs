//! Registration page view.

use dioxus::prelude::*;
use ui::RegisterView;

use crate::Route;

/// Register page component. A found session sends the user home.
#[component]
pub fn Register() -> Element {
    let nav = use_navigator();

    rsx! {
        RegisterView {
            on_session: move |_| {
                nav.push(Route::Home {});
            },
        }
    }
}
