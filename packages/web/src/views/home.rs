use dioxus::prelude::*;
use ui::HomeView;

use crate::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        HomeView { register_href: Route::Register {}.to_string() }
    }
}
