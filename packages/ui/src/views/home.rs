use api::UserRecord;
use dioxus::prelude::*;

use super::AUTH_CSS;
use crate::{use_auth, use_services, SignOutButton};

/// Landing view: greets the stored user, or points at registration.
#[component]
pub fn HomeView(register_href: String) -> Element {
    let auth = use_auth();
    let services = use_services();
    let mut user = use_signal(|| Option::<UserRecord>::None);

    // Re-read storage whenever the store's user changes (e.g. after sign-out).
    use_effect(move || {
        let _ = auth.read().user_info.clone();
        match services.sessions.resync() {
            Ok(found) => user.set(found),
            Err(e) => {
                tracing::warn!("Ignoring stored session: {}", e);
                user.set(None);
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: AUTH_CSS }

        div {
            class: "Auth-screen",
            div {
                class: "Auth-container",
                match user() {
                    Some(u) => rsx! {
                        h1 { class: "Auth-title", "Welcome, {u.display_name()}" }
                        SignOutButton {
                            class: "Auth-button",
                            on_signed_out: move |_| user.set(None),
                        }
                    },
                    None => rsx! {
                        h1 { class: "Auth-title", "Welcome" }
                        a { class: "Auth-accountMsg", href: "{register_href}", "Create an account" }
                    },
                }
            }
        }
    }
}
