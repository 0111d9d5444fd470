//! Registration screen: email, password and confirmation.

use api::UserRecord;
use dioxus::prelude::*;
use store::{register_user, AlertMessage, RegistrationForm, SubmitStep, UserAction};

use super::{AUTH_CSS, LOGO};
use crate::components::{AuthButton, AuthInput, ErrorAlert, Spinner};
use crate::{use_auth, use_services};

/// Shared registration view.
///
/// The platform package decides where a signed-in user goes: `on_session`
/// fires whenever a stored session is found, including right after a
/// successful registration.
#[component]
pub fn RegisterView(on_session: EventHandler<UserRecord>) -> Element {
    let mut auth = use_auth();
    let services = use_services();
    let mut fields = use_signal(RegistrationForm::new);
    let mut current_user = use_signal(|| Option::<UserRecord>::None);

    // Anything that could mean a session was just written: a registration
    // result, a remote error transition, or a local error transition.
    let watched = use_memo(move || {
        let remote = auth.read();
        (
            remote.user_info.clone(),
            remote.error.clone(),
            fields.read().local_error().map(str::to_string),
        )
    });

    let sessions = services.sessions.clone();
    use_effect(move || {
        let _ = watched.read();
        match sessions.resync() {
            Ok(Some(user)) => {
                tracing::debug!("Existing session for {}", user.email);
                current_user.set(Some(user.clone()));
                on_session.call(user);
            }
            Ok(None) => {}
            Err(e) => tracing::warn!("Ignoring stored session: {}", e),
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let step = fields.write().begin_submit(&auth.read());
        let request = match step {
            SubmitStep::Dispatch(request) => request,
            SubmitStep::Blocked(msg) => {
                tracing::debug!("Registration blocked: {}", msg);
                return;
            }
            SubmitStep::Busy => return,
        };

        let services = services.clone();
        spawn(async move {
            register_user(&services.api, &services.sessions, request, move |action| {
                auth.write().reduce(action)
            })
            .await;

            let adopted = fields.write().finish_submit(&auth.read());
            if let Some(user) = adopted {
                current_user.set(Some(user));
            }
        });
    };

    let dismiss_alert = move |_: ()| {
        let shown = fields.read().alert(&auth.read());
        match shown {
            Some(AlertMessage::Remote(_)) => auth.write().reduce(UserAction::ClearError),
            _ => fields.write().dismiss_alert(),
        }
    };

    let state = fields();
    let alert = state.alert(&auth.read());

    rsx! {
        document::Link { rel: "stylesheet", href: AUTH_CSS }

        div {
            class: "Auth-screen",
            div {
                class: "Auth-container",

                if let Some(alert) = alert {
                    ErrorAlert {
                        message: alert.text().to_string(),
                        ondismiss: dismiss_alert,
                    }
                }

                if auth().loading {
                    Spinner {}
                } else {
                    form {
                        class: "Auth-authForm",
                        novalidate: true,
                        onsubmit: handle_submit,

                        img { class: "Auth-logo", src: LOGO, alt: "Logo" }
                        h1 { class: "Auth-title", "Create Account" }

                        if let Some(user) = current_user() {
                            p { class: "Auth-signedIn", "Signed in as {user.display_name()}" }
                        }

                        AuthInput {
                            title: "email",
                            input_type: "email",
                            value: state.email().to_string(),
                            hint: state.email_hint(),
                            oninput: move |evt: FormEvent| fields.write().set_email(evt.value()),
                        }

                        AuthInput {
                            title: "password",
                            input_type: "password",
                            value: state.password().to_string(),
                            hint: state.password_hint(),
                            oninput: move |evt: FormEvent| fields.write().set_password(evt.value()),
                        }

                        AuthInput {
                            title: "confirm password",
                            input_type: "password",
                            value: state.password_confirmation().to_string(),
                            hint: state.confirmation_hint(),
                            oninput: move |evt: FormEvent| fields.write().set_password_confirmation(evt.value()),
                        }

                        AuthButton { title: "REGISTER", valid: state.is_valid() }

                        a {
                            class: "Auth-accountMsg",
                            href: "/login",
                            "Already have an account ? "
                            u { "Sign In" }
                        }
                    }
                }
            }
        }
    }
}
