//! Authentication context and hooks for the UI.

use api::ApiClient;
use dioxus::prelude::*;
use store::{platform_sessions, ClientConfig, PlatformStorage, RemoteAuthState, Sessions};

/// Long-lived collaborators shared by every auth view.
#[derive(Clone)]
pub struct Services {
    pub config: ClientConfig,
    pub api: ApiClient,
    pub sessions: Sessions<PlatformStorage>,
}

impl Services {
    pub fn new(config: ClientConfig) -> Self {
        let api = ApiClient::new(config.api.base_url.clone());
        let sessions = platform_sessions(&config.session.key);
        Self {
            config,
            api,
            sessions,
        }
    }
}

/// Get the registration status held by the shared store.
/// Returns a signal that updates as registration actions are dispatched.
pub fn use_auth() -> Signal<RemoteAuthState> {
    use_context::<Signal<RemoteAuthState>>()
}

/// Get the shared API client and session stores.
pub fn use_services() -> Services {
    use_context::<Services>()
}

/// Provider component that owns the auth store.
/// Wrap your app with this component to enable the auth views.
#[component]
pub fn AuthProvider(config: ClientConfig, children: Element) -> Element {
    let auth_state = use_signal(RemoteAuthState::default);

    use_context_provider(|| auth_state);
    use_context_provider(|| Services::new(config));

    rsx! {
        {children}
    }
}

/// Button to sign the current user out of both session scopes.
#[component]
pub fn SignOutButton(
    #[props(default = "Sign out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_signed_out: EventHandler<()>,
) -> Element {
    let mut auth_state = use_auth();
    let services = use_services();

    let onclick = move |_| {
        services.sessions.forget();
        auth_state.set(RemoteAuthState::default());
        tracing::info!("Signed out");
        on_signed_out.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
