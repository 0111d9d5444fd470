use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use store::ClientConfig;
use ui::AuthProvider;
use views::{Home, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/register")]
    Register {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Bundled client configuration, see [`ClientConfig`].
const CLIENT_TOML: &str = include_str!("../client.toml");

const LOG_LEVEL: Level = Level::INFO;

fn main() {
    if let Err(e) = dioxus::logger::init(LOG_LEVEL) {
        eprintln!("Failed to initialize logging: {e}");
    }
    dioxus::launch(App);
}

fn load_config() -> ClientConfig {
    match ClientConfig::from_toml(CLIENT_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Invalid {}, using defaults: {}", ClientConfig::filename(), e);
            ClientConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            config,
            Router::<Route> {}
        }
    }
}
