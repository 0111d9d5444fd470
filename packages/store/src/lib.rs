pub mod config;
pub mod register_form;
pub mod session;
pub mod user;

mod memory;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod browser;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use browser::BrowserStorage;

pub use config::ClientConfig;
pub use register_form::{AlertMessage, RegistrationForm, SubmitStep};
pub use session::{SessionError, SessionScope, SessionStorage, Sessions};
pub use user::{register_user, RemoteAuthState, UserAction};

/// Storage backend for the current platform: Web Storage in the browser,
/// process memory everywhere else.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStorage = BrowserStorage;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStorage = MemoryStorage;

/// Session pair backed by [`PlatformStorage`], using `key` in both scopes.
pub fn platform_sessions(key: &str) -> Sessions<PlatformStorage> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Sessions::with_key(BrowserStorage::local(), BrowserStorage::session(), key)
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        Sessions::with_key(MemoryStorage::new(), MemoryStorage::new(), key)
    }
}
