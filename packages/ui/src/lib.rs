//! This crate contains all shared UI for the workspace.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;
pub use views::{HomeView, RegisterView};

mod auth;
pub use auth::{use_auth, use_services, AuthProvider, Services, SignOutButton};
