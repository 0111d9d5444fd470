//! # API crate: account registration client
//!
//! Everything the frontend needs to talk to the account service and to decide
//! whether a registration attempt is worth sending at all.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`] over `reqwest`, the [`RegisterRequest`] body, and the [`Registrar`] seam |
//! | [`error`] | [`ApiError`], whose `Display` is the message shown to the user |
//! | [`models`] | [`UserRecord`], the signed-in user as stored client-side |
//! | [`validation`] | Pure field validators returning an empty string when valid |

pub mod client;
pub mod error;
pub mod models;
pub mod validation;

pub use client::{ApiClient, RegisterRequest, Registrar};
pub use error::ApiError;
pub use models::UserRecord;
