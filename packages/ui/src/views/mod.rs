use dioxus::prelude::*;

const AUTH_CSS: Asset = asset!("/src/views/auth.css");
const LOGO: Asset = asset!("/assets/logo.svg");

mod home;
pub use home::HomeView;

mod register;
pub use register::RegisterView;
