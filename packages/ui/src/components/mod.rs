//! Presentational widgets for the auth screens.

mod alert;
pub use alert::ErrorAlert;

mod button;
pub use button::AuthButton;

mod input;
pub use input::AuthInput;

mod spinner;
pub use spinner::Spinner;
