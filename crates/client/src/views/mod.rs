//! View components for the application.

pub mod auth_layout;
pub mod chat;
pub mod home;
pub mod login;
pub mod register;

pub use chat::Chat;
pub use home::Home;
pub use login::Login;
pub use register::Register;
