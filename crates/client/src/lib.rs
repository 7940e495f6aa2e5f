//! Lahwita client: a Dioxus web/desktop app for the legal assistant chat.
//!
//! Account management goes over the HTTP API ([`ApiClient`]); the
//! conversation itself runs over a single WebSocket managed by [`chat`].

#[macro_use]
pub mod logging;

pub mod api_client;
pub mod auth_session;
pub mod chat;
pub mod components;
pub mod config;
pub mod routes;
pub mod storage;
pub mod views;

pub use api_client::ApiClient;
pub use auth_session::{AuthContext, AuthProvider};
pub use chat::{use_chat, ChatHandle};
pub use routes::Route;
