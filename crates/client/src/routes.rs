//! Application routing configuration.

use dioxus::prelude::*;

use crate::views::{Chat, Home, Login, Register};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    // Redirects to chat or login
    #[route("/")]
    Home {},

    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},

    #[route("/chat")]
    Chat {},
}
