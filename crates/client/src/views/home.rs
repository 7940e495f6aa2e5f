//! Landing route.

use dioxus::prelude::*;

use crate::auth_session::AuthContext;
use crate::Route;

/// Sends the visitor to the chat or to the login page once the stored
/// session has been read.
#[component]
pub fn Home() -> Element {
    let auth = use_context::<AuthContext>();
    let nav = use_navigator();

    use_effect(move || {
        if *auth.is_loading.read() {
            return;
        }
        if auth.session.read().is_some() {
            nav.replace(Route::Chat {});
        } else {
            nav.replace(Route::Login {});
        }
    });

    rsx! {
        div { class: "flex items-center justify-center min-h-svh bg-[#FBF6EE] text-[#2A1A12]/60",
            "Redirecting..."
        }
    }
}
