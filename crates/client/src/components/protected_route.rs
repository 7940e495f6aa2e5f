use dioxus::prelude::*;

use crate::auth_session::AuthContext;
use crate::Route;

/// Renders its children only for a signed-in user.
///
/// Shows a loading screen while the stored session is being restored and
/// sends everyone else to the login page.
#[component]
pub fn ProtectedRoute(children: Element) -> Element {
    let auth = use_context::<AuthContext>();
    let nav = use_navigator();

    use_effect(move || {
        if !*auth.is_loading.read() && auth.session.read().is_none() {
            nav.push(Route::Login {});
        }
    });

    if *auth.is_loading.read() {
        return rsx! {
            div { class: "h-svh bg-[#FBF6EE] flex items-center justify-center",
                div { class: "text-[#2A1A12]/60", "Loading..." }
            }
        };
    }

    if !auth.is_authenticated() {
        return rsx! {};
    }

    children
}
