//! Frame shared by the login and registration pages.

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn AuthLayout(children: Element) -> Element {
    rsx! {
        div { class: "bg-[#FBF6EE] flex min-h-svh flex-col items-center justify-center p-6 md:p-10 relative overflow-hidden",
            div { class: "absolute inset-0 overflow-hidden pointer-events-none",
                div { class: "absolute -top-40 -right-40 w-80 h-80 rounded-full bg-[#8B3A1E]/5 blur-3xl" }
                div { class: "absolute -bottom-40 -left-40 w-80 h-80 rounded-full bg-[#E9DCC6]/10 blur-3xl" }
            }
            Link {
                class: "relative z-10 mb-8 font-serif text-3xl italic text-[#8B3A1E] hover:text-[#8B3A1E]/80 transition-colors",
                to: Route::Home {},
                "Lahwita"
            }
            div { class: "relative z-10 w-full max-w-sm flex flex-col gap-6", {children} }
        }
    }
}

#[component]
pub fn Disclaimer() -> Element {
    rsx! {
        p { class: "px-6 text-center text-sm text-[#2A1A12]/40",
            "By continuing, you agree to our Terms of Service and Privacy Policy."
        }
    }
}
