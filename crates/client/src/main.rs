//! Lahwita client entry point. Runs in the browser (WASM) or as a desktop app.

#![allow(non_snake_case)]

use dioxus::prelude::*;
use lahwita_client::{auth_session::AuthProvider, config, logging, routes::Route};

fn main() {
    logging::init();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(config::load);
    use_hook(|| config::describe(&config));

    rsx! {
        document::Title { "Lahwita" }

        AuthProvider {
            Router::<Route> {}
        }
    }
}
