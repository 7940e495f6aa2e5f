//! The chat page: greeting, transcript and composer for the signed-in user.

use chrono::Timelike;
use dioxus::prelude::*;
use lahwita_shared::{ConnectionStatus, Message};

use crate::auth_session::AuthContext;
use crate::chat::{use_chat, ChatHandle};
use crate::components::ui::{Button, ButtonVariant};
use crate::components::ProtectedRoute;
use crate::Route;

const DISCLAIMER: &str = "Disclaimer: This platform provides AI-generated information for general purposes only and does not constitute legal advice or create an attorney\u{2013}client relationship.";

/// Salutation for a local wall-clock hour (0..=23).
pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good morning",
        12..=16 => "Good afternoon",
        _ => "Good evening",
    }
}

#[component]
pub fn Chat() -> Element {
    rsx! {
        ProtectedRoute { ChatScreen {} }
    }
}

/// Mounted only once a session exists, so the socket is never dialed for a
/// signed-out visitor.
#[component]
fn ChatScreen() -> Element {
    let chat = use_chat();

    let messages = chat.messages();
    let status = chat.status();
    let waiting = chat.is_waiting();

    rsx! {
        div { class: "h-svh bg-[#FBF6EE] flex flex-col",
            ChatHeader { chat, status }
            div { class: "flex-1 overflow-y-auto",
                div { class: "max-w-3xl mx-auto px-4 py-8 flex flex-col gap-4",
                    if messages.is_empty() {
                        Greeting {}
                    }
                    for (i, message) in messages.into_iter().enumerate() {
                        MessageBubble { key: "{i}", message }
                    }
                    if waiting {
                        div { class: "self-start text-sm italic text-[#2A1A12]/50 animate-pulse",
                            "Thinking..."
                        }
                    }
                }
            }
            div { class: "px-4 pb-6",
                div { class: "max-w-3xl mx-auto flex flex-col gap-2",
                    Composer { chat, enabled: status.is_connected() }
                    p { class: "text-xs text-center text-[#2A1A12]/40", "{DISCLAIMER}" }
                }
            }
        }
    }
}

#[component]
fn Greeting() -> Element {
    let auth = use_context::<AuthContext>();
    let greeting = greeting_for_hour(chrono::Local::now().hour());
    let name = auth.display_name();

    rsx! {
        div { class: "flex-1 flex flex-col items-center justify-center py-24",
            h1 { class: "font-serif text-4xl text-[#2A1A12] text-center", "{greeting}, {name}" }
            p { class: "mt-3 text-[#2A1A12]/60", "How can I help you today?" }
        }
    }
}

#[component]
fn MessageBubble(message: Message) -> Element {
    let class = if message.is_user() {
        "self-end max-w-[80%] rounded-2xl px-4 py-2 bg-[#8B3A1E] text-[#FBF6EE] whitespace-pre-wrap"
    } else {
        "self-start max-w-[80%] rounded-2xl px-4 py-2 bg-[#E9DCC6]/60 text-[#2A1A12] whitespace-pre-wrap"
    };

    rsx! {
        div { class, "{message.content}" }
    }
}

#[component]
fn ChatHeader(chat: ChatHandle, status: ConnectionStatus) -> Element {
    let auth = use_context::<AuthContext>();
    let nav = use_navigator();
    let mut confirm_delete = use_signal(|| false);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let dot = match status {
        ConnectionStatus::Connected => "bg-green-600",
        ConnectionStatus::Connecting => "bg-amber-500",
        ConnectionStatus::Disconnected => "bg-[#2A1A12]/30",
        ConnectionStatus::Error => "bg-red-600",
    };

    rsx! {
        header { class: "h-14 px-4 flex items-center justify-between border-b border-[#E9DCC6]",
            div { class: "flex items-center gap-3",
                span { class: "font-serif text-2xl italic text-[#8B3A1E]", "Lahwita" }
                span { class: "flex items-center gap-1.5 text-xs text-[#2A1A12]/60",
                    span { class: "w-2 h-2 rounded-full {dot}" }
                    "{status.label()}"
                }
            }
            div { class: "flex items-center gap-2",
                if let Some(err) = error() {
                    span { class: "text-xs text-red-700", "{err}" }
                }
                Button {
                    variant: Some(ButtonVariant::Secondary),
                    onclick: move |_| {
                        let mut chat = chat;
                        chat.reset_chat();
                    },
                    "New chat"
                }
                Button {
                    variant: Some(ButtonVariant::Ghost),
                    disabled: Some(busy()),
                    onclick: move |_| async move {
                        busy.set(true);
                        let mut auth = auth;
                        auth.logout().await;
                        busy.set(false);
                        nav.push(Route::Login {});
                    },
                    "Sign out"
                }
                if confirm_delete() {
                    Button {
                        variant: Some(ButtonVariant::Ghost),
                        class: Some("text-red-700".to_string()),
                        disabled: Some(busy()),
                        onclick: move |_| async move {
                            busy.set(true);
                            error.set(None);
                            let mut auth = auth;
                            match auth.delete_account().await {
                                Ok(()) => {
                                    nav.push(Route::Login {});
                                }
                                Err(e) => {
                                    crate::log_error!("account deletion failed: {e}");
                                    error.set(Some("Could not delete account.".to_string()));
                                    confirm_delete.set(false);
                                }
                            }
                            busy.set(false);
                        },
                        "Confirm delete"
                    }
                    Button {
                        variant: Some(ButtonVariant::Ghost),
                        onclick: move |_| confirm_delete.set(false),
                        "Cancel"
                    }
                } else {
                    Button {
                        variant: Some(ButtonVariant::Ghost),
                        onclick: move |_| confirm_delete.set(true),
                        "Delete account"
                    }
                }
            }
        }
    }
}

#[component]
fn Composer(chat: ChatHandle, enabled: bool) -> Element {
    let mut text = use_signal(String::new);

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        let body = text.read().clone();
        if body.trim().is_empty() {
            return;
        }
        let mut chat = chat;
        chat.send_message(&body);
        text.set(String::new());
    };

    rsx! {
        form { onsubmit, class: "relative",
            div { class: "flex items-center bg-white rounded-2xl border border-[#E9DCC6] shadow-sm",
                input {
                    class: "flex-1 bg-transparent text-[#2A1A12] placeholder-[#2A1A12]/40 py-3 px-4 outline-none",
                    r#type: "text",
                    placeholder: if enabled { "Ask a question..." } else { "Connecting..." },
                    value: "{text}",
                    disabled: !enabled,
                    oninput: move |e: FormEvent| text.set(e.value()),
                }
                Button {
                    r#type: Some("submit".to_string()),
                    variant: Some(ButtonVariant::Icon),
                    class: Some("mr-2".to_string()),
                    title: Some("Send".to_string()),
                    disabled: Some(!enabled),
                    svg {
                        class: "w-5 h-5",
                        fill: "none",
                        stroke: "currentColor",
                        view_box: "0 0 24 24",
                        path {
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            stroke_width: "2",
                            d: "M12 19l9 2-9-18-9 18 9-2zm0 0v-8",
                        }
                    }
                }
            }
        }
    }
}
