//! Realtime chat for Dioxus components.
//!
//! The connection state machine lives in [`lahwita_shared::ChatSession`];
//! this module supplies the platform sockets it dials and the hook that
//! binds a session to a component.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │          Chat view  (use_chat)               │
//! │   reads messages/status, calls send/reset    │
//! └──────────────────────────────────────────────┘
//!                        │ Signal<ChatSession>
//!                        ▼
//! ┌──────────────────────────────────────────────┐
//! │                 ChatSession                  │◀──────────┐
//! └──────────────────────────────────────────────┘           │
//!                        │ Connector::open                   │ (generation, event)
//!                        ▼                                   │
//! ┌──────────────────────────────────────────────┐   ┌───────────────┐
//! │  SocketTransport  (web-sys / tungstenite)    │──▶│ event channel │
//! └──────────────────────────────────────────────┘   └───────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! fn Conversation() -> Element {
//!     let mut chat = use_chat();
//!     rsx! {
//!         for msg in chat.messages() {
//!             div { "{msg.content}" }
//!         }
//!         button { onclick: move |_| chat.send_message("Hello"), "Send" }
//!     }
//! }
//! ```

mod connection;
mod hooks;

pub use connection::{event_channel, EventReceiver, EventSender, SocketConnector, SocketTransport};
pub use hooks::{use_chat, ChatHandle};
