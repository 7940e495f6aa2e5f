//! Chat hook for Dioxus components.

use dioxus::prelude::*;
use futures_util::StreamExt;
use lahwita_shared::{ChatSession, ClientConfig, ConnectionStatus, Message};

use super::connection::{event_channel, SocketConnector};

/// Reactive handle to the chat session owned by the calling component.
///
/// Reads subscribe the component, so it re-renders on every status change,
/// message and waiting-flag flip.
#[derive(Clone, Copy, PartialEq)]
pub struct ChatHandle {
    session: Signal<ChatSession<SocketConnector>>,
}

impl ChatHandle {
    pub fn messages(&self) -> Vec<Message> {
        self.session.read().snapshot()
    }

    pub fn status(&self) -> ConnectionStatus {
        self.session.read().status()
    }

    pub fn is_waiting(&self) -> bool {
        self.session.read().is_waiting()
    }

    pub fn send_message(&mut self, content: &str) {
        self.session.write().send_message(content);
    }

    pub fn reset_chat(&mut self) {
        self.session.write().reset_chat();
    }
}

/// Open a chat session for the lifetime of the calling component.
///
/// Expects a [`ClientConfig`] in context. The socket is dialed on mount and
/// closed on unmount.
pub fn use_chat() -> ChatHandle {
    let config = use_context::<ClientConfig>();

    let session = use_hook(move || {
        let (events, mut receiver) = event_channel();
        let connector = SocketConnector::new(events, config.reconnect.clone());
        let mut session = Signal::new(ChatSession::new(connector, config.ws_url.clone()));

        // Single consumer: every transport callback is applied here, in order.
        spawn(async move {
            while let Some((generation, event)) = receiver.next().await {
                session.write().handle_event(generation, event);
            }
        });

        session.write().start();
        session
    });

    use_drop(move || {
        let mut session = session;
        if let Ok(mut s) = session.try_write() {
            s.shutdown();
        };
    });

    ChatHandle { session }
}
