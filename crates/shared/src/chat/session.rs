//! The chat connection state machine.

use super::transport::{ConnectRequest, Connector, Generation, Transport, TransportEvent};
use crate::models::{ConnectionStatus, Message};
use crate::protocol::{InboundFrame, OutboundFrame};
use crate::store::MessageStore;

struct Held<T> {
    generation: Generation,
    transport: T,
    opened: bool,
}

/// One conversation over one (replaceable) socket.
///
/// All methods run on the caller's thread and return immediately; replies
/// arrive later through [`ChatSession::handle_event`].
pub struct ChatSession<C: Connector> {
    connector: C,
    url: String,
    held: Option<Held<C::Transport>>,
    last_generation: u64,
    status: ConnectionStatus,
    chat_id: Option<String>,
    messages: MessageStore,
    waiting: bool,
    reconnect_armed: bool,
    failed_attempts: u32,
    shut_down: bool,
}

impl<C: Connector> ChatSession<C> {
    pub fn new(connector: C, url: impl Into<String>) -> Self {
        Self {
            connector,
            url: url.into(),
            held: None,
            last_generation: 0,
            status: ConnectionStatus::Disconnected,
            chat_id: None,
            messages: MessageStore::new(),
            waiting: false,
            reconnect_armed: false,
            failed_attempts: 0,
            shut_down: false,
        }
    }

    /// Kick off the first connection. The store starts empty, so the
    /// reconnect policy dials right away.
    pub fn start(&mut self) {
        self.apply_reconnect_policy();
    }

    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    pub fn chat_id(&self) -> Option<&str> {
        self.chat_id.as_deref()
    }

    pub fn messages(&self) -> &[Message] {
        self.messages.as_slice()
    }

    pub fn snapshot(&self) -> Vec<Message> {
        self.messages.snapshot()
    }

    pub fn is_waiting(&self) -> bool {
        self.waiting
    }

    /// Generation of the transport currently held, if any.
    pub fn current_generation(&self) -> Option<Generation> {
        self.held.as_ref().map(|h| h.generation)
    }

    /// Apply one transport callback. Events from a transport that is no
    /// longer held are ignored.
    pub fn handle_event(&mut self, generation: Generation, event: TransportEvent) {
        if self.shut_down {
            return;
        }
        let Some(held) = self.held.as_mut().filter(|h| h.generation == generation) else {
            tracing::debug!("ignoring {event:?} from stale transport {generation}");
            return;
        };

        match event {
            TransportEvent::Opened => {
                held.opened = true;
                self.failed_attempts = 0;
                self.status = ConnectionStatus::Connected;
                tracing::info!("chat socket {generation} connected");
            }
            TransportEvent::Message(text) => self.handle_frame(&text),
            TransportEvent::Closed => {
                if !held.opened {
                    self.failed_attempts = self.failed_attempts.saturating_add(1);
                }
                self.held = None;
                tracing::info!("chat socket {generation} closed");
                self.on_disconnected();
            }
            TransportEvent::Error => {
                tracing::warn!("chat socket {generation} reported an error");
                self.status = ConnectionStatus::Error;
            }
        }
    }

    fn handle_frame(&mut self, text: &str) {
        match InboundFrame::parse(text) {
            Ok(InboundFrame::ChatCreated { chat_id }) => {
                tracing::debug!("conversation {chat_id} created");
                self.chat_id = Some(chat_id);
            }
            Ok(InboundFrame::Reply { message }) => {
                self.messages.push(Message::assistant(message));
                self.waiting = false;
            }
            Err(e) => tracing::debug!("dropping inbound frame: {e}"),
        }
    }

    /// Send a user message. Blank input, a missing socket or one that is not
    /// open yet make this a silent no-op.
    pub fn send_message(&mut self, content: &str) {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return;
        }
        let Some(held) = self.held.as_ref().filter(|h| h.transport.is_ready()) else {
            tracing::debug!("dropping send: socket not ready");
            return;
        };

        // Local echo goes in before the frame leaves.
        self.messages.push(Message::user(trimmed));
        self.waiting = true;

        let frame = OutboundFrame::new(self.chat_id.clone(), trimmed);
        match frame.to_json() {
            Ok(json) => {
                if let Err(e) = held.transport.send(json) {
                    tracing::error!("chat send failed: {e}");
                }
            }
            Err(e) => tracing::error!("{e}"),
        }
    }

    /// Start a fresh conversation: drop the socket, the id, the history and
    /// the waiting flag, then reconnect.
    pub fn reset_chat(&mut self) {
        if self.shut_down {
            return;
        }
        let had_transport = self.teardown();
        self.chat_id = None;
        self.messages.clear();
        self.waiting = false;
        self.reconnect_armed = true;
        self.failed_attempts = 0;
        tracing::info!("chat reset");

        if had_transport {
            // The retired socket's own close callback is stale now, so its
            // disconnect is applied here.
            self.on_disconnected();
        } else {
            self.apply_reconnect_policy();
        }
    }

    /// Close the socket for good. Later events and reconnects are ignored.
    pub fn shutdown(&mut self) {
        self.teardown();
        self.shut_down = true;
        self.chat_id = None;
        self.status = ConnectionStatus::Disconnected;
    }

    fn connect(&mut self) {
        self.teardown();

        self.last_generation += 1;
        let generation = Generation(self.last_generation);
        self.status = ConnectionStatus::Connecting;

        let request = ConnectRequest {
            url: self.url.clone(),
            generation,
            attempt: self.failed_attempts,
        };
        tracing::info!("opening chat socket {generation} to {}", self.url);
        let transport = self.connector.open(request);
        self.held = Some(Held {
            generation,
            transport,
            opened: false,
        });
    }

    /// Close and forget the held transport. Returns whether one was held.
    fn teardown(&mut self) -> bool {
        match self.held.take() {
            Some(held) => {
                held.transport.close();
                true
            }
            None => false,
        }
    }

    fn on_disconnected(&mut self) {
        self.status = ConnectionStatus::Disconnected;
        self.chat_id = None;
        self.apply_reconnect_policy();
    }

    /// Reconnect only when asked to by a reset, or when nothing has been
    /// said yet. A conversation that drops mid-way stays disconnected.
    fn apply_reconnect_policy(&mut self) {
        if self.shut_down || self.status != ConnectionStatus::Disconnected {
            return;
        }
        if self.reconnect_armed || self.messages.is_empty() {
            self.reconnect_armed = false;
            self.connect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::fake::FakeConnector;
    use crate::models::Role;
    use serde_json::{json, Value};

    const URL: &str = "ws://test/ws/chat";

    fn started() -> (ChatSession<FakeConnector>, FakeConnector) {
        let connector = FakeConnector::default();
        let mut session = ChatSession::new(connector.clone(), URL);
        session.start();
        (session, connector)
    }

    fn open(session: &mut ChatSession<FakeConnector>, connector: &FakeConnector) -> Generation {
        let generation = session.current_generation().expect("no transport held");
        connector.set_ready(generation, true);
        session.handle_event(generation, TransportEvent::Opened);
        generation
    }

    fn deliver(session: &mut ChatSession<FakeConnector>, frame: Value) {
        let generation = session.current_generation().expect("no transport held");
        session.handle_event(generation, TransportEvent::Message(frame.to_string()));
    }

    fn reply(text: &str) -> Value {
        json!({ "ok": true, "message": { "response": { "message": text } } })
    }

    #[test]
    fn start_connects_once() {
        let (session, connector) = started();
        assert_eq!(session.status(), ConnectionStatus::Connecting);
        assert_eq!(connector.opened().len(), 1);
        assert_eq!(connector.opened()[0].url, URL);
        assert_eq!(connector.opened()[0].attempt, 0);
    }

    #[test]
    fn opened_event_marks_connected() {
        let (mut session, connector) = started();
        open(&mut session, &connector);
        assert_eq!(session.status(), ConnectionStatus::Connected);
    }

    #[test]
    fn scenario_created_send_reply_reset() {
        let (mut session, connector) = started();
        let first = open(&mut session, &connector);

        deliver(&mut session, json!({ "type": "chat.created", "chat_id": "abc" }));
        assert_eq!(session.chat_id(), Some("abc"));
        assert!(session.messages().is_empty());

        session.send_message("Hi");
        let sent = connector.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, first);
        let frame: Value = serde_json::from_str(&sent[0].1).unwrap();
        assert_eq!(frame, json!({ "chat_id": "abc", "content": "Hi", "form": null }));
        assert_eq!(session.messages(), &[Message::user("Hi")]);
        assert!(session.is_waiting());

        deliver(&mut session, reply("Hello!"));
        assert_eq!(
            session.messages(),
            &[Message::user("Hi"), Message::assistant("Hello!")]
        );
        assert!(!session.is_waiting());

        session.reset_chat();
        assert!(session.messages().is_empty());
        assert_eq!(session.chat_id(), None);
        assert!(!session.is_waiting());
        assert_eq!(session.status(), ConnectionStatus::Connecting);
        assert_eq!(connector.opened().len(), 2);
        assert_eq!(connector.closed(), vec![first]);
    }

    #[test]
    fn send_without_conversation_carries_null_id() {
        let (mut session, connector) = started();
        open(&mut session, &connector);
        session.send_message("  What is a tort?  ");

        let frame: Value = serde_json::from_str(&connector.sent()[0].1).unwrap();
        assert_eq!(
            frame,
            json!({ "chat_id": null, "content": "What is a tort?", "form": null })
        );
        assert_eq!(session.messages()[0].content, "What is a tort?");
    }

    #[test]
    fn echo_precedes_reply() {
        let (mut session, connector) = started();
        open(&mut session, &connector);
        session.send_message("hello");
        assert_eq!(session.messages().last(), Some(&Message::user("hello")));

        deliver(&mut session, reply("hi there"));
        let roles: Vec<Role> = session.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant]);
    }

    #[test]
    fn whitespace_send_is_noop() {
        let (mut session, connector) = started();
        open(&mut session, &connector);
        session.send_message("   \n\t");
        assert!(session.messages().is_empty());
        assert!(!session.is_waiting());
        assert!(connector.sent().is_empty());
    }

    #[test]
    fn send_before_open_is_noop() {
        let (mut session, connector) = started();
        session.send_message("too early");
        assert!(session.messages().is_empty());
        assert!(!session.is_waiting());
        assert!(connector.sent().is_empty());
    }

    #[test]
    fn send_with_no_transport_is_noop() {
        let (mut session, connector) = started();
        let generation = open(&mut session, &connector);
        session.send_message("first");
        session.handle_event(generation, TransportEvent::Closed);
        assert_eq!(session.current_generation(), None);

        session.send_message("second");
        assert_eq!(session.messages().len(), 1);
        assert_eq!(connector.sent().len(), 1);
    }

    #[test]
    fn malformed_and_unknown_frames_change_nothing() {
        let (mut session, connector) = started();
        let generation = open(&mut session, &connector);
        session.send_message("pending");

        session.handle_event(generation, TransportEvent::Message("{oops".into()));
        deliver(&mut session, json!({ "type": "pong" }));
        deliver(&mut session, json!({ "ok": false, "error": "rate limited" }));

        assert_eq!(session.status(), ConnectionStatus::Connected);
        assert_eq!(session.messages(), &[Message::user("pending")]);
        assert!(session.is_waiting());
        assert_eq!(session.chat_id(), None);
    }

    #[test]
    fn close_with_empty_store_reconnects_once() {
        let (mut session, connector) = started();
        let generation = session.current_generation().unwrap();
        session.handle_event(generation, TransportEvent::Closed);

        assert_eq!(session.status(), ConnectionStatus::Connecting);
        assert_eq!(connector.opened().len(), 2);
        // never opened, so the next dial is backed off
        assert_eq!(connector.opened()[1].attempt, 1);
    }

    #[test]
    fn close_after_messages_stays_disconnected() {
        let (mut session, connector) = started();
        let generation = open(&mut session, &connector);
        deliver(&mut session, json!({ "type": "chat.created", "chat_id": "c1" }));
        session.send_message("hello");

        session.handle_event(generation, TransportEvent::Closed);
        assert_eq!(session.status(), ConnectionStatus::Disconnected);
        assert_eq!(session.chat_id(), None);
        assert_eq!(connector.opened().len(), 1);
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn error_keeps_history_and_waiting() {
        let (mut session, connector) = started();
        let generation = open(&mut session, &connector);
        session.send_message("anyone?");

        session.handle_event(generation, TransportEvent::Error);
        assert_eq!(session.status(), ConnectionStatus::Error);
        assert!(session.is_waiting());
        assert_eq!(session.messages().len(), 1);
        assert_eq!(connector.opened().len(), 1);

        // close after error is handled the same way as a plain close
        session.handle_event(generation, TransportEvent::Closed);
        assert_eq!(session.status(), ConnectionStatus::Disconnected);
        session.handle_event(generation, TransportEvent::Error);
        assert_eq!(session.status(), ConnectionStatus::Disconnected);
        assert_eq!(connector.opened().len(), 1);
    }

    #[test]
    fn reset_twice_matches_reset_once() {
        let (mut session, connector) = started();
        open(&mut session, &connector);
        session.send_message("one");

        session.reset_chat();
        session.reset_chat();

        assert!(session.messages().is_empty());
        assert_eq!(session.chat_id(), None);
        assert!(!session.is_waiting());
        assert_eq!(session.status(), ConnectionStatus::Connecting);

        let opened = connector.opened();
        assert_eq!(opened.len(), 3);
        // every superseded transport was closed, the newest is still live
        assert_eq!(
            connector.closed(),
            vec![opened[0].generation, opened[1].generation]
        );
        assert_eq!(session.current_generation(), Some(opened[2].generation));
    }

    #[test]
    fn reset_after_close_reconnects() {
        let (mut session, connector) = started();
        let generation = open(&mut session, &connector);
        session.send_message("one");
        session.handle_event(generation, TransportEvent::Closed);
        assert_eq!(session.status(), ConnectionStatus::Disconnected);

        session.reset_chat();
        assert!(session.messages().is_empty());
        assert!(!session.is_waiting());
        assert_eq!(session.status(), ConnectionStatus::Connecting);
        assert_eq!(connector.opened().len(), 2);
        assert_eq!(connector.opened()[1].attempt, 0);
    }

    #[test]
    fn stale_events_are_ignored() {
        let (mut session, connector) = started();
        let old = open(&mut session, &connector);
        session.reset_chat();
        let new = session.current_generation().unwrap();
        assert_ne!(old, new);

        session.handle_event(old, TransportEvent::Message(reply("late").to_string()));
        session.handle_event(old, TransportEvent::Opened);
        session.handle_event(old, TransportEvent::Closed);
        session.handle_event(old, TransportEvent::Error);

        assert!(session.messages().is_empty());
        assert_eq!(session.status(), ConnectionStatus::Connecting);
        assert_eq!(session.current_generation(), Some(new));
        assert_eq!(connector.opened().len(), 2);
    }

    #[test]
    fn at_most_one_transport_is_live() {
        let (mut session, connector) = started();
        assert_eq!(connector.live(), 1);
        for _ in 0..5 {
            session.reset_chat();
            assert_eq!(connector.live(), 1);

            let gen = session.current_generation().unwrap();
            connector.remote_close(gen);
            session.handle_event(gen, TransportEvent::Closed);
            assert_eq!(connector.live(), 1);
        }
        assert_eq!(connector.opened().len(), 11);
    }

    #[test]
    fn successful_open_resets_backoff() {
        let (mut session, connector) = started();
        for _ in 0..3 {
            let gen = session.current_generation().unwrap();
            session.handle_event(gen, TransportEvent::Closed);
        }
        assert_eq!(connector.opened().last().unwrap().attempt, 3);

        let gen = open(&mut session, &connector);
        session.handle_event(gen, TransportEvent::Closed);
        assert_eq!(connector.opened().last().unwrap().attempt, 0);
    }

    #[test]
    fn shutdown_stops_everything() {
        let (mut session, connector) = started();
        let generation = open(&mut session, &connector);
        session.shutdown();

        assert_eq!(connector.closed(), vec![generation]);
        assert_eq!(session.status(), ConnectionStatus::Disconnected);

        session.handle_event(generation, TransportEvent::Closed);
        session.reset_chat();
        assert_eq!(connector.opened().len(), 1);
    }
}
