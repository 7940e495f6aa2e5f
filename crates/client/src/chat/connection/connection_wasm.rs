//! WASM/Web chat socket using web_sys::WebSocket.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use lahwita_shared::{
    ConnectRequest, Connector, ReconnectConfig, Transport, TransportError,
    TransportEvent,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{CloseEvent, Event, MessageEvent, WebSocket};

use super::{emit, EventSender};

/// Dials chat sockets through the browser.
pub struct SocketConnector {
    events: EventSender,
    reconnect: ReconnectConfig,
}

impl SocketConnector {
    pub fn new(events: EventSender, reconnect: ReconnectConfig) -> Self {
        Self { events, reconnect }
    }
}

impl Connector for SocketConnector {
    type Transport = SocketTransport;

    fn open(&mut self, request: ConnectRequest) -> SocketTransport {
        let transport = SocketTransport {
            socket: Rc::new(RefCell::new(None)),
            closed: Rc::new(Cell::new(false)),
        };
        let delay_ms = self.reconnect.delay_for_attempt(request.attempt);

        if delay_ms == 0 {
            dial(request, self.events.clone(), &transport.socket);
        } else {
            crate::log_info!(
                "chat socket {}: retrying in {delay_ms}ms (attempt {})",
                request.generation,
                request.attempt
            );
            let events = self.events.clone();
            let socket = transport.socket.clone();
            let closed = transport.closed.clone();
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(delay_ms).await;
                if !closed.get() {
                    dial(request, events, &socket);
                }
            });
        }

        transport
    }
}

/// A browser socket plus the callbacks bound to it.
///
/// Dropping it detaches the callbacks before closing, so the browser never
/// calls into a freed closure.
struct Socket {
    ws: WebSocket,
    _on_open: Closure<dyn FnMut(Event)>,
    _on_message: Closure<dyn FnMut(MessageEvent)>,
    _on_close: Closure<dyn FnMut(CloseEvent)>,
    _on_error: Closure<dyn FnMut(Event)>,
}

impl Drop for Socket {
    fn drop(&mut self) {
        self.ws.set_onopen(None);
        self.ws.set_onmessage(None);
        self.ws.set_onclose(None);
        self.ws.set_onerror(None);
        let _ = self.ws.close();
    }
}

pub struct SocketTransport {
    socket: Rc<RefCell<Option<Socket>>>,
    closed: Rc<Cell<bool>>,
}

impl Transport for SocketTransport {
    fn send(&self, text: String) -> Result<(), TransportError> {
        let socket = self.socket.borrow();
        let ws = socket
            .as_ref()
            .map(|s| &s.ws)
            .filter(|ws| ws.ready_state() == WebSocket::OPEN)
            .ok_or(TransportError::NotReady)?;
        ws.send_with_str(&text)
            .map_err(|e| TransportError::Send(format!("{e:?}")))
    }

    fn close(&self) {
        self.closed.set(true);
        self.socket.borrow_mut().take();
    }

    fn is_ready(&self) -> bool {
        self.socket
            .borrow()
            .as_ref()
            .is_some_and(|s| s.ws.ready_state() == WebSocket::OPEN)
    }
}

impl Drop for SocketTransport {
    fn drop(&mut self) {
        self.close();
    }
}

fn dial(request: ConnectRequest, events: EventSender, slot: &Rc<RefCell<Option<Socket>>>) {
    let generation = request.generation;

    let ws = match WebSocket::new(&request.url) {
        Ok(ws) => ws,
        Err(e) => {
            let err = TransportError::Connect {
                url: request.url,
                reason: format!("{e:?}"),
            };
            crate::log_error!("chat socket {generation}: {err}");
            emit(&events, generation, TransportEvent::Error);
            emit(&events, generation, TransportEvent::Closed);
            return;
        }
    };

    let on_open = {
        let events = events.clone();
        Closure::wrap(Box::new(move |_: Event| {
            emit(&events, generation, TransportEvent::Opened);
        }) as Box<dyn FnMut(Event)>)
    };
    let on_message = {
        let events = events.clone();
        Closure::wrap(Box::new(move |e: MessageEvent| {
            // Binary frames carry nothing for us
            if let Some(text) = e.data().as_string() {
                emit(&events, generation, TransportEvent::Message(text));
            }
        }) as Box<dyn FnMut(MessageEvent)>)
    };
    let on_close = {
        let events = events.clone();
        Closure::wrap(Box::new(move |e: CloseEvent| {
            crate::log_info!("chat socket {generation} closed (code {})", e.code());
            emit(&events, generation, TransportEvent::Closed);
        }) as Box<dyn FnMut(CloseEvent)>)
    };
    let on_error = Closure::wrap(Box::new(move |_: Event| {
        crate::log_error!("chat socket {generation} error");
        emit(&events, generation, TransportEvent::Error);
    }) as Box<dyn FnMut(Event)>);

    ws.set_onopen(Some(on_open.as_ref().unchecked_ref()));
    ws.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
    ws.set_onclose(Some(on_close.as_ref().unchecked_ref()));
    ws.set_onerror(Some(on_error.as_ref().unchecked_ref()));

    *slot.borrow_mut() = Some(Socket {
        ws,
        _on_open: on_open,
        _on_message: on_message,
        _on_close: on_close,
        _on_error: on_error,
    });
}
