//! Platform sockets for the chat session.
//!
//! Both implementations follow the same contract: [`SocketConnector::open`]
//! returns immediately with a [`SocketTransport`] handle, while dialing and
//! all socket I/O happen on a background task. Lifecycle callbacks are
//! pushed into the event channel tagged with the transport's generation and
//! are applied to the session by whoever drains the receiver.

use futures_channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use lahwita_shared::{Generation, TransportEvent};

pub type EventSender = UnboundedSender<(Generation, TransportEvent)>;
pub type EventReceiver = UnboundedReceiver<(Generation, TransportEvent)>;

pub fn event_channel() -> (EventSender, EventReceiver) {
    unbounded()
}

/// Push one event; a dropped receiver means the session is gone.
fn emit(events: &EventSender, generation: Generation, event: TransportEvent) {
    if events.unbounded_send((generation, event)).is_err() {
        crate::log_debug!("chat socket {generation}: session gone, event dropped");
    }
}

// Include platform-specific implementation
#[cfg(target_arch = "wasm32")]
mod connection_wasm;
#[cfg(target_arch = "wasm32")]
pub use connection_wasm::{SocketConnector, SocketTransport};

#[cfg(not(target_arch = "wasm32"))]
mod connection_native;
#[cfg(not(target_arch = "wasm32"))]
pub use connection_native::{SocketConnector, SocketTransport};
