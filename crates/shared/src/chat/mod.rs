//! Realtime chat connection.
//!
//! [`ChatSession`] owns at most one [`Transport`] at a time and turns its
//! lifecycle events into a [`ConnectionStatus`](crate::ConnectionStatus), a
//! conversation id and a [`MessageStore`](crate::MessageStore).
//!
//! ```text
//!   UI ── send_message / reset_chat ──▶ ChatSession ── Connector::open ──▶ Transport
//!   ▲                                     ▲                                  │
//!   └──── status / messages / waiting ────┘◀── handle_event(gen, event) ─────┘
//! ```
//!
//! Status machine:
//!
//! ```text
//! Disconnected ─▶ Connecting ─▶ Connected ─▶ Disconnected | Error
//! ```
//!
//! Every transport carries a [`Generation`]. Events from any generation other
//! than the one currently held are dropped, so a socket closed by the session
//! can never mutate state afterwards.

mod session;
mod transport;

#[cfg(test)]
pub(crate) mod fake;

pub use session::ChatSession;
pub use transport::{ConnectRequest, Connector, Generation, Transport, TransportEvent};
