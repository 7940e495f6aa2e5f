//! Socket abstraction used by the chat session.

use std::fmt;

use crate::error::TransportError;

/// Identifies one transport instance. Strictly increasing per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(pub u64);

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle callbacks of a socket, delivered back to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    Opened,
    Message(String),
    Closed,
    Error,
}

/// Everything a connector needs to dial one transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectRequest {
    pub url: String,
    pub generation: Generation,
    /// Consecutive transports that closed before opening. Zero dials at once.
    pub attempt: u32,
}

/// A live full-duplex text socket.
///
/// Implementations report lifecycle changes as `(Generation, TransportEvent)`
/// pairs through whatever channel the connector was built with. They must
/// never touch session state directly.
pub trait Transport {
    fn send(&self, text: String) -> Result<(), TransportError>;
    fn close(&self);
    /// `true` only while the socket is open and accepts frames.
    fn is_ready(&self) -> bool;
}

/// Dials new transports.
pub trait Connector {
    type Transport: Transport;

    fn open(&mut self, request: ConnectRequest) -> Self::Transport;
}
