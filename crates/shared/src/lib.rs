//! Shared types and the chat connection core for the Lahwita client.
//!
//! Nothing in this crate performs I/O: sockets, HTTP and storage are
//! supplied by the client through the [`chat::Connector`] and
//! [`session::SessionStorage`] traits.

pub mod chat;
pub mod config;
pub mod error;
pub mod models;
pub mod protocol;
pub mod session;
pub mod store;

pub use chat::{ChatSession, ConnectRequest, Connector, Generation, Transport, TransportEvent};
pub use config::{ClientConfig, ReconnectConfig};
pub use error::*;
pub use models::*;
pub use protocol::*;
pub use store::MessageStore;
