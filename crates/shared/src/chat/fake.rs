//! In-memory connector for driving a session in tests.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use super::transport::{ConnectRequest, Connector, Generation, Transport};
use crate::error::TransportError;

#[derive(Default)]
struct Wire {
    opened: Vec<ConnectRequest>,
    sent: Vec<(Generation, String)>,
    closed: Vec<Generation>,
    remote_closed: Vec<Generation>,
    ready: HashSet<Generation>,
}

/// Records every dial, frame and close. Clones share the same record.
#[derive(Clone, Default)]
pub(crate) struct FakeConnector {
    wire: Rc<RefCell<Wire>>,
}

impl FakeConnector {
    pub fn opened(&self) -> Vec<ConnectRequest> {
        self.wire.borrow().opened.clone()
    }

    pub fn sent(&self) -> Vec<(Generation, String)> {
        self.wire.borrow().sent.clone()
    }

    /// Transports closed by the session, in order.
    pub fn closed(&self) -> Vec<Generation> {
        self.wire.borrow().closed.clone()
    }

    pub fn set_ready(&self, generation: Generation, ready: bool) {
        let mut wire = self.wire.borrow_mut();
        if ready {
            wire.ready.insert(generation);
        } else {
            wire.ready.remove(&generation);
        }
    }

    /// Simulate the far side hanging up.
    pub fn remote_close(&self, generation: Generation) {
        let mut wire = self.wire.borrow_mut();
        wire.ready.remove(&generation);
        wire.remote_closed.push(generation);
    }

    /// Transports neither side has closed.
    pub fn live(&self) -> usize {
        let wire = self.wire.borrow();
        wire.opened
            .iter()
            .filter(|r| !wire.closed.contains(&r.generation))
            .filter(|r| !wire.remote_closed.contains(&r.generation))
            .count()
    }
}

pub(crate) struct FakeTransport {
    generation: Generation,
    wire: Rc<RefCell<Wire>>,
}

impl Transport for FakeTransport {
    fn send(&self, text: String) -> Result<(), TransportError> {
        if !self.is_ready() {
            return Err(TransportError::NotReady);
        }
        self.wire.borrow_mut().sent.push((self.generation, text));
        Ok(())
    }

    fn close(&self) {
        let mut wire = self.wire.borrow_mut();
        wire.ready.remove(&self.generation);
        wire.closed.push(self.generation);
    }

    fn is_ready(&self) -> bool {
        self.wire.borrow().ready.contains(&self.generation)
    }
}

impl Connector for FakeConnector {
    type Transport = FakeTransport;

    fn open(&mut self, request: ConnectRequest) -> FakeTransport {
        let generation = request.generation;
        self.wire.borrow_mut().opened.push(request);
        FakeTransport {
            generation,
            wire: self.wire.clone(),
        }
    }
}
