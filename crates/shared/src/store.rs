//! Ordered message history for one conversation.

use crate::models::Message;

/// Append-only list of chat messages, in arrival order.
///
/// The only way to remove messages is [`MessageStore::clear`], which drops
/// the whole history. There is no deduplication.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageStore {
    messages: Vec<Message>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, msg: Message) {
        self.messages.push(msg);
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn as_slice(&self) -> &[Message] {
        &self.messages
    }

    /// Owned copy of the history for consumers that outlive the borrow.
    pub fn snapshot(&self) -> Vec<Message> {
        self.messages.clone()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
