//! Message Log
//!
//! Divine speech produced during resolution, held until the caller drains it.

use conduct_types::{DeityId, GodMessage};

/// Ordered buffer of god messages.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    messages: Vec<GodMessage>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `phrase` spoken by `deity`.
    pub fn god_says(&mut self, deity: DeityId, phrase: &str) {
        tracing::debug!(%deity, phrase, "god message");
        self.push(GodMessage::simple(deity, phrase));
    }

    pub fn push(&mut self, message: GodMessage) {
        self.messages.push(message);
    }

    pub fn drain(&mut self) -> Vec<GodMessage> {
        std::mem::take(&mut self.messages)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GodMessage> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Text of the most recent message.
    pub fn last_text(&self) -> Option<&str> {
        self.messages.last().map(|m| m.text.as_str())
    }
}
