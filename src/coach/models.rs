//! The core models for a conversation with the career coach.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Sender {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
}

/// A single entry in the transcript. Messages are never edited once
/// appended so there are no setters.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Message {
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

/// Append-only, ordered log of messages. Ids are assigned on append
/// so id order is always creation order.
#[derive(Default, Debug)]
pub struct Transcript(Vec<Message>);

impl Transcript {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a new message with the next sequence id and return a
    /// copy of it.
    pub fn append(&mut self, sender: Sender, text: &str) -> Message {
        let msg = Message {
            id: self.0.len() as u64 + 1,
            sender,
            text: text.to_string(),
            sent_at: Utc::now(),
        };
        self.0.push(msg.clone());
        msg
    }

    pub fn messages(&self) -> Vec<Message> {
        self.0.clone()
    }

    pub fn last(&self) -> Option<&Message> {
        self.0.last()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.0.iter()
    }
}
