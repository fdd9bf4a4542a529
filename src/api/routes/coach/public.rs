//! Public types for the career coach API
use serde::{Deserialize, Serialize};

use crate::coach::{Conversation, Message, Topic};

#[derive(Serialize, Deserialize)]
pub struct ConversationResponse {
    pub session_id: String,
    pub pending: bool,
    pub transcript: Vec<Message>,
    // Empty once the student has sent a message
    pub quick_prompts: Vec<String>,
}

impl ConversationResponse {
    pub fn new(session_id: &str, conversation: &Conversation) -> Self {
        Self {
            session_id: session_id.to_string(),
            pending: conversation.is_pending(),
            transcript: conversation.messages(),
            quick_prompts: conversation
                .quick_prompts()
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: String,
    pub message_count: usize,
    pub pending: bool,
}

#[derive(Serialize, Deserialize)]
pub struct SessionsResponse {
    pub sessions: Vec<SessionSummary>,
    pub total_sessions: usize,
}

#[derive(Serialize, Deserialize)]
pub struct MessageRequest {
    pub message: String,
}

#[derive(Deserialize)]
pub struct SubmitQuery {
    // Hold the response until the coach's reply is in the transcript
    pub wait: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum SubmitStatus {
    Accepted,
    Ignored,
    Busy,
}

#[derive(Serialize, Deserialize)]
pub struct SubmitResponse {
    pub status: SubmitStatus,
    pub pending: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<Message>,
}

#[derive(Serialize, Deserialize)]
pub struct ClassifyRequest {
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub topic: Topic,
    pub response: String,
}

#[derive(Serialize, Deserialize)]
pub struct QuickPromptsResponse {
    pub prompts: Vec<String>,
}
