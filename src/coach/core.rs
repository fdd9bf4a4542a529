use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::models::{Message, Sender, Transcript};
use super::templates::{greeting, select_template, QUICK_PROMPTS};

struct ConversationState {
    transcript: Transcript,
    pending: bool,
}

/// Handle to a single conversation with the coach.
///
/// Cloning the handle does not copy the conversation, every clone
/// observes the same transcript. Only `ConversationEngine` appends to
/// it.
#[derive(Clone)]
pub struct Conversation {
    state: Arc<RwLock<ConversationState>>,
    status: Arc<watch::Sender<bool>>,
}

impl Conversation {
    fn new(greeting: &str) -> Self {
        let mut transcript = Transcript::new();
        transcript.append(Sender::Assistant, greeting);
        let (status, _) = watch::channel(false);

        Self {
            state: Arc::new(RwLock::new(ConversationState {
                transcript,
                pending: false,
            })),
            status: Arc::new(status),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, ConversationState> {
        self.state.read().expect("Unable to read conversation state")
    }

    fn write(&self) -> RwLockWriteGuard<'_, ConversationState> {
        self.state.write().expect("Unable to write conversation state")
    }

    pub fn messages(&self) -> Vec<Message> {
        self.read().transcript.messages()
    }

    pub fn len(&self) -> usize {
        self.read().transcript.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().transcript.is_empty()
    }

    pub fn last_message(&self) -> Option<Message> {
        self.read().transcript.last().cloned()
    }

    pub fn is_pending(&self) -> bool {
        self.read().pending
    }

    /// Watch the pending flag, e.g. to show a typing indicator.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.status.subscribe()
    }

    // Quick prompts are only offered before the student has said anything
    pub fn quick_prompts(&self) -> &'static [&'static str] {
        if self.len() <= 1 {
            &QUICK_PROMPTS[..]
        } else {
            &[]
        }
    }

    /// Appends the user's message and flips to pending in one step so
    /// two submissions can't both get through.
    fn begin_turn(&self, text: &str) -> Option<Message> {
        let msg = {
            let mut state = self.write();
            if state.pending {
                return None;
            }
            state.pending = true;
            state.transcript.append(Sender::User, text)
        };
        self.status.send_replace(true);
        Some(msg)
    }

    fn finish_turn(&self, reply: &str) -> Message {
        let msg = {
            let mut state = self.write();
            state.pending = false;
            state.transcript.append(Sender::Assistant, reply)
        };
        self.status.send_replace(false);
        msg
    }
}

impl std::fmt::Debug for Conversation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.read();
        f.debug_struct("Conversation")
            .field("messages", &state.transcript.len())
            .field("pending", &state.pending)
            .finish()
    }
}

/// Result of `ConversationEngine::submit`.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The user's message was appended and a reply is on its way. The
    /// handle resolves to the reply once it's in the transcript.
    /// Dropping it does not cancel the reply.
    Accepted {
        message: Message,
        reply: JoinHandle<Message>,
    },
    /// Blank input, nothing changed.
    Ignored,
    /// A reply is still pending, nothing changed.
    Busy,
}

/// Produces canned coach replies after a simulated thinking delay.
///
/// Use `ConversationEngine::builder()` to override the defaults.
#[derive(Clone, Debug)]
pub struct ConversationEngine {
    response_delay: Duration,
    student_name: String,
}

impl Default for ConversationEngine {
    fn default() -> Self {
        ConversationEngineBuilder::default().build()
    }
}

impl ConversationEngine {
    pub fn builder() -> ConversationEngineBuilder {
        ConversationEngineBuilder::default()
    }

    pub fn response_delay(&self) -> Duration {
        self.response_delay
    }

    /// Start a new conversation seeded with the coach's greeting.
    pub fn initialize(&self) -> Conversation {
        Conversation::new(&greeting(&self.student_name))
    }

    /// Submit a user message. Must be called from within a Tokio
    /// runtime since the reply is produced by a spawned task.
    pub fn submit(&self, conversation: &Conversation, user_text: &str) -> SubmitOutcome {
        let text = user_text.trim();
        if text.is_empty() {
            tracing::debug!("Ignoring blank message");
            return SubmitOutcome::Ignored;
        }

        let Some(message) = conversation.begin_turn(text) else {
            tracing::debug!("Rejecting message while a reply is pending");
            return SubmitOutcome::Busy;
        };

        let template = select_template(text);
        tracing::debug!("Message {} classified as {:?}", message.id, template.topic);

        let deadline = tokio::time::Instant::now() + self.response_delay;
        let conversation = conversation.clone();
        let reply = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            conversation.finish_turn(template.body)
        });

        SubmitOutcome::Accepted { message, reply }
    }
}

pub struct ConversationEngineBuilder {
    response_delay: Duration,
    student_name: String,
}

impl Default for ConversationEngineBuilder {
    fn default() -> Self {
        Self {
            response_delay: Duration::from_millis(1500),
            student_name: String::from("Alex"),
        }
    }
}

impl ConversationEngineBuilder {
    pub fn response_delay(mut self, delay: Duration) -> Self {
        self.response_delay = delay;
        self
    }

    pub fn student_name(mut self, name: &str) -> Self {
        self.student_name = name.to_string();
        self
    }

    pub fn build(self) -> ConversationEngine {
        ConversationEngine {
            response_delay: self.response_delay,
            student_name: self.student_name,
        }
    }
}
