mod core;
pub mod models;
pub mod templates;

pub use self::core::{Conversation, ConversationEngine, ConversationEngineBuilder, SubmitOutcome};
pub use models::{Message, Sender, Transcript};
pub use templates::{QUICK_PROMPTS, Topic, classify, classify_topic};
