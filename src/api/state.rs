use std::collections::BTreeMap;

use crate::coach::{Conversation, ConversationEngine};
use crate::core::AppConfig;

pub struct AppState {
    pub engine: ConversationEngine,
    // Live coach sessions keyed by session ID. Nothing is persisted so
    // these go away when the server stops.
    pub sessions: BTreeMap<String, Conversation>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            engine: config.engine(),
            sessions: BTreeMap::new(),
            config,
        }
    }
}
