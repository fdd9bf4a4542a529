use std::env;
use std::time::Duration;

use crate::coach::ConversationEngine;

const DEFAULT_RESPONSE_DELAY_MS: u64 = 1500;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub response_delay: Duration,
    pub student_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let response_delay = env::var("CAREERMATE_RESPONSE_DELAY_MS")
            .ok()
            .map(|v| parse_delay_ms(&v))
            .unwrap_or(Duration::from_millis(DEFAULT_RESPONSE_DELAY_MS));
        let student_name =
            env::var("CAREERMATE_STUDENT_NAME").unwrap_or_else(|_| "Alex".to_string());

        Self {
            response_delay,
            student_name,
        }
    }
}

impl AppConfig {
    pub fn engine(&self) -> ConversationEngine {
        ConversationEngine::builder()
            .response_delay(self.response_delay)
            .student_name(&self.student_name)
            .build()
    }
}

fn parse_delay_ms(value: &str) -> Duration {
    match value.trim().parse::<u64>() {
        Ok(ms) => Duration::from_millis(ms),
        Err(e) => {
            tracing::warn!(
                "Invalid CAREERMATE_RESPONSE_DELAY_MS {:?}: {}. Using {}ms",
                value,
                e,
                DEFAULT_RESPONSE_DELAY_MS
            );
            Duration::from_millis(DEFAULT_RESPONSE_DELAY_MS)
        }
    }
}
