use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::coach::{Conversation, SubmitOutcome};
use crate::core::AppConfig;

fn print_greeting(conversation: &Conversation) {
    if let Some(msg) = conversation.last_message() {
        println!("{}\n", msg.text);
    }
    let prompts = conversation.quick_prompts();
    if !prompts.is_empty() {
        println!("Quick prompts:");
        for p in prompts {
            println!("  - {}", p);
        }
        println!();
    }
}

pub async fn run() -> Result<()> {
    // Keep logs quiet so they don't interleave with the chat
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=warn", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::default();
    let engine = config.engine();
    let conversation = engine.initialize();
    print_greeting(&conversation);

    let mut rl = DefaultEditor::new()?;

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => match engine.submit(&conversation, &line) {
                SubmitOutcome::Accepted { reply, .. } => {
                    let _ = rl.add_history_entry(line.as_str());
                    println!("AI is typing...");
                    let msg = reply.await?;
                    println!("\n{}\n", msg.text);
                }
                SubmitOutcome::Ignored => {}
                // Input is only read after the previous reply arrives
                SubmitOutcome::Busy => {
                    tracing::warn!("Reply still pending, message dropped");
                }
            },
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
