//! Router for the career coach API

use std::sync::{Arc, RwLock};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use uuid::Uuid;

use super::public;
use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::coach::{
    Conversation, ConversationEngine, QUICK_PROMPTS, SubmitOutcome, classify, classify_topic,
};

type SharedState = Arc<RwLock<AppState>>;

/// Clone out the engine and conversation so no lock is held while
/// waiting on a reply.
fn find_session(
    state: &SharedState,
    id: &str,
) -> Result<(ConversationEngine, Conversation), ApiError> {
    let shared_state = state.read().expect("Unable to read share state");
    let conversation = shared_state
        .sessions
        .get(id)
        .cloned()
        .ok_or_else(|| ApiError::session_not_found(id))?;
    Ok((shared_state.engine.clone(), conversation))
}

/// Start a new coach session seeded with the greeting
async fn create_session(State(state): State<SharedState>) -> impl IntoResponse {
    let session_id = Uuid::new_v4().to_string();
    let conversation = {
        let mut shared_state = state.write().expect("Unable to write share state");
        let conversation = shared_state.engine.initialize();
        shared_state
            .sessions
            .insert(session_id.clone(), conversation.clone());
        conversation
    };
    tracing::info!("Created coach session {}", session_id);

    (
        StatusCode::CREATED,
        Json(public::ConversationResponse::new(&session_id, &conversation)),
    )
}

/// Get a list of all coach sessions
async fn session_list(State(state): State<SharedState>) -> Json<public::SessionsResponse> {
    let shared_state = state.read().expect("Unable to read share state");
    let sessions: Vec<public::SessionSummary> = shared_state
        .sessions
        .iter()
        .map(|(id, conversation)| public::SessionSummary {
            id: id.clone(),
            message_count: conversation.len(),
            pending: conversation.is_pending(),
        })
        .collect();

    Json(public::SessionsResponse {
        total_sessions: sessions.len(),
        sessions,
    })
}

/// Get a single session's transcript and pending status
async fn session(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<public::ConversationResponse>, ApiError> {
    let (_, conversation) = find_session(&state, &id)?;
    Ok(Json(public::ConversationResponse::new(&id, &conversation)))
}

/// Send a message to the coach. Responds right away with the
/// appended user message unless `wait=true` is set, in which case
/// the response also carries the coach's reply.
async fn submit_message(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Query(params): Query<public::SubmitQuery>,
    Json(payload): Json<public::MessageRequest>,
) -> Result<Response, ApiError> {
    let (engine, conversation) = find_session(&state, &id)?;

    let resp = match engine.submit(&conversation, &payload.message) {
        SubmitOutcome::Accepted { message, reply } => {
            if params.wait.unwrap_or(false) {
                let reply = reply.await?;
                let body = public::SubmitResponse {
                    status: public::SubmitStatus::Accepted,
                    pending: conversation.is_pending(),
                    message: Some(message),
                    reply: Some(reply),
                };
                (StatusCode::OK, Json(body)).into_response()
            } else {
                let body = public::SubmitResponse {
                    status: public::SubmitStatus::Accepted,
                    pending: true,
                    message: Some(message),
                    reply: None,
                };
                (StatusCode::ACCEPTED, Json(body)).into_response()
            }
        }
        SubmitOutcome::Ignored => {
            let body = public::SubmitResponse {
                status: public::SubmitStatus::Ignored,
                pending: conversation.is_pending(),
                message: None,
                reply: None,
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        SubmitOutcome::Busy => {
            tracing::warn!("Session {} received a message while a reply is pending", id);
            let body = public::SubmitResponse {
                status: public::SubmitStatus::Busy,
                pending: true,
                message: None,
                reply: None,
            };
            (StatusCode::CONFLICT, Json(body)).into_response()
        }
    };

    Ok(resp)
}

/// Suggestions to show for a fresh conversation
async fn quick_prompts() -> Json<public::QuickPromptsResponse> {
    Json(public::QuickPromptsResponse {
        prompts: QUICK_PROMPTS.iter().map(|p| p.to_string()).collect(),
    })
}

/// Classify a message without touching any session
async fn classify_message(
    Json(payload): Json<public::ClassifyRequest>,
) -> Json<public::ClassifyResponse> {
    Json(public::ClassifyResponse {
        topic: classify_topic(&payload.message),
        response: classify(&payload.message).to_string(),
    })
}

/// Create the coach router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/sessions", post(create_session).get(session_list))
        .route("/sessions/{id}", get(session))
        .route("/sessions/{id}/messages", post(submit_message))
        .route("/prompts", get(quick_prompts))
        .route("/classify", post(classify_message))
}
