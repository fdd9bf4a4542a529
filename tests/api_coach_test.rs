//! Integration tests for the career coach API endpoints

mod test_utils;

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::json;
    use tower::util::ServiceExt;

    use careermate::api::public::coach::{
        ClassifyResponse, ConversationResponse, QuickPromptsResponse, SessionsResponse,
        SubmitResponse, SubmitStatus,
    };
    use careermate::coach::{Sender, Topic, classify};

    use crate::test_utils::{RESPONSE_DELAY, body_to_string, get_json, post_json, test_app};

    const INTERVIEW_PROMPT: &str = "Help me prepare for a frontend developer interview";

    async fn create_session(app: &axum::Router) -> ConversationResponse {
        let (status, session) = post_json(app, "/api/coach/sessions", json!({})).await;
        assert_eq!(status, StatusCode::CREATED);
        session
    }

    /// Tests a new session holds only the greeting
    #[tokio::test]
    async fn it_creates_a_session_with_greeting() {
        let app = test_app();
        let session = create_session(&app).await;

        assert!(!session.session_id.is_empty());
        assert!(!session.pending);
        assert_eq!(session.transcript.len(), 1);
        assert_eq!(session.transcript[0].sender, Sender::Assistant);
        assert!(session.transcript[0].text.starts_with("Hi Alex!"));
        assert_eq!(session.quick_prompts.len(), 5);
    }

    /// Tests listing sessions
    #[tokio::test]
    async fn it_lists_sessions() {
        let app = test_app();

        let (status, resp): (_, SessionsResponse) = get_json(&app, "/api/coach/sessions").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(resp.total_sessions, 0);

        let first = create_session(&app).await;
        let second = create_session(&app).await;

        let (_, resp): (_, SessionsResponse) = get_json(&app, "/api/coach/sessions").await;
        assert_eq!(resp.total_sessions, 2);
        let ids: Vec<String> = resp.sessions.iter().map(|s| s.id.clone()).collect();
        assert!(ids.contains(&first.session_id));
        assert!(ids.contains(&second.session_id));
        assert!(resp.sessions.iter().all(|s| s.message_count == 1 && !s.pending));
    }

    /// Tests the full submit cycle: user message now, reply after the delay
    #[tokio::test(start_paused = true)]
    async fn it_appends_reply_after_delay() {
        let app = test_app();
        let session = create_session(&app).await;
        let messages_uri = format!("/api/coach/sessions/{}/messages", session.session_id);
        let session_uri = format!("/api/coach/sessions/{}", session.session_id);

        let (status, resp): (_, SubmitResponse) =
            post_json(&app, &messages_uri, json!({ "message": INTERVIEW_PROMPT })).await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(resp.status, SubmitStatus::Accepted);
        assert!(resp.pending);
        let message = resp.message.unwrap();
        assert_eq!(message.sender, Sender::User);
        assert_eq!(message.text, INTERVIEW_PROMPT);

        let (_, current): (_, ConversationResponse) = get_json(&app, &session_uri).await;
        assert_eq!(current.transcript.len(), 2);
        assert!(current.pending);
        assert!(current.quick_prompts.is_empty());

        tokio::time::sleep(RESPONSE_DELAY + Duration::from_millis(10)).await;

        let (_, current): (_, ConversationResponse) = get_json(&app, &session_uri).await;
        assert_eq!(current.transcript.len(), 3);
        assert!(!current.pending);
        let reply = &current.transcript[2];
        assert_eq!(reply.sender, Sender::Assistant);
        assert_eq!(reply.text, classify(INTERVIEW_PROMPT));
    }

    /// Tests waiting for the reply in the same request
    #[tokio::test(start_paused = true)]
    async fn it_waits_for_reply() {
        let app = test_app();
        let session = create_session(&app).await;
        let uri = format!(
            "/api/coach/sessions/{}/messages?wait=true",
            session.session_id
        );

        let (status, resp): (_, SubmitResponse) =
            post_json(&app, &uri, json!({ "message": "How can I improve my CV?" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(resp.status, SubmitStatus::Accepted);
        assert!(!resp.pending);
        let reply = resp.reply.unwrap();
        assert_eq!(reply.id, 3);
        assert_eq!(reply.text, classify("cv"));
    }

    /// Tests blank messages leave the session untouched
    #[tokio::test]
    async fn it_ignores_blank_messages() {
        let app = test_app();
        let session = create_session(&app).await;
        let messages_uri = format!("/api/coach/sessions/{}/messages", session.session_id);

        let (status, resp): (_, SubmitResponse) =
            post_json(&app, &messages_uri, json!({ "message": "   " })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(resp.status, SubmitStatus::Ignored);
        assert!(!resp.pending);
        assert!(resp.message.is_none());

        let (_, current): (_, ConversationResponse) =
            get_json(&app, &format!("/api/coach/sessions/{}", session.session_id)).await;
        assert_eq!(current.transcript.len(), 1);
        assert!(!current.pending);
    }

    /// Tests a second message is rejected while a reply is pending
    #[tokio::test(start_paused = true)]
    async fn it_rejects_messages_while_pending() {
        let app = test_app();
        let session = create_session(&app).await;
        let messages_uri = format!("/api/coach/sessions/{}/messages", session.session_id);

        let (status, _): (_, SubmitResponse) =
            post_json(&app, &messages_uri, json!({ "message": "roadmap" })).await;
        assert_eq!(status, StatusCode::ACCEPTED);

        let (status, resp): (_, SubmitResponse) =
            post_json(&app, &messages_uri, json!({ "message": "resume" })).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(resp.status, SubmitStatus::Busy);

        tokio::time::sleep(RESPONSE_DELAY * 2).await;

        let (_, current): (_, ConversationResponse) =
            get_json(&app, &format!("/api/coach/sessions/{}", session.session_id)).await;
        assert_eq!(current.transcript.len(), 3);
        assert_eq!(current.transcript[1].text, "roadmap");
    }

    /// Tests unknown sessions return 404
    #[tokio::test]
    async fn it_returns_404_for_nonexistent_session() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/coach/sessions/nonexistent-session-id")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_to_string(response.into_body()).await;
        assert!(body.contains("nonexistent-session-id"));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/coach/sessions/nonexistent-session-id/messages")
                    .method("POST")
                    .header("content-type", "application/json")
                    .body(Body::from(json!({ "message": "hello" }).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    /// Tests the quick prompts endpoint
    #[tokio::test]
    async fn it_gets_quick_prompts() {
        let app = test_app();

        let (status, resp): (_, QuickPromptsResponse) = get_json(&app, "/api/coach/prompts").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(resp.prompts.len(), 5);
        assert_eq!(resp.prompts[0], INTERVIEW_PROMPT);
    }

    /// Tests classification without a session
    #[tokio::test]
    async fn it_classifies_messages() {
        let app = test_app();

        let (status, resp): (_, ClassifyResponse) = post_json(
            &app,
            "/api/coach/classify",
            json!({ "message": "Can you help me with interview skills?" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(resp.topic, Topic::Interview);

        let (_, resp): (_, ClassifyResponse) = post_json(
            &app,
            "/api/coach/classify",
            json!({ "message": "What's the weather today?" }),
        )
        .await;
        assert_eq!(resp.topic, Topic::General);
        assert_eq!(resp.response, classify("What's the weather today?"));

        // Classifying doesn't create a session
        let (_, sessions): (_, SessionsResponse) = get_json(&app, "/api/coach/sessions").await;
        assert_eq!(sessions.total_sessions, 0);
    }
}
