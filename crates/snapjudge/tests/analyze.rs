//! End-to-end tests against a stubbed Responses API.
//!
//! Run with: cargo test -p snapjudge --test analyze

mod common;

use common::{analyzer_for, mockup_image, verdict_json, TEST_KEY};
use mockito::{Matcher, Server};
use serde_json::json;
use snapjudge::{AnalysisError, Analyzer, AnalyzerConfig, Decision, ReplyShape};

#[tokio::test]
async fn test_flattened_reply_yields_go() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/responses")
        .match_header("authorization", format!("Bearer {}", TEST_KEY).as_str())
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "model": "gpt-4.1-mini",
            "max_output_tokens": 500
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "output_text": verdict_json() }).to_string())
        .expect(1)
        .create_async()
        .await;

    let analyzer = analyzer_for(&server, TEST_KEY);
    let result = analyzer.analyze(&mockup_image()).await.unwrap();

    assert_eq!(result.decision(), Decision::Go);
    assert_eq!(result.feasibility_score(), 80);
    assert_eq!(result.idea_title(), "T");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_request_carries_text_then_low_detail_image() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/responses")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#""type":"input_text""#.to_string()),
            Matcher::Regex(r#""image_url":"data:image/jpeg;base64,[A-Za-z0-9+/=]+""#.to_string()),
            Matcher::Regex(r#""detail":"low""#.to_string()),
        ]))
        .with_status(200)
        .with_body(json!({ "output_text": verdict_json() }).to_string())
        .create_async()
        .await;

    let analyzer = analyzer_for(&server, TEST_KEY);
    analyzer.analyze(&mockup_image()).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_nested_reply_shape() {
    let mut server = Server::new_async().await;
    let body = json!({
        "id": "resp_abc",
        "output": [{
            "type": "message",
            "role": "assistant",
            "content": [{ "type": "output_text", "text": format!("```json\n{}\n```", verdict_json()) }]
        }]
    });
    let _mock = server
        .mock("POST", "/v1/responses")
        .with_status(200)
        .with_body(body.to_string())
        .create_async()
        .await;

    let analyzer = analyzer_for(&server, TEST_KEY);
    let result = analyzer.analyze(&mockup_image()).await.unwrap();
    assert_eq!(result.decision(), Decision::Go);
    assert_eq!(result.complexity_level(), 2);
}

#[tokio::test]
async fn test_server_error_is_invalid_response() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/responses")
        .with_status(500)
        .with_body(json!({ "output_text": verdict_json() }).to_string())
        .create_async()
        .await;

    let analyzer = analyzer_for(&server, TEST_KEY);
    let err = analyzer.analyze(&mockup_image()).await.unwrap_err();
    match err {
        AnalysisError::InvalidResponse { status, .. } => assert_eq!(status, Some(500)),
        other => panic!("Expected InvalidResponse, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_body_not_surfaced() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/responses")
        .with_status(401)
        .with_body(r#"{"error":{"message":"Incorrect API key provided: sk-test-0123456789abcdef"}}"#)
        .create_async()
        .await;

    let analyzer = analyzer_for(&server, TEST_KEY);
    let err = analyzer.analyze(&mockup_image()).await.unwrap_err();
    let message = err.to_string();
    assert!(!message.contains("Incorrect API key"));
    assert!(!message.contains(TEST_KEY));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_empty_key_makes_no_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .with_status(200)
        .expect(0)
        .create_async()
        .await;

    let analyzer = analyzer_for(&server, "");
    let err = analyzer.analyze(&mockup_image()).await.unwrap_err();
    assert!(matches!(err, AnalysisError::MissingApiKey));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_reply_without_text() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/responses")
        .with_status(200)
        .with_body(json!({ "id": "resp_abc", "status": "incomplete", "output": [] }).to_string())
        .create_async()
        .await;

    let analyzer = analyzer_for(&server, TEST_KEY);
    let err = analyzer.analyze(&mockup_image()).await.unwrap_err();
    assert!(matches!(err, AnalysisError::NoOutputText));
}

#[tokio::test]
async fn test_non_json_success_body() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/responses")
        .with_status(200)
        .with_body("upstream timeout")
        .create_async()
        .await;

    let analyzer = analyzer_for(&server, TEST_KEY);
    let err = analyzer.analyze(&mockup_image()).await.unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidResponse { status: None, .. }));
}

#[tokio::test]
async fn test_truncated_model_json() {
    let mut server = Server::new_async().await;
    let truncated = &verdict_json()[..60];
    let _mock = server
        .mock("POST", "/v1/responses")
        .with_status(200)
        .with_body(json!({ "output_text": truncated }).to_string())
        .create_async()
        .await;

    let analyzer = analyzer_for(&server, TEST_KEY);
    let err = analyzer.analyze(&mockup_image()).await.unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidJson(_)));
}

#[tokio::test]
async fn test_analyze_bytes_round_trip() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/responses")
        .with_status(200)
        .with_body(json!({ "output_text": verdict_json().replace("\"go\"", "\"nogo\"") }).to_string())
        .create_async()
        .await;

    let mut png = Vec::new();
    mockup_image().write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)?;

    let analyzer = analyzer_for(&server, TEST_KEY);
    let result = analyzer.analyze_bytes(&png).await?;
    assert_eq!(result.decision(), Decision::NoGo);
    Ok(())
}

#[tokio::test]
async fn test_silent_server_times_out() {
    common::init_tracing();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    // Accept and hold connections without ever answering.
    let holder = tokio::spawn(async move {
        let mut open = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            open.push(socket);
        }
    });

    let config = AnalyzerConfig::new(TEST_KEY)
        .with_base_url(format!("http://{}", addr))
        .with_timeout_secs(1);
    let err = Analyzer::new(config).analyze(&mockup_image()).await.unwrap_err();

    assert!(matches!(err, AnalysisError::Timeout(1)), "got: {err:?}");
    assert!(err.is_retryable());
    holder.abort();
}

#[tokio::test]
async fn test_refused_connection_is_transport_error() {
    common::init_tracing();
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let config = AnalyzerConfig::new(TEST_KEY)
        .with_base_url(format!("http://127.0.0.1:{}", port))
        .with_timeout_secs(5);
    let err = Analyzer::new(config).analyze(&mockup_image()).await.unwrap_err();

    assert!(matches!(err, AnalysisError::Transport(_)), "got: {err:?}");
    assert!(err.is_retryable());
}

#[test]
fn test_reply_shape_classification() {
    let envelope = snapjudge::RawReplyEnvelope::new(json!({ "output_text": "X" }));
    assert_eq!(envelope.shape(), ReplyShape::Flattened("X".to_string()));
}
