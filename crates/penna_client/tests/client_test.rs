//! Completion client behavior against a local HTTP endpoint.

use penna_client::{CompletionClient, CompletionDriver};
use penna_error::CompletionErrorKind;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// Serves a single connection with the given status line and body.
async fn one_shot_endpoint(status_line: &'static str, body: &'static str) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    tokio::spawn(async move {
        if let Ok((mut stream, _)) = listener.accept().await {
            let mut request = [0u8; 4096];
            let _ = stream.read(&mut request).await;
            let response = format!(
                "{status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes()).await;
        }
    });
    base_url
}

#[tokio::test]
async fn first_choice_is_extracted_on_success() {
    let base_url = one_shot_endpoint(
        "HTTP/1.1 200 OK",
        r#"{"choices":[{"message":{"role":"assistant","content":"A topic"}}]}"#,
    )
    .await;
    let client = CompletionClient::new("key", "sonar").with_base_url(base_url);

    let text = client.complete("Suggest a topic", 100, 0.7).await.unwrap();
    assert_eq!(text, "A topic");
}

#[tokio::test]
async fn error_status_surfaces_as_upstream_with_body() {
    let base_url = one_shot_endpoint("HTTP/1.1 429 Too Many Requests", "rate limited").await;
    let client = CompletionClient::new("key", "sonar").with_base_url(base_url);

    let err = client.complete("prompt", 100, 0.7).await.unwrap_err();
    match err.kind() {
        CompletionErrorKind::Upstream { status, body } => {
            assert_eq!(*status, 429);
            assert_eq!(body, "rate limited");
        }
        other => panic!("expected upstream error, got {other}"),
    }
}

#[tokio::test]
async fn unparseable_body_is_a_malformed_response() {
    let base_url = one_shot_endpoint("HTTP/1.1 200 OK", "not json at all").await;
    let client = CompletionClient::new("key", "sonar").with_base_url(base_url);

    let err = client.complete("prompt", 100, 0.7).await.unwrap_err();
    assert!(matches!(
        err.kind(),
        CompletionErrorKind::MalformedResponse(_)
    ));
}

#[tokio::test]
async fn empty_choices_is_a_malformed_response() {
    let base_url = one_shot_endpoint("HTTP/1.1 200 OK", r#"{"choices":[]}"#).await;
    let client = CompletionClient::new("key", "sonar").with_base_url(base_url);

    let err = client.complete("prompt", 100, 0.7).await.unwrap_err();
    assert!(matches!(
        err.kind(),
        CompletionErrorKind::MalformedResponse(_)
    ));
}

#[tokio::test]
async fn refused_connection_surfaces_as_transport_error() {
    // Bind then drop to obtain a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = CompletionClient::new("key", "sonar").with_base_url(format!("http://{addr}"));
    let err = client.complete("prompt", 100, 0.7).await.unwrap_err();
    assert!(matches!(err.kind(), CompletionErrorKind::Transport(_)));
}
