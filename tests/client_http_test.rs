use messagebird_voice::types::{CallFlow, CallStatus};
use messagebird_voice::{CallInitiator, Client, Config, VoiceError};
use reqwest::StatusCode;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serves exactly one HTTP exchange on a loopback port and returns the raw
/// request it received.
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut received = Vec::new();
        let mut buf = [0u8; 4096];

        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            received.extend_from_slice(&buf[..n]);
            if request_complete(&received) {
                break;
            }
        }

        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        String::from_utf8(received).unwrap()
    });

    (base_url, handle)
}

fn request_complete(received: &[u8]) -> bool {
    let text = String::from_utf8_lossy(received);
    let Some(header_end) = text.find("\r\n\r\n") else {
        return false;
    };
    let content_length = text[..header_end]
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);
    received.len() >= header_end + 4 + content_length
}

fn request_body(raw: &str) -> serde_json::Value {
    let (_, body) = raw.split_once("\r\n\r\n").unwrap();
    serde_json::from_str(body).unwrap()
}

fn test_flow() -> CallFlow {
    CallFlow::builder()
        .with_title("Test flow")
        .with_say(
            "female",
            "Hey you, a little bird told me you wanted a call!",
            "en-GB",
        )
        .build()
}

fn client_for(base_url: &str) -> Client {
    Client::new(
        Config::builder()
            .with_base_url(base_url)
            .with_api_key("test_key")
            .build(),
    )
}

#[tokio::test]
async fn test_created_call_is_returned() {
    // --- Arrange ---
    let (base_url, server) = serve_once(
        "201 Created",
        r#"{"data":[{"id":"abc","status":"queued","source":"31644556677","destination":"31612345678"}]}"#,
    )
    .await;
    let initiator = CallInitiator::new(client_for(&base_url));

    // --- Act ---
    let call = initiator
        .run("31644556677", "31612345678", test_flow(), None)
        .await;

    // --- Assert ---
    let call = call.expect("call should be created");
    assert_eq!(call.id(), "abc");
    assert_eq!(call.status(), Some(&CallStatus::Queued));

    let raw = server.await.unwrap();
    assert!(raw.starts_with("POST /calls HTTP/1.1"), "{raw}");
    assert!(raw.to_ascii_lowercase().contains("authorization: accesskey test_key"), "{raw}");

    let body = request_body(&raw);
    assert_eq!(body["source"], "31644556677");
    assert_eq!(body["destination"], "31612345678");
    assert_eq!(body["callFlow"]["title"], "Test flow");
    assert_eq!(
        body["callFlow"]["steps"],
        serde_json::json!([{
            "action": "say",
            "options": {
                "payload": "Hey you, a little bird told me you wanted a call!",
                "voice": "female",
                "language": "en-GB"
            }
        }])
    );
}

#[tokio::test]
async fn test_error_document_is_api_error() {
    // --- Arrange ---
    let (base_url, server) = serve_once(
        "422 Unprocessable Entity",
        r#"{"errors":[{"code":13,"message":"invalid source number"}]}"#,
    )
    .await;
    let client = client_for(&base_url);

    // --- Act ---
    let result = client.initiate_call_with("", "", test_flow(), None).await;

    // --- Assert ---
    match result {
        Err(VoiceError::Api { status, errors }) => {
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
            assert_eq!(errors.errors()[0].code(), 13);
            assert_eq!(errors.errors()[0].message(), "invalid source number");
        }
        other => panic!("unexpected result: {other:?}"),
    }

    let body = request_body(&server.await.unwrap());
    assert_eq!(body["source"], "");
    assert_eq!(body["destination"], "");
    assert!(body.get("webhook").is_none());
}
