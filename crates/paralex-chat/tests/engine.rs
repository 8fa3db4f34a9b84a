use paralex_chat::{ChatEngine, ChatError, ChatEvent};
use paralex_core::models::{ChatRole, Conversation, MessageContent, ToolName};
use paralex_openai::OpenAiClient;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;

// Port 1 is never listening, so the upstream call fails immediately
// without touching the network beyond loopback.
fn unreachable_engine() -> ChatEngine {
    let client = OpenAiClient::with_base_url("sk-test", "http://127.0.0.1:1").unwrap();
    ChatEngine::new(client, "gpt-4")
}

/// Serve exactly one request on `listener`, answering with `body` as a
/// complete SSE response, then close the connection.
async fn serve_one_sse(listener: TcpListener, body: String) {
    let (socket, _) = listener.accept().await.unwrap();
    handle(socket, &body).await;
}

async fn handle(mut socket: TcpStream, body: &str) {
    // Drain the request (headers plus content-length body) before
    // answering, so the client never sees a closed write side mid-send.
    let mut request = Vec::new();
    let mut chunk = [0u8; 4096];
    let (header_end, content_length) = loop {
        let n = socket.read(&mut chunk).await.unwrap();
        assert!(n > 0, "client closed before sending a full request");
        request.extend_from_slice(&chunk[..n]);
        if let Some(pos) = request.windows(4).position(|w| w == b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&request[..pos]);
            let length = headers
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())?
                })
                .unwrap_or(0);
            break (pos + 4, length);
        }
    };
    while request.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.unwrap();
        assert!(n > 0, "client closed before sending the full body");
        request.extend_from_slice(&chunk[..n]);
    }

    let response = format!(
        "HTTP/1.1 200 OK\r\ncontent-type: text/event-stream\r\nconnection: close\r\ncontent-length: {}\r\n\r\n{body}",
        body.len()
    );
    socket.write_all(response.as_bytes()).await.unwrap();
    let _ = socket.shutdown().await;
}

/// Engine pointed at a local one-shot server that replies with `body`.
async fn mock_engine(body: String) -> ChatEngine {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(serve_one_sse(listener, body));

    let client = OpenAiClient::with_base_url("sk-test", &format!("http://{addr}")).unwrap();
    ChatEngine::new(client, "gpt-4")
}

fn sse_body(chunks: &[serde_json::Value]) -> String {
    let mut body = String::new();
    for chunk in chunks {
        body.push_str(&format!("data: {chunk}\n\n"));
    }
    body.push_str("data: [DONE]\n\n");
    body
}

async fn drain(mut rx: mpsc::Receiver<ChatEvent>) -> Vec<ChatEvent> {
    let mut events = Vec::new();
    while let Some(event) = rx.recv().await {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn user_message_is_recorded_before_the_upstream_call() {
    let engine = unreachable_engine();
    let mut conversation = Conversation::new();
    let (tx, _rx) = mpsc::channel(8);

    let result = engine
        .send_message(&mut conversation, "What are my legal rights?", tx)
        .await;

    assert!(matches!(result, Err(ChatError::Upstream(_))));
    assert_eq!(conversation.len(), 1, "the user's own message must survive the failure");
    assert_eq!(
        conversation.messages()[0].text(),
        Some("What are my legal rights?")
    );
}

#[tokio::test]
async fn failed_turn_appends_nothing_else() {
    let engine = unreachable_engine();
    let mut conversation = Conversation::new();
    conversation.push_user("Earlier question");
    conversation.push_assistant("Earlier answer");
    let (tx, _rx) = mpsc::channel(8);

    let _ = engine.send_message(&mut conversation, "Follow-up", tx).await;

    assert_eq!(conversation.len(), 3);
    assert_eq!(conversation.messages()[2].text(), Some("Follow-up"));
}

#[tokio::test]
async fn streamed_tokens_become_one_assistant_message() {
    let body = sse_body(&[
        serde_json::json!({"choices":[{"delta":{"content":"You have "},"finish_reason":null}]}),
        serde_json::json!({"choices":[{"delta":{"content":"several options."},"finish_reason":null}]}),
        serde_json::json!({"choices":[{"delta":{},"finish_reason":"stop"}]}),
    ]);
    let engine = mock_engine(body).await;
    let mut conversation = Conversation::new();
    let (tx, rx) = mpsc::channel(32);

    engine
        .send_message(&mut conversation, "What can I do?", tx)
        .await
        .unwrap();
    let events = drain(rx).await;

    assert_eq!(conversation.len(), 2);
    assert_eq!(conversation.messages()[0].text(), Some("What can I do?"));
    assert_eq!(
        conversation.messages()[1].text(),
        Some("You have several options.")
    );

    let tokens: Vec<&str> = events
        .iter()
        .filter_map(|e| match e {
            ChatEvent::Token { text } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(tokens, vec!["You have ", "several options."]);
    assert!(matches!(events.last(), Some(ChatEvent::Done)));
}

#[tokio::test]
async fn streamed_tool_call_fragments_resolve_into_a_tool_exchange() {
    // The id and function name arrive on the first fragment; the argument
    // JSON is split across the following ones.
    let body = sse_body(&[
        serde_json::json!({"choices":[{"delta":{"tool_calls":[
            {"index":0,"id":"call_9","function":{"name":"explainLegalTerm","arguments":""}}
        ]},"finish_reason":null}]}),
        serde_json::json!({"choices":[{"delta":{"tool_calls":[
            {"index":0,"function":{"arguments":"{\"term\":\"breach"}}
        ]},"finish_reason":null}]}),
        serde_json::json!({"choices":[{"delta":{"tool_calls":[
            {"index":0,"function":{"arguments":" of contract\"}"}}
        ]},"finish_reason":null}]}),
        serde_json::json!({"choices":[{"delta":{},"finish_reason":"tool_calls"}]}),
    ]);
    let engine = mock_engine(body).await;
    let mut conversation = Conversation::new();
    let (tx, rx) = mpsc::channel(32);

    engine
        .send_message(&mut conversation, "Explain breach of contract", tx)
        .await
        .unwrap();
    let events = drain(rx).await;

    // user message + tool call record + its matching result
    assert_eq!(conversation.len(), 3);
    let messages = conversation.messages();
    assert_eq!(messages[0].text(), Some("Explain breach of contract"));

    assert_eq!(messages[1].role, ChatRole::Assistant);
    let MessageContent::ToolCall { id: call_id, name, arguments } = &messages[1].content else {
        panic!("expected a tool call record, got {:?}", messages[1].content);
    };
    assert_eq!(call_id, "call_9");
    assert_eq!(*name, ToolName::ExplainLegalTerm);
    assert_eq!(arguments["term"], "breach of contract");

    assert_eq!(messages[2].role, ChatRole::Tool);
    let MessageContent::ToolResult { id: result_id, result, .. } = &messages[2].content else {
        panic!("expected a tool result record, got {:?}", messages[2].content);
    };
    assert_eq!(result_id, "call_9");
    assert!(result.contains("breach of contract"));

    // The turn is rendered as a tool view, never as streamed tokens.
    assert_eq!(events.len(), 2);
    let ChatEvent::Tool { rendering } = &events[0] else {
        panic!("expected a tool event first, got {:?}", events[0]);
    };
    assert!(rendering.body.contains("breach of contract"));
    assert!(matches!(events[1], ChatEvent::Done));
}
