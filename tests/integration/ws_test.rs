//! WebSocket hub tests against a live server.

use std::time::Duration;

use futures::{SinkExt, StreamExt};
use serde_json::Value;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

use crate::helpers::TestApp;

type Client = tokio_tungstenite::WebSocketStream<
    tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>,
>;

async fn connect(addr: std::net::SocketAddr, user: Option<&str>) -> Client {
    let url = match user {
        Some(name) => format!("ws://{addr}/ws?user={name}"),
        None => format!("ws://{addr}/ws"),
    };
    let (stream, _) = connect_async(url).await.expect("ws connect");
    stream
}

/// Reads frames until a JSON text message arrives.
async fn next_json(client: &mut Client) -> Value {
    loop {
        let frame = tokio::time::timeout(Duration::from_secs(5), client.next())
            .await
            .expect("message before timeout")
            .expect("stream open")
            .expect("frame");
        if let Message::Text(_) = frame {
            return serde_json::from_str(frame.to_text().expect("text")).expect("json");
        }
    }
}

/// Reads user list updates until one matches `expected_len` entries.
async fn user_list_with_len(client: &mut Client, expected_len: usize) -> Value {
    loop {
        let msg = next_json(client).await;
        if msg["type"] == "user_list_update"
            && msg["users"].as_array().map(Vec::len) == Some(expected_len)
        {
            return msg;
        }
    }
}

#[tokio::test]
async fn test_connect_receives_own_presence() {
    let (addr, _state) = TestApp::new().spawn().await;

    let mut alice = connect(addr, Some("Alice")).await;
    let msg = next_json(&mut alice).await;

    assert_eq!(msg["type"], "user_list_update");
    assert_eq!(msg["users"][0]["user_name"], "Alice");
    assert_eq!(msg["users"][0]["status"], "Online");
}

#[tokio::test]
async fn test_status_update_and_disconnect_propagate() {
    let (addr, state) = TestApp::new().spawn().await;

    let mut alice = connect(addr, Some("Alice")).await;
    let mut bob = connect(addr, Some("Bob")).await;
    user_list_with_len(&mut alice, 2).await;
    user_list_with_len(&mut bob, 2).await;

    alice
        .send(Message::Text(
            r#"{"type":"update_status","status":"Away"}"#.into(),
        ))
        .await
        .expect("send");

    loop {
        let msg = user_list_with_len(&mut bob, 2).await;
        if msg["users"][0]["status"] == "Away" {
            assert_eq!(msg["users"][0]["user_name"], "Alice");
            break;
        }
    }

    alice.close(None).await.expect("close");
    let msg = user_list_with_len(&mut bob, 1).await;
    assert_eq!(msg["users"][0]["user_name"], "Bob");
    assert_eq!(state.realtime.connections.connection_count(), 1);
}

#[tokio::test]
async fn test_anonymous_client_is_not_listed() {
    let (addr, state) = TestApp::new().spawn().await;

    let mut anon = connect(addr, None).await;
    let msg = next_json(&mut anon).await;

    assert_eq!(msg["type"], "user_list_update");
    assert_eq!(msg["users"], serde_json::json!([]));
    assert_eq!(state.realtime.connections.connection_count(), 1);
}

#[tokio::test]
async fn test_malformed_message_gets_error_reply() {
    let (addr, _state) = TestApp::new().spawn().await;

    let mut alice = connect(addr, Some("Alice")).await;
    next_json(&mut alice).await;

    alice
        .send(Message::Text("not json".into()))
        .await
        .expect("send");

    let reply = next_json(&mut alice).await;
    assert_eq!(reply["type"], "error");
    assert_eq!(reply["code"], "INVALID_MESSAGE");
}
