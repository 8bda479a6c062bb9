//! End-to-end tests against a real listener on a loopback port

use std::net::SocketAddr;

use tallyhttp::http::response::{FILE_NOT_FOUND_BODY, NOT_FOUND_BODY};
use tallyhttp::server::listener::{bind, serve};
use tallyhttp::server::{ServerContext, TokioSpawner};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

async fn start(ctx: ServerContext) -> SocketAddr {
    let listener = bind("127.0.0.1:0".parse().unwrap()).unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(serve(listener, ctx, TokioSpawner));
    addr
}

async fn get(addr: SocketAddr, path: &str) -> (String, Vec<u8>) {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!("GET {} HTTP/1.1\r\nHost: localhost\r\n\r\n", path);
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();

    let split = raw.windows(4).position(|w| w == b"\r\n\r\n").unwrap();
    let head = String::from_utf8(raw[..split].to_vec()).unwrap();
    (head, raw[split + 4..].to_vec())
}

fn requests_reported(body: &[u8]) -> u64 {
    let body = std::str::from_utf8(body).unwrap();
    let start = body.find("Requests: ").unwrap() + "Requests: ".len();
    let end = start + body[start..].find('<').unwrap();
    body[start..end].parse().unwrap()
}

#[tokio::test]
async fn test_server_calc() {
    let addr = start(ServerContext::default()).await;

    let (head, body) = get(addr, "/calc?a=20&b=22").await;
    assert!(head.starts_with("HTTP/1.1 200 OK"));
    assert!(head.contains("Content-Type: text/html"));
    assert!(String::from_utf8(body).unwrap().contains("20 + 22 = 42"));

    let (_, body) = get(addr, "/calc").await;
    assert!(String::from_utf8(body).unwrap().contains("0 + 0 = 0"));
}

#[tokio::test]
async fn test_server_static_files() {
    let dir = tempfile::tempdir().unwrap();
    let contents: Vec<u8> = (0..5000u32).map(|i| (i % 251) as u8).collect();
    std::fs::write(dir.path().join("data.bin"), &contents).unwrap();
    let addr = start(ServerContext::new(dir.path())).await;

    let (head, body) = get(addr, "/static/data.bin").await;
    assert!(head.starts_with("HTTP/1.1 200 OK"));
    assert!(head.contains("Content-Type: application/octet-stream"));
    assert!(head.contains(&format!("Content-Length: {}", contents.len())));
    assert_eq!(body, contents);

    let (head, body) = get(addr, "/static/missing.bin").await;
    assert!(head.starts_with("HTTP/1.1 404 Not Found"));
    assert_eq!(body, FILE_NOT_FOUND_BODY.as_bytes());
}

#[tokio::test]
async fn test_server_unknown_path() {
    let addr = start(ServerContext::default()).await;

    let (head, body) = get(addr, "/index.html").await;
    assert!(head.starts_with("HTTP/1.1 404 Not Found"));
    assert_eq!(body, NOT_FOUND_BODY.as_bytes());
}

#[tokio::test]
async fn test_server_stats_after_requests() {
    let ctx = ServerContext::default();
    let addr = start(ctx.clone()).await;

    let (_, body) = get(addr, "/stats").await;
    let baseline = requests_reported(&body);

    for _ in 0..5 {
        get(addr, "/calc?a=1&b=1").await;
    }

    let (_, body) = get(addr, "/stats").await;
    assert_eq!(requests_reported(&body), baseline + 6);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_server_concurrent_requests_keep_exact_count() {
    const CLIENTS: usize = 64;

    let ctx = ServerContext::default();
    let addr = start(ctx.clone()).await;

    let clients: Vec<_> = (0..CLIENTS)
        .map(|i| tokio::spawn(async move { get(addr, &format!("/calc?a={}&b=1", i)).await }))
        .collect();

    let mut sent_total = 0u64;
    for client in clients {
        let (head, body) = client.await.unwrap();
        sent_total += (head.len() + 4 + body.len()) as u64;
    }

    let snap = ctx.metrics().snapshot();
    assert_eq!(snap.requests, CLIENTS as u64);
    assert_eq!(snap.bytes_sent, sent_total);
}

#[tokio::test]
async fn test_server_silent_client_gets_no_response() {
    let ctx = ServerContext::default();
    let addr = start(ctx.clone()).await;

    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.shutdown().await.unwrap();
    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();

    assert!(raw.is_empty());
    assert_eq!(ctx.metrics().snapshot().requests, 0);
}

#[tokio::test]
async fn test_bind_rebinds_after_close() {
    let listener = bind("127.0.0.1:0".parse().unwrap()).unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    assert!(bind(addr).is_ok());
}
