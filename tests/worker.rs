#[cfg(test)]
mod tests {
    use schedboard::api::worker::{SourceError, Worker};
    use schedboard::libs::config::SourceConfig;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Serves exactly one HTTP response and reports the request line it saw.
    async fn serve_once(status: &str, body: &str) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/schedule", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|window| window == b"\r\n\r\n") {
                let n = stream.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let text = String::from_utf8_lossy(&request);
            let _ = tx.send(text.lines().next().unwrap_or_default().to_string());
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
        });

        (url, rx)
    }

    fn worker(url: &str) -> Worker {
        Worker::new(&SourceConfig {
            url: url.to_string(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_parses_payload() {
        let body = r#"{"v":1,"tz":"Asia/Seoul","day":"2025-03-01","fetchedAt":1740798000000,"ttlMs":60000,"refreshed":false,"items":[{"id":"a","title":"Lane 1","startMs":0,"endMs":60000,"type":"lane"}]}"#;
        let (url, request_line) = serve_once("200 OK", body).await;

        let payload = worker(&url).fetch(false).await.unwrap();
        assert_eq!(payload.day.as_deref(), Some("2025-03-01"));
        assert_eq!(payload.ttl_ms, Some(60_000));
        assert_eq!(payload.refreshed, Some(false));
        assert_eq!(payload.items.map(|items| items.len()), Some(1));

        let request_line = request_line.await.unwrap();
        assert!(request_line.starts_with("GET /schedule "));
        assert!(!request_line.contains("force"));
    }

    #[tokio::test]
    async fn test_force_sends_query() {
        let (url, request_line) = serve_once("200 OK", "{}").await;

        worker(&url).fetch(true).await.unwrap();
        assert!(request_line.await.unwrap().contains("/schedule?force=1"));
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let (url, _) = serve_once("502 Bad Gateway", r#"{"error":"upstream"}"#).await;

        let error = worker(&url).fetch(false).await.unwrap_err();
        assert!(matches!(error, SourceError::Status(502)));
        assert_eq!(error.status().map(|status| status.as_u16()), Some(502));
        assert_eq!(error.to_string(), "HTTP 502");
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let (url, _) = serve_once("200 OK", "<html>maintenance</html>").await;

        let error = worker(&url).fetch(false).await.unwrap_err();
        assert!(matches!(error, SourceError::Parse(_)));
        assert!(error.status().is_none());
    }

    #[tokio::test]
    async fn test_unreachable_worker() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/schedule", listener.local_addr().unwrap());
        drop(listener);

        let error = worker(&url).fetch(false).await.unwrap_err();
        assert!(matches!(error, SourceError::Transport(_)));
    }
}
