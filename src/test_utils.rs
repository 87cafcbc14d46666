//! Test utilities for common test setup.
//!
//! This module provides shared test helpers used across multiple test modules.

#[cfg(test)]
use crate::state::{AppState, ListView, Recipe};

#[cfg(test)]
/// What: Provide a baseline `AppState` for handler tests.
///
/// Inputs: None
///
/// Output: Fresh `AppState` with default values
pub fn new_app() -> AppState {
    AppState::default()
}

#[cfg(test)]
/// What: Build `n` recipes titled `Recipe 0..n` with a shared cuisine.
pub fn sample_recipes(n: usize) -> Vec<Recipe> {
    (0..n)
        .map(|i| Recipe {
            title: Some(format!("Recipe {i}")),
            cuisine: Some("Test Kitchen".into()),
            rating: Some("4.5".into()),
            total_time: Some("30".into()),
            serves: Some("4".into()),
            ..Default::default()
        })
        .collect()
}

#[cfg(test)]
/// What: Provide an `AppState` that already shows a table of `n` records.
///
/// Details:
/// - Mirrors what a successful first-page response leaves behind.
pub fn app_with_table(n: usize) -> AppState {
    let mut app = AppState::default();
    app.cache.publish(1, sample_recipes(n));
    app.list_view = ListView::Table;
    app.latest_query_id = 1;
    app.next_query_id = 2;
    if n > 0 {
        app.table_state.select(Some(0));
    }
    app
}

#[cfg(test)]
/// What: Serve exactly one HTTP response on a loopback port.
///
/// Inputs:
/// - `status_line`: e.g. `"200 OK"` or `"500 Internal Server Error"`
/// - `body`: Response body (sent as JSON)
///
/// Output:
/// - Base URL of the stub and a handle resolving to the request line that was received.
///
/// Details:
/// - The connection is closed after the single response.
pub async fn http_stub(
    status_line: &'static str,
    body: &'static str,
) -> (String, tokio::task::JoinHandle<String>) {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    let handle = tokio::spawn(async move {
        let (mut sock, _) = listener.accept().await.expect("accept");
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = sock.read(&mut chunk).await.expect("read request");
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }
        let request = String::from_utf8_lossy(&buf).to_string();
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        sock.write_all(response.as_bytes())
            .await
            .expect("write response");
        let _ = sock.shutdown().await;
        request.lines().next().unwrap_or_default().to_string()
    });
    (format!("http://{addr}"), handle)
}
