//! In-process stand-in for the vault service.
//!
//! Serves one canned response per connection, in order, and records each
//! request it sees.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

/// A request received by [`FakeVault`].
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: serde_json::Value,
}

/// Loopback HTTP server answering with queued responses.
pub struct FakeVault {
    url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl FakeVault {
    /// Start serving `responses` (status, body), one per request.
    pub fn start(responses: Vec<(u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind fake vault");
        let url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&requests);
        thread::spawn(move || {
            for (status, body) in responses {
                let Ok((stream, _)) = listener.accept() else {
                    return;
                };
                let mut reader = BufReader::new(stream);

                let mut request_line = String::new();
                reader.read_line(&mut request_line).unwrap();
                let mut parts = request_line.split_whitespace();
                let method = parts.next().unwrap_or_default().to_string();
                let path = parts.next().unwrap_or_default().to_string();

                let mut content_length = 0usize;
                let mut content_type = None;
                loop {
                    let mut line = String::new();
                    reader.read_line(&mut line).unwrap();
                    let line = line.trim_end();
                    if line.is_empty() {
                        break;
                    }
                    if let Some((name, value)) = line.split_once(':') {
                        let name = name.trim().to_ascii_lowercase();
                        if name == "content-length" {
                            content_length = value.trim().parse().unwrap_or(0);
                        } else if name == "content-type" {
                            content_type = Some(value.trim().to_string());
                        }
                    }
                }

                let mut raw = vec![0u8; content_length];
                reader.read_exact(&mut raw).unwrap();
                let body_json = serde_json::from_slice(&raw).unwrap_or(serde_json::Value::Null);

                recorded.lock().unwrap().push(Recorded {
                    method,
                    path,
                    content_type,
                    body: body_json,
                });

                let reply = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    if status < 400 { "OK" } else { "Error" },
                    body.len(),
                    body
                );
                let mut stream = reader.into_inner();
                let _ = stream.write_all(reply.as_bytes());
                let _ = stream.flush();
            }
        });

        Self { url, requests }
    }

    /// A vault that answers one `/pull` with `blob`.
    pub fn pulling(blob: &str) -> Self {
        Self::start(vec![(200, pull_body(blob))])
    }

    /// Base URL to pass as `--api-url`.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    /// Paths of requests received so far.
    pub fn paths(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.path).collect()
    }
}

/// Successful `/pull` envelope around `blob`.
pub fn pull_body(blob: &str) -> String {
    serde_json::json!({ "data": { "dotenv": blob } }).to_string()
}

/// Structured error body with the given messages.
pub fn errors_body(messages: &[&str]) -> String {
    let errors: Vec<_> = messages
        .iter()
        .map(|m| serde_json::json!({ "message": m }))
        .collect();
    serde_json::json!({ "errors": errors }).to_string()
}
