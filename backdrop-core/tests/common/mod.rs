// backdrop-core/tests/common/mod.rs
//
// Minimal single-shot HTTP server for exercising the acquirer without
// touching the network. Each helper binds an ephemeral local port, serves
// exactly one response on a background thread, and returns the URL to hit.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

/// Serves one HTTP response, then shuts down.
///
/// `declared_len` lets a test lie about the body length to simulate a
/// transfer truncated by the server.
pub fn serve_once(
    status_line: &'static str,
    content_type: &'static str,
    body: Vec<u8>,
    declared_len: Option<usize>,
) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            consume_request(&mut stream);
            let len = declared_len.unwrap_or(body.len());
            let header = format!(
                "HTTP/1.1 {status_line}\r\n\
                 Content-Type: {content_type}\r\n\
                 Content-Length: {len}\r\n\
                 Connection: close\r\n\r\n"
            );
            let _ = stream.write_all(header.as_bytes());
            let _ = stream.write_all(&body);
            let _ = stream.flush();
        }
    });

    format!("http://{addr}/sample-5s.mp4")
}

/// Accepts one connection and then stalls without ever responding, so a
/// client with a short timeout gives up.
pub fn serve_stalled(stall: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            consume_request(&mut stream);
            thread::sleep(stall);
        }
    });

    format!("http://{addr}/sample-5s.mp4")
}

/// Returns a URL on a port nothing is listening on.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");
    drop(listener);
    format!("http://{addr}/sample-5s.mp4")
}

fn consume_request(stream: &mut TcpStream) {
    let mut buf = [0u8; 1024];
    let mut seen = Vec::new();
    while let Ok(n) = stream.read(&mut buf) {
        if n == 0 {
            break;
        }
        seen.extend_from_slice(&buf[..n]);
        if seen.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }
}
