// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Shared helpers for the e2e tests: a canned-response HTTP server on a real
//! TCP listener. No mocking framework; the probe talks to an actual socket.

use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

pub struct TestServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Serve the given canned HTTP responses, one connection per response,
    /// then stop listening. Later connection attempts are refused, which is
    /// exactly what the halt-on-transport-failure tests rely on.
    pub fn serve(responses: Vec<String>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind test listener");
        let addr = listener.local_addr().expect("failed to read listener addr");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = requests.clone();

        let handle = thread::spawn(move || {
            for response in responses {
                let (stream, _) = match listener.accept() {
                    Ok(conn) => conn,
                    Err(_) => return,
                };
                handle_connection(stream, &response, &seen);
            }
        });

        Self {
            addr,
            requests,
            handle,
        }
    }

    /// Endpoint URL for the probe under test.
    pub fn endpoint(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Wait until every canned response has been served and return the
    /// request targets (path + query) in arrival order.
    pub fn finish(self) -> Vec<String> {
        self.handle.join().expect("test server thread panicked");
        let requests = self.requests.lock().expect("requests lock poisoned");
        requests.clone()
    }
}

fn handle_connection(mut stream: TcpStream, response: &str, seen: &Arc<Mutex<Vec<String>>>) {
    let mut reader = BufReader::new(stream.try_clone().expect("failed to clone stream"));

    let mut request_line = String::new();
    reader
        .read_line(&mut request_line)
        .expect("failed to read request line");

    // Drain the headers; probe requests carry no body.
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).expect("failed to read header");
        if line == "\r\n" || line.is_empty() {
            break;
        }
    }

    let target = request_line
        .split_whitespace()
        .nth(1)
        .unwrap_or_default()
        .to_string();
    seen.lock().expect("requests lock poisoned").push(target);

    stream
        .write_all(response.as_bytes())
        .expect("failed to write response");
    stream.flush().expect("failed to flush response");
}

/// A minimal, well-formed HTTP/1.1 response. `connection: close` keeps the
/// client from reusing the socket, so each probe shows up as one accept.
pub fn http_response(status: u16, reason: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status} {reason}\r\n\
         content-type: application/json\r\n\
         content-length: {}\r\n\
         connection: close\r\n\
         \r\n\
         {body}",
        body.len()
    )
}
