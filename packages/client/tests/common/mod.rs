//! Shared fixtures: a scripted transport and a one-shot loopback origin.

#![allow(dead_code)]

use std::cell::RefCell;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener};
use std::thread::{self, JoinHandle};

use webcache_client::error::{self, Result};
use webcache_client::{HttpRequest, RawResponse, Transport};

/// Replays canned responses and records every request it is handed.
#[derive(Debug)]
pub struct ScriptedTransport {
    responses: RefCell<Vec<Result<RawResponse>>>,
    pub requests: RefCell<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new(responses: Vec<Result<RawResponse>>) -> Self {
        Self {
            responses: RefCell::new(responses),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn replying(raw: &'static [u8]) -> Self {
        Self::new(vec![Ok(RawResponse::complete(raw))])
    }

    pub fn calls(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl Transport for ScriptedTransport {
    fn fetch(&self, request: &HttpRequest) -> Result<RawResponse> {
        self.requests.borrow_mut().push(request.as_str().to_string());
        let mut responses = self.responses.borrow_mut();
        if responses.is_empty() {
            return Err(error::connect(&request.authority(), "no scripted response left"));
        }
        responses.remove(0)
    }
}

/// Accepts `connections` connections on 127.0.0.1, answers each with
/// `response` and returns the requests it read.
pub fn spawn_origin(
    response: &'static [u8],
    connections: usize,
) -> (SocketAddr, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");

    let handle = thread::spawn(move || {
        let mut seen = Vec::new();
        for _ in 0..connections {
            let (mut stream, _) = listener.accept().expect("accept");
            let mut request = Vec::new();
            let mut buf = [0u8; 256];
            while !request.ends_with(b"\r\n\r\n") {
                let n = stream.read(&mut buf).expect("read request");
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            stream.write_all(response).expect("write response");
            seen.push(String::from_utf8_lossy(&request).into_owned());
            // Dropping the stream closes the connection.
        }
        seen
    });

    (addr, handle)
}
