#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use assert_cmd::Command;

/// One request as the responder saw it.
#[derive(Debug)]
pub struct Seen {
    pub method: String,
    pub path: String,
}

/// Serve `responses` (status, JSON body) one connection each, in order.
pub fn serve(responses: Vec<(u16, String)>) -> (String, JoinHandle<Vec<Seen>>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let base = format!("http://{}", listener.local_addr().expect("addr"));

    let handle = thread::spawn(move || {
        let mut seen = Vec::new();
        for (status, body) in responses {
            let (stream, _) = listener.accept().expect("accept");
            let mut reader = BufReader::new(stream.try_clone().expect("clone"));

            let mut request_line = String::new();
            reader.read_line(&mut request_line).expect("request line");
            let mut parts = request_line.split_whitespace();
            let method = parts.next().unwrap_or_default().to_string();
            let path = parts.next().unwrap_or_default().to_string();

            let mut headers = HashMap::new();
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).expect("header");
                let line = line.trim_end();
                if line.is_empty() {
                    break;
                }
                if let Some((k, v)) = line.split_once(':') {
                    headers.insert(k.trim().to_ascii_lowercase(), v.trim().to_string());
                }
            }
            let len: usize = headers
                .get("content-length")
                .and_then(|v| v.parse().ok())
                .unwrap_or(0);
            let mut discard = vec![0u8; len];
            reader.read_exact(&mut discard).expect("body");

            let mut stream = stream;
            write!(
                stream,
                "HTTP/1.1 {status} Scripted\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            )
            .expect("write response");
            stream.flush().expect("flush");

            seen.push(Seen { method, path });
        }
        seen
    });

    (base, handle)
}

pub fn device_list(devices: &[(u64, &str)]) -> String {
    let items: Vec<String> = devices
        .iter()
        .map(|(id, serial)| format!(r#"{{"id":{id},"name":"old-{id}","serial_number":"{serial}"}}"#))
        .collect();
    format!(r#"{{"mobile_devices":[{}]}}"#, items.join(","))
}

pub fn shortname(value: &str) -> String {
    format!(
        r#"{{"mobile_device":{{"extension_attributes":[{{"id":1,"name":"GivenIOSShortname","value":"{value}"}}]}}}}"#
    )
}

/// The binary with every `JAMF_*` variable cleared.
pub fn jamf_rename() -> Command {
    let mut cmd = Command::cargo_bin("jamf-rename").expect("binary");
    for var in [
        "JAMF_API_USER",
        "JAMF_API_PASSWORD",
        "JAMF_SERVER_BASE_URL",
        "JAMF_SERVER_CERT_FILE",
        "JAMF_TIMEOUT_SECS",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}
