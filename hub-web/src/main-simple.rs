//! Static file server for the DeFi Hub front end
//!
//! Serves the compiled wasm app from the dist/ directory on port 8080,
//! falling back to index.html for unknown paths (client-side navigation).

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};

const ADDR: &str = "127.0.0.1:8080";
const DIST: &str = "dist";

fn main() {
    let listener = TcpListener::bind(ADDR).expect("Failed to bind to port 8080");

    println!("DeFi Hub server running at http://{ADDR}");
    println!("Serving from {DIST}/ directory");
    println!("Press Ctrl+C to stop\n");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream),
            Err(e) => eprintln!("Connection error: {e}"),
        }
    }
}

fn handle_client(mut stream: TcpStream) {
    let request_line = match BufReader::new(&mut stream).lines().next() {
        Some(Ok(line)) => line,
        _ => {
            eprintln!("Failed to read request line");
            return;
        }
    };

    let full_path = request_line.split_whitespace().nth(1).unwrap_or("/");
    // Query strings never address files here.
    let path = full_path.split('?').next().unwrap_or("/");

    let file_path = resolve(path);
    let (body, status) = match fs::read(&file_path) {
        Ok(contents) => (contents, "200 OK"),
        Err(_) => match fs::read(Path::new(DIST).join("index.html")) {
            Ok(contents) => (contents, "200 OK"),
            Err(_) => {
                eprintln!("Not found and no index fallback: {}", file_path.display());
                (
                    b"<!DOCTYPE html><html><body><h1>Not found</h1></body></html>".to_vec(),
                    "404 NOT FOUND",
                )
            }
        },
    };

    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
        content_type(&file_path),
        body.len()
    );

    if let Err(e) = stream.write_all(response.as_bytes()) {
        eprintln!("Failed to write headers: {e}");
        return;
    }
    if let Err(e) = stream.write_all(&body) {
        eprintln!("Failed to write body: {e}");
    }
    let _ = stream.flush();
}

/// Map a request path onto dist/, with index.html for the root and for
/// anything that is not a real file.
fn resolve(path: &str) -> PathBuf {
    if path == "/" || path.is_empty() {
        return Path::new(DIST).join("index.html");
    }
    let candidate = Path::new(DIST).join(path.trim_start_matches('/'));
    if candidate.is_file() {
        candidate
    } else {
        Path::new(DIST).join("index.html")
    }
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        _ => "application/octet-stream",
    }
}
