use chrono::Local;
use std::net::SocketAddr;

/// Startup confirmation. Kept to a single stdout line so the process is
/// silent under default configuration apart from this message.
pub fn log_server_start(addr: &SocketAddr) {
    println!("Static file server running on http://{addr}");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[{}] connection from {peer_addr}", timestamp());
}

pub fn log_request(method: &str, path: &str) {
    println!("[{}] {method} {path}", timestamp());
}

pub fn log_response(status: u16) {
    println!("[{}] -> {status}", timestamp());
}

pub fn log_accept_error(err: &std::io::Error) {
    eprintln!("[ERROR] failed to accept connection: {err}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] failed to serve connection: {err:?}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

fn timestamp() -> String {
    Local::now().format("%d/%b/%Y:%H:%M:%S %z").to_string()
}
