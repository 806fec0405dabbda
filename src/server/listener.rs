// Listener construction
// Builds the listening socket by hand so socket options are explicit.

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;

/// Create a bound, listening `TcpListener` for the given address.
///
/// `SO_REUSEADDR` is set so a restart does not trip over sockets in
/// `TIME_WAIT`. `SO_REUSEPORT` stays off: while the port is held by a
/// live process, a second bind must fail rather than share the port.
pub fn bind_listener(addr: std::net::SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;

    // Non-blocking mode is required before handing the socket to tokio.
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;
    socket.listen(128)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn second_bind_on_held_port_fails() {
        let first = bind_listener("127.0.0.1:0".parse().unwrap()).expect("first bind");
        let addr = first.local_addr().unwrap();
        assert!(bind_listener(addr).is_err());
    }
}
