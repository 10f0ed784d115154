// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Datagram transports the session sends requests through and polls replies from.
//!
//! [`DatagramTransport`] is the seam between the protocol logic and the
//! network. [`UdpTransport`] implements it over a non-blocking
//! [`std::net::UdpSocket`]; tests and embedded targets supply their own.

use log::debug;
use std::io;
use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};

use crate::error::{ConfigError, NtpError};

/// Local UDP port the default transport listens on.
pub const DEFAULT_LOCAL_PORT: u16 = 8888;

/// Large enough to observe any NTP reply while peeking.
const PEEK_BUF_SIZE: usize = 1024;

/// A connectionless, message-oriented transport.
///
/// Implementations must not block in [`pending_datagram`](Self::pending_datagram).
/// Errors are returned to the caller unchanged.
pub trait DatagramTransport {
    /// Send `payload` as one datagram to `host:port`.
    fn send_datagram(&mut self, host: &str, port: u16, payload: &[u8]) -> io::Result<()>;

    /// Size of the next pending datagram, or `None` when nothing has arrived.
    fn pending_datagram(&mut self) -> io::Result<Option<usize>>;

    /// Consume the next pending datagram, copying at most `buf.len()` bytes
    /// into `buf`. Returns the number of bytes copied.
    fn read_datagram(&mut self, buf: &mut [u8]) -> io::Result<usize>;
}

impl<T: DatagramTransport + ?Sized> DatagramTransport for &mut T {
    fn send_datagram(&mut self, host: &str, port: u16, payload: &[u8]) -> io::Result<()> {
        (**self).send_datagram(host, port, payload)
    }

    fn pending_datagram(&mut self) -> io::Result<Option<usize>> {
        (**self).pending_datagram()
    }

    fn read_datagram(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        (**self).read_datagram(buf)
    }
}

impl<T: DatagramTransport + ?Sized> DatagramTransport for Box<T> {
    fn send_datagram(&mut self, host: &str, port: u16, payload: &[u8]) -> io::Result<()> {
        (**self).send_datagram(host, port, payload)
    }

    fn pending_datagram(&mut self) -> io::Result<Option<usize>> {
        (**self).pending_datagram()
    }

    fn read_datagram(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        (**self).read_datagram(buf)
    }
}

/// A [`DatagramTransport`] over a non-blocking UDP socket.
#[derive(Debug)]
pub struct UdpTransport {
    socket: UdpSocket,
}

impl UdpTransport {
    /// Bind `0.0.0.0:local_port` in non-blocking mode.
    ///
    /// Pass `0` to let the operating system pick a port.
    pub fn bind(local_port: u16) -> io::Result<Self> {
        let socket = UdpSocket::bind(SocketAddr::from(([0, 0, 0, 0], local_port)))?;
        Self::from_socket(socket)
    }

    /// Wrap an already bound socket, switching it to non-blocking mode.
    pub fn from_socket(socket: UdpSocket) -> io::Result<Self> {
        socket.set_nonblocking(true)?;
        debug!("UDP transport listening on {:?}", socket.local_addr());
        Ok(UdpTransport { socket })
    }

    /// The local address the socket is bound to.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Resolve `host:port` to an address of the same family as the local socket.
    fn resolve(&self, host: &str, port: u16) -> io::Result<SocketAddr> {
        let local_is_ipv4 = self.socket.local_addr()?.is_ipv4();
        (host, port)
            .to_socket_addrs()?
            .find(|addr| addr.is_ipv4() == local_is_ipv4)
            .ok_or_else(|| {
                NtpError::Config(ConfigError::NoAddresses {
                    address: format!("{host}:{port}"),
                })
                .into()
            })
    }
}

impl DatagramTransport for UdpTransport {
    fn send_datagram(&mut self, host: &str, port: u16, payload: &[u8]) -> io::Result<()> {
        let target = self.resolve(host, port)?;
        let sz = self.socket.send_to(payload, target)?;
        debug!("sent: {} bytes to {}", sz, target);
        Ok(())
    }

    fn pending_datagram(&mut self) -> io::Result<Option<usize>> {
        let mut probe = [0u8; PEEK_BUF_SIZE];
        match self.socket.peek_from(&mut probe) {
            Ok((len, _)) => Ok(Some(len)),
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// A datagram longer than `buf` (a reply with extension fields, say) behaves
    /// differently per platform. On Unix the excess is discarded and `buf.len()` is
    /// returned. On Windows `recv_from` fails with `WSAEMSGSIZE`, which is passed
    /// through as the error; the datagram is still consumed.
    fn read_datagram(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let (len, src_addr) = self.socket.recv_from(buf)?;
        debug!("recv: {} bytes from {:?}", len, src_addr);
        Ok(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn wait_for_pending(transport: &mut UdpTransport) -> Option<usize> {
        let deadline = Instant::now() + Duration::from_secs(2);
        while Instant::now() < deadline {
            if let Some(n) = transport.pending_datagram().unwrap() {
                return Some(n);
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        None
    }

    #[test]
    fn nothing_pending_on_fresh_socket() {
        let mut transport = UdpTransport::bind(0).unwrap();
        assert_eq!(transport.pending_datagram().unwrap(), None);
    }

    #[cfg(unix)]
    #[test]
    fn loopback_send_peek_read() {
        let mut transport = UdpTransport::bind(0).unwrap();
        let port = transport.local_addr().unwrap().port();

        transport
            .send_datagram("127.0.0.1", port, &[1, 2, 3, 4, 5])
            .unwrap();
        assert_eq!(wait_for_pending(&mut transport), Some(5));
        // Peeking does not consume.
        assert_eq!(transport.pending_datagram().unwrap(), Some(5));

        let mut buf = [0u8; 3];
        assert_eq!(transport.read_datagram(&mut buf).unwrap(), 3);
        assert_eq!(buf, [1, 2, 3]);
        assert_eq!(transport.pending_datagram().unwrap(), None);
    }

    #[cfg(unix)]
    #[test]
    fn oversized_reply_is_truncated_to_header() {
        let mut transport = UdpTransport::bind(0).unwrap();
        let port = transport.local_addr().unwrap().port();
        let mut reply = [0u8; 60];
        reply[40..44].copy_from_slice(&[0xE7, 0xB6, 0xE3, 0x64]);
        reply[48..].fill(0xAA);

        transport.send_datagram("127.0.0.1", port, &reply).unwrap();
        assert_eq!(wait_for_pending(&mut transport), Some(60));

        let mut scratch = [0u8; 48];
        assert_eq!(transport.read_datagram(&mut scratch).unwrap(), 48);
        assert_eq!(scratch[..], reply[..48]);
        assert_eq!(transport.pending_datagram().unwrap(), None);
    }

    #[cfg(windows)]
    #[test]
    fn oversized_reply_is_msgsize_error() {
        const WSAEMSGSIZE: i32 = 10040;
        let mut transport = UdpTransport::bind(0).unwrap();
        let port = transport.local_addr().unwrap().port();

        transport.send_datagram("127.0.0.1", port, &[0u8; 60]).unwrap();
        assert_eq!(wait_for_pending(&mut transport), Some(60));

        let mut scratch = [0u8; 48];
        let err = transport.read_datagram(&mut scratch).unwrap_err();
        assert_eq!(err.raw_os_error(), Some(WSAEMSGSIZE));
    }

    #[test]
    fn ipv6_only_host_has_no_usable_address() {
        let mut transport = UdpTransport::bind(0).unwrap();
        let err = transport.send_datagram("::1", 123, &[0]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        let inner = err.get_ref().unwrap().downcast_ref::<NtpError>().unwrap();
        assert!(matches!(
            inner,
            NtpError::Config(ConfigError::NoAddresses { address }) if address == "::1:123"
        ));
    }
}
