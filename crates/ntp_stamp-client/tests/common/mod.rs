// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Shared helpers for integration tests.

// Integration test helpers are `pub` so each `tests/*.rs` file can import them
// via `mod common`, but clippy flags them as unreachable outside the crate.
#![allow(unreachable_pub, dead_code)]

use std::collections::VecDeque;
use std::io;

use stamp_client::DatagramTransport;

/// One datagram handed to [`MockTransport::send_datagram`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentDatagram {
    pub host: String,
    pub port: u16,
    pub payload: Vec<u8>,
}

/// In-memory transport: records every send and replays queued replies.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub sent: Vec<SentDatagram>,
    pub inbox: VecDeque<Vec<u8>>,
    /// Returned (once) by the next `send_datagram`.
    pub send_error: Option<io::ErrorKind>,
    /// Returned (once) by the next `pending_datagram`.
    pub poll_error: Option<io::ErrorKind>,
    pub polls: usize,
    pub reads: usize,
}

impl MockTransport {
    pub fn with_replies<I>(replies: I) -> Self
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        MockTransport {
            inbox: replies.into_iter().collect(),
            ..MockTransport::default()
        }
    }
}

impl DatagramTransport for MockTransport {
    fn send_datagram(&mut self, host: &str, port: u16, payload: &[u8]) -> io::Result<()> {
        if let Some(kind) = self.send_error.take() {
            return Err(io::Error::new(kind, "mock send failure"));
        }
        self.sent.push(SentDatagram {
            host: host.to_owned(),
            port,
            payload: payload.to_vec(),
        });
        Ok(())
    }

    fn pending_datagram(&mut self) -> io::Result<Option<usize>> {
        self.polls += 1;
        if let Some(kind) = self.poll_error.take() {
            return Err(io::Error::new(kind, "mock poll failure"));
        }
        Ok(self.inbox.front().map(Vec::len))
    }

    fn read_datagram(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reads += 1;
        let datagram = self
            .inbox
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::WouldBlock, "inbox empty"))?;
        let n = datagram.len().min(buf.len());
        buf[..n].copy_from_slice(&datagram[..n]);
        Ok(n)
    }
}

/// A 48-byte server reply whose transmit timestamp carries `seconds`.
pub fn server_reply(seconds: u32) -> Vec<u8> {
    let mut reply = vec![0u8; 48];
    reply[0] = 0x24; // LI=0, VN=4, Mode=4
    reply[1] = 2;
    reply[2] = 6;
    reply[3] = 0xEC;
    reply[12..16].copy_from_slice(b"GPS\0");
    reply[32..36].copy_from_slice(&seconds.to_be_bytes());
    reply[40..44].copy_from_slice(&seconds.to_be_bytes());
    reply[44..48].copy_from_slice(&[0x80, 0, 0, 0]);
    reply
}

/// NTP seconds for the given Unix seconds (for values at or after 1970).
pub fn ntp_seconds_for_unix(unix: u32) -> u32 {
    unix + 2_208_988_800
}

/// Returns `true` if the I/O error indicates a network-level failure that
/// should cause the test to be **skipped** (not panicked).
///
/// CI runners occasionally lack outbound UDP/123 access, causing errors such
/// as `ENETUNREACH` (101) or `EHOSTUNREACH` (113) in addition to the usual
/// `TimedOut` / `WouldBlock`.
pub fn is_network_skip_error(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::TimedOut
            | io::ErrorKind::WouldBlock
            | io::ErrorKind::ConnectionRefused
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::AddrNotAvailable
            | io::ErrorKind::AddrInUse
    ) || e.raw_os_error() == Some(101) // ENETUNREACH  (Network is unreachable)
      || e.raw_os_error() == Some(113) // EHOSTUNREACH (No route to host)
      || e.to_string().contains("failed to lookup address")
      || e.to_string().contains("Temporary failure in name resolution")
      || e.to_string().contains("resolved to no socket addresses")
}
