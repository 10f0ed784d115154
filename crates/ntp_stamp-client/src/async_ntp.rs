// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! One-shot async request using the Tokio runtime.
//!
//! Sends the same fixed request as [`NtpSession`](crate::NtpSession), waits
//! for the first datagram to arrive, and converts its transmit time. Unlike
//! the session this awaits the reply, bounded by [`tokio::time::timeout`].
//!
//! # Runtime Requirements
//!
//! These functions must be called from within a Tokio runtime context.
//! The library does **not** create a runtime; you must provide one.
//!
//! # Examples
//!
//! ```no_run
//! # async fn example() -> std::io::Result<()> {
//! use std::time::Duration;
//!
//! let dt = stamp_client::async_ntp::request_datetime("time.nist.gov:123", Duration::from_secs(5))
//!     .await?;
//! println!("{dt}");
//! # Ok(())
//! # }
//! ```

use log::debug;
use std::fmt;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{ToSocketAddrs, UdpSocket};

use crate::civil::CivilDateTime;
use crate::config::Validation;
use crate::error::{ConfigError, NtpError, TimeoutError};
use crate::protocol::{ConstPackedSizeBytes, Packet};
use crate::request::build_request_packet;
use crate::response::decode_transmit_time;

/// Select the wildcard bind address matching the target's address family.
fn bind_addr_for(target: &SocketAddr) -> SocketAddr {
    match target {
        SocketAddr::V4(_) => SocketAddr::from(([0, 0, 0, 0], 0)),
        SocketAddr::V6(_) => SocketAddr::from(([0u16; 8], 0)),
    }
}

/// First resolved address, or [`ConfigError::NoAddresses`] naming `address`.
fn first_target(
    mut resolved: impl Iterator<Item = SocketAddr>,
    address: String,
) -> Result<SocketAddr, NtpError> {
    resolved
        .next()
        .ok_or(NtpError::Config(ConfigError::NoAddresses { address }))
}

/// Render a target for error messages; string targets lose their Debug quotes.
fn describe_target<A: fmt::Debug>(addr: &A) -> String {
    format!("{addr:?}").trim_matches('"').to_owned()
}

/// Request the server's transmit time with [`Validation::Lenient`].
///
/// * `addr` - Any valid socket address (e.g., `"time.nist.gov:123"` or `"192.168.1.1:123"`)
/// * `timeout` - Maximum duration for the entire request (DNS + send + receive)
pub async fn request_datetime<A: ToSocketAddrs + fmt::Debug>(
    addr: A,
    timeout: Duration,
) -> io::Result<CivilDateTime> {
    request_datetime_with(addr, timeout, Validation::Lenient).await
}

/// Request the server's transmit time with an explicit validation mode.
pub async fn request_datetime_with<A: ToSocketAddrs + fmt::Debug>(
    addr: A,
    timeout: Duration,
    validation: Validation,
) -> io::Result<CivilDateTime> {
    tokio::time::timeout(timeout, request_inner(addr, validation))
        .await
        .map_err(|_| io::Error::from(NtpError::Timeout(TimeoutError::Request)))?
}

/// Inner async implementation without timeout wrapping.
async fn request_inner<A: ToSocketAddrs + fmt::Debug>(
    addr: A,
    validation: Validation,
) -> io::Result<CivilDateTime> {
    let address = describe_target(&addr);
    let target_addr = first_target(tokio::net::lookup_host(addr).await?, address)?;

    let mut scratch = [0u8; Packet::PACKED_SIZE_BYTES];
    build_request_packet(&mut scratch)?;

    let sock = UdpSocket::bind(bind_addr_for(&target_addr)).await?;
    let sz = sock.send_to(&scratch, target_addr).await?;
    debug!("{:?}", sock.local_addr());
    debug!("sent: {} bytes to {}", sz, target_addr);

    let (recv_len, src_addr) = sock.recv_from(&mut scratch[..]).await?;
    debug!("recv: {} bytes from {:?}", recv_len, src_addr);

    Ok(decode_transmit_time(&scratch, recv_len, validation)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_matches_family() {
        let v4: SocketAddr = "192.0.2.1:123".parse().unwrap();
        let v6: SocketAddr = "[2001:db8::1]:123".parse().unwrap();
        assert!(bind_addr_for(&v4).is_ipv4());
        assert!(bind_addr_for(&v6).is_ipv6());
        assert_eq!(bind_addr_for(&v4).port(), 0);
    }

    #[test]
    fn empty_resolution_is_typed_config_error() {
        let err: io::Error = first_target(std::iter::empty(), describe_target(&"ntp.invalid:123"))
            .unwrap_err()
            .into();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        let inner = err.get_ref().unwrap().downcast_ref::<NtpError>().unwrap();
        assert!(matches!(
            inner,
            NtpError::Config(ConfigError::NoAddresses { address }) if address == "ntp.invalid:123"
        ));
    }

    #[test]
    fn first_resolved_address_wins() {
        let a: SocketAddr = "192.0.2.1:123".parse().unwrap();
        let b: SocketAddr = "192.0.2.2:123".parse().unwrap();
        assert_eq!(first_target([a, b].into_iter(), String::new()).unwrap(), a);
    }
}
