// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Client-side failures.
//!
//! Public functions return `io::Result`. Failures that originate in this crate are built as
//! [`NtpError`] and boxed into an `io::Error` whose kind reflects the variant; socket errors
//! are handed back exactly as the transport produced them. To tell them apart, downcast:
//!
//! ```no_run
//! use stamp_client::error::{NtpError, ProtocolError};
//! use stamp_client::{NtpSession, Validation};
//!
//! # fn main() -> std::io::Result<()> {
//! let mut session = NtpSession::builder()
//!     .server("pool.ntp.org")
//!     .validation(Validation::Strict)
//!     .bind()?;
//! session.send_configured_request()?;
//!
//! let mut stamp = String::new();
//! if let Err(e) = session.try_read_timestamp(&mut stamp) {
//!     match e.get_ref().and_then(|inner| inner.downcast_ref::<NtpError>()) {
//!         Some(NtpError::Protocol(ProtocolError::MalformedResponse { received })) => {
//!             eprintln!("short reply: {received} bytes")
//!         }
//!         Some(other) => eprintln!("NTP error: {other}"),
//!         None => eprintln!("transport error: {e}"),
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub use stamp_proto::error::ParseError;

use std::fmt;
use std::io;

/// Everything this crate can fail with on its own account.
#[derive(Debug)]
pub enum NtpError {
    /// A reply was rejected by strict validation.
    Protocol(ProtocolError),
    /// No reply arrived in time (async path only).
    Timeout(TimeoutError),
    /// The session was asked to do something its configuration cannot support.
    Config(ConfigError),
    /// A socket or resolver error, unwrapped again on conversion.
    Io(io::Error),
}

/// Reply validation errors. Only raised in [`Validation::Strict`](crate::Validation::Strict).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProtocolError {
    /// The datagram was shorter than the 48-byte header.
    MalformedResponse {
        /// Number of bytes received.
        received: usize,
    },
    /// The transmit timestamp lies before 1970-01-01T00:00:00Z.
    ClockBeforeEpoch {
        /// The raw NTP seconds carried by the reply.
        ntp_seconds: u32,
    },
}

/// Which deadline expired.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TimeoutError {
    /// The whole send-and-receive exchange.
    Request,
}

/// Problems with the destination.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// [`send_configured_request`](crate::NtpSession::send_configured_request) with no server set.
    EmptyServer,
    /// The name resolved, but not to an address the bound socket can reach.
    NoAddresses {
        /// `host:port` as given.
        address: String,
    },
}

impl fmt::Display for NtpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NtpError::Protocol(e) => write!(f, "NTP protocol error: {e}"),
            NtpError::Timeout(e) => write!(f, "NTP timeout: {e}"),
            NtpError::Config(e) => write!(f, "NTP config error: {e}"),
            NtpError::Io(e) => write!(f, "{e}"),
        }
    }
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::MalformedResponse { received } => {
                write!(f, "NTP response too short ({received} bytes)")
            }
            ProtocolError::ClockBeforeEpoch { ntp_seconds } => {
                write!(
                    f,
                    "transmit timestamp {ntp_seconds} precedes the Unix epoch"
                )
            }
        }
    }
}

impl fmt::Display for TimeoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeoutError::Request => write!(f, "NTP request timed out"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyServer => write!(f, "no server address configured"),
            ConfigError::NoAddresses { address } => {
                write!(f, "address resolved to no socket addresses: {address}")
            }
        }
    }
}

impl std::error::Error for NtpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NtpError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl std::error::Error for ProtocolError {}
impl std::error::Error for TimeoutError {}
impl std::error::Error for ConfigError {}

impl From<NtpError> for io::Error {
    fn from(err: NtpError) -> io::Error {
        let kind = match err {
            NtpError::Io(inner) => return inner,
            NtpError::Protocol(_) => io::ErrorKind::InvalidData,
            NtpError::Timeout(_) => io::ErrorKind::TimedOut,
            NtpError::Config(_) => io::ErrorKind::InvalidInput,
        };
        io::Error::new(kind, err)
    }
}

impl From<io::Error> for NtpError {
    fn from(err: io::Error) -> NtpError {
        NtpError::Io(err)
    }
}

impl From<ProtocolError> for NtpError {
    fn from(err: ProtocolError) -> NtpError {
        NtpError::Protocol(err)
    }
}

impl From<ConfigError> for NtpError {
    fn from(err: ConfigError) -> NtpError {
        NtpError::Config(err)
    }
}
