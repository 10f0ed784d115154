// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Session configuration and its builder.
//!
//! # Examples
//!
//! ```no_run
//! # fn main() -> std::io::Result<()> {
//! use stamp_client::{NtpSession, TimestampStyle, Validation};
//!
//! let session = NtpSession::builder()
//!     .server("time.nist.gov")
//!     .local_port(0)
//!     .style(TimestampStyle::Iso8601)
//!     .validation(Validation::Strict)
//!     .bind()?;
//! assert_eq!(session.config().server_port, 123);
//! # Ok(())
//! # }
//! ```

use std::io;

use crate::civil::TimestampStyle;
use crate::protocol;
use crate::session::NtpSession;
use crate::transport::{DEFAULT_LOCAL_PORT, DatagramTransport, UdpTransport};

/// How strictly replies are checked before conversion.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Validation {
    /// Accept whatever arrives: short datagrams are decoded from the bytes
    /// present (the rest of the scratch buffer is stale), and transmit times
    /// before 1970 wrap modulo 2^32 seconds.
    #[default]
    Lenient,
    /// Reject short datagrams with
    /// [`ProtocolError::MalformedResponse`](crate::error::ProtocolError::MalformedResponse)
    /// and pre-1970 transmit times with
    /// [`ProtocolError::ClockBeforeEpoch`](crate::error::ProtocolError::ClockBeforeEpoch).
    Strict,
}

/// Everything an [`NtpSession`] needs besides its transport.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SessionConfig {
    /// Host name or address used by
    /// [`send_configured_request`](NtpSession::send_configured_request). Empty by default.
    pub server: String,
    /// Destination UDP port (default: 123).
    pub server_port: u16,
    /// Local UDP port bound by [`SessionBuilder::bind`] (default: 8888).
    pub local_port: u16,
    /// Output style for [`try_read_timestamp`](NtpSession::try_read_timestamp).
    pub style: TimestampStyle,
    /// Reply validation mode.
    pub validation: Validation,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            server: String::new(),
            server_port: protocol::PORT,
            local_port: DEFAULT_LOCAL_PORT,
            style: TimestampStyle::default(),
            validation: Validation::default(),
        }
    }
}

/// Builder for [`NtpSession`], obtained from [`NtpSession::builder`].
#[derive(Clone, Debug, Default)]
pub struct SessionBuilder {
    config: SessionConfig,
}

impl SessionBuilder {
    pub(crate) fn new() -> Self {
        SessionBuilder::default()
    }

    /// Set the server host name or address.
    pub fn server(mut self, server: impl Into<String>) -> Self {
        self.config.server = server.into();
        self
    }

    /// Set the destination UDP port (default: 123).
    pub fn server_port(mut self, port: u16) -> Self {
        self.config.server_port = port;
        self
    }

    /// Set the local UDP port to listen on (default: 8888, `0` for any).
    pub fn local_port(mut self, port: u16) -> Self {
        self.config.local_port = port;
        self
    }

    /// Set the output style (default: [`TimestampStyle::Compact`]).
    pub fn style(mut self, style: TimestampStyle) -> Self {
        self.config.style = style;
        self
    }

    /// Set the validation mode (default: [`Validation::Lenient`]).
    pub fn validation(mut self, validation: Validation) -> Self {
        self.config.validation = validation;
        self
    }

    /// The configuration collected so far.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Bind a non-blocking UDP socket on the local port and build the session.
    pub fn bind(self) -> io::Result<NtpSession<UdpTransport>> {
        let transport = UdpTransport::bind(self.config.local_port)?;
        Ok(NtpSession::with_config(transport, self.config))
    }

    /// Build the session over a caller-supplied transport.
    ///
    /// The local port setting is not used.
    pub fn build<T: DatagramTransport>(self, transport: T) -> NtpSession<T> {
        NtpSession::with_config(transport, self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.server, "");
        assert_eq!(config.server_port, 123);
        assert_eq!(config.local_port, 8888);
        assert_eq!(config.style, TimestampStyle::Compact);
        assert_eq!(config.validation, Validation::Lenient);
    }

    #[test]
    fn builder_sets_every_field() {
        let builder = SessionBuilder::new()
            .server("ntp.example.net")
            .server_port(1123)
            .local_port(0)
            .style(TimestampStyle::Iso8601)
            .validation(Validation::Strict);
        let expected = SessionConfig {
            server: "ntp.example.net".into(),
            server_port: 1123,
            local_port: 0,
            style: TimestampStyle::Iso8601,
            validation: Validation::Strict,
        };
        assert_eq!(builder.config(), &expected);
    }
}
