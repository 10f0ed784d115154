// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! The request/poll session.
//!
//! An [`NtpSession`] owns a transport, its configuration, and one 48-byte
//! scratch buffer that every request is built in and every reply is read
//! into. There is at most one outstanding request and no correlation between
//! requests and replies: whatever datagram arrives next is decoded.

use crate::civil::CivilDateTime;
use crate::config::{SessionBuilder, SessionConfig};
use crate::error::{ConfigError, NtpError};
use crate::protocol::{ConstPackedSizeBytes, Packet};
use crate::request::{self, Scratch};
use crate::response;
use crate::transport::{DatagramTransport, UdpTransport};
use std::io;

/// A single-server NTP client driven by explicit send and poll calls.
#[derive(Debug)]
pub struct NtpSession<T> {
    transport: T,
    config: SessionConfig,
    scratch: Scratch,
}

impl NtpSession<UdpTransport> {
    /// Start configuring a session. See [`SessionBuilder`].
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }
}

impl<T: DatagramTransport> NtpSession<T> {
    /// Create a session over `transport` with the default configuration.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, SessionConfig::default())
    }

    /// Create a session over `transport` with `config`.
    pub fn with_config(transport: T, config: SessionConfig) -> Self {
        NtpSession {
            transport,
            config,
            scratch: [0u8; Packet::PACKED_SIZE_BYTES],
        }
    }

    /// The session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Shared access to the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Exclusive access to the transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Consume the session, returning the transport.
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Send one client request to `server` on the configured server port.
    ///
    /// The address is passed to the transport unvalidated; the payload is the
    /// same for every server.
    pub fn send_request(&mut self, server: &str) -> io::Result<()> {
        request::send_request(
            &mut self.transport,
            &mut self.scratch,
            server,
            self.config.server_port,
        )
    }

    /// Send one client request to the configured server.
    ///
    /// Fails with [`ConfigError::EmptyServer`] if no server was configured.
    pub fn send_configured_request(&mut self) -> io::Result<()> {
        if self.config.server.is_empty() {
            return Err(NtpError::Config(ConfigError::EmptyServer).into());
        }
        request::send_request(
            &mut self.transport,
            &mut self.scratch,
            &self.config.server,
            self.config.server_port,
        )
    }

    /// Poll once for a reply and decode its transmit time.
    ///
    /// Returns `Ok(None)` without touching the scratch buffer when nothing is
    /// pending.
    pub fn poll_datetime(&mut self) -> io::Result<Option<CivilDateTime>> {
        let Some(received) = response::receive_into(&mut self.transport, &mut self.scratch)?
        else {
            return Ok(None);
        };
        let dt = response::decode_transmit_time(&self.scratch, received, self.config.validation)?;
        Ok(Some(dt))
    }

    /// Poll once for a reply and, if one arrived, replace `output` with its
    /// transmit time rendered in the configured style.
    ///
    /// Returns `Ok(true)` when `output` was written. On `Ok(false)` or on
    /// error `output` is left exactly as it was.
    pub fn try_read_timestamp(&mut self, output: &mut String) -> io::Result<bool> {
        match self.poll_datetime()? {
            Some(dt) => {
                *output = dt.display(self.config.style).to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
