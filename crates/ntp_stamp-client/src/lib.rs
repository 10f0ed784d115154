// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

/*!
Minimal NTP client that reports the server's transmit time as a UTC civil
timestamp.

A [`NtpSession`] sends the fixed 48-byte client request and later polls,
without blocking, for whatever reply has arrived. The transmit seconds of the
reply are converted from the NTP epoch to the Unix epoch and then to a
calendar date and time using integer arithmetic only. No offset, delay, or
clock discipline is computed.

# Example

```rust,no_run
fn main() -> std::io::Result<()> {
    let mut session = stamp_client::NtpSession::builder()
        .server("pool.ntp.org")
        .bind()?;
    session.send_configured_request()?;

    let mut stamp = String::new();
    loop {
        if session.try_read_timestamp(&mut stamp)? {
            println!("{stamp}"); // e.g. 2023-03-11T11:5:20
            break;
        }
        std::thread::sleep(std::time::Duration::from_millis(50));
    }
    Ok(())
}
```

# Feature Flags

| Feature | Default | Description |
|---------|---------|-------------|
| `tokio` | no | One-shot async request using the tokio runtime. |
*/

#![warn(missing_docs)]

// Re-export protocol types from stamp_proto for convenience.
pub use stamp_proto::{civil, protocol, unix_time};

pub use stamp_proto::civil::{CivilDateTime, TimestampStyle};

/// Custom error types for the NTP client.
pub mod error;

/// Datagram transport abstraction and the UDP implementation.
pub mod transport;

/// One-shot async request using the Tokio runtime.
///
/// See [`async_ntp::request_datetime`] for details.
#[cfg(feature = "tokio")]
pub mod async_ntp;

mod config;
mod request;
mod response;
mod session;

pub use config::{SessionBuilder, SessionConfig, Validation};
pub use session::NtpSession;
pub use transport::{DatagramTransport, UdpTransport};
