// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Send one request and poll until the reply arrives.
//!
//! Run with: `RUST_LOG=debug cargo run -p ntp_stamp-client --example poll -- pool.ntp.org`

use std::time::{Duration, Instant};

use stamp_client::{NtpSession, TimestampStyle};

fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let server = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "time.nist.gov".to_string());

    let mut session = NtpSession::builder()
        .server(server.as_str())
        .local_port(0)
        .style(TimestampStyle::Compact)
        .bind()?;
    println!("Listening on {}", session.transport().local_addr()?);

    session.send_configured_request()?;

    let mut stamp = String::new();
    let deadline = Instant::now() + Duration::from_secs(5);
    // The session never waits; the caller decides how often to poll.
    while Instant::now() < deadline {
        if session.try_read_timestamp(&mut stamp)? {
            println!("{server}: {stamp}");
            return Ok(());
        }
        std::thread::sleep(Duration::from_millis(20));
    }
    println!("{server}: no reply within 5s");
    Ok(())
}
