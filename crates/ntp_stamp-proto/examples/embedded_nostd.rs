// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

// Embedded / no_std request-and-decode demo
//
// Walks through the allocation-free half of ntp_stamp-proto: building the
// fixed client request into a stack buffer with `ToBytes`, pulling the
// transmit seconds out of a reply, and turning them into a calendar time with
// integer arithmetic only. The `std` feature is active here (examples always
// compile with defaults), but every API called below is available without it.
//
// Usage:
//   cargo run -p ntp_stamp-proto --example embedded_nostd

use stamp_proto::civil::{CivilDateTime, TimestampStyle};
use stamp_proto::error::ParseError;
use stamp_proto::protocol::{ConstPackedSizeBytes, FromBytes, Packet, TimestampFormat, ToBytes};
use stamp_proto::unix_time;

fn main() {
    println!("=== Allocation-free NTP request/response ===");
    println!();

    // ── 1. One scratch buffer for both directions ──────────────────────

    let mut scratch = [0u8; Packet::PACKED_SIZE_BYTES];
    let written = Packet::client_request()
        .to_bytes(&mut scratch)
        .expect("buffer is exactly the right size");
    assert_eq!(written, Packet::PACKED_SIZE_BYTES);

    println!("Client request ({} bytes):", written);
    for row in scratch.chunks(16) {
        let hex: Vec<String> = row.iter().map(|b| format!("{:02x}", b)).collect();
        println!("  {}", hex.join(" "));
    }
    println!();

    // ── 2. Pretend the server answered in place ────────────────────────
    //
    // A real device reads the datagram straight into `scratch`. Only bytes
    // 40-43 matter for the wall-clock second.

    scratch[0] = 0x24; // LI=0, VN=4, Mode=4 (server)
    scratch[1] = 1;
    scratch[40..44].copy_from_slice(&[0xE7, 0xB6, 0xE3, 0x64]);

    let ntp_seconds = TimestampFormat::transmit_seconds(&scratch);
    let unix_seconds = unix_time::wrapping_unix_seconds(ntp_seconds);
    let dt = CivilDateTime::from_unix_seconds(unix_seconds);

    println!("Transmit seconds (NTP):  {}", ntp_seconds);
    println!("Transmit seconds (Unix): {}", unix_seconds);
    println!("Compact:  {}", dt.display(TimestampStyle::Compact));
    println!("ISO 8601: {}", dt.display(TimestampStyle::Iso8601));
    assert_eq!(dt.to_string(), "2023-03-11T11:24:20");
    println!();

    // ── 3. Full header decode when the other fields are wanted ─────────

    let (reply, _) = Packet::from_bytes(&scratch).expect("48 bytes always decode");
    println!(
        "Decoded: mode={:?} stratum={} version={}",
        reply.mode,
        reply.stratum.0,
        reply.version.value()
    );
    println!();

    // ── 4. Error handling ──────────────────────────────────────────────
    //
    // ParseError uses `core::fmt` only.

    match Packet::from_bytes(&scratch[..10]) {
        Err(ParseError::BufferTooShort { needed, available }) => {
            println!("Truncated reply rejected: needed {needed}, got {available}");
        }
        other => panic!("expected BufferTooShort, got: {:?}", other),
    }
    println!();

    // ── 5. Era boundary ────────────────────────────────────────────────

    let wrapped = CivilDateTime::from_ntp_seconds(0);
    println!("NTP 0 with 32-bit wraparound: {}", wrapped);
    println!(
        "NTP 0 checked:                {:?}",
        unix_time::checked_unix_seconds(0)
    );
    println!();

    println!("To use without std:");
    println!("  ntp_stamp-proto = {{ version = \"0.1\", default-features = false }}");
}
