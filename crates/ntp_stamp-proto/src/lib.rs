// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! NTP request/response wire types and integer-only calendar conversion.
//!
//! This crate provides the 48-byte NTP header (RFC 5905) as a typed record,
//! slice and `io` based (de)serialization, NTP-to-Unix epoch conversion, and a
//! closed-form proleptic Gregorian calendar conversion that needs neither
//! floating point nor a date library.
//!
//! ```
//! use stamp_proto::civil::{CivilDateTime, TimestampStyle};
//!
//! let dt = CivilDateTime::from_unix_seconds(1_678_532_720);
//! assert_eq!(dt.display(TimestampStyle::Compact).to_string(), "2023-03-11T11:5:20");
//! assert_eq!(dt.display(TimestampStyle::Iso8601).to_string(), "2023-03-11T11:05:20");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

/// Calendar fields from Unix seconds, without floating point.
pub mod civil;

pub mod error;

pub mod protocol;

/// NTP seconds to Unix seconds.
pub mod unix_time;
