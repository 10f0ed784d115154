// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Slice codec failures.
//!
//! [`ParseError`] needs neither `std` nor an allocator. With `std` it is an
//! [`std::error::Error`] and lifts into [`std::io::Error`] as `UnexpectedEof`, the same kind
//! the `io` codec reports when a reader runs out.

use core::fmt;

/// Why a slice could not be decoded from or encoded into.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// `available` bytes were supplied where `needed` are required.
    BufferTooShort {
        /// Bytes the value occupies on the wire.
        needed: usize,
        /// Length of the slice that was passed in.
        available: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ParseError::BufferTooShort { needed, available } => {
                write!(f, "buffer holds {available} bytes but {needed} are required")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

#[cfg(feature = "std")]
impl From<ParseError> for std::io::Error {
    fn from(err: ParseError) -> Self {
        std::io::Error::new(std::io::ErrorKind::UnexpectedEof, err)
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    const SHORT_REPLY: ParseError = ParseError::BufferTooShort {
        needed: 48,
        available: 10,
    };

    #[test]
    fn message_names_both_lengths() {
        assert_eq!(
            SHORT_REPLY.to_string(),
            "buffer holds 10 bytes but 48 are required"
        );
    }

    #[test]
    fn lifts_into_unexpected_eof() {
        let io_err: std::io::Error = SHORT_REPLY.into();
        assert_eq!(io_err.kind(), std::io::ErrorKind::UnexpectedEof);
        let inner = io_err.get_ref().and_then(|e| e.downcast_ref::<ParseError>());
        assert_eq!(inner, Some(&SHORT_REPLY));
    }
}
