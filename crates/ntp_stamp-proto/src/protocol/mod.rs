//! The NTP header as Rust values, and two codecs for it.
//!
//! [`FromBytes`] and [`ToBytes`] work on plain slices and need nothing from `std`. With the
//! `std` feature, [`ReadBytes`] and [`WriteBytes`] layer the same encoding over any
//! `byteorder` reader or writer. Both codecs agree byte for byte.

/// Well-known server port.
pub const PORT: u16 = 123;

/// Poll exponent carried in client requests (64 s).
pub const REQUEST_POLL: i8 = 6;

/// Precision exponent carried in client requests (`0xEC`, about 1 us).
pub const REQUEST_PRECISION: i8 = -20;

mod bytes;
#[cfg(feature = "std")]
mod io;
mod traits;
mod types;

pub use self::traits::*;
pub use self::types::*;
