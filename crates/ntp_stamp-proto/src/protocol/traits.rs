#[cfg(feature = "std")]
use byteorder::{ReadBytesExt, WriteBytesExt};
#[cfg(feature = "std")]
use std::io;

use crate::error::ParseError;

/// Sink side of the `std::io` codec.
///
/// Blanket-implemented for every `byteorder::WriteBytesExt`, so `Vec<u8>`, `&mut [u8]` and
/// sockets wrapped in a writer all work.
#[cfg(feature = "std")]
pub trait WriteBytes {
    /// Append `protocol` in wire order.
    fn write_bytes<P: WriteToBytes>(&mut self, protocol: P) -> io::Result<()>;
}

/// Source side of the `std::io` codec, blanket-implemented for every `byteorder::ReadBytesExt`.
#[cfg(feature = "std")]
pub trait ReadBytes {
    /// Consume one `P` from the front of the reader.
    fn read_bytes<P: ReadFromBytes>(&mut self) -> io::Result<P>;
}

/// A header piece that knows its own wire encoding.
#[cfg(feature = "std")]
pub trait WriteToBytes {
    /// Encode `self` into `writer`.
    fn write_to_bytes<W: WriteBytesExt>(&self, writer: W) -> io::Result<()>;
}

/// A header piece that can be rebuilt from its wire encoding.
#[cfg(feature = "std")]
pub trait ReadFromBytes: Sized {
    /// Decode one value from `reader`.
    fn read_from_bytes<R: ReadBytesExt>(reader: R) -> io::Result<Self>;
}

/// Wire size in bytes, known at compile time.
pub trait ConstPackedSizeBytes {
    /// Encoded length.
    const PACKED_SIZE_BYTES: usize;
}

/// Allocation-free decoding from the front of a slice. Available without `std`.
pub trait FromBytes: Sized {
    /// The decoded value and how many bytes of `buf` it used.
    fn from_bytes(buf: &[u8]) -> Result<(Self, usize), ParseError>;
}

/// Allocation-free encoding into the front of a slice. Available without `std`.
pub trait ToBytes {
    /// Bytes written, or [`ParseError::BufferTooShort`] with `buf` left untouched.
    fn to_bytes(&self, buf: &mut [u8]) -> Result<usize, ParseError>;
}
