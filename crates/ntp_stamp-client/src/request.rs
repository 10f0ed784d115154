//! Request construction and transmission.
//!
//! The request is the fixed [`Packet::client_request`] header. It carries no
//! transmit time, so every request is byte-identical.

use log::debug;

use crate::protocol::{ConstPackedSizeBytes, Packet, WriteBytes};
use crate::transport::DatagramTransport;
use std::io;

/// The scratch buffer a session sends from and receives into.
pub(crate) type Scratch = [u8; Packet::PACKED_SIZE_BYTES];

/// Zero-fill `scratch` and serialize the client request into it.
pub(crate) fn build_request_packet(scratch: &mut Scratch) -> io::Result<()> {
    scratch.fill(0);
    (&mut scratch[..]).write_bytes(Packet::client_request())
}

/// Build the request in `scratch` and hand it to `transport` for `host:port`.
///
/// Exactly one datagram is sent per call. Transport errors are returned as-is.
pub(crate) fn send_request<T>(
    transport: &mut T,
    scratch: &mut Scratch,
    host: &str,
    port: u16,
) -> io::Result<()>
where
    T: DatagramTransport + ?Sized,
{
    build_request_packet(scratch)?;
    transport.send_datagram(host, port, &scratch[..])?;
    debug!("request for {}:{} handed to transport", host, port);
    Ok(())
}
