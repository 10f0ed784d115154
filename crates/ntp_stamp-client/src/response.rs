//! Reply polling and decoding.
//!
//! Polling is a single non-blocking check. Decoding reads only the transmit
//! seconds (bytes 40-43) from the scratch buffer, applies the configured
//! [`Validation`], and converts to a civil UTC time.

use log::{debug, trace, warn};

use crate::civil::CivilDateTime;
use crate::config::Validation;
use crate::error::{NtpError, ProtocolError};
use crate::protocol::{ConstPackedSizeBytes, Packet, TimestampFormat};
use crate::request::Scratch;
use crate::transport::DatagramTransport;
use crate::unix_time;
use std::io;

/// Poll `transport` once and, if a datagram is pending, read it into `scratch`.
///
/// Returns the number of bytes copied, or `None` when nothing was pending.
/// A `WouldBlock` from the transport counts as nothing pending. Bytes of
/// `scratch` beyond the copied length keep their previous contents.
pub(crate) fn receive_into<T>(
    transport: &mut T,
    scratch: &mut Scratch,
) -> io::Result<Option<usize>>
where
    T: DatagramTransport + ?Sized,
{
    let pending = match transport.pending_datagram() {
        Ok(Some(len)) => len,
        Ok(None) => {
            trace!("poll: no datagram pending");
            return Ok(None);
        }
        Err(e) if e.kind() == io::ErrorKind::WouldBlock => {
            trace!("poll: transport would block");
            return Ok(None);
        }
        Err(e) => return Err(e),
    };
    let received = transport.read_datagram(&mut scratch[..])?;
    debug!("recv: {} of {} pending bytes", received, pending);
    Ok(Some(received))
}

/// Convert the transmit seconds held in `scratch` to a civil time.
///
/// `received` is the datagram length reported by [`receive_into`].
pub(crate) fn decode_transmit_time(
    scratch: &Scratch,
    received: usize,
    validation: Validation,
) -> Result<CivilDateTime, NtpError> {
    if received < Packet::PACKED_SIZE_BYTES {
        match validation {
            Validation::Strict => {
                return Err(ProtocolError::MalformedResponse { received }.into());
            }
            Validation::Lenient => {
                warn!("short datagram ({received} bytes) accepted; unread bytes are stale")
            }
        }
    }

    let ntp_seconds = TimestampFormat::transmit_seconds(scratch);
    let unix_seconds = match validation {
        Validation::Strict => unix_time::checked_unix_seconds(ntp_seconds)
            .ok_or(ProtocolError::ClockBeforeEpoch { ntp_seconds })?,
        Validation::Lenient => {
            if unix_time::checked_unix_seconds(ntp_seconds).is_none() {
                warn!("transmit seconds {ntp_seconds} precede the Unix epoch; wrapping");
            }
            unix_time::wrapping_unix_seconds(ntp_seconds)
        }
    };
    Ok(CivilDateTime::from_unix_seconds(unix_seconds))
}
