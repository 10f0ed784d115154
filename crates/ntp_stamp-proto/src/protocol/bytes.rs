use crate::error::ParseError;

use super::{
    ConstPackedSizeBytes, FromBytes, LeapIndicator, Mode, Packet, PacketByte1, ReferenceIdentifier,
    ShortFormat, Stratum, TimestampFormat, ToBytes, Version,
};

// Field offsets inside the packed header.
const STRATUM: usize = 1;
const POLL: usize = 2;
const PRECISION: usize = 3;
const ROOT_DELAY: usize = 4;
const ROOT_DISPERSION: usize = 8;
const REFERENCE_ID: usize = 12;
const REFERENCE_TS: usize = 16;
const ORIGIN_TS: usize = 24;
const RECEIVE_TS: usize = 32;
const TRANSMIT_TS: usize = TimestampFormat::TRANSMIT_OFFSET;

fn ensure_len(buf: &[u8], needed: usize) -> Result<(), ParseError> {
    match buf.len() {
        available if available < needed => Err(ParseError::BufferTooShort { needed, available }),
        _ => Ok(()),
    }
}

/// Split header byte 0 into its three fields.
pub(super) fn unpack_byte1(b: u8) -> PacketByte1 {
    (
        LeapIndicator::from_bits(b >> 6),
        Version((b >> 3) & 0b111),
        Mode::from_bits(b),
    )
}

/// Inverse of [`unpack_byte1`]. Only the low three bits of the version survive.
pub(super) fn pack_byte1((li, vn, mode): PacketByte1) -> u8 {
    ((li as u8) << 6) | ((vn.0 & 0b111) << 3) | mode as u8
}

fn be16(buf: &[u8], at: usize) -> u16 {
    u16::from_be_bytes([buf[at], buf[at + 1]])
}

fn be32(buf: &[u8], at: usize) -> u32 {
    u32::from_be_bytes([buf[at], buf[at + 1], buf[at + 2], buf[at + 3]])
}

fn short_at(buf: &[u8], at: usize) -> ShortFormat {
    ShortFormat {
        seconds: be16(buf, at),
        fraction: be16(buf, at + 2),
    }
}

fn timestamp_at(buf: &[u8], at: usize) -> TimestampFormat {
    TimestampFormat {
        seconds: be32(buf, at),
        fraction: be32(buf, at + 4),
    }
}

impl FromBytes for ShortFormat {
    fn from_bytes(buf: &[u8]) -> Result<(Self, usize), ParseError> {
        ensure_len(buf, Self::PACKED_SIZE_BYTES)?;
        Ok((short_at(buf, 0), Self::PACKED_SIZE_BYTES))
    }
}

impl FromBytes for TimestampFormat {
    fn from_bytes(buf: &[u8]) -> Result<(Self, usize), ParseError> {
        ensure_len(buf, Self::PACKED_SIZE_BYTES)?;
        Ok((timestamp_at(buf, 0), Self::PACKED_SIZE_BYTES))
    }
}

impl FromBytes for PacketByte1 {
    fn from_bytes(buf: &[u8]) -> Result<(Self, usize), ParseError> {
        ensure_len(buf, Self::PACKED_SIZE_BYTES)?;
        Ok((unpack_byte1(buf[0]), Self::PACKED_SIZE_BYTES))
    }
}

impl FromBytes for Packet {
    /// Every 48-byte input decodes. The only failure is a buffer shorter than the header;
    /// anything past byte 48 is left for the caller.
    fn from_bytes(buf: &[u8]) -> Result<(Self, usize), ParseError> {
        ensure_len(buf, Self::PACKED_SIZE_BYTES)?;
        let (leap_indicator, version, mode) = unpack_byte1(buf[0]);
        let packet = Packet {
            leap_indicator,
            version,
            mode,
            stratum: Stratum(buf[STRATUM]),
            poll: buf[POLL] as i8,
            precision: buf[PRECISION] as i8,
            root_delay: short_at(buf, ROOT_DELAY),
            root_dispersion: short_at(buf, ROOT_DISPERSION),
            reference_id: ReferenceIdentifier([
                buf[REFERENCE_ID],
                buf[REFERENCE_ID + 1],
                buf[REFERENCE_ID + 2],
                buf[REFERENCE_ID + 3],
            ]),
            reference_timestamp: timestamp_at(buf, REFERENCE_TS),
            origin_timestamp: timestamp_at(buf, ORIGIN_TS),
            receive_timestamp: timestamp_at(buf, RECEIVE_TS),
            transmit_timestamp: timestamp_at(buf, TRANSMIT_TS),
        };
        Ok((packet, Self::PACKED_SIZE_BYTES))
    }
}

fn put_short(buf: &mut [u8], at: usize, value: ShortFormat) {
    buf[at..at + 2].copy_from_slice(&value.seconds.to_be_bytes());
    buf[at + 2..at + 4].copy_from_slice(&value.fraction.to_be_bytes());
}

fn put_timestamp(buf: &mut [u8], at: usize, value: TimestampFormat) {
    buf[at..at + 4].copy_from_slice(&value.seconds.to_be_bytes());
    buf[at + 4..at + 8].copy_from_slice(&value.fraction.to_be_bytes());
}

impl ToBytes for ShortFormat {
    fn to_bytes(&self, buf: &mut [u8]) -> Result<usize, ParseError> {
        ensure_len(buf, Self::PACKED_SIZE_BYTES)?;
        put_short(buf, 0, *self);
        Ok(Self::PACKED_SIZE_BYTES)
    }
}

impl ToBytes for TimestampFormat {
    fn to_bytes(&self, buf: &mut [u8]) -> Result<usize, ParseError> {
        ensure_len(buf, Self::PACKED_SIZE_BYTES)?;
        put_timestamp(buf, 0, *self);
        Ok(Self::PACKED_SIZE_BYTES)
    }
}

impl ToBytes for PacketByte1 {
    fn to_bytes(&self, buf: &mut [u8]) -> Result<usize, ParseError> {
        ensure_len(buf, Self::PACKED_SIZE_BYTES)?;
        buf[0] = pack_byte1(*self);
        Ok(Self::PACKED_SIZE_BYTES)
    }
}

impl ToBytes for Packet {
    /// Fills exactly the first 48 bytes of `buf`.
    fn to_bytes(&self, buf: &mut [u8]) -> Result<usize, ParseError> {
        ensure_len(buf, Self::PACKED_SIZE_BYTES)?;
        buf[0] = pack_byte1((self.leap_indicator, self.version, self.mode));
        buf[STRATUM] = self.stratum.0;
        buf[POLL] = self.poll as u8;
        buf[PRECISION] = self.precision as u8;
        put_short(buf, ROOT_DELAY, self.root_delay);
        put_short(buf, ROOT_DISPERSION, self.root_dispersion);
        buf[REFERENCE_ID..REFERENCE_ID + 4].copy_from_slice(&self.reference_id.0);
        put_timestamp(buf, REFERENCE_TS, self.reference_timestamp);
        put_timestamp(buf, ORIGIN_TS, self.origin_timestamp);
        put_timestamp(buf, RECEIVE_TS, self.receive_timestamp);
        put_timestamp(buf, TRANSMIT_TS, self.transmit_timestamp);
        Ok(Self::PACKED_SIZE_BYTES)
    }
}
