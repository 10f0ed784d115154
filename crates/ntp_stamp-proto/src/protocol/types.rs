use core::fmt;

use super::{ConstPackedSizeBytes, REQUEST_POLL, REQUEST_PRECISION};

/// 32-bit fixed-point value carried in the root delay and root dispersion fields.
///
/// The high 16 bits count whole seconds and the low 16 bits count 1/65536ths.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ShortFormat {
    /// Whole seconds.
    pub seconds: u16,
    /// Sub-second part in units of 2^-16 s.
    pub fraction: u16,
}

/// 64-bit NTP timestamp: seconds since 1900-01-01 00:00 UTC plus a binary fraction.
///
/// The seconds half wraps every 2^32 seconds (about 136 years). Nothing in this type knows which
/// era a value belongs to; see [`crate::unix_time`] for the two readings this crate offers.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TimestampFormat {
    /// Seconds since the 1900 epoch, modulo 2^32.
    pub seconds: u32,
    /// Sub-second part in units of 2^-32 s.
    pub fraction: u32,
}

/// Leap-second warning held in the top two bits of the first header byte.
///
/// All four bit patterns are named, so decoding is total.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum LeapIndicator {
    /// `0`: no pending leap second.
    NoWarning = 0,
    /// `1`: the final minute of the month runs to :60.
    AddOne = 1,
    /// `2`: the final minute of the month stops at :58.
    SubOne = 2,
    /// `3`: sender is unsynchronized. Every request this crate builds says this.
    #[default]
    Unknown = 3,
}

impl LeapIndicator {
    /// Map the low two bits of `bits`; higher bits are ignored.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => LeapIndicator::NoWarning,
            1 => LeapIndicator::AddOne,
            2 => LeapIndicator::SubOne,
            _ => LeapIndicator::Unknown,
        }
    }
}

/// Protocol version from bits 2..5 of the first header byte.
///
/// Stored unpacked. A reply may claim any value in `0..=7`.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Version(pub(super) u8);

/// Association mode from the low three bits of the first header byte.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum Mode {
    /// `0`
    Reserved = 0,
    /// `1`
    SymmetricActive = 1,
    /// `2`
    SymmetricPassive = 2,
    /// `3`: what this crate sends.
    #[default]
    Client = 3,
    /// `4`: what a well-behaved reply carries.
    Server = 4,
    /// `5`
    Broadcast = 5,
    /// `6`: ntpq/ntpdc control traffic.
    NtpControlMessage = 6,
    /// `7`
    ReservedForPrivateUse = 7,
}

impl Mode {
    /// Map the low three bits of `bits`; higher bits are ignored.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b111 {
            0 => Mode::Reserved,
            1 => Mode::SymmetricActive,
            2 => Mode::SymmetricPassive,
            3 => Mode::Client,
            4 => Mode::Server,
            5 => Mode::Broadcast,
            6 => Mode::NtpControlMessage,
            _ => Mode::ReservedForPrivateUse,
        }
    }
}

/// Distance from a reference clock: `1` is a primary server, `2..=15` are secondaries,
/// `16` means unsynchronized and `0` is unspecified. Requests send `0`.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Stratum(pub u8);

/// Four opaque octets naming the server's time source.
///
/// Kept raw; replies are never interpreted beyond their transmit timestamp.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct ReferenceIdentifier(pub [u8; 4]);

/// The fixed 48-byte NTP header, unpacked.
///
/// | Offset | Size | Field |
/// |-------:|-----:|-------|
/// | 0      | 1    | LI (2 bits), VN (3 bits), Mode (3 bits) |
/// | 1      | 1    | stratum |
/// | 2      | 1    | poll |
/// | 3      | 1    | precision |
/// | 4      | 4    | root delay |
/// | 8      | 4    | root dispersion |
/// | 12     | 4    | reference id |
/// | 16     | 8    | reference timestamp |
/// | 24     | 8    | origin timestamp |
/// | 32     | 8    | receive timestamp |
/// | 40     | 8    | transmit timestamp |
///
/// Every multi-byte field is big-endian. Extension fields and MACs are not modelled.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Packet {
    /// Header byte 0, bits 7..6.
    pub leap_indicator: LeapIndicator,
    /// Header byte 0, bits 5..3.
    pub version: Version,
    /// Header byte 0, bits 2..0.
    pub mode: Mode,
    /// Header byte 1.
    pub stratum: Stratum,
    /// log2 of the polling interval in seconds.
    pub poll: i8,
    /// log2 of the sender's clock precision in seconds.
    pub precision: i8,
    /// Round-trip delay to the primary source.
    pub root_delay: ShortFormat,
    /// Accumulated error bound to the primary source.
    pub root_dispersion: ShortFormat,
    /// Source identifier, see [`ReferenceIdentifier`].
    pub reference_id: ReferenceIdentifier,
    /// When the sender's clock was last disciplined.
    pub reference_timestamp: TimestampFormat,
    /// Echo of the request's transmit time. Zero in requests from this crate.
    pub origin_timestamp: TimestampFormat,
    /// Server clock when the request arrived.
    pub receive_timestamp: TimestampFormat,
    /// Server clock at the moment the reply left. The only field a reply is read for.
    pub transmit_timestamp: TimestampFormat,
}

/// The three fields packed into header byte 0, in wire order.
pub type PacketByte1 = (LeapIndicator, Version, Mode);

impl ShortFormat {
    /// `0.0`
    pub const ZERO: Self = ShortFormat {
        seconds: 0,
        fraction: 0,
    };
}

impl ReferenceIdentifier {
    /// The four octets `31 4E 31 34` (ASCII `"1N14"`) every request carries.
    ///
    /// Servers do not look at this field in client packets.
    pub const CLIENT_SIGNATURE: Self = ReferenceIdentifier(*b"1N14");

    /// Copy out the raw octets.
    pub fn as_bytes(&self) -> [u8; 4] {
        self.0
    }
}

impl Version {
    /// NTPv4, used for every request.
    pub const V4: Self = Version(4);

    /// The unpacked number.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// `true` for versions 1 through 4.
    pub fn is_known(&self) -> bool {
        matches!(self.0, 1..=4)
    }
}

impl Stratum {
    /// `0`
    pub const UNSPECIFIED: Self = Stratum(0);
    /// `1`
    pub const PRIMARY: Self = Stratum(1);
}

impl TimestampFormat {
    /// `0.0`, also the "not set" marker.
    pub const ZERO: Self = TimestampFormat {
        seconds: 0,
        fraction: 0,
    };

    /// Where the transmit timestamp starts inside a packed [`Packet`].
    pub const TRANSMIT_OFFSET: usize = 40;

    /// Whether this is [`TimestampFormat::ZERO`].
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Pull the transmit seconds straight out of a packed header without decoding the rest.
    ///
    /// Bytes 40..42 are the high half and 42..44 the low half; the fraction at 44..48 is skipped.
    pub fn transmit_seconds(packed: &[u8; Packet::PACKED_SIZE_BYTES]) -> u32 {
        let at = Self::TRANSMIT_OFFSET;
        let high = u16::from_be_bytes([packed[at], packed[at + 1]]);
        let low = u16::from_be_bytes([packed[at + 2], packed[at + 3]]);
        (u32::from(high) << 16) | u32::from(low)
    }
}

impl Packet {
    /// The one request this crate ever sends.
    ///
    /// Byte 0 is `0xE3` (LI 3, VN 4, client mode), followed by stratum 0, poll 6, precision
    /// `0xEC`, zero root delay and dispersion, [`ReferenceIdentifier::CLIENT_SIGNATURE`] and four
    /// zero timestamps. Because the transmit timestamp is zero a reply's origin field cannot be
    /// matched back to the request.
    pub const fn client_request() -> Self {
        Packet {
            leap_indicator: LeapIndicator::Unknown,
            version: Version::V4,
            mode: Mode::Client,
            stratum: Stratum::UNSPECIFIED,
            poll: REQUEST_POLL,
            precision: REQUEST_PRECISION,
            root_delay: ShortFormat::ZERO,
            root_dispersion: ShortFormat::ZERO,
            reference_id: ReferenceIdentifier::CLIENT_SIGNATURE,
            reference_timestamp: TimestampFormat::ZERO,
            origin_timestamp: TimestampFormat::ZERO,
            receive_timestamp: TimestampFormat::ZERO,
            transmit_timestamp: TimestampFormat::ZERO,
        }
    }
}

impl ConstPackedSizeBytes for ShortFormat {
    const PACKED_SIZE_BYTES: usize = 4;
}

impl ConstPackedSizeBytes for TimestampFormat {
    const PACKED_SIZE_BYTES: usize = 8;
}

impl ConstPackedSizeBytes for PacketByte1 {
    const PACKED_SIZE_BYTES: usize = 1;
}

impl ConstPackedSizeBytes for Packet {
    // Four single-byte fields, two short formats, the reference id, four timestamps.
    const PACKED_SIZE_BYTES: usize =
        4 + 2 * ShortFormat::PACKED_SIZE_BYTES + 4 + 4 * TimestampFormat::PACKED_SIZE_BYTES;
}

impl Default for Version {
    fn default() -> Self {
        Version::V4
    }
}

impl Default for Packet {
    /// Same as [`Packet::client_request`].
    fn default() -> Self {
        Packet::client_request()
    }
}

impl fmt::Display for ReferenceIdentifier {
    /// Printable ASCII up to the first NUL; anything else shows as `?`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in self.0.iter().take_while(|&&b| b != 0) {
            let c = if b.is_ascii_graphic() { b as char } else { '?' };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
