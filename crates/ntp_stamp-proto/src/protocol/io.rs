use byteorder::{BE, ReadBytesExt, WriteBytesExt};
use std::io;

use super::bytes::{pack_byte1, unpack_byte1};
use super::{
    Packet, ReadBytes, ReadFromBytes, ReferenceIdentifier, ShortFormat, Stratum, TimestampFormat,
    WriteBytes, WriteToBytes,
};

impl<W> WriteBytes for W
where
    W: WriteBytesExt,
{
    fn write_bytes<P: WriteToBytes>(&mut self, protocol: P) -> io::Result<()> {
        protocol.write_to_bytes(self)
    }
}

impl<R> ReadBytes for R
where
    R: ReadBytesExt,
{
    fn read_bytes<P: ReadFromBytes>(&mut self) -> io::Result<P> {
        P::read_from_bytes(self)
    }
}

impl<P> WriteToBytes for &P
where
    P: WriteToBytes,
{
    fn write_to_bytes<W: WriteBytesExt>(&self, writer: W) -> io::Result<()> {
        (**self).write_to_bytes(writer)
    }
}

impl WriteToBytes for ShortFormat {
    fn write_to_bytes<W: WriteBytesExt>(&self, mut writer: W) -> io::Result<()> {
        writer.write_u16::<BE>(self.seconds)?;
        writer.write_u16::<BE>(self.fraction)
    }
}

impl ReadFromBytes for ShortFormat {
    fn read_from_bytes<R: ReadBytesExt>(mut reader: R) -> io::Result<Self> {
        Ok(ShortFormat {
            seconds: reader.read_u16::<BE>()?,
            fraction: reader.read_u16::<BE>()?,
        })
    }
}

impl WriteToBytes for TimestampFormat {
    fn write_to_bytes<W: WriteBytesExt>(&self, mut writer: W) -> io::Result<()> {
        writer.write_u32::<BE>(self.seconds)?;
        writer.write_u32::<BE>(self.fraction)
    }
}

impl ReadFromBytes for TimestampFormat {
    fn read_from_bytes<R: ReadBytesExt>(mut reader: R) -> io::Result<Self> {
        Ok(TimestampFormat {
            seconds: reader.read_u32::<BE>()?,
            fraction: reader.read_u32::<BE>()?,
        })
    }
}

impl WriteToBytes for Packet {
    fn write_to_bytes<W: WriteBytesExt>(&self, mut writer: W) -> io::Result<()> {
        writer.write_u8(pack_byte1((self.leap_indicator, self.version, self.mode)))?;
        writer.write_u8(self.stratum.0)?;
        writer.write_i8(self.poll)?;
        writer.write_i8(self.precision)?;
        writer.write_bytes(self.root_delay)?;
        writer.write_bytes(self.root_dispersion)?;
        writer.write_all(&self.reference_id.0)?;
        for ts in [
            self.reference_timestamp,
            self.origin_timestamp,
            self.receive_timestamp,
            self.transmit_timestamp,
        ] {
            writer.write_bytes(ts)?;
        }
        Ok(())
    }
}

impl ReadFromBytes for Packet {
    /// Reads exactly 48 bytes. A reader that runs dry yields `UnexpectedEof`.
    fn read_from_bytes<R: ReadBytesExt>(mut reader: R) -> io::Result<Self> {
        let (leap_indicator, version, mode) = unpack_byte1(reader.read_u8()?);
        let stratum = Stratum(reader.read_u8()?);
        let poll = reader.read_i8()?;
        let precision = reader.read_i8()?;
        let root_delay = reader.read_bytes()?;
        let root_dispersion = reader.read_bytes()?;
        let mut reference_id = [0u8; 4];
        reader.read_exact(&mut reference_id)?;
        Ok(Packet {
            leap_indicator,
            version,
            mode,
            stratum,
            poll,
            precision,
            root_delay,
            root_dispersion,
            reference_id: ReferenceIdentifier(reference_id),
            reference_timestamp: reader.read_bytes()?,
            origin_timestamp: reader.read_bytes()?,
            receive_timestamp: reader.read_bytes()?,
            transmit_timestamp: reader.read_bytes()?,
        })
    }
}
