#![no_main]
use libfuzzer_sys::fuzz_target;
use stamp_proto::protocol::{ConstPackedSizeBytes, FromBytes, Packet, TimestampFormat, ToBytes};

fuzz_target!(|data: &[u8]| {
    if let Ok((packet, consumed)) = Packet::from_bytes(data) {
        assert_eq!(consumed, Packet::PACKED_SIZE_BYTES);

        // Every header re-encodes to the bytes it was decoded from.
        let mut buf = [0u8; Packet::PACKED_SIZE_BYTES];
        let written = packet
            .to_bytes(&mut buf)
            .expect("ToBytes should succeed for a decoded Packet");
        assert_eq!(written, Packet::PACKED_SIZE_BYTES);
        assert_eq!(&buf[..], &data[..Packet::PACKED_SIZE_BYTES]);

        assert_eq!(
            TimestampFormat::transmit_seconds(&buf),
            packet.transmit_timestamp.seconds
        );
    }
});
