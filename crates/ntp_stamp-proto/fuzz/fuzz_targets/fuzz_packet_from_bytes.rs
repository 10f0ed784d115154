#![no_main]
use libfuzzer_sys::fuzz_target;
use stamp_proto::protocol::FromBytes;
use stamp_proto::protocol::Packet;

fuzz_target!(|data: &[u8]| {
    // Parse from arbitrary bytes; must not panic.
    let _ = Packet::from_bytes(data);
});
