#![no_main]
use std::fmt::Write;

use libfuzzer_sys::fuzz_target;
use stamp_proto::civil::{CivilDateTime, TimestampStyle};

fuzz_target!(|secs: i64| {
    let dt = CivilDateTime::from_unix_seconds(secs);
    assert!((1..=12).contains(&dt.month));
    assert!((1..=31).contains(&dt.day));
    assert!(dt.hour < 24 && dt.minute < 60 && dt.second < 60);

    let mut out = String::new();
    write!(out, "{}", dt.display(TimestampStyle::Compact)).expect("formatting into a String");
    assert!(out.contains('T'));
});
