#![no_main]

use elvdoc::{check_reader, list_entries, read_bundle, ValidateLimits};
use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    let limits = ValidateLimits {
        max_decode_bytes: 16 * 1024 * 1024,
        ..Default::default()
    };
    let _ = check_reader(Cursor::new(data), &limits);
    let _ = read_bundle(Cursor::new(data), &limits);
    let _ = list_entries(Cursor::new(data), &limits);
});
