#![no_main]

use elvdoc::archive::decode_config;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(config) = decode_config(data.to_vec()) {
        assert!(!config.version.is_empty());
        assert!(!config.elvdoc.is_null());
    }
});
