#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate base_encoding;

use base_encoding::{BASE16, BASE32, BASE32_HEX, BASE64, BASE64_URL};

fuzz_target!(|buf: &[u8]| {
    if let Ok(text) = std::str::from_utf8(buf) {
        for encoding in [&BASE16, &BASE32, &BASE32_HEX, &BASE64, &BASE64_URL] {
            if let Ok(bytes) = encoding.decode(text) {
                assert_eq!(encoding.encode(bytes), text);
            }
        }
    }
});
