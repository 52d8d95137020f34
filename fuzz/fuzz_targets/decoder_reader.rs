#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate base_encoding;

use base_encoding::BASE64;
use std::io::Read;

fuzz_target!(|buf: &[u8]| {
    let mut decoded = Vec::new();
    let streamed = BASE64.decoder_reader(buf).read_to_end(&mut decoded);
    if let Ok(text) = std::str::from_utf8(buf) {
        assert_eq!(streamed.is_ok(), BASE64.decode(text).is_ok());
    }
});
