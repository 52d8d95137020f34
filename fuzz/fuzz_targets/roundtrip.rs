#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate base_encoding;

use base_encoding::{BASE16, BASE32, BASE64, BASE64_URL};

fuzz_target!(|buf: &[u8]| {
    for encoding in [&BASE16, &BASE32, &BASE64, &BASE64_URL] {
        let text = encoding.encode(buf);
        assert_eq!(encoding.decode(&text).unwrap(), buf);

        let unpadded = encoding.omit_padding();
        assert_eq!(unpadded.decode(unpadded.encode(buf)).unwrap(), buf);
    }
});
