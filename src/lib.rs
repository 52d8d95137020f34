// The MIT License (MIT)

// Copyright (c) 2026 The base-encoding developers

// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:

// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Binary-to-text encodings from [RFC 4648](https://www.rfc-editor.org/rfc/rfc4648): base16
//! (hexadecimal), base32 and base64, each in the variants in common use.
//!
//! Every encoding is a [`BaseEncoding`]. The common ones are immutable statics that can be shared
//! freely between threads:
//!
//! | static               | alphabet                              | padding |
//! |----------------------|---------------------------------------|---------|
//! | [`BASE16`]           | `0-9 A-F`                             | none    |
//! | [`BASE16_LOWER_CASE`]| `0-9 a-f`                             | none    |
//! | [`BASE32`]           | `A-Z 2-7`                             | `=`     |
//! | [`BASE32_LOWER_CASE`]| `a-z 2-7`                             | `=`     |
//! | [`BASE32_HEX`]       | `0-9 A-V`                             | `=`     |
//! | [`BASE64`]           | `A-Z a-z 0-9 + /`                     | `=`     |
//! | [`BASE64_URL`]       | `A-Z a-z 0-9 - _`                     | `=`     |
//!
//! ## Basic usage
//!
//! ```rust
//! use base_encoding::{BASE16, BASE16_LOWER_CASE, BASE64};
//!
//! assert_eq!(BASE16.encode([0x00u8, 0xFF]), "00FF");
//! assert_eq!(BASE16_LOWER_CASE.encode([0x00u8, 0xFF]), "00ff");
//!
//! let bytes = BASE64.decode("TWFu").unwrap();
//! assert_eq!(bytes, b"Man");
//!
//! // decoding only accepts what encoding could have produced
//! assert!(BASE64.decode("TWF").unwrap_err().is_malformed_input());
//! assert!(BASE16_LOWER_CASE.decode("00FF").is_err());
//! ```
//!
//! Decoding is strict about case: [`BASE16`] rejects `"ff"` and [`BASE16_LOWER_CASE`] rejects
//! `"FF"`. Use [`BaseEncoding::ignore_case`] to accept both.
//!
//! ## Streams
//!
//! [`BaseEncoding::encoder_writer`] and [`BaseEncoding::decoder_reader`] wrap
//! [`std::io::Write`] and [`std::io::Read`] implementations to encode and decode incrementally.
//!
//! ## Cargo features
//!
//! - `serde`: enables the [`serde_helpers`] modules for representing byte fields as encoded
//!   strings.

pub use self::{
    alphabet::Alphabet,
    decoder::DecoderReader,
    encoder::EncoderWriter,
    encoding::{
        BaseEncoding,
        BASE16,
        BASE16_LOWER_CASE,
        BASE32,
        BASE32_HEX,
        BASE32_LOWER_CASE,
        BASE64,
        BASE64_URL,
    },
    error::{Error, ErrorKind, MalformedInputKind, Result},
};

mod alphabet;
mod decoder;
mod encoder;
mod encoding;
pub mod error;
#[cfg(feature = "serde")]
pub mod serde_helpers;
