//! Modules for (de)serializing byte fields as encoded strings with `#[serde(with = "...")]`.
//!
//! ```rust
//! # #[cfg(feature = "serde")]
//! # {
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Attachment {
//!     #[serde(with = "base_encoding::serde_helpers::base64")]
//!     data: Vec<u8>,
//! }
//! # }
//! ```

macro_rules! encoding_helpers {
    ($($(#[$doc:meta])* $name:ident => $encoding:ident;)+) => {
        $(
            $(#[$doc])*
            pub mod $name {
                use serde::{de, Deserialize, Deserializer, Serializer};

                /// Serializes `bytes` as an encoded string.
                pub fn serialize<T, S>(bytes: &T, serializer: S) -> Result<S::Ok, S::Error>
                where
                    T: AsRef<[u8]> + ?Sized,
                    S: Serializer,
                {
                    serializer.serialize_str(&crate::$encoding.encode(bytes.as_ref()))
                }

                /// Deserializes bytes from an encoded string.
                pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    let text = String::deserialize(deserializer)?;
                    crate::$encoding.decode(&text).map_err(de::Error::custom)
                }
            }
        )+
    };
}

encoding_helpers! {
    /// Upper-case hexadecimal, see [`BASE16`](crate::BASE16).
    base16 => BASE16;
    /// Lower-case hexadecimal, see [`BASE16_LOWER_CASE`](crate::BASE16_LOWER_CASE).
    base16_lower_case => BASE16_LOWER_CASE;
    /// See [`BASE32`](crate::BASE32).
    base32 => BASE32;
    /// See [`BASE32_LOWER_CASE`](crate::BASE32_LOWER_CASE).
    base32_lower_case => BASE32_LOWER_CASE;
    /// See [`BASE32_HEX`](crate::BASE32_HEX).
    base32_hex => BASE32_HEX;
    /// See [`BASE64`](crate::BASE64).
    base64 => BASE64;
    /// See [`BASE64_URL`](crate::BASE64_URL).
    base64_url => BASE64_URL;
}
