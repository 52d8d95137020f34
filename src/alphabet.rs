//! RFC 4648 alphabets and the chunking parameters derived from them.
//! <https://www.rfc-editor.org/rfc/rfc4648>

use std::fmt;

use crate::error::{Error, Result};

const INVALID: u8 = 0xFF;

pub(crate) const BASE16_CHARS: &[u8] = b"0123456789ABCDEF";
pub(crate) const BASE16_LOWER_CASE_CHARS: &[u8] = b"0123456789abcdef";
pub(crate) const BASE32_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
pub(crate) const BASE32_LOWER_CASE_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz234567";
pub(crate) const BASE32_HEX_CHARS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUV";
pub(crate) const BASE64_CHARS: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
pub(crate) const BASE64_URL_CHARS: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// The set of characters used by a [`BaseEncoding`](crate::BaseEncoding), together with the
/// reverse lookup table used when decoding.
///
/// An alphabet has 16, 32 or 64 distinct ASCII characters, which fixes how many bits each
/// character carries and how bytes group into chunks:
///
/// | size | bits/char | chars/chunk | bytes/chunk |
/// |------|-----------|-------------|-------------|
/// | 16   | 4         | 2           | 1           |
/// | 32   | 5         | 8           | 5           |
/// | 64   | 6         | 4           | 3           |
#[derive(Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: [u8; 64],
    len: usize,
    bits_per_char: usize,
    decode_table: [u8; 128],
    ignore_case: bool,
}

impl Alphabet {
    /// Builds an alphabet from its characters, in value order.
    ///
    /// Only called on the crate's own constants; an invalid character set is a bug and fails
    /// const evaluation.
    pub(crate) const fn new(chars: &[u8]) -> Self {
        let bits_per_char = match chars.len() {
            16 => 4,
            32 => 5,
            64 => 6,
            _ => panic!("alphabet must have 16, 32 or 64 characters"),
        };

        let mut table = [0u8; 64];
        let mut decode_table = [INVALID; 128];
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];
            assert!(c.is_ascii(), "alphabet characters must be ASCII");
            assert!(
                decode_table[c as usize] == INVALID,
                "alphabet characters must be distinct"
            );
            table[i] = c;
            decode_table[c as usize] = i as u8;
            i += 1;
        }

        Self {
            chars: table,
            len: chars.len(),
            bits_per_char,
            decode_table,
            ignore_case: false,
        }
    }

    /// The alphabet's characters, in value order.
    pub fn chars(&self) -> &[u8] {
        &self.chars[..self.len]
    }

    /// The number of bits a single character encodes.
    pub fn bits_per_char(&self) -> usize {
        self.bits_per_char
    }

    /// The number of characters in one whole chunk.
    pub fn chars_per_chunk(&self) -> usize {
        // 8 / gcd(8, bits)
        match self.bits_per_char {
            4 => 2,
            6 => 4,
            _ => 8,
        }
    }

    /// The number of bytes in one whole chunk.
    pub fn bytes_per_chunk(&self) -> usize {
        self.chars_per_chunk() * self.bits_per_char / 8
    }

    /// Whether decoding accepts both cases of the alphabet's letters.
    pub fn ignores_case(&self) -> bool {
        self.ignore_case
    }

    /// Whether `c` is one of the characters this alphabet decodes.
    pub fn matches(&self, c: char) -> bool {
        self.decode(c).is_some()
    }

    pub(crate) fn encode(&self, value: u8) -> u8 {
        self.chars[(value as usize) & (self.len - 1)]
    }

    pub(crate) fn decode(&self, c: char) -> Option<u8> {
        let index = c as usize;
        if index >= self.decode_table.len() {
            return None;
        }
        match self.decode_table[index] {
            INVALID => None,
            value => Some(value),
        }
    }

    /// Whether a trailing partial chunk of `chars` characters can be produced by encoding.
    pub(crate) fn is_valid_partial_chunk(&self, chars: usize) -> bool {
        let bytes = chars * self.bits_per_char / 8;
        bytes > 0 && (bytes * 8).div_ceil(self.bits_per_char) == chars
    }

    fn has_lower_case(&self) -> bool {
        self.chars().iter().any(u8::is_ascii_lowercase)
    }

    fn has_upper_case(&self) -> bool {
        self.chars().iter().any(u8::is_ascii_uppercase)
    }

    fn check_single_case(&self) -> Result<()> {
        if self.has_lower_case() && self.has_upper_case() {
            return Err(Error::invalid_configuration(format!(
                "alphabet {:?} mixes upper and lower case",
                self
            )));
        }
        Ok(())
    }

    fn map_chars(&self, f: impl Fn(u8) -> u8) -> Self {
        let mut mapped = self.clone();
        mapped.decode_table = [INVALID; 128];
        for (i, c) in mapped.chars[..self.len].iter_mut().enumerate() {
            *c = f(*c);
            mapped.decode_table[*c as usize] = i as u8;
        }
        if self.ignore_case {
            mapped.fill_other_case();
        }
        mapped
    }

    fn fill_other_case(&mut self) {
        for (i, c) in self.chars[..self.len].iter().enumerate() {
            if c.is_ascii_alphabetic() {
                self.decode_table[c.to_ascii_lowercase() as usize] = i as u8;
                self.decode_table[c.to_ascii_uppercase() as usize] = i as u8;
            }
        }
    }

    pub(crate) fn lower_case(&self) -> Result<Self> {
        self.check_single_case()?;
        if !self.has_upper_case() {
            return Ok(self.clone());
        }
        Ok(self.map_chars(|c| c.to_ascii_lowercase()))
    }

    pub(crate) fn upper_case(&self) -> Result<Self> {
        self.check_single_case()?;
        if !self.has_lower_case() {
            return Ok(self.clone());
        }
        Ok(self.map_chars(|c| c.to_ascii_uppercase()))
    }

    pub(crate) fn ignore_case(&self) -> Result<Self> {
        self.check_single_case()?;
        let mut alphabet = self.clone();
        alphabet.ignore_case = true;
        alphabet.fill_other_case();
        Ok(alphabet)
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chars = String::from_utf8_lossy(self.chars());
        if self.ignore_case {
            write!(f, "Alphabet({chars:?}, ignore_case)")
        } else {
            write!(f, "Alphabet({chars:?})")
        }
    }
}
