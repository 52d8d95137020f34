use std::io::{Read, Write};

use crate::{
    alphabet::{
        Alphabet,
        BASE16_CHARS,
        BASE16_LOWER_CASE_CHARS,
        BASE32_CHARS,
        BASE32_HEX_CHARS,
        BASE32_LOWER_CASE_CHARS,
        BASE64_CHARS,
        BASE64_URL_CHARS,
    },
    decoder::{ChunkDecoder, DecoderReader},
    encoder::{self, CharSink, EncoderWriter},
    error::{Error, Result},
};

/// Hexadecimal encoding with upper-case digits, e.g. `"00FF"`.
pub static BASE16: BaseEncoding = BaseEncoding::new(Alphabet::new(BASE16_CHARS), None);

/// Hexadecimal encoding with lower-case digits, e.g. `"00ff"`.
pub static BASE16_LOWER_CASE: BaseEncoding =
    BaseEncoding::new(Alphabet::new(BASE16_LOWER_CASE_CHARS), None);

/// The RFC 4648 base32 encoding with upper-case letters and `=` padding.
pub static BASE32: BaseEncoding = BaseEncoding::new(Alphabet::new(BASE32_CHARS), Some('='));

/// The RFC 4648 base32 alphabet in lower case, with `=` padding.
pub static BASE32_LOWER_CASE: BaseEncoding =
    BaseEncoding::new(Alphabet::new(BASE32_LOWER_CASE_CHARS), Some('='));

/// The RFC 4648 "extended hex" base32 encoding, which preserves sort order, with `=` padding.
pub static BASE32_HEX: BaseEncoding =
    BaseEncoding::new(Alphabet::new(BASE32_HEX_CHARS), Some('='));

/// The standard RFC 4648 base64 encoding with `=` padding.
pub static BASE64: BaseEncoding = BaseEncoding::new(Alphabet::new(BASE64_CHARS), Some('='));

/// The RFC 4648 URL and filename safe base64 encoding (`-` and `_` in place of `+` and `/`),
/// with `=` padding.
pub static BASE64_URL: BaseEncoding =
    BaseEncoding::new(Alphabet::new(BASE64_URL_CHARS), Some('='));

/// A binary-to-text encoding: an [`Alphabet`] plus padding and line-separator options.
///
/// The fixed encodings ([`BASE16`], [`BASE32`], [`BASE64`], ...) are process-wide statics.
/// Variations are derived from them with the builder methods, which never modify the original:
///
/// ```rust
/// use base_encoding::{BASE64, BASE64_URL};
///
/// assert_eq!(BASE64.encode(b"Man"), "TWFu");
/// assert_eq!(BASE64.decode("TWFu").unwrap(), b"Man");
///
/// let unpadded = BASE64_URL.omit_padding();
/// assert_eq!(unpadded.encode([0xFBu8, 0xFF]), "-_8");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseEncoding {
    alphabet: Alphabet,
    padding: Option<char>,
    separator: Option<Separator>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Separator {
    pub(crate) text: String,
    pub(crate) every: usize,
}

impl BaseEncoding {
    const fn new(alphabet: Alphabet, padding: Option<char>) -> Self {
        Self {
            alphabet,
            padding,
            separator: None,
        }
    }

    /// The alphabet used by this encoding.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The padding character, if this encoding pads its final chunk.
    pub fn padding(&self) -> Option<char> {
        self.padding
    }

    /// The separator text and the number of characters between separators, if any.
    pub fn separator(&self) -> Option<(&str, usize)> {
        self.separator.as_ref().map(|s| (s.text.as_str(), s.every))
    }

    pub(crate) fn is_separator(&self, c: char) -> bool {
        self.separator.as_ref().is_some_and(|s| s.text.contains(c))
    }

    pub(crate) fn separator_config(&self) -> Option<&Separator> {
        self.separator.as_ref()
    }

    /// Encodes all of `bytes`.
    pub fn encode(&self, bytes: impl AsRef<[u8]>) -> String {
        let bytes = bytes.as_ref();
        let mut out = String::with_capacity(self.max_encoded_len(bytes.len()));
        self.encode_to(bytes, &mut out);
        out
    }

    /// Encodes the `length` bytes of `bytes` starting at `offset`.
    ///
    /// Returns an error if the range does not lie within `bytes`.
    ///
    /// ```rust
    /// use base_encoding::BASE16;
    ///
    /// let bytes = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    /// assert_eq!(BASE16.encode_range(&bytes, 2, 3).unwrap(), "020304");
    /// assert!(BASE16.encode_range(&bytes, 8, 3).is_err());
    /// ```
    pub fn encode_range(&self, bytes: &[u8], offset: usize, length: usize) -> Result<String> {
        let range = offset
            .checked_add(length)
            .filter(|end| *end <= bytes.len())
            .map(|end| &bytes[offset..end])
            .ok_or_else(|| Error::out_of_range(offset, length, bytes.len()))?;
        Ok(self.encode(range))
    }

    /// Encodes `bytes`, appending the result to `out`.
    pub fn encode_to(&self, bytes: &[u8], out: &mut String) {
        let mut sink = CharSink::new(self.separator.as_ref());
        encoder::encode_chunks(self, bytes, &mut sink, out);
    }

    /// Decodes `text` into the bytes it represents.
    ///
    /// Only text that [`encode`](Self::encode) could have produced is accepted, apart from
    /// letter case when the encoding [ignores case](Self::ignore_case) and separator characters
    /// when the encoding has a [separator](Self::with_separator).
    pub fn decode(&self, text: impl AsRef<str>) -> Result<Vec<u8>> {
        let text = text.as_ref();
        let mut out = Vec::with_capacity(self.max_decoded_len(text.len()));
        self.decode_to(text, &mut out)?;
        Ok(out)
    }

    /// Decodes `text`, appending the result to `out` and returning the number of bytes
    /// appended. On error `out` is left unchanged.
    pub fn decode_to(&self, text: &str, out: &mut Vec<u8>) -> Result<usize> {
        let start = out.len();
        match self.decode_chars(text, out) {
            Ok(()) => Ok(out.len() - start),
            Err(e) => {
                out.truncate(start);
                Err(e)
            }
        }
    }

    fn decode_chars(&self, text: &str, out: &mut Vec<u8>) -> Result<()> {
        let mut decoder = ChunkDecoder::new(self);
        for c in text.chars() {
            decoder.push(c, out)?;
        }
        decoder.finish(out)
    }

    /// Whether `text` would decode successfully.
    pub fn can_decode(&self, text: impl AsRef<str>) -> bool {
        let mut scratch = Vec::new();
        self.decode_to(text.as_ref(), &mut scratch).is_ok()
    }

    /// The length in bytes of the text produced by encoding `bytes` bytes, saturating at
    /// `usize::MAX`.
    pub fn max_encoded_len(&self, bytes: usize) -> usize {
        let bits = self.alphabet.bits_per_char();
        let chars = if self.padding.is_some() {
            bytes
                .div_ceil(self.alphabet.bytes_per_chunk())
                .saturating_mul(self.alphabet.chars_per_chunk())
        } else {
            // ceil(bytes * 8 / bits) without overflowing the multiplication
            (bytes / bits)
                .saturating_mul(8)
                .saturating_add((bytes % bits * 8).div_ceil(bits))
        };
        match &self.separator {
            Some(separator) if chars > 0 => chars.saturating_add(
                ((chars - 1) / separator.every).saturating_mul(separator.text.len()),
            ),
            _ => chars,
        }
    }

    /// An upper bound on the number of bytes decoded from `chars` characters.
    pub fn max_decoded_len(&self, chars: usize) -> usize {
        let bits = self.alphabet.bits_per_char();
        chars / 8 * bits + chars % 8 * bits / 8
    }

    /// Wraps `inner` so that bytes written to it are encoded and written to `inner` as text.
    ///
    /// Call [`EncoderWriter::finish`] to write the final partial chunk.
    pub fn encoder_writer<W: Write>(&self, inner: W) -> EncoderWriter<'_, W> {
        EncoderWriter::new(self, inner)
    }

    /// Wraps `inner` so that text read from it is decoded.
    pub fn decoder_reader<R: Read>(&self, inner: R) -> DecoderReader<'_, R> {
        DecoderReader::new(self, inner)
    }

    /// An encoding that writes no padding and rejects padding when decoding.
    pub fn omit_padding(&self) -> Self {
        Self {
            padding: None,
            ..self.clone()
        }
    }

    /// An encoding that pads with `pad` instead of the current padding character.
    ///
    /// `pad` must be an ASCII character that is neither in the alphabet nor in the separator.
    pub fn with_pad_char(&self, pad: char) -> Result<Self> {
        if !pad.is_ascii() {
            return Err(Error::invalid_configuration(format!(
                "padding character {pad:?} is not ASCII"
            )));
        }
        Self::checked(self.alphabet.clone(), Some(pad), self.separator.clone())
    }

    /// An encoding that inserts `separator` after every `every` characters of output.
    ///
    /// When decoding, any character that appears in `separator` is skipped wherever it occurs.
    ///
    /// ```rust
    /// use base_encoding::BASE16;
    ///
    /// let spaced = BASE16.with_separator(" ", 2).unwrap();
    /// assert_eq!(spaced.encode([0xDEu8, 0xAD, 0xBE, 0xEF]), "DE AD BE EF");
    /// assert_eq!(spaced.decode("DEAD BE EF").unwrap(), [0xDE, 0xAD, 0xBE, 0xEF]);
    /// ```
    pub fn with_separator(&self, separator: &str, every: usize) -> Result<Self> {
        if self.separator.is_some() {
            return Err(Error::invalid_configuration("encoding already has a separator"));
        }
        if every == 0 {
            return Err(Error::invalid_configuration(
                "separator interval must be greater than zero",
            ));
        }
        if separator.is_empty() || !separator.is_ascii() {
            return Err(Error::invalid_configuration(format!(
                "separator {separator:?} must be non-empty ASCII"
            )));
        }
        let separator = Separator {
            text: separator.to_owned(),
            every,
        };
        Self::checked(self.alphabet.clone(), self.padding, Some(separator))
    }

    /// An encoding using the lower-case form of this encoding's alphabet.
    ///
    /// Fails for alphabets that contain both upper- and lower-case letters.
    pub fn lower_case(&self) -> Result<Self> {
        Self::checked(
            self.alphabet.lower_case()?,
            self.padding,
            self.separator.clone(),
        )
    }

    /// An encoding using the upper-case form of this encoding's alphabet.
    ///
    /// Fails for alphabets that contain both upper- and lower-case letters.
    pub fn upper_case(&self) -> Result<Self> {
        Self::checked(
            self.alphabet.upper_case()?,
            self.padding,
            self.separator.clone(),
        )
    }

    /// An encoding that accepts letters of either case when decoding. Encoding output is
    /// unchanged.
    ///
    /// Fails for alphabets that contain both upper- and lower-case letters.
    pub fn ignore_case(&self) -> Result<Self> {
        Self::checked(
            self.alphabet.ignore_case()?,
            self.padding,
            self.separator.clone(),
        )
    }

    fn checked(
        alphabet: Alphabet,
        padding: Option<char>,
        separator: Option<Separator>,
    ) -> Result<Self> {
        if let Some(pad) = padding {
            if alphabet.matches(pad) {
                return Err(Error::invalid_configuration(format!(
                    "padding character {pad:?} is part of the alphabet"
                )));
            }
        }
        if let Some(separator) = &separator {
            let clash = separator
                .text
                .chars()
                .find(|&c| alphabet.matches(c) || Some(c) == padding);
            if let Some(c) = clash {
                return Err(Error::invalid_configuration(format!(
                    "separator character {c:?} is part of the alphabet or padding"
                )));
            }
        }
        Ok(Self {
            alphabet,
            padding,
            separator,
        })
    }
}
