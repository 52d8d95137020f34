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

use std::io::{self, Read};

use crate::{
    encoding::BaseEncoding,
    error::{Error, ErrorKind, MalformedInputKind, Result},
};

const READ_BUFFER_SIZE: usize = 4096;

/// Incremental decoder fed one character at a time.
///
/// Characters are counted by position so errors can point into the original text.
pub(crate) struct ChunkDecoder<'e> {
    encoding: &'e BaseEncoding,
    values: [u8; 8],
    filled: usize,
    pads: usize,
    last_data: usize,
    index: usize,
    symbols: usize,
    ended: bool,
}

impl<'e> ChunkDecoder<'e> {
    pub(crate) fn new(encoding: &'e BaseEncoding) -> Self {
        Self {
            encoding,
            values: [0; 8],
            filled: 0,
            pads: 0,
            last_data: 0,
            index: 0,
            symbols: 0,
            ended: false,
        }
    }

    pub(crate) fn push(&mut self, c: char, out: &mut Vec<u8>) -> Result<()> {
        let index = self.index;
        self.index += 1;

        if self.encoding.is_separator(c) {
            return Ok(());
        }
        self.symbols += 1;

        // nothing may follow a padded chunk
        if self.ended {
            return Err(Error::invalid_padding(index));
        }

        let alphabet = self.encoding.alphabet();
        if Some(c) == self.encoding.padding() {
            if self.pads == 0 && !alphabet.is_valid_partial_chunk(self.filled) {
                return Err(Error::invalid_padding(index));
            }
            self.pads += 1;
            if self.filled + self.pads == alphabet.chars_per_chunk() {
                self.flush(out)?;
                self.pads = 0;
                self.ended = true;
            }
            return Ok(());
        }

        let value = alphabet
            .decode(c)
            .ok_or_else(|| Error::invalid_character(c, index))?;
        if self.pads > 0 {
            return Err(Error::invalid_padding(index));
        }

        self.values[self.filled] = value;
        self.filled += 1;
        self.last_data = index;
        if self.filled == alphabet.chars_per_chunk() {
            self.flush(out)?;
        }
        Ok(())
    }

    /// Checks the input ended on a chunk boundary, or on a valid partial chunk for encodings
    /// without padding, and decodes whatever remains.
    pub(crate) fn finish(&mut self, out: &mut Vec<u8>) -> Result<()> {
        if self.filled == 0 && self.pads == 0 {
            return Ok(());
        }
        if self.encoding.padding().is_some()
            || !self.encoding.alphabet().is_valid_partial_chunk(self.filled)
        {
            return Err(Error::invalid_length(self.symbols));
        }
        self.flush(out)
    }

    fn flush(&mut self, out: &mut Vec<u8>) -> Result<()> {
        let bits = self.encoding.alphabet().bits_per_char();

        let mut buffer: u64 = 0;
        for &value in &self.values[..self.filled] {
            buffer = (buffer << bits) | u64::from(value);
        }

        let data_bits = self.filled * bits;
        let bytes = data_bits / 8;
        let extra = data_bits - bytes * 8;
        if buffer & ((1 << extra) - 1) != 0 {
            return Err(Error::trailing_bits(self.last_data));
        }
        buffer >>= extra;

        for i in (0..bytes).rev() {
            out.push((buffer >> (i * 8)) as u8);
        }
        self.filled = 0;
        Ok(())
    }
}

/// A [`Read`] adapter that decodes text read from an inner reader.
///
/// The inner reader's bytes are taken one per character, so any non-ASCII byte is rejected as
/// an invalid character. Malformed input is reported as an [`io::Error`] of kind
/// [`InvalidData`](io::ErrorKind::InvalidData) wrapping the crate's [`Error`]. Once that
/// happens, every later `read` fails with the same error.
///
/// ```rust
/// use std::io::Read;
/// use base_encoding::BASE32;
///
/// let mut reader = BASE32.decoder_reader("MZXW6===".as_bytes());
/// let mut decoded = Vec::new();
/// reader.read_to_end(&mut decoded).unwrap();
/// assert_eq!(decoded, b"foo");
/// ```
pub struct DecoderReader<'e, R: Read> {
    decoder: ChunkDecoder<'e>,
    inner: R,
    input: Box<[u8]>,
    decoded: Vec<u8>,
    position: usize,
    finished: bool,
    failed: Option<MalformedInputKind>,
}

impl<'e, R: Read> DecoderReader<'e, R> {
    pub(crate) fn new(encoding: &'e BaseEncoding, inner: R) -> Self {
        Self {
            decoder: ChunkDecoder::new(encoding),
            inner,
            input: vec![0; READ_BUFFER_SIZE].into_boxed_slice(),
            decoded: Vec::new(),
            position: 0,
            finished: false,
            failed: None,
        }
    }

    /// Consumes the reader, returning the inner reader.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Reads more text from the inner reader and decodes it. Returns `false` once the input is
    /// exhausted.
    fn fill(&mut self) -> io::Result<bool> {
        if let Some(kind) = &self.failed {
            let kind = ErrorKind::MalformedInput { kind: kind.clone() };
            return Err(Error::from(kind).into());
        }
        if self.finished {
            return Ok(false);
        }
        self.decoded.clear();
        self.position = 0;

        let n = loop {
            match self.inner.read(&mut self.input) {
                Ok(n) => break n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        };

        if let Err(e) = self.decode_input(n) {
            // nothing decoded from a malformed stream is handed out
            self.decoded.clear();
            if let ErrorKind::MalformedInput { kind } = &e.kind {
                self.failed = Some(kind.clone());
            }
            return Err(e.into());
        }
        Ok(true)
    }

    fn decode_input(&mut self, n: usize) -> Result<()> {
        if n == 0 {
            self.finished = true;
            return self.decoder.finish(&mut self.decoded);
        }
        for &b in &self.input[..n] {
            self.decoder.push(char::from(b), &mut self.decoded)?;
        }
        Ok(())
    }
}

impl<R: Read> Read for DecoderReader<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        while self.position == self.decoded.len() {
            if !self.fill()? {
                return Ok(0);
            }
        }

        let available = &self.decoded[self.position..];
        let n = available.len().min(buf.len());
        buf[..n].copy_from_slice(&available[..n]);
        self.position += n;
        Ok(n)
    }
}
