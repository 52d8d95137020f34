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

//! Encoder

use std::io::{self, Write};

use crate::encoding::{BaseEncoding, Separator};

/// Tracks the output column so separators land at the same positions regardless of how the
/// input is split across calls.
pub(crate) struct CharSink<'a> {
    separator: Option<&'a Separator>,
    column: usize,
}

impl<'a> CharSink<'a> {
    pub(crate) fn new(separator: Option<&'a Separator>) -> Self {
        Self {
            separator,
            column: 0,
        }
    }

    fn push(&mut self, out: &mut String, c: char) {
        if let Some(separator) = self.separator {
            if self.column > 0 && self.column % separator.every == 0 {
                out.push_str(&separator.text);
            }
        }
        out.push(c);
        self.column += 1;
    }
}

/// Encodes a single chunk of at most `bytes_per_chunk` bytes, padding it if the encoding pads.
fn encode_chunk(encoding: &BaseEncoding, chunk: &[u8], sink: &mut CharSink, out: &mut String) {
    let alphabet = encoding.alphabet();
    let bits = alphabet.bits_per_char();

    let mut buffer: u64 = 0;
    for &b in chunk {
        buffer = (buffer << 8) | u64::from(b);
    }

    // left-align the data so it fills a whole number of characters
    let data_bits = chunk.len() * 8;
    let chars = data_bits.div_ceil(bits);
    buffer <<= chars * bits - data_bits;

    for i in (0..chars).rev() {
        let value = (buffer >> (i * bits)) as u8;
        sink.push(out, char::from(alphabet.encode(value)));
    }

    if let Some(pad) = encoding.padding() {
        for _ in chars..alphabet.chars_per_chunk() {
            sink.push(out, pad);
        }
    }
}

pub(crate) fn encode_chunks(
    encoding: &BaseEncoding,
    bytes: &[u8],
    sink: &mut CharSink,
    out: &mut String,
) {
    for chunk in bytes.chunks(encoding.alphabet().bytes_per_chunk()) {
        encode_chunk(encoding, chunk, sink, out);
    }
}

/// A [`Write`] adapter that encodes everything written to it and writes the text to an inner
/// writer.
///
/// Bytes that do not yet fill a whole chunk are held back until more input arrives or
/// [`finish`](Self::finish) is called. Dropping the writer without calling `finish` writes the
/// final chunk on a best-effort basis and ignores any error.
///
/// ```rust
/// use std::io::Write;
/// use base_encoding::BASE64;
///
/// let mut writer = BASE64.encoder_writer(Vec::new());
/// writer.write_all(b"Ma").unwrap();
/// writer.write_all(b"n!").unwrap();
/// let text = writer.finish().unwrap();
/// assert_eq!(text, b"TWFuIQ==");
/// ```
pub struct EncoderWriter<'e, W: Write> {
    encoding: &'e BaseEncoding,
    inner: Option<W>,
    pending: Vec<u8>,
    column: usize,
    output: String,
}

impl<'e, W: Write> EncoderWriter<'e, W> {
    pub(crate) fn new(encoding: &'e BaseEncoding, inner: W) -> Self {
        Self {
            encoding,
            inner: Some(inner),
            pending: Vec::with_capacity(encoding.alphabet().bytes_per_chunk()),
            column: 0,
            output: String::new(),
        }
    }

    /// A reference to the inner writer.
    pub fn get_ref(&self) -> &W {
        // only `finish` and `drop` take the writer, and both consume `self`
        self.inner
            .as_ref()
            .expect("inner writer is present until the encoder writer is finished")
    }

    /// Encodes `len` bytes from the front of `pending` and writes them out.
    fn write_pending(&mut self, len: usize) -> io::Result<()> {
        let inner = self
            .inner
            .as_mut()
            .ok_or_else(|| io::Error::other("encoder writer already finished"))?;

        self.output.clear();
        let mut sink = CharSink {
            separator: self.encoding.separator_config(),
            column: self.column,
        };
        encode_chunks(self.encoding, &self.pending[..len], &mut sink, &mut self.output);
        inner.write_all(self.output.as_bytes())?;

        self.column = sink.column;
        self.pending.drain(..len);
        Ok(())
    }

    /// Writes the final, possibly partial, chunk and returns the inner writer.
    ///
    /// If that write fails the inner writer is dropped without another attempt.
    pub fn finish(mut self) -> io::Result<W> {
        let result = self.write_pending(self.pending.len());
        let inner = self
            .inner
            .take()
            .ok_or_else(|| io::Error::other("encoder writer already finished"))?;
        result.map(|()| inner)
    }
}

impl<W: Write> Write for EncoderWriter<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);
        let chunk = self.encoding.alphabet().bytes_per_chunk();
        let whole = self.pending.len() - self.pending.len() % chunk;
        if whole > 0 {
            if let Err(e) = self.write_pending(whole) {
                self.pending.truncate(self.pending.len() - buf.len());
                return Err(e);
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.inner.as_mut() {
            Some(inner) => inner.flush(),
            None => Ok(()),
        }
    }
}

impl<W: Write> Drop for EncoderWriter<'_, W> {
    fn drop(&mut self) {
        if self.inner.is_some() {
            let _ = self.write_pending(self.pending.len());
        }
    }
}
