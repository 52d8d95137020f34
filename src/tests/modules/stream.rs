use std::io::{self, Read, Write};

use pretty_assertions::assert_eq;

use crate::{Error, BASE16, BASE32, BASE64};

/// Yields at most one byte per `read` call.
struct Trickle<'a>(&'a [u8]);

impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match (self.0.split_first(), buf.first_mut()) {
            (Some((&b, rest)), Some(slot)) => {
                *slot = b;
                self.0 = rest;
                Ok(1)
            }
            _ => Ok(0),
        }
    }
}

/// Accepts `capacity` bytes, then fails every write. Counts write calls.
#[derive(Debug)]
struct Cramped {
    written: Vec<u8>,
    capacity: usize,
    calls: usize,
}

impl Cramped {
    fn new(capacity: usize) -> Self {
        Self {
            written: Vec::new(),
            capacity,
            calls: 0,
        }
    }
}

impl Write for Cramped {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.calls += 1;
        let room = self.capacity - self.written.len();
        if room == 0 {
            return Err(io::Error::new(io::ErrorKind::WriteZero, "full"));
        }
        let n = room.min(buf.len());
        self.written.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn writer_matches_one_shot_encoding() {
    let bytes: Vec<u8> = (0..=255).collect();
    let separated = BASE32.with_separator("\n", 7).unwrap();

    for encoding in [&BASE16, &BASE32, &BASE64, &separated] {
        for piece in [1, 2, 3, 4, 5, 17, 300] {
            let mut writer = encoding.encoder_writer(Vec::new());
            for chunk in bytes.chunks(piece) {
                writer.write_all(chunk).unwrap();
            }
            let text = writer.finish().unwrap();
            assert_eq!(String::from_utf8(text).unwrap(), encoding.encode(&bytes));
        }
    }
}

#[test]
fn writer_holds_back_partial_chunk() {
    let mut writer = BASE64.encoder_writer(Vec::new());
    writer.write_all(b"Ma").unwrap();
    assert_eq!(writer.get_ref(), b"");
    writer.write_all(b"n").unwrap();
    assert_eq!(writer.get_ref(), b"TWFu");
    writer.flush().unwrap();
    assert_eq!(writer.finish().unwrap(), b"TWFu");
}

#[test]
fn writer_finishes_on_drop() {
    let mut text = Vec::new();
    {
        let mut writer = BASE64.encoder_writer(&mut text);
        writer.write_all(b"M").unwrap();
    }
    assert_eq!(text, b"TQ==");
}

#[test]
fn writer_failed_finish_is_not_retried_on_drop() {
    let mut inner = Cramped::new(2);
    let mut writer = BASE64.encoder_writer(&mut inner);
    writer.write_all(b"M").unwrap();
    let error = writer.finish().unwrap_err();
    assert_eq!(error.kind(), io::ErrorKind::WriteZero);

    // one call writes "TQ", the next hits the limit, and nothing follows
    assert_eq!(inner.written, b"TQ");
    assert_eq!(inner.calls, 2);
}

#[test]
fn writer_rolls_back_failed_write() {
    let mut inner = Cramped::new(0);
    let mut writer = BASE64.encoder_writer(&mut inner);
    assert_eq!(
        writer.write(b"Man").unwrap_err().kind(),
        io::ErrorKind::WriteZero
    );
    // the failed bytes are not held back for a later chunk
    writer.write_all(b"M").unwrap();
    assert_eq!(writer.get_ref().written, b"");
    drop(writer);
    assert_eq!(inner.calls, 2);
}

#[test]
fn reader_matches_one_shot_decoding() {
    let bytes: Vec<u8> = (0..=255).rev().collect();
    let separated = BASE64.with_separator("\r\n", 76).unwrap();

    for encoding in [&BASE16, &BASE32, &BASE64, &separated] {
        let text = encoding.encode(&bytes);

        let mut decoded = Vec::new();
        encoding
            .decoder_reader(text.as_bytes())
            .read_to_end(&mut decoded)
            .unwrap();
        assert_eq!(decoded, bytes);

        let mut decoded = Vec::new();
        encoding
            .decoder_reader(Trickle(text.as_bytes()))
            .read_to_end(&mut decoded)
            .unwrap();
        assert_eq!(decoded, bytes);
    }
}

#[test]
fn reader_small_buffers() {
    let mut reader = BASE16.decoder_reader("DEADBEEF".as_bytes());
    let mut buf = [0u8; 3];
    assert_eq!(reader.read(&mut buf).unwrap(), 3);
    assert_eq!(buf, [0xDE, 0xAD, 0xBE]);
    assert_eq!(reader.read(&mut buf).unwrap(), 1);
    assert_eq!(buf[0], 0xEF);
    assert_eq!(reader.read(&mut buf).unwrap(), 0);
    assert_eq!(reader.read(&mut []).unwrap(), 0);
}

#[test]
fn reader_reports_malformed_input() {
    for text in ["TWF", "TW!u", "TR==", "TQ==TQ==", "TWF\u{e9}"] {
        let mut decoded = Vec::new();
        let error = BASE64
            .decoder_reader(text.as_bytes())
            .read_to_end(&mut decoded)
            .unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::InvalidData, "input {:?}", text);

        let inner = error
            .get_ref()
            .and_then(|e| e.downcast_ref::<Error>())
            .expect("io error should wrap the decoding error");
        assert!(inner.is_malformed_input());
        assert!(BASE64.decode(text).is_err());
    }
}

#[test]
fn reader_keeps_failing_after_malformed_input() {
    for text in ["TWFu!", "TWF", "TWFuTR=="] {
        let mut reader = BASE64.decoder_reader(text.as_bytes());
        let mut buf = [0u8; 16];
        for _ in 0..3 {
            let error = reader.read(&mut buf).unwrap_err();
            assert_eq!(error.kind(), io::ErrorKind::InvalidData, "input {:?}", text);
            let inner = error
                .get_ref()
                .and_then(|e| e.downcast_ref::<Error>())
                .expect("io error should wrap the decoding error");
            assert!(inner.is_malformed_input());
        }
    }
}

#[test]
fn reader_into_inner() {
    let mut reader = BASE16.decoder_reader(Trickle(b"00"));
    let mut decoded = Vec::new();
    reader.read_to_end(&mut decoded).unwrap();
    assert_eq!(decoded, [0]);
    assert!(reader.into_inner().0.is_empty());
}
