#![cfg(feature = "std")]

use std::io::{self, Cursor, ErrorKind, Write};

use hexcodec::{
    avec::{self, HexDecoder, HexEncoder, reader::Error},
    dialect::{DefaultDecoder, HexDumpDecoder, HexDumpEncoder, StrictDecoder, standard},
    sans::decode::SyntaxError,
};

fn decode(s: &[u8], d: &impl HexDecoder) -> Result<Vec<u8>, Error> {
    let mut out = Vec::new();
    avec::decode_reader(&mut Cursor::new(s), &mut out, d)?;
    Ok(out)
}

fn encode(b: &[u8], e: &impl HexEncoder) -> Result<String, Error> {
    let mut out = Vec::new();
    avec::encode_reader(&mut Cursor::new(b), &mut out, e)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn reader_matches_slice() {
    let b: Vec<u8> = (0..=255).rev().collect();

    assert_eq!(encode(&b, &standard::STRICT).unwrap(), standard::STRICT.encode(&b));
    assert_eq!(encode(&b, &standard::SIMPLE).unwrap(), standard::SIMPLE.encode(&b));

    let dump = encode(&b, &HexDumpEncoder).unwrap();
    assert_eq!(dump, HexDumpEncoder.encode(&b));
    assert_eq!(decode(dump.as_bytes(), &HexDumpDecoder).unwrap(), b);
}

#[test]
fn reader_counts_bytes() {
    let mut out = Vec::new();
    let count = avec::encode_reader(&mut &b"\x01\x02\x03"[..], &mut out, &standard::STRICT).unwrap();
    assert_eq!(count, 3);
    assert_eq!(out, b"010203");

    let mut out = Vec::new();
    let count = avec::decode_reader(&mut &b"01 02 03 04"[..], &mut out, &DefaultDecoder).unwrap();
    assert_eq!(count, 4);
}

#[test]
fn reader_positions_count_characters() {
    // 'é' is two bytes but one character.
    let err = decode("é 0g".as_bytes(), &StrictDecoder).unwrap_err();

    match err {
        Error::Syntax(err) => assert_eq!(err, SyntaxError::InvalidCharacter { character: 'é', position: 0 }),
        err => panic!("unexpected error {err}"),
    }

    let err = decode("\u{3000}0\u{3000}".as_bytes(), &DefaultDecoder).unwrap_err();

    match err {
        Error::Syntax(err) => assert_eq!(err.position(), 2),
        err => panic!("unexpected error {err}"),
    }

    assert_eq!(decode("\u{3000}0a\u{3000}".as_bytes(), &DefaultDecoder).unwrap(), [0x0a]);
}

#[test]
fn reader_rejects_invalid_utf8() {
    for s in [&b"01\xff"[..], b"\xc3", b"0\xe3\x80", b"\x80\x80"] {
        match decode(s, &DefaultDecoder).unwrap_err() {
            Error::Io(err) => assert_eq!(err.kind(), ErrorKind::InvalidData, "{s:?}"),
            err => panic!("unexpected error {err}"),
        }
    }
}

#[test]
fn reader_reports_truncation() {
    match decode(b"01 0", &DefaultDecoder).unwrap_err() {
        Error::Syntax(err) => assert_eq!(err, SyntaxError::UnexpectedEnd { position: 4 }),
        err => panic!("unexpected error {err}"),
    }
}

/// Accepts a fixed number of bytes, then fails.
struct Full {
    remaining: usize,
}

impl Write for Full {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.remaining == 0 {
            return Err(io::Error::new(ErrorKind::WriteZero, "full"));
        }

        let n = buf.len().min(self.remaining);
        self.remaining -= n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn writer_errors_surface_as_io() {
    let b = [0u8; 64];

    match avec::encode_reader(&mut &b[..], &mut Full { remaining: 10 }, &HexDumpEncoder) {
        Err(Error::Io(err)) => assert_eq!(err.kind(), ErrorKind::WriteZero),
        result => panic!("unexpected result {result:?}"),
    }

    match avec::decode_reader(&mut &b"00112233"[..], &mut Full { remaining: 2 }, &StrictDecoder) {
        Err(Error::Io(err)) => assert_eq!(err.kind(), ErrorKind::WriteZero),
        result => panic!("unexpected result {result:?}"),
    }
}
