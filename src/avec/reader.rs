//! Reader-based implementations.
//!
//! _Requires Cargo feature `std`._
//!
//! Input is read a byte at a time, and decoded bytes are written one at a time.
//! Wrap unbuffered readers and writers in [`BufReader`](std::io::BufReader) and
//! [`BufWriter`](std::io::BufWriter).

use core::fmt;
use std::io::{self, Bytes, Read, Write};

use thiserror::Error;

use crate::sans::{
    decode::{self, SyntaxError},
    encode,
};

use super::{HexDecoder, HexEncoder};

extern crate std;

/// Errors occurring while converting between readers and writers.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader or writer.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The input was not valid hex for the decoder.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// An encoding strategy failed to format its output.
    #[error("An encoding strategy failed to format its output.")]
    Format,
}

impl From<fmt::Error> for Error {
    fn from(_: fmt::Error) -> Self {
        Self::Format
    }
}

/// Decode UTF-8 hex text from a reader, writing bytes to a writer.
///
/// Returns the number of bytes written. Text that is not valid UTF-8 fails
/// with an [`io::ErrorKind::InvalidData`] error.
///
/// This method is also re-exported as `hexcodec::avec::decode_reader`.
///
/// _Requires Cargo feature `std`._
pub fn decode(
    r: &mut impl Read,
    w: &mut impl Write,
    d: &(impl HexDecoder + ?Sized),
) -> Result<u64, Error> {
    let mut strategy = d.strategy();

    let chars = Chars { bytes: r.bytes() };
    let count = decode::run(chars, &mut strategy, |b| Ok(w.write_all(&[b])?))?;

    w.flush()?;

    Ok(count)
}

/// Encode bytes from a reader, writing hex text to a writer.
///
/// Returns the number of bytes read.
///
/// This method is also re-exported as `hexcodec::avec::encode_reader`.
///
/// _Requires Cargo feature `std`._
pub fn encode(
    r: &mut impl Read,
    w: &mut impl Write,
    e: &(impl HexEncoder + ?Sized),
) -> Result<u64, Error> {
    let mut strategy = e.strategy();
    let mut out = Adapter { inner: w, error: None };

    let bytes = r.bytes().map(|b| b.map_err(Error::from));
    let count = encode::run(bytes, &mut strategy, &mut out).map_err(|err| {
        // Report the writer's own error rather than the formatter's.
        match (err, out.error.take()) {
            (Error::Format, Some(err)) => Error::Io(err),
            (err, _) => err,
        }
    })?;

    out.inner.flush()?;

    Ok(count)
}

/// Adapts a byte writer to a formatter, retaining the first write error.
struct Adapter<'a, W: ?Sized> {
    inner: &'a mut W,
    error: Option<io::Error>,
}

impl<W: Write + ?Sized> fmt::Write for Adapter<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|err| {
            self.error.get_or_insert(err);
            fmt::Error
        })
    }
}

/// Decodes UTF-8 characters from a byte reader.
struct Chars<R> {
    bytes: Bytes<R>,
}

impl<R: Read> Chars<R> {
    /// Read the rest of a character given its leading byte.
    fn complete(&mut self, lead: u8) -> Result<char, Error> {
        let width = match lead.leading_ones() {
            2 => 2,
            3 => 3,
            4 => 4,
            _ => 1,
        };

        let mut buf = [lead, 0, 0, 0];

        for slot in &mut buf[1..width] {
            *slot = self.bytes.next().unwrap_or_else(|| Err(invalid_utf8()))?;
        }

        core::str::from_utf8(&buf[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .ok_or_else(|| invalid_utf8().into())
    }
}

impl<R: Read> Iterator for Chars<R> {
    type Item = Result<char, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(match self.bytes.next()? {
            Ok(lead) => self.complete(lead),
            Err(err) => Err(err.into()),
        })
    }
}

fn invalid_utf8() -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8")
}
