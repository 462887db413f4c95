//! String and slice based implementations.

use alloc::{string::String, vec::Vec};
use core::fmt::{self, Write};

use crate::sans::{
    decode::{self, SyntaxError},
    encode,
};

use super::{HexDecoder, HexEncoder};

/// Decode a string into a new vector of bytes.
///
/// This method is also re-exported as `hexcodec::avec::decode_slice`.
pub fn decode(s: &str, d: &(impl HexDecoder + ?Sized)) -> Result<Vec<u8>, SyntaxError> {
    let mut out = Vec::with_capacity(s.len() / 2);
    decode_into(s, d, &mut out)?;
    Ok(out)
}

/// Decode a string, appending to a vector of bytes.
///
/// Returns the number of bytes appended. On error, bytes decoded before the
/// offending character remain in `out`.
pub fn decode_into(
    s: &str,
    d: &(impl HexDecoder + ?Sized),
    out: &mut Vec<u8>,
) -> Result<u64, SyntaxError> {
    let mut strategy = d.strategy();

    decode::run(s.chars().map(Ok), &mut strategy, |b| {
        out.push(b);
        Ok(())
    })
}

/// Encode a slice of bytes into a new string.
///
/// This method is also re-exported as `hexcodec::avec::encode_slice`.
///
/// # Panics
///
/// Writing to a `String` cannot fail, so this only panics if the encoder's
/// strategy returns a formatting error of its own.
pub fn encode(b: &[u8], e: &(impl HexEncoder + ?Sized)) -> String {
    let mut s = String::with_capacity(b.len() * 2);
    encode_fmt(b, e, &mut s).expect("an encoding strategy returned an error unexpectedly");
    s
}

/// Encode a slice of bytes into a formatter.
pub fn encode_fmt(b: &[u8], e: &(impl HexEncoder + ?Sized), out: &mut impl Write) -> fmt::Result {
    let mut strategy = e.strategy();

    encode::run(b.iter().copied().map(Ok::<u8, fmt::Error>), &mut strategy, out)?;

    Ok(())
}
