//! Convenience interfaces for common encoding and decoding patterns.
//!
//! The functions in this module are suited to converting strings, slices and
//! readers, publishing through the [`HexEncoder`] and [`HexDecoder`] traits.
//! Every call asks its encoder or decoder for a fresh strategy, so no state is
//! carried from one call to the next.
//!
//! For separator-based dialects, [`HexDecoder`] can be derived. See the
//! [`Separators`](macro@Separators) macro for details.

#[cfg(feature = "std")]
pub mod reader;
pub mod slice;

#[cfg(feature = "std")]
pub use reader::{decode as decode_reader, encode as encode_reader};
pub use slice::{decode as decode_slice, encode as encode_slice};

use alloc::{string::String, vec::Vec};
use core::fmt;

use crate::sans::{
    decode::SyntaxError,
    strategy::{DecodeStrategy, EncodeStrategy},
};

/// Produce encoding strategies for a dialect.
pub trait HexEncoder {
    /// The strategy driving a single encoding pass.
    type Strategy<'a>: EncodeStrategy
    where
        Self: 'a;

    /// Create a strategy for a new pass.
    fn strategy(&self) -> Self::Strategy<'_>;

    /// Encode a slice of bytes into a new string.
    ///
    /// See [`slice::encode`].
    fn encode(&self, b: &[u8]) -> String {
        slice::encode(b, self)
    }

    /// Encode a slice of bytes into a formatter.
    fn encode_fmt(&self, b: &[u8], out: &mut impl fmt::Write) -> fmt::Result {
        slice::encode_fmt(b, self, out)
    }
}

/// Produce decoding strategies for a dialect.
pub trait HexDecoder {
    /// The strategy driving a single decoding pass.
    type Strategy<'a>: DecodeStrategy
    where
        Self: 'a;

    /// Create a strategy for a new pass.
    fn strategy(&self) -> Self::Strategy<'_>;

    /// Decode a string into a new vector of bytes.
    fn decode(&self, s: &str) -> Result<Vec<u8>, SyntaxError> {
        slice::decode(s, self)
    }
}

/// Derive [`HexDecoder`] for a dialect skipping classes of characters.
///
/// _Requires Cargo feature `derive`._
///
/// # Example
///
/// Add the `separators` attribute to a type implementing [`Clone`], listing any
/// of `whitespace`, `non_hex`, and `chars = "..."`. Characters in any listed
/// class are skipped between bytes.
///
/// ```
/// #[derive(Clone, Separators)]
/// #[separators(whitespace, chars = ",;")]
/// struct Listing;
///
/// assert_eq!(Listing.decode("01, 02;\n03")?, [1, 2, 3]);
/// ```
#[cfg(feature = "derive")]
pub use hexcodec_derive::Separators;
