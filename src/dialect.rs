//! Textual hex conventions, and codecs pairing them.
//!
//! Each dialect is a small configuration value implementing
//! [`HexEncoder`] or [`HexDecoder`]. These hand out a fresh
//! [`EncodeStrategy`](crate::sans::strategy::EncodeStrategy) or
//! [`DecodeStrategy`](crate::sans::strategy::DecodeStrategy) for every call, so
//! one configuration can be shared freely.
//!
//! Encoders and decoders are combined into a bidirectional [`Codec`]. A few
//! common combinations are provided in [`standard`].

pub mod delimited;
pub mod dump;
pub mod ignoring;
pub mod plain;
pub mod standard;

use core::fmt::{self, Write};

pub use delimited::{ConfigError, DelimitedEncoder};
pub use dump::{HexDumpDecoder, HexDumpEncoder};
pub use ignoring::{
    CharIgnoringDecoder, CharSet, DefaultDecoder, Ignore, PermissiveDecoder, StrictDecoder,
    WhitespaceDecoder,
};
pub use plain::PlainEncoder;

use crate::{
    avec::{HexDecoder, HexEncoder},
    sans::digit::digits_of,
};

/// An encoder and a decoder, used together.
///
/// A codec adds no behavior of its own; each direction is delegated to its
/// half.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Codec<E, D> {
    encoder: E,
    decoder: D,
}

impl<E, D> Codec<E, D> {
    pub const fn new(encoder: E, decoder: D) -> Self {
        Self { encoder, decoder }
    }

    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    pub fn decoder(&self) -> &D {
        &self.decoder
    }
}

impl<E: HexEncoder, D> HexEncoder for Codec<E, D> {
    type Strategy<'a>
        = E::Strategy<'a>
    where
        Self: 'a;

    fn strategy(&self) -> Self::Strategy<'_> {
        self.encoder.strategy()
    }
}

impl<E, D: HexDecoder> HexDecoder for Codec<E, D> {
    type Strategy<'a>
        = D::Strategy<'a>
    where
        Self: 'a;

    fn strategy(&self) -> Self::Strategy<'_> {
        self.decoder.strategy()
    }
}

/// Write the two lowercase digits of a byte.
fn write_byte(out: &mut dyn Write, b: u8) -> fmt::Result {
    let [high, low] = digits_of(b);
    out.write_char(high)?;
    out.write_char(low)
}
