//! Ready-made codecs for common dialects.

use super::{
    Codec, DefaultDecoder, DelimitedEncoder, HexDumpDecoder, HexDumpEncoder, PlainEncoder,
    StrictDecoder,
};

/// Continuous lowercase digits; decoding tolerates whitespace and common
/// separators between bytes.
pub const DEFAULT: Codec<PlainEncoder, DefaultDecoder> = Codec::new(PlainEncoder, DefaultDecoder);

/// Continuous lowercase digits in both directions.
pub const STRICT: Codec<PlainEncoder, StrictDecoder> = Codec::new(PlainEncoder, StrictDecoder);

/// Addressed hex dumps with an ASCII gutter.
pub const HEXDUMP: Codec<HexDumpEncoder, HexDumpDecoder> =
    Codec::new(HexDumpEncoder, HexDumpDecoder);

/// Sixteen colon-separated bytes per line.
pub const SIMPLE: Codec<DelimitedEncoder<'static>, DefaultDecoder> = Codec::new(
    match DelimitedEncoder::new(16, Some(":")) {
        Ok(encoder) => encoder,
        Err(_) => panic!("sixteen bytes per line is a valid configuration"),
    },
    DefaultDecoder,
);
