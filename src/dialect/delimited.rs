//! Hex digits with separators and line breaks.

use core::{
    fmt::{self, Write},
    num::NonZeroU64,
};

use thiserror::Error;

use crate::{avec::HexEncoder, sans::strategy::EncodeStrategy};

use super::write_byte;

/// An error configuring an encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A line must hold at least one byte.
    #[error("Bytes per line must be greater than zero.")]
    ZeroBytesPerLine,
}

/// Encode bytes with an optional separator between them, breaking lines after
/// an optional number of bytes.
///
/// Separators are only written between bytes on the same line. Without either
/// option, the output is identical to that of
/// [`PlainEncoder`](super::PlainEncoder).
///
/// ```
/// let e = DelimitedEncoder::new(4, Some("_"))?;
/// assert_eq!(e.encode(&[0, 1, 2, 3, 4]), "00_01_02_03\n04");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DelimitedEncoder<'a> {
    bytes_per_line: Option<NonZeroU64>,
    separator: Option<&'a str>,
}

impl<'a> DelimitedEncoder<'a> {
    /// Create an encoder breaking lines every `bytes_per_line` bytes.
    ///
    /// Fails if `bytes_per_line` is zero.
    pub const fn new(bytes_per_line: u64, separator: Option<&'a str>) -> Result<Self, ConfigError> {
        match NonZeroU64::new(bytes_per_line) {
            Some(n) => Ok(Self {
                bytes_per_line: Some(n),
                separator,
            }),
            None => Err(ConfigError::ZeroBytesPerLine),
        }
    }

    /// Create an encoder writing a single line with `separator` between bytes.
    pub const fn with_separator(separator: &'a str) -> Self {
        Self {
            bytes_per_line: None,
            separator: Some(separator),
        }
    }

    /// Create an encoder breaking lines every `bytes_per_line` bytes, without
    /// separators.
    pub const fn with_bytes_per_line(bytes_per_line: u64) -> Result<Self, ConfigError> {
        Self::new(bytes_per_line, None)
    }

    pub fn bytes_per_line(&self) -> Option<u64> {
        self.bytes_per_line.map(NonZeroU64::get)
    }

    pub fn separator(&self) -> Option<&'a str> {
        self.separator
    }

    fn starts_line(&self, index: u64) -> bool {
        match self.bytes_per_line {
            Some(n) => index % n.get() == 0,
            None => index == 0,
        }
    }
}

impl EncodeStrategy for DelimitedEncoder<'_> {
    fn next(&mut self, b: u8, index: u64, out: &mut dyn Write) -> fmt::Result {
        if self.starts_line(index) {
            if index > 0 {
                out.write_char('\n')?;
            }
        } else if let Some(separator) = self.separator {
            out.write_str(separator)?;
        }

        write_byte(out, b)
    }
}

impl<'s> HexEncoder for DelimitedEncoder<'s> {
    type Strategy<'a>
        = Self
    where
        Self: 'a;

    fn strategy(&self) -> Self {
        *self
    }
}
