//! Continuous hex digits.

use core::fmt::{self, Write};

use crate::{avec::HexEncoder, sans::strategy::EncodeStrategy};

use super::write_byte;

/// Encode each byte as two lowercase digits, with nothing in between.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlainEncoder;

impl EncodeStrategy for PlainEncoder {
    fn next(&mut self, b: u8, _: u64, out: &mut dyn Write) -> fmt::Result {
        write_byte(out, b)
    }
}

impl HexEncoder for PlainEncoder {
    type Strategy<'a> = Self;

    fn strategy(&self) -> Self {
        *self
    }
}
