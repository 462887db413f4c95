//! Hex dumps with addresses and an ASCII gutter.
//!
//! Each line holds up to sixteen bytes:
//!
//! ```text
//! 00000000: 49 74 20 77 61 73 20 74   68 65 20 62 65 73 74 20   It was the best
//! ^ address ^ hex column, padded to 62 characters               ^ ASCII gutter
//! ```
//!
//! Lines are joined with `\n`, with no line break after the last. The final
//! line is padded with spaces so its gutter aligns with the lines above.

use core::fmt::{self, Write};

use tinyvec::ArrayVec;

use crate::{
    avec::{HexDecoder, HexEncoder},
    sans::{
        position::Position,
        strategy::{DecodeStrategy, EncodeStrategy},
    },
};

use super::write_byte;

const BYTES_PER_LINE: u64 = 16;

/// Width of the address and hex column, including trailing padding.
const HEX_WIDTH: usize = 62;

/// Width of the ASCII gutter.
const ASCII_WIDTH: usize = 16;

/// Line columns outside of which every character is ignored while decoding.
const FIRST_DIGIT_COLUMN: u64 = 10;
const LAST_DIGIT_COLUMN: u64 = 58;

/// Encode bytes as a hex dump.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HexDumpEncoder;

impl HexEncoder for HexDumpEncoder {
    type Strategy<'a> = DumpStrategy;

    fn strategy(&self) -> DumpStrategy {
        DumpStrategy::default()
    }
}

/// Strategy for a single hex dump, buffering the gutter of the current line.
#[derive(Debug, Default)]
pub struct DumpStrategy {
    column: usize,
    ascii: ArrayVec<[u8; 16]>,
}

impl DumpStrategy {
    /// Pad the hex column and write the gutter, ending the current line.
    fn flush(&mut self, out: &mut dyn Write) -> fmt::Result {
        for _ in self.column..HEX_WIDTH {
            out.write_char(' ')?;
        }

        for &b in self.ascii.iter() {
            out.write_char(b as char)?;
        }

        for _ in self.ascii.len()..ASCII_WIDTH {
            out.write_char(' ')?;
        }

        self.column = 0;
        self.ascii.clear();

        Ok(())
    }
}

impl EncodeStrategy for DumpStrategy {
    fn next(&mut self, b: u8, index: u64, out: &mut dyn Write) -> fmt::Result {
        let offset = index % BYTES_PER_LINE;

        if offset == 0 {
            if index > 0 {
                self.flush(out)?;
                out.write_char('\n')?;
            }

            write!(out, "{index:08x}: ")?;
            self.column = address_width(index) + 2;
        }

        if offset == 8 {
            out.write_str("  ")?;
            self.column += 2;
        }

        write_byte(out, b)?;
        out.write_char(' ')?;
        self.column += 3;

        self.ascii.push(printable(b));

        Ok(())
    }

    fn finish(&mut self, _: u64, out: &mut dyn Write) -> fmt::Result {
        if !self.ascii.is_empty() {
            self.flush(out)?;
        }

        Ok(())
    }
}

/// Number of digits written for an address: at least eight.
fn address_width(address: u64) -> usize {
    let digits = (u64::BITS - address.leading_zeros()).div_ceil(4);
    digits.max(8) as usize
}

/// The gutter representation of a byte.
fn printable(b: u8) -> u8 {
    if (0x20..=0x7e).contains(&b) { b } else { b'.' }
}

/// Decode a hex dump, skipping addresses and gutters.
///
/// Only characters between columns 10 and 58 of each line are considered, and
/// whitespace among them is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HexDumpDecoder;

impl DecodeStrategy for HexDumpDecoder {
    fn should_ignore(&mut self, c: char, at: Position) -> bool {
        at.line < FIRST_DIGIT_COLUMN || at.line > LAST_DIGIT_COLUMN || c.is_whitespace()
    }
}

impl HexDecoder for HexDumpDecoder {
    type Strategy<'a> = Self;

    fn strategy(&self) -> Self {
        *self
    }
}
