//! Contracts between the drivers and the dialects plugged into them.

use core::fmt::{self, Write};

use super::{decode::SyntaxError, position::Position};

/// Formatting decisions for an encoding pass.
///
/// A strategy value lives for exactly one pass: [`start`](Self::start) is
/// called first, [`next`](Self::next) once per byte in order, and
/// [`finish`](Self::finish) last. Strategies are free to buffer between calls.
pub trait EncodeStrategy {
    /// Begin a pass. The default implementation writes nothing.
    fn start(&mut self, out: &mut dyn Write) -> fmt::Result {
        let _ = out;
        Ok(())
    }

    /// Write the text for a byte, given its index counting from zero.
    fn next(&mut self, b: u8, index: u64, out: &mut dyn Write) -> fmt::Result;

    /// End a pass over `total` bytes, flushing any buffered text. The default
    /// implementation writes nothing.
    fn finish(&mut self, total: u64, out: &mut dyn Write) -> fmt::Result {
        let _ = (total, out);
        Ok(())
    }
}

/// Parsing decisions for a decoding pass.
///
/// A strategy value lives for exactly one pass: [`start`](Self::start) is
/// called first, [`should_ignore`](Self::should_ignore) for each character
/// found where the first digit of a byte is expected, and
/// [`finish`](Self::finish) once the input ends cleanly.
pub trait DecodeStrategy {
    /// Begin a pass.
    fn start(&mut self) {}

    /// Whether a character between bytes should be skipped.
    ///
    /// Characters for which this returns `false` must be hex digits, or
    /// decoding fails.
    fn should_ignore(&mut self, c: char, at: Position) -> bool;

    /// End a pass. May reject the input as a whole.
    fn finish(&mut self, total_chars: u64, total_bytes: u64) -> Result<(), SyntaxError> {
        let _ = (total_chars, total_bytes);
        Ok(())
    }
}
