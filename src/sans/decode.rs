//! States pairing hex digits into bytes.

use either::Either::{self, Left, Right};
use thiserror::Error;

use super::{
    digit::value_of,
    position::{Cursor, Position},
    strategy::DecodeStrategy,
};

/// An error decoding hex text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// Found a character that is neither a hex digit nor ignorable here.
    #[error("Invalid character {character:?} at position {position}.")]
    InvalidCharacter { character: char, position: u64 },
    /// The input ended between the two digits of a byte.
    #[error("Unexpected end of input at position {position}.")]
    UnexpectedEnd { position: u64 },
}

impl SyntaxError {
    /// Stream index of the offending character, or of the end of the input.
    pub fn position(&self) -> u64 {
        match self {
            Self::InvalidCharacter { position, .. } | Self::UnexpectedEnd { position } => *position,
        }
    }

    /// The offending character, if there was one.
    pub fn character(&self) -> Option<char> {
        match self {
            Self::InvalidCharacter { character, .. } => Some(*character),
            Self::UnexpectedEnd { .. } => None,
        }
    }
}

fn digit(c: char, at: Position) -> Result<u8, SyntaxError> {
    value_of(c).ok_or(SyntaxError::InvalidCharacter {
        character: c,
        position: at.stream,
    })
}

/// State token awaiting the first digit of a byte.
///
/// This is the initial state, and the only one in which the input may end.
#[derive(Debug)]
pub struct NeedsDigit1(pub(super) ());

impl NeedsDigit1 {
    pub fn new() -> Self {
        Self(())
    }

    /// Transition to another state by examining a character between bytes.
    ///
    /// Returns this state if the strategy ignores the character, or a
    /// successor holding the high nibble if it is a hex digit.
    pub fn advance(
        self,
        c: char,
        at: Position,
        strategy: &mut (impl DecodeStrategy + ?Sized),
    ) -> Result<Either<NeedsDigit1, NeedsDigit2>, SyntaxError> {
        if strategy.should_ignore(c, at) {
            return Ok(Left(self));
        }

        let high = digit(c, at)? * 16;

        Ok(Right(NeedsDigit2 { high }))
    }
}

impl Default for NeedsDigit1 {
    fn default() -> Self {
        Self::new()
    }
}

/// State token awaiting the second digit of a byte.
#[derive(Debug)]
pub struct NeedsDigit2 {
    high: u8,
}

impl NeedsDigit2 {
    /// Transition to another state by examining the second digit of a byte.
    ///
    /// No character is ignorable here. Returns the completed byte, and a
    /// successor state token.
    pub fn advance(self, c: char, at: Position) -> Result<(u8, NeedsDigit1), SyntaxError> {
        let low = digit(c, at)?;

        Ok((self.high + low, NeedsDigit1(())))
    }

    /// Consume this state at the end of the input, which is always an error.
    ///
    /// `position` is the number of characters read.
    pub fn end(self, position: u64) -> SyntaxError {
        SyntaxError::UnexpectedEnd { position }
    }
}

/// Decode a sequence of characters, passing each completed byte to `emit`.
///
/// Errors from the source and from `emit` are returned unchanged; syntax errors
/// are converted into `E`. Returns the number of bytes decoded.
pub fn run<S, E>(
    chars: impl IntoIterator<Item = Result<char, E>>,
    strategy: &mut S,
    mut emit: impl FnMut(u8) -> Result<(), E>,
) -> Result<u64, E>
where
    S: DecodeStrategy + ?Sized,
    E: From<SyntaxError>,
{
    strategy.start();

    let mut cursor = Cursor::new();
    let mut bytes = 0;
    let mut state = Left(NeedsDigit1::new());

    for c in chars {
        let c = c?;
        let at = cursor.advance(c);

        state = match state {
            Left(state) => state.advance(c, at, &mut *strategy).inspect_err(failed)?,
            Right(state) => {
                let (b, state) = state.advance(c, at).inspect_err(failed)?;
                emit(b)?;
                bytes += 1;
                Left(state)
            }
        };
    }

    let chars = cursor.consumed();

    if let Right(state) = state {
        let err = state.end(chars);
        failed(&err);
        return Err(err.into());
    }

    strategy.finish(chars, bytes)?;
    log::trace!("decoded {bytes} bytes from {chars} characters");

    Ok(bytes)
}

fn failed(err: &SyntaxError) {
    log::debug!("hex decoding failed: {err}");
}
