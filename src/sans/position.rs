//! Character positions within a stream.

/// The location of a character in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Index of the character from the start of the input, counting from zero.
    pub stream: u64,
    /// Column of the character within its line.
    ///
    /// A carriage return or line feed reports zero and resets the count; every
    /// other character increments it first, so the first character of a line
    /// reports one.
    pub line: u64,
}

/// Tracks [`Position`]s over a forward-only sequence of characters.
#[derive(Debug, Clone, Default)]
pub struct Cursor {
    consumed: u64,
    line: u64,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the next character, returning its position.
    pub fn advance(&mut self, c: char) -> Position {
        let stream = self.consumed;
        self.consumed += 1;

        if c == '\r' || c == '\n' {
            self.line = 0;
        } else {
            self.line += 1;
        }

        Position {
            stream,
            line: self.line,
        }
    }

    /// Number of characters recorded so far. This is also the stream index at
    /// which the end of the input was found.
    pub fn consumed(&self) -> u64 {
        self.consumed
    }
}
