//! Decoders skipping sets of characters between bytes.
//!
//! Characters are only ever skipped between whole bytes. Inside a byte, any
//! character other than a hex digit is an error, even one that would be
//! skipped elsewhere: `"0-a"` is rejected by every decoder here.

use alloc::collections::BTreeSet;

use crate::{
    avec::HexDecoder,
    sans::{digit::value_of, position::Position, strategy::DecodeStrategy},
};

/// Separators accepted by [`DefaultDecoder`], in addition to whitespace.
pub const DEFAULT_SEPARATORS: &str = ":-_.[](){}xX";

/// A test for characters to skip between bytes.
pub trait Ignore {
    fn ignores(&self, c: char) -> bool;
}

impl<F: Fn(char) -> bool> Ignore for F {
    fn ignores(&self, c: char) -> bool {
        self(c)
    }
}

/// A set of characters, optionally including all whitespace.
///
/// ```
/// let set = CharSet::new().with_whitespace().with_chars(":-");
/// assert!(set.contains('\t') && set.contains(':'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharSet {
    whitespace: bool,
    chars: BTreeSet<char>,
}

impl CharSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add all Unicode whitespace to the set.
    pub fn with_whitespace(mut self) -> Self {
        self.whitespace = true;
        self
    }

    /// Add each character of `chars` to the set.
    pub fn with_chars(mut self, chars: &str) -> Self {
        self.chars.extend(chars.chars());
        self
    }

    pub fn contains(&self, c: char) -> bool {
        (self.whitespace && c.is_whitespace()) || self.chars.contains(&c)
    }
}

impl Ignore for CharSet {
    fn ignores(&self, c: char) -> bool {
        self.contains(c)
    }
}

impl From<&str> for CharSet {
    fn from(chars: &str) -> Self {
        Self::new().with_chars(chars)
    }
}

/// Decode hex digits, skipping characters selected by `I` between bytes.
///
/// `I` is usually a [`CharSet`] or a closure.
///
/// ```
/// let d = CharIgnoringDecoder::new(|c: char| c == '=');
/// assert_eq!(d.decode("43==68")?, b"Ch");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CharIgnoringDecoder<I> {
    ignore: I,
}

impl<I: Ignore> CharIgnoringDecoder<I> {
    pub fn new(ignore: I) -> Self {
        Self { ignore }
    }

    pub fn ignore(&self) -> &I {
        &self.ignore
    }
}

impl CharIgnoringDecoder<CharSet> {
    /// Create a decoder skipping each character of `chars`.
    pub fn from_chars(chars: &str) -> Self {
        Self::new(CharSet::from(chars))
    }
}

impl<I: Ignore> DecodeStrategy for &CharIgnoringDecoder<I> {
    fn should_ignore(&mut self, c: char, _: Position) -> bool {
        self.ignore.ignores(c)
    }
}

impl<I: Ignore> HexDecoder for CharIgnoringDecoder<I> {
    type Strategy<'a>
        = &'a Self
    where
        Self: 'a;

    fn strategy(&self) -> &Self {
        self
    }
}

/// Decode continuous hex digits, skipping nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrictDecoder;

impl DecodeStrategy for StrictDecoder {
    fn should_ignore(&mut self, _: char, _: Position) -> bool {
        false
    }
}

impl HexDecoder for StrictDecoder {
    type Strategy<'a> = Self;

    fn strategy(&self) -> Self {
        *self
    }
}

/// Decode hex digits, skipping whitespace and [`DEFAULT_SEPARATORS`] between
/// bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultDecoder;

impl DecodeStrategy for DefaultDecoder {
    fn should_ignore(&mut self, c: char, _: Position) -> bool {
        c.is_whitespace() || DEFAULT_SEPARATORS.contains(c)
    }
}

impl HexDecoder for DefaultDecoder {
    type Strategy<'a> = Self;

    fn strategy(&self) -> Self {
        *self
    }
}

/// Decode hex digits, skipping whitespace between bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WhitespaceDecoder;

impl DecodeStrategy for WhitespaceDecoder {
    fn should_ignore(&mut self, c: char, _: Position) -> bool {
        c.is_whitespace()
    }
}

impl HexDecoder for WhitespaceDecoder {
    type Strategy<'a> = Self;

    fn strategy(&self) -> Self {
        *self
    }
}

/// Decode hex digits, skipping anything else between bytes.
///
/// Useful for pulling bytes out of prose or log lines. Beware that letters
/// `a-f` in the surrounding text are taken as digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PermissiveDecoder;

impl DecodeStrategy for PermissiveDecoder {
    fn should_ignore(&mut self, c: char, _: Position) -> bool {
        value_of(c).is_none()
    }
}

impl HexDecoder for PermissiveDecoder {
    type Strategy<'a> = Self;

    fn strategy(&self) -> Self {
        *self
    }
}
