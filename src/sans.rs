//! Internal finite-state machine and strategy contracts.
//!
//! This module is intended for applications that bring their own character or
//! byte sources (for example, a UART on an embedded system, or a text buffer
//! that is not a `str`). See [`crate::avec`] for implementations covering
//! strings and readers.
//!
//! # Architecture
//!
//! Decoding pairs hex digits into bytes. Both states of the machine are
//! represented by a non-copy token: [`decode::NeedsDigit1`] waits for the high
//! nibble of a byte, and [`decode::NeedsDigit2`] holds that nibble while waiting
//! for the low one. Transition by calling the token's `advance` method with the
//! next character and its [`position::Position`]; this returns the successor
//! token, along with any completed byte.
//!
//! Only the first state consults a [`strategy::DecodeStrategy`], which decides
//! whether a character is noise to be skipped. Characters between the two
//! digits of one byte are never skipped: the second state has no strategy
//! parameter at all.
//!
//! Ending the input is only valid while holding the first state. Ending it
//! while holding the second is an [`UnexpectedEnd`](decode::SyntaxError) error,
//! produced by [`decode::NeedsDigit2::end`].
//!
//! Encoding has no states of its own. Each byte is handed, along with its
//! index, to an [`strategy::EncodeStrategy`] that writes whatever text the
//! dialect calls for.
//!
//! The [`decode::run`] and [`encode::run`] drivers implement the whole loop
//! over any iterator, and are a good starting point for custom frontends.

pub mod decode;
pub mod digit;
pub mod encode;
pub mod position;
pub mod strategy;

/// Entrypoint to the decoding finite-state machine.
pub type Automaton = decode::NeedsDigit1;
