#![no_std]

//! Pluggable conversion between bytes and hexadecimal text.
//!
//! Hexcodec encodes and decodes several textual dialects of hex: plain digit
//! runs, delimited and multi-line listings, and addressed hex dumps with an
//! ASCII gutter. Each dialect is a pair of small strategies plugged into one
//! encoding driver and one decoding state machine, and new dialects are added
//! the same way.
//!
//! Most users should begin with the codecs in [`dialect::standard`], or the
//! functions in the [`avec`] module:
//!
//! ```
//! use hexcodec::{avec::HexEncoder, avec::HexDecoder, dialect::standard};
//!
//! assert_eq!(standard::STRICT.encode(&[8, 10, 15, 16]), "080a0f10");
//! assert_eq!(standard::DEFAULT.decode("08:0a:0f:10")?, [8, 10, 15, 16]);
//! ```
//!
//! To support another dialect, implement a strategy from [`sans::strategy`].
//! Applications with their own character sources can drive the state machine
//! in the [`sans`] module directly.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `derive`: enable derive macros (default).
//! - `std`: enable reader-based encoding and decoding (default).

extern crate alloc;

pub mod avec;
pub mod dialect;
pub mod sans;
