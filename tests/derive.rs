#![cfg(all(feature = "derive", feature = "std"))]

use hexcodec::{
    avec::{self, HexDecoder, Separators},
    dialect::{CharIgnoringDecoder, CharSet, DefaultDecoder},
};

#[derive(Debug, Clone, Separators)]
#[separators(whitespace, chars = ":-_.[](){}xX")]
struct Listing;

#[derive(Debug, Clone, Separators)]
#[separators(chars = "|")]
#[separators(chars = "=")]
struct Pipes;

#[derive(Debug, Clone, Separators)]
#[separators(non_hex)]
struct Anything;

#[derive(Debug, Clone, Separators)]
#[separators(whitespace)]
struct Spaced<T: Clone> {
    #[allow(dead_code)]
    label: T,
}

#[test]
fn derived_matches_default_dialect() {
    const INPUTS: &[&str] = &[
        "01:02:03",
        "[de ad] (be ef)",
        "0x41 0X42",
        "\t4-3_2.1\n",
        "",
        "a",
        "ab+12",
        "0 1",
    ];

    for s in INPUTS {
        assert_eq!(Listing.decode(s), DefaultDecoder.decode(s), "{s:?}");
    }
}

#[test]
fn derived_merges_attributes() {
    assert_eq!(Pipes.decode("01|02==03").unwrap(), [1, 2, 3]);

    let err = Pipes.decode("01 02").unwrap_err();
    assert_eq!(err.character(), Some(' '));
    assert_eq!(err.position(), 2);

    let d = CharIgnoringDecoder::new(CharSet::from("|="));
    assert_eq!(Pipes.decode("|0f=|"), d.decode("|0f=|"));
}

#[test]
fn derived_non_hex_skips_everything_else() {
    assert_eq!(Anything.decode("XY: 1F, Z: 2A!").unwrap(), [0x1f, 0x2a]);
    assert_eq!(Anything.decode("0 a").unwrap_err().position(), 1);
}

#[test]
fn derived_on_generic_type() {
    let d = Spaced { label: "spaced" };
    assert_eq!(d.decode("ca fe\nba be").unwrap(), [0xca, 0xfe, 0xba, 0xbe]);
}

#[test]
fn derived_with_reader() {
    let mut out = Vec::new();
    let count = avec::decode_reader(&mut "00:ff".as_bytes(), &mut out, &Listing).unwrap();

    assert_eq!(count, 2);
    assert_eq!(out, [0x00, 0xff]);
}
