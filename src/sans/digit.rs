//! Conversions between hex digits and their values.

use tartan_bitfield::bitfield;

bitfield! {
    /// A byte viewed as its two nibbles.
    struct Nibbles(u8) {
        [0..4] low: u8,
        [4..8] high: u8,
    }
}

const DIGITS: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f',
];

/// Resolve the value of a single hex digit.
///
/// Accepts `0-9`, `a-f` and `A-F`. Returns `None` for any other character.
pub fn value_of(c: char) -> Option<u8> {
    let v = match c {
        '0'..='9' => c as u32 - '0' as u32,
        'a'..='f' => c as u32 - 'a' as u32 + 10,
        'A'..='F' => c as u32 - 'A' as u32 + 10,
        _ => return None,
    };

    Some(v as u8)
}

/// The two lowercase hex digits of a byte, most significant first.
pub fn digits_of(b: u8) -> [char; 2] {
    let n = Nibbles(b);
    [DIGITS[n.high() as usize], DIGITS[n.low() as usize]]
}
