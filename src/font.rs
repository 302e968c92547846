//! Seven segment glyphs and the character to glyph mapping
//!
//! Segment bits, bit 7 is the decimal point:
//!
//! ```text
//!  --0--
//! |     |
//! 5     1
//! |     |
//!  --6--
//! |     |
//! 4     2
//! |     |
//!  --3--  .7
//! ```

/// Segment patterns, indexed by [`glyph_index()`]
///
/// `0`-`9`, `A`-`J`, then `L n o P Q r t u - *`, and a blank at [`BLANK`].
pub const GLYPHS: [u8; 31] = [
    0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F, // 0-9
    0x77, 0x7C, 0x39, 0x5E, 0x79, 0x71, 0x3D, 0x76, 0x06, 0x0E, // A-J
    0x38, 0x54, 0x74, 0x73, 0x67, 0x50, 0x78, 0x1C, 0x40, 0x63, // L n o P Q r t u - *
    0x00, // blank
];

/// Index of the blank glyph, used for every character the display can't show
pub const BLANK: u8 = 30;

/// Decimal point segment
pub const DECIMAL_POINT: u8 = 0b1000_0000;

/// Map a character code to an index of [`GLYPHS`]
///
/// Codes below 30 are glyph indices already and pass through.
/// Letters are case insensitive. Anything not drawable maps to [`BLANK`].
pub const fn glyph_index(code: u8) -> u8 {
    match code {
        0..=29 => code,
        b'0'..=b'9' => code - b'0',
        b'A'..=b'J' => code - b'A' + 10,
        b'a'..=b'j' => code - b'a' + 10,
        b'L' | b'l' => 20,
        b'N'..=b'R' => code - b'N' + 21,
        b'n'..=b'r' => code - b'n' + 21,
        b'T' | b't' => 26,
        b'U' | b'u' => 27,
        b'-' => 28,
        b'*' => 29,
        _ => BLANK,
    }
}

/// Segment pattern of a character code, without decimal point
pub const fn segments(code: u8) -> u8 {
    GLYPHS[glyph_index(code) as usize]
}

/// Character code of a [`char`], characters beyond `0xFF` are shown blank
pub(crate) fn char_code(ch: char) -> u8 {
    u8::try_from(ch).unwrap_or(b' ')
}
