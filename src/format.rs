//! Turn text and numbers into what the 4 digits should show
//!
//! Everything here is pure, the [`Display`](crate::display::Display) does the sending.

use core::fmt::Write;

use heapless::{String, Vec};

use crate::{command::DIGIT_COUNT, font::char_code};

/// What out of range numbers are shown as
pub const ERROR_TEXT: &str = "Err ";

/// One digit of laid out text
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cell {
    /// character code, see [`glyph_index()`](crate::font::glyph_index)
    pub code: u8,
    /// whether the decimal point of this digit is lit
    pub point: bool,
}

impl Cell {
    const fn blank_point() -> Self {
        Self {
            code: b' ',
            point: true,
        }
    }
}

/// Laid out digits, left to right, at most 4
pub type Cells = Vec<Cell, DIGIT_COUNT>;

/// Lay out text on the 4 digits
///
/// Decimal points don't take a digit of their own: a point lights the
/// decimal point of the character before it. Text is cut after 4 characters
/// (points not counted) and right aligned with spaces.
///
/// A point with no character before it, or following a character which already has
/// its point lit, gets a blank digit. Digits which don't fit anymore are dropped.
pub fn layout(text: &str) -> Cells {
    let shown = text.chars().filter(|&ch| ch != '.').count().min(DIGIT_COUNT);

    let mut counted = 0;
    let truncated = text.chars().take_while(move |&ch| {
        if ch == '.' {
            return true;
        }
        counted += 1;
        counted <= DIGIT_COUNT
    });

    let padded = core::iter::repeat(' ')
        .take(DIGIT_COUNT - shown)
        .chain(truncated);

    let mut cells = Cells::new();

    for ch in padded {
        let cell = if ch == '.' {
            match cells.last_mut() {
                Some(prev) if !prev.point => {
                    prev.point = true;
                    continue;
                }
                _ => Cell::blank_point(),
            }
        } else {
            Cell {
                code: char_code(ch),
                point: false,
            }
        };

        if cells.push(cell).is_err() {
            #[cfg(feature = "defmt")]
            defmt::debug!("tm1650: dropped overflowing digit of {=str}", text);
        }
    }

    cells
}

/// Character codes of an integer, right aligned, [`None`] outside `-999..=9999`
pub fn integer_codes(n: i32) -> Option<[u8; DIGIT_COUNT]> {
    if !(-999..=9999).contains(&n) {
        return None;
    }

    let mut codes = [b' '; DIGIT_COUNT];
    let mut magnitude = n.unsigned_abs();
    let mut len = 0;

    if magnitude == 0 {
        codes[DIGIT_COUNT - 1] = b'0';
        len = 1;
    }

    while magnitude != 0 {
        codes[DIGIT_COUNT - 1 - len] = b'0' + (magnitude % 10) as u8;
        magnitude /= 10;
        len += 1;
    }

    // at most 3 digits when negative, so there is room for the sign
    if n < 0 {
        codes[DIGIT_COUNT - 1 - len] = b'-';
    }

    Some(codes)
}

/// Hexadecimal digit values of a 16 bit number, most significant first
///
/// Negative numbers are shown as their 16 bit two's complement.
/// [`None`] outside `-32768..=65535`.
pub fn hex_digits(n: i32) -> Option<[u8; DIGIT_COUNT]> {
    if !(-0x8000..=0xFFFF).contains(&n) {
        return None;
    }

    let value = (if n < 0 { n + 0x1_0000 } else { n }) as u16;

    let mut digits = [0u8; DIGIT_COUNT];
    for (pos, digit) in digits.iter_mut().enumerate() {
        let shift = 4 * (DIGIT_COUNT - 1 - pos);
        *digit = ((value >> shift) & 0xF) as u8;
    }

    Some(digits)
}

/// Text for a fixed point number, zero filled to use all 4 digits
///
/// [`None`] when the number is outside `-999.0..=999.0`, not a number,
/// or closer to zero than 0.001, zero included.
pub fn decimal_text(n: f32) -> Option<String<32>> {
    if !(-999.0..=999.0).contains(&n) || (-0.001 < n && n < 0.001) {
        return None;
    }

    let mut text = String::new();

    write!(text, "{}", n).ok()?;

    let zeros = match text.find('.') {
        Some(index) => DIGIT_COUNT.saturating_sub(text.len() - index),
        None => {
            text.push('.').ok()?;
            DIGIT_COUNT
        }
    };

    for _ in 0..zeros {
        text.push('0').ok()?;
    }

    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(code: u8, point: bool) -> Cell {
        Cell { code, point }
    }

    fn codes(cells: &Cells) -> ([u8; 4], [bool; 4]) {
        let mut codes = [0; 4];
        let mut points = [false; 4];
        for (i, c) in cells.iter().enumerate() {
            codes[i] = c.code;
            points[i] = c.point;
        }
        (codes, points)
    }

    #[test]
    fn point_joins_previous_character() {
        let cells = layout("1.5");
        assert_eq!(
            cells.as_slice(),
            &[
                cell(b' ', false),
                cell(b' ', false),
                cell(b'1', true),
                cell(b'5', false),
            ]
        );
    }

    #[test]
    fn empty_text_is_blank() {
        let cells = layout("");
        assert_eq!(cells.len(), 4);
        assert!(cells.iter().all(|c| *c == cell(b' ', false)));
    }

    #[test]
    fn long_text_is_cut_after_four_characters() {
        assert_eq!(codes(&layout("ABCDEF")), (*b"ABCD", [false; 4]));
        assert_eq!(codes(&layout("12.345")), (*b"1234", [false, true, false, false]));
        // points after the fourth character are kept until the fifth character
        assert_eq!(codes(&layout("1234.5")), (*b"1234", [false, false, false, true]));
        assert_eq!(codes(&layout("12345.")), (*b"1234", [false; 4]));
    }

    #[test]
    fn leading_point_gets_blank_digit() {
        // padded to "    ." first, so the point lands on the last pad
        assert_eq!(codes(&layout(".")), (*b"    ", [false, false, false, true]));
        assert_eq!(codes(&layout(".5")), (*b"   5", [false, false, true, false]));
        // a single pad, which takes the point
        assert_eq!(
            layout(".123").as_slice(),
            &[
                cell(b' ', true),
                cell(b'1', false),
                cell(b'2', false),
                cell(b'3', false),
            ]
        );
    }

    #[test]
    fn double_point_gets_blank_digit() {
        assert_eq!(codes(&layout("1..2")), (*b"  1 ", [false, false, true, true]));
    }

    #[test]
    fn point_first_on_full_text_takes_a_digit() {
        // nothing to attach to, so the point takes the first digit and pushes the 4 out
        assert_eq!(codes(&layout(".1234")), (*b" 123", [true, false, false, false]));
    }

    #[test]
    fn overflow_is_dropped() {
        // "1234" fills all digits, the second point has nowhere to go
        let cells = layout("1234..");
        assert_eq!(cells.len(), 4);
        assert_eq!(codes(&cells), (*b"1234", [false, false, false, true]));

        // the 2 is pushed out by the blank point digit
        let cells = layout("1..2");
        assert_eq!(cells.len(), 4);
        assert!(!cells.iter().any(|c| c.code == b'2'));

        // padding already fills the digits, the blank point digit is dropped
        assert_eq!(codes(&layout("1..")), (*b"   1", [false, false, false, true]));
    }

    #[test]
    fn integers() {
        assert_eq!(integer_codes(0), Some(*b"   0"));
        assert_eq!(integer_codes(-5), Some(*b"  -5"));
        assert_eq!(integer_codes(42), Some(*b"  42"));
        assert_eq!(integer_codes(9999), Some(*b"9999"));
        assert_eq!(integer_codes(-999), Some(*b"-999"));
        assert_eq!(integer_codes(-10), Some(*b" -10"));
        assert_eq!(integer_codes(10000), None);
        assert_eq!(integer_codes(-1000), None);
        assert_eq!(integer_codes(i32::MIN), None);
    }

    #[test]
    fn hex() {
        assert_eq!(hex_digits(255), Some([0, 0, 0xF, 0xF]));
        assert_eq!(hex_digits(-1), Some([0xF; 4]));
        assert_eq!(hex_digits(0), Some([0; 4]));
        assert_eq!(hex_digits(0xBEEF), Some([0xB, 0xE, 0xE, 0xF]));
        assert_eq!(hex_digits(-32768), Some([8, 0, 0, 0]));
        assert_eq!(hex_digits(0x1_0000), None);
        assert_eq!(hex_digits(-32769), None);
    }

    #[test]
    fn decimals_fill_all_digits() {
        assert_eq!(decimal_text(1.5).as_deref(), Some("1.500"));
        assert_eq!(decimal_text(-1.5).as_deref(), Some("-1.500"));
        assert_eq!(decimal_text(12.25).as_deref(), Some("12.250"));
        assert_eq!(decimal_text(5.0).as_deref(), Some("5.0000"));
        assert_eq!(decimal_text(999.0).as_deref(), Some("999.0000"));
        assert_eq!(decimal_text(0.001).as_deref(), Some("0.001"));
        assert_eq!(decimal_text(3.14159).as_deref(), Some("3.14159"));
    }

    #[test]
    fn decimal_text_lays_out_on_four_digits() {
        let text = decimal_text(3.14159).unwrap();
        assert_eq!(codes(&layout(&text)), (*b"3141", [true, false, false, false]));

        let text = decimal_text(-1.5).unwrap();
        assert_eq!(codes(&layout(&text)), (*b"-150", [false, true, false, false]));

        let text = decimal_text(999.0).unwrap();
        assert_eq!(codes(&layout(&text)), (*b"9990", [false, false, true, false]));
    }

    #[test]
    fn zero_decimal_is_refused() {
        assert_eq!(decimal_text(0.0), None);
        assert_eq!(decimal_text(-0.0), None);
        assert_eq!(decimal_text(-0.001).as_deref(), Some("-0.001"));
    }

    #[test]
    fn bad_decimals() {
        assert_eq!(decimal_text(999.5), None);
        assert_eq!(decimal_text(-1000.0), None);
        assert_eq!(decimal_text(0.0005), None);
        assert_eq!(decimal_text(-0.0009), None);
        assert_eq!(decimal_text(f32::NAN), None);
        assert_eq!(decimal_text(f32::INFINITY), None);
        assert_eq!(decimal_text(f32::NEG_INFINITY), None);
    }
}
