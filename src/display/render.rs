use embedded_hal::delay::DelayNs;

use crate::{
    error::Error,
    font::GLYPHS,
    format::{decimal_text, hex_digits, integer_codes, layout, ERROR_TEXT},
    sender::SendFrame,
};

use super::Display;

impl<Sender, Delayer> Display<Sender, Delayer>
where
    Sender: SendFrame<Delayer>,
    Delayer: DelayNs,
{
    /// Show text, right aligned
    ///
    /// Up to 4 characters are shown, a `.` lights the decimal point of the
    /// character before it. Characters the display can't draw are left blank.
    pub fn render_string(&mut self, text: &str) -> Result<(), Error<Sender::PinError>> {
        for (pos, cell) in layout(text).iter().enumerate() {
            if cell.point {
                self.write_char_with_point(pos as u8, cell.code)?;
            } else {
                self.write_char(pos as u8, cell.code)?;
            }
        }
        Ok(())
    }

    /// Show an integer from -999 to 9999, `Err ` otherwise
    pub fn render_integer(&mut self, n: i32) -> Result<(), Error<Sender::PinError>> {
        let Some(codes) = integer_codes(n) else {
            return self.render_string(ERROR_TEXT);
        };

        for (pos, code) in codes.into_iter().enumerate() {
            self.write_char(pos as u8, code)?;
        }
        Ok(())
    }

    /// Show a number as 4 hexadecimal digits, `Err ` outside -32768 to 65535
    ///
    /// Negative numbers are shown as 16 bit two's complement, -1 is `FFFF`.
    pub fn render_hex(&mut self, n: i32) -> Result<(), Error<Sender::PinError>> {
        let Some(digits) = hex_digits(n) else {
            return self.render_string(ERROR_TEXT);
        };

        for (pos, digit) in digits.into_iter().enumerate() {
            self.write_raw(pos as u8, GLYPHS[digit as usize])?;
        }
        Ok(())
    }

    /// Show a number with a decimal point, using all 4 digits
    ///
    /// Numbers outside -999 to 999, or closer to zero than 0.001 (zero included),
    /// are shown as `Err `.
    pub fn render_decimal(&mut self, n: f32) -> Result<(), Error<Sender::PinError>> {
        match decimal_text(n) {
            Some(text) => self.render_string(&text),
            None => self.render_string(ERROR_TEXT),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::{vec, vec::Vec};

    use crate::display::tests::{display, frames, TestDisplay};

    // E r r blank
    const ERR: [u8; 4] = [0x79, 0x50, 0x50, 0x00];

    fn shown(display: &TestDisplay) -> [u8; 4] {
        display.get_digits().as_array()
    }

    fn values(display: &TestDisplay) -> Vec<u8> {
        frames(display).iter().map(|f| f.1).collect()
    }

    #[test]
    fn string_point_joins_digit() {
        let mut display = display();

        display.render_string("1.5").unwrap();

        assert_eq!(shown(&display), [0x00, 0x00, 0x86, 0x6D]);
        assert_eq!(
            frames(&display),
            vec![(0x68, 0x00), (0x6A, 0x00), (0x6C, 0x86), (0x6E, 0x6D)]
        );
    }

    #[test]
    fn empty_string_blanks_all_digits() {
        let mut display = display();
        display.render_string("8888").unwrap();

        display.render_string("").unwrap();

        assert_eq!(shown(&display), [0; 4]);
        assert_eq!(values(&display)[4..], [0, 0, 0, 0]);
    }

    #[test]
    fn string_is_case_insensitive() {
        let mut display = display();

        display.render_string("HeLP").unwrap();
        let upper = shown(&display);
        display.render_string("help").unwrap();

        assert_eq!(shown(&display), upper);
        assert_eq!(upper, [0x76, 0x79, 0x38, 0x73]);
    }

    #[test]
    fn string_overflow_never_leaves_digits() {
        let mut display = display();

        display.render_string("1..2").unwrap();

        let frames = frames(&display);
        assert_eq!(frames.len(), 4);
        assert_eq!(shown(&display), [0x00, 0x00, 0x86, 0x80]);
    }

    #[test]
    fn integer_zero_and_negative() {
        let mut display = display();

        display.render_integer(0).unwrap();
        assert_eq!(shown(&display), [0x00, 0x00, 0x00, 0x3F]);

        display.render_integer(-5).unwrap();
        assert_eq!(shown(&display), [0x00, 0x00, 0x40, 0x6D]);

        display.render_integer(1234).unwrap();
        assert_eq!(shown(&display), [0x06, 0x5B, 0x4F, 0x66]);

        // every render writes all 4 digits
        assert_eq!(frames(&display).len(), 12);
    }

    #[test]
    fn integer_out_of_range_is_err() {
        let mut display = display();

        display.render_integer(10000).unwrap();
        assert_eq!(shown(&display), ERR);

        display.render_integer(8).unwrap();
        display.render_integer(-1000).unwrap();
        assert_eq!(shown(&display), ERR);
    }

    #[test]
    fn integer_clears_old_points() {
        let mut display = display();
        display.render_string("8.8.8.8.").unwrap();

        display.render_integer(88).unwrap();

        assert_eq!(shown(&display), [0x00, 0x00, 0x7F, 0x7F]);
    }

    #[test]
    fn hex_digits_are_not_suppressed() {
        let mut display = display();

        display.render_hex(255).unwrap();
        assert_eq!(shown(&display), [0x3F, 0x3F, 0x71, 0x71]);

        display.render_hex(-1).unwrap();
        assert_eq!(shown(&display), [0x71; 4]);

        display.render_hex(0xA0C1).unwrap();
        assert_eq!(shown(&display), [0x77, 0x3F, 0x39, 0x06]);
    }

    #[test]
    fn hex_out_of_range_is_err() {
        let mut display = display();

        display.render_hex(0x1_0000).unwrap();
        assert_eq!(shown(&display), ERR);

        display.render_hex(-32769).unwrap();
        assert_eq!(shown(&display), ERR);
    }

    #[test]
    fn decimal_uses_all_digits() {
        let mut display = display();

        display.render_decimal(1.5).unwrap();
        // 1. 5 0 0
        assert_eq!(shown(&display), [0x86, 0x6D, 0x3F, 0x3F]);

        display.render_decimal(-12.5).unwrap();
        // - 1 2. 5
        assert_eq!(shown(&display), [0x40, 0x06, 0xDB, 0x6D]);

        display.render_decimal(42.0).unwrap();
        // 4 2. 0 0
        assert_eq!(shown(&display), [0x66, 0xDB, 0x3F, 0x3F]);
    }

    #[test]
    fn decimal_zero_is_err() {
        let mut display = display();

        display.render_decimal(0.0).unwrap();
        assert_eq!(shown(&display), ERR);

        display.render_decimal(8.0).unwrap();
        display.render_decimal(-0.0).unwrap();
        assert_eq!(shown(&display), ERR);
    }

    #[test]
    fn bad_decimal_is_err() {
        let mut display = display();

        for n in [1000.0, -999.5, 0.0001, f32::NAN] {
            display.render_decimal(8.0).unwrap();
            display.render_decimal(n).unwrap();
            assert_eq!(shown(&display), ERR, "{n}");
        }
    }
}
