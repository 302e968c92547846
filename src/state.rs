//! Tracked display content and settings

use crate::command::{Brightness, State, DIGIT_COUNT};

/// Raw segment bytes last sent to each digit, bit 7 is the decimal point
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitBuffer([u8; DIGIT_COUNT]);

impl DigitBuffer {
    /// position is wrapped into 0..=3
    pub fn get(&self, pos: u8) -> u8 {
        self.0[(pos & 3) as usize]
    }

    pub(crate) fn set(&mut self, pos: u8, pattern: u8) {
        self.0[(pos & 3) as usize] = pattern;
    }

    #[allow(missing_docs)]
    pub fn as_array(&self) -> [u8; DIGIT_COUNT] {
        self.0
    }
}

#[derive(Default)]
pub(crate) struct DisplayState {
    id: u8,
    digits: DigitBuffer,
    display_on: State,
    brightness: Brightness,
}

impl DisplayState {
    pub(crate) fn new(id: u8) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub(crate) fn get_id(&self) -> u8 {
        self.id
    }

    pub(crate) fn get_digits(&self) -> &DigitBuffer {
        &self.digits
    }

    pub(crate) fn digits_mut(&mut self) -> &mut DigitBuffer {
        &mut self.digits
    }

    pub(crate) fn get_display_state(&self) -> State {
        self.display_on
    }

    pub(crate) fn set_display_state(&mut self, display: State) {
        self.display_on = display;
    }

    pub(crate) fn get_brightness(&self) -> Brightness {
        self.brightness
    }

    pub(crate) fn set_brightness(&mut self, brightness: Brightness) {
        self.brightness = brightness;
    }
}
