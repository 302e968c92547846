//! Command codes of the TM1650 and the frames they lower to

use crate::utils::BitOps;

/// Address of the system command register (display on/off, brightness)
pub const SYSTEM_COMMAND: u8 = 0x48;

/// Address to read the key scan result
///
/// Key scanning is not supported by this driver, the code is here for completeness.
pub const READ_KEY_COMMAND: u8 = 0x49;

/// Addresses of digit 0 (leftmost) to digit 3
pub const DIGIT_ADDRESS: [u8; 4] = [0x68, 0x6A, 0x6C, 0x6E];

/// Number of digits on the module
pub const DIGIT_COUNT: usize = DIGIT_ADDRESS.len();

/// One address byte and one data byte, always sent together
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    address: u8,
    value: u8,
}

impl Frame {
    #[allow(missing_docs)]
    pub const fn new(address: u8, value: u8) -> Self {
        Self { address, value }
    }

    #[allow(missing_docs)]
    pub const fn address(&self) -> u8 {
        self.address
    }

    #[allow(missing_docs)]
    pub const fn value(&self) -> u8 {
        self.value
    }
}

impl From<(u8, u8)> for Frame {
    fn from((address, value): (u8, u8)) -> Self {
        Self::new(address, value)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(missing_docs)]
pub enum State {
    #[default]
    Off,
    On,
}

/// Display brightness, 0 (dimmest) to 7 (brightest)
///
/// Only the low 3 bits of the level are used.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Brightness(u8);

impl Brightness {
    /// brightest level
    pub const MAX: Self = Self(7);

    #[allow(missing_docs)]
    pub const fn new(level: u8) -> Self {
        Self(level & 7)
    }

    #[allow(missing_docs)]
    pub const fn level(&self) -> u8 {
        self.0
    }
}

impl From<u8> for Brightness {
    fn from(level: u8) -> Self {
        Self::new(level)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) enum CommandSet {
    DisplayOn(Brightness),
    DisplayOff,
    // pos is masked to 0..=3
    WriteDigit { pos: u8, pattern: u8 },
}

impl From<CommandSet> for Frame {
    fn from(command: CommandSet) -> Self {
        match command {
            CommandSet::DisplayOn(brightness) => {
                // bit 0: display on, bit 4-6: brightness
                let mut raw_bits = brightness.level() << 4;
                raw_bits.set_bit(0);
                Frame::new(SYSTEM_COMMAND, raw_bits)
            }

            CommandSet::DisplayOff => Frame::new(SYSTEM_COMMAND, 0),

            CommandSet::WriteDigit { pos, pattern } => {
                Frame::new(DIGIT_ADDRESS[(pos & 3) as usize], pattern)
            }
        }
    }
}
