//! Common tools

use embedded_hal::digital::PinState;

/// The state of a bit,
/// It's either [`BitState::Clear`] to represent a 0
/// or [`BitState::Set`] to represent a 1
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitState {
    /// Bit is 0
    Clear,
    /// Bit is 1
    Set,
}

impl From<BitState> for PinState {
    fn from(state: BitState) -> Self {
        match state {
            BitState::Clear => PinState::Low,
            BitState::Set => PinState::High,
        }
    }
}

impl From<bool> for BitState {
    fn from(level: bool) -> Self {
        match level {
            true => BitState::Set,
            false => BitState::Clear,
        }
    }
}

/// Simple bit ops on a byte
///
/// Bit positions wrap at 8, `pos` 9 addresses bit 1.
pub trait BitOps {
    /// set bit at `pos`, return the new value
    fn set_bit(&mut self, pos: u8) -> Self;
    #[allow(missing_docs)]
    fn check_bit(&self, pos: u8) -> BitState;
}

impl BitOps for u8 {
    fn set_bit(&mut self, pos: u8) -> Self {
        *self |= 1u8 << (pos & 7);
        *self
    }

    fn check_bit(&self, pos: u8) -> BitState {
        BitState::from((*self >> (pos & 7)) & 1 == 1)
    }
}
