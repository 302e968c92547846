//! Built-in sender
//! If you want to drive the display another way, you will need to implement [`SendFrame`] trait

use embedded_hal::{
    delay::DelayNs,
    digital::{ErrorType, InputPin, OutputPin},
};

use crate::{command::Frame, error::Error, timing::TimingConfig, utils::BitState};

mod two_wire_sender;

pub use two_wire_sender::TwoWireSender;

#[cfg(test)]
pub(crate) use two_wire_sender::tests as fake_pins;

/// Data line levels sampled in the acknowledge slot of each byte of a frame
///
/// The display pulls the line low to acknowledge. The levels are reported as is,
/// the driver never checks or retries on them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Acknowledge {
    /// after the address byte
    pub address: BitState,
    /// after the value byte
    pub value: BitState,
}

impl Default for Acknowledge {
    fn default() -> Self {
        Self {
            address: BitState::Clear,
            value: BitState::Clear,
        }
    }
}

/// [`SendFrame`] is the trait a sender should implement to communicate with the hardware
pub trait SendFrame<Delayer: DelayNs> {
    /// Error of the underlying pins
    type PinError;

    /// Put the bus in a known state, called once before the first frame
    fn init(&mut self, delayer: &mut Delayer) -> Result<(), Error<Self::PinError>> {
        self.go_idle(delayer)
    }

    /// Send one address/value pair, the frame is never interleaved with another one
    fn send(
        &mut self,
        frame: impl Into<Frame>,
        delayer: &mut Delayer,
    ) -> Result<Acknowledge, Error<Self::PinError>>;

    /// Release the bus into idle state
    ///
    /// Note:
    /// If a driver doesn't have an idle state, just silently bypass it
    #[allow(unused_variables)]
    fn go_idle(&mut self, delayer: &mut Delayer) -> Result<(), Error<Self::PinError>> {
        Ok(())
    }

    /// Get current bit timing
    fn get_timing(&self) -> TimingConfig {
        TimingConfig::default()
    }

    /// Set the bit timing
    ///
    /// Note:
    /// If a driver doesn't support timing change, just silently bypass it
    #[allow(unused_variables)]
    fn set_timing(&mut self, timing: TimingConfig) {}
}

/// A pin that can drive the data line and also read it back
///
/// The sender switches the data line to input to sample the acknowledge bit,
/// then takes it back as an output.
pub trait DataPin: InputPin + OutputPin {
    /// Stop driving the line, let the pull-up and the display control it
    fn set_as_input(&mut self) -> Result<(), Self::Error>;

    /// Drive the line again
    fn set_as_output(&mut self) -> Result<(), Self::Error>;
}

/// Adapter for an open drain pin with pull-up, which can be read while it is an output
///
/// Switching to input just releases the line by setting it high.
pub struct OpenDrainPin<Pin> {
    pin: Pin,
}

impl<Pin> OpenDrainPin<Pin> {
    #[allow(missing_docs)]
    pub fn new(pin: Pin) -> Self {
        Self { pin }
    }

    /// Give the wrapped pin back
    pub fn into_inner(self) -> Pin {
        self.pin
    }
}

impl<Pin: ErrorType> ErrorType for OpenDrainPin<Pin> {
    type Error = Pin::Error;
}

impl<Pin: OutputPin> OutputPin for OpenDrainPin<Pin> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.pin.set_low()
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.pin.set_high()
    }
}

impl<Pin: InputPin> InputPin for OpenDrainPin<Pin> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.pin.is_high()
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.pin.is_low()
    }
}

impl<Pin: InputPin + OutputPin> DataPin for OpenDrainPin<Pin> {
    fn set_as_input(&mut self) -> Result<(), Self::Error> {
        // in open drain mode, set pin high to release control
        self.pin.set_high()
    }

    fn set_as_output(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
