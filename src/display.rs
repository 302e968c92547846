//! The display driver

use embedded_hal::{delay::DelayNs, digital::OutputPin};

use crate::{
    builder::Builder,
    command::{Brightness, CommandSet, State},
    error::Error,
    font::segments,
    sender::{DataPin, SendFrame, TwoWireSender},
    state::{DigitBuffer, DisplayState},
    timing::TimingConfig,
    utils::BitOps,
};

mod render;

/// A TM1650 4-digit display
///
/// Every write is sent out immediately, one frame per digit.
/// The last byte sent to each digit is kept, so a decimal point can be added to a
/// digit without knowing what it shows.
pub struct Display<Sender, Delayer>
where
    Sender: SendFrame<Delayer>,
    Delayer: DelayNs,
{
    sender: Sender,
    delayer: Delayer,
    state: DisplayState,
}

impl<Sender, Delayer> Display<Sender, Delayer>
where
    Sender: SendFrame<Delayer>,
    Delayer: DelayNs,
{
    pub(crate) fn from_parts(sender: Sender, delayer: Delayer, state: DisplayState) -> Self {
        Self {
            sender,
            delayer,
            state,
        }
    }

    /// Initialize the bus and blank all digits, the display stays off
    ///
    /// Use [`Builder`] for more settings.
    pub fn new(id: u8, sender: Sender, delayer: Delayer) -> Result<Self, Error<Sender::PinError>> {
        Builder::new(sender, delayer).set_id(id).init()
    }

    /// Give the sender and the delayer back
    pub fn release(self) -> (Sender, Delayer) {
        (self.sender, self.delayer)
    }

    fn send(&mut self, command: CommandSet) -> Result<(), Error<Sender::PinError>> {
        self.sender.send(command, &mut self.delayer)?;
        Ok(())
    }

    /// Set the bus speed in bits per second
    ///
    /// A speed of zero is refused and the current timing is kept.
    pub fn set_speed(&mut self, rate: u32) -> Result<(), Error<Sender::PinError>> {
        let timing = TimingConfig::from_rate(rate).ok_or(Error::InvalidSpeed)?;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "tm1650 #{=u8}: {=u32} bps, pulse {=u32}/{=u32} us",
            self.state.get_id(),
            rate,
            timing.full_pulse_us(),
            timing.half_pulse_us()
        );

        self.sender.set_timing(timing);
        Ok(())
    }

    /// Current bus timing
    pub fn get_timing(&self) -> TimingConfig {
        self.sender.get_timing()
    }

    /// Turn the display on with brightness 0 (dimmest) to 7
    pub fn display_on(
        &mut self,
        brightness: impl Into<Brightness>,
    ) -> Result<(), Error<Sender::PinError>> {
        let brightness = brightness.into();

        self.sender.go_idle(&mut self.delayer)?;
        self.send(CommandSet::DisplayOn(brightness))?;

        self.state.set_display_state(State::On);
        self.state.set_brightness(brightness);
        Ok(())
    }

    /// Turn the display off, digits keep their content
    pub fn display_off(&mut self) -> Result<(), Error<Sender::PinError>> {
        self.send(CommandSet::DisplayOff)?;
        self.state.set_display_state(State::Off);
        Ok(())
    }

    /// Blank all 4 digits
    pub fn display_clear(&mut self) -> Result<(), Error<Sender::PinError>> {
        for pos in 0..4 {
            self.write_raw(pos, 0)?;
        }
        Ok(())
    }

    /// Send a segment pattern to a digit as is
    ///
    /// `pos` is wrapped into 0..=3, bit 7 of `pattern` is the decimal point.
    ///
    /// The stored byte is updated only once the whole frame went out. On a pin error
    /// it keeps the previous pattern, while the digit itself may already show the new
    /// one if the error hit after the value byte. Write the digit again to resync.
    pub fn write_raw(&mut self, pos: u8, pattern: u8) -> Result<(), Error<Sender::PinError>> {
        let pos = pos & 3;
        self.send(CommandSet::WriteDigit { pos, pattern })?;
        self.state.digits_mut().set(pos, pattern);
        Ok(())
    }

    /// Show a character on a digit
    ///
    /// A `.` lights the decimal point and keeps what the digit shows,
    /// any other character replaces the digit, decimal point included.
    pub fn write_char(&mut self, pos: u8, code: u8) -> Result<(), Error<Sender::PinError>> {
        let pattern = match code {
            b'.' => {
                let mut pattern = self.state.get_digits().get(pos);
                pattern.set_bit(7);
                pattern
            }
            _ => segments(code),
        };

        self.write_raw(pos, pattern)
    }

    /// Show a character on a digit with its decimal point lit
    pub fn write_char_with_point(
        &mut self,
        pos: u8,
        code: u8,
    ) -> Result<(), Error<Sender::PinError>> {
        let mut pattern = segments(code);
        pattern.set_bit(7);

        self.write_raw(pos, pattern)
    }

    /// Segment bytes last sent to each digit
    pub fn get_digits(&self) -> DigitBuffer {
        *self.state.get_digits()
    }

    #[allow(missing_docs)]
    pub fn get_id(&self) -> u8 {
        self.state.get_id()
    }

    #[allow(missing_docs)]
    pub fn get_display_state(&self) -> State {
        self.state.get_display_state()
    }

    /// Brightness of the last [`Display::display_on()`]
    pub fn get_brightness(&self) -> Brightness {
        self.state.get_brightness()
    }

    /// Wait with the display's delayer
    pub fn delay_ms(&mut self, ms: u32) {
        self.delayer.delay_ms(ms);
    }

    /// Wait with the display's delayer
    pub fn delay_us(&mut self, us: u32) {
        self.delayer.delay_us(us);
    }
}

impl<ClkPin, DioPin, Delayer> Display<TwoWireSender<ClkPin, DioPin>, Delayer>
where
    DioPin: DataPin,
    ClkPin: OutputPin<Error = DioPin::Error>,
    Delayer: DelayNs,
{
    /// Initialize a display wired to a CLK pin and a DIO pin
    pub fn with_pins(
        id: u8,
        clk: ClkPin,
        dio: DioPin,
        delayer: Delayer,
    ) -> Result<Self, Error<DioPin::Error>> {
        Self::new(id, TwoWireSender::new(clk, dio), delayer)
    }

    /// Move the display to another pair of pins, the previous pins are given back
    ///
    /// Timing and digit content are kept, the new pins are brought into idle state.
    pub fn reconfigure(
        &mut self,
        clk: ClkPin,
        dio: DioPin,
    ) -> Result<(ClkPin, DioPin), Error<DioPin::Error>> {
        self.sender.reconfigure(clk, dio, &mut self.delayer)
    }
}
