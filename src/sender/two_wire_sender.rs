use embedded_hal::{delay::DelayNs, digital::OutputPin};

use crate::{
    command::Frame,
    error::Error,
    timing::TimingConfig,
    utils::{BitOps, BitState},
};

use super::{Acknowledge, DataPin, SendFrame};

// Bus protocol of TM1650:
// idle:  CLK high, then DIO high
// start: DIO falls while CLK is high, then CLK falls
// bits:  MSB first, DIO changes while CLK is low, latched on CLK rising edge
// ack:   9th clock, DIO released and pulled low by the display
// a frame is start + address byte + value byte + idle

/// Bit-banged sender, drives the CLK and DIO line of the display with two GPIO pins
pub struct TwoWireSender<ClkPin, DioPin>
where
    DioPin: DataPin,
    ClkPin: OutputPin<Error = DioPin::Error>,
{
    clk_pin: ClkPin,
    dio_pin: DioPin,
    timing: TimingConfig,
}

impl<ClkPin, DioPin> TwoWireSender<ClkPin, DioPin>
where
    DioPin: DataPin,
    ClkPin: OutputPin<Error = DioPin::Error>,
{
    /// Take the pins, nothing is driven until [`SendFrame::init()`]
    pub fn new(clk: ClkPin, dio: DioPin) -> Self {
        Self {
            clk_pin: clk,
            dio_pin: dio,
            timing: TimingConfig::default(),
        }
    }

    /// Swap in another pair of pins and bring them into idle state
    ///
    /// The previous pins are given back, untouched.
    pub fn reconfigure<Delayer: DelayNs>(
        &mut self,
        clk: ClkPin,
        dio: DioPin,
        delayer: &mut Delayer,
    ) -> Result<(ClkPin, DioPin), Error<DioPin::Error>> {
        let old_clk = core::mem::replace(&mut self.clk_pin, clk);
        let old_dio = core::mem::replace(&mut self.dio_pin, dio);

        self.init(delayer)?;

        Ok((old_clk, old_dio))
    }

    /// Give the pins back
    pub fn release(self) -> (ClkPin, DioPin) {
        (self.clk_pin, self.dio_pin)
    }

    fn set_clk(&mut self, state: BitState) -> Result<(), Error<DioPin::Error>> {
        self.clk_pin.set_state(state.into()).map_err(Error::Pin)
    }

    fn set_dio(&mut self, state: BitState) -> Result<(), Error<DioPin::Error>> {
        self.dio_pin.set_state(state.into()).map_err(Error::Pin)
    }

    fn idle<Delayer: DelayNs>(&mut self, delayer: &mut Delayer) -> Result<(), Error<DioPin::Error>> {
        self.set_clk(BitState::Set)?;
        delayer.delay_us(self.timing.full_pulse_us());
        self.set_dio(BitState::Set)?;
        delayer.delay_us(self.timing.full_pulse_us());
        Ok(())
    }

    // unlike I2C, DIO is not raised again here, the bus must be idle already
    fn start<Delayer: DelayNs>(&mut self, delayer: &mut Delayer) -> Result<(), Error<DioPin::Error>> {
        self.set_dio(BitState::Clear)?;
        delayer.delay_us(self.timing.full_pulse_us());
        self.set_clk(BitState::Clear)
    }

    fn send_byte<Delayer: DelayNs>(
        &mut self,
        byte: u8,
        delayer: &mut Delayer,
    ) -> Result<BitState, Error<DioPin::Error>> {
        let full = self.timing.full_pulse_us();
        let half = self.timing.half_pulse_us();

        for pos in (0..8).rev() {
            delayer.delay_us(half);
            self.set_dio(byte.check_bit(pos))?;
            delayer.delay_us(half);
            self.set_clk(BitState::Set)?;
            delayer.delay_us(full);
            self.set_clk(BitState::Clear)?;
        }

        self.dio_pin.set_as_input().map_err(Error::Pin)?;
        delayer.delay_us(full);
        self.set_clk(BitState::Set)?;
        delayer.delay_us(full);
        let ack = BitState::from(self.dio_pin.is_high().map_err(Error::Pin)?);
        self.set_clk(BitState::Clear)?;
        self.dio_pin.set_as_output().map_err(Error::Pin)?;
        self.set_dio(BitState::Clear)?;
        delayer.delay_us(half);

        Ok(ack)
    }
}

impl<ClkPin, DioPin, Delayer> SendFrame<Delayer> for TwoWireSender<ClkPin, DioPin>
where
    DioPin: DataPin,
    ClkPin: OutputPin<Error = DioPin::Error>,
    Delayer: DelayNs,
{
    type PinError = DioPin::Error;

    fn init(&mut self, delayer: &mut Delayer) -> Result<(), Error<Self::PinError>> {
        self.set_clk(BitState::Clear)?;
        self.dio_pin.set_as_output().map_err(Error::Pin)?;
        self.set_dio(BitState::Clear)?;
        self.idle(delayer)
    }

    fn send(
        &mut self,
        frame: impl Into<Frame>,
        delayer: &mut Delayer,
    ) -> Result<Acknowledge, Error<Self::PinError>> {
        let frame = frame.into();

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "tm1650 frame {=u8:#04x} {=u8:#04x}",
            frame.address(),
            frame.value()
        );

        self.start(delayer)?;
        let address = self.send_byte(frame.address(), delayer)?;
        let value = self.send_byte(frame.value(), delayer)?;
        self.idle(delayer)?;

        Ok(Acknowledge { address, value })
    }

    fn go_idle(&mut self, delayer: &mut Delayer) -> Result<(), Error<Self::PinError>> {
        self.idle(delayer)
    }

    fn get_timing(&self) -> TimingConfig {
        self.timing
    }

    fn set_timing(&mut self, timing: TimingConfig) {
        self.timing = timing;
    }
}
