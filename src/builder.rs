//! Collect settings, then build a [`Display`] and initialize the TM1650

use embedded_hal::delay::DelayNs;

use crate::{
    command::{Brightness, State},
    display::Display,
    error::Error,
    sender::SendFrame,
    state::DisplayState,
    timing::TimingConfig,
};

/// Settings a [`Display`] starts with
pub struct Builder<Sender, Delayer>
where
    Sender: SendFrame<Delayer>,
    Delayer: DelayNs,
{
    sender: Sender,
    delayer: Delayer,
    id: u8,
    timing: Option<TimingConfig>,
    display_on: State,
    brightness: Brightness,
}

impl<Sender, Delayer> Builder<Sender, Delayer>
where
    Sender: SendFrame<Delayer>,
    Delayer: DelayNs,
{
    /// Combine a sender and a delayer into a [`Builder`]
    ///
    /// Defaults: id 0, the sender's current timing, display off, brightness 0.
    pub fn new(sender: Sender, delayer: Delayer) -> Self {
        Self {
            sender,
            delayer,
            id: 0,
            timing: None,
            display_on: State::default(),
            brightness: Brightness::default(),
        }
    }

    /// Consume the [`Builder`], initialize the bus and return a blank [`Display`]
    ///
    /// The display is turned on only when set with [`Builder::set_display()`].
    pub fn init(mut self) -> Result<Display<Sender, Delayer>, Error<Sender::PinError>> {
        if let Some(timing) = self.timing {
            self.sender.set_timing(timing);
        }

        self.sender.init(&mut self.delayer)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("tm1650 #{=u8}: init", self.id);

        let mut display = Display::from_parts(self.sender, self.delayer, DisplayState::new(self.id));

        display.display_clear()?;

        if self.display_on == State::On {
            display.display_on(self.brightness)?;
        }

        Ok(display)
    }

    /// Label telling several displays apart in logs
    pub fn set_id(mut self, id: u8) -> Self {
        self.id = id;
        self
    }

    #[allow(missing_docs)]
    pub fn get_id(&self) -> u8 {
        self.id
    }

    /// Use this bus timing instead of the sender's
    pub fn set_timing(mut self, timing: TimingConfig) -> Self {
        self.timing = Some(timing);
        self
    }

    /// Timing the bus will run at after [`Builder::init()`]
    pub fn get_timing(&self) -> TimingConfig {
        self.timing.unwrap_or_else(|| self.sender.get_timing())
    }

    /// Set the bus speed in bits per second, a speed of zero is refused
    pub fn set_speed(self, rate: u32) -> Result<Self, Error<Sender::PinError>> {
        let timing = TimingConfig::from_rate(rate).ok_or(Error::InvalidSpeed)?;
        Ok(self.set_timing(timing))
    }

    /// Whether to turn the display on at the end of [`Builder::init()`]
    pub fn set_display(mut self, display: State) -> Self {
        self.display_on = display;
        self
    }

    #[allow(missing_docs)]
    pub fn get_display(&self) -> State {
        self.display_on
    }

    /// Brightness used when the display is turned on at init
    pub fn set_brightness(mut self, brightness: impl Into<Brightness>) -> Self {
        self.brightness = brightness.into();
        self
    }

    #[allow(missing_docs)]
    pub fn get_brightness(&self) -> Brightness {
        self.brightness
    }
}
