/*!
# TM1650 Driver

Driver for the TM1650 4-digit seven segment display controller, over its two wire bus
(a clock pin and a data pin, no bus address).

Basic Usage:

1. Prepare the pins <br/>
    The clock pin is any [`OutputPin`](embedded_hal::digital::OutputPin).
    The data pin is read back for the acknowledge bit, so it implements [`sender::DataPin`].
    An open drain pin can be wrapped in [`sender::OpenDrainPin`].
<br/>
<br/>
2. Use [`display::Display::with_pins()`] to create a [`display::Display`] and initialize the TM1650,
    or [`builder::Builder`] to pick id, speed and brightness first.
<br/>
<br/>
3. Turn the display on with [`display::Display::display_on()`], then show text and numbers with
    [`display::Display::render_string()`], [`display::Display::render_integer()`],
    [`display::Display::render_decimal()`] and [`display::Display::render_hex()`]
*/

#![no_std]
#![warn(missing_docs)]

pub mod builder;
pub mod command;
pub mod display;
pub mod error;
pub mod font;
pub mod format;
pub mod sender;
pub mod state;
pub mod timing;
pub mod utils;

pub use builder::Builder;
pub use command::{Brightness, State};
pub use display::Display;
pub use error::Error;
pub use sender::{DataPin, OpenDrainPin, TwoWireSender};
pub use timing::TimingConfig;
