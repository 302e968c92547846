//! Drive a TM1650 4-digit display with a STM32F411RET6
//!
//! this demo cycles through every kind of content the driver can render.

//! Wiring diagram
//!
//! TM1650 board <-> STM32F411RET6
//!          GND <-> GND
//!          VCC <-> 5V
//!          SCL <-> PA0
//!          SDA <-> PA1 (open drain, the board usually carries the pull-up, else add a 4.7 kOhm one)

#![no_std]
#![no_main]

use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};
use stm32f4xx_hal::{pac, prelude::*};

use tm1650_driver::{Brightness, Builder, OpenDrainPin, State, TwoWireSender};

const TEXTS: [&str; 4] = ["HELP", "1.2.3.4.", "-.-.", "Good"];
const INTEGERS: [i32; 4] = [0, -42, 2061, 10_000];
// the last two are too close to zero and show `Err `
const DECIMALS: [f32; 4] = [3.14159, -12.5, 0.0, 0.0001];
const HEXES: [i32; 3] = [0xBEEF, 255, -1];

#[cortex_m_rt::entry]
fn main() -> ! {
    rtt_init_print!();

    let dp = pac::Peripherals::take().expect("Cannot take device peripherals");
    let cp = pac::CorePeripherals::take().expect("Cannot take core peripherals");

    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.use_hse(12.MHz()).freeze();

    let delayer = cp.SYST.delay(&clocks);

    // init needed digital pins

    let gpioa = dp.GPIOA.split();

    // Push-pull mode for the clock line, the display never drives it
    let clk_pin = gpioa.pa0.into_push_pull_output().erase();

    // data line is read back for acknowledge
    let dio_pin = gpioa
        .pa1
        .into_open_drain_output()
        .internal_pull_up(true)
        .erase();

    let sender = TwoWireSender::new(clk_pin, OpenDrainPin::new(dio_pin));

    // init TM1650, about 50 kbps
    let mut display = Builder::new(sender, delayer)
        .set_id(1)
        .set_speed(50_000)
        .expect("Speed must not be zero")
        .set_display(State::On)
        .set_brightness(Brightness::new(2))
        .init()
        .expect("Cannot init TM1650");

    rprintln!("TM1650 #{} ready, {:?}", display.get_id(), display.get_timing());

    loop {
        for text in TEXTS {
            rprintln!("string {}", text);
            display.render_string(text).unwrap();
            display.delay_ms(1_000);
        }

        for n in INTEGERS {
            rprintln!("integer {}", n);
            display.render_integer(n).unwrap();
            display.delay_ms(1_000);
        }

        for n in DECIMALS {
            rprintln!("decimal {}", n);
            display.render_decimal(n).unwrap();
            display.delay_ms(1_000);
        }

        for n in HEXES {
            rprintln!("hex {}", n);
            display.render_hex(n).unwrap();
            display.delay_ms(1_000);
        }

        // ramp brightness up, then blink
        for level in 0..=Brightness::MAX.level() {
            display.render_integer(level as i32).unwrap();
            display.display_on(level).unwrap();
            display.delay_ms(250);
        }

        for _ in 0..3 {
            display.display_off().unwrap();
            display.delay_ms(250);
            display.display_on(Brightness::MAX).unwrap();
            display.delay_ms(250);
        }

        display.display_clear().unwrap();
        display.delay_ms(500);
    }
}
