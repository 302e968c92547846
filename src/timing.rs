//! Bit timing of the two wire bus

/// Delays used while shifting bits, in microseconds
///
/// `full_pulse_us` is how long the clock stays high for one bit,
/// `half_pulse_us` is the setup time around a data line change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingConfig {
    full_pulse_us: u32,
    half_pulse_us: u32,
}

impl Default for TimingConfig {
    /// 12 us / 6 us, what the bus runs at before any speed is set
    fn default() -> Self {
        Self {
            full_pulse_us: 12,
            half_pulse_us: 6,
        }
    }
}

impl TimingConfig {
    /// Shortest pulses the bus can be driven with
    pub const MIN: Self = Self {
        full_pulse_us: 2,
        half_pulse_us: 1,
    };

    /// Derive pulse widths from a bit rate (bits per second)
    ///
    /// Returns [`None`] for a rate of zero.
    pub const fn from_rate(rate: u32) -> Option<Self> {
        if rate == 0 {
            return None;
        }

        let period_us = 1_000_000 / rate;

        if period_us >= 4 {
            Some(Self {
                full_pulse_us: period_us / 2,
                half_pulse_us: period_us / 4,
            })
        } else {
            Some(Self::MIN)
        }
    }

    /// clock high time for one bit
    pub const fn full_pulse_us(&self) -> u32 {
        self.full_pulse_us
    }

    /// data setup time before and after a data line change
    pub const fn half_pulse_us(&self) -> u32 {
        self.half_pulse_us
    }
}
