//! Driver error type

/// Errors returned by the driver
///
/// `E` is the error type of the underlying pins. Rendering never fails on
/// input content: out of range numbers are shown as `Err `, unknown
/// characters are shown blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Driving or sampling a pin failed
    Pin(E),
    /// A transfer speed of zero was requested
    InvalidSpeed,
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Pin(e) => write!(f, "pin error: {:?}", e),
            Error::InvalidSpeed => f.write_str("transfer speed must be greater than zero"),
        }
    }
}
