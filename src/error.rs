/// Possible errors from the SHT1x driver.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq)]
pub enum ShtError<E> {
    /// The sensor did not acknowledge a command.
    ///
    /// Either the data line was not pulled low on the acknowledge clock pulse,
    /// or it was not released afterwards.
    NoAcknowledge,
    /// Timed out waiting for the sensor to signal that a measurement is ready.
    Timeout,
    /// Error from the GPIO pin (input/output).
    PinError(E),
}

impl<E> From<E> for ShtError<E> {
    fn from(value: E) -> Self {
        Self::PinError(value)
    }
}

/// Collapses a failed reading into `f32::NAN`.
///
/// For callers that expect a bare float and check it with `is_nan()`.
pub trait OrNan {
    /// Returns the reading, or `f32::NAN` if the read failed.
    fn or_nan(self) -> f32;
}

impl<E> OrNan for Result<f32, E> {
    fn or_nan(self) -> f32 {
        self.unwrap_or(f32::NAN)
    }
}
