use crate::Result;

/// A single analog input channel, such as a potentiometer on an ADC pin.
///
/// Implementations return samples already scaled to the calibrated 10-bit range
/// ([`DIAL_MIN`](crate::DIAL_MIN)..=[`DIAL_MAX`](crate::DIAL_MAX)). Out-of-range values are
/// allowed; consumers clamp before use.
pub trait AnalogInput {
    /// Take one sample.
    ///
    /// # Errors
    /// Returns [`Error::AnalogRead`](crate::Error::AnalogRead) if the converter fails.
    fn read_raw(&mut self) -> Result<i32>;
}

impl<T: AnalogInput + ?Sized> AnalogInput for &mut T {
    fn read_raw(&mut self) -> Result<i32> {
        (**self).read_raw()
    }
}
