use embedded_hal::digital::{Error as _, InputPin, PinState};

use crate::{Error, Mode, Result};

/// The mode-select switch: a pull-up input that reads `High` while open.
pub struct ModeSwitch<P> {
    inner: P,
}

impl<P: InputPin> ModeSwitch<P> {
    #[must_use]
    pub const fn new(switch: P) -> Self {
        Self { inner: switch }
    }

    /// Sample the current switch level.
    ///
    /// # Errors
    /// Returns [`Error::DigitalRead`] if the pin cannot be read.
    pub fn level(&mut self) -> Result<PinState> {
        let high = self
            .inner
            .is_high()
            .map_err(|err| Error::DigitalRead(err.kind()))?;
        Ok(PinState::from(high))
    }

    /// Sample the switch and map it to a [`Mode`].
    ///
    /// No debouncing: every call is a fresh read.
    ///
    /// # Errors
    /// Returns [`Error::DigitalRead`] if the pin cannot be read.
    pub fn read_mode(&mut self) -> Result<Mode> {
        self.level().map(Mode::from_level)
    }
}
