use embedded_hal::digital::PinState;

// Instead of driving the controller from the raw switch level, we define an `enum` naming what
// each level selects. The compiler reduces it to the same single bit.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Servo angles follow the VSWR source.
    Automated,
    /// Servo angles follow the two dials.
    #[default]
    Manual,
}

impl Mode {
    /// Map the mode switch level to a mode.
    ///
    /// The switch input is pulled up, so an open switch reads `High` (manual) and a closed
    /// switch pulls it `Low` (automated).
    #[must_use]
    pub const fn from_level(level: PinState) -> Self {
        match level {
            PinState::High => Self::Manual,
            PinState::Low => Self::Automated,
        }
    }
}

impl From<PinState> for Mode {
    fn from(level: PinState) -> Self {
        Self::from_level(level)
    }
}
