use derive_more::derive::{Display, Error};
use embedded_hal::{digital, pwm};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
#[derive(Debug, Display, Error)]
pub enum Error {
    // `embedded_hal`'s `ErrorKind`s (and the esp-hal driver errors below) do not implement
    // `core::error::Error`, so `#[error(not(source))]` keeps `derive_more` from treating them
    // as a source.
    #[display("Mode switch read failed: {_0:?}")]
    DigitalRead(#[error(not(source))] digital::ErrorKind),

    #[display("Dial read failed")]
    AnalogRead,

    #[display("Servo PWM write failed: {_0:?}")]
    Pwm(#[error(not(source))] pwm::ErrorKind),

    #[cfg(feature = "esp32")]
    #[display("Servo timer configuration failed: {_0:?}")]
    ServoTimer(#[error(not(source))] esp_hal::ledc::timer::Error),

    #[cfg(feature = "esp32")]
    #[display("Servo channel configuration failed: {_0:?}")]
    ServoChannel(#[error(not(source))] esp_hal::ledc::channel::Error),

    #[cfg(feature = "esp32")]
    #[display("Serial console configuration failed: {_0:?}")]
    SerialConfig(#[error(not(source))] esp_hal::uart::ConfigError),
}

#[cfg(feature = "esp32")]
impl From<esp_hal::ledc::timer::Error> for Error {
    fn from(err: esp_hal::ledc::timer::Error) -> Self {
        Self::ServoTimer(err)
    }
}

#[cfg(feature = "esp32")]
impl From<esp_hal::ledc::channel::Error> for Error {
    fn from(err: esp_hal::ledc::channel::Error) -> Self {
        Self::ServoChannel(err)
    }
}

#[cfg(feature = "esp32")]
impl From<esp_hal::uart::ConfigError> for Error {
    fn from(err: esp_hal::uart::ConfigError) -> Self {
        Self::SerialConfig(err)
    }
}
