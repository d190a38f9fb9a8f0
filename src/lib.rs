//! Two-servo controller for the automatic impedance matcher.
//!
//! Each cycle the [`Controller`] reads the mode switch, then either follows the
//! two dials (manual) or the VSWR source (automated), positions the tx and ant
//! servos, and writes one diagnostic line.
#![cfg_attr(not(test), no_std)]
#![allow(clippy::future_not_send, reason = "Single-threaded")]

mod analog;
mod controller;
mod error;
#[cfg(feature = "esp32")]
mod hardware;
mod log;
mod mode;
mod never;
mod scale;
mod serial_console;
mod servo;
mod servo_pair;
mod shared_constants;
mod switch;
mod vswr;

// Re-export commonly used items
pub use analog::AnalogInput;
pub use controller::{Controller, CycleReport};
pub use error::{Error, Result};
#[cfg(feature = "esp32")]
pub use hardware::{AdcDial, AntDial, Hardware, LedcPwm, TxDial};
pub use mode::Mode;
pub use never::Never;
pub use scale::{map_clamped, scale_to_degrees};
pub use serial_console::SerialConsole;
pub use servo::Servo;
pub use servo_pair::ServoPair;
pub use shared_constants::{
    ANGLE_CENTER, ANGLE_MAX, ANGLE_MIN, ANT_DIAL_PIN, ANT_SERVO_PIN, CYCLE_PERIOD, CYCLE_PERIOD_MS,
    DIAL_MAX, DIAL_MIN, MODE_SWITCH_PIN, SERIAL_BAUD, SERVO_FRAME_HZ, SERVO_MAX_US, SERVO_MIN_US,
    SERVO_PERIOD_US, TX_DIAL_PIN, TX_SERVO_PIN, VSWR_MODULUS, VSWR_STEP, parse_millis,
};
pub use switch::ModeSwitch;
pub use vswr::{VswrSimulator, VswrSource};
