use embassy_time::Duration;

// Calibrated dial range: 10-bit analog samples.
pub const DIAL_MIN: i32 = 0;
pub const DIAL_MAX: i32 = 1023;

// Servo angle domain in degrees.
pub const ANGLE_MIN: i32 = 0;
pub const ANGLE_CENTER: i32 = 90;
pub const ANGLE_MAX: i32 = 180;

// Placeholder VSWR signal: advances by `VSWR_STEP` per sample, wrapping at `VSWR_MODULUS`.
pub const VSWR_STEP: i32 = 3;
pub const VSWR_MODULUS: i32 = 100;

/// Pause after every control cycle. Override at build time with `CYCLE_PERIOD_MS`.
pub const CYCLE_PERIOD_MS: u32 = parse_millis(env!("CYCLE_PERIOD_MS"));
pub const CYCLE_PERIOD: Duration = Duration::from_millis(CYCLE_PERIOD_MS as u64);

pub const SERIAL_BAUD: u32 = 9600;

pub const SERVO_MIN_US: u16 = 500;
pub const SERVO_MAX_US: u16 = 2500;
pub const SERVO_PERIOD_US: u16 = 20_000; // 20 ms
pub const SERVO_FRAME_HZ: u32 = 50;

// ESP32 GPIO wiring. Must match the physical board.
pub const TX_DIAL_PIN: u8 = 39;
pub const ANT_DIAL_PIN: u8 = 38;
pub const MODE_SWITCH_PIN: u8 = 32;
pub const TX_SERVO_PIN: u8 = 0;
pub const ANT_SERVO_PIN: u8 = 23;

/// Parse a decimal millisecond count at compile time.
///
/// ```
/// # use impedance_matcher::parse_millis;
/// const PERIOD: u32 = parse_millis("250");
/// assert_eq!(PERIOD, 250);
/// ```
///
/// # Panics
/// Panics if `text` is empty, holds anything but ASCII digits, or exceeds `u32::MAX`.
#[must_use]
pub const fn parse_millis(text: &str) -> u32 {
    let mut digits = text.as_bytes();
    assert!(!digits.is_empty(), "empty millisecond value");
    let mut value: u32 = 0;
    while let [digit, rest @ ..] = digits {
        assert!(
            digit.is_ascii_digit(),
            "millisecond value must be decimal digits"
        );
        let Some(shifted) = value.checked_mul(10) else {
            panic!("millisecond value overflows u32");
        };
        let Some(next) = shifted.checked_add(digit.wrapping_sub(b'0') as u32) else {
            panic!("millisecond value overflows u32");
        };
        value = next;
        digits = rest;
    }
    value
}
