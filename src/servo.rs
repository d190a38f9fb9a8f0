//! Hobby servo (SG90-class) driven by pulse width over any [`SetDutyCycle`] PWM channel.
//! - 50 Hz frame (20 ms); the PWM channel must already run at that frequency
//! - Angle 0..=180 maps linearly onto `min_us..=max_us`
//! - Remembers the last pulse so `enable` can resume it

use embedded_hal::pwm::{Error as _, SetDutyCycle};

use crate::log::{debug, info};
use crate::{ANGLE_CENTER, ANGLE_MAX, ANGLE_MIN, Error, Result, SERVO_PERIOD_US, map_clamped};

pub struct Servo<P> {
    pwm: P,
    min_us: u16,
    max_us: u16,
    pulse_us: u16,
    degrees: u8,
    enabled: bool,
}

impl<P: SetDutyCycle> Servo<P> {
    /// Wrap a 50 Hz PWM channel and center the servo.
    /// e.g.: `Servo::new(pwm, 500, 2500)`
    ///
    /// # Errors
    /// Returns [`Error::Pwm`] if the channel rejects the centering pulse.
    pub fn new(pwm: P, min_us: u16, max_us: u16) -> Result<Self> {
        info!(
            "servo max_duty={} pulse={}..{}µs",
            pwm.max_duty_cycle(),
            min_us,
            max_us
        );
        let mut servo = Self {
            pwm,
            min_us,
            max_us,
            pulse_us: 0,
            degrees: 0,
            enabled: true,
        };
        servo.center()?;
        Ok(servo)
    }

    /// Center (~midpoint of min/max).
    ///
    /// # Errors
    /// Returns [`Error::Pwm`] if the channel rejects the pulse.
    pub fn center(&mut self) -> Result<()> {
        self.set_degrees(ANGLE_CENTER)
    }

    /// Set position in degrees 0..=180 (clamped) mapped into `min_us..=max_us`.
    ///
    /// # Errors
    /// Returns [`Error::Pwm`] if the channel rejects the pulse.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "Angle is clamped to 0..=180 and the pulse lies between min_us and max_us"
    )]
    pub fn set_degrees(&mut self, deg: i32) -> Result<()> {
        let degrees = deg.clamp(ANGLE_MIN, ANGLE_MAX);
        let us = map_clamped(
            degrees,
            ANGLE_MIN,
            ANGLE_MAX,
            i32::from(self.min_us),
            i32::from(self.max_us),
        );
        debug!("Servo set_degrees({}) -> {}µs", deg, us);
        self.degrees = degrees as u8;
        self.set_pulse_us(us as u16)
    }

    /// Set raw pulse width in microseconds (clamped to frame).
    ///
    /// # Errors
    /// Returns [`Error::Pwm`] if the channel rejects the duty cycle.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "Duty lies in 0..=max_duty_cycle"
    )]
    pub fn set_pulse_us(&mut self, us: u16) -> Result<()> {
        self.pulse_us = us.min(SERVO_PERIOD_US.saturating_sub(1));
        if !self.enabled {
            return Ok(());
        }
        let duty = map_clamped(
            i32::from(self.pulse_us),
            0,
            i32::from(SERVO_PERIOD_US),
            0,
            i32::from(self.pwm.max_duty_cycle()),
        );
        self.pwm
            .set_duty_cycle(duty as u16)
            .map_err(|err| Error::Pwm(err.kind()))
    }

    /// Stop the pulse train (most servos relax).
    ///
    /// # Errors
    /// Returns [`Error::Pwm`] if the channel cannot be switched off.
    pub fn disable(&mut self) -> Result<()> {
        self.enabled = false;
        self.pwm
            .set_duty_cycle_fully_off()
            .map_err(|err| Error::Pwm(err.kind()))
    }

    /// Resume output at the last commanded pulse.
    ///
    /// # Errors
    /// Returns [`Error::Pwm`] if the channel rejects the pulse.
    pub fn enable(&mut self) -> Result<()> {
        self.enabled = true;
        self.set_pulse_us(self.pulse_us)
    }

    /// Last commanded angle.
    #[must_use]
    pub const fn degrees(&self) -> u8 {
        self.degrees
    }

    /// Last commanded pulse width in microseconds.
    #[must_use]
    pub const fn pulse_us(&self) -> u16 {
        self.pulse_us
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }
}
