//! The matcher's two actuators: the tx-side and the antenna-side servo.

use embedded_hal::pwm::SetDutyCycle;

use crate::{Result, Servo};

/// The tx and ant servos, addressed by role.
///
/// # Examples
/// ```ignore
/// let tx = Servo::new(hardware.tx_servo, SERVO_MIN_US, SERVO_MAX_US)?;
/// let ant = Servo::new(hardware.ant_servo, SERVO_MIN_US, SERVO_MAX_US)?;
/// let mut servos = ServoPair::new(tx, ant);
///
/// servos.set_degrees_tx(45)?;
/// servos.set_degrees_ant(90)?;
/// ```
pub struct ServoPair<Tx, Ant> {
    tx: Servo<Tx>,
    ant: Servo<Ant>,
}

impl<Tx: SetDutyCycle, Ant: SetDutyCycle> ServoPair<Tx, Ant> {
    #[must_use]
    pub const fn new(tx: Servo<Tx>, ant: Servo<Ant>) -> Self {
        Self { tx, ant }
    }

    /// Set tx servo position in degrees 0..=180.
    ///
    /// # Errors
    /// Returns [`Error::Pwm`](crate::Error::Pwm) if the tx channel rejects the write.
    pub fn set_degrees_tx(&mut self, deg: i32) -> Result<()> {
        self.tx.set_degrees(deg)
    }

    /// Set ant servo position in degrees 0..=180.
    ///
    /// # Errors
    /// Returns [`Error::Pwm`](crate::Error::Pwm) if the ant channel rejects the write.
    pub fn set_degrees_ant(&mut self, deg: i32) -> Result<()> {
        self.ant.set_degrees(deg)
    }

    /// Drive both servos to 0°, the reference position for mounting the matching elements.
    ///
    /// # Errors
    /// Returns [`Error::Pwm`](crate::Error::Pwm) if either channel rejects the write.
    pub fn home(&mut self) -> Result<()> {
        self.tx.set_degrees(0)?;
        self.ant.set_degrees(0)
    }

    /// Center both servos.
    ///
    /// # Errors
    /// Returns [`Error::Pwm`](crate::Error::Pwm) if either channel rejects the write.
    pub fn center(&mut self) -> Result<()> {
        self.tx.center()?;
        self.ant.center()
    }

    /// Stop sending control signals to both servos.
    ///
    /// # Errors
    /// Returns [`Error::Pwm`](crate::Error::Pwm) if either channel rejects the write.
    pub fn disable(&mut self) -> Result<()> {
        self.tx.disable()?;
        self.ant.disable()
    }

    /// Resume sending control signals to both servos.
    ///
    /// # Errors
    /// Returns [`Error::Pwm`](crate::Error::Pwm) if either channel rejects the write.
    pub fn enable(&mut self) -> Result<()> {
        self.tx.enable()?;
        self.ant.enable()
    }

    /// Last commanded `(tx, ant)` angles.
    #[must_use]
    pub const fn degrees(&self) -> (u8, u8) {
        (self.tx.degrees(), self.ant.degrees())
    }

    #[must_use]
    pub const fn tx(&self) -> &Servo<Tx> {
        &self.tx
    }

    #[must_use]
    pub const fn ant(&self) -> &Servo<Ant> {
        &self.ant
    }
}
