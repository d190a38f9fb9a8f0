//! VSWR readings for automated mode.
//!
//! No VSWR sensor is wired yet, so automated mode samples a [`VswrSimulator`]. A real sensor
//! plugs in by implementing [`VswrSource`].

use crate::{Result, VSWR_MODULUS, VSWR_STEP};

/// Something that can be sampled for a VSWR reading.
pub trait VswrSource {
    /// Take one reading.
    ///
    /// # Errors
    /// Returns an error if the sensor cannot be read.
    fn sample(&mut self) -> Result<i32>;
}

impl<T: VswrSource + ?Sized> VswrSource for &mut T {
    fn sample(&mut self) -> Result<i32> {
        (**self).sample()
    }
}

/// Stand-in VSWR signal: a counter that advances by 3 on every sample and wraps at 100.
///
/// ```
/// use impedance_matcher::{VswrSimulator, VswrSource};
///
/// let mut vswr = VswrSimulator::new();
/// assert_eq!(vswr.sample().unwrap(), 3);
/// assert_eq!(vswr.sample().unwrap(), 6);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct VswrSimulator {
    value: i32,
}

impl VswrSimulator {
    /// Start at 0, as after power-on.
    #[must_use]
    pub const fn new() -> Self {
        Self { value: 0 }
    }

    /// The most recently produced value (0 before the first sample).
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Advance the counter and return the new value.
    pub const fn advance(&mut self) -> i32 {
        self.value = self.value.wrapping_add(VSWR_STEP).rem_euclid(VSWR_MODULUS);
        self.value
    }
}

impl VswrSource for VswrSimulator {
    fn sample(&mut self) -> Result<i32> {
        Ok(self.advance())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::integer_division_remainder_used,
        reason = "Reference formula"
    )]
    fn value_after_k_samples_is_3k_mod_100() {
        let mut vswr = VswrSimulator::new();
        for samples in 1..=250 {
            assert_eq!(vswr.advance(), (3 * samples) % 100, "samples={samples}");
        }
    }

    #[test]
    fn wraps_after_34_samples() {
        let mut vswr = VswrSimulator::new();
        for _ in 0..34 {
            vswr.advance();
        }
        assert_eq!(vswr.value(), 2);
    }

    #[test]
    fn starts_at_zero() {
        assert_eq!(VswrSimulator::new().value(), 0);
        assert_eq!(VswrSimulator::default(), VswrSimulator::new());
    }
}
