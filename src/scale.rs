//! Clamp-then-linear mapping from raw samples to servo angles.

use crate::{ANGLE_MAX, ANGLE_MIN, DIAL_MAX, DIAL_MIN};

/// Clamp `value` into `in_min..=in_max`, then map it linearly onto `out_min..=out_max`.
///
/// Integer division truncates, so for increasing ranges the result is the floor of the exact
/// mapping. An empty or inverted input range maps every value to `out_min`.
///
/// ```
/// use impedance_matcher::map_clamped;
///
/// assert_eq!(map_clamped(5, 0, 10, 0, 100), 50);
/// assert_eq!(map_clamped(-3, 0, 10, 0, 100), 0);
/// assert_eq!(map_clamped(99, 0, 10, 0, 100), 100);
/// ```
#[must_use]
#[expect(
    clippy::arithmetic_side_effects,
    clippy::integer_division_remainder_used,
    clippy::cast_possible_truncation,
    reason = "i128 holds every intermediate and the quotient lies between out_min and out_max"
)]
pub fn map_clamped(value: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    if in_max <= in_min {
        return out_min;
    }
    let offset = i128::from(value.clamp(in_min, in_max)) - i128::from(in_min);
    let width = i128::from(in_max) - i128::from(in_min);
    let span = i128::from(out_max) - i128::from(out_min);
    (offset * span / width + i128::from(out_min)) as i32
}

/// Map a raw dial (or VSWR) sample onto the servo angle domain.
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "Mapped into 0..=180"
)]
pub fn scale_to_degrees(raw: i32) -> u8 {
    map_clamped(raw, DIAL_MIN, DIAL_MAX, ANGLE_MIN, ANGLE_MAX) as u8
}
