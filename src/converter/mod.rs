//! Voltage to temperature conversion

pub mod quadratic;

use fixed::types::{I41F23, I9F23};
use static_assertions::{assert_eq_size, const_assert};

pub use self::quadratic::Quadratic;
use crate::{error::Result, millivolts::Millivolts};

/// I41F23 is a fixed point number with 23 fractional bits and 41 integer bits (sign included).
/// This gives us a precision of 2^-23 degrees Celsius & a range of (-2^40, 2^40), enough that
/// no polynomial with [`QCoef`] coefficients overflows anywhere in the millivolt domain.
pub type QTemp = I41F23;

/// I9F23 holds polynomial coefficients: same fractional bits as [`QTemp`], range [-256, 256).
pub type QCoef = I9F23;

/// Number of fractional bits in [`QTemp`]
pub const Q_FRAC: u32 = QTemp::FRAC_NBITS;
/// Number of integer bits in [`QTemp`], sign excluded
pub const Q_INT: u32 = QTemp::INT_NBITS - 1;

assert_eq_size!(QTemp, i64);
assert_eq_size!(QCoef, i32);
const_assert!(Q_FRAC == QCoef::FRAC_NBITS);

/// Largest expected `|fixed - reference|` in degrees Celsius over the whole millivolt domain
pub const TOLERANCE: f32 = 0.3;

/// Lower edge of the window in which the narrow conversion tracks the input
pub const NARROW_LOW_MV: i32 = 814;
/// Upper edge of the window in which the narrow conversion tracks the input
pub const NARROW_HIGH_MV: i32 = 3200;

const_assert!(NARROW_LOW_MV < NARROW_HIGH_MV);
const_assert!(NARROW_LOW_MV >= crate::millivolts::MV_MIN);
const_assert!(NARROW_HIGH_MV <= crate::millivolts::MV_MAX);

const HALF: QTemp = QTemp::from_bits(1 << (Q_FRAC - 1));

/// A monotonic mapping from millivolts to degrees Celsius, available both in Q format and as
/// a floating point reference.
pub trait TransferFunction {
    /// Temperature in Q format. Total over the millivolt domain.
    fn fixed(&self, mv: Millivolts) -> QTemp;

    /// Floating point reference temperature. Not range checked.
    fn reference(&self, mv: f32) -> f32;

    /// Floating point reference temperature for a finite, in-domain input
    fn checked_reference(&self, mv: f32) -> Result<f32> {
        Millivolts::check_f32(mv).map(|mv| self.reference(mv))
    }

    /// Whole degrees Celsius as an `i8`.
    ///
    /// The input is clamped to `NARROW_LOW_MV..=NARROW_HIGH_MV`, the Q result is rounded to
    /// nearest (ties toward +∞) and saturated to the `i8` range.
    fn narrow(&self, mv: Millivolts) -> i8 {
        let low = Millivolts::new_unchecked(NARROW_LOW_MV);
        let high = Millivolts::new_unchecked(NARROW_HIGH_MV);
        round_to_i8(self.fixed(mv.clamp(low, high)))
    }
}

/// Round a Q temperature to the nearest whole degree, ties toward +∞, saturating to `i8`.
#[inline]
pub fn round_to_i8(q: QTemp) -> i8 {
    // Integer conversion discards fractional bits, rounding toward -∞
    q.saturating_add(HALF).saturating_to_num::<i8>()
}
