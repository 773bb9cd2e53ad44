//! Validated millivolt input samples

use core::fmt;

use static_assertions::{assert_eq_size, const_assert};

use crate::error::{Error, Result};

/// Lowest supported input, in millivolts
pub const MV_MIN: i32 = 0;
/// Highest supported input, in millivolts
pub const MV_MAX: i32 = 5000;

const_assert!(MV_MIN < MV_MAX);

/// An input voltage in millivolts, guaranteed to lie in `MV_MIN..=MV_MAX`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Millivolts(i32);

assert_eq_size!(Millivolts, i32);

impl Millivolts {
    pub const MIN: Self = Self(MV_MIN);
    pub const MAX: Self = Self(MV_MAX);

    #[inline]
    pub const fn new(mv: i32) -> Result<Self> {
        if mv < MV_MIN || mv > MV_MAX {
            Err(Error::OutOfRange(mv))
        } else {
            Ok(Self(mv))
        }
    }

    /// Skips the range check. Only for values already known to be in range.
    #[inline]
    pub(crate) const fn new_unchecked(mv: i32) -> Self {
        Self(mv)
    }

    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Checks a floating point voltage against the domain
    pub fn check_f32(mv: f32) -> Result<f32> {
        if !mv.is_finite() {
            return Err(Error::NotFinite);
        }
        if mv < MV_MIN as f32 || mv > MV_MAX as f32 {
            // Saturating float-to-int cast; only used for the error payload
            return Err(Error::OutOfRange(mv as i32));
        }
        Ok(mv)
    }
}

impl TryFrom<i32> for Millivolts {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Millivolts> for i32 {
    fn from(mv: Millivolts) -> Self {
        mv.0
    }
}

impl From<Millivolts> for f32 {
    fn from(mv: Millivolts) -> Self {
        // Exact: the domain is far below 2^24
        mv.0 as f32
    }
}

impl fmt::Display for Millivolts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_domain_bounds() {
        assert_eq!(Millivolts::new(0).map(Millivolts::get), Ok(0));
        assert_eq!(Millivolts::new(5000).map(Millivolts::get), Ok(5000));
        assert_eq!(Millivolts::try_from(2500), Ok(Millivolts(2500)));
    }

    #[test]
    fn rejects_outside_domain() {
        assert_eq!(Millivolts::new(-1), Err(Error::OutOfRange(-1)));
        assert_eq!(Millivolts::new(5001), Err(Error::OutOfRange(5001)));
    }

    #[test]
    fn check_f32_rejects_non_finite() {
        assert_eq!(Millivolts::check_f32(f32::NAN), Err(Error::NotFinite));
        assert_eq!(Millivolts::check_f32(f32::INFINITY), Err(Error::NotFinite));
        assert_eq!(Millivolts::check_f32(-10.0), Err(Error::OutOfRange(-10)));
        assert_eq!(Millivolts::check_f32(1e9), Err(Error::OutOfRange(1_000_000_000)));
        assert_eq!(Millivolts::check_f32(1234.5), Ok(1234.5));
    }
}
