//! Ordered enumeration of millivolt samples

use core::iter::StepBy;
use core::ops::RangeInclusive;

use crate::{
    error::{Error, Result},
    millivolts::Millivolts,
};

/// Inclusive millivolt range walked with a fixed positive step.
///
/// When `end - start` is not a multiple of `step` the last sample falls short of `end`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sweep {
    start: Millivolts,
    end: Millivolts,
    step: i32,
}

impl Sweep {
    /// Full range, every millivolt
    pub const FINE: Self = Self {
        start: Millivolts::MIN,
        end: Millivolts::MAX,
        step: 1,
    };

    /// 1 V to 3 V in 10 mV steps
    pub const COARSE: Self = Self {
        start: Millivolts::new_unchecked(1000),
        end: Millivolts::new_unchecked(3000),
        step: 10,
    };

    pub fn new(start: i32, end: i32, step: i32) -> Result<Self> {
        let start = Millivolts::new(start).map_err(|_| Error::InvalidSweep)?;
        let end = Millivolts::new(end).map_err(|_| Error::InvalidSweep)?;

        if step <= 0 || start > end {
            return Err(Error::InvalidSweep);
        }

        Ok(Self { start, end, step })
    }

    #[inline]
    pub fn start(&self) -> Millivolts {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Millivolts {
        self.end
    }

    #[inline]
    pub fn step(&self) -> i32 {
        self.step
    }

    /// Number of samples, `(end - start) / step + 1`
    pub fn len(&self) -> usize {
        // Non-negative and bounded by the domain width, so the cast is lossless
        ((self.end.get() - self.start.get()) / self.step + 1) as usize
    }

    /// A sweep always holds at least its start sample
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> Iter {
        Iter {
            inner: (self.start.get()..=self.end.get()).step_by(self.step as usize),
        }
    }
}

impl IntoIterator for Sweep {
    type Item = Millivolts;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl IntoIterator for &Sweep {
    type Item = Millivolts;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the samples of a [`Sweep`], strictly increasing.
#[derive(Debug, Clone)]
pub struct Iter {
    inner: StepBy<RangeInclusive<i32>>,
}

impl Iterator for Iter {
    type Item = Millivolts;

    fn next(&mut self) -> Option<Millivolts> {
        // Every value lies between two validated endpoints
        self.inner.next().map(Millivolts::new_unchecked)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter {}
