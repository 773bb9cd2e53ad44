//! Fixed-point error statistics over a sweep

use num_traits::Float;

use crate::millivolts::Millivolts;

/// Running statistics of `reference - fixed` in degrees Celsius.
///
/// Accumulates without allocating, one sample at a time.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ErrorStats {
    count: u32,
    sum_sq: f64,
    /// Welford running mean of the signed difference
    mean: f64,
    /// Welford sum of squared deviations from the mean
    m2: f64,
    worst: Option<(Millivolts, f64)>,
}

impl ErrorStats {
    pub const fn new() -> Self {
        Self {
            count: 0,
            sum_sq: 0.0,
            mean: 0.0,
            m2: 0.0,
            worst: None,
        }
    }

    pub fn record(&mut self, mv: Millivolts, reference: f32, fixed: f32) {
        let diff = f64::from(reference) - f64::from(fixed);

        self.count += 1;
        self.sum_sq += diff * diff;

        let delta = diff - self.mean;
        self.mean += delta / f64::from(self.count);
        self.m2 += delta * (diff - self.mean);

        let abs = Float::abs(diff);
        match self.worst {
            Some((_, worst)) if worst >= abs => {}
            _ => self.worst = Some((mv, abs)),
        }
    }

    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Mean squared error
    pub fn mse(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum_sq / f64::from(self.count))
    }

    /// Largest absolute error and the first input where it occurred
    pub fn worst(&self) -> Option<(Millivolts, f64)> {
        self.worst
    }

    /// Mean of `reference - fixed`
    pub fn mean_difference(&self) -> Option<f64> {
        (self.count > 0).then_some(self.mean)
    }

    /// Sample standard deviation of `reference - fixed`
    pub fn std_dev(&self) -> Option<f64> {
        (self.count > 1).then(|| Float::sqrt(self.m2 / f64::from(self.count - 1)))
    }

    /// Paired t-statistic testing whether the mean difference is zero.
    ///
    /// `None` with fewer than two samples or when every difference is identical.
    pub fn t_statistic(&self) -> Option<f64> {
        let sd = self.std_dev()?;
        if sd == 0.0 {
            return None;
        }
        Some(self.mean / (sd / Float::sqrt(f64::from(self.count))))
    }
}
