//! Quadratic transfer function `T = A·mv² + B·mv + C`

use crate::{
    converter::{QCoef, QTemp, TransferFunction},
    error::{Error, Result},
    millivolts::Millivolts,
};

/// Default second order coefficient, °C/mV²
pub const A: f64 = 2.347383e-5;
/// Default first order coefficient, °C/mV
pub const B: f64 = 1.274251e-2;
/// Default offset, °C
pub const C: f64 = -154.375;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quadratic {
    a: f64,
    b: f64,
    c: f64,
    a_q: QCoef,
    b_q: QCoef,
    c_q: QCoef,
}

impl Quadratic {
    /// The sensor's calibrated polynomial
    pub const DEFAULT: Self = Self {
        a: A,
        b: B,
        c: C,
        a_q: QCoef::lit("0.00002347383"),
        b_q: QCoef::lit("0.01274251"),
        c_q: QCoef::lit("-154.375"),
    };

    /// Builds a polynomial from float coefficients.
    ///
    /// Each coefficient is rounded to the nearest Q value, ties to even, and must fit [`QCoef`].
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        Ok(Self {
            a,
            b,
            c,
            a_q: to_q(a)?,
            b_q: to_q(b)?,
            c_q: to_q(c)?,
        })
    }

    /// Float coefficients `(A, B, C)`
    pub fn coefficients(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    /// Q format coefficients `(A, B, C)`
    pub fn q_coefficients(&self) -> (QCoef, QCoef, QCoef) {
        (self.a_q, self.b_q, self.c_q)
    }
}

impl Default for Quadratic {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TransferFunction for Quadratic {
    fn fixed(&self, mv: Millivolts) -> QTemp {
        let x = i64::from(mv.get());

        // Coefficient bits are below 2^31 and x is at most 5000, so every term stays below
        // 2^56. The integer multiplier keeps the result in the same Q format.
        widen(self.a_q) * x * x + widen(self.b_q) * x + widen(self.c_q)
    }

    fn reference(&self, mv: f32) -> f32 {
        let mv = f64::from(mv);
        (self.a * mv * mv + self.b * mv + self.c) as f32
    }
}

#[inline]
fn widen(q: QCoef) -> QTemp {
    QTemp::from_bits(i64::from(q.to_bits()))
}

fn to_q(value: f64) -> Result<QCoef> {
    if !value.is_finite() {
        return Err(Error::Coefficient);
    }
    QCoef::checked_from_num(value).ok_or(Error::Coefficient)
}
