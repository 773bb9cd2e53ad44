//! Fixed-point voltage-to-temperature conversion.
//!
//! A sensor voltage in millivolts maps to degrees Celsius through a quadratic. The mapping is
//! available three ways:
//!
//! - Q40.23 fixed point ([`QTemp`], 23 fractional bits in an `i64`) for targets without an FPU,
//! - whole degrees as a saturated `i8` over a limited calibration window,
//! - a floating point reference used to judge the other two.
//!
//! [`report::Reporter`] sweeps an input range and writes all three side by side as CSV.
//!
//! ```
//! use qtemp::{Millivolts, Quadratic, TransferFunction};
//!
//! let sensor = Quadratic::default();
//! let mv = Millivolts::new(2000)?;
//!
//! assert_eq!(sensor.narrow(mv), -35);
//! assert!((sensor.fixed(mv).to_num::<f32>() - sensor.reference(2000.0)).abs() < 0.25);
//! # Ok::<(), qtemp::Error>(())
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]

pub mod converter;
mod error;
pub mod millivolts;
pub mod report;
pub mod stats;
pub mod sweep;

pub use self::{
    converter::{QTemp, Quadratic, TransferFunction, Q_FRAC, Q_INT},
    error::{Error, Result},
    millivolts::Millivolts,
    sweep::Sweep,
};
