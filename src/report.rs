//! CSV sweep reporter
//!
//! Output:
//! ```text
//! mv,ref_float,q_fixed_point_float,q_fixed_point_int
//! 0,-154.375000,-154.375000,-128
//! 1,-154.362228,-154.362228,-128
//! ...
//! ```

use core::fmt::{self, Write};

use heapless::String;
use log::trace;

use crate::{
    converter::{QTemp, TransferFunction},
    error::{Error, Result},
    millivolts::Millivolts,
    stats::ErrorStats,
    sweep::Sweep,
};

pub const HEADER: &str = "mv,ref_float,q_fixed_point_float,q_fixed_point_int\n";

/// Fits any row whose reference column stays within ±10^9
pub const ROW_CAPACITY: usize = 64;

/// One sample converted through every representation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Row {
    pub mv: Millivolts,
    pub reference: f32,
    pub fixed: QTemp,
    pub narrow: i8,
}

impl Row {
    pub fn sample<T: TransferFunction + ?Sized>(func: &T, mv: Millivolts) -> Self {
        Self {
            mv,
            reference: func.reference(f32::from(mv)),
            fixed: func.fixed(mv),
            narrow: func.narrow(mv),
        }
    }

    /// The Q temperature as a float, as plotted against the reference
    #[inline]
    pub fn fixed_f32(&self) -> f32 {
        self.fixed.to_num()
    }

    /// Render the row, newline included, into a stack buffer
    pub fn render(&self) -> Result<String<ROW_CAPACITY>> {
        let mut line = String::new();
        writeln!(line, "{}", self).map_err(|_| Error::RowOverflow)?;
        Ok(line)
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{:.6},{:.6},{}",
            self.mv,
            self.reference,
            self.fixed_f32(),
            self.narrow
        )
    }
}

/// Writes sweeps of a transfer function as CSV
pub struct Reporter<'a, T: ?Sized, W> {
    func: &'a T,
    out: W,
}

impl<'a, T: TransferFunction + ?Sized, W: Write> Reporter<'a, T, W> {
    pub fn new(func: &'a T, out: W) -> Self {
        Self { func, out }
    }

    pub fn write_header(&mut self) -> Result<()> {
        self.out.write_str(HEADER)?;
        Ok(())
    }

    /// Samples `mv` and writes the row as a whole.
    pub fn write_row(&mut self, mv: Millivolts) -> Result<Row> {
        let row = Row::sample(self.func, mv);
        let line = row.render()?;

        trace!("row: {}", line.trim_end());

        self.out.write_str(&line)?;
        Ok(row)
    }

    /// Writes the header and one row per sample of `sweep`, in increasing millivolt order.
    ///
    /// Returns the error statistics of the written rows.
    pub fn run(&mut self, sweep: &Sweep) -> Result<ErrorStats> {
        let mut stats = ErrorStats::new();

        self.write_header()?;
        for mv in sweep {
            let row = self.write_row(mv)?;
            stats.record(row.mv, row.reference, row.fixed_f32());
        }

        Ok(stats)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::Quadratic;

    fn mv(v: i32) -> Millivolts {
        Millivolts::new(v).unwrap()
    }

    /// Sink that fails after accepting `remaining` writes
    struct Failing {
        remaining: usize,
    }

    impl Write for Failing {
        fn write_str(&mut self, _: &str) -> fmt::Result {
            if self.remaining == 0 {
                return Err(fmt::Error);
            }
            self.remaining -= 1;
            Ok(())
        }
    }

    #[test]
    fn renders_rows() {
        let q = Quadratic::default();
        assert_eq!(
            Row::sample(&q, mv(0)).render().unwrap(),
            "0,-154.375000,-154.375000,-128\n"
        );
        assert_eq!(
            Row::sample(&q, mv(2000)).render().unwrap(),
            "2000,-34.994659,-34.953041,-35\n"
        );
        assert_eq!(
            Row::sample(&q, mv(5000)).render().unwrap(),
            "5000,496.183289,496.443359,127\n"
        );
    }

    #[test]
    fn oversized_row_overflows() {
        let row = Row {
            mv: mv(5000),
            reference: f32::MIN,
            fixed: QTemp::MIN,
            narrow: i8::MIN,
        };
        assert_eq!(row.render(), Err(Error::RowOverflow));
    }

    #[test]
    fn writes_header_then_rows() {
        let q = Quadratic::default();
        let sweep = Sweep::new(1000, 1020, 10).unwrap();
        let mut reporter = Reporter::new(&q, std::string::String::new());
        let stats = reporter.run(&sweep).unwrap();
        let out = reporter.into_inner();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], HEADER.trim_end());
        assert!(lines[1].starts_with("1000,-118.158661,-118.148254,-118"));
        assert!(lines[2].starts_with("1010,"));
        assert!(lines[3].starts_with("1020,"));
        assert_eq!(stats.count(), 3);
    }

    #[test]
    fn propagates_write_errors() {
        let q = Quadratic::default();
        let mut reporter = Reporter::new(&q, Failing { remaining: 2 });
        assert_eq!(reporter.run(&Sweep::COARSE), Err(Error::Write));
    }
}
