#![warn(clippy::pedantic, clippy::nursery)]

use std::{
    fmt,
    io::{self, BufWriter, Write},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use qtemp::{report::Reporter, stats::ErrorStats, Quadratic, Sweep, Q_FRAC, Q_INT};

/// Print a CSV comparison of the fixed-point and floating point temperature conversions.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Sweep preset
    #[arg(long, value_enum, default_value_t = Preset::Fine)]
    sweep: Preset,

    /// First millivolt sample, overriding the preset
    #[arg(long, allow_negative_numbers = true)]
    start: Option<i32>,

    /// Last millivolt sample, overriding the preset
    #[arg(long, allow_negative_numbers = true)]
    end: Option<i32>,

    /// Millivolt step, overriding the preset
    #[arg(long, allow_negative_numbers = true)]
    step: Option<i32>,

    /// Print error statistics to stderr after the CSV
    #[arg(long)]
    summary: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Preset {
    /// 0..=5000 mV, every millivolt
    Fine,
    /// 1000..=3000 mV in 10 mV steps
    Coarse,
}

impl Args {
    fn sweep(&self) -> qtemp::Result<Sweep> {
        let preset = match self.sweep {
            Preset::Fine => Sweep::FINE,
            Preset::Coarse => Sweep::COARSE,
        };

        if self.start.is_none() && self.end.is_none() && self.step.is_none() {
            return Ok(preset);
        }

        Sweep::new(
            self.start.unwrap_or(preset.start().get()),
            self.end.unwrap_or(preset.end().get()),
            self.step.unwrap_or(preset.step()),
        )
    }
}

/// Adapts a byte sink to `fmt::Write`, keeping the I/O error the reporter cannot carry.
struct IoSink<W> {
    inner: W,
    error: Option<io::Error>,
}

impl<W: Write> fmt::Write for IoSink<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match run(&Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let sweep = args.sweep().context("invalid sweep")?;
    let sensor = Quadratic::default();

    info!(
        "sweeping {}..={} mV step {} ({} samples)",
        sweep.start(),
        sweep.end(),
        sweep.step(),
        sweep.len()
    );
    debug!("coefficients: {:?}", sensor.coefficients());
    debug!(
        "Q{}.{} coefficients: {:?}",
        Q_INT,
        Q_FRAC,
        sensor.q_coefficients()
    );

    let stdout = io::stdout().lock();
    let mut reporter = Reporter::new(
        &sensor,
        IoSink {
            inner: BufWriter::new(stdout),
            error: None,
        },
    );

    let result = reporter.run(&sweep);
    let mut sink = reporter.into_inner();
    if let Some(e) = sink.error.take() {
        return Err(e).context("failed to write CSV");
    }
    let stats = result.context("failed to write CSV")?;
    sink.inner.flush().context("failed to flush CSV")?;

    if args.summary {
        print_summary(&sensor, &stats);
    }

    Ok(())
}

fn print_summary(sensor: &Quadratic, stats: &ErrorStats) {
    let (a, b, c) = sensor.coefficients();
    eprintln!("polynomial: {a:e}·mv² + {b:e}·mv + {c} (Q{Q_INT}.{Q_FRAC})");
    eprintln!("samples: {}", stats.count());
    if let Some(mse) = stats.mse() {
        eprintln!("mean squared error: {mse:.6}");
    }
    if let Some(mean) = stats.mean_difference() {
        eprintln!("mean difference: {mean:.6} °C");
    }
    match stats.t_statistic() {
        Some(t) => eprintln!("paired t-statistic: {t:.4}"),
        None => eprintln!("paired t-statistic: undefined"),
    }
    if let Some((mv, worst)) = stats.worst() {
        eprintln!("worst absolute error: {worst:.4} °C at {mv} mV");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("qtemp").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_arguments_is_fine_sweep() {
        let args = parse(&[]);
        assert!(!args.summary);
        assert_eq!(args.sweep().unwrap(), Sweep::FINE);
    }

    #[test]
    fn coarse_preset() {
        assert_eq!(parse(&["--sweep", "coarse"]).sweep().unwrap(), Sweep::COARSE);
    }

    #[test]
    fn overrides_apply_to_preset() {
        let sweep = parse(&["--sweep", "coarse", "--step", "100"]).sweep().unwrap();
        assert_eq!(sweep, Sweep::new(1000, 3000, 100).unwrap());

        let sweep = parse(&["--start", "4000"]).sweep().unwrap();
        assert_eq!(sweep, Sweep::new(4000, 5000, 1).unwrap());
    }

    #[test]
    fn invalid_override_is_rejected() {
        assert_eq!(
            parse(&["--start", "3000", "--end", "1000"]).sweep(),
            Err(qtemp::Error::InvalidSweep)
        );
    }

    #[test]
    fn negative_bounds_reach_sweep_validation() {
        let args = parse(&["--start", "-5"]);
        assert_eq!(args.start, Some(-5));
        assert_eq!(args.sweep(), Err(qtemp::Error::InvalidSweep));

        assert_eq!(parse(&["--step", "-10"]).sweep(), Err(qtemp::Error::InvalidSweep));
    }

    #[test]
    fn io_sink_keeps_error() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::ErrorKind::BrokenPipe.into())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut sink = IoSink {
            inner: Broken,
            error: None,
        };
        assert!(fmt::Write::write_str(&mut sink, "mv\n").is_err());
        assert_eq!(
            sink.error.map(|e| e.kind()),
            Some(io::ErrorKind::BrokenPipe)
        );
    }
}
