use core::fmt;

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Millivolt value outside the supported input domain
    OutOfRange(i32),

    /// Floating point input was NaN or infinite
    NotFinite,

    /// A polynomial coefficient cannot be represented in the Q format
    Coefficient,

    /// Sweep bounds are reversed, outside the domain, or the step is not positive
    InvalidSweep,

    /// A rendered row did not fit the row buffer
    RowOverflow,

    /// The output sink refused a write
    Write,
}

impl Error {
    pub fn as_str(&self) -> &'static str {
        match self {
            Error::OutOfRange(_) => "Millivolts out of range",
            Error::NotFinite => "Input not finite",
            Error::Coefficient => "Coefficient not representable",
            Error::InvalidSweep => "Invalid sweep",
            Error::RowOverflow => "Row buffer overflow",
            Error::Write => "Write failed",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfRange(mv) => write!(f, "{}: {} mV", self.as_str(), mv),
            _ => f.write_str(self.as_str()),
        }
    }
}

impl core::error::Error for Error {}

impl From<fmt::Error> for Error {
    fn from(_: fmt::Error) -> Self {
        Self::Write
    }
}
