use crate::error;

/// Context for failures of duration and period arithmetic.
#[derive(Clone, Debug)]
pub(crate) enum Error {
    ConvertNegativeToUnsigned,
    ConvertUnsignedTooBig,
    DivideByZero,
    FailedDuration { op: &'static str },
    FailedNormalizePeriod,
    FailedPeriod { op: &'static str },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Duration(err).into()
    }
}

impl error::IntoError for Error {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            ConvertNegativeToUnsigned => f.write_str(
                "cannot convert negative duration to unsigned duration",
            ),
            ConvertUnsignedTooBig => f.write_str(
                "unsigned duration is too big to fit in a signed duration",
            ),
            DivideByZero => f.write_str("cannot divide duration by zero"),
            FailedDuration { op } => write!(f, "failed to {op} duration"),
            FailedNormalizePeriod => {
                f.write_str("failed to fold months of period into years")
            }
            FailedPeriod { op } => write!(f, "failed to {op} period"),
        }
    }
}
