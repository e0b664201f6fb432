use crate::{error, Unit};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    FailedAddDays,
    FailedAddDuration,
    FailedAddMonths,
    FailedAddPeriod,
    FailedAddUnit { unit: Unit },
    FailedAddWeeks,
    FailedAddYears,
    FailedSubPeriod,
    FailedUntil,
    OutOfRangeInstant,
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Civil(err).into()
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
            FailedAddDays => f.write_str("failed to add days to date"),
            FailedAddDuration => {
                f.write_str("failed to add duration to datetime")
            }
            FailedAddMonths => f.write_str("failed to add months to date"),
            FailedAddPeriod => f.write_str("failed to add period to date"),
            FailedAddUnit { unit } => {
                write!(f, "failed to add {unit} to datetime", unit = unit.plural())
            }
            FailedAddWeeks => f.write_str("failed to add weeks to date"),
            FailedAddYears => f.write_str("failed to add years to date"),
            FailedSubPeriod => {
                f.write_str("failed to subtract period from date")
            }
            FailedUntil => {
                f.write_str("failed to compute period between dates")
            }
            OutOfRangeInstant => f.write_str(
                "civil datetime at the given offset is outside the \
                 supported range of instants",
            ),
        }
    }
}
