use crate::{error, Unit};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    FailedAddDuration,
    FailedAddPeriod,
    FailedAddUnit { unit: Unit },
    FailedFromInstant,
    FailedResolveLocal,
    FailedSubDuration,
    FailedSubPeriod,
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Zoned(err).into()
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
            FailedAddDuration => {
                f.write_str("failed to add duration to zoned datetime")
            }
            FailedAddPeriod => {
                f.write_str("failed to add period to zoned datetime")
            }
            FailedAddUnit { unit } => write!(
                f,
                "failed to add {unit} to zoned datetime",
                unit = unit.plural(),
            ),
            FailedFromInstant => f.write_str(
                "failed to convert instant to zoned datetime",
            ),
            FailedResolveLocal => f.write_str(
                "failed to resolve civil datetime in time zone",
            ),
            FailedSubDuration => {
                f.write_str("failed to subtract duration from zoned datetime")
            }
            FailedSubPeriod => {
                f.write_str("failed to subtract period from zoned datetime")
            }
        }
    }
}
