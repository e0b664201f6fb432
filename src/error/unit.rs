use crate::{error, Field, Unit};

/// An error for when a unit or field is given to an operation that can't
/// use it.
#[derive(Clone, Debug)]
pub(crate) enum Error {
    UnsupportedField { field: Field, on: &'static str },
    UnsupportedUnit { unit: Unit, op: &'static str },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Unsupported(err).into()
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
            UnsupportedField { field, on } => {
                write!(f, "field '{field}' is not supported by {on}")
            }
            UnsupportedUnit { unit, op } => write!(
                f,
                "unit '{unit}' is not supported when {op}",
                unit = unit.singular(),
            ),
        }
    }
}
