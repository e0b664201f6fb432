use alloc::boxed::Box;

use crate::{civil::DateTime, error, tz::Offset};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    DuplicateZone { name: Box<str> },
    EmptyZoneId,
    MixedOffsetSigns { hours: i8, minutes: i8, seconds: i8 },
    NoOffsetChange { second: i64 },
    TransitionsTooClose { previous: i64, next: i64 },
    UnknownZone { name: Box<str> },
    UnsortedTransitions { previous: i64, next: i64 },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Tz(err).into()
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
            DuplicateZone { ref name } => write!(
                f,
                "time zone `{name}` is already in the time zone database",
            ),
            EmptyZoneId => f.write_str("time zone identifier must not be empty"),
            MixedOffsetSigns { hours, minutes, seconds } => write!(
                f,
                "offset components {hours}, {minutes} and {seconds} \
                 must all have the same sign",
            ),
            NoOffsetChange { second } => write!(
                f,
                "transition at epoch second {second} does not change \
                 the offset",
            ),
            TransitionsTooClose { previous, next } => write!(
                f,
                "transition at epoch second {next} changes civil time \
                 already affected by the transition at {previous}",
            ),
            UnknownZone { ref name } => write!(
                f,
                "failed to find time zone `{name}` in time zone database",
            ),
            UnsortedTransitions { previous, next } => write!(
                f,
                "transitions must be strictly increasing, but found \
                 epoch second {next} after {previous}",
            ),
        }
    }
}

/// An error for when a civil datetime can't be paired with an offset in a
/// particular time zone.
#[derive(Clone, Debug)]
pub(crate) enum ResolutionError {
    Gap { datetime: DateTime, zone: Box<str> },
    InvalidOffset { datetime: DateTime, offset: Offset, zone: Box<str> },
}

impl From<ResolutionError> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: ResolutionError) -> error::Error {
        error::ErrorKind::TzResolution(err).into()
    }
}

impl error::IntoError for ResolutionError {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl core::fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ResolutionError::*;

        match *self {
            Gap { datetime, ref zone } => write!(
                f,
                "civil datetime {datetime} does not exist in time zone \
                 `{zone}` because it falls in a gap",
            ),
            InvalidOffset { datetime, offset, ref zone } => write!(
                f,
                "offset {offset} is not valid for civil datetime \
                 {datetime} in time zone `{zone}`",
            ),
        }
    }
}
