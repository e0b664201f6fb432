use alloc::boxed::Box;

use crate::{error, util::escape};

/// The reason text failed to parse, without a position.
///
/// These are always wrapped by a [`ParseError`] by the time they reach a
/// caller, since the position is only known once parsing unwinds to the
/// entry point.
#[derive(Clone, Debug)]
pub(crate) enum Error {
    EmptyInput,
    ExpectedByte { expected: u8, found: Option<u8> },
    ExpectedDesignator { what: &'static str },
    ExpectedDigits { what: &'static str, count: u8 },
    ExpectedOffset { found: Option<u8> },
    ExpectedPeriodComponent,
    ExpectedDurationComponent,
    ExpectedTimeComponent,
    ExpectedYearDigits { min: u8, found: usize },
    ExpectedZoneClose,
    LeadingZeroYear,
    NegativeZeroYear,
    StdFmtWriteAdapter,
    TooManyFractionDigits,
    TrailingInput,
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Fmt(err).into()
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
            EmptyInput => f.write_str("input is empty"),
            ExpectedByte { expected, found: Some(found) } => write!(
                f,
                "expected {expected:?} but found {found:?}",
                expected = escape::Byte(expected),
                found = escape::Byte(found),
            ),
            ExpectedByte { expected, found: None } => write!(
                f,
                "expected {expected:?} but found end of input",
                expected = escape::Byte(expected),
            ),
            ExpectedDesignator { what } => {
                write!(f, "expected a designator after {what} value")
            }
            ExpectedDigits { what, count } => {
                write!(f, "expected {count} digit {what}")
            }
            ExpectedOffset { found: Some(found) } => write!(
                f,
                "expected 'Z', '+' or '-' to begin offset, but found {found:?}",
                found = escape::Byte(found),
            ),
            ExpectedOffset { found: None } => f.write_str(
                "expected 'Z', '+' or '-' to begin offset, \
                 but found end of input",
            ),
            ExpectedPeriodComponent => f.write_str(
                "expected at least one of years, months, weeks or days",
            ),
            ExpectedDurationComponent => f.write_str(
                "expected at least one of days or a time section",
            ),
            ExpectedTimeComponent => f.write_str(
                "expected at least one of hours, minutes or seconds \
                 after 'T' designator",
            ),
            ExpectedYearDigits { min, found } => write!(
                f,
                "expected between {min} and 9 year digits, \
                 but found {found}",
            ),
            ExpectedZoneClose => {
                f.write_str("expected ']' to close time zone annotation")
            }
            LeadingZeroYear => f.write_str(
                "year with more than four digits must not begin with zero",
            ),
            NegativeZeroYear => {
                f.write_str("year zero must not be written with a sign")
            }
            StdFmtWriteAdapter => {
                f.write_str("an error occurred when formatting an argument")
            }
            TooManyFractionDigits => {
                f.write_str("fraction has more than 9 digits")
            }
            TrailingInput => {
                f.write_str("unparsed input remains after a complete value")
            }
        }
    }
}

/// An error that occurs while parsing text, along with the byte offset at
/// which it occurred.
#[derive(Clone, Debug)]
pub(crate) struct ParseError {
    what: &'static str,
    input: Box<str>,
    position: usize,
}

impl ParseError {
    pub(crate) fn new(
        what: &'static str,
        input: &[u8],
        position: usize,
    ) -> ParseError {
        use alloc::string::ToString;

        let input = escape::Bytes(input).to_string().into_boxed_str();
        ParseError { what, input, position }
    }

    pub(crate) fn position(&self) -> usize {
        self.position
    }
}

impl From<ParseError> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: ParseError) -> error::Error {
        error::ErrorKind::Parse(err).into()
    }
}

impl error::IntoError for ParseError {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "failed to parse \"{input}\" as {what} at position {position}",
            input = self.input,
            what = self.what,
            position = self.position,
        )
    }
}
