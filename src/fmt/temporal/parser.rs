use alloc::string::String;

use crate::{
    civil::{Date, DateTime, Time},
    error::{
        fmt::{Error as E, ParseError},
        tz::Error as TE,
        Error,
    },
    fmt::{
        util::{count_digits, parse_digits, split},
        Parsed,
    },
    tz::{Offset, TimeZone, TimeZoneDatabase},
    util::{arith, b, t},
    Duration, Instant, Period, Zoned,
};

/// A parser for the ISO 8601 text of every value in this crate.
///
/// The grammar accepted is exactly what
/// [`DateTimePrinter`](super::DateTimePrinter) emits, plus a few
/// alternatives that don't introduce ambiguity: lowercase designators,
/// explicit seconds and fractions of any precision, and offsets in place of
/// `Z`. Every value must consume the entire input.
///
/// On failure, [`Error::parse_position`] reports the byte offset at which
/// the problem was found.
///
/// # Example
///
/// ```
/// use calendrical::{civil::date, fmt::temporal::DateTimeParser};
///
/// let parser = DateTimeParser::new();
/// assert_eq!(parser.parse_date("2024-06-19")?, date(2024, 6, 19));
///
/// let err = parser.parse_date("2024-06-19T").unwrap_err();
/// assert_eq!(err.parse_position(), Some(10));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct DateTimeParser {
    _priv: (),
}

impl DateTimeParser {
    /// Creates a new parser.
    pub const fn new() -> DateTimeParser {
        DateTimeParser { _priv: () }
    }

    /// Parse a civil date, such as `2024-06-19`.
    pub fn parse_date<I: AsRef<[u8]>>(&self, input: I) -> Result<Date, Error> {
        let input = input.as_ref();
        parse_all("date", input, |input| self.parse_date_spec(input))
    }

    /// Parse a civil time, such as `13:05` or `13:05:30.25`.
    pub fn parse_time<I: AsRef<[u8]>>(&self, input: I) -> Result<Time, Error> {
        let input = input.as_ref();
        parse_all("time", input, |input| self.parse_time_spec(input))
    }

    /// Parse a civil datetime, such as `2024-06-19T13:05`.
    pub fn parse_datetime<I: AsRef<[u8]>>(
        &self,
        input: I,
    ) -> Result<DateTime, Error> {
        let input = input.as_ref();
        parse_all("datetime", input, |input| {
            self.parse_datetime_spec(input)
        })
    }

    /// Parse an offset, such as `Z`, `-05:00` or `+05:30:45`.
    pub fn parse_offset<I: AsRef<[u8]>>(
        &self,
        input: I,
    ) -> Result<Offset, Error> {
        let input = input.as_ref();
        parse_all("offset", input, |input| self.parse_offset_spec(input))
    }

    /// Parse an instant, such as `1970-01-01T00:00:00Z` or
    /// `2008-06-30T11:30:59+02:00`.
    ///
    /// An offset is required. It is only used to find the instant and is
    /// not otherwise preserved.
    pub fn parse_instant<I: AsRef<[u8]>>(
        &self,
        input: I,
    ) -> Result<Instant, Error> {
        let input = input.as_ref();
        parse_all("instant", input, |input| self.parse_instant_spec(input))
    }

    /// Parse a zoned datetime with a fixed offset zone, such as
    /// `2008-06-30T11:30:59+02:00`.
    ///
    /// This fails if the input names a time zone in brackets, since there
    /// is no database to look it up in. Use
    /// [`DateTimeParser::parse_zoned_with`] for that.
    pub fn parse_zoned<I: AsRef<[u8]>>(&self, input: I) -> Result<Zoned, Error> {
        self.parse_zoned_with(&TimeZoneDatabase::new(), input)
    }

    /// Parse a zoned datetime, looking up any time zone name in brackets in
    /// the given database.
    ///
    /// The civil datetime and offset in the text identify an instant, which
    /// is then placed in the named time zone. When the offset in the text
    /// disagrees with the time zone, the result keeps the instant and not
    /// the civil datetime.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::{fmt::temporal::DateTimeParser, tz::{Offset, TimeZoneDatabase, TransitionRules}};
    ///
    /// let mut db = TimeZoneDatabase::new();
    /// db.add(
    ///     "Europe/Paris",
    ///     TransitionRules::new(Offset::constant(2), [(1_224_982_800, Offset::constant(1))])?,
    /// )?;
    /// let parser = DateTimeParser::new();
    /// let zdt = parser.parse_zoned_with(&db, "2008-10-26T02:30+01:00[Europe/Paris]")?;
    /// assert_eq!(zdt.offset(), Offset::constant(1));
    ///
    /// let err = parser.parse_zoned_with(&db, "2008-10-26T02:30+01:00[Europe/Pariss]").unwrap_err();
    /// assert_eq!(err.parse_position(), Some(23));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn parse_zoned_with<I: AsRef<[u8]>>(
        &self,
        db: &TimeZoneDatabase,
        input: I,
    ) -> Result<Zoned, Error> {
        let input = input.as_ref();
        parse_all("zoned datetime", input, |input| {
            self.parse_zoned_spec(db, input)
        })
    }

    /// Parse a duration, such as `PT1H30M` or `-P2DT0.5S`.
    ///
    /// Days are taken to be exactly 24 hours. Every component may have its
    /// own sign, and a sign before the `P` negates the whole duration.
    pub fn parse_duration<I: AsRef<[u8]>>(
        &self,
        input: I,
    ) -> Result<Duration, Error> {
        let input = input.as_ref();
        parse_all("duration", input, |input| {
            self.parse_duration_spec(input)
        })
    }

    /// Parse a period, such as `P1Y2M3D` or `P2W`.
    ///
    /// Weeks are converted to days. Every component may have its own sign,
    /// and a sign before the `P` negates the whole period.
    pub fn parse_period<I: AsRef<[u8]>>(
        &self,
        input: I,
    ) -> Result<Period, Error> {
        let input = input.as_ref();
        parse_all("period", input, |input| self.parse_period_spec(input))
    }

    fn parse_datetime_spec<'i>(
        &self,
        input: &'i [u8],
    ) -> PResult<'i, DateTime> {
        let Parsed { value: date, input } = self.parse_date_spec(input)?;
        let input = expect_ignore_case(input, b'T')?;
        let Parsed { value: time, input } = self.parse_time_spec(input)?;
        Ok(Parsed { value: DateTime::from_parts(date, time), input })
    }

    fn parse_instant_spec<'i>(
        &self,
        input: &'i [u8],
    ) -> PResult<'i, Instant> {
        let Parsed { value: dt, input: rest } =
            self.parse_datetime_spec(input)?;
        let Parsed { value: offset, input: rest } =
            self.parse_offset_spec(rest)?;
        let instant =
            dt.to_instant(offset).map_err(|err| Failure::new(input, err))?;
        Ok(Parsed { value: instant, input: rest })
    }

    fn parse_zoned_spec<'i>(
        &self,
        db: &TimeZoneDatabase,
        input: &'i [u8],
    ) -> PResult<'i, Zoned> {
        let Parsed { value: dt, input: rest } =
            self.parse_datetime_spec(input)?;
        let Parsed { value: offset, input: rest } =
            self.parse_offset_spec(rest)?;
        let annotation = rest.strip_prefix(b"[");
        let Parsed { value: tz, input: rest } = match annotation {
            None => Parsed { value: TimeZone::fixed(offset), input: rest },
            Some(rest) => self.parse_zone_annotation(db, rest)?,
        };
        let zoned = dt
            .to_instant(offset)
            .and_then(|instant| Zoned::from_instant(instant, tz))
            .map_err(|err| Failure::new(input, err))?;
        Ok(Parsed { value: zoned, input: rest })
    }

    /// Parses a time zone name followed by `]` and looks it up.
    ///
    /// The opening `[` must already be stripped.
    fn parse_zone_annotation<'i>(
        &self,
        db: &TimeZoneDatabase,
        input: &'i [u8],
    ) -> PResult<'i, TimeZone> {
        let Some(end) = input.iter().position(|&byte| byte == b']') else {
            return Err(Failure::new(input, E::ExpectedZoneClose));
        };
        if end == 0 {
            return Err(Failure::new(input, TE::EmptyZoneId));
        }
        let name = String::from_utf8_lossy(&input[..end]);
        let tz = db.get(&name).map_err(|err| Failure::new(input, err))?;
        Ok(Parsed { value: tz, input: &input[end + 1..] })
    }

    fn parse_date_spec<'i>(&self, input: &'i [u8]) -> PResult<'i, Date> {
        let Parsed { value: year, input } = self.parse_year(input)?;
        let input = expect(input, b'-')?;
        let Parsed { value: month, input } =
            parse_two_digits(input, "month", b::Month::check)?;
        let input = expect(input, b'-')?;
        let day_start = input;
        let Parsed { value: day, input } =
            parse_two_digits(input, "day", b::Day::check)?;
        let date = Date::new(year, month, day)
            .map_err(|err| Failure::new(day_start, err))?;
        Ok(Parsed { value: date, input })
    }

    /// Parses a year.
    ///
    /// Without a sign, a year has exactly four digits. With a `-`, it has
    /// four to nine digits. With a `+`, it has five to nine digits. Years
    /// with more than four digits can't start with a zero, so that every
    /// year has exactly one representation.
    fn parse_year<'i>(&self, input: &'i [u8]) -> PResult<'i, i32> {
        let negative = match input.first() {
            Some(&b'-') => true,
            Some(&b'+') => false,
            _ => {
                let Some((digits, rest)) = split(input, 4) else {
                    return Err(Failure::new(
                        input,
                        E::ExpectedDigits { what: "year", count: 4 },
                    ));
                };
                let Some(year) = parse_digits(digits) else {
                    return Err(Failure::new(
                        input,
                        E::ExpectedDigits { what: "year", count: 4 },
                    ));
                };
                // At most four digits, so this can't truncate.
                return Ok(Parsed { value: year as i32, input: rest });
            }
        };
        let start = input;
        let input = &input[1..];
        let min = if negative { 4 } else { 5 };
        let found = count_digits(input);
        if !(usize::from(min)..=9).contains(&found) {
            return Err(Failure::new(
                input,
                E::ExpectedYearDigits { min, found },
            ));
        }
        let (digits, rest) = input.split_at(found);
        if found > 4 && digits[0] == b'0' {
            return Err(Failure::new(input, E::LeadingZeroYear));
        }
        // Only digits and at most nine of them, so this never fails.
        let year = parse_digits(digits).unwrap_or(0);
        if negative && year == 0 {
            return Err(Failure::new(start, E::NegativeZeroYear));
        }
        let year = if negative { -year } else { year };
        Ok(Parsed { value: year as i32, input: rest })
    }

    fn parse_time_spec<'i>(&self, input: &'i [u8]) -> PResult<'i, Time> {
        let start = input;
        let Parsed { value: hour, input } =
            parse_two_digits(input, "hour", b::Hour::check)?;
        let input = expect(input, b':')?;
        let Parsed { value: minute, mut input } =
            parse_two_digits(input, "minute", b::Minute::check)?;
        let (mut second, mut nanosecond) = (0, 0);
        if let Some(rest) = input.strip_prefix(b":") {
            let parsed = parse_two_digits(rest, "second", b::Second::check)?;
            second = parsed.value;
            input = parsed.input;
            if let Some(rest) = input.strip_prefix(b".") {
                let parsed = parse_fraction(rest, 1)?;
                nanosecond = parsed.value;
                input = parsed.input;
            }
        }
        let time = Time::new(hour, minute, second, nanosecond)
            .map_err(|err| Failure::new(start, err))?;
        Ok(Parsed { value: time, input })
    }

    fn parse_offset_spec<'i>(&self, input: &'i [u8]) -> PResult<'i, Offset> {
        let negative = match input.first() {
            Some(&(b'Z' | b'z')) => {
                return Ok(Parsed { value: Offset::UTC, input: &input[1..] })
            }
            Some(&b'-') => true,
            Some(&b'+') => false,
            found => {
                return Err(Failure::new(
                    input,
                    E::ExpectedOffset { found: found.copied() },
                ))
            }
        };
        let start = input;
        let input = &input[1..];
        let Parsed { value: hours, input } =
            parse_two_digits(input, "offset hours", b::OffsetHours::check)?;
        let input = expect(input, b':')?;
        let Parsed { value: minutes, mut input } = parse_two_digits(
            input,
            "offset minutes",
            b::OffsetMinutes::check,
        )?;
        let mut seconds = 0;
        if let Some(rest) = input.strip_prefix(b":") {
            let parsed = parse_two_digits(
                rest,
                "offset seconds",
                b::OffsetSeconds::check,
            )?;
            seconds = parsed.value;
            input = parsed.input;
        }
        let sign = if negative { -1 } else { 1 };
        let offset =
            Offset::from_hms(sign * hours, sign * minutes, sign * seconds)
                .map_err(|err| Failure::new(start, err))?;
        Ok(Parsed { value: offset, input })
    }

    /// Parses `[-+]?P(nD)?(T(nH)?(nM)?(n([.,]f{0,9})?S)?)?`.
    fn parse_duration_spec<'i>(
        &self,
        input: &'i [u8],
    ) -> PResult<'i, Duration> {
        let start = input;
        let Parsed { value: negate, input } = parse_sign(input);
        let mut input = expect_ignore_case(input, b'P')?;
        let mut any = false;
        let mut secs: i64 = 0;
        let mut nanos: i64 = 0;

        if starts_number(input) {
            let Parsed { value: days, input: rest } = parse_number(input)?;
            input = expect_ignore_case(rest, b'D')?;
            secs = arith::mul(days.value, t::SECONDS_PER_DAY)
                .map_err(|err| Failure::new(start, err))?;
            any = true;
        }
        if let Some(rest) = strip_prefix_ignore_case(input, b'T') {
            let after_t = rest;
            input = rest;
            // Each of hours, minutes and seconds may appear at most once
            // and in that order.
            let mut next_designator = 0;
            while starts_number(input) {
                let Parsed { value: number, input: rest } =
                    parse_number(input)?;
                input = rest;
                if matches!(input.first(), Some(&(b'.' | b','))) {
                    if next_designator > 2 {
                        return Err(Failure::new(
                            input,
                            E::ExpectedDesignator {
                                what: "duration component",
                            },
                        ));
                    }
                    let Parsed { value: fraction, input: rest } =
                        parse_fraction(&input[1..], 0)?;
                    input = expect_ignore_case(rest, b'S')?;
                    nanos = i64::from(fraction);
                    if number.negative {
                        nanos = -nanos;
                    }
                    secs = arith::add(secs, number.value)
                        .map_err(|err| Failure::new(start, err))?;
                    next_designator = 3;
                    continue;
                }
                let designator = input.first().map(u8::to_ascii_uppercase);
                let (index, scale) = match designator {
                    Some(b'H') => (0, t::SECONDS_PER_HOUR),
                    Some(b'M') => (1, t::SECONDS_PER_MINUTE),
                    Some(b'S') => (2, 1),
                    _ => (usize::MAX, 0),
                };
                if index == usize::MAX || index < next_designator {
                    return Err(Failure::new(
                        input,
                        E::ExpectedDesignator { what: "duration component" },
                    ));
                }
                input = &input[1..];
                next_designator = index + 1;
                let scaled = arith::mul(number.value, scale)
                    .and_then(|n| arith::add(secs, n))
                    .map_err(|err| Failure::new(start, err))?;
                secs = scaled;
            }
            if input.len() == after_t.len() {
                return Err(Failure::new(input, E::ExpectedTimeComponent));
            }
            any = true;
        }
        if !any {
            return Err(Failure::new(input, E::ExpectedDurationComponent));
        }
        let mut duration = Duration::new(secs, nanos)
            .map_err(|err| Failure::new(start, err))?;
        if negate {
            duration = duration
                .checked_neg()
                .map_err(|err| Failure::new(start, err))?;
        }
        Ok(Parsed { value: duration, input })
    }

    /// Parses `[-+]?P(nY)?(nM)?(nW)?(nD)?`.
    fn parse_period_spec<'i>(&self, input: &'i [u8]) -> PResult<'i, Period> {
        let start = input;
        let Parsed { value: negate, input } = parse_sign(input);
        let mut input = expect_ignore_case(input, b'P')?;
        // Years, months, weeks and days, in that order.
        let mut values = [0i32; 4];
        let mut next_designator = 0;
        let mut any = false;
        while starts_number(input) {
            let Parsed { value: number, input: rest } = parse_number(input)?;
            let value = arith::to_i32(number.value)
                .map_err(|err| Failure::new(input, err))?;
            let index = match rest.first().map(u8::to_ascii_uppercase) {
                Some(b'Y') => 0,
                Some(b'M') => 1,
                Some(b'W') => 2,
                Some(b'D') => 3,
                _ => usize::MAX,
            };
            if index == usize::MAX || index < next_designator {
                return Err(Failure::new(
                    rest,
                    E::ExpectedDesignator { what: "period component" },
                ));
            }
            values[index] = if negate {
                arith::neg(value).map_err(|err| Failure::new(start, err))?
            } else {
                value
            };
            next_designator = index + 1;
            input = &rest[1..];
            any = true;
        }
        if !any {
            return Err(Failure::new(input, E::ExpectedPeriodComponent));
        }
        let [years, months, weeks, days] = values;
        let days = arith::mul(weeks, 7)
            .and_then(|weeks| arith::add(days, weeks))
            .map_err(|err| Failure::new(start, err))?;
        Ok(Parsed { value: Period::new(years, months, days), input })
    }
}

/// A parse failure along with the input that remained when it occurred.
///
/// The remaining input determines the position reported to the caller.
struct Failure<'i> {
    rest: &'i [u8],
    err: Error,
}

impl<'i> Failure<'i> {
    fn new(rest: &'i [u8], err: impl Into<Error>) -> Failure<'i> {
        Failure { rest, err: err.into() }
    }
}

type PResult<'i, V> = Result<Parsed<'i, V>, Failure<'i>>;

/// A signed integer as written in a duration or period, keeping track of
/// whether a `-` was present so that `-0` can be distinguished from `0`.
#[derive(Clone, Copy, Debug)]
struct Number {
    value: i64,
    negative: bool,
}

/// Runs the given parser over the entire input and converts any failure to
/// a parse error at the position where it occurred.
fn parse_all<'i, V>(
    what: &'static str,
    input: &'i [u8],
    parse: impl FnOnce(&'i [u8]) -> PResult<'i, V>,
) -> Result<V, Error> {
    let failure = if input.is_empty() {
        Failure::new(input, E::EmptyInput)
    } else {
        match parse(input) {
            Ok(Parsed { value, input: rest }) if rest.is_empty() => {
                return Ok(value)
            }
            Ok(Parsed { input: rest, .. }) => {
                Failure::new(rest, E::TrailingInput)
            }
            Err(failure) => failure,
        }
    };
    let position = input.len() - failure.rest.len();
    trace!("failed to parse {what} at position {position}: {}", failure.err);
    Err(failure.err.context(ParseError::new(what, input, position)))
}

fn expect(input: &[u8], expected: u8) -> Result<&[u8], Failure<'_>> {
    match input.split_first() {
        Some((&byte, rest)) if byte == expected => Ok(rest),
        found => Err(Failure::new(
            input,
            E::ExpectedByte { expected, found: found.map(|(&b, _)| b) },
        )),
    }
}

fn expect_ignore_case(
    input: &[u8],
    expected: u8,
) -> Result<&[u8], Failure<'_>> {
    match strip_prefix_ignore_case(input, expected) {
        Some(rest) => Ok(rest),
        None => Err(Failure::new(
            input,
            E::ExpectedByte { expected, found: input.first().copied() },
        )),
    }
}

fn strip_prefix_ignore_case(input: &[u8], upper: u8) -> Option<&[u8]> {
    match input.split_first() {
        Some((&byte, rest)) if byte.to_ascii_uppercase() == upper => {
            Some(rest)
        }
        _ => None,
    }
}

/// Parses exactly two digits and checks them with the given bounds.
fn parse_two_digits<'i>(
    input: &'i [u8],
    what: &'static str,
    check: fn(i64) -> Result<i8, Error>,
) -> PResult<'i, i8> {
    let expected =
        || Failure::new(input, E::ExpectedDigits { what, count: 2 });
    let Some((digits, rest)) = split(input, 2) else {
        return Err(expected());
    };
    let Some(n) = parse_digits(digits) else {
        return Err(expected());
    };
    let value = check(n).map_err(|err| Failure::new(input, err))?;
    Ok(Parsed { value, input: rest })
}

/// Parses the digits after a decimal separator as nanoseconds.
fn parse_fraction(input: &[u8], min_digits: u8) -> PResult<'_, i32> {
    let found = count_digits(input);
    if found < usize::from(min_digits) {
        return Err(Failure::new(
            input,
            E::ExpectedDigits { what: "fraction", count: min_digits },
        ));
    }
    if found > 9 {
        return Err(Failure::new(input, E::TooManyFractionDigits));
    }
    let (digits, rest) = input.split_at(found);
    let mut nanos = parse_digits(digits).unwrap_or(0);
    for _ in found..9 {
        nanos *= 10;
    }
    // At most nine digits, so this always fits.
    Ok(Parsed { value: nanos as i32, input: rest })
}

fn parse_sign(input: &[u8]) -> Parsed<'_, bool> {
    match input.split_first() {
        Some((&b'-', rest)) => Parsed { value: true, input: rest },
        Some((&b'+', rest)) => Parsed { value: false, input: rest },
        _ => Parsed { value: false, input },
    }
}

/// Returns true when the input starts with an optionally signed digit.
fn starts_number(input: &[u8]) -> bool {
    match input {
        [b'-' | b'+', digit, ..] | [digit, ..] => digit.is_ascii_digit(),
        [] => false,
    }
}

/// Parses an optionally signed integer.
fn parse_number(input: &[u8]) -> PResult<'_, Number> {
    let Parsed { value: negative, input: rest } = parse_sign(input);
    let found = count_digits(rest);
    let (digits, rest) = rest.split_at(found);
    let Some(magnitude) = parse_digits(digits) else {
        return Err(Failure::new(
            input,
            Error::range("integer", i128::MAX, i64::MIN, i64::MAX),
        ));
    };
    let value = if negative { -magnitude } else { magnitude };
    Ok(Parsed { value: Number { value, negative }, input: rest })
}

#[cfg(test)]
mod tests {
    use crate::civil::date;

    use super::*;

    fn p() -> DateTimeParser {
        DateTimeParser::new()
    }

    #[test]
    fn ok_date() {
        assert_eq!(p().parse_date("2024-06-19").unwrap(), date(2024, 6, 19));
        assert_eq!(p().parse_date("-0001-01-01").unwrap(), date(-1, 1, 1));
        assert_eq!(p().parse_date("0000-01-01").unwrap(), date(0, 1, 1));
        assert_eq!(p().parse_date("+10000-01-01").unwrap(), date(10_000, 1, 1));
        assert_eq!(
            p().parse_date("-999999999-01-01").unwrap(),
            Date::MIN,
        );
    }

    #[test]
    fn err_date() {
        insta::assert_snapshot!(
            p().parse_date("").unwrap_err(),
            @r###"failed to parse "" as date at position 0: input is empty"###,
        );
        insta::assert_snapshot!(
            p().parse_date("2024-6-19").unwrap_err(),
            @r###"failed to parse "2024-6-19" as date at position 5: expected 2 digit month"###,
        );
        insta::assert_snapshot!(
            p().parse_date("2023-02-29").unwrap_err(),
            @r###"failed to parse "2023-02-29" as date at position 8: parameter 'day' with value 29 is not in the required range of 1..=28"###,
        );
        insta::assert_snapshot!(
            p().parse_date("+2024-01-01").unwrap_err(),
            @r###"failed to parse "+2024-01-01" as date at position 1: expected between 5 and 9 year digits, but found 4"###,
        );
        insta::assert_snapshot!(
            p().parse_date("-010000-01-01").unwrap_err(),
            @r###"failed to parse "-010000-01-01" as date at position 1: year with more than four digits must not begin with zero"###,
        );
        insta::assert_snapshot!(
            p().parse_date("-0000-01-01").unwrap_err(),
            @r###"failed to parse "-0000-01-01" as date at position 0: year zero must not be written with a sign"###,
        );
        insta::assert_snapshot!(
            p().parse_date("2024/01/01").unwrap_err(),
            @r###"failed to parse "2024/01/01" as date at position 4: expected "-" but found "/""###,
        );
        insta::assert_snapshot!(
            p().parse_date("2024-01-01 ").unwrap_err(),
            @r###"failed to parse "2024-01-01 " as date at position 10: unparsed input remains after a complete value"###,
        );
    }

    #[test]
    fn ok_time() {
        let t = |input| p().parse_time(input).unwrap();
        assert_eq!(t("13:05"), Time::constant(13, 5, 0, 0));
        assert_eq!(t("13:05:00"), Time::constant(13, 5, 0, 0));
        assert_eq!(t("13:05:30.25"), Time::constant(13, 5, 30, 250_000_000));
        assert_eq!(t("13:05:30.000000001"), Time::constant(13, 5, 30, 1));
    }

    #[test]
    fn err_time() {
        let e = |input| p().parse_time(input).unwrap_err();
        assert_eq!(e("24:00").parse_position(), Some(0));
        assert!(e("24:00").is_range());
        assert_eq!(e("12:60").parse_position(), Some(3));
        assert_eq!(e("12:00:").parse_position(), Some(6));
        assert_eq!(e("12:00:00.").parse_position(), Some(9));
        insta::assert_snapshot!(
            e("12:00:00.1234567890"),
            @r###"failed to parse "12:00:00.1234567890" as time at position 9: fraction has more than 9 digits"###,
        );
    }

    #[test]
    fn ok_offset() {
        let o = |input| p().parse_offset(input).unwrap();
        assert_eq!(o("Z"), Offset::UTC);
        assert_eq!(o("z"), Offset::UTC);
        assert_eq!(o("+00:00"), Offset::UTC);
        assert_eq!(o("-00:00"), Offset::UTC);
        assert_eq!(o("-05:30"), Offset::from_hms(-5, -30, 0).unwrap());
        assert_eq!(o("+18:00"), Offset::MAX);
        assert_eq!(o("+01:02:03"), Offset::from_hms(1, 2, 3).unwrap());
    }

    #[test]
    fn err_offset() {
        let e = |input| p().parse_offset(input).unwrap_err();
        insta::assert_snapshot!(
            e("05:00"),
            @r###"failed to parse "05:00" as offset at position 0: expected 'Z', '+' or '-' to begin offset, but found "0""###,
        );
        insta::assert_snapshot!(
            e("+18:00:01"),
            @r###"failed to parse "+18:00:01" as offset at position 0: parameter 'offset-total-seconds' with value 64801 is not in the required range of -64800..=64800"###,
        );
        assert_eq!(e("+0500").parse_position(), Some(3));
        assert_eq!(e("+19:00").parse_position(), Some(1));
    }

    #[test]
    fn ok_instant() {
        let i = |input| p().parse_instant(input).unwrap();
        assert_eq!(i("1970-01-01T00:01:05.000000567Z"), Instant::new(65, 567).unwrap());
        assert_eq!(i("1970-01-01t01:00+01:00"), Instant::EPOCH);
        assert_eq!(i("-999999999-01-01T00:00:00Z"), Instant::MIN);
    }

    #[test]
    fn err_instant() {
        let e = |input| p().parse_instant(input).unwrap_err();
        assert_eq!(e("1970-01-01T00:00").parse_position(), Some(16));
        let err = e("-999999999-01-01T00:00:00+01:00");
        assert!(err.is_range());
        assert_eq!(err.parse_position(), Some(0));
    }

    #[test]
    fn ok_zoned_fixed() {
        let zdt = p().parse_zoned("2008-06-30T11:30:59.000000999+02:00").unwrap();
        assert_eq!(zdt.datetime(), date(2008, 6, 30).at(11, 30, 59, 999));
        assert_eq!(zdt.time_zone(), &TimeZone::fixed(Offset::constant(2)));
    }

    #[test]
    fn err_zoned() {
        let e = |input| p().parse_zoned(input).unwrap_err();
        insta::assert_snapshot!(
            e("2008-06-30T11:30+02:00[Europe/Paris]"),
            @r###"failed to parse "2008-06-30T11:30+02:00[Europe/Paris]" as zoned datetime at position 23: failed to find time zone `Europe/Paris` in time zone database"###,
        );
        assert_eq!(e("2008-06-30T11:30+02:00[Europe/Paris").parse_position(), Some(23));
        assert_eq!(e("2008-06-30T11:30+02:00[]").parse_position(), Some(23));
    }

    #[test]
    fn ok_duration() {
        let d = |input| p().parse_duration(input).unwrap();
        assert_eq!(d("PT0S"), Duration::ZERO);
        assert_eq!(d("PT1H30M"), Duration::from_secs(5_400));
        assert_eq!(d("pt1h30m"), Duration::from_secs(5_400));
        assert_eq!(d("P2D"), Duration::from_secs(172_800));
        assert_eq!(d("P1DT-0.5S"), Duration::new(86_399, 500_000_000).unwrap());
        assert_eq!(d("PT-0.5S"), Duration::from_millis(-500));
        assert_eq!(d("-PT-0.5S"), Duration::from_millis(500));
        assert_eq!(d("PT1,5S"), Duration::from_millis(1_500));
        assert_eq!(d("PT1.S"), Duration::from_secs(1));
        assert_eq!(d("-P1DT1H"), Duration::from_secs(-90_000));
        assert_eq!(d("PT-1H+30M"), Duration::from_secs(-1_800));
        assert_eq!(d("PT-2562047788015215H-30M-8S"), Duration::MIN);
    }

    #[test]
    fn err_duration() {
        let e = |input| p().parse_duration(input).unwrap_err();
        insta::assert_snapshot!(
            e("P"),
            @r###"failed to parse "P" as duration at position 1: expected at least one of days or a time section"###,
        );
        insta::assert_snapshot!(
            e("PT"),
            @r###"failed to parse "PT" as duration at position 2: expected at least one of hours, minutes or seconds after 'T' designator"###,
        );
        insta::assert_snapshot!(
            e("PT1S1M"),
            @r###"failed to parse "PT1S1M" as duration at position 5: expected a designator after duration component value"###,
        );
        assert_eq!(e("P1H").parse_position(), Some(2));
        assert_eq!(e("PT1.5M").parse_position(), Some(5));
        assert_eq!(e("1D").parse_position(), Some(0));
        let err = e("PT-2562047788015215H-30M-9S");
        assert!(err.is_arithmetic_overflow());
        assert!(err.is_parse());
        let err = e("-PT-2562047788015215H-30M-8S");
        assert!(err.is_arithmetic_overflow());
        assert!(e("PT99999999999999999999S").is_range());
    }

    #[test]
    fn ok_period() {
        let per = |input| p().parse_period(input).unwrap();
        assert_eq!(per("P1Y2M3D"), Period::new(1, 2, 3));
        assert_eq!(per("P0D"), Period::ZERO);
        assert_eq!(per("p2w"), Period::from_days(14));
        assert_eq!(per("P1W-1D"), Period::from_days(6));
        assert_eq!(per("-P1Y-2M"), Period::new(-1, 2, 0));
        assert_eq!(per("P-2147483648Y"), Period::from_years(i32::MIN));
    }

    #[test]
    fn err_period() {
        let e = |input| p().parse_period(input).unwrap_err();
        insta::assert_snapshot!(
            e("P"),
            @r###"failed to parse "P" as period at position 1: expected at least one of years, months, weeks or days"###,
        );
        assert_eq!(e("P1D1Y").parse_position(), Some(4));
        assert_eq!(e("P1Y2").parse_position(), Some(4));
        assert!(e("P2147483648Y").is_arithmetic_overflow());
        assert!(e("-P-2147483648Y").is_arithmetic_overflow());
        assert!(e("P306783379W").is_arithmetic_overflow());
    }
}
