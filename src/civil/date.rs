use core::str::FromStr;

use crate::{
    civil::{DateTime, Time, Weekday},
    error::{civil::Error as E, unit::Error as UE, Error, ErrorContext},
    fmt::{
        temporal::{DEFAULT_DATETIME_PARSER, DEFAULT_DATETIME_PRINTER},
        FmtWrite,
    },
    util::{arith, b, common},
    Field, Period, Unit,
};

/// A representation of a civil date in the proleptic Gregorian calendar.
///
/// A `Date` value corresponds to a triple of year, month and day. Every `Date`
/// value is guaranteed to be a valid date. For example, it is not possible to
/// create a `Date` value corresponding to `2023-02-29`.
///
/// # Range of dates
///
/// The range of dates supported by this type is `-999999999-01-01` through
/// `999999999-12-31`. Every date in this range can be converted to and from
/// an epoch day (the number of days since `1970-01-01`).
///
/// # Parsing and printing
///
/// `Date` implements `Display` and `FromStr` using the ISO 8601 extended
/// date format. Years in the range `-9999..=9999` are printed with four
/// digits. Years outside that range are printed with an explicit sign.
///
/// ```
/// use calendrical::civil::Date;
///
/// let date: Date = "2024-06-19".parse()?;
/// assert_eq!(date.to_string(), "2024-06-19");
///
/// let date = Date::new(12_345, 1, 1)?;
/// assert_eq!(date.to_string(), "+12345-01-01");
///
/// let date = Date::new(-1, 1, 1)?;
/// assert_eq!(date.to_string(), "-0001-01-01");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Arithmetic
///
/// Adding days or weeks is exact. Adding months or years clamps the day to
/// the last day of the resulting month when the original day doesn't exist
/// in it:
///
/// ```
/// use calendrical::civil::date;
///
/// assert_eq!(date(2024, 1, 31).checked_add_months(1)?, date(2024, 2, 29));
/// assert_eq!(date(2008, 2, 29).checked_add_years(1)?, date(2009, 2, 28));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Date {
    year: i32,
    month: i8,
    day: i8,
}

impl Date {
    /// The minimum representable Gregorian date.
    pub const MIN: Date = Date::constant(-999_999_999, 1, 1);

    /// The maximum representable Gregorian date.
    pub const MAX: Date = Date::constant(999_999_999, 12, 31);

    /// The first day of the Unix epoch, `1970-01-01`.
    pub const EPOCH: Date = Date::constant(1970, 1, 1);

    /// Creates a new `Date` value from its component year, month and day
    /// values.
    ///
    /// # Errors
    ///
    /// This returns a range error if the given values do not correspond to a
    /// valid date.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::civil::Date;
    ///
    /// let d = Date::new(2024, 2, 29)?;
    /// assert_eq!(d.year(), 2024);
    /// assert!(Date::new(2023, 2, 29).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(year: i32, month: i8, day: i8) -> Result<Date, Error> {
        let year = b::Year::check(year)?;
        let month = b::Month::check(month)?;
        let day = b::Day::check(day)?;
        let max = common::days_in_month(year, month);
        if day > max {
            return Err(Error::range("day", day, 1, max));
        }
        Ok(Date { year, month, day })
    }

    /// Creates a new `Date` value in a `const` context.
    ///
    /// # Panics
    ///
    /// This panics if the given values do not correspond to a valid date.
    pub const fn constant(year: i32, month: i8, day: i8) -> Date {
        if !b::Year::contains(year) {
            panic!("invalid year");
        }
        if !b::Month::contains(month) {
            panic!("invalid month");
        }
        if day < 1 || day > common::days_in_month(year, month) {
            panic!("invalid day");
        }
        Date { year, month, day }
    }

    /// Creates a date from the number of days since `1970-01-01`.
    ///
    /// # Errors
    ///
    /// This returns a range error if the resulting date would be outside of
    /// [`Date::MIN`] and [`Date::MAX`].
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::civil::{date, Date};
    ///
    /// assert_eq!(Date::from_epoch_day(0)?, date(1970, 1, 1));
    /// assert_eq!(Date::from_epoch_day(-1)?, date(1969, 12, 31));
    /// assert_eq!(Date::from_epoch_day(19_723)?, date(2024, 1, 1));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_epoch_day(epoch_day: i64) -> Result<Date, Error> {
        let epoch_day = b::EpochDay::check(epoch_day)?;
        let (year, month, day) = common::from_epoch_day(epoch_day);
        Ok(Date { year, month, day })
    }

    /// Creates a date from a year and a one-based day of that year.
    ///
    /// # Errors
    ///
    /// This returns a range error if the year is out of range, or if the day
    /// is not in the range `1..=365` (or `1..=366` in leap years).
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::civil::{date, Date};
    ///
    /// assert_eq!(Date::from_year_day(2024, 60)?, date(2024, 2, 29));
    /// assert!(Date::from_year_day(2023, 366).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_year_day(year: i32, day: i16) -> Result<Date, Error> {
        let year = b::Year::check(year)?;
        let max = common::days_in_year(year);
        if !(1 <= day && day <= max) {
            return Err(Error::range("day-of-year", day, 1, max));
        }
        let epoch_day = common::to_epoch_day(year, 1, 1) + i64::from(day) - 1;
        let (year, month, day) = common::from_epoch_day(epoch_day);
        Ok(Date { year, month, day })
    }

    /// Returns the year for this date.
    #[inline]
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month for this date, in the range `1..=12`.
    #[inline]
    pub fn month(self) -> i8 {
        self.month
    }

    /// Returns the day for this date, in the range `1..=31`.
    #[inline]
    pub fn day(self) -> i8 {
        self.day
    }

    /// Returns the weekday corresponding to this date.
    #[inline]
    pub fn weekday(self) -> Weekday {
        let offset = common::weekday_from_epoch_day(self.to_epoch_day());
        Weekday::from_monday_one_offset_unchecked(offset)
    }

    /// Returns the one-based ordinal day of the year for this date.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::civil::date;
    ///
    /// assert_eq!(date(2024, 12, 31).day_of_year(), 366);
    /// assert_eq!(date(2023, 12, 31).day_of_year(), 365);
    /// ```
    #[inline]
    pub fn day_of_year(self) -> i16 {
        common::day_of_year(self.year, self.month, self.day)
    }

    /// Returns the number of days in the month of this date.
    #[inline]
    pub fn days_in_month(self) -> i8 {
        common::days_in_month(self.year, self.month)
    }

    /// Returns the number of days in the year of this date.
    #[inline]
    pub fn days_in_year(self) -> i16 {
        common::days_in_year(self.year)
    }

    /// Returns true if and only if the year of this date is a leap year.
    #[inline]
    pub fn in_leap_year(self) -> bool {
        common::is_leap_year(self.year)
    }

    /// Returns the number of days since `1970-01-01`.
    #[inline]
    pub fn to_epoch_day(self) -> i64 {
        common::to_epoch_day(self.year, self.month, self.day)
    }

    /// Returns the zero-based number of months since January of year zero.
    #[inline]
    pub fn proleptic_month(self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }

    /// Returns a copy of this date with the year changed.
    ///
    /// If the day doesn't exist in the resulting year (i.e., February 29 in
    /// a non-leap year), then it is clamped to the last day of the month.
    ///
    /// # Errors
    ///
    /// This returns a range error if the year is out of range.
    pub fn with_year(self, year: i32) -> Result<Date, Error> {
        let year = b::Year::check(year)?;
        Ok(Date::clamped(year, self.month, self.day))
    }

    /// Returns a copy of this date with the month changed.
    ///
    /// If the day doesn't exist in the resulting month, then it is clamped to
    /// the last day of the month.
    ///
    /// # Errors
    ///
    /// This returns a range error if the month is not in `1..=12`.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::civil::date;
    ///
    /// assert_eq!(date(2023, 3, 31).with_month(2)?, date(2023, 2, 28));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn with_month(self, month: i8) -> Result<Date, Error> {
        let month = b::Month::check(month)?;
        Ok(Date::clamped(self.year, month, self.day))
    }

    /// Returns a copy of this date with the day changed.
    ///
    /// # Errors
    ///
    /// This returns a range error if the day doesn't exist in the month of
    /// this date.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::civil::date;
    ///
    /// assert_eq!(date(2024, 2, 1).with_day(29)?, date(2024, 2, 29));
    /// assert!(date(2023, 2, 1).with_day(29).unwrap_err().is_range());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn with_day(self, day: i8) -> Result<Date, Error> {
        Date::new(self.year, self.month, day)
    }

    /// Returns a copy of this date with the day of the year changed.
    ///
    /// # Errors
    ///
    /// This returns a range error if the day of the year doesn't exist in
    /// the year of this date.
    pub fn with_day_of_year(self, day: i16) -> Result<Date, Error> {
        Date::from_year_day(self.year, day)
    }

    /// Add the given number of years to this date.
    ///
    /// The day is clamped to the last day of the resulting month when
    /// necessary. This only happens for February 29.
    ///
    /// # Errors
    ///
    /// This returns an error if the resulting year is out of range.
    pub fn checked_add_years(self, years: i64) -> Result<Date, Error> {
        if years == 0 {
            return Ok(self);
        }
        let year = arith::add(i64::from(self.year), years)
            .and_then(b::Year::check)
            .context(E::FailedAddYears)?;
        Ok(Date::clamped(year, self.month, self.day))
    }

    /// Add the given number of months to this date.
    ///
    /// The day is clamped to the last day of the resulting month when
    /// necessary. So adding one month to January 31 yields the last day of
    /// February, never a day in March.
    ///
    /// # Errors
    ///
    /// This returns an error if the resulting date is out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::civil::date;
    ///
    /// assert_eq!(date(2023, 1, 31).checked_add_months(1)?, date(2023, 2, 28));
    /// assert_eq!(date(2023, 1, 31).checked_add_months(-2)?, date(2022, 11, 30));
    /// assert_eq!(date(2023, 1, 31).checked_add_months(25)?, date(2025, 2, 28));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn checked_add_months(self, months: i64) -> Result<Date, Error> {
        if months == 0 {
            return Ok(self);
        }
        let total = arith::add(self.proleptic_month(), months)
            .context(E::FailedAddMonths)?;
        let year = b::Year::check(arith::floor_div(total, 12))
            .context(E::FailedAddMonths)?;
        let month = (arith::floor_mod(total, 12) + 1) as i8;
        Ok(Date::clamped(year, month, self.day))
    }

    /// Add the given number of weeks to this date.
    ///
    /// # Errors
    ///
    /// This returns an error if the resulting date is out of range.
    pub fn checked_add_weeks(self, weeks: i64) -> Result<Date, Error> {
        let days = arith::mul(weeks, 7).context(E::FailedAddWeeks)?;
        self.checked_add_days(days).context(E::FailedAddWeeks)
    }

    /// Add the given number of days to this date.
    ///
    /// # Errors
    ///
    /// This returns an error if the resulting date is out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::civil::{date, Date};
    ///
    /// assert_eq!(date(2024, 2, 28).checked_add_days(2)?, date(2024, 3, 1));
    /// assert!(Date::MAX.checked_add_days(1).unwrap_err().is_range());
    /// assert!(Date::MAX
    ///     .checked_add_days(i64::MAX)
    ///     .unwrap_err()
    ///     .is_arithmetic_overflow());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn checked_add_days(self, days: i64) -> Result<Date, Error> {
        if days == 0 {
            return Ok(self);
        }
        arith::add(self.to_epoch_day(), days)
            .and_then(Date::from_epoch_day)
            .context(E::FailedAddDays)
    }

    /// Subtract the given number of years from this date.
    ///
    /// This is equivalent to `checked_add_years` with the amount negated.
    pub fn checked_sub_years(self, years: i64) -> Result<Date, Error> {
        self.checked_add_years(arith::neg(years)?)
    }

    /// Subtract the given number of months from this date.
    pub fn checked_sub_months(self, months: i64) -> Result<Date, Error> {
        self.checked_add_months(arith::neg(months)?)
    }

    /// Subtract the given number of weeks from this date.
    pub fn checked_sub_weeks(self, weeks: i64) -> Result<Date, Error> {
        self.checked_add_weeks(arith::neg(weeks)?)
    }

    /// Subtract the given number of days from this date.
    pub fn checked_sub_days(self, days: i64) -> Result<Date, Error> {
        self.checked_add_days(arith::neg(days)?)
    }

    /// Add an amount of the given unit to this date.
    ///
    /// Only units of a day or bigger are supported. Decades, centuries and
    /// millennia are added as multiples of years.
    ///
    /// # Errors
    ///
    /// This returns an error if the unit is smaller than a day, or if the
    /// resulting date is out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::{civil::date, Unit};
    ///
    /// let d = date(2000, 2, 29);
    /// assert_eq!(d.checked_add_unit(1, Unit::Century)?, date(2100, 2, 28));
    /// assert!(d.checked_add_unit(1, Unit::Hour).unwrap_err().is_unsupported());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn checked_add_unit(
        self,
        amount: i64,
        unit: Unit,
    ) -> Result<Date, Error> {
        match unit {
            Unit::Day => self.checked_add_days(amount),
            Unit::Week => self.checked_add_weeks(amount),
            Unit::Month => self.checked_add_months(amount),
            Unit::Year => self.checked_add_years(amount),
            Unit::Decade => self.checked_add_years(arith::mul(amount, 10)?),
            Unit::Century => self.checked_add_years(arith::mul(amount, 100)?),
            Unit::Millennium => {
                self.checked_add_years(arith::mul(amount, 1_000)?)
            }
            unit => {
                Err(UE::UnsupportedUnit { unit, op: "adding to a date" }.into())
            }
        }
    }

    /// Add the given period to this date.
    ///
    /// Years and months are applied first, then days. When both years and
    /// months are non-zero, they are applied together as a single number of
    /// months, so the day is clamped at most once.
    ///
    /// # Errors
    ///
    /// This returns an error if the resulting date is out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::{civil::date, Period};
    ///
    /// let d = date(2024, 1, 29);
    /// assert_eq!(d.checked_add(Period::new(1, 1, 0))?, date(2025, 2, 28));
    /// assert_eq!(d.checked_add(Period::new(0, 1, 1))?, date(2024, 3, 1));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn checked_add(self, period: Period) -> Result<Date, Error> {
        self.add_period(period, false).context(E::FailedAddPeriod)
    }

    /// Subtract the given period from this date.
    ///
    /// This applies years and months first, then days, just like
    /// [`Date::checked_add`].
    pub fn checked_sub(self, period: Period) -> Result<Date, Error> {
        self.add_period(period, true).context(E::FailedSubPeriod)
    }

    fn add_period(self, period: Period, negate: bool) -> Result<Date, Error> {
        let sign = if negate { -1 } else { 1 };
        let (years, months, days) = (
            i64::from(period.years()) * sign,
            i64::from(period.months()) * sign,
            i64::from(period.days()) * sign,
        );
        let mut date = self;
        if years != 0 {
            if months != 0 {
                date = date.checked_add_months(years * 12 + months)?;
            } else {
                date = date.checked_add_years(years)?;
            }
        } else if months != 0 {
            date = date.checked_add_months(months)?;
        }
        date.checked_add_days(days)
    }

    /// Returns the period from this date until the given date.
    ///
    /// This is equivalent to [`Period::between`] with this date as the
    /// start.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::{civil::date, Period};
    ///
    /// let period = date(2010, 1, 1).until(date(2010, 2, 28))?;
    /// assert_eq!(period, Period::new(0, 1, 27));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn until(self, other: Date) -> Result<Period, Error> {
        Period::between(self, other)
    }

    /// Returns the number of days from this date until the given date.
    ///
    /// This is negative when the given date is before this one.
    pub fn days_until(self, other: Date) -> i64 {
        other.to_epoch_day() - self.to_epoch_day()
    }

    /// Create a datetime from this date and the given time components.
    ///
    /// # Panics
    ///
    /// This panics if the given time components are invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::civil::date;
    ///
    /// let dt = date(2024, 6, 15).at(13, 5, 0, 0);
    /// assert_eq!(dt.to_string(), "2024-06-15T13:05");
    /// ```
    pub const fn at(
        self,
        hour: i8,
        minute: i8,
        second: i8,
        subsec_nanosecond: i32,
    ) -> DateTime {
        DateTime::from_parts(
            self,
            Time::constant(hour, minute, second, subsec_nanosecond),
        )
    }

    /// Create a datetime from this date and the given time.
    pub const fn to_datetime(self, time: Time) -> DateTime {
        DateTime::from_parts(self, time)
    }

    /// Returns the value of the given date field.
    ///
    /// # Errors
    ///
    /// This returns an error if the field is not date based.
    pub fn get(self, field: Field) -> Result<i64, Error> {
        Ok(match field {
            Field::DayOfWeek => {
                i64::from(self.weekday().to_monday_one_offset())
            }
            Field::DayOfMonth => i64::from(self.day),
            Field::DayOfYear => i64::from(self.day_of_year()),
            Field::EpochDay => self.to_epoch_day(),
            Field::MonthOfYear => i64::from(self.month),
            Field::ProlepticMonth => self.proleptic_month(),
            Field::Year => i64::from(self.year),
            field => {
                return Err(UE::UnsupportedField { field, on: "dates" }.into())
            }
        })
    }

    /// Returns a copy of this date with the given field changed.
    ///
    /// Setting the day of the week moves the date within its Monday to
    /// Sunday week. Setting the month or year clamps the day, just like
    /// [`Date::with_month`] and [`Date::with_year`].
    ///
    /// # Errors
    ///
    /// This returns an error if the field is not date based, or if the value
    /// is not valid for the field.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::{civil::date, Field};
    ///
    /// // 2024-06-19 is a Wednesday.
    /// let d = date(2024, 6, 19);
    /// assert_eq!(d.with(Field::DayOfWeek, 1)?, date(2024, 6, 17));
    /// assert_eq!(d.with(Field::DayOfWeek, 7)?, date(2024, 6, 23));
    /// assert!(d.with(Field::DayOfWeek, 8).unwrap_err().is_range());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn with(self, field: Field, value: i64) -> Result<Date, Error> {
        if !field.is_date_based() {
            return Err(UE::UnsupportedField { field, on: "dates" }.into());
        }
        let value = field.check(value)?;
        match field {
            Field::DayOfWeek => {
                let current = self.get(Field::DayOfWeek)?;
                self.checked_add_days(value - current)
            }
            Field::DayOfMonth => self.with_day(value as i8),
            Field::DayOfYear => self.with_day_of_year(value as i16),
            Field::EpochDay => Date::from_epoch_day(value),
            Field::MonthOfYear => self.with_month(value as i8),
            Field::ProlepticMonth => {
                self.checked_add_months(value - self.proleptic_month())
            }
            Field::Year => self.with_year(value as i32),
            field => Err(UE::UnsupportedField { field, on: "dates" }.into()),
        }
    }

    /// Builds a date, clamping the day to the last day of the month.
    ///
    /// Callers must ensure the year and month are valid.
    fn clamped(year: i32, month: i8, day: i8) -> Date {
        let day = day.min(common::days_in_month(year, month));
        Date { year, month, day }
    }
}

impl Default for Date {
    fn default() -> Date {
        Date::EPOCH
    }
}

impl core::fmt::Debug for Date {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::fmt::Display for Date {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        DEFAULT_DATETIME_PRINTER
            .print_date(self, FmtWrite(f))
            .map_err(|_| core::fmt::Error)
    }
}

impl FromStr for Date {
    type Err = Error;

    fn from_str(string: &str) -> Result<Date, Error> {
        DEFAULT_DATETIME_PARSER.parse_date(string)
    }
}

/// Adds a period to a date.
///
/// # Panics
///
/// This panics if the result is out of range. Use [`Date::checked_add`]
/// for a fallible version.
impl core::ops::Add<Period> for Date {
    type Output = Date;

    #[inline]
    fn add(self, rhs: Period) -> Date {
        self.checked_add(rhs).expect("adding period to date overflowed")
    }
}

/// Subtracts a period from a date.
///
/// # Panics
///
/// This panics if the result is out of range. Use [`Date::checked_sub`]
/// for a fallible version.
impl core::ops::Sub<Period> for Date {
    type Output = Date;

    #[inline]
    fn sub(self, rhs: Period) -> Date {
        self.checked_sub(rhs).expect("subtracting period from date overflowed")
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Date {
    fn arbitrary(g: &mut quickcheck::Gen) -> Date {
        // Keep most generated dates in a range where adding arbitrary small
        // amounts doesn't overflow, but still cover negative years.
        let year = i32::arbitrary(g).rem_euclid(40_001) - 20_000;
        let month = (u8::arbitrary(g) % 12) as i8 + 1;
        let day = (u8::arbitrary(g) % 31) as i8 + 1;
        Date::clamped(year, month, day)
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Date>> {
        alloc::boxed::Box::new(
            (self.year, self.month, self.day).shrink().filter_map(
                |(year, month, day)| Date::new(year, month, day).ok(),
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::civil::date;

    use super::*;

    #[test]
    fn new_errors() {
        insta::assert_snapshot!(
            Date::new(2023, 2, 29).unwrap_err(),
            @"parameter 'day' with value 29 is not in the required range of 1..=28",
        );
        insta::assert_snapshot!(
            Date::new(1_000_000_000, 1, 1).unwrap_err(),
            @"parameter 'year' with value 1000000000 is not in the required range of -999999999..=999999999",
        );
        insta::assert_snapshot!(
            Date::new(2024, 0, 1).unwrap_err(),
            @"parameter 'month' with value 0 is not in the required range of 1..=12",
        );
    }

    #[test]
    fn min_max_epoch_days() {
        assert_eq!(Date::MIN.to_epoch_day(), b::EpochDay::MIN);
        assert_eq!(Date::MAX.to_epoch_day(), b::EpochDay::MAX);
        assert_eq!(Date::from_epoch_day(b::EpochDay::MIN).unwrap(), Date::MIN);
        assert_eq!(Date::from_epoch_day(b::EpochDay::MAX).unwrap(), Date::MAX);
        assert!(Date::from_epoch_day(b::EpochDay::MAX + 1)
            .unwrap_err()
            .is_range());
        assert!(Date::from_epoch_day(b::EpochDay::MIN - 1)
            .unwrap_err()
            .is_range());
    }

    #[test]
    fn add_years_clamps_leap_day() {
        let d = date(2008, 2, 29);
        assert_eq!(d.checked_add_years(1).unwrap(), date(2009, 2, 28));
        assert_eq!(d.checked_add_years(4).unwrap(), date(2012, 2, 29));
        assert_eq!(d.checked_sub_years(1).unwrap(), date(2007, 2, 28));
        assert_eq!(d.checked_add_years(0).unwrap(), d);
    }

    #[test]
    fn add_months_clamps_to_end_of_month() {
        let d = date(2023, 1, 31);
        assert_eq!(d.checked_add_months(1).unwrap(), date(2023, 2, 28));
        assert_eq!(d.checked_add_months(2).unwrap(), date(2023, 3, 31));
        assert_eq!(d.checked_add_months(3).unwrap(), date(2023, 4, 30));
        assert_eq!(d.checked_add_months(13).unwrap(), date(2024, 2, 29));
        assert_eq!(d.checked_add_months(-1).unwrap(), date(2022, 12, 31));
        assert_eq!(d.checked_add_months(-11).unwrap(), date(2022, 2, 28));

        let d = date(-1, 1, 15);
        assert_eq!(d.checked_add_months(-1).unwrap(), date(-2, 12, 15));
        assert_eq!(d.checked_add_months(12).unwrap(), date(0, 1, 15));
    }

    #[test]
    fn add_out_of_range() {
        let err = Date::MAX.checked_add_months(1).unwrap_err();
        assert!(err.is_range());
        insta::assert_snapshot!(
            err,
            @"failed to add months to date: parameter 'year' with value 1000000000 is not in the required range of -999999999..=999999999",
        );

        let err = Date::MIN.checked_add_months(i64::MIN).unwrap_err();
        assert!(err.is_arithmetic_overflow());

        let err = Date::MIN.checked_add_weeks(i64::MAX).unwrap_err();
        assert!(err.is_arithmetic_overflow());

        let err = Date::MAX.checked_add_years(1).unwrap_err();
        assert!(err.is_range());
    }

    #[test]
    fn add_period_applies_years_months_then_days() {
        // One clamp at the combined month step, not two.
        let d = date(2024, 1, 29);
        let p = Period::new(1, 1, 0);
        assert_eq!(d.checked_add(p).unwrap(), date(2025, 2, 28));

        let d = date(2024, 1, 31);
        let p = Period::new(0, 1, 1);
        assert_eq!(d.checked_add(p).unwrap(), date(2024, 3, 1));
        assert_eq!(d.checked_sub(Period::new(0, 2, 0)).unwrap(), date(2023, 11, 30));
        assert_eq!(d + Period::from_days(1), date(2024, 2, 1));
        assert_eq!(d - Period::from_days(31), date(2023, 12, 31));
    }

    #[test]
    fn fields() {
        let d = date(2024, 2, 29);
        assert_eq!(d.get(Field::DayOfMonth).unwrap(), 29);
        assert_eq!(d.get(Field::DayOfWeek).unwrap(), 4);
        assert_eq!(d.get(Field::DayOfYear).unwrap(), 60);
        assert_eq!(d.get(Field::ProlepticMonth).unwrap(), 2024 * 12 + 1);
        assert!(d.get(Field::NanoOfDay).unwrap_err().is_unsupported());

        assert_eq!(d.with(Field::Year, 2023).unwrap(), date(2023, 2, 28));
        assert_eq!(d.with(Field::DayOfYear, 1).unwrap(), date(2024, 1, 1));
        assert_eq!(d.with(Field::EpochDay, 0).unwrap(), Date::EPOCH);
        assert_eq!(
            d.with(Field::ProlepticMonth, 2025 * 12).unwrap(),
            date(2025, 1, 29),
        );
        assert!(d.with(Field::DayOfMonth, 30).unwrap_err().is_range());
        assert!(d.with(Field::MonthOfYear, 13).unwrap_err().is_range());
        assert!(d.with(Field::HourOfDay, 1).unwrap_err().is_unsupported());
    }

    #[test]
    fn year_day() {
        assert_eq!(Date::from_year_day(2023, 365).unwrap(), date(2023, 12, 31));
        insta::assert_snapshot!(
            Date::from_year_day(2023, 366).unwrap_err(),
            @"parameter 'day-of-year' with value 366 is not in the required range of 1..=365",
        );
    }

    #[test]
    fn weekdays() {
        assert_eq!(Date::EPOCH.weekday(), Weekday::Thursday);
        assert_eq!(date(2000, 1, 1).weekday(), Weekday::Saturday);
        assert_eq!(date(0, 1, 1).weekday(), Weekday::Saturday);
    }

    #[test]
    fn date_size() {
        assert_eq!(8, core::mem::size_of::<Date>());
    }

    quickcheck::quickcheck! {
        fn prop_epoch_day_roundtrip(d: Date) -> bool {
            Date::from_epoch_day(d.to_epoch_day()).unwrap() == d
        }

        fn prop_add_days_then_sub(d: Date, days: i32) -> quickcheck::TestResult {
            let Ok(d2) = d.checked_add_days(i64::from(days)) else {
                return quickcheck::TestResult::discard();
            };
            let got = d2.checked_sub_days(i64::from(days)).unwrap();
            quickcheck::TestResult::from_bool(d == got)
        }

        fn prop_add_months_then_sub(d: Date, months: i16) -> quickcheck::TestResult {
            if d.day() > 28 {
                return quickcheck::TestResult::discard();
            }
            let months = i64::from(months);
            let d2 = d.checked_add_months(months).unwrap();
            let got = d2.checked_sub_months(months).unwrap();
            quickcheck::TestResult::from_bool(d == got)
        }

        fn prop_days_until(d1: Date, d2: Date) -> bool {
            d1.checked_add_days(d1.days_until(d2)).unwrap() == d2
        }

        fn prop_leap_year_february(d: Date) -> bool {
            let y = d.year();
            let leap = y % 4 == 0 && (y % 100 != 0 || y % 400 == 0);
            d.in_leap_year() == leap
                && (d.with_month(2).unwrap().days_in_month() == 29) == leap
        }

        fn prop_ordering_matches_epoch_day(d1: Date, d2: Date) -> bool {
            d1.cmp(&d2) == d1.to_epoch_day().cmp(&d2.to_epoch_day())
        }
    }
}
