use core::str::FromStr;

use crate::{
    civil::Date,
    error::{civil::Error as CE, duration::Error as E, Error, ErrorContext},
    fmt::{
        temporal::{DEFAULT_DATETIME_PARSER, DEFAULT_DATETIME_PRINTER},
        FmtWrite,
    },
    util::arith,
};

/// A calendar based amount of time in years, months and days.
///
/// Unlike a [`Duration`](crate::Duration), a period has no fixed length. One
/// month added to January 31 is 29 days in a leap year, while one month
/// added to April 1 is 30 days. Each component is stored separately and
/// may have any sign. A period is never normalized implicitly: `P14M` and
/// `P1Y2M` are different values. Use [`Period::normalized`] to fold months
/// into years.
///
/// # Example
///
/// ```
/// use calendrical::{civil::date, Period};
///
/// let period: Period = "P1Y2M3D".parse()?;
/// assert_eq!(period, Period::new(1, 2, 3));
/// assert_eq!(date(2024, 1, 31) + period, date(2025, 4, 3));
///
/// assert_eq!(Period::from_months(14).normalized()?.to_string(), "P1Y2M");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct Period {
    years: i32,
    months: i32,
    days: i32,
}

impl Period {
    /// A period of zero length.
    pub const ZERO: Period = Period::new(0, 0, 0);

    /// Creates a period from its components.
    #[inline]
    pub const fn new(years: i32, months: i32, days: i32) -> Period {
        Period { years, months, days }
    }

    /// Creates a period of the given number of years.
    #[inline]
    pub const fn from_years(years: i32) -> Period {
        Period::new(years, 0, 0)
    }

    /// Creates a period of the given number of months.
    #[inline]
    pub const fn from_months(months: i32) -> Period {
        Period::new(0, months, 0)
    }

    /// Creates a period of the given number of weeks, stored as days.
    ///
    /// # Errors
    ///
    /// This returns an error if the number of days overflows an `i32`.
    pub fn from_weeks(weeks: i32) -> Result<Period, Error> {
        let days = arith::mul(weeks, 7).context(E::FailedPeriod { op: "create" })?;
        Ok(Period::new(0, 0, days))
    }

    /// Creates a period of the given number of days.
    #[inline]
    pub const fn from_days(days: i32) -> Period {
        Period::new(0, 0, days)
    }

    /// Returns the period between two dates.
    ///
    /// The start date is included and the end date is excluded. The result
    /// is negative when `end` is before `start`. Months are counted first,
    /// and the remaining days are counted from the date reached by adding
    /// those months to `start`.
    ///
    /// The result is not always the negation of `Period::between(end,
    /// start)` when month lengths differ.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::{civil::date, Period};
    ///
    /// let p = Period::between(date(2010, 1, 1), date(2010, 2, 28))?;
    /// assert_eq!(p.to_string(), "P1M27D");
    ///
    /// let p = Period::between(date(2024, 3, 31), date(2024, 1, 15))?;
    /// assert_eq!(p.to_string(), "P-2M-16D");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn between(start: Date, end: Date) -> Result<Period, Error> {
        let mut total_months = end.proleptic_month() - start.proleptic_month();
        let mut days = i64::from(end.day()) - i64::from(start.day());
        if total_months > 0 && days < 0 {
            total_months -= 1;
            let calc = start
                .checked_add_months(total_months)
                .context(CE::FailedUntil)?;
            days = end.to_epoch_day() - calc.to_epoch_day();
        } else if total_months < 0 && days > 0 {
            total_months += 1;
            days -= i64::from(end.days_in_month());
        }
        let years = arith::to_i32(total_months / 12).context(CE::FailedUntil)?;
        let months = (total_months % 12) as i32;
        Ok(Period::new(years, months, days as i32))
    }

    /// Returns the years component of this period.
    #[inline]
    pub const fn years(self) -> i32 {
        self.years
    }

    /// Returns the months component of this period.
    #[inline]
    pub const fn months(self) -> i32 {
        self.months
    }

    /// Returns the days component of this period.
    #[inline]
    pub const fn days(self) -> i32 {
        self.days
    }

    /// Returns a copy of this period with the years replaced.
    #[inline]
    pub const fn with_years(self, years: i32) -> Period {
        Period { years, ..self }
    }

    /// Returns a copy of this period with the months replaced.
    #[inline]
    pub const fn with_months(self, months: i32) -> Period {
        Period { months, ..self }
    }

    /// Returns a copy of this period with the days replaced.
    #[inline]
    pub const fn with_days(self, days: i32) -> Period {
        Period { days, ..self }
    }

    /// Returns true if every component is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }

    /// Returns true if any component is negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.years < 0 || self.months < 0 || self.days < 0
    }

    /// Returns the total number of months in the years and months of this
    /// period. Days are ignored.
    #[inline]
    pub const fn to_total_months(self) -> i64 {
        self.years as i64 * 12 + self.months as i64
    }

    /// Returns a copy of this period with whole years of months folded into
    /// years. Days are unchanged.
    ///
    /// The years and months of the result have the same sign.
    ///
    /// # Errors
    ///
    /// This returns an error if the number of years overflows an `i32`.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::Period;
    ///
    /// assert_eq!(Period::new(1, -25, 40).normalized()?, Period::new(-1, -1, 40));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn normalized(self) -> Result<Period, Error> {
        let total = self.to_total_months();
        let years = arith::to_i32(total / 12).context(E::FailedNormalizePeriod)?;
        let months = (total % 12) as i32;
        Ok(Period { years, months, ..self })
    }

    /// Add two periods component-wise.
    ///
    /// # Errors
    ///
    /// This returns an error if any component overflows.
    pub fn checked_add(self, rhs: Period) -> Result<Period, Error> {
        self.combine(rhs, arith::add).context(E::FailedPeriod { op: "add" })
    }

    /// Subtract `rhs` from this period component-wise.
    pub fn checked_sub(self, rhs: Period) -> Result<Period, Error> {
        self.combine(rhs, arith::sub)
            .context(E::FailedPeriod { op: "subtract" })
    }

    fn combine(
        self,
        rhs: Period,
        op: fn(i32, i32) -> Result<i32, Error>,
    ) -> Result<Period, Error> {
        Ok(Period {
            years: op(self.years, rhs.years)?,
            months: op(self.months, rhs.months)?,
            days: op(self.days, rhs.days)?,
        })
    }

    /// Multiply each component of this period by the given scalar.
    pub fn checked_mul(self, rhs: i32) -> Result<Period, Error> {
        self.combine(Period::new(rhs, rhs, rhs), arith::mul)
            .context(E::FailedPeriod { op: "multiply" })
    }

    /// Negate each component of this period.
    pub fn checked_neg(self) -> Result<Period, Error> {
        self.checked_mul(-1)
    }
}

impl core::fmt::Debug for Period {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::fmt::Display for Period {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        DEFAULT_DATETIME_PRINTER
            .print_period(self, FmtWrite(f))
            .map_err(|_| core::fmt::Error)
    }
}

impl FromStr for Period {
    type Err = Error;

    fn from_str(string: &str) -> Result<Period, Error> {
        DEFAULT_DATETIME_PARSER.parse_period(string)
    }
}

/// Adds two periods component-wise.
///
/// # Panics
///
/// This panics on overflow. Use [`Period::checked_add`] for a fallible
/// version.
impl core::ops::Add for Period {
    type Output = Period;

    #[inline]
    fn add(self, rhs: Period) -> Period {
        self.checked_add(rhs).expect("period addition overflowed")
    }
}

/// Subtracts two periods component-wise.
///
/// # Panics
///
/// This panics on overflow. Use [`Period::checked_sub`] for a fallible
/// version.
impl core::ops::Sub for Period {
    type Output = Period;

    #[inline]
    fn sub(self, rhs: Period) -> Period {
        self.checked_sub(rhs).expect("period subtraction overflowed")
    }
}

/// Negates a period.
///
/// # Panics
///
/// This panics if any component is `i32::MIN`.
impl core::ops::Neg for Period {
    type Output = Period;

    #[inline]
    fn neg(self) -> Period {
        self.checked_neg().expect("period negation overflowed")
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Period {
    fn arbitrary(g: &mut quickcheck::Gen) -> Period {
        Period::new(
            i32::arbitrary(g) % 1_000,
            i32::arbitrary(g) % 1_000,
            i32::arbitrary(g) % 100_000,
        )
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Period>> {
        alloc::boxed::Box::new(
            (self.years, self.months, self.days)
                .shrink()
                .map(|(y, m, d)| Period::new(y, m, d)),
        )
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use crate::civil::date;

    use super::*;

    #[test]
    fn between() {
        let p = |y1, m1, d1, y2, m2, d2| {
            Period::between(date(y1, m1, d1), date(y2, m2, d2))
                .unwrap()
                .to_string()
        };
        assert_eq!(p(2010, 1, 1, 2010, 2, 28), "P1M27D");
        assert_eq!(p(2010, 1, 31, 2010, 3, 1), "P1M1D");
        assert_eq!(p(2010, 3, 1, 2010, 1, 31), "P-1M-1D");
        assert_eq!(p(2000, 2, 29, 2004, 2, 28), "P3Y11M30D");
        assert_eq!(p(2024, 6, 15, 2024, 6, 15), "P0D");
        assert_eq!(p(-1, 12, 31, 1, 1, 1), "P1Y1D");
    }

    #[test]
    fn between_extremes() {
        let p = Period::between(Date::MIN, Date::MAX).unwrap();
        assert_eq!(p, Period::new(1_999_999_999, 11, 30));
        let p = Period::between(Date::MAX, Date::MIN).unwrap();
        assert_eq!(p, Period::new(-1_999_999_999, -11, -30));
    }

    #[test]
    fn normalization() {
        assert_eq!(Period::new(0, 25, 3).normalized().unwrap(), Period::new(2, 1, 3));
        assert_eq!(Period::new(1, -13, 0).normalized().unwrap(), Period::new(0, -1, 0));
        let err = Period::new(i32::MAX, 12, 0).normalized().unwrap_err();
        assert!(err.is_arithmetic_overflow());
        insta::assert_snapshot!(
            err,
            @"failed to fold months of period into years: integer overflow in addition",
        );
    }

    #[test]
    fn arithmetic() {
        let p = Period::new(1, 2, 3);
        assert_eq!(p + Period::from_days(-5), Period::new(1, 2, -2));
        assert_eq!(-p, Period::new(-1, -2, -3));
        assert_eq!(p.checked_mul(3).unwrap(), Period::new(3, 6, 9));
        assert!(Period::from_years(i32::MIN).checked_neg().unwrap_err().is_arithmetic_overflow());
        assert!(Period::from_weeks(i32::MAX).unwrap_err().is_arithmetic_overflow());
        assert_eq!(Period::from_weeks(2).unwrap(), Period::from_days(14));
    }

    quickcheck::quickcheck! {
        fn prop_between_then_add(d1: Date, d2: Date) -> quickcheck::TestResult {
            if d1 > d2 {
                return quickcheck::TestResult::discard();
            }
            let p = Period::between(d1, d2).unwrap();
            quickcheck::TestResult::from_bool(d1.checked_add(p).unwrap() == d2)
        }

        fn prop_normalized_preserves_total(p: Period) -> bool {
            let n = p.normalized().unwrap();
            n.to_total_months() == p.to_total_months()
                && n.days() == p.days()
                && n.months().abs() < 12
        }

        fn prop_text_roundtrip(p: Period) -> bool {
            p.to_string().parse::<Period>().unwrap() == p
        }
    }
}
