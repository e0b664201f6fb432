use core::str::FromStr;

use crate::{
    civil::{Date, DateTime, Time},
    error::{tz::ResolutionError as RE, zoned::Error as E, Error, ErrorContext},
    fmt::{
        temporal::{DEFAULT_DATETIME_PARSER, DEFAULT_DATETIME_PRINTER},
        FmtWrite,
    },
    tz::{LocalOffsets, Offset, TimeZone},
    Duration, Field, Instant, Period, Unit,
};

/// A civil datetime paired with an offset and a time zone.
///
/// A `Zoned` value corresponds to a precise instant in time, along with the
/// civil datetime at which that instant is observed in a particular time
/// zone. The offset is always one of the offsets that the time zone
/// considers valid for the civil datetime, unless the value was explicitly
/// built from a fixed offset zone.
///
/// # Resolution
///
/// Building a `Zoned` from a civil datetime requires picking an offset.
/// Most of the time there is exactly one choice. Around transitions, there
/// might be none or two:
///
/// * In a gap, the civil datetime is moved forward by the length of the gap
/// and the offset after the transition is used.
/// * In an overlap, the preferred offset is used when there is one and it
/// is valid. Otherwise the earlier offset is used.
///
/// [`Zoned::strict`] never adjusts anything and fails instead.
///
/// # Arithmetic
///
/// Adding date units, such as days or months, operates on the civil
/// datetime and then resolves the result again, preferring the current
/// offset. Adding time units, such as hours, operates on the instant. So
/// adding one day across a transition keeps the wall clock time, while
/// adding 24 hours keeps the elapsed time.
///
/// # Example
///
/// ```
/// use calendrical::{civil::date, tz::{Offset, TimeZone, TransitionRules}, Period, Unit, Zoned};
///
/// let paris = TimeZone::new(
///     "Europe/Paris",
///     TransitionRules::new(Offset::constant(1), [(1_206_838_800, Offset::constant(2))])?,
/// )?;
/// let zdt = Zoned::new(date(2008, 3, 29).at(12, 0, 0, 0), paris)?;
/// assert_eq!(zdt.to_string(), "2008-03-29T12:00+01:00[Europe/Paris]");
///
/// let a = zdt.checked_add(Period::from_days(1))?;
/// assert_eq!(a.to_string(), "2008-03-30T12:00+02:00[Europe/Paris]");
/// let b = zdt.checked_add_unit(24, Unit::Hour)?;
/// assert_eq!(b.to_string(), "2008-03-30T13:00+02:00[Europe/Paris]");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Eq, PartialEq)]
pub struct Zoned {
    datetime: DateTime,
    offset: Offset,
    instant: Instant,
    time_zone: TimeZone,
}

impl Zoned {
    /// Creates a zoned datetime by resolving the given civil datetime in
    /// the given time zone.
    ///
    /// # Errors
    ///
    /// This returns an error when the resolved datetime or its instant is
    /// out of range.
    pub fn new(dt: DateTime, time_zone: TimeZone) -> Result<Zoned, Error> {
        Zoned::resolve(dt, time_zone, None)
    }

    /// Creates a zoned datetime by resolving the given civil datetime in
    /// the given time zone, using the given offset in an overlap when it is
    /// valid.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::{civil::date, tz::{Offset, TimeZone, TransitionRules}, Zoned};
    ///
    /// let paris = TimeZone::new(
    ///     "Europe/Paris",
    ///     TransitionRules::new(Offset::constant(2), [(1_224_982_800, Offset::constant(1))])?,
    /// )?;
    /// let dt = date(2008, 10, 26).at(2, 30, 0, 0);
    /// let zdt = Zoned::with_preferred_offset(dt, paris.clone(), Offset::constant(1))?;
    /// assert_eq!(zdt.offset(), Offset::constant(1));
    /// // Not valid here, so it's ignored.
    /// let zdt = Zoned::with_preferred_offset(dt, paris, Offset::constant(5))?;
    /// assert_eq!(zdt.offset(), Offset::constant(2));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn with_preferred_offset(
        dt: DateTime,
        time_zone: TimeZone,
        preferred: Offset,
    ) -> Result<Zoned, Error> {
        Zoned::resolve(dt, time_zone, Some(preferred))
    }

    /// Creates a zoned datetime from its parts, failing when the offset
    /// isn't valid for the civil datetime in the given time zone.
    ///
    /// # Errors
    ///
    /// This returns a zone resolution error when the civil datetime falls
    /// in a gap or when the offset isn't valid for it.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::{civil::date, tz::{Offset, TimeZone, TransitionRules}, Zoned};
    ///
    /// let paris = TimeZone::new(
    ///     "Europe/Paris",
    ///     TransitionRules::new(Offset::constant(1), [(1_206_838_800, Offset::constant(2))])?,
    /// )?;
    /// let dt = date(2008, 3, 30).at(2, 30, 0, 0);
    /// let err = Zoned::strict(dt, Offset::constant(1), paris).unwrap_err();
    /// assert!(err.is_zone_resolution());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn strict(
        dt: DateTime,
        offset: Offset,
        time_zone: TimeZone,
    ) -> Result<Zoned, Error> {
        match time_zone.to_local_offsets(dt) {
            LocalOffsets::Gap(_) => {
                return Err(RE::Gap {
                    datetime: dt,
                    zone: time_zone.diagnostic_name(),
                }
                .into());
            }
            offsets if !offsets.is_valid(offset) => {
                return Err(RE::InvalidOffset {
                    datetime: dt,
                    offset,
                    zone: time_zone.diagnostic_name(),
                }
                .into());
            }
            _ => {}
        }
        Zoned::from_parts(dt, offset, time_zone)
    }

    /// Creates a zoned datetime for the given instant in the given time
    /// zone.
    ///
    /// # Errors
    ///
    /// This returns an error when the civil datetime would be out of range.
    /// This can only happen within a day of [`Instant::MIN`] or
    /// [`Instant::MAX`].
    pub fn from_instant(
        instant: Instant,
        time_zone: TimeZone,
    ) -> Result<Zoned, Error> {
        let offset = time_zone.to_offset(instant);
        let datetime =
            instant.to_datetime(offset).context(E::FailedFromInstant)?;
        Ok(Zoned { datetime, offset, instant, time_zone })
    }

    /// Returns the civil datetime of this zoned datetime.
    #[inline]
    pub fn datetime(&self) -> DateTime {
        self.datetime
    }

    /// Returns the civil date of this zoned datetime.
    #[inline]
    pub fn date(&self) -> Date {
        self.datetime.date()
    }

    /// Returns the civil time of this zoned datetime.
    #[inline]
    pub fn time(&self) -> Time {
        self.datetime.time()
    }

    /// Returns the offset of this zoned datetime.
    #[inline]
    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Returns the time zone of this zoned datetime.
    #[inline]
    pub fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }

    /// Returns the instant of this zoned datetime.
    #[inline]
    pub fn to_instant(&self) -> Instant {
        self.instant
    }

    /// Returns a copy of this zoned datetime using the earlier of the two
    /// valid offsets when it is in an overlap.
    ///
    /// When not in an overlap, this returns an unchanged copy.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::{civil::date, tz::{Offset, TimeZone, TransitionRules}, Zoned};
    ///
    /// let paris = TimeZone::new(
    ///     "Europe/Paris",
    ///     TransitionRules::new(Offset::constant(2), [(1_224_982_800, Offset::constant(1))])?,
    /// )?;
    /// let zdt = Zoned::new(date(2008, 10, 26).at(2, 30, 0, 0), paris)?;
    /// let later = zdt.with_later_offset_at_overlap();
    /// assert_eq!(later.offset(), Offset::constant(1));
    /// assert_eq!(later.datetime(), zdt.datetime());
    /// assert_eq!(later.with_earlier_offset_at_overlap(), zdt);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn with_earlier_offset_at_overlap(&self) -> Zoned {
        match self.time_zone.to_local_offsets(self.datetime) {
            LocalOffsets::Overlap { earlier, .. } => self.switch_offset(earlier),
            _ => self.clone(),
        }
    }

    /// Returns a copy of this zoned datetime using the later of the two
    /// valid offsets when it is in an overlap.
    ///
    /// When not in an overlap, this returns an unchanged copy.
    pub fn with_later_offset_at_overlap(&self) -> Zoned {
        match self.time_zone.to_local_offsets(self.datetime) {
            LocalOffsets::Overlap { later, .. } => self.switch_offset(later),
            _ => self.clone(),
        }
    }

    /// Returns the same instant in a different time zone.
    ///
    /// # Errors
    ///
    /// This returns an error when the civil datetime in the new time zone
    /// would be out of range.
    pub fn with_zone_same_instant(
        &self,
        time_zone: TimeZone,
    ) -> Result<Zoned, Error> {
        Zoned::from_instant(self.instant, time_zone)
    }

    /// Returns the same civil datetime in a different time zone.
    ///
    /// The current offset is kept when it is valid in the new time zone.
    /// Otherwise, the civil datetime is resolved as with [`Zoned::new`].
    pub fn with_zone_same_local(
        &self,
        time_zone: TimeZone,
    ) -> Result<Zoned, Error> {
        Zoned::resolve(self.datetime, time_zone, Some(self.offset))
    }

    /// Returns a copy of this zoned datetime whose time zone is the fixed
    /// offset of this zoned datetime.
    pub fn with_fixed_offset_zone(&self) -> Zoned {
        Zoned {
            datetime: self.datetime,
            offset: self.offset,
            instant: self.instant,
            time_zone: TimeZone::fixed(self.offset),
        }
    }

    /// Add the given period to this zoned datetime.
    ///
    /// The period is added to the civil datetime, which is then resolved
    /// again preferring the current offset.
    pub fn checked_add(&self, period: Period) -> Result<Zoned, Error> {
        self.datetime
            .checked_add(period)
            .and_then(|dt| self.resolve_local(dt))
            .context(E::FailedAddPeriod)
    }

    /// Subtract the given period from this zoned datetime.
    pub fn checked_sub(&self, period: Period) -> Result<Zoned, Error> {
        self.datetime
            .checked_sub(period)
            .and_then(|dt| self.resolve_local(dt))
            .context(E::FailedSubPeriod)
    }

    /// Add the given duration to the instant of this zoned datetime.
    pub fn checked_add_duration(
        &self,
        duration: Duration,
    ) -> Result<Zoned, Error> {
        self.instant
            .checked_add(duration)
            .and_then(|instant| {
                Zoned::from_instant(instant, self.time_zone.clone())
            })
            .context(E::FailedAddDuration)
    }

    /// Subtract the given duration from the instant of this zoned datetime.
    pub fn checked_sub_duration(
        &self,
        duration: Duration,
    ) -> Result<Zoned, Error> {
        self.instant
            .checked_sub(duration)
            .and_then(|instant| {
                Zoned::from_instant(instant, self.time_zone.clone())
            })
            .context(E::FailedSubDuration)
    }

    /// Add an amount of the given unit to this zoned datetime.
    ///
    /// Date units are added to the civil datetime, while time units are
    /// added to the instant.
    pub fn checked_add_unit(
        &self,
        amount: i64,
        unit: Unit,
    ) -> Result<Zoned, Error> {
        let result = if unit.is_date_based() {
            self.datetime
                .checked_add_unit(amount, unit)
                .and_then(|dt| self.resolve_local(dt))
        } else {
            self.instant.checked_add_unit(amount, unit).and_then(|instant| {
                Zoned::from_instant(instant, self.time_zone.clone())
            })
        };
        result.with_context(|| E::FailedAddUnit { unit })
    }

    /// Truncate the civil time of this zoned datetime to the given unit and
    /// resolve the result again, preferring the current offset.
    ///
    /// # Errors
    ///
    /// This returns an error when the unit doesn't evenly divide a day.
    pub fn truncated_to(&self, unit: Unit) -> Result<Zoned, Error> {
        self.resolve_local(self.datetime.truncated_to(unit)?)
    }

    /// Returns the value of the given field.
    ///
    /// Unlike civil datetimes, zoned datetimes support
    /// [`Field::InstantSeconds`] and [`Field::OffsetSeconds`].
    pub fn get(&self, field: Field) -> Result<i64, Error> {
        match field {
            Field::InstantSeconds => Ok(self.instant.as_second()),
            Field::OffsetSeconds => Ok(i64::from(self.offset.seconds())),
            _ => self.datetime.get(field),
        }
    }

    /// Returns a copy of this zoned datetime with the given field changed.
    ///
    /// Setting [`Field::InstantSeconds`] keeps the fractional second and
    /// recomputes the civil datetime. Setting [`Field::OffsetSeconds`] only
    /// has an effect when the new offset is valid for the civil datetime.
    /// Every other field changes the civil datetime, which is then resolved
    /// again preferring the current offset.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::{civil::date, tz::{Offset, TimeZone, TransitionRules}, Field, Zoned};
    ///
    /// let paris = TimeZone::new(
    ///     "Europe/Paris",
    ///     TransitionRules::new(Offset::constant(2), [(1_224_982_800, Offset::constant(1))])?,
    /// )?;
    /// let zdt = Zoned::new(date(2008, 10, 26).at(2, 30, 0, 0), paris)?;
    /// assert_eq!(zdt.with(Field::OffsetSeconds, 3_600)?.offset(), Offset::constant(1));
    /// assert_eq!(zdt.with(Field::OffsetSeconds, 0)?, zdt);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn with(&self, field: Field, value: i64) -> Result<Zoned, Error> {
        match field {
            Field::InstantSeconds => {
                let second = field.check(value)?;
                let instant =
                    Instant::new(second, self.instant.subsec_nanosecond())?;
                Zoned::from_instant(instant, self.time_zone.clone())
            }
            Field::OffsetSeconds => {
                // The range check guarantees this fits in an i32.
                let offset = Offset::from_seconds(field.check(value)? as i32)?;
                let offsets = self.time_zone.to_local_offsets(self.datetime);
                if offset == self.offset || !offsets.is_valid(offset) {
                    return Ok(self.clone());
                }
                Zoned::from_parts(self.datetime, offset, self.time_zone.clone())
            }
            _ => self.resolve_local(self.datetime.with(field, value)?),
        }
    }

    /// Returns the exact duration from this zoned datetime until the given
    /// one.
    pub fn duration_until(&self, other: &Zoned) -> Duration {
        self.instant.until(other.instant)
    }

    /// Resolves a civil datetime in the time zone of this zoned datetime,
    /// preferring the current offset.
    fn resolve_local(&self, dt: DateTime) -> Result<Zoned, Error> {
        Zoned::resolve(dt, self.time_zone.clone(), Some(self.offset))
    }

    /// Switches to an offset known to be valid for the current civil
    /// datetime.
    ///
    /// When the instant at the new offset is out of range, this returns an
    /// unchanged copy.
    fn switch_offset(&self, offset: Offset) -> Zoned {
        match self.datetime.to_instant(offset) {
            Ok(instant) => Zoned {
                datetime: self.datetime,
                offset,
                instant,
                time_zone: self.time_zone.clone(),
            },
            Err(_err) => {
                debug!(
                    "not switching {self:?} to offset {offset}: {_err}",
                );
                self.clone()
            }
        }
    }

    fn resolve(
        dt: DateTime,
        time_zone: TimeZone,
        preferred: Option<Offset>,
    ) -> Result<Zoned, Error> {
        let (dt, offset) = match time_zone.to_local_offsets(dt) {
            LocalOffsets::Normal(offset) => (dt, offset),
            LocalOffsets::Gap(transition) => {
                let shifted = dt
                    .checked_add_duration(transition.duration())
                    .context(E::FailedResolveLocal)?;
                trace!(
                    "moved {dt} in gap of {time_zone} forward to {shifted}",
                );
                (shifted, transition.offset_after())
            }
            LocalOffsets::Overlap { earlier, later } => {
                let offset = match preferred {
                    Some(p) if p == earlier || p == later => p,
                    _ => earlier,
                };
                trace!(
                    "picked offset {offset} for {dt} in overlap of {time_zone}",
                );
                (dt, offset)
            }
        };
        Zoned::from_parts(dt, offset, time_zone)
    }

    fn from_parts(
        datetime: DateTime,
        offset: Offset,
        time_zone: TimeZone,
    ) -> Result<Zoned, Error> {
        let instant =
            datetime.to_instant(offset).context(E::FailedResolveLocal)?;
        Ok(Zoned { datetime, offset, instant, time_zone })
    }
}

impl core::fmt::Debug for Zoned {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::fmt::Display for Zoned {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        DEFAULT_DATETIME_PRINTER
            .print_zoned(self, FmtWrite(f))
            .map_err(|_| core::fmt::Error)
    }
}

/// Parses a zoned datetime with a fixed offset.
///
/// Named time zones require a database, so use
/// [`DateTimeParser::parse_zoned_with`] for those.
///
/// [`DateTimeParser::parse_zoned_with`]: crate::fmt::temporal::DateTimeParser::parse_zoned_with
impl FromStr for Zoned {
    type Err = Error;

    fn from_str(string: &str) -> Result<Zoned, Error> {
        DEFAULT_DATETIME_PARSER.parse_zoned(string)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use crate::{civil::date, tz::TransitionRules};

    use super::*;

    fn paris() -> TimeZone {
        let rules = TransitionRules::new(
            Offset::constant(1),
            [
                (1_206_838_800, Offset::constant(2)),
                (1_224_982_800, Offset::constant(1)),
            ],
        )
        .unwrap();
        TimeZone::new("Europe/Paris", rules).unwrap()
    }

    #[test]
    fn resolve_gap() {
        let zdt = Zoned::new(date(2008, 3, 30).at(2, 30, 0, 0), paris()).unwrap();
        assert_eq!(zdt.datetime(), date(2008, 3, 30).at(3, 30, 0, 0));
        assert_eq!(zdt.offset(), Offset::constant(2));
        assert_eq!(zdt.to_instant().to_string(), "2008-03-30T01:30:00Z");
        // No overlap here, so both are no-ops.
        assert_eq!(zdt.with_earlier_offset_at_overlap(), zdt);
        assert_eq!(zdt.with_later_offset_at_overlap(), zdt);
    }

    #[test]
    fn resolve_overlap() {
        let dt = date(2008, 10, 26).at(2, 30, 0, 0);
        let zdt = Zoned::new(dt, paris()).unwrap();
        assert_eq!(zdt.offset(), Offset::constant(2));
        let later = zdt.with_later_offset_at_overlap();
        assert_eq!(later.offset(), Offset::constant(1));
        assert_eq!(later.datetime(), dt);
        assert_eq!(zdt.duration_until(&later), Duration::from_secs(3_600));
        let earlier = later.with_earlier_offset_at_overlap();
        assert_eq!(earlier.offset(), Offset::constant(2));
        assert_eq!(earlier.datetime(), dt);
    }

    #[test]
    fn strict_errors() {
        insta::assert_snapshot!(
            Zoned::strict(
                date(2008, 3, 30).at(2, 30, 0, 0),
                Offset::constant(1),
                paris(),
            )
            .unwrap_err(),
            @"civil datetime 2008-03-30T02:30 does not exist in time zone `Europe/Paris` because it falls in a gap",
        );
        insta::assert_snapshot!(
            Zoned::strict(
                date(2008, 6, 1).at(12, 0, 0, 0),
                Offset::constant(1),
                paris(),
            )
            .unwrap_err(),
            @"offset +01:00 is not valid for civil datetime 2008-06-01T12:00 in time zone `Europe/Paris`",
        );
        let zdt = Zoned::strict(
            date(2008, 10, 26).at(2, 30, 0, 0),
            Offset::constant(1),
            paris(),
        )
        .unwrap();
        assert_eq!(zdt.offset(), Offset::constant(1));
    }

    #[test]
    fn zone_changes() {
        let zdt = Zoned::new(date(2008, 10, 26).at(2, 30, 0, 0), paris())
            .unwrap()
            .with_later_offset_at_overlap();

        let fixed = zdt.with_fixed_offset_zone();
        assert_eq!(fixed.time_zone(), &TimeZone::fixed(Offset::constant(1)));
        assert_eq!(fixed.to_instant(), zdt.to_instant());

        // The current offset is still valid, so it's kept.
        let back = fixed.with_zone_same_local(paris()).unwrap();
        assert_eq!(back, zdt);

        let utc = zdt.with_zone_same_instant(TimeZone::UTC).unwrap();
        assert_eq!(utc.datetime(), date(2008, 10, 26).at(1, 30, 0, 0));
        assert_eq!(utc.to_instant(), zdt.to_instant());
    }

    #[test]
    fn arithmetic_across_gap() {
        let zdt = Zoned::new(date(2008, 3, 29).at(2, 30, 0, 0), paris()).unwrap();
        let by_day = zdt.checked_add_unit(1, Unit::Day).unwrap();
        assert_eq!(by_day.to_string(), "2008-03-30T03:30+02:00[Europe/Paris]");
        let by_hours = zdt.checked_add_unit(24, Unit::Hour).unwrap();
        assert_eq!(by_hours.to_string(), "2008-03-30T03:30+02:00[Europe/Paris]");
        let by_duration =
            zdt.checked_add_duration(Duration::from_secs(86_400)).unwrap();
        assert_eq!(by_duration, by_hours);
        let back = by_day.checked_sub(Period::from_days(1)).unwrap();
        assert_eq!(back.to_string(), "2008-03-29T03:30+01:00[Europe/Paris]");
    }

    #[test]
    fn arithmetic_in_overlap_keeps_offset() {
        let zdt = Zoned::new(date(2008, 10, 26).at(2, 0, 0, 0), paris())
            .unwrap()
            .with_later_offset_at_overlap();
        let next = zdt.checked_add_unit(30, Unit::Minute).unwrap();
        assert_eq!(next.to_string(), "2008-10-26T02:30+01:00[Europe/Paris]");
        let truncated = next.truncated_to(Unit::Hour).unwrap();
        assert_eq!(truncated, zdt);
    }

    #[test]
    fn fields() {
        let zdt = Zoned::new(date(2008, 6, 30).at(11, 30, 59, 999), paris())
            .unwrap();
        assert_eq!(zdt.get(Field::InstantSeconds).unwrap(), 1_214_818_259);
        assert_eq!(zdt.get(Field::OffsetSeconds).unwrap(), 7_200);
        assert_eq!(zdt.get(Field::HourOfDay).unwrap(), 11);

        let moved = zdt.with(Field::InstantSeconds, 0).unwrap();
        assert_eq!(moved.to_string(), "1970-01-01T01:00:00.000000999+01:00[Europe/Paris]");
        // Not a valid offset for this datetime, so nothing changes.
        assert_eq!(zdt.with(Field::OffsetSeconds, 3_600).unwrap(), zdt);
        let month = zdt.with(Field::MonthOfYear, 2).unwrap();
        assert_eq!(month.to_string(), "2008-02-29T11:30:59.000000999+01:00[Europe/Paris]");
        assert!(zdt.with(Field::OffsetSeconds, 64_801).unwrap_err().is_range());
    }

    #[test]
    fn out_of_range() {
        let err = Zoned::new(DateTime::MIN, TimeZone::fixed(Offset::constant(1)))
            .unwrap_err();
        assert!(err.is_range());
        let zdt = Zoned::from_instant(Instant::MAX, TimeZone::UTC).unwrap();
        assert!(zdt.checked_add_unit(1, Unit::Nanosecond).is_err());
        assert!(Zoned::from_instant(Instant::MAX, TimeZone::fixed(Offset::MAX))
            .is_err());
    }

    #[test]
    fn subtraction_errors_say_subtract() {
        let zdt = Zoned::from_instant(Instant::MIN, TimeZone::UTC).unwrap();
        let err = zdt.checked_sub(Period::from_days(1)).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("failed to subtract period from zoned datetime: "));
        let err = zdt.checked_sub_duration(Duration::from_secs(1)).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("failed to subtract duration from zoned datetime: "));
    }

    quickcheck::quickcheck! {
        fn prop_offset_is_valid(dt: DateTime) -> quickcheck::TestResult {
            let Ok(zdt) = Zoned::new(dt, paris()) else {
                return quickcheck::TestResult::discard();
            };
            let offsets = zdt.time_zone().to_local_offsets(zdt.datetime());
            quickcheck::TestResult::from_bool(offsets.is_valid(zdt.offset()))
        }

        fn prop_instant_roundtrip(instant: Instant) -> quickcheck::TestResult {
            let Ok(zdt) = Zoned::from_instant(instant, paris()) else {
                return quickcheck::TestResult::discard();
            };
            quickcheck::TestResult::from_bool(zdt.to_instant() == instant)
        }
    }
}
