use alloc::{boxed::Box, string::ToString, sync::Arc};

use crate::{
    civil::DateTime,
    error::{tz::Error as E, Error},
    tz::{LocalOffsets, Offset, ZoneRules},
    Instant,
};

/// A representation of a time zone.
///
/// A time zone is a set of rules for determining the civil time, via an
/// offset from UTC, in a particular region. A `TimeZone` is one of two
/// things:
///
/// * A fixed offset, where there are never any transitions.
/// * A named set of [`ZoneRules`], such as [`TransitionRules`] built from
/// an external source of time zone data.
///
/// A `TimeZone` is cheap to clone. Rules are shared behind an `Arc`.
///
/// Two time zones are equal when they are both fixed with the same offset,
/// or when they both have rules with the same identifier.
///
/// [`TransitionRules`]: crate::tz::TransitionRules
///
/// # Example
///
/// ```
/// use calendrical::{civil::date, tz::{LocalOffsets, Offset, TimeZone, TransitionRules}};
///
/// let rules = TransitionRules::new(
///     Offset::constant(1),
///     [(1_206_838_800, Offset::constant(2))],
/// )?;
/// let tz = TimeZone::new("Europe/Paris", rules)?;
/// assert_eq!(tz.id(), Some("Europe/Paris"));
/// assert_eq!(
///     tz.to_local_offsets(date(2008, 6, 1).at(12, 0, 0, 0)),
///     LocalOffsets::Normal(Offset::constant(2)),
/// );
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone)]
pub struct TimeZone {
    kind: Option<Arc<TimeZoneKind>>,
}

impl TimeZone {
    /// The UTC time zone.
    ///
    /// The offset of this time zone is `0` and never has any transitions.
    pub const UTC: TimeZone = TimeZone { kind: None };

    /// Creates a time zone with a fixed offset.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::tz::{Offset, TimeZone};
    ///
    /// let tz = TimeZone::fixed(Offset::constant(-5));
    /// assert_eq!(tz.to_fixed_offset(), Some(Offset::constant(-5)));
    /// assert_eq!(tz.id(), None);
    /// assert_eq!(tz.to_string(), "-05:00");
    /// assert_eq!(TimeZone::fixed(Offset::UTC), TimeZone::UTC);
    /// ```
    #[inline]
    pub fn fixed(offset: Offset) -> TimeZone {
        if offset == Offset::UTC {
            return TimeZone::UTC;
        }
        TimeZone { kind: Some(Arc::new(TimeZoneKind::Fixed(offset))) }
    }

    /// Creates a named time zone from the given rules.
    ///
    /// # Errors
    ///
    /// This returns an error when the identifier is empty.
    pub fn new(
        id: &str,
        rules: impl ZoneRules + 'static,
    ) -> Result<TimeZone, Error> {
        if id.is_empty() {
            return Err(E::EmptyZoneId.into());
        }
        let kind = TimeZoneKind::Rules { id: id.into(), rules: Box::new(rules) };
        Ok(TimeZone { kind: Some(Arc::new(kind)) })
    }

    /// Returns the identifier of this time zone when it has rules.
    ///
    /// Fixed offset time zones have no identifier.
    pub fn id(&self) -> Option<&str> {
        match self.kind.as_deref() {
            Some(TimeZoneKind::Rules { id, .. }) => Some(&**id),
            _ => None,
        }
    }

    /// Returns the offset of this time zone when it is fixed.
    pub fn to_fixed_offset(&self) -> Option<Offset> {
        match self.kind.as_deref() {
            None => Some(Offset::UTC),
            Some(TimeZoneKind::Fixed(offset)) => Some(*offset),
            Some(TimeZoneKind::Rules { .. }) => None,
        }
    }

    /// Returns true when this time zone never changes its offset.
    pub fn is_fixed(&self) -> bool {
        self.to_fixed_offset().is_some()
    }

    /// Returns the offset in effect in this time zone at the given instant.
    pub fn to_offset(&self, instant: Instant) -> Offset {
        match self.kind.as_deref() {
            None => Offset::UTC,
            Some(TimeZoneKind::Fixed(offset)) => *offset,
            Some(TimeZoneKind::Rules { rules, .. }) => rules.offset_at(instant),
        }
    }

    /// Returns the valid offsets for the given civil datetime in this time
    /// zone.
    pub fn to_local_offsets(&self, dt: DateTime) -> LocalOffsets {
        match self.kind.as_deref() {
            None => LocalOffsets::Normal(Offset::UTC),
            Some(TimeZoneKind::Fixed(offset)) => LocalOffsets::Normal(*offset),
            Some(TimeZoneKind::Rules { rules, .. }) => rules.offsets_at(dt),
        }
    }

    /// Returns the name of this time zone for use in error messages.
    pub(crate) fn diagnostic_name(&self) -> Box<str> {
        self.to_string().into_boxed_str()
    }
}

impl Default for TimeZone {
    fn default() -> TimeZone {
        TimeZone::UTC
    }
}

impl Eq for TimeZone {}

impl PartialEq for TimeZone {
    fn eq(&self, rhs: &TimeZone) -> bool {
        match (self.id(), rhs.id()) {
            (Some(id1), Some(id2)) => id1 == id2,
            (None, None) => self.to_fixed_offset() == rhs.to_fixed_offset(),
            _ => false,
        }
    }
}

impl core::fmt::Debug for TimeZone {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let field: &dyn core::fmt::Debug = match self.kind.as_deref() {
            None => &"UTC",
            Some(TimeZoneKind::Fixed(offset)) => offset,
            Some(TimeZoneKind::Rules { rules, .. }) => rules,
        };
        f.debug_tuple("TimeZone").field(field).finish()
    }
}

impl core::fmt::Display for TimeZone {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.kind.as_deref() {
            None => core::fmt::Display::fmt(&Offset::UTC, f),
            Some(TimeZoneKind::Fixed(offset)) => {
                core::fmt::Display::fmt(offset, f)
            }
            Some(TimeZoneKind::Rules { id, .. }) => f.write_str(id),
        }
    }
}

#[derive(Debug)]
enum TimeZoneKind {
    Fixed(Offset),
    Rules { id: Box<str>, rules: Box<dyn ZoneRules> },
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use crate::{civil::date, tz::TransitionRules};

    use super::*;

    #[test]
    fn equality() {
        let rules = || {
            TransitionRules::new(Offset::UTC, [(0, Offset::constant(1))])
                .unwrap()
        };
        let a = TimeZone::new("A", rules()).unwrap();
        let b = TimeZone::new("B", rules()).unwrap();
        assert_eq!(a, TimeZone::new("A", rules()).unwrap());
        assert_ne!(a, b);
        assert_ne!(a, TimeZone::UTC);
        assert_eq!(TimeZone::UTC, TimeZone::fixed(Offset::ZERO));
        assert_ne!(TimeZone::UTC, TimeZone::fixed(Offset::constant(1)));
    }

    #[test]
    fn fixed_offsets() {
        let tz = TimeZone::fixed(Offset::constant(3));
        let dt = date(2024, 1, 1).at(0, 0, 0, 0);
        assert_eq!(tz.to_offset(Instant::EPOCH), Offset::constant(3));
        assert_eq!(
            tz.to_local_offsets(dt),
            LocalOffsets::Normal(Offset::constant(3)),
        );
        assert_eq!(tz.to_string(), "+03:00");
        assert_eq!(TimeZone::UTC.to_string(), "Z");
        assert!(tz.is_fixed());
    }

    #[test]
    fn empty_id() {
        insta::assert_snapshot!(
            TimeZone::new("", Offset::UTC).unwrap_err(),
            @"time zone identifier must not be empty",
        );
    }
}
