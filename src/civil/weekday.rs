use crate::{error::Error, util::b};

/// A representation for the day of the week.
///
/// The default representation follows ISO 8601. That is, the week starts with
/// Monday and numbering starts at `1`.
///
/// # Example
///
/// ```
/// use calendrical::civil::{date, Weekday};
///
/// assert_eq!(date(2024, 6, 17).weekday(), Weekday::Monday);
/// assert_eq!(Weekday::Sunday.wrapping_add(1), Weekday::Monday);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[allow(missing_docs)]
pub enum Weekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl Weekday {
    /// Convert an offset to a structured `Weekday`.
    ///
    /// The offset should be from Monday and should be one-indexed. So for
    /// example, `1` is Monday and `7` is Sunday.
    ///
    /// # Errors
    ///
    /// This returns an error when the given offset is not in the range
    /// `1..=7`.
    pub fn from_monday_one_offset(offset: i8) -> Result<Weekday, Error> {
        let offset = b::Weekday::check(offset)?;
        Ok(Weekday::from_monday_one_offset_unchecked(offset))
    }

    /// Returns this weekday as an offset from Monday, starting at `1`.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::civil::Weekday;
    ///
    /// assert_eq!(Weekday::Monday.to_monday_one_offset(), 1);
    /// assert_eq!(Weekday::Sunday.to_monday_one_offset(), 7);
    /// ```
    pub fn to_monday_one_offset(self) -> i8 {
        self as i8
    }

    /// Returns the weekday that is `days` after this one, wrapping around
    /// the week. Negative values go backwards.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::civil::Weekday;
    ///
    /// assert_eq!(Weekday::Wednesday.wrapping_add(-3), Weekday::Sunday);
    /// assert_eq!(Weekday::Wednesday.wrapping_add(i64::MAX), Weekday::Wednesday);
    /// ```
    pub fn wrapping_add(self, days: i64) -> Weekday {
        let start = i64::from(self.to_monday_one_offset() - 1);
        let offset = (start + days.rem_euclid(7)) % 7;
        Weekday::from_monday_one_offset_unchecked(offset as i8 + 1)
    }

    /// Callers must ensure the offset is in `1..=7`.
    pub(crate) const fn from_monday_one_offset_unchecked(
        offset: i8,
    ) -> Weekday {
        match offset {
            1 => Weekday::Monday,
            2 => Weekday::Tuesday,
            3 => Weekday::Wednesday,
            4 => Weekday::Thursday,
            5 => Weekday::Friday,
            6 => Weekday::Saturday,
            _ => Weekday::Sunday,
        }
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Weekday {
    fn arbitrary(g: &mut quickcheck::Gen) -> Weekday {
        let offset = u8::arbitrary(g) % 7;
        Weekday::from_monday_one_offset_unchecked(offset as i8 + 1)
    }
}
