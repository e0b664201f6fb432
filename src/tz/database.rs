use alloc::{boxed::Box, collections::BTreeMap};

use crate::{
    error::{tz::Error as E, Error},
    tz::{TimeZone, ZoneRules},
};

/// A registry of named time zones.
///
/// This crate doesn't ship any time zone data. Callers populate a database
/// with rules from whatever source they have, and then use it to look up
/// time zones by name, for example when parsing zoned datetimes with
/// [`DateTimeParser::parse_zoned_with`].
///
/// Names are matched exactly.
///
/// [`DateTimeParser::parse_zoned_with`]: crate::fmt::temporal::DateTimeParser::parse_zoned_with
///
/// # Example
///
/// ```
/// use calendrical::tz::{Offset, TimeZoneDatabase, TransitionRules};
///
/// let mut db = TimeZoneDatabase::new();
/// db.add("Etc/Fixed", Offset::constant(3))?;
/// db.add(
///     "Europe/Paris",
///     TransitionRules::new(Offset::constant(1), [(1_206_838_800, Offset::constant(2))])?,
/// )?;
///
/// assert_eq!(db.get("Europe/Paris")?.id(), Some("Europe/Paris"));
/// assert!(db.get("europe/paris").is_err());
/// assert_eq!(db.names().collect::<Vec<_>>(), ["Etc/Fixed", "Europe/Paris"]);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct TimeZoneDatabase {
    zones: BTreeMap<Box<str>, TimeZone>,
}

impl TimeZoneDatabase {
    /// Creates an empty database.
    pub fn new() -> TimeZoneDatabase {
        TimeZoneDatabase::default()
    }

    /// Adds a time zone with the given name and rules to this database and
    /// returns it.
    ///
    /// # Errors
    ///
    /// This returns an error when the name is empty or when a time zone with
    /// the same name already exists.
    pub fn add(
        &mut self,
        name: &str,
        rules: impl ZoneRules + 'static,
    ) -> Result<TimeZone, Error> {
        if self.zones.contains_key(name) {
            return Err(E::DuplicateZone { name: name.into() }.into());
        }
        let tz = TimeZone::new(name, rules)?;
        debug!("adding time zone `{name}` to database");
        self.zones.insert(name.into(), tz.clone());
        Ok(tz)
    }

    /// Returns the time zone with the given name.
    ///
    /// # Errors
    ///
    /// This returns an error when no time zone has the given name.
    pub fn get(&self, name: &str) -> Result<TimeZone, Error> {
        match self.zones.get(name) {
            Some(tz) => Ok(tz.clone()),
            None => {
                warn!("failed to find time zone `{name}` in database");
                Err(E::UnknownZone { name: name.into() }.into())
            }
        }
    }

    /// Returns an iterator over the names in this database in lexicographic
    /// order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.zones.keys().map(|name| &**name)
    }

    /// Returns the number of time zones in this database.
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Returns true when this database has no time zones.
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::tz::Offset;

    use super::*;

    #[test]
    fn add_and_get() {
        let mut db = TimeZoneDatabase::new();
        assert!(db.is_empty());
        let tz = db.add("Test/Zone", Offset::constant(5)).unwrap();
        assert_eq!(db.get("Test/Zone").unwrap(), tz);
        assert_eq!(db.len(), 1);
    }

    #[test]
    fn errors() {
        let mut db = TimeZoneDatabase::new();
        db.add("Test/Zone", Offset::constant(5)).unwrap();
        insta::assert_snapshot!(
            db.add("Test/Zone", Offset::UTC).unwrap_err(),
            @"time zone `Test/Zone` is already in the time zone database",
        );
        insta::assert_snapshot!(
            db.get("Test/Other").unwrap_err(),
            @"failed to find time zone `Test/Other` in time zone database",
        );
        assert!(db.add("", Offset::UTC).is_err());
    }
}
