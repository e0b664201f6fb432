use alloc::vec::Vec;

use crate::{
    civil::DateTime,
    error::{tz::Error as E, Error},
    tz::Offset,
    Duration, Instant,
};

/// The rules of a time zone, as seen by this crate.
///
/// This trait is the seam between this crate and a source of time zone
/// data. Implementations answer two questions: which offset is in effect at
/// a particular instant, and which offsets are valid for a particular civil
/// datetime. The former always has exactly one answer. The latter can have
/// zero answers (a gap) or two answers (an overlap) around transitions.
///
/// Implementations must be pure. That is, the same query always gets the
/// same answer.
///
/// [`TransitionRules`] is an implementation built from an explicit list of
/// transitions, and [`Offset`] implements this trait as a zone that never
/// changes its offset.
pub trait ZoneRules: core::fmt::Debug + Send + Sync {
    /// Returns the offset in effect at the given instant.
    fn offset_at(&self, instant: Instant) -> Offset;

    /// Returns the offsets that are valid for the given civil datetime.
    fn offsets_at(&self, dt: DateTime) -> LocalOffsets;
}

impl ZoneRules for Offset {
    fn offset_at(&self, _: Instant) -> Offset {
        *self
    }

    fn offsets_at(&self, _: DateTime) -> LocalOffsets {
        LocalOffsets::Normal(*self)
    }
}

/// The set of valid offsets for a civil datetime in a particular time zone.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LocalOffsets {
    /// The civil datetime has exactly one valid offset.
    Normal(Offset),
    /// The civil datetime was skipped by the given transition. No offset is
    /// valid for it.
    Gap(Transition),
    /// The civil datetime was repeated by a transition, and so occurs twice.
    Overlap {
        /// The offset of the first occurrence, before the transition.
        earlier: Offset,
        /// The offset of the second occurrence, after the transition.
        later: Offset,
    },
}

impl LocalOffsets {
    /// Returns true when the given offset is valid for the civil datetime
    /// these offsets were computed for.
    pub fn is_valid(&self, offset: Offset) -> bool {
        match *self {
            LocalOffsets::Normal(o) => o == offset,
            LocalOffsets::Gap(_) => false,
            LocalOffsets::Overlap { earlier, later } => {
                earlier == offset || later == offset
            }
        }
    }

    /// Returns the earliest valid offset, if one exists.
    pub fn earlier(&self) -> Option<Offset> {
        match *self {
            LocalOffsets::Normal(o) => Some(o),
            LocalOffsets::Gap(_) => None,
            LocalOffsets::Overlap { earlier, .. } => Some(earlier),
        }
    }

    /// Returns the latest valid offset, if one exists.
    pub fn later(&self) -> Option<Offset> {
        match *self {
            LocalOffsets::Normal(o) => Some(o),
            LocalOffsets::Gap(_) => None,
            LocalOffsets::Overlap { later, .. } => Some(later),
        }
    }
}

/// A change of offset in a time zone at a particular instant.
///
/// # Example
///
/// ```
/// use calendrical::{tz::{Offset, Transition}, Duration, Instant};
///
/// let at = Instant::from_epoch_second(1_206_838_800, 0)?;
/// let t = Transition::new(at, Offset::constant(1), Offset::constant(2));
/// assert!(t.is_gap());
/// assert_eq!(t.duration(), Duration::from_secs(3_600));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Transition {
    instant: Instant,
    before: Offset,
    after: Offset,
}

impl Transition {
    /// Creates a new transition from `before` to `after` at the given
    /// instant.
    pub fn new(instant: Instant, before: Offset, after: Offset) -> Transition {
        Transition { instant, before, after }
    }

    /// Returns the instant at which the offset changes.
    pub fn instant(&self) -> Instant {
        self.instant
    }

    /// Returns the offset in effect up to this transition.
    pub fn offset_before(&self) -> Offset {
        self.before
    }

    /// Returns the offset in effect from this transition onwards.
    pub fn offset_after(&self) -> Offset {
        self.after
    }

    /// Returns the change in offset. This is positive for gaps and negative
    /// for overlaps.
    pub fn duration(&self) -> Duration {
        Duration::from_secs(
            i64::from(self.after.seconds()) - i64::from(self.before.seconds()),
        )
    }

    /// Returns true when this transition skips civil time.
    pub fn is_gap(&self) -> bool {
        self.after > self.before
    }

    /// Returns true when this transition repeats civil time.
    pub fn is_overlap(&self) -> bool {
        self.after < self.before
    }

    /// The local epoch second at which the civil times affected by this
    /// transition start.
    fn wall_start(&self) -> i64 {
        self.instant.as_second()
            + i64::from(self.before.seconds().min(self.after.seconds()))
    }

    /// The local epoch second at which the civil times affected by this
    /// transition end, exclusive.
    fn wall_end(&self) -> i64 {
        self.instant.as_second()
            + i64::from(self.before.seconds().max(self.after.seconds()))
    }
}

/// Time zone rules described by an explicit sequence of transitions.
///
/// Before the first transition, the initial offset is in effect. After the
/// last transition, its offset is in effect forever.
///
/// # Example
///
/// ```
/// use calendrical::{civil::date, tz::{LocalOffsets, Offset, TransitionRules, ZoneRules}};
///
/// let rules = TransitionRules::new(
///     Offset::constant(1),
///     [
///         (1_206_838_800, Offset::constant(2)),
///         (1_224_982_800, Offset::constant(1)),
///     ],
/// )?;
/// assert!(matches!(
///     rules.offsets_at(date(2008, 3, 30).at(2, 30, 0, 0)),
///     LocalOffsets::Gap(_),
/// ));
/// assert_eq!(
///     rules.offsets_at(date(2008, 10, 26).at(2, 30, 0, 0)),
///     LocalOffsets::Overlap {
///         earlier: Offset::constant(2),
///         later: Offset::constant(1),
///     },
/// );
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransitionRules {
    initial: Offset,
    transitions: Vec<Transition>,
}

impl TransitionRules {
    /// Creates new rules from an initial offset and a sequence of
    /// transitions, each given as the epoch second at which it occurs and
    /// the offset in effect from then on.
    ///
    /// # Errors
    ///
    /// This returns an error when a transition is outside the supported
    /// range of instants, when the transitions are not in strictly
    /// increasing order, or when a transition doesn't change the offset.
    /// It also returns an error when the civil times skipped or repeated by
    /// one transition reach into those of the next, since every civil
    /// datetime must be affected by at most one transition.
    pub fn new(
        initial: Offset,
        transitions: impl IntoIterator<Item = (i64, Offset)>,
    ) -> Result<TransitionRules, Error> {
        let mut previous: Option<Transition> = None;
        let mut list = Vec::new();
        for (second, after) in transitions {
            let instant = Instant::new(second, 0)?;
            let before = previous.map_or(initial, |p| p.after);
            if let Some(p) = previous {
                if p.instant >= instant {
                    return Err(E::UnsortedTransitions {
                        previous: p.instant.as_second(),
                        next: second,
                    }
                    .into());
                }
            }
            if before == after {
                return Err(E::NoOffsetChange { second }.into());
            }
            let transition = Transition::new(instant, before, after);
            if let Some(p) = previous {
                if transition.wall_start() < p.wall_end() {
                    return Err(E::TransitionsTooClose {
                        previous: p.instant.as_second(),
                        next: second,
                    }
                    .into());
                }
            }
            list.push(transition);
            previous = Some(transition);
        }
        debug!(
            "built time zone rules with initial offset {initial} \
             and {len} transitions",
            len = list.len(),
        );
        Ok(TransitionRules { initial, transitions: list })
    }

    /// Returns the offset in effect before the first transition.
    pub fn initial_offset(&self) -> Offset {
        self.initial
    }

    /// Returns the transitions of these rules in chronological order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }
}

impl ZoneRules for TransitionRules {
    fn offset_at(&self, instant: Instant) -> Offset {
        // Transitions have second precision, so the fractional part of the
        // instant never matters.
        let second = instant.as_second();
        let index = self
            .transitions
            .partition_point(|t| t.instant.as_second() <= second);
        match index.checked_sub(1) {
            None => self.initial,
            Some(i) => self.transitions[i].after,
        }
    }

    fn offsets_at(&self, dt: DateTime) -> LocalOffsets {
        let local = dt.to_local_epoch_second();
        let index = self.transitions.partition_point(|t| t.wall_start() <= local);
        let Some(i) = index.checked_sub(1) else {
            return LocalOffsets::Normal(self.initial);
        };
        let t = self.transitions[i];
        if local >= t.wall_end() {
            return LocalOffsets::Normal(t.after);
        }
        if t.is_gap() {
            trace!("civil datetime {dt} falls in gap at {}", t.instant);
            LocalOffsets::Gap(t)
        } else {
            trace!("civil datetime {dt} falls in overlap at {}", t.instant);
            LocalOffsets::Overlap { earlier: t.before, later: t.after }
        }
    }
}
