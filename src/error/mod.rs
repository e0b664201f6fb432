use alloc::sync::Arc;

pub(crate) mod civil;
pub(crate) mod duration;
pub(crate) mod fmt;
pub(crate) mod tz;
pub(crate) mod unit;
pub(crate) mod zoned;

/// An error that can occur in this crate.
///
/// Errors fall into a small number of disjoint categories, each of which
/// can be queried with a predicate:
///
/// * [`Error::is_arithmetic_overflow`] for when a fixed width integer
/// operation overflowed. For example, adding `i64::MAX` seconds to an
/// instant.
/// * [`Error::is_range`] for when a value is representable but is not a
/// valid calendrical value. For example, February 30th, or a year outside
/// of `-999_999_999..=999_999_999`.
/// * [`Error::is_zone_resolution`] for when a civil datetime and offset
/// are not a valid combination in a particular time zone.
/// * [`Error::is_parse`] for when text could not be parsed. The byte
/// offset at which parsing failed is available via
/// [`Error::parse_position`].
/// * [`Error::is_unsupported`] for when a unit or field was given to an
/// operation that doesn't support it.
///
/// # Design
///
/// Only one error type exists for all operations in this crate. Errors
/// form a causal chain: higher level operations attach context to lower
/// level failures. The `Display` impl renders the whole chain, starting
/// with the highest level context and ending with the root cause. The
/// predicates above always look at the root cause, so attaching context
/// never changes which category an error belongs to.
#[derive(Clone)]
pub struct Error {
    /// The internal representation of an error.
    ///
    /// This is in an `Arc` to make an `Error` cheap to clone. It also keeps
    /// the size of an error equal to one word.
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Creates a new error value from `core::fmt::Arguments`.
    ///
    /// It is expected to use [`format_args!`](format_args) from
    /// Rust's standard library (available in `core`) to create a
    /// `core::fmt::Arguments`.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::Error;
    ///
    /// let err = Error::from_args(format_args!("something failed"));
    /// assert_eq!(err.to_string(), "something failed");
    /// ```
    pub fn from_args<'a>(message: core::fmt::Arguments<'a>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::from_args(message)))
    }

    /// Returns true when this error was caused by a fixed width integer
    /// operation overflowing.
    ///
    /// This never returns `true` for an error that also reports `true` for
    /// [`Error::is_range`].
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::Instant;
    ///
    /// let err = Instant::MAX.checked_add_seconds(i64::MAX).unwrap_err();
    /// assert!(err.is_arithmetic_overflow());
    /// assert!(!err.is_range());
    ///
    /// let err = Instant::MAX.checked_add_seconds(1).unwrap_err();
    /// assert!(!err.is_arithmetic_overflow());
    /// assert!(err.is_range());
    /// ```
    pub fn is_arithmetic_overflow(&self) -> bool {
        matches!(*self.root().kind(), ErrorKind::Arithmetic(_))
    }

    /// Returns true when this error originated as a result of a value being
    /// outside of its calendrically valid range.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::civil::Date;
    ///
    /// assert!(Date::new(2025, 2, 29).unwrap_err().is_range());
    /// assert!(Date::new(2025, 13, 1).unwrap_err().is_range());
    /// ```
    pub fn is_range(&self) -> bool {
        matches!(*self.root().kind(), ErrorKind::Range(_))
    }

    /// Returns true when this error originated from a civil datetime and
    /// offset that are not valid together in a time zone.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::{civil::date, tz::{Offset, TimeZone}, Zoned};
    ///
    /// let dt = date(2024, 6, 1).at(12, 0, 0, 0);
    /// let err = Zoned::strict(dt, Offset::constant(2), TimeZone::UTC)
    ///     .unwrap_err();
    /// assert!(err.is_zone_resolution());
    /// ```
    pub fn is_zone_resolution(&self) -> bool {
        matches!(*self.root().kind(), ErrorKind::TzResolution(_))
    }

    /// Returns true when this error occurred while parsing text.
    ///
    /// Unlike the other predicates, this checks every error in the causal
    /// chain. A parse error may be caused by, say, a range error, in which
    /// case both this and [`Error::is_range`] return `true`.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::civil::Date;
    ///
    /// let err = "2024-13-01".parse::<Date>().unwrap_err();
    /// assert!(err.is_parse());
    /// assert!(err.is_range());
    /// assert_eq!(err.parse_position(), Some(5));
    /// ```
    pub fn is_parse(&self) -> bool {
        self.parse_position().is_some()
    }

    /// Returns the byte offset into the input at which parsing failed.
    ///
    /// This returns `None` when this error did not occur while parsing.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::civil::Time;
    ///
    /// let err = "12:3".parse::<Time>().unwrap_err();
    /// assert_eq!(err.parse_position(), Some(3));
    /// ```
    pub fn parse_position(&self) -> Option<usize> {
        self.chain().find_map(|err| match *err.kind() {
            ErrorKind::Parse(ref err) => Some(err.position()),
            _ => None,
        })
    }

    /// Returns true when an operation was given a unit or a field that it
    /// does not support.
    ///
    /// # Example
    ///
    /// ```
    /// use calendrical::{civil::time, Unit};
    ///
    /// let err = time(12, 30, 0, 0).truncated_to(Unit::Week).unwrap_err();
    /// assert!(err.is_unsupported());
    /// ```
    pub fn is_unsupported(&self) -> bool {
        matches!(*self.root().kind(), ErrorKind::Unsupported(_))
    }
}

impl Error {
    /// Creates a new error indicating that a `given` value is out of the
    /// specified `min..=max` range. The given `what` label is used in the
    /// error message as a human readable description of what exactly is out
    /// of range. (e.g., "seconds")
    #[inline(never)]
    #[cold]
    pub(crate) fn range(
        what: &'static str,
        given: impl Into<i128>,
        min: impl Into<i128>,
        max: impl Into<i128>,
    ) -> Error {
        Error::from(ErrorKind::Range(RangeError::new(what, given, min, max)))
    }

    /// Creates a new error indicating that a fixed width integer operation
    /// overflowed.
    #[inline(never)]
    #[cold]
    pub(crate) fn overflow(op: ArithmeticOp) -> Error {
        Error::from(ErrorKind::Arithmetic(ArithmeticError { op }))
    }

    pub(crate) fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let kind = match consequent.inner {
            None => ErrorKind::Unknown,
            Some(inner) => match Arc::try_unwrap(inner) {
                Ok(inner) => {
                    debug_assert!(
                        inner.cause.is_none(),
                        "cause of consequence must be `None`"
                    );
                    inner.kind
                }
                // A shared consequent can't be given a cause without
                // clobbering it for every other owner. So we keep the
                // original cause and drop the context.
                Err(_) => return self,
            },
        };
        Error { inner: Some(Arc::new(ErrorInner { kind, cause: Some(self) })) }
    }

    /// Returns the root error in this chain.
    fn root(&self) -> &Error {
        let mut err = self;
        while let Some(cause) =
            err.inner.as_ref().and_then(|inner| inner.cause.as_ref())
        {
            err = cause;
        }
        err
    }

    /// Returns a chain of error values.
    ///
    /// This starts with the most recent error added to the chain. That is,
    /// the highest level context. The last error in the chain is always the
    /// "root" cause. That is, the error closest to the point where something
    /// has gone wrong.
    ///
    /// The iterator returned is guaranteed to yield at least one error.
    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    /// Returns the kind of this error.
    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f
                    .debug_struct("Error")
                    .field("kind", &"None")
                    .finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

/// The underlying kind of a [`Error`].
#[derive(Debug)]
enum ErrorKind {
    Adhoc(AdhocError),
    Arithmetic(ArithmeticError),
    Civil(self::civil::Error),
    Duration(self::duration::Error),
    Fmt(self::fmt::Error),
    Parse(self::fmt::ParseError),
    Range(RangeError),
    Tz(self::tz::Error),
    TzResolution(self::tz::ResolutionError),
    Unknown,
    Unsupported(self::unit::Error),
    Zoned(self::zoned::Error),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match *self {
            Adhoc(ref msg) => msg.fmt(f),
            Arithmetic(ref err) => err.fmt(f),
            Civil(ref err) => err.fmt(f),
            Duration(ref err) => err.fmt(f),
            Fmt(ref err) => err.fmt(f),
            Parse(ref err) => err.fmt(f),
            Range(ref err) => err.fmt(f),
            Tz(ref err) => err.fmt(f),
            TzResolution(ref err) => err.fmt(f),
            Unknown => f.write_str("unknown calendrical error"),
            Unsupported(ref err) => err.fmt(f),
            Zoned(ref err) => err.fmt(f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { inner: Some(Arc::new(ErrorInner { kind, cause: None })) }
    }
}

/// A generic error message.
///
/// This supports the `Error::from_args` public API, which permits callers
/// to manufacture their own `Error` values from an arbitrary message.
struct AdhocError {
    message: alloc::boxed::Box<str>,
}

impl AdhocError {
    fn from_args<'a>(message: core::fmt::Arguments<'a>) -> AdhocError {
        use alloc::string::ToString;

        let message = message.to_string().into_boxed_str();
        AdhocError { message }
    }
}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.message, f)
    }
}

impl core::fmt::Debug for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.message, f)
    }
}

/// The operation that overflowed in an [`ArithmeticError`].
#[derive(Clone, Copy, Debug)]
pub(crate) enum ArithmeticOp {
    Add,
    Sub,
    Mul,
    Div,
    Neg,
}

/// An error that occurs when a fixed width integer operation overflows.
#[derive(Debug)]
struct ArithmeticError {
    op: ArithmeticOp,
}

impl core::fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let op = match self.op {
            ArithmeticOp::Add => "addition",
            ArithmeticOp::Sub => "subtraction",
            ArithmeticOp::Mul => "multiplication",
            ArithmeticOp::Div => "division",
            ArithmeticOp::Neg => "negation",
        };
        write!(f, "integer overflow in {op}")
    }
}

/// An error that occurs when an input value is out of bounds.
///
/// The error message produced by this type will include a name describing
/// which input was out of bounds, the value given and its minimum and maximum
/// allowed values.
#[derive(Debug)]
struct RangeError {
    what: &'static str,
    given: i128,
    min: i128,
    max: i128,
}

impl RangeError {
    fn new(
        what: &'static str,
        given: impl Into<i128>,
        min: impl Into<i128>,
        max: impl Into<i128>,
    ) -> RangeError {
        RangeError {
            what,
            given: given.into(),
            min: min.into(),
            max: max.into(),
        }
    }
}

impl core::fmt::Display for RangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let RangeError { what, given, min, max } = *self;
        write!(
            f,
            "parameter '{what}' with value {given} \
             is not in the required range of {min}..={max}",
        )
    }
}

/// A simple trait to encapsulate automatic conversion to `Error`.
///
/// This trait basically exists to make `Error::context` work without needing
/// to rely on public `From` impls.
pub(crate) trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

/// A trait for contextualizing error values.
///
/// This makes it easy to contextualize either `Error` or `Result<T, Error>`.
/// Specifically, in the latter case, it absolves one of the need to call
/// `map_err` everywhere one wants to add context to an error.
pub(crate) trait ErrorContext<T, E> {
    /// Contextualize the given consequent error with this (`self`) error as
    /// the cause.
    ///
    /// This is equivalent to saying that "consequent is caused by self."
    fn context(self, consequent: impl IntoError) -> Result<T, Error>;

    /// Like `context`, but hides error construction within a closure.
    ///
    /// This is useful when the consequent error allocates, since the
    /// closure is only called on the error path.
    fn with_context<C: IntoError>(
        self,
        consequent: impl FnOnce() -> C,
    ) -> Result<T, Error>;
}

impl<T, E> ErrorContext<T, E> for Result<T, E>
where
    E: IntoError,
{
    fn context(self, consequent: impl IntoError) -> Result<T, Error> {
        self.map_err(|err| {
            err.into_error().context_impl(consequent.into_error())
        })
    }

    fn with_context<C: IntoError>(
        self,
        consequent: impl FnOnce() -> C,
    ) -> Result<T, Error> {
        self.map_err(|err| {
            err.into_error().context_impl(consequent().into_error())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // We test that our 'Error' type is the size we expect. This isn't an API
    // guarantee, but if the size increases, we really want to make sure we
    // decide to do that intentionally.
    #[test]
    fn error_size() {
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn chain_renders_outermost_first() {
        let err = Error::range("month", 13, 1, 12)
            .context(Error::from_args(format_args!("failed to build date")));
        insta::assert_snapshot!(
            err,
            @"failed to build date: parameter 'month' with value 13 is not in the required range of 1..=12",
        );
        assert!(err.is_range());
        assert!(!err.is_arithmetic_overflow());
        assert!(!err.is_parse());
    }

    #[test]
    fn overflow_is_not_range() {
        let err = Error::overflow(ArithmeticOp::Mul);
        insta::assert_snapshot!(err, @"integer overflow in multiplication");
        assert!(err.is_arithmetic_overflow());
        assert!(!err.is_range());
    }
}
