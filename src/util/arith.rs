/*!
Checked integer arithmetic.

Every routine here fails with an arithmetic overflow error when the native
fixed width operation overflows. This is deliberately separate from range
checking: a value can be computed without overflow and still be outside the
range of a calendrical type, in which case callers report a range error
instead.

The floor variants of division and remainder always round toward negative
infinity. That is what makes borrowing from seconds into a negative
nanosecond adjustment (or from days into a negative time of day) work.
*/

use crate::error::{ArithmeticOp, Error};

/// Integer types supported by the arithmetic kernel.
pub(crate) trait Checked: Copy + Sized {
    fn add_exact(self, rhs: Self) -> Result<Self, Error>;
    fn sub_exact(self, rhs: Self) -> Result<Self, Error>;
    fn mul_exact(self, rhs: Self) -> Result<Self, Error>;
    fn neg_exact(self) -> Result<Self, Error>;
}

macro_rules! impl_checked {
    ($($ty:ty),*) => {
        $(
            impl Checked for $ty {
                #[inline]
                fn add_exact(self, rhs: $ty) -> Result<$ty, Error> {
                    self.checked_add(rhs)
                        .ok_or_else(|| Error::overflow(ArithmeticOp::Add))
                }

                #[inline]
                fn sub_exact(self, rhs: $ty) -> Result<$ty, Error> {
                    self.checked_sub(rhs)
                        .ok_or_else(|| Error::overflow(ArithmeticOp::Sub))
                }

                #[inline]
                fn mul_exact(self, rhs: $ty) -> Result<$ty, Error> {
                    self.checked_mul(rhs)
                        .ok_or_else(|| Error::overflow(ArithmeticOp::Mul))
                }

                #[inline]
                fn neg_exact(self) -> Result<$ty, Error> {
                    self.checked_neg()
                        .ok_or_else(|| Error::overflow(ArithmeticOp::Neg))
                }
            }
        )*
    }
}

impl_checked!(i32, i64, i128);

/// Adds two integers, failing on overflow.
#[inline]
pub(crate) fn add<T: Checked>(a: T, b: T) -> Result<T, Error> {
    a.add_exact(b)
}

/// Subtracts `b` from `a`, failing on overflow.
#[inline]
pub(crate) fn sub<T: Checked>(a: T, b: T) -> Result<T, Error> {
    a.sub_exact(b)
}

/// Multiplies two integers, failing on overflow.
#[inline]
pub(crate) fn mul<T: Checked>(a: T, b: T) -> Result<T, Error> {
    a.mul_exact(b)
}

/// Negates an integer, failing on overflow (i.e., for the minimum value).
#[inline]
pub(crate) fn neg<T: Checked>(a: T) -> Result<T, Error> {
    a.neg_exact()
}

/// Converts an `i64` to an `i32`, failing on overflow.
#[inline]
pub(crate) fn to_i32(n: i64) -> Result<i32, Error> {
    i32::try_from(n).map_err(|_| {
        Error::overflow(if n < 0 { ArithmeticOp::Sub } else { ArithmeticOp::Add })
    })
}

/// Converts an `i128` to an `i64`, failing on overflow.
#[inline]
pub(crate) fn to_i64(n: i128) -> Result<i64, Error> {
    i64::try_from(n).map_err(|_| {
        Error::overflow(if n < 0 { ArithmeticOp::Sub } else { ArithmeticOp::Add })
    })
}

/// Returns the largest integer less than or equal to `a / b`.
///
/// Callers must ensure `b` is not zero. Overflow (`i64::MIN / -1`) is not
/// possible with the positive divisors used in this crate.
#[inline]
pub(crate) const fn floor_div(a: i64, b: i64) -> i64 {
    let q = a / b;
    if (a % b != 0) && ((a < 0) != (b < 0)) {
        q - 1
    } else {
        q
    }
}

/// Returns the remainder of `a / b` such that `floor_div(a, b) * b +
/// floor_mod(a, b) == a`.
///
/// The result always has the same sign as `b`.
#[inline]
pub(crate) const fn floor_mod(a: i64, b: i64) -> i64 {
    let r = a % b;
    if r != 0 && ((r < 0) != (b < 0)) {
        r + b
    } else {
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_operations() {
        assert_eq!(add(i64::MAX - 1, 1).unwrap(), i64::MAX);
        assert!(add(i64::MAX, 1).unwrap_err().is_arithmetic_overflow());
        assert!(sub(i64::MIN, 1).unwrap_err().is_arithmetic_overflow());
        assert!(mul(i32::MAX, 2).unwrap_err().is_arithmetic_overflow());
        assert!(neg(i32::MIN).unwrap_err().is_arithmetic_overflow());
        assert_eq!(mul(-7i64, 3).unwrap(), -21);
        assert_eq!(to_i32(i64::from(i32::MIN)).unwrap(), i32::MIN);
        assert!(to_i32(i64::from(i32::MAX) + 1).is_err());
        assert!(to_i64(i128::from(i64::MIN) - 1).is_err());
    }

    #[test]
    fn floor_division() {
        assert_eq!(floor_div(7, 2), 3);
        assert_eq!(floor_div(-7, 2), -4);
        assert_eq!(floor_div(-8, 2), -4);
        assert_eq!(floor_div(7, -2), -4);
        assert_eq!(floor_div(0, 5), 0);
        assert_eq!(floor_div(-1, 1_000_000_000), -1);

        assert_eq!(floor_mod(7, 2), 1);
        assert_eq!(floor_mod(-7, 2), 1);
        assert_eq!(floor_mod(-8, 2), 0);
        assert_eq!(floor_mod(7, -2), -1);
        assert_eq!(floor_mod(-1, 1_000_000_000), 999_999_999);
    }

    quickcheck::quickcheck! {
        fn prop_floor_div_mod_reconstruct(a: i64, b: i64) -> quickcheck::TestResult {
            if b == 0 || (a == i64::MIN && b == -1) {
                return quickcheck::TestResult::discard();
            }
            let (q, r) = (floor_div(a, b), floor_mod(a, b));
            let back = i128::from(q) * i128::from(b) + i128::from(r);
            let sign_ok = r == 0 || (r < 0) == (b < 0);
            quickcheck::TestResult::from_bool(back == i128::from(a) && sign_ok)
        }
    }
}
