//! Per-element binary and unary kernels.
//!
//! Each kernel writes `c[i] = op(a[i], ...)` for every `i` in the output
//! view, each operand indexed with its own stride. A zero-length output is
//! a no-op. Operands here are named by role (`minuend`, `divisor`, ...);
//! the vendor argument order lives in the root crate's flat API.

use crate::map::{map_into, zip_map2_into};
use accel_traits::Real;
use accel_view::{Result, StridedSlice, StridedSliceMut};

/// `c[i] = a[i] + b[i]`.
pub fn add_into<T: Real>(
    c: &mut StridedSliceMut<'_, T>,
    a: &StridedSlice<'_, T>,
    b: &StridedSlice<'_, T>,
) -> Result<()> {
    zip_map2_into(c, a, b, |x, y| x + y)
}

/// `c[i] = minuend[i] - subtrahend[i]`.
pub fn sub_into<T: Real>(
    c: &mut StridedSliceMut<'_, T>,
    minuend: &StridedSlice<'_, T>,
    subtrahend: &StridedSlice<'_, T>,
) -> Result<()> {
    zip_map2_into(c, minuend, subtrahend, |x, y| x - y)
}

/// `c[i] = a[i] * b[i]`.
pub fn mul_into<T: Real>(
    c: &mut StridedSliceMut<'_, T>,
    a: &StridedSlice<'_, T>,
    b: &StridedSlice<'_, T>,
) -> Result<()> {
    zip_map2_into(c, a, b, |x, y| x * y)
}

/// `c[i] = scalar * a[i]`.
pub fn scale_into<T: Real>(
    c: &mut StridedSliceMut<'_, T>,
    a: &StridedSlice<'_, T>,
    scalar: T,
) -> Result<()> {
    map_into(c, a, |x| x * scalar)
}

/// `c[i] = scalar + a[i]`.
pub fn offset_into<T: Real>(
    c: &mut StridedSliceMut<'_, T>,
    a: &StridedSlice<'_, T>,
    scalar: T,
) -> Result<()> {
    map_into(c, a, |x| x + scalar)
}

/// `c[i] = dividend[i] / divisor[i]`.
pub fn div_into<T: Real>(
    c: &mut StridedSliceMut<'_, T>,
    dividend: &StridedSlice<'_, T>,
    divisor: &StridedSlice<'_, T>,
) -> Result<()> {
    zip_map2_into(c, dividend, divisor, |x, y| x / y)
}

/// `c[i] = a[i] / scalar`.
pub fn sdiv_into<T: Real>(
    c: &mut StridedSliceMut<'_, T>,
    a: &StridedSlice<'_, T>,
    scalar: T,
) -> Result<()> {
    map_into(c, a, |x| x / scalar)
}

/// `c[i] = |a[i]|`.
pub fn abs_into<T: Real>(c: &mut StridedSliceMut<'_, T>, a: &StridedSlice<'_, T>) -> Result<()> {
    map_into(c, a, |x| x.abs())
}

/// `c[i] = -a[i]`.
pub fn neg_into<T: Real>(c: &mut StridedSliceMut<'_, T>, a: &StridedSlice<'_, T>) -> Result<()> {
    map_into(c, a, |x| -x)
}

/// `c[i] = a[i] * a[i]`.
pub fn sq_into<T: Real>(c: &mut StridedSliceMut<'_, T>, a: &StridedSlice<'_, T>) -> Result<()> {
    map_into(c, a, |x| x * x)
}

/// `c[i] = min(a[i], b[i])`.
pub fn min_into<T: Real>(
    c: &mut StridedSliceMut<'_, T>,
    a: &StridedSlice<'_, T>,
    b: &StridedSlice<'_, T>,
) -> Result<()> {
    zip_map2_into(c, a, b, |x, y| x.min(y))
}

/// `c[i] = max(a[i], b[i])`.
pub fn max_into<T: Real>(
    c: &mut StridedSliceMut<'_, T>,
    a: &StridedSlice<'_, T>,
    b: &StridedSlice<'_, T>,
) -> Result<()> {
    zip_map2_into(c, a, b, |x, y| x.max(y))
}

/// How many inputs [`clip_into`] replaced with each bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClipCounts {
    /// Elements strictly below `low`.
    pub low: usize,
    /// Elements strictly above `high`.
    pub high: usize,
}

/// Clamp each element into `[low, high]` and count the replacements.
///
/// The result for `low > high` is unspecified: the kernel does not
/// validate the bounds and callers must not rely on the output.
pub fn clip_into<T: Real>(
    c: &mut StridedSliceMut<'_, T>,
    a: &StridedSlice<'_, T>,
    low: T,
    high: T,
) -> Result<ClipCounts> {
    let mut counts = ClipCounts::default();
    map_into(c, a, |x| {
        if x < low {
            counts.low += 1;
            low
        } else if x > high {
            counts.high += 1;
            high
        } else {
            x
        }
    })?;
    Ok(counts)
}

/// `z[i] = bases[i] ^ exponents[i]` by exponentiation by squaring.
///
/// Exponents are expected to be integer-valued. Non-integral or
/// non-finite exponents produce NaN here; the vendor leaves them undefined.
pub fn pow_into<T: Real>(
    z: &mut StridedSliceMut<'_, T>,
    exponents: &StridedSlice<'_, T>,
    bases: &StridedSlice<'_, T>,
) -> Result<()> {
    zip_map2_into(z, bases, exponents, powi_by_squaring)
}

/// `base ^ exponent` for an integer-valued `exponent`.
///
/// A negative exponent inverts the base; an even exponent squares the base
/// and halves; an odd one folds the base into the accumulator first.
pub fn powi_by_squaring<T: Real>(base: T, exponent: T) -> T {
    if !exponent.is_finite() || exponent.fract() != T::zero() {
        return T::nan();
    }
    let two = T::one() + T::one();
    let (mut b, mut n) = if exponent < T::zero() {
        (T::one() / base, -exponent)
    } else {
        (base, exponent)
    };
    let mut acc = T::one();
    while n > T::zero() {
        if n % two != T::zero() {
            acc = acc * b;
            n = n - T::one();
        }
        b = b * b;
        n = n / two;
    }
    acc
}
