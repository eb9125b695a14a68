//! Flat vector API with the vendor argument order.
//!
//! Every function takes `(buffer, stride)` pairs followed by the element
//! count `n`, exactly as the vendor routines do, and builds validated
//! strided views before calling the kernel. A negative stride follows the
//! BLAS convention: element 0 is at `(n - 1) * |stride|`.
//!
//! Watch the operand order of [`vsub`] and [`vdiv`]: the subtrahend and
//! the divisor come first.

use accel_kernel::elementwise::{self, ClipCounts};
use accel_kernel::sort::{self, SortOrder};
use accel_kernel::{convert, generate, reduce};
use accel_traits::Real;
use accel_view::{AccelError, Length, Result, Stride, StridedSlice, StridedSliceMut};

/// `c[i] = a[i] + b[i]`.
pub fn vadd<T: Real>(
    a: &[T],
    ia: Stride,
    b: &[T],
    ib: Stride,
    c: &mut [T],
    ic: Stride,
    n: Length,
) -> Result<()> {
    elementwise::add_into(
        &mut StridedSliceMut::from_legacy(c, ic, n)?,
        &StridedSlice::from_legacy(a, ia, n)?,
        &StridedSlice::from_legacy(b, ib, n)?,
    )
}

/// `c[i] = a[i] - b[i]`.
///
/// The subtrahend `b` is the *first* operand.
pub fn vsub<T: Real>(
    b: &[T],
    ib: Stride,
    a: &[T],
    ia: Stride,
    c: &mut [T],
    ic: Stride,
    n: Length,
) -> Result<()> {
    elementwise::sub_into(
        &mut StridedSliceMut::from_legacy(c, ic, n)?,
        &StridedSlice::from_legacy(a, ia, n)?,
        &StridedSlice::from_legacy(b, ib, n)?,
    )
}

/// `c[i] = a[i] * b[i]`.
pub fn vmul<T: Real>(
    a: &[T],
    ia: Stride,
    b: &[T],
    ib: Stride,
    c: &mut [T],
    ic: Stride,
    n: Length,
) -> Result<()> {
    elementwise::mul_into(
        &mut StridedSliceMut::from_legacy(c, ic, n)?,
        &StridedSlice::from_legacy(a, ia, n)?,
        &StridedSlice::from_legacy(b, ib, n)?,
    )
}

/// `c[i] = a[i] / b[i]`.
///
/// The divisor `b` is the *first* operand.
pub fn vdiv<T: Real>(
    b: &[T],
    ib: Stride,
    a: &[T],
    ia: Stride,
    c: &mut [T],
    ic: Stride,
    n: Length,
) -> Result<()> {
    elementwise::div_into(
        &mut StridedSliceMut::from_legacy(c, ic, n)?,
        &StridedSlice::from_legacy(a, ia, n)?,
        &StridedSlice::from_legacy(b, ib, n)?,
    )
}

/// `c[i] = a[i] / b`.
pub fn vsdiv<T: Real>(a: &[T], ia: Stride, b: T, c: &mut [T], ic: Stride, n: Length) -> Result<()> {
    elementwise::sdiv_into(
        &mut StridedSliceMut::from_legacy(c, ic, n)?,
        &StridedSlice::from_legacy(a, ia, n)?,
        b,
    )
}

/// `c[i] = |a[i]|`.
pub fn vabs<T: Real>(a: &[T], ia: Stride, c: &mut [T], ic: Stride, n: Length) -> Result<()> {
    elementwise::abs_into(
        &mut StridedSliceMut::from_legacy(c, ic, n)?,
        &StridedSlice::from_legacy(a, ia, n)?,
    )
}

/// `c[i] = -a[i]`.
pub fn vneg<T: Real>(a: &[T], ia: Stride, c: &mut [T], ic: Stride, n: Length) -> Result<()> {
    elementwise::neg_into(
        &mut StridedSliceMut::from_legacy(c, ic, n)?,
        &StridedSlice::from_legacy(a, ia, n)?,
    )
}

/// `c[i] = a[i]^2`.
pub fn vsq<T: Real>(a: &[T], ia: Stride, c: &mut [T], ic: Stride, n: Length) -> Result<()> {
    elementwise::sq_into(
        &mut StridedSliceMut::from_legacy(c, ic, n)?,
        &StridedSlice::from_legacy(a, ia, n)?,
    )
}

/// `c[i] = a`.
pub fn vfill<T: Real>(a: T, c: &mut [T], ic: Stride, n: Length) -> Result<()> {
    generate::fill(&mut StridedSliceMut::from_legacy(c, ic, n)?, a);
    Ok(())
}

/// `c[i] = 0`.
pub fn vclr<T: Real>(c: &mut [T], ic: Stride, n: Length) -> Result<()> {
    generate::clear(&mut StridedSliceMut::from_legacy(c, ic, n)?);
    Ok(())
}

/// `c[i] = (a + b) * i`.
///
/// `a` is the start and `b` the step; they are added before scaling, which
/// is the vendor's literal behaviour and not `a + b * i`.
pub fn vramp<T: Real>(a: T, b: T, c: &mut [T], ic: Stride, n: Length) -> Result<()> {
    generate::ramp_into(&mut StridedSliceMut::from_legacy(c, ic, n)?, a, b);
    Ok(())
}

/// `c[i] = min(a[i], b[i])`.
pub fn vmin<T: Real>(
    a: &[T],
    ia: Stride,
    b: &[T],
    ib: Stride,
    c: &mut [T],
    ic: Stride,
    n: Length,
) -> Result<()> {
    elementwise::min_into(
        &mut StridedSliceMut::from_legacy(c, ic, n)?,
        &StridedSlice::from_legacy(a, ia, n)?,
        &StridedSlice::from_legacy(b, ib, n)?,
    )
}

/// `c[i] = max(a[i], b[i])`.
pub fn vmax<T: Real>(
    a: &[T],
    ia: Stride,
    b: &[T],
    ib: Stride,
    c: &mut [T],
    ic: Stride,
    n: Length,
) -> Result<()> {
    elementwise::max_into(
        &mut StridedSliceMut::from_legacy(c, ic, n)?,
        &StridedSlice::from_legacy(a, ia, n)?,
        &StridedSlice::from_legacy(b, ib, n)?,
    )
}

/// Clamp `a` into `[low, high]`.
///
/// Output for `low > high` is unspecified.
pub fn vclip<T: Real>(
    a: &[T],
    ia: Stride,
    low: T,
    high: T,
    c: &mut [T],
    ic: Stride,
    n: Length,
) -> Result<()> {
    vclipc(a, ia, low, high, c, ic, n).map(|_| ())
}

/// Clamp `a` into `[low, high]` and count the clipped elements.
///
/// Output for `low > high` is unspecified.
pub fn vclipc<T: Real>(
    a: &[T],
    ia: Stride,
    low: T,
    high: T,
    c: &mut [T],
    ic: Stride,
    n: Length,
) -> Result<ClipCounts> {
    elementwise::clip_into(
        &mut StridedSliceMut::from_legacy(c, ic, n)?,
        &StridedSlice::from_legacy(a, ia, n)?,
        low,
        high,
    )
}

/// `z[i] = x[i] ^ y[i]` over contiguous buffers.
///
/// The output comes first, then the exponents, then the bases. Exponents
/// must be integer-valued; other exponents produce NaN.
pub fn vvpow<T: Real>(z: &mut [T], y: &[T], x: &[T], n: Length) -> Result<()> {
    elementwise::pow_into(
        &mut StridedSliceMut::from_legacy(z, 1, n)?,
        &StridedSlice::from_legacy(y, 1, n)?,
        &StridedSlice::from_legacy(x, 1, n)?,
    )
}

/// Largest of `n` elements; `-inf` when `n == 0`.
pub fn maxv<T: Real>(a: &[T], ia: Stride, n: Length) -> Result<T> {
    Ok(reduce::max(&StridedSlice::from_legacy(a, ia, n)?))
}

/// Smallest of `n` elements; `+inf` when `n == 0`.
pub fn minv<T: Real>(a: &[T], ia: Stride, n: Length) -> Result<T> {
    Ok(reduce::min(&StridedSlice::from_legacy(a, ia, n)?))
}

/// `*c += Σ a[i] * b[i]`.
///
/// The previous value of `c` is kept, so callers zero it for a plain dot
/// product.
pub fn dotpr<T: Real>(
    a: &[T],
    ia: Stride,
    b: &[T],
    ib: Stride,
    c: &mut T,
    n: Length,
) -> Result<()> {
    reduce::dot_accumulate(
        &StridedSlice::from_legacy(a, ia, n)?,
        &StridedSlice::from_legacy(b, ib, n)?,
        c,
    )
}

/// Sum of `n` elements.
pub fn sve<T: Real>(a: &[T], ia: Stride, n: Length) -> Result<T> {
    Ok(reduce::sum(&StridedSlice::from_legacy(a, ia, n)?))
}

/// Running sum: `c[0] = 0`, `c[i] = c[i - 1] + weight * a[i]`.
pub fn vrsum<T: Real>(
    a: &[T],
    ia: Stride,
    weight: T,
    c: &mut [T],
    ic: Stride,
    n: Length,
) -> Result<()> {
    reduce::running_sum_into(
        &mut StridedSliceMut::from_legacy(c, ic, n)?,
        &StridedSlice::from_legacy(a, ia, n)?,
        weight,
    )
}

/// Sort the first `n` elements of `c` in place.
///
/// `order` is the vendor flag: `1` for ascending, `-1` for descending.
pub fn vsort<T: Real>(c: &mut [T], n: Length, order: i32) -> Result<()> {
    let order = SortOrder::try_from(order)?;
    let len = c.len();
    let head = c.get_mut(..n).ok_or(AccelError::OutOfBounds {
        needed: n.saturating_sub(1),
        len,
    })?;
    sort::sort(head, order)
}

/// Narrow double-precision elements to single precision.
pub fn vdpsp(a: &[f64], ia: Stride, c: &mut [f32], ic: Stride, n: Length) -> Result<()> {
    convert::convert_into(
        &mut StridedSliceMut::from_legacy(c, ic, n)?,
        &StridedSlice::from_legacy(a, ia, n)?,
    )
}

/// Widen single-precision elements to double precision.
pub fn vspdp(a: &[f32], ia: Stride, c: &mut [f64], ic: Stride, n: Length) -> Result<()> {
    convert::convert_into(
        &mut StridedSliceMut::from_legacy(c, ic, n)?,
        &StridedSlice::from_legacy(a, ia, n)?,
    )
}
