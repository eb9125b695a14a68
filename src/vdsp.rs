//! Namespace-style overlay returning owned vectors.
//!
//! These mirror the vendor's higher-level `vDSP.*` entry points: operands
//! are whole contiguous slices, results are freshly allocated, and
//! subtraction takes its operands in natural order.

use accel_kernel::elementwise;
use accel_kernel::reduce;
use accel_kernel::sort::{self, SortOrder};
use accel_traits::Real;
use accel_view::{Result, StridedSlice, StridedSliceMut};

fn binary<T, F>(a: &[T], b: &[T], kernel: F) -> Result<Vec<T>>
where
    T: Real,
    F: FnOnce(&mut StridedSliceMut<'_, T>, &StridedSlice<'_, T>, &StridedSlice<'_, T>) -> Result<()>,
{
    let mut out = vec![T::zero(); a.len()];
    kernel(
        &mut StridedSliceMut::contiguous(&mut out),
        &StridedSlice::contiguous(a),
        &StridedSlice::contiguous(b),
    )?;
    Ok(out)
}

fn scalar<T, F>(s: T, v: &[T], kernel: F) -> Result<Vec<T>>
where
    T: Real,
    F: FnOnce(&mut StridedSliceMut<'_, T>, &StridedSlice<'_, T>, T) -> Result<()>,
{
    let mut out = vec![T::zero(); v.len()];
    kernel(
        &mut StridedSliceMut::contiguous(&mut out),
        &StridedSlice::contiguous(v),
        s,
    )?;
    Ok(out)
}

/// `a[i] + b[i]`.
pub fn add<T: Real>(a: &[T], b: &[T]) -> Result<Vec<T>> {
    binary(a, b, elementwise::add_into::<T>)
}

/// `s + v[i]`.
pub fn add_scalar<T: Real>(s: T, v: &[T]) -> Result<Vec<T>> {
    scalar(s, v, elementwise::offset_into::<T>)
}

/// `a[i] - b[i]`.
pub fn subtract<T: Real>(a: &[T], b: &[T]) -> Result<Vec<T>> {
    binary(a, b, elementwise::sub_into::<T>)
}

/// `a[i] * b[i]`.
pub fn multiply<T: Real>(a: &[T], b: &[T]) -> Result<Vec<T>> {
    binary(a, b, elementwise::mul_into::<T>)
}

/// `s * v[i]`.
pub fn multiply_scalar<T: Real>(s: T, v: &[T]) -> Result<Vec<T>> {
    scalar(s, v, elementwise::scale_into::<T>)
}

/// `a[i] / b[i]`.
pub fn divide<T: Real>(a: &[T], b: &[T]) -> Result<Vec<T>> {
    binary(a, b, elementwise::div_into::<T>)
}

/// Sum of all elements, using the eight-lane strategy above eight elements.
pub fn sum<T: Real>(v: &[T]) -> T {
    reduce::sum(&StridedSlice::contiguous(v))
}

/// Arithmetic mean; NaN for an empty slice.
pub fn mean<T: Real>(v: &[T]) -> T {
    match num_traits::cast::<usize, T>(v.len()) {
        Some(len) if !v.is_empty() => sum(v) / len,
        _ => T::nan(),
    }
}

/// Largest element; `-inf` for an empty slice.
pub fn maximum<T: Real>(v: &[T]) -> T {
    reduce::max(&StridedSlice::contiguous(v))
}

/// Smallest element; `+inf` for an empty slice.
pub fn minimum<T: Real>(v: &[T]) -> T {
    reduce::min(&StridedSlice::contiguous(v))
}

/// `Σ a[i] * b[i]`.
pub fn dot<T: Real>(a: &[T], b: &[T]) -> Result<T> {
    let mut acc = T::zero();
    reduce::dot_accumulate(
        &StridedSlice::contiguous(a),
        &StridedSlice::contiguous(b),
        &mut acc,
    )?;
    Ok(acc)
}

/// Sort `v` in place.
pub fn sort<T: Real>(v: &mut [T], order: SortOrder) -> Result<()> {
    sort::sort(v, order)
}
