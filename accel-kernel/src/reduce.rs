//! Scalar-producing reductions over strided views.

use crate::map::{ensure_same_len, fold};
use accel_traits::Real;
use accel_view::{Result, StridedSlice, StridedSliceMut};

/// Inputs up to this length are summed with a single running total.
pub const SMALL_SUM_LEN: usize = 8;

/// Number of interleaved partial sums used above [`SMALL_SUM_LEN`].
pub const PARTIAL_SUMS: usize = 8;

/// Largest element, starting from negative infinity.
///
/// An empty view returns `-inf`.
pub fn max<T: Real>(a: &StridedSlice<'_, T>) -> T {
    fold(a, T::neg_infinity(), |acc, x| if x > acc { x } else { acc })
}

/// Smallest element, starting from positive infinity.
///
/// An empty view returns `+inf`.
pub fn min<T: Real>(a: &StridedSlice<'_, T>) -> T {
    fold(a, T::infinity(), |acc, x| if x < acc { x } else { acc })
}

/// Add `Σ a[i] * b[i]` into `acc`.
///
/// The existing value of `acc` is kept; zero it first for a plain dot
/// product.
pub fn dot_accumulate<T: Real>(
    a: &StridedSlice<'_, T>,
    b: &StridedSlice<'_, T>,
    acc: &mut T,
) -> Result<()> {
    ensure_same_len(a.len(), b.len())?;
    let total = match (a.as_contiguous(), b.as_contiguous()) {
        (Some(sa), Some(sb)) => sa.iter().zip(sb).fold(*acc, |s, (&x, &y)| s + x * y),
        _ => a.iter().zip(b.iter()).fold(*acc, |s, (&x, &y)| s + x * y),
    };
    *acc = total;
    Ok(())
}

/// Sum of all elements.
///
/// Short inputs are accumulated left to right. Longer inputs spread the
/// first `len - len % 8` elements over eight interleaved partial sums
/// (element `i` goes to lane `i % 8`), sum the tail separately, then add
/// the lanes in order followed by the tail.
pub fn sum<T: Real>(a: &StridedSlice<'_, T>) -> T {
    if a.len() <= SMALL_SUM_LEN {
        return fold(a, T::zero(), |acc, x| acc + x);
    }

    let body = a.len() - a.len() % PARTIAL_SUMS;
    let mut lanes = [T::zero(); PARTIAL_SUMS];
    let mut tail = T::zero();
    for (i, &x) in a.iter().enumerate() {
        if i < body {
            lanes[i % PARTIAL_SUMS] = lanes[i % PARTIAL_SUMS] + x;
        } else {
            tail = tail + x;
        }
    }
    lanes.iter().fold(T::zero(), |acc, &lane| acc + lane) + tail
}

/// Weighted running sum: `c[0] = 0`, `c[i] = c[i - 1] + weight * a[i]`.
///
/// `a[0]` never contributes.
pub fn running_sum_into<T: Real>(
    c: &mut StridedSliceMut<'_, T>,
    a: &StridedSlice<'_, T>,
    weight: T,
) -> Result<()> {
    ensure_same_len(c.len(), a.len())?;
    let mut acc = T::zero();
    for (i, (slot, &x)) in c.iter_mut().zip(a.iter()).enumerate() {
        if i > 0 {
            acc = acc + weight * x;
        }
        *slot = acc;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use accel_view::AccelError;
    use approx::assert_relative_eq;

    #[test]
    fn test_max_min_include_first_element() {
        let data = [9.0f64, 1.0, 2.0, -7.0];
        let v = StridedSlice::contiguous(&data);
        assert_eq!(max(&v), 9.0);
        assert_eq!(min(&v), -7.0);

        let first_is_min = [-7.0f64, 1.0, 2.0];
        assert_eq!(min(&StridedSlice::contiguous(&first_is_min)), -7.0);
    }

    #[test]
    fn test_max_min_empty_sentinels() {
        let empty: [f64; 0] = [];
        let v = StridedSlice::contiguous(&empty);
        assert_eq!(max(&v), f64::NEG_INFINITY);
        assert_eq!(min(&v), f64::INFINITY);
    }

    #[test]
    fn test_max_strided() {
        let data = [1.0f64, 100.0, 3.0, 100.0, 2.0];
        let v = StridedSlice::from_legacy(&data, 2, 3).unwrap();
        assert_eq!(max(&v), 3.0);
    }

    #[test]
    fn test_dot_accumulates() {
        let a = [1.0f64, 2.0, 3.0];
        let b = [4.0f64, 5.0, 6.0];
        let mut acc = 0.0;
        dot_accumulate(&StridedSlice::contiguous(&a), &StridedSlice::contiguous(&b), &mut acc)
            .unwrap();
        assert_eq!(acc, 32.0);
        dot_accumulate(&StridedSlice::contiguous(&a), &StridedSlice::contiguous(&b), &mut acc)
            .unwrap();
        assert_eq!(acc, 64.0);
    }

    #[test]
    fn test_dot_length_mismatch() {
        let a = [1.0f64, 2.0];
        let b = [1.0f64];
        let mut acc = 5.0;
        let err = dot_accumulate(&StridedSlice::contiguous(&a), &StridedSlice::contiguous(&b), &mut acc);
        assert!(matches!(err, Err(AccelError::LengthMismatch(2, 1))));
        assert_eq!(acc, 5.0);
    }

    #[test]
    fn test_sum_small() {
        let data = [-1.5f64, 2.25, 3.6, 0.2, -0.1, -4.3];
        assert_relative_eq!(sum(&StridedSlice::contiguous(&data)), 0.15, epsilon = 1e-12);
    }

    #[test]
    fn test_sum_with_remainder() {
        // 8 lanes of one element each plus a 3-element tail.
        let data: Vec<f64> = (1..=11).map(|x| x as f64).collect();
        assert_eq!(sum(&StridedSlice::contiguous(&data)), 66.0);

        let data: Vec<f64> = (1..=16).map(|x| x as f64).collect();
        assert_eq!(sum(&StridedSlice::contiguous(&data)), 136.0);
    }

    #[test]
    fn test_sum_strided_reverse() {
        let data: Vec<f64> = (0..20).map(|x| x as f64).collect();
        // Every other element, walked backwards: 18, 16, ..., 0.
        let v = StridedSlice::from_legacy(&data, -2, 10).unwrap();
        assert_eq!(sum(&v), 90.0);
    }

    #[test]
    fn test_sum_empty() {
        let empty: [f32; 0] = [];
        assert_eq!(sum(&StridedSlice::contiguous(&empty)), 0.0);
    }

    #[test]
    fn test_running_sum_skips_first() {
        let a = [100.0f64, 1.0, 2.0, 3.0];
        let mut c = [f64::NAN; 4];
        running_sum_into(&mut StridedSliceMut::contiguous(&mut c), &StridedSlice::contiguous(&a), 0.5)
            .unwrap();
        assert_eq!(c, [0.0, 0.5, 1.5, 3.0]);
    }
}
