//! In-place ascending/descending sort.
//!
//! Inputs whose length fits a 32-bit signed index go to the active
//! backend's library sort. Longer inputs fall back to an in-place Lomuto
//! quicksort. Neither path is stable.

use std::cmp::Ordering;

use crate::backend::{ActiveBackend, KernelBackend};
use accel_traits::Real;
use accel_view::{AccelError, Result};

/// Longest input handed to the library sort.
pub const LIBRARY_SORT_MAX_LEN: usize = i32::MAX as usize;

/// Direction of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Smallest first (legacy flag `1`).
    Ascending,
    /// Largest first (legacy flag `-1`).
    Descending,
}

impl SortOrder {
    /// True if `x` must come strictly before `y`.
    #[inline]
    pub fn precedes<T: Real>(self, x: T, y: T) -> bool {
        match self {
            SortOrder::Ascending => x < y,
            SortOrder::Descending => x > y,
        }
    }

    /// Total order for slice sorting: NaN ranks above every number, so it
    /// lands last when ascending and first when descending.
    #[inline]
    pub(crate) fn compare<T: Real>(self, x: &T, y: &T) -> Ordering {
        let ord = x
            .partial_cmp(y)
            .unwrap_or_else(|| x.is_nan().cmp(&y.is_nan()));
        match self {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    }
}

impl TryFrom<i32> for SortOrder {
    type Error = AccelError;

    fn try_from(flag: i32) -> Result<Self> {
        match flag {
            1 => Ok(SortOrder::Ascending),
            -1 => Ok(SortOrder::Descending),
            other => Err(AccelError::InvalidSortOrder(other)),
        }
    }
}

/// Whether a sort of `len` elements is delegated to the library routine.
#[inline]
pub fn uses_library_sort(len: usize) -> bool {
    len <= LIBRARY_SORT_MAX_LEN
}

/// Sort `data` in place with the active backend.
pub fn sort<T: Real>(data: &mut [T], order: SortOrder) -> Result<()> {
    sort_with_backend::<ActiveBackend, T>(data, order)
}

/// Sort `data` in place, delegating to `B` when the length allows.
pub fn sort_with_backend<B: KernelBackend, T: Real>(data: &mut [T], order: SortOrder) -> Result<()> {
    if data.len() <= 1 {
        return Ok(());
    }
    if uses_library_sort(data.len()) {
        tracing::trace!(len = data.len(), backend = B::NAME, "delegating sort");
        return B::sort(data, order);
    }
    tracing::debug!(len = data.len(), "length exceeds library index range, using quicksort");
    quicksort(data, order);
    Ok(())
}

/// In-place Lomuto quicksort.
///
/// Recurses into the smaller partition and iterates on the larger one, so
/// stack depth is logarithmic even for sorted or all-equal input.
pub fn quicksort<T: Real>(mut data: &mut [T], order: SortOrder) {
    while data.len() > 1 {
        let pivot = partition(data, order);
        let (left, rest) = std::mem::take(&mut data).split_at_mut(pivot);
        let right = &mut rest[1..];
        if left.len() < right.len() {
            quicksort(left, order);
            data = right;
        } else {
            quicksort(right, order);
            data = left;
        }
    }
}

/// Partition around the last element; returns the pivot's final index.
fn partition<T: Real>(data: &mut [T], order: SortOrder) -> usize {
    let last = data.len() - 1;
    let pivot = data[last];
    let mut store = 0;
    for j in 0..last {
        if order.precedes(data[j], pivot) {
            data.swap(store, j);
            store += 1;
        }
    }
    data.swap(store, last);
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::NativeBackend;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn is_sorted<T: Real>(data: &[T], order: SortOrder) -> bool {
        data.windows(2).all(|w| !order.precedes(w[1], w[0]))
    }

    #[test]
    fn test_order_flag() {
        assert_eq!(SortOrder::try_from(1).unwrap(), SortOrder::Ascending);
        assert_eq!(SortOrder::try_from(-1).unwrap(), SortOrder::Descending);
        assert!(matches!(
            SortOrder::try_from(0),
            Err(AccelError::InvalidSortOrder(0))
        ));
    }

    #[test]
    fn test_routing_boundary() {
        assert!(uses_library_sort(0));
        assert!(uses_library_sort(LIBRARY_SORT_MAX_LEN));
        assert!(!uses_library_sort(LIBRARY_SORT_MAX_LEN + 1));
    }

    #[test]
    fn test_partition_places_pivot() {
        let mut data = [5.0f64, 1.0, 4.0, 2.0, 3.0];
        let p = partition(&mut data, SortOrder::Ascending);
        assert_eq!(p, 2);
        assert_eq!(data[p], 3.0);
        assert!(data[..p].iter().all(|&x| x < 3.0));
        assert!(data[p + 1..].iter().all(|&x| x >= 3.0));
    }

    #[test]
    fn test_quicksort_degenerate_inputs() {
        let mut equal = vec![2.5f64; 1000];
        quicksort(&mut equal, SortOrder::Ascending);
        assert!(equal.iter().all(|&x| x == 2.5));

        let mut ascending: Vec<f64> = (0..2000).map(|x| x as f64).collect();
        quicksort(&mut ascending, SortOrder::Ascending);
        assert!(is_sorted(&ascending, SortOrder::Ascending));

        let mut descending: Vec<f64> = (0..2000).rev().map(|x| x as f64).collect();
        quicksort(&mut descending, SortOrder::Ascending);
        assert!(is_sorted(&descending, SortOrder::Ascending));
        quicksort(&mut descending, SortOrder::Descending);
        assert!(is_sorted(&descending, SortOrder::Descending));
    }

    #[test]
    fn test_quicksort_matches_library_sort() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in [0usize, 1, 2, 3, 17, 256] {
            let data: Vec<f64> = (0..len).map(|_| rng.gen_range(-5..5) as f64).collect();
            for order in [SortOrder::Ascending, SortOrder::Descending] {
                let mut fallback = data.clone();
                quicksort(&mut fallback, order);
                let mut library = data.clone();
                sort_with_backend::<NativeBackend, f64>(&mut library, order).unwrap();
                assert_eq!(fallback, library);
            }
        }
    }

    #[test]
    fn test_library_sort_with_nan() {
        let mut rng = StdRng::seed_from_u64(64);
        for _ in 0..50 {
            let data: Vec<f64> = (0..64)
                .map(|i| if i % 5 == 0 { f64::NAN } else { rng.gen_range(-1.0..1.0) })
                .collect();
            let nan_count = data.iter().filter(|x| x.is_nan()).count();

            let mut ascending = data.clone();
            sort_with_backend::<NativeBackend, f64>(&mut ascending, SortOrder::Ascending).unwrap();
            let (numbers, nans) = ascending.split_at(64 - nan_count);
            assert!(nans.iter().all(|x| x.is_nan()));
            assert!(is_sorted(numbers, SortOrder::Ascending));

            let mut descending = data.clone();
            sort_with_backend::<NativeBackend, f64>(&mut descending, SortOrder::Descending).unwrap();
            let (nans, numbers) = descending.split_at(nan_count);
            assert!(nans.iter().all(|x| x.is_nan()));
            assert!(is_sorted(numbers, SortOrder::Descending));
        }
    }

    #[test]
    fn test_quicksort_with_nan_terminates() {
        let mut data = [1.0f64, f64::NAN, -2.0, f64::NAN, 0.5];
        quicksort(&mut data, SortOrder::Ascending);
        assert_eq!(data.iter().filter(|x| x.is_nan()).count(), 2);
    }

    #[test]
    fn test_sort_f32() {
        let mut data = [0.5f32, -3.0, 9.0, 0.0];
        sort(&mut data, SortOrder::Descending).unwrap();
        assert_eq!(data, [9.0, 0.5, 0.0, -3.0]);
    }
}
