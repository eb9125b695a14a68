//! One-dimensional strided views over borrowed buffers.
//!
//! - [`StridedSlice`]: immutable `(offset, stride, len)` view
//! - [`StridedSliceMut`]: mutable counterpart
//!
//! Both validate their extent once in the constructor. Everything after
//! that (iteration, element access) stays inside the borrowed slice
//! without further checks on the kernel side.

use std::iter::{Rev, StepBy, Take};
use std::ops::{Index, IndexMut};
use std::slice;

use crate::{AccelError, Result};

// ============================================================================
// Validation helpers
// ============================================================================

/// Validate that every index `offset + i * stride` for `i < len` lies in
/// `[0, data_len)`.
fn validate_extent(data_len: usize, offset: usize, stride: isize, len: usize) -> Result<()> {
    if stride == 0 {
        return Err(AccelError::ZeroStride);
    }
    if len == 0 {
        return Ok(());
    }
    let start = isize::try_from(offset).map_err(|_| AccelError::OffsetOverflow)?;
    let steps = isize::try_from(len - 1).map_err(|_| AccelError::OffsetOverflow)?;
    let end = stride
        .checked_mul(steps)
        .and_then(|span| start.checked_add(span))
        .ok_or(AccelError::OffsetOverflow)?;
    let (min_index, max_index) = if end >= start { (start, end) } else { (end, start) };
    if min_index < 0 {
        return Err(AccelError::OffsetOverflow);
    }
    if max_index as usize >= data_len {
        return Err(AccelError::OutOfBounds {
            needed: max_index as usize,
            len: data_len,
        });
    }
    Ok(())
}

/// Offset of element 0 under the BLAS increment convention: a negative
/// stride starts at the far end of the extent and walks towards index 0.
fn legacy_offset(stride: isize, len: usize) -> Result<usize> {
    if stride >= 0 || len == 0 {
        return Ok(0);
    }
    stride
        .unsigned_abs()
        .checked_mul(len - 1)
        .ok_or(AccelError::OffsetOverflow)
}

// ============================================================================
// Iterators
// ============================================================================

enum Walk<I> {
    Forward(Take<StepBy<I>>),
    Backward(Take<StepBy<Rev<I>>>),
}

impl<I> Walk<I>
where
    I: DoubleEndedIterator + ExactSizeIterator,
{
    #[inline]
    fn next_item(&mut self) -> Option<I::Item> {
        match self {
            Walk::Forward(it) => it.next(),
            Walk::Backward(it) => it.next(),
        }
    }

    #[inline]
    fn hint(&self) -> (usize, Option<usize>) {
        match self {
            Walk::Forward(it) => it.size_hint(),
            Walk::Backward(it) => it.size_hint(),
        }
    }
}

/// Iterator over the elements of a [`StridedSlice`], in logical order.
pub struct StridedIter<'a, T> {
    walk: Walk<slice::Iter<'a, T>>,
}

impl<'a, T> Iterator for StridedIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.walk.next_item()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.walk.hint()
    }
}

impl<T> ExactSizeIterator for StridedIter<'_, T> {}

/// Mutable iterator over the elements of a [`StridedSliceMut`].
pub struct StridedIterMut<'a, T> {
    walk: Walk<slice::IterMut<'a, T>>,
}

impl<'a, T> Iterator for StridedIterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.walk.next_item()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.walk.hint()
    }
}

impl<T> ExactSizeIterator for StridedIterMut<'_, T> {}

// ============================================================================
// StridedSlice
// ============================================================================

/// An immutable strided view over a borrowed buffer.
///
/// # Example
/// ```
/// use accel_view::StridedSlice;
///
/// let data = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
/// let view = StridedSlice::new(&data, 1, 3, 2).unwrap();
/// assert_eq!(view.get(0), Some(&1.0));
/// assert_eq!(view.get(1), Some(&4.0));
/// assert_eq!(view.get(2), None);
/// ```
#[derive(Debug)]
pub struct StridedSlice<'a, T> {
    data: &'a [T],
    offset: usize,
    stride: isize,
    len: usize,
}

impl<T> Clone for StridedSlice<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StridedSlice<'_, T> {}

impl<'a, T> StridedSlice<'a, T> {
    /// Create a view whose element 0 is `data[offset]`.
    ///
    /// # Errors
    /// Returns an error if the stride is zero or the view would reach
    /// outside `data`.
    pub fn new(data: &'a [T], offset: usize, stride: isize, len: usize) -> Result<Self> {
        validate_extent(data.len(), offset, stride, len)?;
        Ok(Self {
            data,
            offset,
            stride,
            len,
        })
    }

    /// Create a view from a vendor-style `(pointer, stride, length)` triple.
    ///
    /// A positive stride starts at `data[0]`; a negative stride starts at
    /// `data[(len - 1) * |stride|]`, matching the BLAS increment convention.
    pub fn from_legacy(data: &'a [T], stride: isize, len: usize) -> Result<Self> {
        let offset = legacy_offset(stride, len)?;
        Self::new(data, offset, stride, len)
    }

    /// View the whole slice with unit stride.
    pub fn contiguous(data: &'a [T]) -> Self {
        Self {
            data,
            offset: 0,
            stride: 1,
            len: data.len(),
        }
    }

    /// Number of logical elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the view has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn physical(&self, index: usize) -> usize {
        (self.offset as isize + index as isize * self.stride) as usize
    }

    /// Element `index`, or `None` past the end of the view.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&'a T> {
        if index < self.len {
            Some(&self.data[self.physical(index)])
        } else {
            None
        }
    }

    /// The elements as a plain slice when the stride is 1.
    #[inline]
    pub fn as_contiguous(&self) -> Option<&'a [T]> {
        if self.len == 0 {
            Some(&self.data[..0])
        } else if self.stride == 1 {
            Some(&self.data[self.offset..self.offset + self.len])
        } else {
            None
        }
    }

    /// Iterate over the elements in logical order.
    pub fn iter(&self) -> StridedIter<'a, T> {
        let data: &'a [T] = self.data;
        let step = self.stride.unsigned_abs();
        let walk = if self.len == 0 {
            Walk::Forward(data[..0].iter().step_by(1).take(0))
        } else if self.stride > 0 {
            Walk::Forward(data[self.offset..].iter().step_by(step).take(self.len))
        } else {
            Walk::Backward(
                data[..=self.offset]
                    .iter()
                    .rev()
                    .step_by(step)
                    .take(self.len),
            )
        };
        StridedIter { walk }
    }
}

// ============================================================================
// StridedSliceMut
// ============================================================================

/// A mutable strided view over a borrowed buffer.
#[derive(Debug)]
pub struct StridedSliceMut<'a, T> {
    data: &'a mut [T],
    offset: usize,
    stride: isize,
    len: usize,
}

impl<'a, T> StridedSliceMut<'a, T> {
    /// Create a mutable view whose element 0 is `data[offset]`.
    ///
    /// # Errors
    /// Returns an error if the stride is zero or the view would reach
    /// outside `data`.
    pub fn new(data: &'a mut [T], offset: usize, stride: isize, len: usize) -> Result<Self> {
        validate_extent(data.len(), offset, stride, len)?;
        Ok(Self {
            data,
            offset,
            stride,
            len,
        })
    }

    /// Mutable counterpart of [`StridedSlice::from_legacy`].
    pub fn from_legacy(data: &'a mut [T], stride: isize, len: usize) -> Result<Self> {
        let offset = legacy_offset(stride, len)?;
        Self::new(data, offset, stride, len)
    }

    /// View the whole slice with unit stride.
    pub fn contiguous(data: &'a mut [T]) -> Self {
        let len = data.len();
        Self {
            data,
            offset: 0,
            stride: 1,
            len,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn physical(&self, index: usize) -> usize {
        (self.offset as isize + index as isize * self.stride) as usize
    }

    /// Reborrow as an immutable view with the same layout.
    pub fn as_view(&self) -> StridedSlice<'_, T> {
        StridedSlice {
            data: &*self.data,
            offset: self.offset,
            stride: self.stride,
            len: self.len,
        }
    }

    /// The elements as a plain mutable slice when the stride is 1.
    #[inline]
    pub fn as_contiguous_mut(&mut self) -> Option<&mut [T]> {
        if self.len == 0 {
            Some(&mut self.data[..0])
        } else if self.stride == 1 {
            Some(&mut self.data[self.offset..self.offset + self.len])
        } else {
            None
        }
    }

    /// Iterate mutably over the elements in logical order.
    pub fn iter_mut(&mut self) -> StridedIterMut<'_, T> {
        let step = self.stride.unsigned_abs();
        let walk = if self.len == 0 {
            Walk::Forward(self.data[..0].iter_mut().step_by(1).take(0))
        } else if self.stride > 0 {
            Walk::Forward(
                self.data[self.offset..]
                    .iter_mut()
                    .step_by(step)
                    .take(self.len),
            )
        } else {
            Walk::Backward(
                self.data[..=self.offset]
                    .iter_mut()
                    .rev()
                    .step_by(step)
                    .take(self.len),
            )
        };
        StridedIterMut { walk }
    }
}

impl<T: Copy> StridedSliceMut<'_, T> {
    /// Write `value` into every element of the view.
    pub fn fill(&mut self, value: T) {
        if let Some(dst) = self.as_contiguous_mut() {
            dst.fill(value);
            return;
        }
        for slot in self.iter_mut() {
            *slot = value;
        }
    }
}

impl<T> Index<usize> for StridedSlice<'_, T> {
    type Output = T;

    /// # Panics
    /// Panics if `index >= self.len()`.
    #[inline]
    fn index(&self, index: usize) -> &T {
        assert!(index < self.len, "index out of bounds");
        &self.data[self.physical(index)]
    }
}

impl<T> Index<usize> for StridedSliceMut<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        assert!(index < self.len, "index out of bounds");
        &self.data[self.physical(index)]
    }
}

impl<T> IndexMut<usize> for StridedSliceMut<'_, T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        assert!(index < self.len, "index out of bounds");
        let at = self.physical(index);
        &mut self.data[at]
    }
}
