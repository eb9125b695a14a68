//! Strided buffer views for the accelerate-compat kernels.
//!
//! A strided sequence is a `(base, stride, length)` triple: element `i` sits
//! at `base + i * stride`. [`StridedSlice`] and [`StridedSliceMut`] borrow
//! the owning buffer, validate the whole extent once at construction, and
//! then hand kernels cheap, bounds-safe iteration.
//!
//! # Example
//!
//! ```rust
//! use accel_view::StridedSlice;
//!
//! let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//! // Every other element: 1, 3, 5
//! let view = StridedSlice::from_legacy(&data, 2, 3).unwrap();
//! assert_eq!(view.iter().copied().collect::<Vec<_>>(), vec![1.0, 3.0, 5.0]);
//!
//! // Negative stride walks backwards from the end of the extent.
//! let rev = StridedSlice::from_legacy(&data, -2, 3).unwrap();
//! assert_eq!(rev.iter().copied().collect::<Vec<_>>(), vec![5.0, 3.0, 1.0]);
//! ```

pub mod view;

pub use view::{StridedIter, StridedIterMut, StridedSlice, StridedSliceMut};

/// Element count of a vector, as in the vendor `vDSP_Length`.
pub type Length = usize;

/// Distance between consecutive elements, as in the vendor `vDSP_Stride`.
pub type Stride = isize;

// ============================================================================
// Error types
// ============================================================================

/// Errors that can occur while building views or running kernels.
#[derive(Debug, thiserror::Error)]
pub enum AccelError {
    /// A stride of zero was supplied.
    #[error("invalid stride 0")]
    ZeroStride,

    /// Integer overflow while computing the extent of a strided sequence.
    #[error("offset overflow while computing strided extent")]
    OffsetOverflow,

    /// The strided extent reaches past the end of the borrowed buffer.
    #[error("strided access out of bounds: index {needed} in buffer of length {len}")]
    OutOfBounds { needed: usize, len: usize },

    /// Two sequences that must have the same length do not.
    #[error("length mismatch: {0} vs {1}")]
    LengthMismatch(usize, usize),

    /// The legacy sort flag was neither `1` nor `-1`.
    #[error("invalid sort order flag {0}, expected 1 or -1")]
    InvalidSortOrder(i32),

    /// A dimension does not fit the 32-bit integers of the BLAS/LAPACK ABI.
    #[error("dimension {0} exceeds the 32-bit backend range")]
    DimensionOverflow(usize),

    /// A leading dimension is smaller than the row/column it must span.
    #[error("leading dimension {ld} is smaller than {min}")]
    LeadingDimension { ld: usize, min: usize },

    /// A forwarded BLAS/LAPACK routine reported failure.
    #[error("backend routine {routine} failed with info = {info}")]
    Backend { routine: &'static str, info: i32 },
}

/// Result type for view construction and kernels.
pub type Result<T> = std::result::Result<T, AccelError>;
