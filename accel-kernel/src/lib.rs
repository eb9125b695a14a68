//! Native numeric kernels over strided views.
//!
//! Every kernel is a synchronous function over caller-owned buffers. Kernels
//! never allocate and keep no state between calls; disjoint buffers may be
//! processed from any number of threads.
//!
//! # Modules
//!
//! - [`elementwise`]: per-element binary/unary operations, clip, power
//! - [`reduce`]: max, min, dot, sum, running sum
//! - [`sort`]: in-place ordered sort with a library path and a quicksort fallback
//! - [`matrix`]: transpose, accumulate-multiply, general GEMM
//! - [`generate`]: fill, clear, ramp
//! - [`convert`]: element precision conversion
//! - [`backend`]: compile-time choice between the native and BLAS backends
//!
//! # Example
//!
//! ```
//! use accel_kernel::elementwise::add_into;
//! use accel_view::{StridedSlice, StridedSliceMut};
//!
//! let a = [1.0, 2.0, 3.0];
//! let b = [10.0, 20.0, 30.0];
//! let mut c = [0.0; 3];
//! add_into(
//!     &mut StridedSliceMut::contiguous(&mut c),
//!     &StridedSlice::contiguous(&a),
//!     &StridedSlice::contiguous(&b),
//! )
//! .unwrap();
//! assert_eq!(c, [11.0, 22.0, 33.0]);
//! ```

pub mod backend;
#[cfg(feature = "blas")]
mod blas;
pub mod convert;
pub mod elementwise;
pub mod generate;
mod map;
pub mod matrix;
pub mod reduce;
pub mod sort;

pub use backend::{ActiveBackend, KernelBackend, NativeBackend};
pub use elementwise::ClipCounts;
pub use map::{map_into, zip_map2_into};
pub use matrix::{GemmShape, Layout, Transpose};
pub use sort::{SortOrder, LIBRARY_SORT_MAX_LEN};

#[cfg(feature = "blas")]
pub use backend::BlasBackend;
