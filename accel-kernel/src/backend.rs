//! Backend abstraction for the library-delegated kernels.
//!
//! Two kernels hand their work to an external routine when one is linked:
//! the sort kernel's library path (`?lasrt`) and general matrix multiply
//! (`?gemm`). This module defines the [`KernelBackend`] trait, the native
//! fallback, and the [`ActiveBackend`] type alias that serves as the single
//! point of backend selection based on Cargo features.

use crate::matrix::{naive_gemm, GemmShape};
use crate::sort::SortOrder;
use accel_traits::Real;
use accel_view::Result;

/// A provider of the library routines the kernels delegate to.
///
/// Implementations are selected at compile time; there is no runtime
/// dispatch between backends.
pub trait KernelBackend {
    /// Short name used in log events.
    const NAME: &'static str;

    /// Sort a contiguous buffer in place in the given order.
    ///
    /// Callers guarantee `data.len() <= i32::MAX as usize`.
    fn sort<T: Real>(data: &mut [T], order: SortOrder) -> Result<()>;

    /// `C = alpha * op(A) * op(B) + beta * C` on buffers already checked
    /// against `shape`.
    fn gemm<T: Real>(
        shape: &GemmShape,
        alpha: T,
        a: &[T],
        b: &[T],
        beta: T,
        c: &mut [T],
    ) -> Result<()>;
}

/// Pure-Rust backend with no external library.
pub struct NativeBackend;

impl KernelBackend for NativeBackend {
    const NAME: &'static str = "native";

    fn sort<T: Real>(data: &mut [T], order: SortOrder) -> Result<()> {
        data.sort_unstable_by(|x, y| order.compare(x, y));
        Ok(())
    }

    fn gemm<T: Real>(
        shape: &GemmShape,
        alpha: T,
        a: &[T],
        b: &[T],
        beta: T,
        c: &mut [T],
    ) -> Result<()> {
        naive_gemm(shape, alpha, a, b, beta, c);
        Ok(())
    }
}

#[cfg(feature = "blas")]
pub use crate::blas::BlasBackend;

// ---------------------------------------------------------------------------
// ActiveBackend type alias -- the SINGLE point of backend selection
// ---------------------------------------------------------------------------

/// The active backend, selected by Cargo features.
///
/// - `blas` -> [`BlasBackend`] (LAPACK `?lasrt`, CBLAS `?gemm`)
/// - no backend feature -> [`NativeBackend`]
#[cfg(feature = "blas")]
pub type ActiveBackend = BlasBackend;

#[cfg(not(feature = "blas"))]
pub type ActiveBackend = NativeBackend;
