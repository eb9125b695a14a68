//! Vendor-compatible vector and matrix routines for platforms without the
//! vendor math library.
//!
//! Numeric code written against the vendor's flat vector API (`vadd`,
//! `vsub`, `dotpr`, `mtrans`, `mmul`, `vsort`, ...) runs unchanged on top
//! of these functions. Each routine takes `(buffer, stride)` pairs and an
//! element count in the vendor order, checks that the strided extent fits
//! inside each buffer, and runs a native kernel from [`accel_kernel`].
//!
//! # Crates
//!
//! - [`accel_view`]: strided views, [`AccelError`], [`Result`]
//! - [`accel_kernel`]: the kernels and the backend selection
//! - [`accel_traits`]: the [`Real`] element trait (`f32`, `f64`)
//!
//! # Modules
//!
//! - [`vector`]: elementwise, reduction, generator, sort and conversion routines
//! - [`matrix`]: [`mtrans`], [`mmul`], [`gemm`]
//! - [`vdsp`]: slice-in, `Vec`-out overlay
//!
//! # Backends
//!
//! With the `blas` feature the sort kernel's library path is forwarded to
//! LAPACK `?lasrt` and [`gemm`] to CBLAS `?gemm`. Without it, both run on
//! [`NativeBackend`].
//!
//! # Example
//!
//! ```rust
//! use accelerate_compat::{dotpr, vsub};
//!
//! let subtrahend = [1.0, 2.0, 3.0];
//! let minuend = [10.0, 20.0, 30.0];
//! let mut diff = [0.0; 3];
//! // The subtrahend comes first.
//! vsub(&subtrahend, 1, &minuend, 1, &mut diff, 1, 3).unwrap();
//! assert_eq!(diff, [9.0, 18.0, 27.0]);
//!
//! let mut acc = 0.0;
//! dotpr(&diff, 1, &subtrahend, 1, &mut acc, 3).unwrap();
//! assert_eq!(acc, 9.0 + 36.0 + 81.0);
//! ```

pub mod matrix;
pub mod vdsp;
pub mod vector;

pub use accel_kernel::{
    ActiveBackend, ClipCounts, GemmShape, KernelBackend, Layout, NativeBackend, SortOrder,
    Transpose, LIBRARY_SORT_MAX_LEN,
};
pub use accel_traits::{Precision, Real};
pub use accel_view::{AccelError, Length, Result, Stride, StridedSlice, StridedSliceMut};

pub use matrix::{gemm, mmul, mtrans};
pub use vector::{
    dotpr, maxv, minv, sve, vabs, vadd, vclip, vclipc, vclr, vdiv, vdpsp, vfill, vmax, vmin,
    vmul, vneg, vramp, vrsum, vsdiv, vsort, vspdp, vsq, vsub, vvpow,
};

#[cfg(feature = "blas")]
pub use accel_kernel::BlasBackend;
