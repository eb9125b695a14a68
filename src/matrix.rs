//! Flat matrix API: transpose, accumulate-multiply and GEMM.

use accel_kernel::matrix::{self, GemmShape, Layout, Transpose};
use accel_traits::Real;
use accel_view::{AccelError, Length, Result, Stride, StridedSlice, StridedSliceMut};

fn area(rows: Length, cols: Length) -> Result<Length> {
    rows.checked_mul(cols)
        .ok_or(AccelError::DimensionOverflow(rows.max(cols)))
}

/// Transpose `a` (`n` rows by `m` columns) into `c` (`m` rows by `n`
/// columns).
///
/// `m` and `n` describe the *output*, following the vendor naming: input
/// element `(i, j)` is written to output `(j, i)`.
pub fn mtrans<T: Real>(
    a: &[T],
    ia: Stride,
    c: &mut [T],
    ic: Stride,
    m: Length,
    n: Length,
) -> Result<()> {
    let len = area(m, n)?;
    matrix::transpose_into(
        &mut StridedSliceMut::from_legacy(c, ic, len)?,
        &StridedSlice::from_legacy(a, ia, len)?,
        m,
        n,
    )
}

/// `C (m x n) += A (m x p) * B (p x n)`.
///
/// The product accumulates into `c`; clear it first for a plain product.
#[allow(clippy::too_many_arguments)]
pub fn mmul<T: Real>(
    a: &[T],
    ia: Stride,
    b: &[T],
    ib: Stride,
    c: &mut [T],
    ic: Stride,
    m: Length,
    n: Length,
    p: Length,
) -> Result<()> {
    matrix::mmul_into(
        &mut StridedSliceMut::from_legacy(c, ic, area(m, n)?)?,
        &StridedSlice::from_legacy(a, ia, area(m, p)?)?,
        &StridedSlice::from_legacy(b, ib, area(p, n)?)?,
        m,
        n,
        p,
    )
}

/// `C = alpha * op(A) * op(B) + beta * C`, CBLAS argument order.
///
/// Forwarded to `?gemm` when built with the `blas` feature.
#[allow(clippy::too_many_arguments)]
pub fn gemm<T: Real>(
    layout: Layout,
    trans_a: Transpose,
    trans_b: Transpose,
    m: Length,
    n: Length,
    k: Length,
    alpha: T,
    a: &[T],
    lda: Length,
    b: &[T],
    ldb: Length,
    beta: T,
    c: &mut [T],
    ldc: Length,
) -> Result<()> {
    let shape = GemmShape {
        layout,
        trans_a,
        trans_b,
        m,
        n,
        k,
        lda,
        ldb,
        ldc,
    };
    matrix::gemm(&shape, alpha, a, b, beta, c)
}
