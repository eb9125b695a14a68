//! Dense matrix kernels over flat buffers.
//!
//! Matrices carry no shape of their own: a strided view is read as a
//! row-major `rows x cols` block whose dimensions come from the caller.

use crate::backend::{ActiveBackend, KernelBackend};
use crate::map::ensure_same_len;
use accel_traits::Real;
use accel_view::{AccelError, Result, StridedSlice, StridedSliceMut};

fn checked_area(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols)
        .ok_or(AccelError::DimensionOverflow(rows.max(cols)))
}

/// Transpose an `n x m` row-major input into the `m x n` output.
///
/// `m` counts the output's rows (the input's columns) and `n` the output's
/// columns, matching the vendor parameter naming. Input element `(i, j)`
/// lands at output `(j, i)`.
pub fn transpose_into<T: Real>(
    c: &mut StridedSliceMut<'_, T>,
    a: &StridedSlice<'_, T>,
    m: usize,
    n: usize,
) -> Result<()> {
    let area = checked_area(m, n)?;
    ensure_same_len(area, a.len())?;
    ensure_same_len(area, c.len())?;

    for i in 0..n {
        for j in 0..m {
            c[j * n + i] = a[i * m + j];
        }
    }
    Ok(())
}

/// `C (m x n) += A (m x p) * B (p x n)`.
///
/// The product is added to the existing contents of `c`; clear it first
/// for a plain product.
pub fn mmul_into<T: Real>(
    c: &mut StridedSliceMut<'_, T>,
    a: &StridedSlice<'_, T>,
    b: &StridedSlice<'_, T>,
    m: usize,
    n: usize,
    p: usize,
) -> Result<()> {
    ensure_same_len(checked_area(m, p)?, a.len())?;
    ensure_same_len(checked_area(p, n)?, b.len())?;
    ensure_same_len(checked_area(m, n)?, c.len())?;

    for i in 0..m {
        for k in 0..p {
            let aik = a[i * p + k];
            for j in 0..n {
                c[i * n + j] = c[i * n + j] + aik * b[k * n + j];
            }
        }
    }
    Ok(())
}

// ============================================================================
// General matrix multiply
// ============================================================================

/// Storage order of a GEMM operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Rows are contiguous; the leading dimension is the row pitch.
    RowMajor,
    /// Columns are contiguous; the leading dimension is the column pitch.
    ColMajor,
}

/// Whether a GEMM operand is used as stored or transposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transpose {
    NoTrans,
    Trans,
}

impl Transpose {
    #[inline]
    fn is_trans(self) -> bool {
        matches!(self, Transpose::Trans)
    }
}

/// Dimensions and storage of `C (m x n) = op(A) (m x k) * op(B) (k x n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GemmShape {
    pub layout: Layout,
    pub trans_a: Transpose,
    pub trans_b: Transpose,
    pub m: usize,
    pub n: usize,
    pub k: usize,
    pub lda: usize,
    pub ldb: usize,
    pub ldc: usize,
}

impl GemmShape {
    /// Tightly packed row-major operands.
    pub fn row_major(m: usize, n: usize, k: usize, trans_a: Transpose, trans_b: Transpose) -> Self {
        let lda = if trans_a.is_trans() { m } else { k };
        let ldb = if trans_b.is_trans() { k } else { n };
        Self {
            layout: Layout::RowMajor,
            trans_a,
            trans_b,
            m,
            n,
            k,
            lda: lda.max(1),
            ldb: ldb.max(1),
            ldc: n.max(1),
        }
    }

    /// Stored `(rows, cols)` of A.
    fn a_dims(&self) -> (usize, usize) {
        if self.trans_a.is_trans() {
            (self.k, self.m)
        } else {
            (self.m, self.k)
        }
    }

    /// Stored `(rows, cols)` of B.
    fn b_dims(&self) -> (usize, usize) {
        if self.trans_b.is_trans() {
            (self.n, self.k)
        } else {
            (self.k, self.n)
        }
    }

    /// Check dimensions, leading dimensions and buffer lengths.
    ///
    /// Every dimension must fit an `i32`, as the CBLAS interface requires.
    pub fn validate(&self, a_len: usize, b_len: usize, c_len: usize) -> Result<()> {
        for dim in [self.m, self.n, self.k, self.lda, self.ldb, self.ldc] {
            if i32::try_from(dim).is_err() {
                return Err(AccelError::DimensionOverflow(dim));
            }
        }
        let (a_rows, a_cols) = self.a_dims();
        let (b_rows, b_cols) = self.b_dims();
        check_operand(self.layout, a_rows, a_cols, self.lda, a_len)?;
        check_operand(self.layout, b_rows, b_cols, self.ldb, b_len)?;
        check_operand(self.layout, self.m, self.n, self.ldc, c_len)
    }

    #[inline]
    fn a_index(&self, row: usize, col: usize) -> usize {
        let (r, c) = if self.trans_a.is_trans() { (col, row) } else { (row, col) };
        element_index(self.layout, r, c, self.lda)
    }

    #[inline]
    fn b_index(&self, row: usize, col: usize) -> usize {
        let (r, c) = if self.trans_b.is_trans() { (col, row) } else { (row, col) };
        element_index(self.layout, r, c, self.ldb)
    }
}

#[inline]
fn element_index(layout: Layout, row: usize, col: usize, ld: usize) -> usize {
    match layout {
        Layout::RowMajor => row * ld + col,
        Layout::ColMajor => row + col * ld,
    }
}

fn check_operand(layout: Layout, rows: usize, cols: usize, ld: usize, len: usize) -> Result<()> {
    let (outer, inner) = match layout {
        Layout::RowMajor => (rows, cols),
        Layout::ColMajor => (cols, rows),
    };
    let min = inner.max(1);
    if ld < min {
        return Err(AccelError::LeadingDimension { ld, min });
    }
    if outer == 0 || inner == 0 {
        return Ok(());
    }
    let needed = (outer - 1)
        .checked_mul(ld)
        .and_then(|span| span.checked_add(inner))
        .ok_or(AccelError::DimensionOverflow(outer))?;
    if len < needed {
        return Err(AccelError::OutOfBounds {
            needed: needed - 1,
            len,
        });
    }
    Ok(())
}

/// Triple-loop GEMM on buffers already validated against `shape`.
///
/// With `beta == 0` the previous contents of `c` are never read.
pub(crate) fn naive_gemm<T: Real>(shape: &GemmShape, alpha: T, a: &[T], b: &[T], beta: T, c: &mut [T]) {
    for i in 0..shape.m {
        for j in 0..shape.n {
            let mut acc = T::zero();
            for p in 0..shape.k {
                acc = acc + a[shape.a_index(i, p)] * b[shape.b_index(p, j)];
            }
            let at = element_index(shape.layout, i, j, shape.ldc);
            c[at] = if beta == T::zero() {
                alpha * acc
            } else {
                alpha * acc + beta * c[at]
            };
        }
    }
}

/// `C = alpha * op(A) * op(B) + beta * C` with the active backend.
pub fn gemm<T: Real>(shape: &GemmShape, alpha: T, a: &[T], b: &[T], beta: T, c: &mut [T]) -> Result<()> {
    gemm_with_backend::<ActiveBackend, T>(shape, alpha, a, b, beta, c)
}

/// `C = alpha * op(A) * op(B) + beta * C` with backend `B`.
pub fn gemm_with_backend<B: KernelBackend, T: Real>(
    shape: &GemmShape,
    alpha: T,
    a: &[T],
    b: &[T],
    beta: T,
    c: &mut [T],
) -> Result<()> {
    shape.validate(a.len(), b.len(), c.len())?;
    if shape.m == 0 || shape.n == 0 {
        return Ok(());
    }
    tracing::trace!(m = shape.m, n = shape.n, k = shape.k, backend = B::NAME, "gemm");
    B::gemm(shape, alpha, a, b, beta, c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_transpose_vendor_dimensions() {
        // Input is 2 rows x 4 cols; m = 4 output rows, n = 2 output cols.
        let a: Vec<f64> = (1..=8).map(|x| x as f64).collect();
        let mut c = vec![0.0; 8];
        transpose_into(
            &mut StridedSliceMut::contiguous(&mut c),
            &StridedSlice::contiguous(&a),
            4,
            2,
        )
        .unwrap();
        assert_eq!(c, vec![1.0, 5.0, 2.0, 6.0, 3.0, 7.0, 4.0, 8.0]);
    }

    #[test]
    fn test_transpose_strided_output() {
        let a = [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0];
        let mut c = [0.0f64; 12];
        let mut out = StridedSliceMut::from_legacy(&mut c, 2, 6).unwrap();
        transpose_into(&mut out, &StridedSlice::contiguous(&a), 3, 2).unwrap();
        let picked: Vec<f64> = c.iter().step_by(2).copied().collect();
        assert_eq!(picked, vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }

    #[test]
    fn test_transpose_shape_mismatch() {
        let a = [0.0f64; 6];
        let mut c = [0.0f64; 5];
        let err = transpose_into(
            &mut StridedSliceMut::contiguous(&mut c),
            &StridedSlice::contiguous(&a),
            3,
            2,
        );
        assert!(matches!(err, Err(AccelError::LengthMismatch(6, 5))));
    }

    #[test]
    fn test_mmul_known_product() {
        let a = [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0];
        let b: Vec<f64> = (10..25).map(|x| x as f64).collect();
        let mut c = [0.0f64; 10];
        mmul_into(
            &mut StridedSliceMut::contiguous(&mut c),
            &StridedSlice::contiguous(&a),
            &StridedSlice::contiguous(&b),
            2,
            5,
            3,
        )
        .unwrap();
        assert_eq!(
            c,
            [100.0, 106.0, 112.0, 118.0, 124.0, 235.0, 250.0, 265.0, 280.0, 295.0]
        );
    }

    #[test]
    fn test_mmul_accumulates() {
        let a = [2.0f64];
        let b = [3.0f64];
        let mut c = [1.0f64];
        mmul_into(
            &mut StridedSliceMut::contiguous(&mut c),
            &StridedSlice::contiguous(&a),
            &StridedSlice::contiguous(&b),
            1,
            1,
            1,
        )
        .unwrap();
        assert_eq!(c, [7.0]);
    }

    #[test]
    fn test_gemm_transposes_and_beta() {
        // op(A) = A^T where A is stored 3x2; op(B) = B stored 3x2.
        let a = [1.0f64, 4.0, 2.0, 5.0, 3.0, 6.0];
        let b = [7.0f64, 8.0, 9.0, 10.0, 11.0, 12.0];
        let shape = GemmShape::row_major(2, 2, 3, Transpose::Trans, Transpose::NoTrans);
        let mut c = [1.0f64, 1.0, 1.0, 1.0];
        gemm(&shape, 2.0, &a, &b, 1.0, &mut c).unwrap();
        // A^T * B = [[58, 64], [139, 154]]
        assert_relative_eq!(c[0], 117.0);
        assert_relative_eq!(c[1], 129.0);
        assert_relative_eq!(c[2], 279.0);
        assert_relative_eq!(c[3], 309.0);
    }

    #[test]
    fn test_gemm_col_major_beta_zero_ignores_nan() {
        // Column-major 2x2 times identity, C initially NaN.
        let a = [1.0f64, 3.0, 2.0, 4.0];
        let eye = [1.0f64, 0.0, 0.0, 1.0];
        let shape = GemmShape {
            layout: Layout::ColMajor,
            trans_a: Transpose::NoTrans,
            trans_b: Transpose::NoTrans,
            m: 2,
            n: 2,
            k: 2,
            lda: 2,
            ldb: 2,
            ldc: 2,
        };
        let mut c = [f64::NAN; 4];
        gemm(&shape, 1.0, &a, &eye, 0.0, &mut c).unwrap();
        assert_eq!(c, a);
    }

    #[test]
    fn test_gemm_validation() {
        let mut shape = GemmShape::row_major(2, 2, 2, Transpose::NoTrans, Transpose::NoTrans);
        shape.lda = 1;
        let mut c = [0.0f64; 4];
        assert!(matches!(
            gemm(&shape, 1.0, &[0.0; 4], &[0.0; 4], 0.0, &mut c),
            Err(AccelError::LeadingDimension { ld: 1, min: 2 })
        ));

        let shape = GemmShape::row_major(2, 2, 2, Transpose::NoTrans, Transpose::NoTrans);
        assert!(matches!(
            gemm(&shape, 1.0, &[0.0; 3], &[0.0; 4], 0.0, &mut c),
            Err(AccelError::OutOfBounds { needed: 3, len: 3 })
        ));
    }
}
