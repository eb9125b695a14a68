//! LAPACK/CBLAS forwarding backend.
//!
//! The sort library path goes to `?lasrt` and GEMM to `?gemm`. Both are
//! reached through the `lapack` and `cblas` binding crates; OpenBLAS is
//! linked by `build.rs`.

use crate::backend::KernelBackend;
use crate::matrix::{GemmShape, Layout, Transpose};
use crate::sort::SortOrder;
use accel_traits::{Precision, Real};
use accel_view::{AccelError, Result};

/// Backend forwarding to the system BLAS/LAPACK.
pub struct BlasBackend;

fn lasrt_id(order: SortOrder) -> u8 {
    match order {
        SortOrder::Ascending => b'I',
        SortOrder::Descending => b'D',
    }
}

fn cblas_layout(layout: Layout) -> cblas::Layout {
    match layout {
        Layout::RowMajor => cblas::Layout::RowMajor,
        Layout::ColMajor => cblas::Layout::ColumnMajor,
    }
}

fn cblas_transpose(trans: Transpose) -> cblas::Transpose {
    match trans {
        Transpose::NoTrans => cblas::Transpose::None,
        Transpose::Trans => cblas::Transpose::Ordinary,
    }
}

fn check_info(routine: &'static str, info: i32) -> Result<()> {
    if info != 0 {
        tracing::warn!(routine, info, "backend routine reported failure");
        return Err(AccelError::Backend { routine, info });
    }
    Ok(())
}

impl KernelBackend for BlasBackend {
    const NAME: &'static str = "blas";

    fn sort<T: Real>(data: &mut [T], order: SortOrder) -> Result<()> {
        let n = i32::try_from(data.len()).map_err(|_| AccelError::DimensionOverflow(data.len()))?;
        let id = lasrt_id(order);
        let mut info = 0;
        match T::PRECISION {
            Precision::Double => {
                let d: &mut [f64] = bytemuck::cast_slice_mut(data);
                unsafe { lapack::dlasrt(id, n, d, &mut info) };
                check_info("dlasrt", info)
            }
            Precision::Single => {
                let d: &mut [f32] = bytemuck::cast_slice_mut(data);
                unsafe { lapack::slasrt(id, n, d, &mut info) };
                check_info("slasrt", info)
            }
        }
    }

    fn gemm<T: Real>(
        shape: &GemmShape,
        alpha: T,
        a: &[T],
        b: &[T],
        beta: T,
        c: &mut [T],
    ) -> Result<()> {
        // Dimensions were checked against i32 by `GemmShape::validate`.
        let (m, n, k) = (shape.m as i32, shape.n as i32, shape.k as i32);
        let (lda, ldb, ldc) = (shape.lda as i32, shape.ldb as i32, shape.ldc as i32);
        let layout = cblas_layout(shape.layout);
        let trans_a = cblas_transpose(shape.trans_a);
        let trans_b = cblas_transpose(shape.trans_b);

        match T::PRECISION {
            Precision::Double => unsafe {
                cblas::dgemm(
                    layout,
                    trans_a,
                    trans_b,
                    m,
                    n,
                    k,
                    bytemuck::cast::<T, f64>(alpha),
                    bytemuck::cast_slice(a),
                    lda,
                    bytemuck::cast_slice(b),
                    ldb,
                    bytemuck::cast::<T, f64>(beta),
                    bytemuck::cast_slice_mut(c),
                    ldc,
                );
            },
            Precision::Single => unsafe {
                cblas::sgemm(
                    layout,
                    trans_a,
                    trans_b,
                    m,
                    n,
                    k,
                    bytemuck::cast::<T, f32>(alpha),
                    bytemuck::cast_slice(a),
                    lda,
                    bytemuck::cast_slice(b),
                    ldb,
                    bytemuck::cast::<T, f32>(beta),
                    bytemuck::cast_slice_mut(c),
                    ldc,
                );
            },
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_translation() {
        assert_eq!(lasrt_id(SortOrder::Ascending), b'I');
        assert_eq!(lasrt_id(SortOrder::Descending), b'D');
        assert!(matches!(
            check_info("dlasrt", -2),
            Err(AccelError::Backend { routine: "dlasrt", info: -2 })
        ));
    }
}
