//! Scalar type bounds for the kernel set.

use std::fmt::Debug;

/// Storage width of a [`Real`] type.
///
/// Backends that forward to precision-specific routines (`slasrt` vs
/// `dlasrt`, `sgemm` vs `dgemm`) dispatch on this tag instead of on
/// `TypeId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// IEEE-754 binary32.
    Single,
    /// IEEE-754 binary64.
    Double,
}

/// Floating-point element type accepted by every kernel.
///
/// `Pod` lets a backend reinterpret `&mut [T]` as `&mut [f32]`/`&mut [f64]`
/// once [`Real::PRECISION`] has been matched.
pub trait Real:
    num_traits::Float + bytemuck::Pod + Default + Debug + Send + Sync + 'static
{
    const PRECISION: Precision;
}

impl Real for f32 {
    const PRECISION: Precision = Precision::Single;
}

impl Real for f64 {
    const PRECISION: Precision = Precision::Double;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_real<T: Real>() {}

    #[test]
    fn test_standard_types() {
        assert_real::<f32>();
        assert_real::<f64>();
    }

    #[test]
    fn test_precision_tags() {
        assert_eq!(<f32 as Real>::PRECISION, Precision::Single);
        assert_eq!(<f64 as Real>::PRECISION, Precision::Double);
    }

    #[test]
    fn test_pod_reinterpretation_matches_precision() {
        let mut data = [1.5f64, -2.0, 3.25];
        let raw: &mut [f64] = bytemuck::cast_slice_mut(&mut data[..]);
        raw[1] = 4.0;
        assert_eq!(data, [1.5, 4.0, 3.25]);
    }
}
