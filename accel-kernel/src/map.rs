//! Element-wise map drivers over strided views.
//!
//! Every elementwise kernel funnels through one of these. When all operands
//! have unit stride the loop runs over plain slices so LLVM can
//! auto-vectorize; otherwise it walks the strided iterators.

use accel_view::{AccelError, Result, StridedSlice, StridedSliceMut};

/// Fail with `LengthMismatch` unless both lengths agree.
#[inline]
pub(crate) fn ensure_same_len(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(AccelError::LengthMismatch(expected, actual));
    }
    Ok(())
}

/// `dest[i] = f(src[i])`.
pub fn map_into<S, D, F>(
    dest: &mut StridedSliceMut<'_, D>,
    src: &StridedSlice<'_, S>,
    mut f: F,
) -> Result<()>
where
    S: Copy,
    F: FnMut(S) -> D,
{
    ensure_same_len(dest.len(), src.len())?;

    if let (Some(src), Some(dst)) = (src.as_contiguous(), dest.as_contiguous_mut()) {
        for (d, &s) in dst.iter_mut().zip(src) {
            *d = f(s);
        }
        return Ok(());
    }

    for (d, &s) in dest.iter_mut().zip(src.iter()) {
        *d = f(s);
    }
    Ok(())
}

/// `dest[i] = f(a[i], b[i])`.
pub fn zip_map2_into<A, B, D, F>(
    dest: &mut StridedSliceMut<'_, D>,
    a: &StridedSlice<'_, A>,
    b: &StridedSlice<'_, B>,
    mut f: F,
) -> Result<()>
where
    A: Copy,
    B: Copy,
    F: FnMut(A, B) -> D,
{
    ensure_same_len(dest.len(), a.len())?;
    ensure_same_len(dest.len(), b.len())?;

    if let (Some(sa), Some(sb), Some(dst)) =
        (a.as_contiguous(), b.as_contiguous(), dest.as_contiguous_mut())
    {
        for ((d, &x), &y) in dst.iter_mut().zip(sa).zip(sb) {
            *d = f(x, y);
        }
        return Ok(());
    }

    for ((d, &x), &y) in dest.iter_mut().zip(a.iter()).zip(b.iter()) {
        *d = f(x, y);
    }
    Ok(())
}

/// Left fold over a strided view.
#[inline]
pub(crate) fn fold<T, U, F>(src: &StridedSlice<'_, T>, init: U, f: F) -> U
where
    T: Copy,
    F: Fn(U, T) -> U,
{
    match src.as_contiguous() {
        Some(slice) => slice.iter().fold(init, |acc, &x| f(acc, x)),
        None => src.iter().fold(init, |acc, &x| f(acc, x)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_into_strided() {
        let src = [1.0f64, -1.0, 2.0, -1.0, 3.0];
        let mut out = [0.0f64; 6];
        let a = StridedSlice::from_legacy(&src, 2, 3).unwrap();
        let mut c = StridedSliceMut::from_legacy(&mut out, 3, 2).unwrap();
        // Mismatched lengths are rejected before any write.
        assert!(matches!(
            map_into(&mut c, &a, |x| x * 10.0),
            Err(AccelError::LengthMismatch(2, 3))
        ));
        assert_eq!(out, [0.0; 6]);

        let mut c = StridedSliceMut::from_legacy(&mut out, 2, 3).unwrap();
        map_into(&mut c, &a, |x| x * 10.0).unwrap();
        assert_eq!(out, [10.0, 0.0, 20.0, 0.0, 30.0, 0.0]);
    }

    #[test]
    fn test_zip_map2_contiguous_and_strided_agree() {
        let a: Vec<f64> = (0..8).map(|x| x as f64).collect();
        let b: Vec<f64> = (0..8).map(|x| (x * x) as f64).collect();

        let mut fast = vec![0.0; 8];
        zip_map2_into(
            &mut StridedSliceMut::contiguous(&mut fast),
            &StridedSlice::contiguous(&a),
            &StridedSlice::contiguous(&b),
            |x, y| x - y,
        )
        .unwrap();

        let mut slow = vec![0.0; 16];
        zip_map2_into(
            &mut StridedSliceMut::from_legacy(&mut slow, 2, 8).unwrap(),
            &StridedSlice::contiguous(&a),
            &StridedSlice::contiguous(&b),
            |x, y| x - y,
        )
        .unwrap();

        for i in 0..8 {
            assert_eq!(fast[i], slow[2 * i]);
        }
    }

    #[test]
    fn test_map_into_stateful_closure() {
        let src = [5.0f64, 6.0, 7.0, 8.0];
        let mut out = [0.0f64; 4];
        let mut calls = 0;
        map_into(
            &mut StridedSliceMut::from_legacy(&mut out, -1, 4).unwrap(),
            &StridedSlice::contiguous(&src),
            |x| {
                calls += 1;
                x + calls as f64
            },
        )
        .unwrap();
        assert_eq!(calls, 4);
        // The destination walks backwards, so the first call lands last.
        assert_eq!(out, [12.0, 10.0, 8.0, 6.0]);
    }

    #[test]
    fn test_fold_reverse_stride() {
        let data = [1.0f64, 2.0, 3.0, 4.0];
        let view = StridedSlice::from_legacy(&data, -1, 4).unwrap();
        let order = fold(&view, Vec::new(), |mut acc, x| {
            acc.push(x);
            acc
        });
        assert_eq!(order, vec![4.0, 3.0, 2.0, 1.0]);
    }
}
