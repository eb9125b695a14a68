//! Sequence generators: constant fill, clear and linear ramp.

use accel_traits::Real;
use accel_view::StridedSliceMut;

/// Broadcast `value` into every element of `c`.
pub fn fill<T: Real>(c: &mut StridedSliceMut<'_, T>, value: T) {
    c.fill(value);
}

/// Fill `c` with zeros.
pub fn clear<T: Real>(c: &mut StridedSliceMut<'_, T>) {
    c.fill(T::zero());
}

/// `c[i] = (start + step) * i`.
///
/// This is the vendor's literal behaviour: `start` and `step` are summed
/// before scaling by the index, so the sequence is not `start + step * i`
/// unless `start == 0`.
pub fn ramp_into<T: Real>(c: &mut StridedSliceMut<'_, T>, start: T, step: T) {
    let slope = start + step;
    let mut index = T::zero();
    for slot in c.iter_mut() {
        *slot = slope * index;
        index = index + T::one();
    }
}
