//! Precision conversion between element types.

use crate::map::map_into;
use accel_view::{Result, StridedSlice, StridedSliceMut};
use num_traits::AsPrimitive;

/// `c[i] = a[i] as D`, rounding to nearest when narrowing.
pub fn convert_into<S, D>(c: &mut StridedSliceMut<'_, D>, a: &StridedSlice<'_, S>) -> Result<()>
where
    S: AsPrimitive<D>,
    D: Copy + 'static,
{
    map_into(c, a, |x| x.as_())
}
