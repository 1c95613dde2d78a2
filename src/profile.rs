//! Argument coercion and broadcasting for profile inputs.
//!
//! The diagnostics accept salinity, temperature, pressure, and latitude in
//! whatever shape the caller has them: a plain scalar, a 1-D cast, a 2-D
//! section, a 4-D model field, an `ndarray` view of any of those. [`Profile`]
//! turns each argument into a dynamic-rank array without copying where
//! possible, and the broadcasting helpers stretch all arguments to a common
//! shape under NumPy rules (shapes align right; length-1 axes repeat).
//!
//! This module is deliberately a thin front layer: every shape-related
//! failure is raised here, so the numerical kernels behind it never see
//! mismatched arrays.

use ndarray::{arr0, ArrayBase, ArrayView1, ArrayViewD, CowArray, Data, Dimension, IxDyn};

use crate::error::ProfileError;

/// A value usable as a profile argument.
///
/// Yields the value as a dynamic-rank `f64` array. Arrays and views borrow;
/// scalars are promoted to rank-0 arrays so they participate in broadcasting
/// like any other argument.
pub trait Profile {
    /// View of the value as a dynamic-rank array.
    fn as_profile(&self) -> CowArray<'_, f64, IxDyn>;
}

impl<S, D> Profile for ArrayBase<S, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    fn as_profile(&self) -> CowArray<'_, f64, IxDyn> {
        self.view().into_dyn().into()
    }
}

impl Profile for f64 {
    fn as_profile(&self) -> CowArray<'_, f64, IxDyn> {
        arr0(*self).into_dyn().into()
    }
}

impl Profile for Vec<f64> {
    fn as_profile(&self) -> CowArray<'_, f64, IxDyn> {
        ArrayView1::from(self.as_slice()).into_dyn().into()
    }
}

impl Profile for &[f64] {
    fn as_profile(&self) -> CowArray<'_, f64, IxDyn> {
        ArrayView1::from(*self).into_dyn().into()
    }
}

impl<const N: usize> Profile for [f64; N] {
    fn as_profile(&self) -> CowArray<'_, f64, IxDyn> {
        ArrayView1::from(&self[..]).into_dyn().into()
    }
}

/// Common broadcast shape of `shapes` under NumPy rules.
///
/// Shapes align on their trailing axes; a length-1 axis stretches to match
/// any other length. Returns [`ProfileError::IncompatibleShapes`] when two
/// axes disagree and neither is 1.
pub(crate) fn common_shape(shapes: &[&[usize]]) -> Result<Vec<usize>, ProfileError> {
    let ndim = shapes.iter().map(|s| s.len()).max().unwrap_or(0);
    let mut out = vec![1usize; ndim];
    for shape in shapes {
        let offset = ndim - shape.len();
        for (k, &d) in shape.iter().enumerate() {
            let cur = &mut out[offset + k];
            if *cur == 1 {
                *cur = d;
            } else if d != 1 && d != *cur {
                return Err(ProfileError::IncompatibleShapes {
                    shapes: shapes.iter().map(|s| s.to_vec()).collect(),
                });
            }
        }
    }
    Ok(out)
}

/// Broadcast `arr` to `shape`, surfacing failure as a shape error.
pub(crate) fn broadcast_to<'a, S>(
    arr: &'a ArrayBase<S, IxDyn>,
    shape: &[usize],
) -> Result<ArrayViewD<'a, f64>, ProfileError>
where
    S: Data<Elem = f64>,
{
    arr.broadcast(IxDyn(shape))
        .ok_or_else(|| ProfileError::IncompatibleShapes {
            shapes: vec![arr.shape().to_vec(), shape.to_vec()],
        })
}
