//! Paired slicing along the vertical axis of a profile array.
//!
//! Stability diagnostics are computed between adjacent samples of a cast:
//! every quantity is differenced and averaged between sample `i` and sample
//! `i + 1` along the chosen axis. [`AxisPair`] captures the two complementary
//! selectors for that pairing on arrays of arbitrary rank:
//!
//! - `shallow`: every position except the last along the axis,
//! - `deep`: every position except the first.
//!
//! Both selectors are pure index computations; applying them produces views,
//! never copies.

use ndarray::{ArrayViewD, Axis, Slice};

use crate::error::ProfileError;

/// The two complementary adjacent-sample selectors along one axis.
///
/// Built from a rank and a (possibly negative) axis index. The axis is
/// resolved and validated once; the selectors are then resolved against the
/// actual axis length of each view they are applied to, so axes of length 0
/// or 1 produce empty views rather than panicking.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use seastrat::AxisPair;
///
/// let p = array![0.0, 10.0, 20.0].into_dyn();
/// let pair = AxisPair::new(p.ndim(), 0).unwrap();
/// let (shallow, deep) = pair.split(&p.view());
/// assert_eq!(shallow.shape(), &[2]);
/// assert_eq!(deep[[0]], 10.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct AxisPair {
    axis: Axis,
}

impl AxisPair {
    /// Resolve `axis` against arrays of rank `ndim`.
    ///
    /// Negative axes count from the end (`-1` is the last axis). Returns
    /// [`ProfileError::AxisOutOfBounds`] when the axis does not exist at
    /// that rank, including for rank 0.
    pub fn new(ndim: usize, axis: isize) -> Result<Self, ProfileError> {
        let n = ndim as isize;
        if axis >= n || axis < -n {
            return Err(ProfileError::AxisOutOfBounds { axis, ndim });
        }
        let resolved = if axis < 0 { axis + n } else { axis } as usize;
        Ok(Self {
            axis: Axis(resolved),
        })
    }

    /// The resolved (non-negative) axis the pairing runs along.
    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// View of every sample except the deepest along the pairing axis.
    #[inline]
    pub fn shallow<'a, A>(&self, view: &ArrayViewD<'a, A>) -> ArrayViewD<'a, A> {
        let mut v = view.clone();
        // Resolved against the actual length so an empty axis stays empty.
        let n = v.len_of(self.axis) as isize;
        v.slice_axis_inplace(self.axis, Slice::from(..(n - 1).max(0)));
        v
    }

    /// View of every sample except the shallowest along the pairing axis.
    #[inline]
    pub fn deep<'a, A>(&self, view: &ArrayViewD<'a, A>) -> ArrayViewD<'a, A> {
        let mut v = view.clone();
        let n = v.len_of(self.axis) as isize;
        v.slice_axis_inplace(self.axis, Slice::from(n.min(1)..));
        v
    }

    /// Both views at once, `(shallow, deep)`.
    #[inline]
    pub fn split<'a, A>(
        &self,
        view: &ArrayViewD<'a, A>,
    ) -> (ArrayViewD<'a, A>, ArrayViewD<'a, A>) {
        (self.shallow(view), self.deep(view))
    }
}
