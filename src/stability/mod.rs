//! Vertical stability diagnostics from adjacent profile samples.
//!
//! All three diagnostics work on the same two-sample scheme: every quantity
//! is differenced and averaged between vertically adjacent samples along the
//! chosen axis, the equation of state is evaluated once per sample pair at
//! the midpoint state, and the result lives at the interface pressures
//! `p_mid`. The output arrays are therefore one sample shorter than the
//! inputs along that axis.
//!
//! - [`nsquared`]: the square of the buoyancy (Brunt-Väisälä) frequency,
//!
//!   ```text
//!   N² = g² / (v · dp_Pa) · (β dSA - α dCT),   d = deep - shallow
//!   ```
//!
//!   positive where the column is statically stable (Griffies, 2004).
//!
//! - [`turner_rsubrho`]: the Turner angle Tu and density ratio R_ρ of the
//!   double-diffusion literature (Ruddick, 1983), built from the
//!   shallow-minus-deep gradients.
//!
//! - [`ipv_vs_fnsquared_ratio`]: the ratio of isopycnal potential vorticity
//!   to f·N², i.e. the same stability combination evaluated with expansion
//!   coefficients at a reference pressure versus in situ.
//!
//! Degenerate layers are handled two deliberate ways: `nsquared` leaves its
//! division by the layer thickness unguarded, so a repeated pressure yields
//! ±∞ or NaN for that pair, while the two ratio diagnostics mask a zero
//! denominator to NaN. Both behaviors are per pair; neighbours are
//! unaffected.

mod ipv;
mod nsquared;
mod turner;

pub use ipv::ipv_vs_fnsquared_ratio;
pub use nsquared::nsquared;
pub use turner::turner_rsubrho;

use ndarray::{ArrayBase, ArrayD, ArrayViewD, Data, IxDyn};

use crate::error::ProfileError;

/// Decibar to Pascal.
pub(crate) const DB_TO_PA: f64 = 1.0e4;

/// Salinities are clipped to this range (g/kg) by the ratio diagnostics
/// before any differencing, keeping the equation of state inside its fit
/// domain even for lightly contaminated input.
pub(crate) const SA_CLIP: (f64, f64) = (0.0, 50.0);

/// Pairwise average, `0.5 * (shallow + deep)`.
pub(crate) fn midpoint(shallow: &ArrayViewD<'_, f64>, deep: &ArrayViewD<'_, f64>) -> ArrayD<f64> {
    0.5 * (shallow + deep)
}

/// Clip salinity into [`SA_CLIP`] elementwise. NaN stays NaN.
pub(crate) fn clip_salinity<S>(sa: &ArrayBase<S, IxDyn>) -> ArrayD<f64>
where
    S: Data<Elem = f64>,
{
    sa.mapv(|v| v.clamp(SA_CLIP.0, SA_CLIP.1))
}

/// Reject any latitude outside [-90, 90] degrees, reporting the first
/// offending element. NaN is not rejected; it flows through as NaN gravity.
pub(crate) fn validate_latitude<S>(lat: &ArrayBase<S, IxDyn>) -> Result<(), ProfileError>
where
    S: Data<Elem = f64>,
{
    for &v in lat.iter() {
        if v < -90.0 || v > 90.0 {
            return Err(ProfileError::LatitudeOutOfRange { lat: v });
        }
    }
    Ok(())
}
