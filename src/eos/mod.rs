//! Equation-of-state backends for the stability diagnostics.
//!
//! The diagnostics only ever ask two things of seawater thermodynamics:
//! specific volume together with its expansion coefficients at a point, and
//! gravitational acceleration at a latitude and pressure. Both live behind
//! the [`EquationOfState`] trait so the numerical kernels stay independent
//! of any particular fit.
//!
//! Two backends are provided: [`Mdjwf03`], the 25-term rational-function
//! fit for real hydrography, and [`LinearEos`] for idealized studies and
//! exact-arithmetic tests.

mod gravity;
mod linear;
mod mdjwf03;

pub use gravity::{grav, z_from_p, GRAV_MEAN};
pub use linear::LinearEos;
pub use mdjwf03::Mdjwf03;

use ndarray::{ArrayD, ArrayViewD, Zip};

/// Elementwise seawater thermodynamics.
///
/// Implementors evaluate at a single point; the crate maps them over
/// broadcast arrays internally. Implementations must be pure functions of
/// their arguments.
pub trait EquationOfState {
    /// Specific volume (m³/kg), thermal expansion coefficient α (1/K) and
    /// haline contraction coefficient β (kg/g) with respect to Conservative
    /// Temperature and Absolute Salinity, at sea pressure `p` (dbar).
    fn specvol_alpha_beta(&self, sa: f64, ct: f64, p: f64) -> (f64, f64, f64);

    /// Gravitational acceleration (m/s²) at latitude `lat` (degrees north)
    /// and sea pressure `p` (dbar).
    ///
    /// Gravity is geodesy rather than thermodynamics, so a standard formula
    /// is provided; override it for idealized or non-terrestrial setups.
    fn grav(&self, lat: f64, p: f64) -> f64 {
        gravity::grav(lat, p)
    }
}

/// Evaluate the oracle over same-shaped arrays, yielding
/// (specvol, alpha, beta).
pub(crate) fn specvol_alpha_beta_arrays<E: EquationOfState>(
    eos: &E,
    sa: &ArrayViewD<'_, f64>,
    ct: &ArrayViewD<'_, f64>,
    p: &ArrayViewD<'_, f64>,
) -> (ArrayD<f64>, ArrayD<f64>, ArrayD<f64>) {
    let mut specvol = ArrayD::zeros(sa.raw_dim());
    let mut alpha = ArrayD::zeros(sa.raw_dim());
    let mut beta = ArrayD::zeros(sa.raw_dim());
    Zip::from(&mut specvol)
        .and(&mut alpha)
        .and(&mut beta)
        .and(sa)
        .and(ct)
        .and(p)
        .for_each(|v, a, b, &sa, &ct, &p| {
            let (vv, aa, bb) = eos.specvol_alpha_beta(sa, ct, p);
            *v = vv;
            *a = aa;
            *b = bb;
        });
    (specvol, alpha, beta)
}

/// Evaluate gravitational acceleration over same-shaped arrays.
pub(crate) fn grav_arrays<E: EquationOfState>(
    eos: &E,
    lat: &ArrayViewD<'_, f64>,
    p: &ArrayViewD<'_, f64>,
) -> ArrayD<f64> {
    let mut g = ArrayD::zeros(lat.raw_dim());
    Zip::from(&mut g)
        .and(lat)
        .and(p)
        .for_each(|g, &lat, &p| *g = eos.grav(lat, p));
    g
}
