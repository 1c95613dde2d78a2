//! 25-term rational-function equation of state for seawater.
//!
//! Implements the density fit of McDougall, Jackett, Wright & Feistel (2003),
//! "Accurate and computationally efficient algorithms for potential
//! temperature and density of seawater" (J. Atmos. Ocean. Tech. 20):
//!
//! ```text
//! rho(SA, CT, p) = N(SA, CT, p) / D(SA, CT, p)
//! ```
//!
//! with a 12-term polynomial numerator and a 13-term denominator. Specific
//! volume is D/N, and the thermal expansion and haline contraction
//! coefficients come from the exact analytic derivatives of N and D, so the
//! three outputs are mutually consistent to machine precision.
//!
//! Check value: rho(35, 25, 2000) = 1031.654229 kg/m³.
//!
//! The fit is accurate to a few parts in 10⁶ of density over the
//! oceanographic range (0-40 g/kg, -2-40 °C, 0-8000 dbar). Outside that
//! funnel it extrapolates smoothly but without accuracy guarantees, and a
//! negative salinity yields NaN through the square root.

use super::EquationOfState;

/// The McDougall-Jackett-Wright-Feistel (2003) equation of state.
///
/// A stateless backend for the [`EquationOfState`] oracle. The salinity
/// argument is taken in g/kg; the fit's salinity scale differs from Absolute
/// Salinity by a fraction of a percent, which shifts absolute densities
/// slightly but leaves the differential quantities (α, β) that the stability
/// diagnostics consume essentially untouched.
///
/// # Example
///
/// ```
/// use seastrat::{EquationOfState, Mdjwf03};
///
/// let eos = Mdjwf03;
/// let (v, alpha, beta) = eos.specvol_alpha_beta(35.0, 25.0, 2000.0);
/// assert!((1.0 / v - 1031.654229).abs() < 0.01);
/// assert!(alpha > 0.0 && beta > 0.0);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Mdjwf03;

impl Mdjwf03 {
    /// In-situ density (kg/m³).
    pub fn rho(&self, sa: f64, ct: f64, p: f64) -> f64 {
        1.0 / self.specvol_alpha_beta(sa, ct, p).0
    }
}

impl EquationOfState for Mdjwf03 {
    fn specvol_alpha_beta(&self, sa: f64, ct: f64, p: f64) -> (f64, f64, f64) {
        // Numerator coefficients, Table A2 of the paper.
        let n0 = 9.99843699e+2;
        let n1 = 7.35212840e+0;
        let n2 = -5.45928211e-2;
        let n3 = 3.98476704e-4;
        let n4 = 2.96938239e+0;
        let n5 = -7.23268813e-3;
        let n6 = 2.12382341e-3;
        let n7 = 1.04004591e-2;
        let n8 = 1.03970529e-7;
        let n9 = 5.18761880e-6;
        let n10 = -3.24041825e-8;
        let n11 = -1.23869360e-11;

        // Denominator coefficients (d0 = 1).
        let d1 = 7.28606739e-3;
        let d2 = -4.60835542e-5;
        let d3 = 3.68390573e-7;
        let d4 = 1.80809186e-10;
        let d5 = 2.14691708e-3;
        let d6 = -9.27062484e-6;
        let d7 = -1.78343643e-10;
        let d8 = 4.76534122e-6;
        let d9 = 1.63410736e-9;
        let d10 = 5.30848875e-6;
        let d11 = -3.03175128e-16;
        let d12 = -1.27934137e-17;

        let ct2 = ct * ct;
        let rs = sa.sqrt();

        let num = n0
            + ct * (n1 + ct * (n2 + n3 * ct))
            + sa * (n4 + n5 * ct + n6 * sa)
            + p * (n7 + n8 * ct2 + n9 * sa + p * (n10 + n11 * ct2));

        let den = 1.0
            + ct * (d1 + ct * (d2 + ct * (d3 + d4 * ct)))
            + sa * (d5 + ct * (d6 + d7 * ct2) + rs * (d8 + d9 * ct2))
            + p * (d10 + p * ct * (d11 * ct2 + d12 * p));

        // Exact temperature derivatives of numerator and denominator.
        let dnum_dct = n1
            + ct * (2.0 * n2 + 3.0 * n3 * ct)
            + n5 * sa
            + 2.0 * p * ct * (n8 + n11 * p);
        let dden_dct = d1
            + ct * (2.0 * d2 + ct * (3.0 * d3 + 4.0 * d4 * ct))
            + sa * (d6 + 3.0 * d7 * ct2)
            + 2.0 * d9 * ct * sa * rs
            + p * p * (3.0 * d11 * ct2 + d12 * p);

        // Exact salinity derivatives.
        let dnum_dsa = n4 + n5 * ct + 2.0 * n6 * sa + n9 * p;
        let dden_dsa = d5 + ct * (d6 + d7 * ct2) + 1.5 * rs * (d8 + d9 * ct2);

        let specvol = den / num;
        // v = D/N, so (1/v) dv/dCT = D'/D - N'/N and the haline sign flips.
        let alpha = dden_dct / den - dnum_dct / num;
        let beta = dnum_dsa / num - dden_dsa / den;

        (specvol, alpha, beta)
    }
}
