//! Linearized equation of state with constant expansion coefficients.

use super::EquationOfState;

/// Linear equation of state about a reference state.
///
/// Specific volume varies linearly in temperature and salinity and ignores
/// pressure; the expansion coefficients are the supplied constants:
///
/// ```text
/// v(SA, CT) = v0 * (1 + alpha*(CT - CT0) - beta*(SA - SA0))
/// ```
///
/// Useful for idealized process studies and for tests where exact arithmetic
/// matters more than thermodynamic accuracy. For real hydrography use
/// [`Mdjwf03`](super::Mdjwf03).
#[derive(Clone, Copy, Debug)]
pub struct LinearEos {
    v0: f64,
    alpha: f64,
    beta: f64,
    sa0: f64,
    ct0: f64,
}

impl LinearEos {
    /// Linear oracle with the given constant coefficients about the
    /// standard reference state (rho = 1025 kg/m³ at SA = 35 g/kg,
    /// CT = 10 °C).
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self {
            v0: 1.0 / 1025.0,
            alpha,
            beta,
            sa0: 35.0,
            ct0: 10.0,
        }
    }

    /// Replace the reference state.
    pub fn with_reference(mut self, rho0: f64, sa0: f64, ct0: f64) -> Self {
        self.v0 = 1.0 / rho0;
        self.sa0 = sa0;
        self.ct0 = ct0;
        self
    }

    /// In-situ density (kg/m³).
    pub fn rho(&self, sa: f64, ct: f64, p: f64) -> f64 {
        1.0 / self.specvol_alpha_beta(sa, ct, p).0
    }
}

impl Default for LinearEos {
    /// Typical mid-latitude ocean values.
    fn default() -> Self {
        Self::new(2.0e-4, 7.6e-4)
    }
}

impl EquationOfState for LinearEos {
    fn specvol_alpha_beta(&self, sa: f64, ct: f64, _p: f64) -> (f64, f64, f64) {
        let v = self.v0 * (1.0 + self.alpha * (ct - self.ct0) - self.beta * (sa - self.sa0));
        (v, self.alpha, self.beta)
    }
}
