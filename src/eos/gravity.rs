//! Gravitational acceleration as a function of latitude and sea pressure.
//!
//! Gravity enters the buoyancy frequency through g², so a 0.25% equator-pole
//! difference moves N² by half a percent. When a latitude is available the
//! diagnostics evaluate `grav` per sample; otherwise they fall back on the
//! global ocean average [`GRAV_MEAN`].
//!
//! The formula is normal gravity on the surface of the reference ellipsoid
//! (Moritz, 1980) with a free-air correction at the height corresponding to
//! the given sea pressure:
//!
//! ```text
//! g(lat, p) = g_s(lat) * (1 - gamma * z(p, lat))
//! ```
//!
//! where z is negative below the surface, so gravity grows with depth.

/// Global-average gravitational acceleration, m/s² (Griffies, 2004).
///
/// Used by the buoyancy frequency when no latitude is supplied.
pub const GRAV_MEAN: f64 = 9.7963;

/// Vertical gradient of gravity, 1/m (Saunders & Fofonoff, 1976).
const GAMMA: f64 = 2.26e-7;

const DEG2RAD: f64 = std::f64::consts::PI / 180.0;

/// Normal gravity on the surface of the reference ellipsoid, m/s².
#[inline]
fn grav_surface(lat: f64) -> f64 {
    let sinlat = (lat * DEG2RAD).sin();
    let sin2 = sinlat * sinlat;
    9.780327 * (1.0 + (5.2792e-3 + 2.32e-5 * sin2) * sin2)
}

/// Gravitational acceleration at latitude `lat` (degrees north) and sea
/// pressure `p` (dbar), in m/s².
///
/// # Example
///
/// ```
/// use seastrat::grav;
///
/// let equator = grav(0.0, 0.0);
/// let pole = grav(90.0, 0.0);
/// assert!(pole > equator);
/// ```
pub fn grav(lat: f64, p: f64) -> f64 {
    // z is negative below the surface, hence the sign.
    grav_surface(lat) * (1.0 - GAMMA * z_from_p(p, lat))
}

/// Height `z` (m) corresponding to sea pressure `p` (dbar) at latitude
/// `lat` (degrees north). Negative below the sea surface.
///
/// Solves the hydrostatic relation for a standard ocean (SA = 35.16504 g/kg,
/// CT = 0 °C) with gravity varying linearly over the water column, which
/// reduces to a quadratic in z.
pub fn z_from_p(p: f64, lat: f64) -> f64 {
    let gs = grav_surface(lat);
    let a = -0.5 * GAMMA * gs;
    let b = gs;
    let c = enthalpy_sso_0(p);
    -2.0 * c / (b + (b * b - 4.0 * a * c).sqrt())
}

/// Dynamic enthalpy of the standard ocean (J/kg) at sea pressure `p` (dbar):
/// the pressure integral of specific volume at SA = 35.16504 g/kg, CT = 0 °C.
fn enthalpy_sso_0(p: f64) -> f64 {
    let z = p * 1.0e-4;
    z * (9.726613854843870e-4
        + z * (-2.252956605630465e-5
            + z * (2.376909655387404e-6
                + z * (-1.664294869986011e-7
                    + z * (-5.988108894465758e-9
                        + z * (-2.10787688100e-9 + 2.80192913290e-10 * z))))))
        * 1.0e8
}
