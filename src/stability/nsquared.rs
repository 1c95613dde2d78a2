//! Buoyancy frequency squared between adjacent profile samples.

use ndarray::{ArrayD, ArrayViewD, Zip};

use crate::axis::AxisPair;
use crate::eos::{grav_arrays, specvol_alpha_beta_arrays, EquationOfState, GRAV_MEAN};
use crate::error::ProfileError;
use crate::profile::{broadcast_to, common_shape, Profile};

use super::{midpoint, validate_latitude, DB_TO_PA};

/// Buoyancy (Brunt-Väisälä) frequency squared, N² (1/s²), at the pressure
/// midpoints of vertically adjacent samples.
///
/// For each pair of adjacent samples along `axis`,
///
/// ```text
/// N² = g² / (v_mid · 10⁴ · dp) · (β_mid · dSA - α_mid · dCT)
/// ```
///
/// where differences are deep minus shallow, the equation of state is
/// evaluated at the pair midpoint, and 10⁴ converts dbar to Pa. N² > 0
/// marks a statically stable interface.
///
/// When `lat` is given, gravity is evaluated per sample from latitude and
/// pressure and averaged onto the interface; otherwise the global-mean
/// [`GRAV_MEAN`] is used. Latitudes must lie in [-90, 90] degrees and are
/// checked before anything is computed.
///
/// Salinity is used as given, without the clipping the ratio diagnostics
/// apply.
///
/// # Arguments
///
/// * `eos` - equation-of-state backend
/// * `sa` - Absolute Salinity (g/kg)
/// * `ct` - Conservative Temperature (°C)
/// * `p` - sea pressure (dbar)
/// * `lat` - optional latitude (degrees north), broadcastable with the rest
/// * `axis` - vertical axis of the broadcast inputs; negative counts from
///   the end
///
/// # Returns
///
/// `(N², p_mid)`, each with the vertical axis one sample shorter than the
/// broadcast inputs.
///
/// # Errors
///
/// Latitude out of range, non-broadcastable shapes, or an axis that does
/// not exist at the broadcast rank. A zero pressure difference is *not* an
/// error: that pair evaluates to ±∞ or NaN and its neighbours are
/// unaffected.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use seastrat::{nsquared, Mdjwf03};
///
/// let sa = array![35.0, 35.0, 35.0];
/// let ct = array![10.0, 10.0, 10.0];
/// let p = array![0.0, 10.0, 20.0];
/// let (n2, p_mid) = nsquared(&Mdjwf03, &sa, &ct, &p, None, 0)?;
/// // A perfectly uniform column is neutrally stable.
/// assert_eq!(n2[[0]], 0.0);
/// assert_eq!(n2[[1]], 0.0);
/// assert_eq!(p_mid[[0]], 5.0);
/// assert_eq!(p_mid[[1]], 15.0);
/// # Ok::<(), seastrat::ProfileError>(())
/// ```
pub fn nsquared<E: EquationOfState>(
    eos: &E,
    sa: &dyn Profile,
    ct: &dyn Profile,
    p: &dyn Profile,
    lat: Option<&dyn Profile>,
    axis: isize,
) -> Result<(ArrayD<f64>, ArrayD<f64>), ProfileError> {
    let sa = sa.as_profile();
    let ct = ct.as_profile();
    let p = p.as_profile();

    match lat {
        Some(lat) => {
            let lat = lat.as_profile();
            validate_latitude(&lat)?;
            let shape = common_shape(&[sa.shape(), ct.shape(), p.shape(), lat.shape()])?;
            let pair = AxisPair::new(shape.len(), axis)?;
            let sa = broadcast_to(&sa, &shape)?;
            let ct = broadcast_to(&ct, &shape)?;
            let p = broadcast_to(&p, &shape)?;
            let lat = broadcast_to(&lat, &shape)?;
            let g = grav_arrays(eos, &lat, &p);
            Ok(nsquared_pairs(eos, pair, &sa, &ct, &p, Some(g)))
        }
        None => {
            let shape = common_shape(&[sa.shape(), ct.shape(), p.shape()])?;
            let pair = AxisPair::new(shape.len(), axis)?;
            let sa = broadcast_to(&sa, &shape)?;
            let ct = broadcast_to(&ct, &shape)?;
            let p = broadcast_to(&p, &shape)?;
            Ok(nsquared_pairs(eos, pair, &sa, &ct, &p, None))
        }
    }
}

fn nsquared_pairs<E: EquationOfState>(
    eos: &E,
    pair: AxisPair,
    sa: &ArrayViewD<'_, f64>,
    ct: &ArrayViewD<'_, f64>,
    p: &ArrayViewD<'_, f64>,
    g: Option<ArrayD<f64>>,
) -> (ArrayD<f64>, ArrayD<f64>) {
    let (sa_s, sa_d) = pair.split(sa);
    let (ct_s, ct_d) = pair.split(ct);
    let (p_s, p_d) = pair.split(p);

    let dsa = &sa_d - &sa_s;
    let dct = &ct_d - &ct_s;
    let dp = &p_d - &p_s;
    let sa_mid = midpoint(&sa_s, &sa_d);
    let ct_mid = midpoint(&ct_s, &ct_d);
    let p_mid = midpoint(&p_s, &p_d);

    let (specvol_mid, alpha_mid, beta_mid) =
        specvol_alpha_beta_arrays(eos, &sa_mid.view(), &ct_mid.view(), &p_mid.view());

    // Per-sample gravity averaged onto the interface, or the global mean.
    let g_local = match g {
        Some(g) => {
            let gv = g.view();
            let (g_s, g_d) = pair.split(&gv);
            midpoint(&g_s, &g_d)
        }
        None => ArrayD::from_elem(p_mid.raw_dim(), GRAV_MEAN),
    };

    // The division by dp is intentionally unguarded; a zero layer thickness
    // propagates as a non-finite value for that pair only.
    let mut n2 = beta_mid * &dsa - alpha_mid * &dct;
    Zip::from(&mut n2)
        .and(&g_local)
        .and(&specvol_mid)
        .and(&dp)
        .for_each(|n2, &g, &v, &dp| *n2 *= g * g / (v * DB_TO_PA * dp));

    (n2, p_mid)
}
