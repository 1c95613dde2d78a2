//! Ratio of isopycnal-slope potential vorticity to f·N².

use ndarray::{ArrayD, Zip};

use crate::axis::AxisPair;
use crate::eos::{specvol_alpha_beta_arrays, EquationOfState};
use crate::error::ProfileError;
use crate::profile::{broadcast_to, common_shape, Profile};

use super::{clip_salinity, midpoint};

/// Ratio of the vertical gradient of potential density referenced to
/// `p_ref` to the vertical gradient of locally-referenced potential
/// density, at the pressure midpoints of vertically adjacent samples.
///
/// This is the factor that converts f·N² into an isopycnal-slope potential
/// vorticity. With differences taken shallow minus deep and α, β evaluated
/// at the pair midpoint,
///
/// ```text
/// ratio = (dCT·α(p_ref) - dSA·β(p_ref)) / (dCT·α(p_mid) - dSA·β(p_mid))
/// ```
///
/// Where the denominator is zero the ratio is NaN. `p_ref` broadcasts
/// against the midpoint-shaped gradients, so a scalar reference pressure
/// applies everywhere.
///
/// Salinity is clipped to [0, 50] g/kg before differencing.
///
/// # Returns
///
/// `(ratio, p_mid)`, each with the vertical axis one sample shorter than
/// the broadcast inputs.
///
/// # Errors
///
/// Non-broadcastable shapes (including `p_ref` against the midpoint
/// shape), or an axis that does not exist at the broadcast rank.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use seastrat::{ipv_vs_fnsquared_ratio, Mdjwf03};
///
/// let sa = array![34.7, 34.9, 35.1];
/// let ct = array![16.0, 12.0, 9.0];
/// let p = array![50.0, 150.0, 250.0];
/// let (ratio, p_mid) = ipv_vs_fnsquared_ratio(&Mdjwf03, &sa, &ct, &p, &0.0, 0)?;
/// assert_eq!(ratio.shape(), &[2]);
/// // Near the surface the two references nearly coincide.
/// assert!((ratio[[0]] - 1.0).abs() < 0.05);
/// assert_eq!(p_mid[[1]], 200.0);
/// # Ok::<(), seastrat::ProfileError>(())
/// ```
pub fn ipv_vs_fnsquared_ratio<E: EquationOfState>(
    eos: &E,
    sa: &dyn Profile,
    ct: &dyn Profile,
    p: &dyn Profile,
    p_ref: &dyn Profile,
    axis: isize,
) -> Result<(ArrayD<f64>, ArrayD<f64>), ProfileError> {
    let sa = sa.as_profile();
    let ct = ct.as_profile();
    let p = p.as_profile();
    let p_ref = p_ref.as_profile();
    let sa = clip_salinity(&sa);

    let shape = common_shape(&[sa.shape(), ct.shape(), p.shape()])?;
    let pair = AxisPair::new(shape.len(), axis)?;
    let sa = broadcast_to(&sa, &shape)?;
    let ct = broadcast_to(&ct, &shape)?;
    let p = broadcast_to(&p, &shape)?;

    let (sa_s, sa_d) = pair.split(&sa);
    let (ct_s, ct_d) = pair.split(&ct);
    let (p_s, p_d) = pair.split(&p);

    let dsa = &sa_s - &sa_d;
    let dct = &ct_s - &ct_d;
    let sa_mid = midpoint(&sa_s, &sa_d);
    let ct_mid = midpoint(&ct_s, &ct_d);
    let p_mid = midpoint(&p_s, &p_d);

    // The reference pressure only has to fit the midpoint grid.
    let p_ref = broadcast_to(&p_ref, p_mid.shape())?;

    let (_, alpha, beta) =
        specvol_alpha_beta_arrays(eos, &sa_mid.view(), &ct_mid.view(), &p_mid.view());
    let (_, alpha_ref, beta_ref) =
        specvol_alpha_beta_arrays(eos, &sa_mid.view(), &ct_mid.view(), &p_ref);

    let num = &dct * &alpha_ref - &dsa * &beta_ref;
    let den = dct * alpha - dsa * beta;

    let mut ratio = ArrayD::zeros(p_mid.raw_dim());
    Zip::from(&mut ratio)
        .and(&num)
        .and(&den)
        .for_each(|r, &n, &d| *r = if d != 0.0 { n / d } else { f64::NAN });

    Ok((ratio, p_mid))
}
