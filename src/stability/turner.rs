//! Turner angle and density ratio between adjacent profile samples.

use ndarray::{ArrayD, Zip};

use crate::axis::AxisPair;
use crate::eos::{specvol_alpha_beta_arrays, EquationOfState};
use crate::error::ProfileError;
use crate::profile::{broadcast_to, common_shape, Profile};

use super::{clip_salinity, midpoint};

/// Turner angle Tu (degrees) and stability (density) ratio R_ρ at the
/// pressure midpoints of vertically adjacent samples.
///
/// For each pair of adjacent samples along `axis`, with differences taken
/// shallow minus deep and α, β evaluated at the pair midpoint,
///
/// ```text
/// Tu  = atan2(α·dCT + β·dSA, α·dCT - β·dSA)   (degrees)
/// R_ρ = (α·dCT) / (β·dSA)
/// ```
///
/// Tu lies in (-180, 180]. Angles in (-90, -45) mark the diffusive regime,
/// (45, 90) salt fingering, and (-45, 45) a doubly stable water column.
/// Where `dSA` is zero, R_ρ is NaN; Tu is still defined there through
/// `atan2`.
///
/// Salinity is clipped to [0, 50] g/kg before differencing, so unphysical
/// negative inputs do not flip the sign of `dSA`.
///
/// # Returns
///
/// `(Tu, R_ρ, p_mid)`, each with the vertical axis one sample shorter than
/// the broadcast inputs.
///
/// # Errors
///
/// Non-broadcastable shapes, or an axis that does not exist at the
/// broadcast rank.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use seastrat::{turner_rsubrho, Mdjwf03};
///
/// let sa = array![34.7, 34.9, 35.1];
/// let ct = array![16.0, 12.0, 9.0];
/// let p = array![50.0, 150.0, 250.0];
/// let (tu, rsubrho, p_mid) = turner_rsubrho(&Mdjwf03, &sa, &ct, &p, -1)?;
/// assert_eq!(tu.shape(), &[2]);
/// assert!(tu.iter().all(|t| (-180.0..=180.0).contains(t)));
/// assert!(rsubrho.iter().all(|r| r.is_finite()));
/// assert_eq!(p_mid[[0]], 100.0);
/// # Ok::<(), seastrat::ProfileError>(())
/// ```
pub fn turner_rsubrho<E: EquationOfState>(
    eos: &E,
    sa: &dyn Profile,
    ct: &dyn Profile,
    p: &dyn Profile,
    axis: isize,
) -> Result<(ArrayD<f64>, ArrayD<f64>, ArrayD<f64>), ProfileError> {
    let sa = sa.as_profile();
    let ct = ct.as_profile();
    let p = p.as_profile();
    let sa = clip_salinity(&sa);

    let shape = common_shape(&[sa.shape(), ct.shape(), p.shape()])?;
    let pair = AxisPair::new(shape.len(), axis)?;
    let sa = broadcast_to(&sa, &shape)?;
    let ct = broadcast_to(&ct, &shape)?;
    let p = broadcast_to(&p, &shape)?;

    let (sa_s, sa_d) = pair.split(&sa);
    let (ct_s, ct_d) = pair.split(&ct);
    let (p_s, p_d) = pair.split(&p);

    // Shallow minus deep, the sign convention Tu and R_ρ are defined with.
    let dsa = &sa_s - &sa_d;
    let dct = &ct_s - &ct_d;
    let sa_mid = midpoint(&sa_s, &sa_d);
    let ct_mid = midpoint(&ct_s, &ct_d);
    let p_mid = midpoint(&p_s, &p_d);

    let (_, alpha, beta) =
        specvol_alpha_beta_arrays(eos, &sa_mid.view(), &ct_mid.view(), &p_mid.view());

    let mut tu = ArrayD::zeros(p_mid.raw_dim());
    Zip::from(&mut tu)
        .and(&alpha)
        .and(&dct)
        .and(&beta)
        .and(&dsa)
        .for_each(|tu, &a, &dct, &b, &dsa| {
            *tu = f64::atan2(a * dct + b * dsa, a * dct - b * dsa).to_degrees();
        });

    let mut rsubrho = ArrayD::zeros(p_mid.raw_dim());
    Zip::from(&mut rsubrho)
        .and(&alpha)
        .and(&dct)
        .and(&beta)
        .and(&dsa)
        .for_each(|r, &a, &dct, &b, &dsa| {
            *r = if dsa != 0.0 { (a * dct) / (b * dsa) } else { f64::NAN };
        });

    Ok((tu, rsubrho, p_mid))
}
