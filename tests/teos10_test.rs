//! Integration tests for the equation-of-state backends and gravity.
//!
//! Anchors the MDJWF (2003) fit against published values, checks the
//! analytic expansion coefficients against centered finite differences of
//! specific volume, and pins down the geodetic gravity model.

use seastrat::{grav, z_from_p, EquationOfState, LinearEos, Mdjwf03, GRAV_MEAN};

#[test]
fn test_mdjwf_published_check_value() {
    let rho = 1.0 / Mdjwf03.specvol_alpha_beta(35.0, 25.0, 2000.0).0;
    assert!(
        (rho - 1031.654229).abs() < 0.01,
        "rho(35, 25, 2000) = {rho}, published 1031.654229"
    );
}

#[test]
fn test_density_anchors_across_the_water_column() {
    // (SA, CT, p, rho, tolerance)
    let anchors = [
        (35.0, 20.0, 0.0, 1024.763, 0.01),
        (0.0, 4.0, 0.0, 999.974, 0.01),
        (35.0, 0.0, 0.0, 1028.106, 0.05),
        (34.7, 2.0, 4000.0, 1046.0, 1.0),
    ];
    for (sa, ct, p, rho_expected, tol) in anchors {
        let rho = Mdjwf03.rho(sa, ct, p);
        assert!(
            (rho - rho_expected).abs() < tol,
            "rho({sa}, {ct}, {p}) = {rho}, expected {rho_expected} +/- {tol}"
        );
    }
}

#[test]
fn test_expansion_coefficients_against_finite_differences() {
    let h = 1e-3;
    for sa in [2.0, 20.0, 34.0, 36.5] {
        for ct in [-1.0, 4.0, 15.0, 28.0] {
            for p in [0.0, 500.0, 2500.0, 6000.0] {
                let (v, alpha, beta) = Mdjwf03.specvol_alpha_beta(sa, ct, p);
                assert!(v > 0.0);

                let vp = Mdjwf03.specvol_alpha_beta(sa, ct + h, p).0;
                let vm = Mdjwf03.specvol_alpha_beta(sa, ct - h, p).0;
                let alpha_fd = (vp - vm) / (2.0 * h * v);
                assert!(
                    (alpha_fd - alpha).abs() < 1e-8,
                    "alpha({sa}, {ct}, {p}) = {alpha}, finite difference {alpha_fd}"
                );

                let vp = Mdjwf03.specvol_alpha_beta(sa + h, ct, p).0;
                let vm = Mdjwf03.specvol_alpha_beta(sa - h, ct, p).0;
                let beta_fd = -(vp - vm) / (2.0 * h * v);
                assert!(
                    (beta_fd - beta).abs() < 1e-8,
                    "beta({sa}, {ct}, {p}) = {beta}, finite difference {beta_fd}"
                );
            }
        }
    }
}

#[test]
fn test_backends_agree_when_linearized_about_the_same_state() {
    // A linear oracle built from the MDJWF coefficients at a state must
    // reproduce the MDJWF specific volume to first order nearby.
    let (sa0, ct0, p0) = (35.0, 10.0, 0.0);
    let (v0, alpha, beta) = Mdjwf03.specvol_alpha_beta(sa0, ct0, p0);
    let linear = LinearEos::new(alpha, beta).with_reference(1.0 / v0, sa0, ct0);

    for (dsa, dct) in [(0.1, 0.0), (0.0, 0.2), (-0.05, -0.1)] {
        let v_full = Mdjwf03.specvol_alpha_beta(sa0 + dsa, ct0 + dct, p0).0;
        let v_lin = linear.specvol_alpha_beta(sa0 + dsa, ct0 + dct, p0).0;
        assert!(
            ((v_full - v_lin) / v_full).abs() < 1e-5,
            "linearization error at dSA={dsa}, dCT={dct}: {v_full} vs {v_lin}"
        );
    }
}

#[test]
fn test_gravity_anchors() {
    assert!((grav(0.0, 0.0) - 9.780327).abs() < 1e-12, "equatorial surface gravity");
    assert!(
        (grav(90.0, 0.0) - 9.832186).abs() < 1e-4,
        "polar surface gravity: {}",
        grav(90.0, 0.0)
    );
    // The global mean sits between the two extremes.
    assert!(grav(0.0, 0.0) < GRAV_MEAN && GRAV_MEAN < grav(90.0, 0.0));
}

#[test]
fn test_gravity_free_air_correction() {
    // Roughly 2.2e-6 of g per metre of depth.
    let g0 = grav(45.0, 0.0);
    let g1 = grav(45.0, 1000.0);
    let z = z_from_p(1000.0, 45.0);
    let expected = g0 * (1.0 - 2.26e-7 * z);
    assert!(
        (g1 - expected).abs() < 1e-9,
        "free-air correction: {g1} vs {expected}"
    );
    assert!(z < -980.0 && z > -1000.0, "z(1000 dbar, 45N) = {z}");
}

#[test]
fn test_default_grav_available_through_the_trait() {
    // Backends inherit the geodetic gravity unless they override it.
    assert_eq!(Mdjwf03.grav(30.0, 500.0), grav(30.0, 500.0));
    assert_eq!(LinearEos::default().grav(30.0, 500.0), grav(30.0, 500.0));
}
