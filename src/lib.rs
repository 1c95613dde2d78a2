//! # seastrat
//!
//! Seawater stratification and stability diagnostics on N-dimensional
//! hydrographic profiles, following TEOS-10 conventions.
//!
//! This crate provides three vertical stability diagnostics, each evaluated
//! at the pressure midpoints between adjacent samples of a cast:
//! - Buoyancy (Brunt-Väisälä) frequency squared, N²
//! - Turner angle and density ratio (double-diffusion regime diagnostics)
//! - Ratio of isopycnal potential vorticity to f·N²
//!
//! and the supporting pieces:
//! - An equation-of-state seam ([`EquationOfState`]) with two backends:
//!   the 25-term rational-function fit of McDougall, Jackett, Wright &
//!   Feistel (2003) ([`Mdjwf03`]) and a linearized oracle ([`LinearEos`])
//! - Geodetic gravity as a function of latitude and pressure
//! - NumPy-style broadcasting over arrays of arbitrary rank, with the
//!   vertical axis selectable per call (negative indices count from the end)
//!
//! Inputs are Absolute Salinity (g/kg), Conservative Temperature (°C), and
//! sea pressure (dbar), as scalars, slices, `Vec`s, or any `ndarray` array
//! or view; they are broadcast to a common shape before differencing.
//!
//! # Example
//!
//! ```
//! use ndarray::array;
//! use seastrat::{nsquared, turner_rsubrho, Mdjwf03};
//!
//! // A warm, fresh surface layer over cooler, saltier water.
//! let sa = array![34.7, 34.9, 35.1, 35.0];
//! let ct = array![18.0, 14.0, 9.0, 7.0];
//! let p = array![0.0, 100.0, 300.0, 600.0];
//!
//! let (n2, p_mid) = nsquared(&Mdjwf03, &sa, &ct, &p, None, 0)?;
//! assert_eq!(n2.shape(), &[3]);
//! assert!(n2.iter().all(|&v| v > 0.0), "statically stable column");
//! assert_eq!(p_mid[[0]], 50.0);
//!
//! let (tu, rsubrho, _) = turner_rsubrho(&Mdjwf03, &sa, &ct, &p, 0)?;
//! assert!(tu.iter().all(|&t| t > -180.0 && t <= 180.0));
//! assert!(rsubrho.iter().all(|r| r.is_finite()));
//! # Ok::<(), seastrat::ProfileError>(())
//! ```

pub mod axis;
pub mod eos;
pub mod error;
pub mod profile;
pub mod stability;

// Diagnostics
pub use stability::{ipv_vs_fnsquared_ratio, nsquared, turner_rsubrho};

// Equation of state and gravity
pub use eos::{grav, z_from_p, EquationOfState, LinearEos, Mdjwf03, GRAV_MEAN};

// Argument layer
pub use axis::AxisPair;
pub use error::ProfileError;
pub use profile::Profile;
