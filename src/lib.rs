//! Cosmological distance and redshift helpers for gravitational-wave data analysis.
//!
//! Gravitational-wave detectors measure luminosity distance directly, while
//! astrophysical interpretation needs redshift and source-frame masses. This
//! crate provides the small numerical layer between the two:
//!
//! - luminosity and comoving distance by Riemann-sum integration of the
//!   Friedmann expansion rate (`integration` module),
//! - the inverse problem, redshift from luminosity distance, by bracketing and
//!   bisection (`solving` module),
//! - batch conversion of posterior distance samples (`batch` module),
//! - redshifted, source-frame and component masses (`mass` module), and
//! - post-Newtonian chirp durations (`chirp` module).
//!
//! Every routine is a pure function of its inputs. Cosmological parameters are
//! passed explicitly through [`CosmologicalParameters`]; solver knobs live in
//! [`RedshiftOptions`].
//!
//! # Quick start
//!
//! ```no_run
//! use gwcosmo::integration::{luminosity_distance, DEFAULT_RESOLUTION};
//! use gwcosmo::mass::redshifted_mass;
//! use gwcosmo::{redshift, CosmologicalParameters, RedshiftOptions};
//!
//! let params = CosmologicalParameters::default();
//! let options = RedshiftOptions::default();
//!
//! let distance = luminosity_distance(0.1, DEFAULT_RESOLUTION, &params).expect("valid grid");
//! let z = redshift(distance, &params, &options).expect("converged");
//! let detector_mass = redshifted_mass(1.4, distance, &params, &options).expect("converged");
//! println!("D_L = {distance:.1} Mpc, z = {z:.4}, m_det = {detector_mass:.3}");
//! ```

pub mod batch;
pub mod chirp;
pub mod constants;
pub mod error;
pub mod integration;
pub mod mass;
pub mod options;
pub mod solving;

pub use error::{CosmoError, Result};
pub use options::{CosmologicalParameters, PLANCK15};
pub use solving::{redshift, redshift_with_summary, RedshiftOptions, RedshiftSummary};
