//! Detector-frame and source-frame mass conversions.

use crate::error::{CosmoError, Result};
use crate::options::CosmologicalParameters;
use crate::solving::{redshift, RedshiftOptions};

/// Redshifts a rest-frame mass for a source at luminosity distance `distance`.
///
/// Solves for the redshift once and returns `mass * (1 + z)`.
pub fn redshifted_mass(
    mass: f64,
    distance: f64,
    params: &CosmologicalParameters,
    options: &RedshiftOptions,
) -> Result<f64> {
    let z = redshift(distance, params, options)?;
    Ok(mass * (1.0 + z))
}

/// Converts a detector-frame mass to the source frame at redshift `z`.
pub fn source_frame_mass(detector_mass: f64, z: f64) -> f64 {
    detector_mass / (1.0 + z)
}

/// Chirp mass `(m1 m2)^(3/5) / (m1 + m2)^(1/5)`.
pub fn chirp_mass(mass_1: f64, mass_2: f64) -> f64 {
    (mass_1 * mass_2).powf(0.6) / (mass_1 + mass_2).powf(0.2)
}

/// Recovers component masses `(m1, m2)` from chirp mass and mass ratio `q = m2 / m1`.
pub fn component_masses(chirp_mass: f64, mass_ratio: f64) -> Result<(f64, f64)> {
    if !(mass_ratio > 0.0) {
        return Err(CosmoError::InvalidMassRatio { ratio: mass_ratio });
    }
    let common = chirp_mass * (1.0 + mass_ratio).powf(0.2);
    let mass_1 = common * mass_ratio.powf(-0.6);
    let mass_2 = common * mass_ratio.powf(0.4);
    Ok((mass_1, mass_2))
}
