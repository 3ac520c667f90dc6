//! Vectorised redshift conversion for arrays of luminosity-distance samples.
//!
//! Posterior samples arrive as thousands of distances. Two strategies are
//! offered: solving every sample independently (exact to the solver tolerance,
//! spread over the rayon thread pool) or tabulating `D_L(z)` once and
//! interpolating.

use log::debug;
use nalgebra::DVector;
use rayon::prelude::*;

use crate::error::{CosmoError, Result};
use crate::integration::DistanceTable;
use crate::options::CosmologicalParameters;
use crate::solving::{redshift, RedshiftOptions};

/// Default number of tabulated redshifts used by [`interpolated_redshifts`].
pub const DEFAULT_TABLE_STEPS: usize = 10_000;

/// Solves the redshift of every distance sample in parallel, preserving order.
pub fn redshifts(
    distances: &DVector<f64>,
    params: &CosmologicalParameters,
    options: &RedshiftOptions,
) -> Result<DVector<f64>> {
    let solved = distances
        .as_slice()
        .par_iter()
        .map(|&distance| redshift(distance, params, options))
        .collect::<Result<Vec<f64>>>()?;
    Ok(DVector::from_vec(solved))
}

/// Converts distance samples to redshifts by interpolating a single distance table.
///
/// The extreme samples are solved exactly to size the table; its upper end is
/// padded by a tenth of the smallest sample's redshift (and at least 1% of the
/// largest) so every sample falls inside the tabulated range.
pub fn interpolated_redshifts(
    distances: &DVector<f64>,
    steps: usize,
    params: &CosmologicalParameters,
    options: &RedshiftOptions,
) -> Result<DVector<f64>> {
    if distances.is_empty() {
        return Ok(DVector::zeros(0));
    }
    if distances.iter().any(|d| d.is_nan()) {
        return Err(CosmoError::numerical("distance samples"));
    }

    let z_min = redshift(distances.min(), params, options)?;
    let z_max = redshift(distances.max(), params, options)?;
    let padding = (0.1 * z_min).max(0.01 * z_max);
    let table = DistanceTable::build(z_max + padding, steps, params)?;
    debug!(
        "interpolating {} samples over z in [0, {}] with {} steps",
        distances.len(),
        z_max + padding,
        steps
    );

    let mut out = DVector::zeros(distances.len());
    for (slot, &distance) in out.iter_mut().zip(distances.iter()) {
        *slot = table.lookup(distance)?;
    }
    Ok(out)
}
