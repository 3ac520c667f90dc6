//! Riemann-sum integration of the Friedmann expansion rate over redshift.
//!
//! Both distance integrators share one scheme: sample `1 / E(z)` on an evenly
//! spaced grid from zero to the target redshift, add the samples up and multiply
//! by the grid spacing. Accuracy is first order in the spacing, so doubling the
//! resolution roughly halves the discretisation error.

use crate::constants::SPEED_OF_LIGHT_KM_S;
use crate::error::{CosmoError, Result};
use crate::options::CosmologicalParameters;

/// Default number of grid samples used by the distance integrators.
pub const DEFAULT_RESOLUTION: usize = 1_000_000;

/// Evenly spaced redshift samples on `[0, upper]`, both ends included.
///
/// The grid is never materialised; samples are generated on demand so an
/// integration needs constant memory regardless of resolution.
#[derive(Clone, Copy, Debug)]
pub struct RedshiftGrid {
    upper: f64,
    resolution: usize,
    spacing: f64,
}

impl RedshiftGrid {
    /// Builds a grid of `resolution` samples between zero and `upper`.
    pub fn new(upper: f64, resolution: usize) -> Result<Self> {
        if resolution < 2 {
            return Err(CosmoError::InvalidResolution { found: resolution });
        }
        Ok(Self {
            upper,
            resolution,
            spacing: upper / (resolution - 1) as f64,
        })
    }

    /// Number of samples in the grid.
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Distance between neighbouring samples.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Largest redshift of the grid.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Iterates over the grid samples in increasing order.
    pub fn points(&self) -> impl Iterator<Item = f64> + '_ {
        let last = self.resolution - 1;
        (0..self.resolution).map(move |i| {
            // pin the endpoint so rounding never overshoots the target redshift
            if i == last {
                self.upper
            } else {
                i as f64 * self.spacing
            }
        })
    }

    /// Sums `integrand` over every sample and scales by the spacing.
    pub fn riemann_sum<F>(&self, integrand: F) -> f64
    where
        F: Fn(f64) -> f64,
    {
        let total: f64 = self.points().map(integrand).sum();
        total * self.spacing
    }
}

/// Hubble distance `d_H = c / H0` in Mpc.
pub fn hubble_distance(params: &CosmologicalParameters) -> f64 {
    SPEED_OF_LIGHT_KM_S / params.hubble_constant
}

/// Computes the luminosity distance (Mpc) to redshift `z`.
///
/// Out-of-domain parameters are not rejected and yield NaN or meaningless
/// values. `z = 0` returns exactly zero.
pub fn luminosity_distance(
    z: f64,
    resolution: usize,
    params: &CosmologicalParameters,
) -> Result<f64> {
    let grid = RedshiftGrid::new(z, resolution)?;
    let integral = grid.riemann_sum(|zi| 1.0 / params.expansion_rate(zi));
    Ok(SPEED_OF_LIGHT_KM_S * (1.0 + z) * integral / params.hubble_constant)
}

/// Computes the line-of-sight comoving distance (Mpc) to redshift `z`.
pub fn comoving_distance(
    z: f64,
    resolution: usize,
    params: &CosmologicalParameters,
) -> Result<f64> {
    let grid = RedshiftGrid::new(z, resolution)?;
    let integral = grid.riemann_sum(|zi| 1.0 / params.expansion_rate(zi));
    Ok(hubble_distance(params) * integral)
}

/// Tabulated luminosity distances on a shared redshift grid.
///
/// The table is filled in one cumulative pass with the trapezoid rule, so the
/// entries near `z = 0` are as accurate as the ones at the far end even though
/// they are covered by only a handful of grid intervals.
#[derive(Clone, Debug)]
pub struct DistanceTable {
    redshifts: Vec<f64>,
    distances: Vec<f64>,
}

impl DistanceTable {
    /// Tabulates `D_L(z)` on `steps` evenly spaced redshifts from zero to `z_max`.
    pub fn build(z_max: f64, steps: usize, params: &CosmologicalParameters) -> Result<Self> {
        let grid = RedshiftGrid::new(z_max, steps)?;
        let scale = SPEED_OF_LIGHT_KM_S / params.hubble_constant;
        let half_step = 0.5 * grid.spacing();

        let mut redshifts = Vec::with_capacity(steps);
        let mut distances = Vec::with_capacity(steps);
        let mut integral = 0.0_f64;
        let mut previous: Option<f64> = None;

        for z in grid.points() {
            let inverse_rate = 1.0 / params.expansion_rate(z);
            if let Some(last) = previous {
                integral += half_step * (last + inverse_rate);
            }
            previous = Some(inverse_rate);

            let distance = scale * (1.0 + z) * integral;
            if distance.is_nan() {
                return Err(CosmoError::numerical("distance tabulation"));
            }
            redshifts.push(z);
            distances.push(distance);
        }

        Ok(Self {
            redshifts,
            distances,
        })
    }

    /// Number of tabulated points.
    pub fn len(&self) -> usize {
        self.redshifts.len()
    }

    /// Whether the table is empty (never true for a built table).
    pub fn is_empty(&self) -> bool {
        self.redshifts.is_empty()
    }

    /// Tabulated redshifts, increasing.
    pub fn redshifts(&self) -> &[f64] {
        &self.redshifts
    }

    /// Tabulated luminosity distances, aligned with [`redshifts`](Self::redshifts).
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// Linearly interpolates the redshift at luminosity distance `distance`.
    pub fn lookup(&self, distance: f64) -> Result<f64> {
        let min = self.distances[0];
        let max = self.distances[self.distances.len() - 1];
        if !(min..=max).contains(&distance) {
            return Err(CosmoError::OutOfTableRange { distance, min, max });
        }

        let upper = self.distances.partition_point(|&d| d < distance);
        if upper == 0 {
            return Ok(self.redshifts[0]);
        }
        let lower = upper - 1;
        let (d0, d1) = (self.distances[lower], self.distances[upper]);
        let (z0, z1) = (self.redshifts[lower], self.redshifts[upper]);
        let weight = (distance - d0) / (d1 - d0);
        Ok(z0 + weight * (z1 - z0))
    }
}
