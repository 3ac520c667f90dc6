//! Redshift solver: inverts the luminosity-distance integral by bisection.

use std::cmp::Ordering;

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::error::{CosmoError, Result};
use crate::integration::{luminosity_distance, DEFAULT_RESOLUTION};
use crate::options::CosmologicalParameters;

const INITIAL_LOWER: f64 = 1.0;
const INITIAL_UPPER: f64 = 10.0;

/// Configuration for the bracketing and bisection phases of the redshift solver.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedshiftOptions {
    /// Absolute tolerance on the luminosity distance (Mpc).
    pub tolerance: f64,
    /// Grid resolution handed to every luminosity-distance evaluation.
    pub resolution: usize,
    /// Maximum number of halve/double steps while searching for a bracket.
    pub max_bracket_expansions: usize,
    /// Maximum number of bisection steps allowed before aborting.
    pub max_iterations: usize,
}

impl Default for RedshiftOptions {
    fn default() -> Self {
        Self {
            tolerance: 1e-3,
            resolution: DEFAULT_RESOLUTION,
            max_bracket_expansions: 64,
            max_iterations: 200,
        }
    }
}

impl RedshiftOptions {
    /// Override the distance tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Override the integration resolution.
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    /// Set the maximum number of bracket expansions.
    pub fn with_max_bracket_expansions(mut self, expansions: usize) -> Self {
        self.max_bracket_expansions = expansions;
        self
    }

    /// Set the maximum number of bisection iterations.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Diagnostics returned alongside a solved redshift.
#[derive(Clone, Debug)]
pub struct RedshiftSummary {
    /// Number of halve/double steps needed to bracket the target.
    pub bracket_expansions: usize,
    /// Number of bisection steps performed after the first midpoint.
    pub iterations: usize,
    /// Absolute distance gap at the returned redshift.
    pub gap: f64,
    /// Lower end of the final bracket.
    pub lower: f64,
    /// Upper end of the final bracket.
    pub upper: f64,
}

/// Solves for the redshift whose luminosity distance equals `distance`.
pub fn redshift(
    distance: f64,
    params: &CosmologicalParameters,
    options: &RedshiftOptions,
) -> Result<f64> {
    redshift_with_summary(distance, params, options).map(|(z, _)| z)
}

/// Same as [`redshift`], also returning solver diagnostics.
pub fn redshift_with_summary(
    distance: f64,
    params: &CosmologicalParameters,
    options: &RedshiftOptions,
) -> Result<(f64, RedshiftSummary)> {
    let evaluate = |z: f64| -> Result<f64> {
        let d = luminosity_distance(z, options.resolution, params)?;
        if d.is_nan() {
            return Err(CosmoError::numerical("luminosity distance evaluation"));
        }
        Ok(d)
    };

    let mut lower = INITIAL_LOWER;
    let mut upper = INITIAL_UPPER;
    let mut d_lower = evaluate(lower)?;
    let mut d_upper = evaluate(upper)?;
    let mut expansions = 0usize;

    // zero is its own side, so landing exactly on a bracket end counts as straddling
    while side(distance - d_lower) == side(distance - d_upper) {
        if expansions >= options.max_bracket_expansions {
            warn!(
                "no bracket for D_L = {} after {} expansions ([{}, {}])",
                distance, expansions, lower, upper
            );
            return Err(CosmoError::BracketNotFound {
                distance,
                expansions,
                lower,
                upper,
            });
        }
        lower /= 2.0;
        upper *= 2.0;
        d_lower = evaluate(lower)?;
        d_upper = evaluate(upper)?;
        expansions += 1;
    }
    debug!(
        "bracketed D_L = {} in z = [{}, {}] after {} expansions",
        distance, lower, upper, expansions
    );

    let mut z = 0.5 * (lower + upper);
    let mut d = evaluate(z)?;
    let mut gap = (distance - d).abs();
    let mut iterations = 0usize;

    while gap > options.tolerance {
        if iterations >= options.max_iterations {
            warn!(
                "redshift bisection for D_L = {} stalled at z = {} (gap {})",
                distance, z, gap
            );
            return Err(CosmoError::RedshiftDidNotConverge { iterations, gap });
        }
        match d.partial_cmp(&distance) {
            Some(Ordering::Less) => lower = z,
            Some(Ordering::Greater) => upper = z,
            _ => {}
        }
        z = 0.5 * (lower + upper);
        d = evaluate(z)?;
        gap = (distance - d).abs();
        iterations += 1;
        trace!("bisection step {}: z = {}, gap = {}", iterations, z, gap);
    }

    debug!(
        "solved D_L = {} -> z = {} in {} iterations",
        distance, z, iterations
    );
    Ok((
        z,
        RedshiftSummary {
            bracket_expansions: expansions,
            iterations,
            gap,
            lower,
            upper,
        },
    ))
}

/// Three-way sign of `x`, with zero distinct from both signs.
fn side(x: f64) -> Option<Ordering> {
    x.partial_cmp(&0.0)
}
