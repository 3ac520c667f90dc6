use thiserror::Error;

/// Unified error type for `gwcosmo` operations.
#[derive(Debug, Error)]
pub enum CosmoError {
    /// Raised when a redshift grid has too few samples to define a spacing.
    #[error("redshift grid needs at least 2 samples, found {found}")]
    InvalidResolution { found: usize },

    /// Raised when the geometric bracket expansion never straddles the target distance.
    #[error(
        "no redshift bracket found for distance {distance} after {expansions} expansions; \
         last bracket [{lower}, {upper}]"
    )]
    BracketNotFound {
        /// Luminosity distance the solver was asked to invert.
        distance: f64,
        /// Number of halve/double steps performed.
        expansions: usize,
        /// Lower redshift of the final bracket.
        lower: f64,
        /// Upper redshift of the final bracket.
        upper: f64,
    },

    /// Raised when bisection exhausts its iteration budget.
    #[error("redshift bisection did not converge after {iterations} iterations; last gap {gap}")]
    RedshiftDidNotConverge {
        /// Number of bisection steps performed.
        iterations: usize,
        /// Absolute distance gap at the last midpoint.
        gap: f64,
    },

    /// Raised when numerical routines produce NaN.
    #[error("encountered NaN during {context}")]
    NumericalError { context: &'static str },

    /// Raised when a mass ratio is not strictly positive.
    #[error("mass ratio must be positive, found {ratio}")]
    InvalidMassRatio { ratio: f64 },

    /// Raised when paired input arrays have incompatible lengths.
    #[error("dimension mismatch in {context}: expected {expected} but found {found}")]
    DimensionMismatch {
        /// Human-readable context describing the operation.
        context: &'static str,
        expected: usize,
        found: usize,
    },

    /// Raised when an interpolation lookup falls outside the tabulated distances.
    #[error("distance {distance} lies outside the tabulated range [{min}, {max}]")]
    OutOfTableRange { distance: f64, min: f64, max: f64 },
}

impl CosmoError {
    /// Helper to format a [`DimensionMismatch`](CosmoError::DimensionMismatch) error.
    pub fn dimension_mismatch(context: &'static str, expected: usize, found: usize) -> Self {
        Self::DimensionMismatch {
            context,
            expected,
            found,
        }
    }

    /// Helper for NaN checks inside iterative routines.
    pub fn numerical(context: &'static str) -> Self {
        Self::NumericalError { context }
    }
}

/// Type alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, CosmoError>;
