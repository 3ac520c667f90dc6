//! Cosmological parameter sets shared by every distance and redshift routine.

use serde::{Deserialize, Serialize};

/// Flat-ish matter plus dark-energy cosmology used by the distance integrals.
///
/// No closure check is applied: `omega_m + omega_lambda` may differ from one,
/// and out-of-domain values simply propagate through the integrals.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CosmologicalParameters {
    /// Hubble constant `H0` in km/s/Mpc.
    pub hubble_constant: f64,
    /// Present-day matter density parameter.
    pub omega_m: f64,
    /// Present-day dark-energy density parameter.
    pub omega_lambda: f64,
}

/// Planck 2015 cosmology restricted to matter and Lambda.
pub const PLANCK15: CosmologicalParameters = CosmologicalParameters {
    hubble_constant: 67.74,
    omega_m: 0.3075,
    omega_lambda: 0.6925,
};

impl Default for CosmologicalParameters {
    /// `H0 = 67.9`, `Omega_M = 0.3065`, `Omega_Lambda = 0.6935`.
    fn default() -> Self {
        Self {
            hubble_constant: 67.9,
            omega_m: 0.3065,
            omega_lambda: 0.6935,
        }
    }
}

impl CosmologicalParameters {
    /// Builds a parameter set from explicit values.
    pub fn new(hubble_constant: f64, omega_m: f64, omega_lambda: f64) -> Self {
        Self {
            hubble_constant,
            omega_m,
            omega_lambda,
        }
    }

    /// Override `H0` while preserving the density parameters.
    pub fn with_hubble_constant(mut self, hubble_constant: f64) -> Self {
        self.hubble_constant = hubble_constant;
        self
    }

    /// Override the matter density parameter.
    pub fn with_omega_m(mut self, omega_m: f64) -> Self {
        self.omega_m = omega_m;
        self
    }

    /// Override the dark-energy density parameter.
    pub fn with_omega_lambda(mut self, omega_lambda: f64) -> Self {
        self.omega_lambda = omega_lambda;
        self
    }

    /// Dimensionless expansion rate `E(z) = sqrt(Omega_M (1+z)^3 + Omega_Lambda)`.
    #[inline]
    pub fn expansion_rate(&self, z: f64) -> f64 {
        (self.omega_m * (1.0 + z).powi(3) + self.omega_lambda).sqrt()
    }
}
