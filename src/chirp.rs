//! Post-Newtonian estimates of inspiral duration.
//!
//! Masses are in solar masses, frequencies in Hz and durations in seconds.

use std::f64::consts::PI;

use nalgebra::DVector;

use crate::constants::SOLAR_MASS_SECONDS;
use crate::error::{CosmoError, Result};

/// Chirp duration together with the frequency at which the inspiral ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChirpEstimate {
    /// Time from `f_start` to coalescence, in seconds.
    pub duration: f64,
    /// Gravitational-wave frequency at the innermost stable circular orbit.
    pub isco_frequency: f64,
}

/// Time to coalescence from gravitational-wave frequency `f_start`, accurate to 2PN order.
pub fn chirp_time(mass_1: f64, mass_2: f64, f_start: f64) -> f64 {
    let total = mass_1 + mass_2;
    let eta = mass_1 * mass_2 / (total * total);
    let total_seconds = total * SOLAR_MASS_SECONDS;

    let c0 = 5.0 * total_seconds / (256.0 * eta);
    let c2 = 743.0 / 252.0 + eta * 11.0 / 3.0;
    let c3 = -32.0 * PI / 5.0;
    let c4 = 3_058_673.0 / 508_032.0 + eta * (5429.0 / 504.0 + eta * 617.0 / 72.0);

    let x = (PI * total_seconds * f_start).cbrt();
    let x2 = x * x;
    let x3 = x * x2;
    let x4 = x2 * x2;
    let x8 = x4 * x4;
    c0 * (1.0 + c2 * x2 + c3 * x3 + c4 * x4) / x8
}

/// Gravitational-wave frequency at the Schwarzschild ISCO for total mass `total_mass`.
pub fn isco_frequency(total_mass: f64) -> f64 {
    1.0 / (6.0 * 6f64.sqrt() * PI * total_mass * SOLAR_MASS_SECONDS)
}

/// Chirp duration and ISCO frequency for one binary.
pub fn chirp_estimate(mass_1: f64, mass_2: f64, f_start: f64) -> ChirpEstimate {
    ChirpEstimate {
        duration: chirp_time(mass_1, mass_2, f_start),
        isco_frequency: isco_frequency(mass_1 + mass_2),
    }
}

/// Element-wise [`chirp_time`] over paired component-mass arrays.
pub fn chirp_times(
    mass_1: &DVector<f64>,
    mass_2: &DVector<f64>,
    f_start: f64,
) -> Result<DVector<f64>> {
    if mass_1.len() != mass_2.len() {
        return Err(CosmoError::dimension_mismatch(
            "component mass arrays",
            mass_1.len(),
            mass_2.len(),
        ));
    }
    Ok(mass_1.zip_map(mass_2, |m1, m2| chirp_time(m1, m2, f_start)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn binary_neutron_star_from_thirty_hertz_lasts_about_a_minute() {
        let duration = chirp_time(1.4, 1.4, 30.0);
        assert!(duration > 40.0 && duration < 60.0, "duration {duration}");
    }

    #[test]
    fn duration_shrinks_with_frequency_and_mass() {
        assert!(chirp_time(1.4, 1.4, 40.0) < chirp_time(1.4, 1.4, 20.0));
        assert!(chirp_time(30.0, 30.0, 20.0) < chirp_time(10.0, 10.0, 20.0));
    }

    #[test]
    fn isco_frequency_scales_inversely_with_mass() {
        // 2.8 Msun binary ends near 1570 Hz
        let f = isco_frequency(2.8);
        assert!((1500.0..1650.0).contains(&f), "f_isco {f}");
        assert_relative_eq!(isco_frequency(5.6), 0.5 * f, max_relative = 1e-12);

        let estimate = chirp_estimate(1.4, 1.4, 30.0);
        assert_eq!(estimate.isco_frequency, f);
        assert_eq!(estimate.duration, chirp_time(1.4, 1.4, 30.0));
    }

    #[test]
    fn vectorised_times_match_scalar_and_check_lengths() {
        let m1 = DVector::from_vec(vec![1.4, 10.0]);
        let m2 = DVector::from_vec(vec![1.3, 8.0]);
        let times = chirp_times(&m1, &m2, 25.0).unwrap();
        assert_eq!(times[1], chirp_time(10.0, 8.0, 25.0));

        let short = DVector::from_vec(vec![1.0]);
        assert!(matches!(
            chirp_times(&m1, &short, 25.0),
            Err(CosmoError::DimensionMismatch { .. })
        ));
    }
}
