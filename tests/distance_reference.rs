use approx::assert_relative_eq;
use gwcosmo::integration::{comoving_distance, luminosity_distance, DEFAULT_RESOLUTION};
use gwcosmo::mass::redshifted_mass;
use gwcosmo::{redshift, CosmologicalParameters, RedshiftOptions};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};

/// Default cosmology at z = 0.1 sits at roughly 474 Mpc, close to published Planck tables.
#[test]
fn default_cosmology_distance_at_low_redshift() {
    let params = CosmologicalParameters::default();
    let distance = luminosity_distance(0.1, DEFAULT_RESOLUTION, &params).unwrap();
    assert!((460.0..480.0).contains(&distance), "D_L = {distance}");
    assert_relative_eq!(distance, 474.3064, max_relative = 1e-6);
}

/// Solving the default-resolution distance recovers the redshift within the solver tolerance.
#[test]
fn redshift_round_trip_with_default_options() {
    let params = CosmologicalParameters::default();
    let options = RedshiftOptions::default();
    let distance = luminosity_distance(0.1, options.resolution, &params).unwrap();

    let z = redshift(distance, &params, &options).unwrap();
    assert!((z - 0.1).abs() <= options.tolerance, "z = {z}");
}

/// Luminosity and comoving distance both increase strictly with redshift.
#[test]
fn distances_increase_with_redshift() {
    let params = CosmologicalParameters::default();
    let mut rng = SmallRng::seed_from_u64(2017);
    let uniform = Uniform::new(0.0, 5.0);

    let mut redshifts: Vec<f64> = (0..64).map(|_| uniform.sample(&mut rng)).collect();
    redshifts.push(0.0);
    redshifts.sort_by(|a, b| a.partial_cmp(b).unwrap());
    redshifts.dedup();

    let luminosity: Vec<f64> = redshifts
        .iter()
        .map(|&z| luminosity_distance(z, 5_000, &params).unwrap())
        .collect();
    let comoving: Vec<f64> = redshifts
        .iter()
        .map(|&z| comoving_distance(z, 5_000, &params).unwrap())
        .collect();

    assert_eq!(luminosity[0], 0.0);
    assert!(luminosity.windows(2).all(|w| w[0] < w[1]));
    assert!(comoving.windows(2).all(|w| w[0] < w[1]));
}

/// Doubling the grid resolution roughly halves the discretisation error.
#[test]
fn discretisation_error_halves_with_resolution() {
    let params = CosmologicalParameters::default();
    let reference = luminosity_distance(0.1, DEFAULT_RESOLUTION, &params).unwrap();

    let errors: Vec<f64> = [1_000, 2_000, 4_000, 8_000]
        .iter()
        .map(|&n| (luminosity_distance(0.1, n, &params).unwrap() - reference).abs())
        .collect();

    for pair in errors.windows(2) {
        assert!(pair[1] < pair[0]);
        let ratio = pair[0] / pair[1];
        assert!((1.8..2.2).contains(&ratio), "error ratio {ratio}");
    }
}

/// Redshifted mass is exactly the rest-frame mass times `1 + z` for the solved redshift.
#[test]
fn redshifted_mass_uses_solved_redshift() {
    let params = CosmologicalParameters::default().with_hubble_constant(70.0);
    let options = RedshiftOptions::default().with_resolution(50_000);

    let z = redshift(800.0, &params, &options).unwrap();
    let mass = redshifted_mass(30.0, 800.0, &params, &options).unwrap();
    assert_eq!(mass, 30.0 * (1.0 + z));
}

/// A larger Hubble constant shrinks every distance by the same factor.
#[test]
fn distance_scales_inversely_with_hubble_constant() {
    let slow = CosmologicalParameters::default();
    let fast = slow.with_hubble_constant(2.0 * slow.hubble_constant);
    let d_slow = luminosity_distance(1.5, 10_000, &slow).unwrap();
    let d_fast = luminosity_distance(1.5, 10_000, &fast).unwrap();
    assert_relative_eq!(d_slow, 2.0 * d_fast, max_relative = 1e-12);
}
