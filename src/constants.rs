//! Physical constants shared by the distance and chirp routines.

/// Speed of light in m s^-1 (exact, SI definition).
pub const SPEED_OF_LIGHT_SI: f64 = 299_792_458.0;

/// Speed of light in km s^-1, the unit paired with `H0` in km/s/Mpc.
pub const SPEED_OF_LIGHT_KM_S: f64 = SPEED_OF_LIGHT_SI / 1000.0;

/// Solar mass expressed in seconds, `G M_sun / c^3`.
pub const SOLAR_MASS_SECONDS: f64 = 4.925_490_947_641_267e-6;
