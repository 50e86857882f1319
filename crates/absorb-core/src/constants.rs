/// Reference speed of sound in air (m/s) used for the free-field
/// wavenumber k0 = ω/c0 and the characteristic impedance z0.
pub const REFERENCE_SPEED_OF_SOUND: f64 = 343.0;

/// Reference density of air (kg/m³) used for z0 = ρ0·c0.
pub const REFERENCE_DENSITY: f64 = 1.213;

/// Offset between the Celsius and Kelvin scales.
pub const CELSIUS_TO_KELVIN: f64 = 273.15;

/// Default evaluation grid: 50 Hz up to (not including) 10 kHz in 10 Hz steps.
pub const DEFAULT_GRID_START: f64 = 50.0;
pub const DEFAULT_GRID_STOP: f64 = 10_000.0;
pub const DEFAULT_GRID_STEP: f64 = 10.0;

/// Upper bound on the number of bins a linear grid may expand to.
pub const MAX_GRID_BINS: usize = 10_000_000;

/// Angular frequency ω = 2πf (rad/s) from a frequency in Hz.
pub fn angular_frequency(frequency: f64) -> f64 {
    2.0 * std::f64::consts::PI * frequency
}

/// Characteristic impedance of the reference air, z0 = ρ0·c0 (Pa·s/m).
pub fn reference_impedance() -> f64 {
    REFERENCE_DENSITY * REFERENCE_SPEED_OF_SOUND
}
