use num_complex::Complex64;

/// Bulk description of a porous medium at one frequency.
///
/// The empirical models produce an impedance/wavenumber pair, the
/// effective-medium model a density/speed pair. Both carry the same
/// information: k = ω/c and z = ρ·c.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediumState {
    ImpedanceWavenumber {
        /// Characteristic impedance z (Pa·s/m).
        impedance: Complex64,
        /// Complex wavenumber k (1/m).
        wavenumber: Complex64,
    },
    DensitySpeed {
        /// Effective density ρ_eff (kg/m³).
        density: Complex64,
        /// Effective speed of sound c_eff (m/s).
        speed: Complex64,
    },
}

impl MediumState {
    /// `(z, k)` at angular frequency `omega`.
    pub fn impedance_wavenumber(&self, omega: f64) -> (Complex64, Complex64) {
        match *self {
            MediumState::ImpedanceWavenumber {
                impedance,
                wavenumber,
            } => (impedance, wavenumber),
            MediumState::DensitySpeed { density, speed } => (density * speed, omega / speed),
        }
    }
}
