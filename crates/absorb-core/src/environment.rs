use crate::constants::{angular_frequency, REFERENCE_DENSITY, REFERENCE_SPEED_OF_SOUND};
use crate::fluid::FluidProperties;
use crate::grid::FrequencyGrid;

/// The acoustic surroundings a layer is evaluated in.
///
/// Holds the evaluation grid, the reference air that defines the incident
/// medium (z0 = ρ0·c0, k0 = ω/c0) and the fluid saturating the pores.
/// Immutable and cheap to share between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct AcousticEnvironment {
    grid: FrequencyGrid,
    reference_density: f64,
    reference_speed: f64,
    fluid: FluidProperties,
}

impl AcousticEnvironment {
    /// Reference air taken from `fluid` itself rather than the standard constants.
    pub fn from_fluid(grid: FrequencyGrid, fluid: FluidProperties) -> Self {
        Self {
            grid,
            reference_density: fluid.density,
            reference_speed: fluid.speed_of_sound,
            fluid,
        }
    }

    /// Standard reference air with a custom pore fluid.
    pub fn with_fluid(grid: FrequencyGrid, fluid: FluidProperties) -> Self {
        Self {
            grid,
            reference_density: REFERENCE_DENSITY,
            reference_speed: REFERENCE_SPEED_OF_SOUND,
            fluid,
        }
    }

    /// Same surroundings evaluated on a different grid.
    pub fn with_grid(&self, grid: FrequencyGrid) -> Self {
        Self {
            grid,
            ..self.clone()
        }
    }

    /// The grid [`compute`](crate::compute) sweeps.
    pub fn grid(&self) -> &FrequencyGrid {
        &self.grid
    }

    /// Fluid saturating the pores of effective-medium layers.
    pub fn fluid(&self) -> &FluidProperties {
        &self.fluid
    }

    /// Density ρ0 of the incident air in kg/m³.
    pub fn reference_density(&self) -> f64 {
        self.reference_density
    }

    /// Speed of sound c0 in the incident air in m/s.
    pub fn reference_speed(&self) -> f64 {
        self.reference_speed
    }

    /// Characteristic impedance z0 = ρ0·c0 of the incident medium.
    pub fn characteristic_impedance(&self) -> f64 {
        self.reference_density * self.reference_speed
    }

    /// Free-field wavenumber k0 = ω/c0 at `frequency` (Hz).
    pub fn wavenumber(&self, frequency: f64) -> f64 {
        angular_frequency(frequency) / self.reference_speed
    }
}

impl Default for AcousticEnvironment {
    fn default() -> Self {
        Self::with_fluid(FrequencyGrid::default(), FluidProperties::default())
    }
}
