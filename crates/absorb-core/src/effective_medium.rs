use crate::constants::angular_frequency;
use crate::environment::AcousticEnvironment;
use crate::fluid::FluidProperties;
use crate::medium::MediumState;
use crate::PorousModel;
use num_complex::Complex64;

/// Johnson-Champoux-Allard model of a rigid-frame porous medium.
///
/// Five macroscopic parameters describe the pore network; viscous and
/// thermal losses enter through the frequency-dependent effective density
/// and bulk modulus of the saturating fluid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveMediumModel {
    /// Open porosity φ.
    pub porosity: f64,
    /// Static airflow resistivity σ in Pa·s/m².
    pub flow_resistivity: f64,
    /// High-frequency limit of the tortuosity α∞.
    pub tortuosity: f64,
    /// Viscous characteristic length Λ in m.
    pub viscous_length: f64,
    /// Thermal characteristic length Λ′ in m.
    pub thermal_length: f64,
    /// Fluid saturating the pores.
    pub fluid: FluidProperties,
}

/// Complex square root on the principal branch: Re ≥ 0, cut along the
/// negative real axis. This choice sets the damping sign of both the
/// viscous and thermal correction terms.
fn principal_sqrt(z: Complex64) -> Complex64 {
    z.sqrt()
}

impl EffectiveMediumModel {
    /// Model saturated with default air.
    pub fn new(
        porosity: f64,
        flow_resistivity: f64,
        tortuosity: f64,
        viscous_length: f64,
        thermal_length: f64,
    ) -> Self {
        Self {
            porosity,
            flow_resistivity,
            tortuosity,
            viscous_length,
            thermal_length,
            fluid: FluidProperties::default(),
        }
    }

    /// Same material saturated with `fluid`.
    pub fn with_fluid(self, fluid: FluidProperties) -> Self {
        Self { fluid, ..self }
    }

    /// Effective density ρ_eff at angular frequency `omega`.
    pub fn effective_density(&self, omega: f64) -> Complex64 {
        let j = Complex64::i();
        let eta = self.fluid.viscosity;
        let rho = self.fluid.density;
        let phi = self.porosity;
        let sigma = self.flow_resistivity;
        let alpha = self.tortuosity;
        let lambda = self.viscous_length;

        let g = principal_sqrt(
            1.0 + (4.0 * j * alpha.powf(2.0) * eta * rho * omega)
                / (sigma.powf(2.0) * lambda.powf(2.0) * phi.powf(2.0)),
        );
        alpha * rho / phi * (1.0 + sigma * phi / (j * rho * omega * alpha) * g)
    }

    /// Effective bulk modulus K at angular frequency `omega`.
    pub fn effective_bulk_modulus(&self, omega: f64) -> Complex64 {
        let j = Complex64::i();
        let eta = self.fluid.viscosity;
        let rho = self.fluid.density;
        let pr2 = self.fluid.prandtl.powf(2.0);
        let gamma = self.fluid.adiabatic_index;
        let lambda_t2 = self.thermal_length.powf(2.0);

        let h = principal_sqrt(1.0 + j * rho * (omega * pr2 * lambda_t2) / (16.0 * eta));
        let thermal = 1.0 + (8.0 * eta) / (j * lambda_t2 * pr2 * omega * rho) * h;
        let adiabatic = gamma * self.fluid.static_pressure / self.porosity;
        adiabatic / (gamma - (gamma - 1.0) * thermal.inv())
    }

    /// Effective density and speed of sound `(ρ_eff, c_eff)` at `frequency` (Hz).
    pub fn density_and_speed(&self, frequency: f64) -> (Complex64, Complex64) {
        let omega = angular_frequency(frequency);
        let density = self.effective_density(omega);
        let speed = principal_sqrt(self.effective_bulk_modulus(omega) / density);
        (density, speed)
    }
}

impl PorousModel for EffectiveMediumModel {
    fn medium_state(&self, frequency: f64, _env: &AcousticEnvironment) -> MediumState {
        let (density, speed) = self.density_and_speed(frequency);
        MediumState::DensitySpeed { density, speed }
    }

    fn name(&self) -> &'static str {
        "effective-medium"
    }
}
