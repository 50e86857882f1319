use crate::absorption;
use crate::constants::angular_frequency;
use crate::environment::AcousticEnvironment;
use crate::frequency_response;
use crate::PorousModel;
use num_complex::Complex64;

/// A porous layer of finite thickness mounted on a rigid wall.
pub struct RigidBackedLayer {
    model: Box<dyn PorousModel>,
    /// Layer thickness in metres.
    pub thickness: f64,
}

impl RigidBackedLayer {
    /// Layer of `thickness` metres whose material follows `model`.
    pub fn new(model: Box<dyn PorousModel>, thickness: f64) -> Self {
        Self { model, thickness }
    }

    /// Bulk model of the layer material.
    pub fn model(&self) -> &dyn PorousModel {
        self.model.as_ref()
    }

    /// Bulk `(z, k)` of the layer material at `frequency` (Hz).
    pub fn impedance_wavenumber(
        &self,
        frequency: f64,
        env: &AcousticEnvironment,
    ) -> (Complex64, Complex64) {
        self.model
            .medium_state(frequency, env)
            .impedance_wavenumber(angular_frequency(frequency))
    }

    /// Input impedance at the exposed face.
    pub fn surface_impedance(&self, frequency: f64, env: &AcousticEnvironment) -> Complex64 {
        let (z, k) = self.impedance_wavenumber(frequency, env);
        absorption::surface_impedance(z, k, self.thickness)
    }

    /// Normal-incidence pressure reflection coefficient.
    pub fn reflection_coefficient(&self, frequency: f64, env: &AcousticEnvironment) -> Complex64 {
        absorption::reflection_coefficient(
            self.surface_impedance(frequency, env),
            env.characteristic_impedance(),
        )
    }

    /// Normal-incidence absorption coefficient.
    pub fn absorption(&self, frequency: f64, env: &AcousticEnvironment) -> f64 {
        absorption::absorption_coefficient(self.reflection_coefficient(frequency, env))
    }

    /// Absorption over the environment's grid.
    pub fn spectrum(&self, env: &AcousticEnvironment) -> Vec<f64> {
        frequency_response::sweep(self, env.grid().frequencies(), env)
    }
}

impl std::fmt::Debug for RigidBackedLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RigidBackedLayer")
            .field("model", &self.model.name())
            .field("thickness", &self.thickness)
            .finish()
    }
}
