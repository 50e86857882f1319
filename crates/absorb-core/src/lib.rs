pub mod absorption;
pub mod constants;
pub mod effective_medium;
pub mod empirical;
pub mod environment;
pub mod error;
pub mod fluid;
pub mod frequency_response;
pub mod grid;
pub mod layer;
pub mod medium;

pub use effective_medium::EffectiveMediumModel;
pub use empirical::EmpiricalModel;
pub use environment::AcousticEnvironment;
pub use error::{AbsorbError, Result};
pub use fluid::{FluidParameters, FluidProperties};
pub use grid::{FrequencyGrid, GridSpec};
pub use layer::RigidBackedLayer;
pub use medium::MediumState;

use serde::{Deserialize, Serialize};
use tracing::debug;

// ---------------------------------------------------------------------------
// Shared interface types
// ---------------------------------------------------------------------------

/// Physical and geometric parameters of a porous layer, in SI units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialParameters {
    /// Layer thickness in metres.
    pub thickness: f64,
    /// Open porosity, 0 < φ ≤ 1.
    pub porosity: f64,
    /// Static airflow resistivity in Pa·s/m².
    pub flow_resistivity: f64,
    /// Tortuosity, ≥ 1.
    pub tortuosity: f64,
    /// Viscous characteristic length in metres.
    pub viscous_length: f64,
    /// Thermal characteristic length in metres.
    pub thermal_length: f64,
}

impl Default for MaterialParameters {
    fn default() -> Self {
        Self {
            thickness: 10e-3,          // 10 mm
            porosity: 0.99,
            flow_resistivity: 15e3,    // 15 kPa·s/m²
            tortuosity: 1.01,
            viscous_length: 87.4e-6,   // 87.4 µm
            thermal_length: 196e-6,    // 196 µm
        }
    }
}

impl MaterialParameters {
    /// Check that every parameter lies in its physically meaningful range.
    ///
    /// The models never call this; out-of-range values simply produce
    /// meaningless numbers. Run it before evaluation when the inputs come
    /// from a user.
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("thickness", self.thickness, self.thickness > 0.0, "must be positive"),
            (
                "porosity",
                self.porosity,
                self.porosity > 0.0 && self.porosity <= 1.0,
                "must lie in (0, 1]",
            ),
            (
                "flow_resistivity",
                self.flow_resistivity,
                self.flow_resistivity > 0.0,
                "must be positive",
            ),
            ("tortuosity", self.tortuosity, self.tortuosity >= 1.0, "must be at least 1"),
            ("viscous_length", self.viscous_length, self.viscous_length > 0.0, "must be positive"),
            ("thermal_length", self.thermal_length, self.thermal_length > 0.0, "must be positive"),
        ];
        for (name, value, ok, rule) in checks {
            if !value.is_finite() || !ok {
                return Err(AbsorbError::configuration(format!("{name} {rule}, got {value}")));
            }
        }
        Ok(())
    }
}

/// Which bulk model describes the layer material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelKind {
    /// Miki's empirical power law (flow resistivity only).
    #[default]
    Miki,
    /// Delany-Bazley empirical power law (flow resistivity only).
    DelanyBazley,
    /// Johnson-Champoux-Allard effective-medium model.
    EffectiveMedium,
}

/// A named layer description, as read from a configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerParams {
    /// Label used in logs and output columns.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub model: ModelKind,
    #[serde(default)]
    pub material: MaterialParameters,
}

impl Default for LayerParams {
    fn default() -> Self {
        Self {
            name: "Model 1".to_string(),
            model: ModelKind::default(),
            material: MaterialParameters::default(),
        }
    }
}

impl LayerParams {
    /// Validate only the parameters the selected model reads.
    pub fn validate(&self) -> Result<()> {
        let checked = match self.model {
            ModelKind::Miki | ModelKind::DelanyBazley => {
                let m = MaterialParameters {
                    thickness: self.material.thickness,
                    flow_resistivity: self.material.flow_resistivity,
                    ..MaterialParameters::default()
                };
                m.validate()
            }
            ModelKind::EffectiveMedium => self.material.validate(),
        };
        checked.map_err(|e| match e {
            AbsorbError::Configuration(msg) if !self.name.is_empty() => {
                AbsorbError::Configuration(format!("layer '{}': {msg}", self.name))
            }
            other => other,
        })
    }

    /// Build the layer, taking the pore fluid from `env`.
    pub fn build(&self, env: &AcousticEnvironment) -> RigidBackedLayer {
        let m = &self.material;
        let model: Box<dyn PorousModel> = match self.model {
            ModelKind::Miki => Box::new(EmpiricalModel::new(m.flow_resistivity)),
            ModelKind::DelanyBazley => Box::new(EmpiricalModel::delany_bazley(m.flow_resistivity)),
            ModelKind::EffectiveMedium => Box::new(
                EffectiveMediumModel::new(
                    m.porosity,
                    m.flow_resistivity,
                    m.tortuosity,
                    m.viscous_length,
                    m.thermal_length,
                )
                .with_fluid(*env.fluid()),
            ),
        };
        RigidBackedLayer::new(model, m.thickness)
    }
}

/// Absorption coefficient versus frequency, index-aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct AbsorptionSpectrum {
    /// Frequencies in Hz.
    pub frequencies: Vec<f64>,
    /// Absorption coefficient at each frequency.
    pub absorption: Vec<f64>,
}

impl AbsorptionSpectrum {
    /// Number of frequencies.
    pub fn len(&self) -> usize {
        self.absorption.len()
    }

    /// True when no frequency was evaluated.
    pub fn is_empty(&self) -> bool {
        self.absorption.is_empty()
    }

    /// `(frequency, absorption)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.frequencies.iter().copied().zip(self.absorption.iter().copied())
    }

    /// Frequency and value of the largest finite absorption coefficient.
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.points()
            .filter(|(_, a)| a.is_finite())
            .max_by(|x, y| x.1.total_cmp(&y.1))
    }
}

/// A bulk porous-medium model evaluated one frequency at a time.
pub trait PorousModel: Send + Sync {
    /// Bulk medium properties at `frequency` (Hz) in the surroundings `env`.
    fn medium_state(&self, frequency: f64, env: &AcousticEnvironment) -> MediumState;

    /// Short identifier used in logs.
    fn name(&self) -> &'static str;
}

/// Validate `params`, build the layer and sweep it over the environment's grid.
pub fn compute(params: &LayerParams, env: &AcousticEnvironment) -> Result<AbsorptionSpectrum> {
    params.validate()?;
    let layer = params.build(env);
    debug!(name = %params.name, ?layer, "computing absorption spectrum");
    let absorption = layer.spectrum(env);
    Ok(AbsorptionSpectrum {
        frequencies: env.grid().frequencies().to_vec(),
        absorption,
    })
}

/// Absorption of a rigid-backed layer described by the empirical Miki model.
///
/// `frequencies` is used as given; no parameter is range-checked.
pub fn empirical_absorption(
    env: &AcousticEnvironment,
    frequencies: &[f64],
    thickness: f64,
    flow_resistivity: f64,
) -> Vec<f64> {
    let layer = RigidBackedLayer::new(Box::new(EmpiricalModel::new(flow_resistivity)), thickness);
    frequency_response::sweep(&layer, frequencies, env)
}

/// Absorption of a rigid-backed layer described by the Johnson-Champoux-Allard
/// model, saturated with `fluid`.
///
/// `frequencies` is used as given; no parameter is range-checked.
pub fn effective_medium_absorption(
    env: &AcousticEnvironment,
    frequencies: &[f64],
    material: &MaterialParameters,
    fluid: &FluidProperties,
) -> Vec<f64> {
    let model = EffectiveMediumModel::new(
        material.porosity,
        material.flow_resistivity,
        material.tortuosity,
        material.viscous_length,
        material.thermal_length,
    )
    .with_fluid(*fluid);
    let layer = RigidBackedLayer::new(Box::new(model), material.thickness);
    frequency_response::sweep(&layer, frequencies, env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layer_computes_full_grid() {
        let env = AcousticEnvironment::default();
        let spectrum = compute(&LayerParams::default(), &env).unwrap();
        assert_eq!(spectrum.len(), env.grid().len());
        assert_eq!(spectrum.frequencies, env.grid().frequencies());
    }

    #[test]
    fn test_compute_rejects_invalid_material() {
        let env = AcousticEnvironment::default();
        let params = LayerParams {
            name: "bad".into(),
            model: ModelKind::EffectiveMedium,
            material: MaterialParameters {
                porosity: 1.5,
                ..MaterialParameters::default()
            },
        };
        let err = compute(&params, &env).unwrap_err();
        match err {
            AbsorbError::Configuration(msg) => {
                assert!(msg.contains("layer 'bad'"), "msg = {msg}");
                assert!(msg.contains("porosity"), "msg = {msg}");
            }
            other => panic!("expected a configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_empirical_validation_ignores_unused_parameters() {
        let params = LayerParams {
            model: ModelKind::Miki,
            material: MaterialParameters {
                tortuosity: 0.0,
                viscous_length: -1.0,
                ..MaterialParameters::default()
            },
            ..LayerParams::default()
        };
        assert!(params.validate().is_ok());

        let params = LayerParams {
            model: ModelKind::DelanyBazley,
            material: MaterialParameters {
                flow_resistivity: 0.0,
                ..MaterialParameters::default()
            },
            ..LayerParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_non_finite_values() {
        let material = MaterialParameters {
            thermal_length: f64::NAN,
            ..MaterialParameters::default()
        };
        assert!(material.validate().is_err());
        assert!(MaterialParameters::default().validate().is_ok());
    }

    #[test]
    fn test_facades_match_layer_pipeline() {
        let env = AcousticEnvironment::default();
        let freqs = env.grid().frequencies();
        let material = MaterialParameters::default();

        let emp = empirical_absorption(&env, freqs, material.thickness, material.flow_resistivity);
        let via_params = compute(&LayerParams::default(), &env).unwrap();
        assert_eq!(emp, via_params.absorption);

        let jca = effective_medium_absorption(&env, freqs, &material, env.fluid());
        let via_params = compute(
            &LayerParams {
                model: ModelKind::EffectiveMedium,
                ..LayerParams::default()
            },
            &env,
        )
        .unwrap();
        assert_eq!(jca, via_params.absorption);
    }

    #[test]
    fn test_facades_use_caller_frequencies() {
        let env = AcousticEnvironment::default();
        let freqs = [125.0, 250.0, 500.0, 1000.0, 2000.0, 4000.0];
        let material = MaterialParameters::default();
        let emp = empirical_absorption(&env, &freqs, 0.01, 15e3);
        let jca = effective_medium_absorption(&env, &freqs, &material, &FluidProperties::default());
        assert_eq!(emp.len(), freqs.len());
        assert_eq!(jca.len(), freqs.len());

        let full =
            effective_medium_absorption(&env, env.grid().frequencies(), &material, env.fluid());
        let idx = env.grid().frequencies().iter().position(|&f| f == 1000.0).unwrap();
        assert_eq!(jca[3].to_bits(), full[idx].to_bits());
    }

    #[test]
    fn test_models_agree_on_low_frequency_rise() {
        // Both models should show absorption rising with frequency well
        // below the quarter-wave resonance of a 10 mm layer.
        let env = AcousticEnvironment::default();
        let freqs = [100.0, 200.0, 400.0, 800.0, 1600.0];
        let near_air = MaterialParameters {
            thickness: 0.01,
            porosity: 1.0,
            flow_resistivity: 15e3,
            tortuosity: 1.0,
            viscous_length: 1e-3,
            thermal_length: 1e-3,
        };
        let emp = empirical_absorption(&env, &freqs, near_air.thickness, near_air.flow_resistivity);
        let jca = effective_medium_absorption(&env, &freqs, &near_air, env.fluid());
        for w in 1..freqs.len() {
            assert!(emp[w] > emp[w - 1], "empirical not rising at {} Hz: {emp:?}", freqs[w]);
            assert!(jca[w] > jca[w - 1], "effective medium not rising at {} Hz: {jca:?}", freqs[w]);
        }
        assert!(emp[0] < 0.1 && jca[0] < 0.1, "emp = {}, jca = {}", emp[0], jca[0]);
    }

    #[test]
    fn test_spectrum_peak() {
        let spectrum = AbsorptionSpectrum {
            frequencies: vec![100.0, 200.0, 300.0],
            absorption: vec![0.2, f64::NAN, 0.7],
        };
        assert_eq!(spectrum.peak(), Some((300.0, 0.7)));
    }

    #[test]
    fn test_layer_params_roundtrip_through_toml() {
        let params = LayerParams {
            name: "foam".into(),
            model: ModelKind::EffectiveMedium,
            material: MaterialParameters::default(),
        };
        let text = toml::to_string(&params).unwrap();
        assert!(text.contains("model = \"effective-medium\""), "{text}");
        let back: LayerParams = toml::from_str(&text).unwrap();
        assert_eq!(back, params);
    }
}
