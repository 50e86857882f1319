use absorb_core::{
    AcousticEnvironment, FluidParameters, FluidProperties, GridSpec, LayerParams,
    MaterialParameters, ModelKind,
};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Where the incident-air impedance z0 and speed c0 come from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ReferenceAir {
    /// Fixed reference constants (ρ0 = 1.213 kg/m³, c0 = 343 m/s).
    #[default]
    Standard,
    /// Derived from the configured fluid.
    Fluid,
}

/// The `[environment]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct EnvironmentConfig {
    #[serde(default)]
    pub reference: ReferenceAir,
    #[serde(default)]
    pub fluid: FluidParameters,
    #[serde(default)]
    pub grid: GridSpec,
}

impl EnvironmentConfig {
    /// Build the grid and fluid and pick the reference air.
    pub fn build(&self) -> absorb_core::Result<AcousticEnvironment> {
        let grid = self.grid.build()?;
        let fluid = FluidProperties::new(&self.fluid);
        Ok(match self.reference {
            ReferenceAir::Standard => AcousticEnvironment::with_fluid(grid, fluid),
            ReferenceAir::Fluid => AcousticEnvironment::from_fluid(grid, fluid),
        })
    }
}

/// Top-level config file: one environment, any number of layers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub environment: EnvironmentConfig,
    #[serde(default = "AppConfig::default_layers")]
    pub layers: Vec<LayerParams>,
}

impl AppConfig {
    fn default_layers() -> Vec<LayerParams> {
        vec![
            LayerParams {
                name: "Model 1".to_string(),
                model: ModelKind::Miki,
                material: MaterialParameters::default(),
            },
            LayerParams {
                name: "Model 2".to_string(),
                model: ModelKind::EffectiveMedium,
                material: MaterialParameters::default(),
            },
        ]
    }

    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let mut cfg: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        cfg.name_unnamed_layers();
        Ok(cfg)
    }

    /// Like [`AppConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::load(path);
        }
        info!(path = %path.display(), "config not found, using defaults");
        Ok(Self::default())
    }

    /// Apply `model` to every layer.
    pub fn override_model(&mut self, model: ModelKind) {
        for layer in &mut self.layers {
            layer.model = model;
        }
    }

    /// Reject configurations the models would turn into meaningless output.
    pub fn validate(&self) -> Result<()> {
        if self.layers.is_empty() {
            bail!("config defines no layers");
        }
        for layer in &self.layers {
            layer.validate()?;
        }
        Ok(())
    }

    fn name_unnamed_layers(&mut self) {
        for (i, layer) in self.layers.iter_mut().enumerate() {
            if layer.name.is_empty() {
                layer.name = format!("Model {}", i + 1);
            }
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: EnvironmentConfig::default(),
            layers: Self::default_layers(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AppConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.layers.len(), 2);
        assert_eq!(cfg.layers[1].model, ModelKind::EffectiveMedium);
    }

    #[test]
    fn test_reads_partial_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absorb.toml");
        fs::write(
            &path,
            r#"
[environment]
reference = "fluid"

[environment.fluid]
temperature_c = 35.0

[environment.grid]
start = 100.0
stop = 4000.0
step = 50.0

[[layers]]
model = "delany-bazley"

[layers.material]
thickness = 0.05
flow_resistivity = 8000.0

[[layers]]
name = "foam"
model = "effective-medium"
"#,
        )
        .unwrap();

        let cfg = AppConfig::load(&path).unwrap();
        assert_eq!(cfg.environment.reference, ReferenceAir::Fluid);
        assert_eq!(cfg.environment.fluid.temperature_c, 35.0);
        assert_eq!(cfg.environment.fluid.static_pressure, 101_325.0);
        assert_eq!(cfg.layers.len(), 2);
        assert_eq!(cfg.layers[0].name, "Model 1");
        assert_eq!(cfg.layers[0].model, ModelKind::DelanyBazley);
        assert_eq!(cfg.layers[0].material.thickness, 0.05);
        assert_eq!(cfg.layers[0].material.porosity, 0.99);
        assert_eq!(cfg.layers[1].name, "foam");
        assert_eq!(cfg.layers[1].material, MaterialParameters::default());

        let env = cfg.environment.build().unwrap();
        assert_eq!(env.grid().len(), 78);
        assert_eq!(env.reference_speed(), env.fluid().speed_of_sound);
        cfg.validate().unwrap();
    }

    #[test]
    fn test_roundtrips_defaults() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, AppConfig::default());
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[[layers]]\nmodel = \"no-such-model\"\n").unwrap();
        let err = AppConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("broken.toml"), "{err:#}");
    }

    #[test]
    fn test_validation_catches_bad_layers() {
        let mut cfg = AppConfig::default();
        cfg.layers[1].material.tortuosity = 0.5;
        let err = cfg.validate().unwrap_err();
        assert!(format!("{err}").contains("tortuosity"), "{err}");

        cfg.layers.clear();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_invalid_grid_is_reported() {
        let env = EnvironmentConfig {
            grid: GridSpec {
                start: 1000.0,
                stop: 100.0,
                step: 10.0,
            },
            ..EnvironmentConfig::default()
        };
        assert!(env.build().is_err());
    }

    #[test]
    fn test_model_override_applies_to_all_layers() {
        let mut cfg = AppConfig::default();
        cfg.override_model(ModelKind::DelanyBazley);
        assert!(cfg.layers.iter().all(|l| l.model == ModelKind::DelanyBazley));
    }
}
