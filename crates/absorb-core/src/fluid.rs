use crate::constants::CELSIUS_TO_KELVIN;
use serde::{Deserialize, Serialize};

/// Inputs from which the thermophysical properties of a gas are derived.
///
/// Defaults describe dry air at 20 °C and 1 atm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FluidParameters {
    /// Temperature in °C.
    pub temperature_c: f64,
    /// Static pressure in Pa.
    pub static_pressure: f64,
    /// Specific gas constant in J/(kg·K).
    pub gas_constant: f64,
    /// Ratio of specific heats γ.
    pub adiabatic_index: f64,
    /// Reference temperature for Sutherland's law, in K.
    pub reference_temperature: f64,
    /// Sutherland constant, in K.
    pub sutherland_constant: f64,
    /// Dynamic viscosity at the reference temperature, in Pa·s.
    pub reference_viscosity: f64,
}

impl Default for FluidParameters {
    fn default() -> Self {
        Self {
            temperature_c: 20.0,
            static_pressure: 101_325.0,
            gas_constant: 287.05,
            adiabatic_index: 1.4,
            reference_temperature: 291.15,
            sutherland_constant: 120.0,
            reference_viscosity: 18.07e-6,
        }
    }
}

/// Thermophysical properties of the saturating fluid.
///
/// Every field is a pure function of [`FluidParameters`]; the value is
/// never mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidProperties {
    /// Absolute temperature in K.
    pub temperature_k: f64,
    /// Static pressure in Pa.
    pub static_pressure: f64,
    /// Ratio of specific heats γ.
    pub adiabatic_index: f64,
    /// Density in kg/m³.
    pub density: f64,
    /// Dynamic viscosity in Pa·s.
    pub viscosity: f64,
    /// Specific heat at constant pressure in J/(kg·K).
    pub specific_heat: f64,
    /// Thermal conductivity in W/(m·K).
    pub thermal_conductivity: f64,
    /// Adiabatic speed of sound in m/s.
    pub speed_of_sound: f64,
    /// Prandtl number Cp·η/κ.
    pub prandtl: f64,
}

impl FluidProperties {
    /// Derive every property from `params`.
    pub fn new(params: &FluidParameters) -> Self {
        let t0 = params.temperature_c;
        let tk = t0 + CELSIUS_TO_KELVIN;
        let r = params.gas_constant;

        let density = params.static_pressure / (r * tk);

        // Sutherland's law
        let tref = params.reference_temperature;
        let c = params.sutherland_constant;
        let viscosity =
            params.reference_viscosity * ((tref + c) / (tk + c)) * (tk / tref).powf(1.5);

        // Polynomial fits: Cp in °C, κ in K
        let specific_heat =
            1e3 * (1.0062 + 3.6028e-5 * t0 - 1.0855e-6 * t0.powf(2.0) + 1.3791e-8 * t0.powf(3.0));
        let thermal_conductivity =
            1.5207e-11 * tk.powf(3.0) - 4.8574e-8 * tk.powf(2.0) + 1.0184e-4 * tk - 3.9333e-4;

        let speed_of_sound = (params.adiabatic_index * (r * tk)).sqrt();
        let prandtl = specific_heat * viscosity / thermal_conductivity;

        Self {
            temperature_k: tk,
            static_pressure: params.static_pressure,
            adiabatic_index: params.adiabatic_index,
            density,
            viscosity,
            specific_heat,
            thermal_conductivity,
            speed_of_sound,
            prandtl,
        }
    }

    /// Air at the given temperature, all other inputs at their defaults.
    pub fn at_temperature(temperature_c: f64) -> Self {
        Self::new(&FluidParameters {
            temperature_c,
            ..FluidParameters::default()
        })
    }

    /// Characteristic impedance ρ·c of the fluid (Pa·s/m).
    pub fn characteristic_impedance(&self) -> f64 {
        self.density * self.speed_of_sound
    }
}

impl Default for FluidProperties {
    fn default() -> Self {
        Self::new(&FluidParameters::default())
    }
}
