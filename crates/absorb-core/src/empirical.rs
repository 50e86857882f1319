use crate::environment::AcousticEnvironment;
use crate::medium::MediumState;
use crate::PorousModel;
use num_complex::Complex64;

/// One `coefficient · X^exponent` term of a power-law fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLawTerm {
    pub coefficient: f64,
    pub exponent: f64,
}

impl PowerLawTerm {
    const fn new(coefficient: f64, exponent: f64) -> Self {
        Self {
            coefficient,
            exponent,
        }
    }

    fn eval(&self, x: f64) -> f64 {
        self.coefficient * x.powf(self.exponent)
    }
}

/// Power-law fit of the bulk properties of a fibrous absorber:
///
/// ```text
/// z = z0 · (1 + z_re(X) − j·z_im(X))
/// k = k0 · (1 + k_re(X) − j·k_im(X)),     X = 1000·f/σ
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLawCoefficients {
    pub impedance_re: PowerLawTerm,
    pub impedance_im: PowerLawTerm,
    pub wavenumber_re: PowerLawTerm,
    pub wavenumber_im: PowerLawTerm,
}

/// Miki's refit, which keeps the real part of the surface impedance positive.
pub const MIKI: PowerLawCoefficients = PowerLawCoefficients {
    impedance_re: PowerLawTerm::new(5.5, -0.632),
    impedance_im: PowerLawTerm::new(8.43, -0.632),
    wavenumber_re: PowerLawTerm::new(7.81, -0.618),
    wavenumber_im: PowerLawTerm::new(11.41, -0.618),
};

/// The original Delany-Bazley fit.
pub const DELANY_BAZLEY: PowerLawCoefficients = PowerLawCoefficients {
    impedance_re: PowerLawTerm::new(9.08, -0.75),
    impedance_im: PowerLawTerm::new(11.9, -0.73),
    wavenumber_re: PowerLawTerm::new(10.8, -0.70),
    wavenumber_im: PowerLawTerm::new(10.3, -0.59),
};

/// Empirical model mapping frequency and flow resistivity directly to the
/// bulk impedance and wavenumber. No range checks: σ ≤ 0 or f ≤ 0 give
/// non-finite output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmpiricalModel {
    /// Flow resistivity σ in Pa·s/m².
    pub flow_resistivity: f64,
    coefficients: PowerLawCoefficients,
}

impl EmpiricalModel {
    /// Miki model.
    pub fn new(flow_resistivity: f64) -> Self {
        Self {
            flow_resistivity,
            coefficients: MIKI,
        }
    }

    /// Delany-Bazley model, the fit Miki's refit replaces.
    pub fn delany_bazley(flow_resistivity: f64) -> Self {
        Self {
            flow_resistivity,
            coefficients: DELANY_BAZLEY,
        }
    }

    /// Power-law fit in use, either [`MIKI`] or [`DELANY_BAZLEY`].
    pub fn coefficients(&self) -> &PowerLawCoefficients {
        &self.coefficients
    }

    /// The dimensionless frequency parameter X = 1000·f/σ.
    pub fn frequency_parameter(&self, frequency: f64) -> f64 {
        1e3 * frequency / self.flow_resistivity
    }

    /// Bulk characteristic impedance relative to the incident medium.
    pub fn normalized_impedance(&self, frequency: f64) -> Complex64 {
        let x = self.frequency_parameter(frequency);
        let c = &self.coefficients;
        Complex64::new(1.0 + c.impedance_re.eval(x), -c.impedance_im.eval(x))
    }

    /// Bulk wavenumber relative to the free-field wavenumber.
    pub fn normalized_wavenumber(&self, frequency: f64) -> Complex64 {
        let x = self.frequency_parameter(frequency);
        let c = &self.coefficients;
        Complex64::new(1.0 + c.wavenumber_re.eval(x), -c.wavenumber_im.eval(x))
    }
}

impl PorousModel for EmpiricalModel {
    fn medium_state(&self, frequency: f64, env: &AcousticEnvironment) -> MediumState {
        MediumState::ImpedanceWavenumber {
            impedance: env.characteristic_impedance() * self.normalized_impedance(frequency),
            wavenumber: env.wavenumber(frequency) * self.normalized_wavenumber(frequency),
        }
    }

    fn name(&self) -> &'static str {
        if self.coefficients == DELANY_BAZLEY {
            "delany-bazley"
        } else {
            "miki"
        }
    }
}
