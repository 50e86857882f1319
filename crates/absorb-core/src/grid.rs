use crate::constants::{
    angular_frequency, DEFAULT_GRID_START, DEFAULT_GRID_STEP, DEFAULT_GRID_STOP, MAX_GRID_BINS,
};
use crate::error::{AbsorbError, Result};
use serde::{Deserialize, Serialize};

/// An ordered, immutable set of evaluation frequencies in Hz.
///
/// Entries are finite, positive and strictly increasing.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyGrid {
    frequencies: Vec<f64>,
}

impl FrequencyGrid {
    /// Build a grid from explicit frequencies.
    pub fn new(frequencies: Vec<f64>) -> Result<Self> {
        if frequencies.is_empty() {
            return Err(AbsorbError::invalid_grid("grid has no frequencies"));
        }
        if let Some((i, f)) = frequencies
            .iter()
            .enumerate()
            .find(|(_, f)| !f.is_finite() || **f <= 0.0)
        {
            return Err(AbsorbError::invalid_grid(format!(
                "frequency {f} at index {i} is not a finite positive value"
            )));
        }
        if let Some(i) = frequencies.windows(2).position(|w| w[1] <= w[0]) {
            return Err(AbsorbError::invalid_grid(format!(
                "frequencies must be strictly increasing ({} Hz follows {} Hz at index {})",
                frequencies[i + 1],
                frequencies[i],
                i + 1
            )));
        }
        Ok(Self { frequencies })
    }

    /// Half-open arithmetic grid `start, start + step, ...` below `stop`.
    pub fn linear(start: f64, stop: f64, step: f64) -> Result<Self> {
        if !(step.is_finite() && step > 0.0) {
            return Err(AbsorbError::invalid_grid(format!("step must be positive, got {step}")));
        }
        if !(stop.is_finite() && stop > start) {
            return Err(AbsorbError::invalid_grid(format!(
                "stop ({stop} Hz) must lie above start ({start} Hz)"
            )));
        }
        let bins = ((stop - start) / step).ceil();
        if bins > MAX_GRID_BINS as f64 {
            return Err(AbsorbError::invalid_grid(format!(
                "{start}..{stop} Hz in {step} Hz steps needs {bins} bins (limit {MAX_GRID_BINS})"
            )));
        }
        let count = bins as usize;
        Self::new((0..count).map(|i| start + i as f64 * step).collect())
    }

    /// Frequencies in Hz, ascending.
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// Number of bins.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Always false for a constructed grid.
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Iterate over the frequencies in Hz.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.frequencies.iter().copied()
    }

    /// Angular frequency ω = 2πf of entry `i`.
    pub fn angular_frequency(&self, i: usize) -> f64 {
        angular_frequency(self.frequencies[i])
    }
}

impl Default for FrequencyGrid {
    fn default() -> Self {
        let count = ((DEFAULT_GRID_STOP - DEFAULT_GRID_START) / DEFAULT_GRID_STEP).ceil() as usize;
        Self {
            frequencies: (0..count)
                .map(|i| DEFAULT_GRID_START + i as f64 * DEFAULT_GRID_STEP)
                .collect(),
        }
    }
}

/// Serializable description of a linear grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSpec {
    /// First frequency in Hz.
    pub start: f64,
    /// Upper bound in Hz (excluded).
    pub stop: f64,
    /// Spacing in Hz.
    pub step: f64,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            start: DEFAULT_GRID_START,
            stop: DEFAULT_GRID_STOP,
            step: DEFAULT_GRID_STEP,
        }
    }
}

impl GridSpec {
    /// Expand into a grid, see [`FrequencyGrid::linear`].
    pub fn build(&self) -> Result<FrequencyGrid> {
        FrequencyGrid::linear(self.start, self.stop, self.step)
    }
}
