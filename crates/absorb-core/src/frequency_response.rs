use crate::environment::AcousticEnvironment;
use crate::layer::RigidBackedLayer;
use rayon::prelude::*;
use tracing::{debug, warn};

/// Sweep the layer's absorption coefficient across `frequencies`.
///
/// Frequencies are evaluated in parallel; entry `i` of the result always
/// belongs to `frequencies[i]`.
pub fn sweep(layer: &RigidBackedLayer, frequencies: &[f64], env: &AcousticEnvironment) -> Vec<f64> {
    let absorption: Vec<f64> = frequencies
        .par_iter()
        .map(|&f| layer.absorption(f, env))
        .collect();

    let non_finite = absorption.iter().filter(|a| !a.is_finite()).count();
    if non_finite > 0 {
        warn!(
            model = layer.model().name(),
            thickness = layer.thickness,
            non_finite,
            "absorption spectrum contains non-finite values"
        );
    }
    debug!(
        model = layer.model().name(),
        thickness = layer.thickness,
        bins = frequencies.len(),
        "swept absorption spectrum"
    );

    absorption
}
