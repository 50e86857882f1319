//! Normal-incidence absorption of a rigid-backed layer.
//!
//! ```text
//! zs    = -j·z / tan(k·d)
//! R     = (zs - z0) / (zs + z0)
//! alpha = 1 - |R|²
//! ```
//!
//! The singular points of the tangent are mapped to their limits instead
//! of letting complex division turn them into NaN:
//!
//! - tan(k·d) = 0 gives an open-circuit surface (R = 1, alpha = 0).
//! - On the real axis the pole of the tangent is evaluated with the real
//!   `tan`, which stays finite, so the surface is a near short circuit.
//! - Just off the real axis, where cosh(2·Im) rounds to 1, the complex
//!   tangent divides by an exact zero and comes out infinite. That is
//!   treated as a short circuit (zs = 0, R = -1, alpha = 0).
//! - An overflowing tangent on a very deep lossy layer collapses to the
//!   semi-infinite value zs = z.
//!
//! Non-finite bulk properties are passed through untouched.

use num_complex::Complex64;

/// Input impedance of a layer of thickness `thickness` (m) on a rigid wall.
pub fn surface_impedance(
    impedance: Complex64,
    wavenumber: Complex64,
    thickness: f64,
) -> Complex64 {
    let t = layer_tangent(wavenumber * thickness);
    if impedance.is_finite() {
        if t.re == 0.0 && t.im == 0.0 {
            return Complex64::new(f64::INFINITY, 0.0);
        }
        if t.is_infinite() {
            return Complex64::new(0.0, 0.0);
        }
    }
    -Complex64::i() * impedance / t
}

/// tan(x), repairing the NaNs the sin/sinh over cos + cosh form produces
/// at its poles on the real axis and when cosh overflows for large |Im x|.
fn layer_tangent(x: Complex64) -> Complex64 {
    let t = x.tan();
    if !t.is_nan() || !x.is_finite() {
        return t;
    }
    if x.im == 0.0 {
        Complex64::new(x.re.tan(), 0.0)
    } else {
        // tan(x) -> ±j as |Im x| grows
        Complex64::new(0.0, x.im.signum())
    }
}

/// Pressure reflection coefficient of a surface impedance `zs` seen from a
/// medium of characteristic impedance `z0`.
pub fn reflection_coefficient(zs: Complex64, z0: f64) -> Complex64 {
    if zs.is_infinite() {
        return Complex64::new(1.0, 0.0);
    }
    (zs - z0) / (zs + z0)
}

/// Energy absorption coefficient 1 − |R|². Not clamped.
pub fn absorption_coefficient(reflection: Complex64) -> f64 {
    1.0 - reflection.norm_sqr()
}

/// Absorption of a rigid-backed layer with bulk impedance `impedance` and
/// wavenumber `wavenumber`.
pub fn rigid_backed_absorption(
    impedance: Complex64,
    wavenumber: Complex64,
    thickness: f64,
    z0: f64,
) -> f64 {
    let zs = surface_impedance(impedance, wavenumber, thickness);
    absorption_coefficient(reflection_coefficient(zs, z0))
}

/// [`rigid_backed_absorption`] over aligned per-frequency `(z, k)` slices.
pub fn absorption_spectrum(
    impedance: &[Complex64],
    wavenumber: &[Complex64],
    thickness: f64,
    z0: f64,
) -> Vec<f64> {
    assert_eq!(
        impedance.len(),
        wavenumber.len(),
        "impedance and wavenumber must have one entry per frequency"
    );
    impedance
        .iter()
        .zip(wavenumber)
        .map(|(&z, &k)| rigid_backed_absorption(z, k, thickness, z0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::reference_impedance;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn lossy_medium() -> (Complex64, Complex64) {
        let z0 = reference_impedance();
        (Complex64::new(1.8 * z0, -1.1 * z0), Complex64::new(40.0, -25.0))
    }

    #[test]
    fn test_zero_thickness_reflects_everything() {
        let (z, k) = lossy_medium();
        let zs = surface_impedance(z, k, 0.0);
        assert!(zs.is_infinite(), "zs = {zs}");
        let r = reflection_coefficient(zs, reference_impedance());
        assert_eq!(r, Complex64::new(1.0, 0.0));
        assert_eq!(rigid_backed_absorption(z, k, 0.0, reference_impedance()), 0.0);
    }

    #[test]
    fn test_vanishing_layer_limit() {
        let (z, k) = lossy_medium();
        let alpha = rigid_backed_absorption(z, k, 1e-9, reference_impedance());
        assert!(alpha.abs() < 1e-4, "alpha = {alpha}");
    }

    #[test]
    fn test_quarter_wave_lossless_layer_short_circuits() {
        // Real k with k·d = π/2: tan → ∞, zs → 0, R → -1
        let z0 = reference_impedance();
        let k = Complex64::new(PI / 2.0 / 0.05, 0.0);
        let zs = surface_impedance(Complex64::new(z0, 0.0), k, 0.05);
        assert!(zs.norm() < 1e-9, "zs = {zs}");
        let r = reflection_coefficient(zs, z0);
        assert!((r + 1.0).norm() < 1e-9, "R = {r}");
        assert!(absorption_coefficient(r).abs() < 1e-9);
    }

    #[test]
    fn test_pole_just_off_real_axis_short_circuits() {
        // tan(π/2 + 1e-10 j): cos(π) + cosh(2e-10) is exactly 0 in f64
        let z0 = reference_impedance();
        let k = Complex64::new(FRAC_PI_2, 1e-10);
        assert!(k.tan().is_infinite() && !k.tan().is_nan(), "tan = {}", k.tan());

        let zs = surface_impedance(Complex64::new(2.0 * z0, -z0), k, 1.0);
        assert_eq!(zs, Complex64::new(0.0, 0.0));
        assert_eq!(reflection_coefficient(zs, z0), Complex64::new(-1.0, 0.0));
        assert_eq!(rigid_backed_absorption(Complex64::new(2.0 * z0, -z0), k, 1.0, z0), 0.0);
    }

    #[test]
    fn test_lossless_layer_never_absorbs() {
        let z0 = reference_impedance();
        for n in 1..50 {
            let k = Complex64::new(n as f64 * 3.7, 0.0);
            let alpha = rigid_backed_absorption(Complex64::new(2.0 * z0, 0.0), k, 0.03, z0);
            assert!(alpha.abs() < 1e-9, "alpha = {alpha} for k = {k}");
        }
    }

    #[test]
    fn test_deep_lossy_layer_matches_semi_infinite_medium() {
        let z0 = reference_impedance();
        let (z, k) = lossy_medium();
        // Im(k)·d is large enough for the tangent to overflow
        let alpha = rigid_backed_absorption(z, k, 100.0, z0);
        let expected = absorption_coefficient((z - z0) / (z + z0));
        assert!(alpha.is_finite(), "alpha = {alpha}");
        assert!((alpha - expected).abs() < 1e-12, "alpha = {alpha}, expected {expected}");
    }

    #[test]
    fn test_matched_surface_absorbs_fully() {
        let z0 = reference_impedance();
        let r = reflection_coefficient(Complex64::new(z0, 0.0), z0);
        assert!(r.norm() < 1e-15);
        assert!((absorption_coefficient(r) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_invalid_medium_propagates_nan() {
        let z0 = reference_impedance();
        let nan = Complex64::new(f64::NAN, f64::NAN);
        let alpha = rigid_backed_absorption(nan, nan, 0.01, z0);
        assert!(alpha.is_nan());
    }

    #[test]
    fn test_spectrum_is_aligned() {
        let (z, k) = lossy_medium();
        let zs = vec![z; 7];
        let ks: Vec<Complex64> = (1..=7).map(|i| k * i as f64).collect();
        let alpha = absorption_spectrum(&zs, &ks, 0.02, reference_impedance());
        assert_eq!(alpha.len(), 7);
        for (i, &a) in alpha.iter().enumerate() {
            let expected = rigid_backed_absorption(zs[i], ks[i], 0.02, reference_impedance());
            assert_eq!(a.to_bits(), expected.to_bits());
        }
    }
}
