//! Response calculator: validated oscillator inputs -> sampled curves + resonance.
//!
//! The calculator is a pure function. Identical inputs give bit-identical output,
//! and invalid inputs cannot reach it because `OscillatorParameters` is only
//! constructible through validation.

use crate::domain::{
    FrequencySweep, OscillatorParameters, OscillatorResponse, RESONANCE_RATIO, ResonancePoint,
    ResponseCurve, SWEEP_LEN, SWEEP_MAX_RATIO,
};
use crate::math::{damping_ratio, linspace, magnification, natural_frequency, nearest_index, phase_angle_deg};

/// The fixed 500-sample sweep over `[0, 5]`.
pub fn frequency_sweep() -> FrequencySweep {
    FrequencySweep {
        ratios: linspace(0.0, SWEEP_MAX_RATIO, SWEEP_LEN),
    }
}

/// Evaluate `M(r)` and `φ(r)` on every sweep sample for a damping ratio.
pub fn sample_curve(sweep: &FrequencySweep, zeta: f64) -> ResponseCurve {
    let mut mag = Vec::with_capacity(sweep.len());
    let mut phase = Vec::with_capacity(sweep.len());
    for &r in &sweep.ratios {
        mag.push(magnification(r, zeta));
        phase.push(phase_angle_deg(r, zeta));
    }
    ResponseCurve {
        magnification: mag,
        phase_angle_deg: phase,
    }
}

/// Pick the sample nearest `r = 1`.
///
/// The grid spacing is 5/499, so the reported values approximate exact resonance
/// to within one sample. `zeta` is reported as-is (it does not vary with `r`).
pub fn resonance_point(sweep: &FrequencySweep, curve: &ResponseCurve, zeta: f64) -> ResonancePoint {
    // The sweep is never empty, so fall back to the first sample only in theory.
    let index = nearest_index(&sweep.ratios, RESONANCE_RATIO).unwrap_or(0);
    ResonancePoint {
        index,
        frequency_ratio: sweep.ratios.get(index).copied().unwrap_or(f64::NAN),
        magnification: curve.magnification.get(index).copied().unwrap_or(f64::NAN),
        phase_angle_deg: curve.phase_angle_deg.get(index).copied().unwrap_or(f64::NAN),
        damping_ratio: zeta,
    }
}

/// Compute the full steady-state response for one oscillator.
pub fn compute_response(params: &OscillatorParameters) -> OscillatorResponse {
    let omega_n = natural_frequency(params.mass(), params.spring_constant());
    let zeta = damping_ratio(params.mass(), params.damping(), params.spring_constant());

    let sweep = frequency_sweep();
    let curve = sample_curve(&sweep, zeta);
    let resonance = resonance_point(&sweep, &curve, zeta);

    OscillatorResponse {
        parameters: *params,
        natural_frequency: omega_n,
        damping_ratio: zeta,
        sweep,
        curve,
        resonance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params(m: f64, c: f64, k: f64) -> OscillatorParameters {
        OscillatorParameters::new(m, c, k).unwrap()
    }

    #[test]
    fn curves_have_one_entry_per_sweep_sample() {
        for &(m, c, k) in &[(1.0, 0.2, 1.0), (3.5, 12.0, 400.0), (0.01, 0.001, 5.0)] {
            let out = compute_response(&params(m, c, k));
            assert_eq!(out.sweep.len(), SWEEP_LEN);
            assert_eq!(out.curve.magnification.len(), SWEEP_LEN);
            assert_eq!(out.curve.phase_angle_deg.len(), SWEEP_LEN);
            assert_eq!(out.sweep.ratios[0], 0.0);
            assert_eq!(out.sweep.ratios[SWEEP_LEN - 1], SWEEP_MAX_RATIO);
            assert_relative_eq!(out.sweep.spacing(), 5.0 / 499.0, max_relative = 1e-12);
        }
    }

    #[test]
    fn zero_ratio_is_static_response() {
        let out = compute_response(&params(2.0, 0.7, 30.0));
        assert_eq!(out.curve.magnification[0], 1.0);
        assert_eq!(out.curve.phase_angle_deg[0], 0.0);
    }

    #[test]
    fn tiny_valid_inputs_keep_static_response() {
        let out = compute_response(&params(1e-200, 1e-200, 1e-200));
        assert_relative_eq!(out.damping_ratio, 0.5, max_relative = 1e-12);
        assert_eq!(out.curve.magnification[0], 1.0);
        assert_eq!(out.curve.phase_angle_deg[0], 0.0);
        assert!(out.curve.magnification.iter().all(|m| m.is_finite()));
    }

    #[test]
    fn critically_damped_system() {
        let out = compute_response(&params(1.0, 2.0, 1.0));
        assert_relative_eq!(out.damping_ratio, 1.0);
        assert_relative_eq!(out.resonance.damping_ratio, 1.0);
        assert_relative_eq!(out.natural_frequency, 1.0);
    }

    #[test]
    fn lightly_damped_resonance_peak() {
        let out = compute_response(&params(1.0, 0.2, 1.0));
        assert_relative_eq!(out.damping_ratio, 0.1, max_relative = 1e-12);
        assert_eq!(out.resonance.index, 100);
        assert!((out.resonance.frequency_ratio - 1.0).abs() <= 5.0 / 499.0);
        assert_relative_eq!(out.resonance.magnification, 5.0, max_relative = 0.01);
        // Sample sits just above r = 1, so the phase is just past 90°.
        assert!(out.resonance.phase_angle_deg > 90.0 && out.resonance.phase_angle_deg < 92.0);
    }

    #[test]
    fn phase_stays_in_half_open_range() {
        let out = compute_response(&params(1.0, 0.02, 1.0));
        for &phi in &out.curve.phase_angle_deg {
            assert!((0.0..180.0).contains(&phi), "phi={phi}");
        }
        // Past resonance, light damping drives the phase towards 180°.
        let last = out.curve.phase_angle_deg[SWEEP_LEN - 1];
        assert!(last > 179.0);
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let p = params(1.3, 0.45, 17.0);
        let a = compute_response(&p);
        let b = compute_response(&p);
        fn bits(v: &[f64]) -> Vec<u64> {
            v.iter().map(|x| x.to_bits()).collect()
        }
        assert_eq!(bits(&a.curve.magnification), bits(&b.curve.magnification));
        assert_eq!(bits(&a.curve.phase_angle_deg), bits(&b.curve.phase_angle_deg));
        assert_eq!(a, b);
    }
}
