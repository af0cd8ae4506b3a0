use serde::{Deserialize, Serialize};

use crate::error::ParameterError;
use crate::math::{damping_ratio, natural_frequency};

/// Number of samples in the frequency-ratio sweep.
pub const SWEEP_LEN: usize = 500;

/// Upper end of the frequency-ratio sweep (the lower end is always 0).
pub const SWEEP_MAX_RATIO: f64 = 5.0;

/// The ratio the resonance lookup targets.
pub const RESONANCE_RATIO: f64 = 1.0;

/// Physical inputs of a single-degree-of-freedom oscillator.
///
/// Values can only be built through [`OscillatorParameters::new`], so holding one
/// means all three are finite and strictly positive. A zero in any field is the
/// "absent input" sentinel used by the input form and never reaches the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawParameters", into = "RawParameters")]
pub struct OscillatorParameters {
    mass: f64,
    damping: f64,
    spring_constant: f64,
}

impl OscillatorParameters {
    /// Validate a (mass, damping, spring constant) triple.
    pub fn new(mass: f64, damping: f64, spring_constant: f64) -> Result<Self, ParameterError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !(valid(mass) && valid(damping) && valid(spring_constant)) {
            return Err(ParameterError::InvalidParameters {
                mass,
                damping,
                spring_constant,
            });
        }
        // Positive inputs can still give a degenerate ζ or ωₙ at the edges of f64.
        let zeta = damping_ratio(mass, damping, spring_constant);
        let omega_n = natural_frequency(mass, spring_constant);
        if !(valid(zeta) && valid(omega_n)) {
            return Err(ParameterError::InvalidParameters {
                mass,
                damping,
                spring_constant,
            });
        }
        Ok(Self {
            mass,
            damping,
            spring_constant,
        })
    }

    /// Mass `m` in kg.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Damping constant `c` in N·s/m.
    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// Spring constant `k` in N/m.
    pub fn spring_constant(&self) -> f64 {
        self.spring_constant
    }
}

/// Unvalidated mirror of [`OscillatorParameters`] used for (de)serialization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawParameters {
    mass: f64,
    damping: f64,
    spring_constant: f64,
}

impl TryFrom<RawParameters> for OscillatorParameters {
    type Error = ParameterError;

    fn try_from(raw: RawParameters) -> Result<Self, Self::Error> {
        OscillatorParameters::new(raw.mass, raw.damping, raw.spring_constant)
    }
}

impl From<OscillatorParameters> for RawParameters {
    fn from(p: OscillatorParameters) -> Self {
        RawParameters {
            mass: p.mass,
            damping: p.damping,
            spring_constant: p.spring_constant,
        }
    }
}

/// The fixed frequency-ratio grid `r_i = 5·i/499`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencySweep {
    pub ratios: Vec<f64>,
}

impl FrequencySweep {
    pub fn len(&self) -> usize {
        self.ratios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }

    /// Distance between two neighbouring samples.
    pub fn spacing(&self) -> f64 {
        if self.ratios.len() < 2 {
            return 0.0;
        }
        self.ratios[1] - self.ratios[0]
    }
}

/// Sampled steady-state response, indexed like [`FrequencySweep`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseCurve {
    /// Magnification factor `M(r)` (dimensionless).
    pub magnification: Vec<f64>,
    /// Phase angle `φ(r)` in degrees, normalized into `[0°, 180°)`.
    pub phase_angle_deg: Vec<f64>,
}

/// Response at the sweep sample nearest to `r = 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResonancePoint {
    /// Index into the sweep of the selected sample.
    pub index: usize,
    /// Frequency ratio of the selected sample (not exactly 1 on this grid).
    pub frequency_ratio: f64,
    pub magnification: f64,
    pub phase_angle_deg: f64,
    /// Damping ratio `ζ`; constant across the sweep.
    pub damping_ratio: f64,
}

/// Everything derived from one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OscillatorResponse {
    pub parameters: OscillatorParameters,
    /// Natural frequency `ωₙ` in rad/s.
    pub natural_frequency: f64,
    pub damping_ratio: f64,
    pub sweep: FrequencySweep,
    pub curve: ResponseCurve,
    pub resonance: ResonancePoint,
}

impl OscillatorResponse {
    /// `(r, M)` pairs for plotting.
    pub fn magnification_series(&self) -> Vec<(f64, f64)> {
        self.sweep
            .ratios
            .iter()
            .copied()
            .zip(self.curve.magnification.iter().copied())
            .collect()
    }

    /// `(r, φ)` pairs for plotting.
    pub fn phase_series(&self) -> Vec<(f64, f64)> {
        self.sweep
            .ratios
            .iter()
            .copied()
            .zip(self.curve.phase_angle_deg.iter().copied())
            .collect()
    }
}

/// Which response curve a plot shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveKind {
    Magnification,
    Phase,
}

impl CurveKind {
    /// Axis title used by the plots.
    pub fn axis_label(self) -> &'static str {
        match self {
            CurveKind::Magnification => "Magnification Factor (M)",
            CurveKind::Phase => "Phase Angle (φ) [°]",
        }
    }

    /// Chart heading.
    pub fn title(self) -> &'static str {
        match self {
            CurveKind::Magnification => "Magnification Factor vs Frequency Ratio",
            CurveKind::Phase => "Phase Angle vs Frequency Ratio",
        }
    }
}

/// A saved response file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseFile {
    pub tool: String,
    pub generated_at: chrono::DateTime<chrono::FixedOffset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub parameters: OscillatorParameters,
    pub natural_frequency: f64,
    pub damping_ratio: f64,
    pub resonance: ResonancePoint,
    pub grid: ResponseGrid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseGrid {
    pub frequency_ratio: Vec<f64>,
    pub magnification: Vec<f64>,
    pub phase_angle_deg: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameters_reject_zero_in_any_slot() {
        assert!(OscillatorParameters::new(0.0, 1.0, 1.0).is_err());
        assert!(OscillatorParameters::new(1.0, 0.0, 1.0).is_err());
        assert!(OscillatorParameters::new(1.0, 1.0, 0.0).is_err());
        assert!(OscillatorParameters::new(1.0, 1.0, 1.0).is_ok());
    }

    #[test]
    fn parameters_reject_negative_and_non_finite() {
        assert!(OscillatorParameters::new(-1.0, 1.0, 1.0).is_err());
        assert!(OscillatorParameters::new(1.0, f64::NAN, 1.0).is_err());
        assert!(OscillatorParameters::new(1.0, 1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn parameters_reject_overflowing_damping_ratio() {
        assert!(OscillatorParameters::new(1e-300, 1e300, 1e-300).is_err());
        assert!(OscillatorParameters::new(1e-200, 1e-200, 1e-200).is_ok());
    }

    #[test]
    fn parameters_deserialize_through_validation() {
        let ok: OscillatorParameters =
            serde_json::from_str(r#"{"mass":2.0,"damping":0.5,"spring_constant":8.0}"#).unwrap();
        assert_eq!(ok.mass(), 2.0);
        assert_eq!(ok.spring_constant(), 8.0);

        let bad = serde_json::from_str::<OscillatorParameters>(
            r#"{"mass":0.0,"damping":0.5,"spring_constant":8.0}"#,
        );
        assert!(bad.is_err());
    }
}
