//! Steady-state response of a forced, viscously damped single-degree-of-freedom
//! oscillator.
//!
//! With frequency ratio `r = ω/ωₙ` and damping ratio `ζ`:
//!
//! - `M(r) = 1 / √((1 − r²)² + (2ζr)²)`
//! - `φ(r) = atan2(2ζr, 1 − r²)` in degrees
//!
//! Phase convention: a negative `atan2` result is shifted by +180°, so angles are
//! reported in `[0°, 180°)` instead of the signed range `(−180°, 180°]`. This is a
//! teaching simplification (the phase lag of a positively damped system never goes
//! negative for `r ≥ 0`), kept deliberately rather than treated as a numerical bug.

/// Natural frequency `ωₙ = √(k/m)` in rad/s.
///
/// Evaluated as `√k / √m` so extreme magnitudes do not overflow in `k/m`.
pub fn natural_frequency(mass: f64, spring_constant: f64) -> f64 {
    spring_constant.sqrt() / mass.sqrt()
}

/// Damping ratio `ζ = c / (2·√(k·m))`.
///
/// Evaluated as `c / (2·√k·√m)`: the product `k·m` underflows to zero for tiny
/// positive inputs, which would make `ζ` infinite.
pub fn damping_ratio(mass: f64, damping: f64, spring_constant: f64) -> f64 {
    damping / (2.0 * spring_constant.sqrt() * mass.sqrt())
}

/// Magnification factor at frequency ratio `r`.
pub fn magnification(r: f64, zeta: f64) -> f64 {
    let stiffness_term = 1.0 - r * r;
    let damping_term = 2.0 * zeta * r;
    1.0 / (stiffness_term * stiffness_term + damping_term * damping_term).sqrt()
}

/// Phase angle at frequency ratio `r`, in degrees within `[0°, 180°)`.
pub fn phase_angle_deg(r: f64, zeta: f64) -> f64 {
    normalize_phase_deg((2.0 * zeta * r).atan2(1.0 - r * r).to_degrees())
}

/// Map a raw `atan2` angle in degrees into `[0°, 180°)` by adding 180° to negatives.
pub fn normalize_phase_deg(raw_deg: f64) -> f64 {
    if raw_deg < 0.0 { raw_deg + 180.0 } else { raw_deg }
}
