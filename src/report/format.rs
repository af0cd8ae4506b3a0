//! Formatted terminal output for a computed response.
//!
//! We keep formatting code in one place so:
//! - the math stays clean and testable
//! - output changes are localized (the TUI and the CLI share the same strings)

use crate::app::pipeline::RunOutput;
use crate::domain::{OscillatorResponse, ResonancePoint};

/// Heading shown above the resonance values.
pub fn resonance_heading(name: &str) -> String {
    format!("Output at Resonance (r = 1) for {name}")
}

/// `(label, value)` pairs for the resonance panel, in display order.
pub fn resonance_metrics(resonance: &ResonancePoint) -> [(&'static str, String); 3] {
    [
        ("Magnification Factor (M)", format!("{:.4}", resonance.magnification)),
        ("Phase Angle (φ)", format!("{:.2}°", resonance.phase_angle_deg)),
        ("Damping Ratio (ζ)", format!("{:.4}", resonance.damping_ratio)),
    ]
}

/// Format the full run summary (inputs + derived values + resonance).
pub fn format_run_summary(run: &RunOutput) -> String {
    let r = &run.response;
    let p = &r.parameters;
    let mut out = String::new();

    out.push_str("=== VMATT - Vibration Magnification and Angle Teaching Tool ===\n");
    out.push_str(&format!(
        "Inputs: m={:.3} kg | c={:.3} N·s/m | k={:.3} N/m\n",
        p.mass(),
        p.damping(),
        p.spring_constant()
    ));
    out.push_str(&format!(
        "Derived: ωn={:.4} rad/s | ζ={:.4}\n",
        r.natural_frequency, r.damping_ratio
    ));
    out.push_str(&format!(
        "Sweep: n={} | r=[{:.1}, {:.1}] | Δr={:.5}\n",
        r.sweep.len(),
        r.sweep.ratios.first().copied().unwrap_or(0.0),
        r.sweep.ratios.last().copied().unwrap_or(0.0),
        r.sweep.spacing()
    ));

    out.push('\n');
    out.push_str(&resonance_heading(&run.name));
    out.push_str(&format!(" [nearest sample r={:.4}]\n", r.resonance.frequency_ratio));
    for (label, value) in resonance_metrics(&r.resonance) {
        out.push_str(&format!("- {label:<26} {value}\n"));
    }

    out
}

/// Format every `step`-th sweep sample (plus the resonance sample) as a table.
pub fn format_response_table(response: &OscillatorResponse, step: usize) -> String {
    let step = step.max(1);
    let mut out = String::new();
    out.push_str(&format!("{:>5} {:>8} {:>12} {:>10}\n", "i", "r", "M", "phi_deg"));
    out.push_str(&format!("{:->5} {:->8} {:->12} {:->10}\n", "", "", "", ""));

    let res_idx = response.resonance.index;
    for (i, &r) in response.sweep.ratios.iter().enumerate() {
        if i % step != 0 && i != res_idx {
            continue;
        }
        let marker = if i == res_idx { " *" } else { "" };
        out.push_str(&format!(
            "{:>5} {:>8.4} {:>12.4} {:>10.2}{marker}\n",
            i, r, response.curve.magnification[i], response.curve.phase_angle_deg[i],
        ));
    }

    out
}
