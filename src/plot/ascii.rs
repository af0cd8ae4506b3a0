//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - response curve: `-` line
//! - optional resonance sample: `o`

use crate::domain::{CurveKind, OscillatorResponse, ResponseFile};

/// Render one curve of an in-memory response, marking the resonance sample.
pub fn render_response_plot(response: &OscillatorResponse, kind: CurveKind, width: usize, height: usize) -> String {
    let (series, marker_y) = match kind {
        CurveKind::Magnification => (response.magnification_series(), response.resonance.magnification),
        CurveKind::Phase => (response.phase_series(), response.resonance.phase_angle_deg),
    };
    let marker = (response.resonance.frequency_ratio, marker_y);
    render_plot(&series, Some(marker), kind, width, height)
}

/// Render one curve of a saved response file.
pub fn render_response_file_plot(file: &ResponseFile, kind: CurveKind, width: usize, height: usize) -> String {
    let ys = match kind {
        CurveKind::Magnification => &file.grid.magnification,
        CurveKind::Phase => &file.grid.phase_angle_deg,
    };
    let series: Vec<(f64, f64)> = file
        .grid
        .frequency_ratio
        .iter()
        .copied()
        .zip(ys.iter().copied())
        .collect();
    let marker_y = match kind {
        CurveKind::Magnification => file.resonance.magnification,
        CurveKind::Phase => file.resonance.phase_angle_deg,
    };
    render_plot(&series, Some((file.resonance.frequency_ratio, marker_y)), kind, width, height)
}

/// Render a series with an optional highlighted point.
pub fn render_plot(
    series: &[(f64, f64)],
    marker: Option<(f64, f64)>,
    kind: CurveKind,
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (x_min, x_max) = axis_range(series.iter().map(|&(x, _)| x)).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = axis_range(series.iter().map(|&(_, y)| y)).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Draw curve first (so the marker can overlay).
    draw_curve(&mut grid, series, x_min, x_max, y_min, y_max);

    if let Some((mx, my)) = marker {
        if mx.is_finite() && my.is_finite() {
            let x = map_x(mx, x_min, x_max, width);
            let y = map_y(my, y_min, y_max, height);
            grid[y][x] = 'o';
        }
    }

    let y_name = match kind {
        CurveKind::Magnification => "M",
        CurveKind::Phase => "phi",
    };

    // Build final string. We include a small header with ranges.
    let mut out = String::new();
    out.push_str(&format!(
        "Plot: {} | r=[{x_min:.3}, {x_max:.3}] | {y_name}=[{y_min:.2}, {y_max:.2}]\n",
        kind.title()
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn axis_range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min_v = f64::INFINITY;
    let mut max_v = f64::NEG_INFINITY;
    for v in values.filter(|v| v.is_finite()) {
        min_v = min_v.min(v);
        max_v = max_v.max(v);
    }
    if min_v.is_finite() && max_v.is_finite() && max_v > min_v {
        Some((min_v, max_v))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(grid: &mut [Vec<char>], curve: &[(f64, f64)], x_min: f64, x_max: f64, y_min: f64, y_max: f64) {
    if curve.len() < 2 {
        return;
    }
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(x, y) in curve {
        if !(x.is_finite() && y.is_finite()) {
            prev = None;
            continue;
        }
        let xx = map_x(x, x_min, x_max, width);
        let yy = map_y(y, y_min, y_max, height);
        if let Some((x0, y0)) = prev {
            draw_line(grid, x0, y0, xx, yy, '-');
        } else {
            grid[yy][xx] = '-';
        }
        prev = Some((xx, yy));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::run_response;

    #[test]
    fn plot_golden_snapshot_small() {
        let series = [(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)];
        let txt = render_plot(&series, Some((1.0, 1.0)), CurveKind::Magnification, 11, 5);
        let expected = concat!(
            "Plot: Magnification Factor vs Frequency Ratio | r=[0.000, 2.000] | M=[-0.05, 1.05]\n",
            "     o     \n",
            "    - -    \n",
            "  --   --  \n",
            " -       - \n",
            "-         -\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn response_plot_has_requested_shape() {
        let run = run_response("Ada", 1.0, 0.2, 1.0).unwrap();
        let txt = render_response_plot(&run.response, CurveKind::Phase, 60, 12);
        let lines: Vec<&str> = txt.lines().collect();
        assert_eq!(lines.len(), 1 + 12);
        assert!(lines[0].contains("r=[0.000, 5.000]"));
        assert!(lines[1..].iter().all(|l| l.chars().count() == 60));
        let marks: usize = lines[1..].iter().map(|l| l.matches('o').count()).sum();
        assert_eq!(marks, 1);
    }
}
