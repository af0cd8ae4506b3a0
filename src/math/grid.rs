//! Sampling grid helpers.

/// Generate `steps` evenly spaced points between `min` and `max` (inclusive).
///
/// Point `i` is computed as `min + (max - min)·i/(steps - 1)` so both endpoints are
/// reproduced exactly. `steps == 1` yields `[min]`; `steps == 0` yields nothing.
pub fn linspace(min: f64, max: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let denom = (steps - 1) as f64;
            (0..steps)
                .map(|i| min + (max - min) * i as f64 / denom)
                .collect()
        }
    }
}

/// Index of the value closest to `target` (first one wins on ties).
///
/// Returns `None` for an empty slice or when every distance is NaN.
pub fn nearest_index(values: &[f64], target: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        let d = (v - target).abs();
        if d.is_nan() {
            continue;
        }
        match best {
            Some((_, bd)) if d >= bd => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_endpoints() {
        let v = linspace(0.0, 5.0, 500);
        assert_eq!(v.len(), 500);
        assert_eq!(v[0], 0.0);
        assert_eq!(v[499], 5.0);
        assert!((v[1] - 5.0 / 499.0).abs() < 1e-15);
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
    }

    #[test]
    fn nearest_index_prefers_first_on_tie() {
        let v = [0.0, 0.5, 1.5, 2.0];
        assert_eq!(nearest_index(&v, 1.0), Some(1));
        assert_eq!(nearest_index(&v, 1.9), Some(3));
        assert_eq!(nearest_index(&[], 1.0), None);
    }

    #[test]
    fn nearest_to_one_on_the_sweep_grid() {
        let v = linspace(0.0, 5.0, 500);
        // 5·100/499 ≈ 1.002 is the closest sample to r = 1.
        assert_eq!(nearest_index(&v, 1.0), Some(100));
    }
}
