// ─────────────────────────────────────────────────────────────────────
// SCPN QED Scan — Visible Curve Segments
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Splitting sampled curves at divergent or off-axis points.
//!
//! Near cos θ = 1 the t-channel terms run off any y-axis and eventually
//! become ∞. The backend does not clip, so curves are cut into runs of
//! drawable samples instead.

use ndarray::Array1;

/// Runs of consecutive samples with finite x, finite y and `lo <= y <= hi`.
///
/// Runs shorter than two points are dropped since they draw nothing.
pub fn visible_segments(xs: &Array1<f64>, ys: &Array1<f64>, lo: f64, hi: f64) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();

    for (&x, &y) in xs.iter().zip(ys.iter()) {
        let visible = x.is_finite() && y.is_finite() && y >= lo && y <= hi;
        if visible {
            current.push((x, y));
        } else if !current.is_empty() {
            flush(&mut segments, &mut current);
        }
    }
    flush(&mut segments, &mut current);
    segments
}

fn flush(segments: &mut Vec<Vec<(f64, f64)>>, current: &mut Vec<(f64, f64)>) {
    if current.len() >= 2 {
        segments.push(std::mem::take(current));
    } else {
        current.clear();
    }
}

/// Decade-aligned bounds enclosing every finite positive value, for log axes.
///
/// Returns `None` when no value qualifies.
pub fn log_bounds<'a, I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = &'a f64>,
{
    let (min, max) = values
        .into_iter()
        .filter(|v| v.is_finite() && **v > 0.0)
        .fold((f64::INFINITY, 0.0f64), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if !min.is_finite() {
        return None;
    }
    let lo = 10f64.powi(min.log10().floor() as i32);
    let mut hi = 10f64.powi(max.log10().ceil() as i32);
    if hi <= lo {
        hi = lo * 10.0;
    }
    Some((lo, hi))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_all_visible_is_one_segment() {
        let xs = array![0.0, 1.0, 2.0];
        let ys = array![1.0, 2.0, 3.0];
        let segs = visible_segments(&xs, &ys, 0.0, 10.0);
        assert_eq!(segs, vec![vec![(0.0, 1.0), (1.0, 2.0), (2.0, 3.0)]]);
    }

    #[test]
    fn test_divergent_head_is_cut() {
        // Like a t-channel term sampled from θ = 0
        let xs = array![1.0, 0.9, 0.5, 0.0, -0.5];
        let ys = array![f64::INFINITY, 5e4, 20.0, 8.0, 4.0];
        let segs = visible_segments(&xs, &ys, 1e-3, 1e3);
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].first(), Some(&(0.5, 20.0)));
        assert_eq!(segs[0].len(), 3);
    }

    #[test]
    fn test_gap_splits_and_singletons_dropped() {
        let xs = array![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let ys = array![1.0, 1.0, f64::NAN, 1.0, 100.0, 1.0, 1.0];
        let segs = visible_segments(&xs, &ys, 0.0, 10.0);
        assert_eq!(segs, vec![vec![(0.0, 1.0), (1.0, 1.0)], vec![(5.0, 1.0), (6.0, 1.0)]]);
    }

    #[test]
    fn test_log_bounds_decades() {
        let v = [0.03, 5.0, 420.0, f64::INFINITY, -1.0, 0.0];
        assert_eq!(log_bounds(v.iter()), Some((0.01, 1000.0)));
    }

    #[test]
    fn test_log_bounds_exact_decade() {
        let v = [1.0];
        assert_eq!(log_bounds(v.iter()), Some((1.0, 10.0)));
        let empty: [f64; 0] = [];
        assert_eq!(log_bounds(empty.iter()), None);
    }
}
