// ─────────────────────────────────────────────────────────────────────
// SCPN QED Scan — Forward Divergence Handling
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Local handling of the t-channel pole at cos θ = 1.
//!
//! Formulas return ∞/NaN there; these helpers either keep such samples out
//! of a scan up front or clip the results afterwards. Nothing here changes
//! floating-point behavior outside the samples it is given.

use ndarray::{Array, Array1, Dimension};
use qed_types::state::AngularScan;

/// True where 1 − cos θ rounds to zero, so t-channel terms divide by zero.
pub fn is_forward_singular(theta: f64) -> bool {
    1.0 - theta.cos() <= 0.0
}

/// Copy of `scan` without the samples where the t-channel pole is hit.
pub fn exclude_forward(scan: &AngularScan) -> AngularScan {
    let theta: Array1<f64> = scan
        .theta
        .iter()
        .copied()
        .filter(|&t| !is_forward_singular(t))
        .collect();
    let removed = scan.len() - theta.len();
    if removed > 0 {
        tracing::debug!(removed, "excluded forward-singular angles");
    }
    let cos_theta = theta.mapv(f64::cos);
    AngularScan { theta, cos_theta }
}

/// Replace every value above `bound` (including +∞) with `bound`.
///
/// NaN is left in place for the renderer to skip. Returns the number clipped.
pub fn clip_above<D: Dimension>(values: &mut Array<f64, D>, bound: f64) -> usize {
    let mut clipped = 0;
    values.iter_mut().for_each(|v| {
        if *v > bound {
            *v = bound;
            clipped += 1;
        }
    });
    if clipped > 0 {
        tracing::debug!(clipped, bound, "clipped divergent samples");
    }
    clipped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bhabha::Bhabha;
    use crate::channels::InterferenceTerms;
    use crate::scan;
    use ndarray::array;

    #[test]
    fn test_forward_detection() {
        assert!(is_forward_singular(0.0));
        assert!(is_forward_singular(1e-10));
        assert!(!is_forward_singular(1e-3));
        assert!(!is_forward_singular(std::f64::consts::PI));
    }

    #[test]
    fn test_exclude_forward_removes_only_pole() {
        let angles = AngularScan::new(1000);
        let regular = exclude_forward(&angles);
        assert_eq!(regular.len(), 999);
        assert!(regular.theta[0] > 0.0);
        assert_eq!(regular.cos_theta.len(), regular.theta.len());

        let b = Bhabha::default();
        let dsigma = scan::angular(&regular, 196.0, |t, s| b.diff_cross_section(t, s));
        assert!(dsigma.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_clip_above_counts_and_keeps_nan() {
        let mut z = array![[0.5, f64::INFINITY], [f64::NAN, 3.0]];
        let n = clip_above(&mut z, 1.0);
        assert_eq!(n, 2);
        assert_eq!(z[[0, 0]], 0.5);
        assert_eq!(z[[0, 1]], 1.0);
        assert!(z[[1, 0]].is_nan());
        assert_eq!(z[[1, 1]], 1.0);
    }
}
