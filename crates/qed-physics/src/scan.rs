// ─────────────────────────────────────────────────────────────────────
// SCPN QED Scan — Vectorized Scans
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Element-wise evaluation of cross-section formulas over kinematic samples.
//!
//! Terms are passed as closures so any model method (or combination) can be
//! scanned: `scan::angular(&angles, s, |t, s| bhabha.scattering(t, s))`.

use ndarray::{Array1, Array2, Zip};
use qed_types::state::{AngularScan, EnergyScan, KinematicGrid};

/// Evaluate `term(θ, s)` at fixed `s` for every θ of the scan.
pub fn angular<F>(scan: &AngularScan, s: f64, term: F) -> Array1<f64>
where
    F: Fn(f64, f64) -> f64,
{
    scan.theta.mapv(|theta| term(theta, s))
}

/// Evaluate `total(s)` for every s of the scan.
pub fn energy<F>(scan: &EnergyScan, total: F) -> Array1<f64>
where
    F: Fn(f64) -> f64,
{
    scan.s.mapv(total)
}

/// Evaluate `term(θ, s)` over the (θ, √s) meshgrid. Output is `[n_sqrt_s, n_theta]`.
pub fn surface<F>(grid: &KinematicGrid, term: F) -> Array2<f64>
where
    F: Fn(f64, f64) -> f64,
{
    let mut out = Array2::zeros(grid.shape());
    Zip::from(&mut out)
        .and(&grid.theta_mesh)
        .and(&grid.sqrt_s_mesh)
        .for_each(|z, &theta, &sqrt_s| {
            *z = term(theta, sqrt_s * sqrt_s);
        });
    out
}

/// Evaluate `events(s, L)` over a (√s, L) product grid. Output is `[n_sqrt_s, n_lumi]`.
pub fn events_surface<F>(sqrt_s: &Array1<f64>, luminosity: &Array1<f64>, events: F) -> Array2<f64>
where
    F: Fn(f64, f64) -> f64,
{
    Array2::from_shape_fn((sqrt_s.len(), luminosity.len()), |(i, j)| {
        events(sqrt_s[i] * sqrt_s[i], luminosity[j])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bhabha::Bhabha;
    use crate::channels::{ChannelTerms, InterferenceTerms};
    use crate::muon_pair::MuonPairProduction;
    use crate::total::TotalCrossSection;

    #[test]
    fn test_angular_matches_scalar() {
        let b = Bhabha::default();
        let angles = AngularScan::new(64);
        let values = angular(&angles, 196.0, |t, s| b.scattering(t, s));
        assert_eq!(values.len(), 64);
        for (i, &theta) in angles.theta.iter().enumerate() {
            let scalar = b.scattering(theta, 196.0);
            assert!(values[i] == scalar || (values[i].is_infinite() && scalar.is_infinite()));
        }
        assert_eq!(values[0], f64::INFINITY);
    }

    #[test]
    fn test_energy_scan_falls_as_inverse_s() {
        let m = MuonPairProduction::default();
        let total = m.total();
        let energies = EnergyScan::new(1.0, 40.0, 100);
        let sigma = energy(&energies, |s| total.cross_section(s));
        for i in 0..energies.len() {
            let product = sigma[i] * energies.s[i];
            assert!((product - sigma[0] * energies.s[0]).abs() < 1e-15);
        }
    }

    #[test]
    fn test_surface_layout() {
        let b = Bhabha::default();
        let grid = KinematicGrid::new(20, 1.0, 40.0, 10);
        let z = surface(&grid, |t, s| b.diff_cross_section(t, s));
        assert_eq!(z.shape(), &[10, 20]);
        let expected = b.diff_cross_section(grid.theta[7], grid.sqrt_s[3] * grid.sqrt_s[3]);
        assert_eq!(z[[3, 7]], expected);
        // θ = 0 column is ∞ − ∞
        assert!(z.column(0).iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_events_surface_shape_and_value() {
        let b = Bhabha::default();
        let total = b.total();
        let sqrt_s = Array1::from(vec![10.0, 20.0, 30.0]);
        let lumi = Array1::from(vec![1.0, 2.0]);
        let n = events_surface(&sqrt_s, &lumi, |s, l| total.expected_events(s, l, 0.5));
        assert_eq!(n.shape(), &[3, 2]);
        assert!((n[[1, 1]] / n[[1, 0]] - 2.0).abs() < 1e-12);
        assert!((n[[0, 0]] / n[[1, 0]] - 4.0).abs() < 1e-12);
    }
}
