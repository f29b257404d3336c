// ─────────────────────────────────────────────────────────────────────
// SCPN QED Scan — Muon Pair Production
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! e⁺e⁻ → μ⁺μ⁻ at tree level, massless limit.
//!
//! The `scattering` term is the t-channel shape kept for comparison with
//! Bhabha scattering; the physical process is pure s-channel.

use crate::channels::{ChannelTerms, Process, ProcessModel};
use crate::total::MuonPairTotal;
use qed_types::constants::ALPHA_QED;
use qed_types::units::CrossSectionUnit;

/// Muon pair production model. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MuonPairProduction {
    unit: f64,
}

impl MuonPairProduction {
    /// `unit_conversion` multiplies every GeV⁻² result.
    pub fn new(unit_conversion: f64) -> Self {
        MuonPairProduction {
            unit: unit_conversion,
        }
    }

    pub fn in_units(unit: CrossSectionUnit) -> Self {
        Self::new(unit.factor())
    }

    /// Total cross section view borrowing this model.
    pub fn total(&self) -> MuonPairTotal<'_> {
        MuonPairTotal::new(self)
    }
}

impl Default for MuonPairProduction {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl ProcessModel for MuonPairProduction {
    fn process(&self) -> Process {
        Process::MuonPair
    }

    fn unit(&self) -> f64 {
        self.unit
    }
}

impl ChannelTerms for MuonPairProduction {
    /// `α²/(4s)·(1 + cos²θ)`
    fn annihilation(&self, theta: f64, s: f64) -> f64 {
        let c = theta.cos();
        self.unit * ALPHA_QED * ALPHA_QED / (4.0 * s) * (1.0 + c * c)
    }

    /// `2α²/s·(1 + ¼(1 + cos θ)²)/(1 − cos θ)²`
    fn scattering(&self, theta: f64, s: f64) -> f64 {
        let c = theta.cos();
        let u = 1.0 + c;
        let t = 1.0 - c;
        self.unit * 2.0 * ALPHA_QED * ALPHA_QED / s * (1.0 + 0.25 * u * u) / (t * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_annihilation_at_right_angle() {
        let m = MuonPairProduction::default();
        let expected = ALPHA_QED * ALPHA_QED / (4.0 * 196.0);
        let got = m.annihilation(PI / 2.0, 196.0);
        assert!((got - expected).abs() < 1e-20, "{got:e} vs {expected:e}");
        assert!((got - 6.7958e-8).abs() < 1e-11);
    }

    #[test]
    fn test_annihilation_forward_backward_equal() {
        let m = MuonPairProduction::new(389_400.0);
        let fwd = m.annihilation(0.0, 196.0);
        let bwd = m.annihilation(PI, 196.0);
        assert!((fwd - bwd).abs() <= 1e-15 * fwd);
        // 1 + cos²θ doubles from 90° to 0°
        let side = m.annihilation(PI / 2.0, 196.0);
        assert!((fwd / side - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_scattering_forward_divergence() {
        let m = MuonPairProduction::default();
        assert_eq!(m.scattering(0.0, 196.0), f64::INFINITY);
        let mut prev = m.scattering(0.5, 196.0);
        for theta in [0.1, 0.01, 0.001] {
            let v = m.scattering(theta, 196.0);
            assert!(v > prev, "scattering should grow toward θ=0: {v} <= {prev}");
            prev = v;
        }
    }

    #[test]
    fn test_scattering_backward_value() {
        // cos θ = -1: 2α²/s · 1/4
        let m = MuonPairProduction::default();
        let expected = 2.0 * ALPHA_QED * ALPHA_QED / 196.0 / 4.0;
        assert!((m.scattering(PI, 196.0) - expected).abs() < 1e-18);
    }

    #[test]
    fn test_energy_scaling() {
        // Every term falls as 1/s
        let m = MuonPairProduction::default();
        let a = m.annihilation(1.0, 100.0);
        let b = m.annihilation(1.0, 400.0);
        assert!((a / b - 4.0).abs() < 1e-12);
    }
}
