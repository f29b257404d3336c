// ─────────────────────────────────────────────────────────────────────
// SCPN QED Scan — Total Cross Sections
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Analytically integrated cross sections and expected event counts.
//!
//! Each total borrows the differential model it integrates, so both share
//! one unit-conversion factor.

use crate::bhabha::Bhabha;
use crate::channels::ProcessModel;
use crate::muon_pair::MuonPairProduction;
use qed_types::constants::{ALPHA_QED, DEFAULT_CUTOFF};
use std::f64::consts::PI;

/// σ(s) and the event count it implies.
pub trait TotalCrossSection {
    fn cross_section(&self, s: f64) -> f64;

    /// `N = σ(s)·L·ε`. `L` must be the inverse of the model's area unit.
    fn expected_events(&self, s: f64, luminosity: f64, efficiency: f64) -> f64 {
        self.cross_section(s) * luminosity * efficiency
    }
}

/// σ(e⁺e⁻ → μ⁺μ⁻) = 4πα²/(3s).
#[derive(Debug, Clone, Copy)]
pub struct MuonPairTotal<'m> {
    model: &'m MuonPairProduction,
}

impl<'m> MuonPairTotal<'m> {
    pub fn new(model: &'m MuonPairProduction) -> Self {
        MuonPairTotal { model }
    }
}

impl TotalCrossSection for MuonPairTotal<'_> {
    fn cross_section(&self, s: f64) -> f64 {
        self.model.unit() * 4.0 * PI * ALPHA_QED * ALPHA_QED / (3.0 * s)
    }
}

/// Bhabha cross section integrated over cos θ ∈ [−1, a].
///
/// The t-channel pole makes the integral diverge as a → 1, so the cutoff
/// is a physics parameter of the measurement (detector acceptance).
#[derive(Debug, Clone, Copy)]
pub struct BhabhaTotal<'m> {
    model: &'m Bhabha,
    cutoff: f64,
}

impl<'m> BhabhaTotal<'m> {
    pub fn new(model: &'m Bhabha) -> Self {
        BhabhaTotal {
            model,
            cutoff: DEFAULT_CUTOFF,
        }
    }

    /// Set cos θ_max. Values outside (−1, 1) yield ±∞ or NaN.
    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = cutoff;
        self
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }
}

impl TotalCrossSection for BhabhaTotal<'_> {
    fn cross_section(&self, s: f64) -> f64 {
        self.model.unit() * PI * ALPHA_QED * ALPHA_QED / s * angular_integral(self.cutoff)
    }
}

/// Dimensionless angular factor of the integrated Bhabha cross section:
/// `a³/3 + 16a/(1 − a²) + 9a + ln(|a − 1|/(a + 1))`.
pub fn angular_integral(a: f64) -> f64 {
    a * a * a / 3.0 + 16.0 * a / (1.0 - a * a) + 9.0 * a + ((a - 1.0).abs() / (a + 1.0)).ln()
}
