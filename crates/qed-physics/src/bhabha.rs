// ─────────────────────────────────────────────────────────────────────
// SCPN QED Scan — Bhabha Scattering
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! e⁺e⁻ → e⁺e⁻ at tree level, massless limit.
//!
//! dσ/dΩ = α²/(2s) · [ (1+c²)/2 + ((1+c)² + 4)/(1−c)² − (1+c)²/(1−c) ],  c = cos θ.

use crate::channels::{ChannelTerms, InterferenceTerms, Process, ProcessModel};
use crate::total::BhabhaTotal;
use qed_types::constants::ALPHA_QED;
use qed_types::units::CrossSectionUnit;

/// Bhabha scattering model. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bhabha {
    unit: f64,
}

impl Bhabha {
    /// `unit_conversion` multiplies every GeV⁻² result.
    pub fn new(unit_conversion: f64) -> Self {
        Bhabha {
            unit: unit_conversion,
        }
    }

    pub fn in_units(unit: CrossSectionUnit) -> Self {
        Self::new(unit.factor())
    }

    /// Total cross section with the default angular cutoff.
    pub fn total(&self) -> BhabhaTotal<'_> {
        BhabhaTotal::new(self)
    }

    /// Total cross section integrated up to cos θ = `cutoff`.
    pub fn total_with_cutoff(&self, cutoff: f64) -> BhabhaTotal<'_> {
        BhabhaTotal::new(self).with_cutoff(cutoff)
    }

    /// Common prefactor `unit · α²/(2s)`.
    fn prefactor(&self, s: f64) -> f64 {
        self.unit * ALPHA_QED * ALPHA_QED / (2.0 * s)
    }
}

impl Default for Bhabha {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl ProcessModel for Bhabha {
    fn process(&self) -> Process {
        Process::Bhabha
    }

    fn unit(&self) -> f64 {
        self.unit
    }
}

impl ChannelTerms for Bhabha {
    fn annihilation(&self, theta: f64, s: f64) -> f64 {
        let c = theta.cos();
        self.prefactor(s) * (1.0 + c * c) / 2.0
    }

    fn scattering(&self, theta: f64, s: f64) -> f64 {
        let c = theta.cos();
        let u = 1.0 + c;
        let t = 1.0 - c;
        self.prefactor(s) * (u * u + 4.0) / (t * t)
    }
}

impl InterferenceTerms for Bhabha {
    fn interference(&self, theta: f64, s: f64) -> f64 {
        let c = theta.cos();
        let u = 1.0 + c;
        self.prefactor(s) * u * u / (1.0 - c)
    }
}
