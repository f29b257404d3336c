// ─────────────────────────────────────────────────────────────────────
// SCPN QED Scan — Channel Terms
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Capability traits shared by the process models.
//!
//! A model exposes its Feynman-channel contributions to dσ/dΩ as plain
//! functions of (θ, s). Total cross sections and scans are written against
//! these traits rather than against concrete models.

/// Physical e⁺e⁻ process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Process {
    /// e⁺e⁻ → e⁺e⁻
    Bhabha,
    /// e⁺e⁻ → μ⁺μ⁻
    MuonPair,
}

impl Process {
    pub fn label(self) -> &'static str {
        match self {
            Process::Bhabha => "Bhabha",
            Process::MuonPair => "Muon pair",
        }
    }

    pub fn reaction(self) -> &'static str {
        match self {
            Process::Bhabha => "e+e- → e+e-",
            Process::MuonPair => "e+e- → μ+μ-",
        }
    }
}

/// A process model with a fixed unit-conversion factor.
pub trait ProcessModel {
    fn process(&self) -> Process;

    /// Multiplier applied to every GeV⁻² result.
    fn unit(&self) -> f64;
}

/// s-channel and t-channel contributions to dσ/dΩ.
pub trait ChannelTerms: ProcessModel {
    /// s-channel term. Finite for all θ when s > 0.
    fn annihilation(&self, theta: f64, s: f64) -> f64;

    /// t-channel term. Diverges as cos θ → 1.
    fn scattering(&self, theta: f64, s: f64) -> f64;
}

/// Processes where s- and t-channel amplitudes interfere.
pub trait InterferenceTerms: ChannelTerms {
    /// s-t interference term. Diverges as cos θ → 1.
    fn interference(&self, theta: f64, s: f64) -> f64;

    /// Full dσ/dΩ = annihilation + scattering − interference.
    ///
    /// At cos θ = 1 this is ∞ − ∞ = NaN.
    fn diff_cross_section(&self, theta: f64, s: f64) -> f64 {
        self.annihilation(theta, s) + self.scattering(theta, s) - self.interference(theta, s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_labels() {
        assert_eq!(Process::Bhabha.label(), "Bhabha");
        assert_eq!(Process::MuonPair.reaction(), "e+e- → μ+μ-");
    }
}
