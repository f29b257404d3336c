// ─────────────────────────────────────────────────────────────────────
// SCPN QED Scan — Expected Events
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Expected event counts for a fixed run (√s, L, ε).
//!
//! Luminosity is in pb⁻¹, so cross sections are evaluated in picobarn.

use crate::bhabha::Bhabha;
use crate::channels::Process;
use crate::muon_pair::MuonPairProduction;
use crate::total::TotalCrossSection;
use qed_types::config::ScanConfig;
use qed_types::units::CrossSectionUnit;

/// Event estimate for one process.
#[derive(Debug, Clone, Copy)]
pub struct EventEstimate {
    pub process: Process,
    pub cross_section_pb: f64,
    pub expected: f64,
}

impl EventEstimate {
    pub fn from_total<T: TotalCrossSection>(
        process: Process,
        total: &T,
        s: f64,
        luminosity: f64,
        efficiency: f64,
    ) -> Self {
        EventEstimate {
            process,
            cross_section_pb: total.cross_section(s),
            expected: total.expected_events(s, luminosity, efficiency),
        }
    }
}

/// Bhabha vs. muon pair yields for the same run.
#[derive(Debug, Clone, Copy)]
pub struct EventComparison {
    pub sqrt_s: f64,
    pub luminosity_pb_inv: f64,
    pub efficiency: f64,
    pub cutoff: f64,
    pub bhabha: EventEstimate,
    pub muon_pair: EventEstimate,
}

impl EventComparison {
    /// N_Bhabha / N_μμ.
    pub fn ratio(&self) -> f64 {
        self.bhabha.expected / self.muon_pair.expected
    }
}

/// Compare Bhabha and muon pair yields at the configured run point.
pub fn compare_events(config: &ScanConfig) -> EventComparison {
    let s = config.s();
    let bhabha = Bhabha::in_units(CrossSectionUnit::Picobarn);
    let muon_pair = MuonPairProduction::in_units(CrossSectionUnit::Picobarn);

    let bhabha_est = EventEstimate::from_total(
        Process::Bhabha,
        &bhabha.total_with_cutoff(config.cutoff),
        s,
        config.luminosity_pb_inv,
        config.efficiency,
    );
    let muon_est = EventEstimate::from_total(
        Process::MuonPair,
        &muon_pair.total(),
        s,
        config.luminosity_pb_inv,
        config.efficiency,
    );

    tracing::debug!(
        bhabha = bhabha_est.expected,
        muon_pair = muon_est.expected,
        "expected events"
    );

    EventComparison {
        sqrt_s: config.sqrt_s_gev,
        luminosity_pb_inv: config.luminosity_pb_inv,
        efficiency: config.efficiency,
        cutoff: config.cutoff,
        bhabha: bhabha_est,
        muon_pair: muon_est,
    }
}
