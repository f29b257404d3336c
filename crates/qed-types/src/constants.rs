// ─────────────────────────────────────────────────────────────────────
// SCPN QED Scan — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Fine-structure constant at low momentum transfer.
/// All tree-level formulas use the rounded value 1/137.
pub const ALPHA_QED: f64 = 1.0 / 137.0;

/// 1 GeV⁻² expressed in millibarn (ħ²c² = 0.3894 GeV² mb).
pub const GEV2_TO_MB: f64 = 0.3894;

/// 1 GeV⁻² in microbarn.
pub const GEV2_TO_UB: f64 = GEV2_TO_MB * 1e3;

/// 1 GeV⁻² in nanobarn.
pub const GEV2_TO_NB: f64 = GEV2_TO_MB * 1e6;

/// 1 GeV⁻² in picobarn.
pub const GEV2_TO_PB: f64 = GEV2_TO_NB * 1e3;

/// Detector efficiency used when none is given.
pub const DEFAULT_EFFICIENCY: f64 = 0.5;

/// Angular cutoff cos(θ_max) for the integrated Bhabha cross section.
pub const DEFAULT_CUTOFF: f64 = 0.98;
