// ─────────────────────────────────────────────────────────────────────
// SCPN QED Scan — Cross-Section Units
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Conversion from natural units (GeV⁻²) to barn-based areas.
//!
//! Models never hardcode a unit: the factor returned by
//! [`CrossSectionUnit::factor`] is handed to their constructor.

use crate::constants::{GEV2_TO_MB, GEV2_TO_NB, GEV2_TO_PB, GEV2_TO_UB};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossSectionUnit {
    /// GeV⁻², no conversion.
    Natural,
    Millibarn,
    Microbarn,
    #[default]
    Nanobarn,
    Picobarn,
}

impl CrossSectionUnit {
    /// Multiplier taking a value in GeV⁻² to this unit.
    pub fn factor(self) -> f64 {
        match self {
            CrossSectionUnit::Natural => 1.0,
            CrossSectionUnit::Millibarn => GEV2_TO_MB,
            CrossSectionUnit::Microbarn => GEV2_TO_UB,
            CrossSectionUnit::Nanobarn => GEV2_TO_NB,
            CrossSectionUnit::Picobarn => GEV2_TO_PB,
        }
    }

    /// Short symbol for axis labels.
    pub fn symbol(self) -> &'static str {
        match self {
            CrossSectionUnit::Natural => "GeV⁻²",
            CrossSectionUnit::Millibarn => "mb",
            CrossSectionUnit::Microbarn => "μb",
            CrossSectionUnit::Nanobarn => "nb",
            CrossSectionUnit::Picobarn => "pb",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nanobarn_factor() {
        assert!((CrossSectionUnit::Nanobarn.factor() - 389_400.0).abs() < 1e-6);
    }

    #[test]
    fn test_units_step_by_thousand() {
        let chain = [
            CrossSectionUnit::Millibarn,
            CrossSectionUnit::Microbarn,
            CrossSectionUnit::Nanobarn,
            CrossSectionUnit::Picobarn,
        ];
        for pair in chain.windows(2) {
            let ratio = pair[1].factor() / pair[0].factor();
            assert!((ratio - 1e3).abs() < 1e-9, "{:?} -> {:?}: {ratio}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_natural_is_identity() {
        assert_eq!(CrossSectionUnit::Natural.factor(), 1.0);
        assert_eq!(CrossSectionUnit::default(), CrossSectionUnit::Nanobarn);
    }

    #[test]
    fn test_serde_snake_case() {
        let u: CrossSectionUnit = serde_json::from_str("\"picobarn\"").unwrap();
        assert_eq!(u, CrossSectionUnit::Picobarn);
        assert_eq!(u.symbol(), "pb");
    }
}
