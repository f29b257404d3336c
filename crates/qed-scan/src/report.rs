// ─────────────────────────────────────────────────────────────────────
// SCPN QED Scan — Event Report
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

use qed_physics::events::{EventComparison, EventEstimate};
use qed_types::units::CrossSectionUnit;

fn estimate_line(estimate: &EventEstimate) -> String {
    format!("{}: N = {:.0}\n", estimate.process.label(), estimate.expected)
}

fn cross_section_line(estimate: &EventEstimate) -> String {
    format!(
        "{}: σ = {:.2} {}\n",
        estimate.process.label(),
        estimate.cross_section_pb,
        CrossSectionUnit::Picobarn.symbol()
    )
}

/// Plain-text summary of the expected event counts, followed by the
/// cross sections they were computed from.
pub fn format_report(cmp: &EventComparison) -> String {
    let mut out = format!(
        "With an integrated luminosity of {} pb⁻¹, s = {}^2 and a detector efficiency of {:.0}% \
         we get N expected events for:\n",
        cmp.luminosity_pb_inv,
        cmp.sqrt_s,
        cmp.efficiency * 100.0,
    );
    out.push_str(&estimate_line(&cmp.bhabha));
    out.push_str(&estimate_line(&cmp.muon_pair));
    out.push('\n');
    out.push_str(&format!("Which gives a ratio of: {:.0}\n", cmp.ratio()));
    out.push('\n');
    out.push_str(&format!(
        "Cross sections at √s = {} GeV (cos θ ≤ {} for Bhabha):\n",
        cmp.sqrt_s, cmp.cutoff
    ));
    out.push_str(&cross_section_line(&cmp.bhabha));
    out.push_str(&cross_section_line(&cmp.muon_pair));
    out
}
