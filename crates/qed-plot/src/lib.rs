// ─────────────────────────────────────────────────────────────────────
// SCPN QED Scan — Plotting
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Figure construction and PNG rendering for cross-section scans.

pub mod colormap;
pub mod figures;
pub mod line;
pub mod segments;
pub mod surface;

use qed_types::error::QedError;

/// Default figure size in pixels.
pub const FIGURE_SIZE: (u32, u32) = (1200, 800);

/// Map a plotting backend error into the crate error.
pub(crate) fn render_err<E: std::fmt::Display>(err: E) -> QedError {
    QedError::Render(err.to_string())
}
