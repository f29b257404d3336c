// ─────────────────────────────────────────────────────────────────────
// SCPN QED Scan — Driver
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Renders the cross-section figures and prints the expected event counts.
//!
//! Usage: `qed-scan [config.json]`. Without an argument the built-in
//! defaults are used (√s = 14 GeV, L = 10 pb⁻¹, ε = 0.5, cos θ ≤ 0.98).

mod report;

use qed_physics::events::compare_events;
use qed_plot::figures::render_all;
use qed_types::config::ScanConfig;
use qed_types::error::QedResult;
use tracing::Level;

fn load_config() -> QedResult<ScanConfig> {
    match std::env::args_os().nth(1) {
        Some(path) => {
            tracing::info!(path = %path.to_string_lossy(), "loading config");
            ScanConfig::from_file(path)
        }
        None => {
            let config = ScanConfig::default();
            config.validate()?;
            Ok(config)
        }
    }
}

fn run() -> QedResult<()> {
    let config = load_config()?;
    tracing::info!(
        sqrt_s = config.sqrt_s_gev,
        luminosity = config.luminosity_pb_inv,
        efficiency = config.efficiency,
        cutoff = config.cutoff,
        output_dir = %config.output_dir,
        "starting scan"
    );

    let written = render_all(&config)?;
    tracing::info!(figures = written.len(), "figures rendered");

    let comparison = compare_events(&config);
    print!("{}", report::format_report(&comparison));
    Ok(())
}

fn main() {
    tracing_subscriber::fmt().with_max_level(Level::INFO).with_target(false).init();

    if let Err(err) = run() {
        tracing::error!(error = %err, "scan failed");
        std::process::exit(1);
    }
}
