// ─────────────────────────────────────────────────────────────────────
// SCPN QED Scan — Figures
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! The figure set of a scan run.
//!
//! Differential plots are in nb/sr, total cross sections in nb, and event
//! counts use pb so that L can be given in pb⁻¹.

use crate::line::{render_line_plot, LinePlot, Series, YScale};
use crate::segments::log_bounds;
use crate::surface::{render_surface, SurfacePlot};
use ndarray::Array1;
use plotters::style::{RGBColor, BLACK, BLUE, RED};
use qed_physics::bhabha::Bhabha;
use qed_physics::channels::{ChannelTerms, InterferenceTerms, Process};
use qed_physics::divergence::{clip_above, exclude_forward};
use qed_physics::muon_pair::MuonPairProduction;
use qed_physics::scan;
use qed_physics::total::TotalCrossSection;
use qed_types::config::ScanConfig;
use qed_types::error::QedResult;
use qed_types::state::{arange, AngularScan, EnergyScan, KinematicGrid};
use qed_types::units::CrossSectionUnit;
use std::path::{Path, PathBuf};

const ORANGE_RED: RGBColor = RGBColor(255, 69, 0);
const NAVY: RGBColor = RGBColor(0, 0, 128);
const DARK_GREEN: RGBColor = RGBColor(0, 128, 0);

/// Area unit of every differential and total cross-section figure.
const PLOT_UNIT: CrossSectionUnit = CrossSectionUnit::Nanobarn;

/// Fallback log axis when a scan has no positive finite values.
const DEFAULT_LOG_RANGE: (f64, f64) = (1e-1, 1e6);

#[derive(Debug, Clone)]
pub enum FigureKind {
    Line(LinePlot),
    Surface(SurfacePlot),
}

/// A figure and the file it is written to inside the output directory.
#[derive(Debug, Clone)]
pub struct Figure {
    pub file_name: &'static str,
    pub kind: FigureKind,
}

/// Bhabha channel terms and their sum vs cos θ.
pub fn bhabha_differential(config: &ScanConfig) -> LinePlot {
    let s = config.s();
    let angles = exclude_forward(&AngularScan::new(config.angular.points));
    let bhabha = Bhabha::in_units(PLOT_UNIT);
    let x = &angles.cos_theta;

    let series = vec![
        Series::new("annihilation", BLUE, x.clone(), scan::angular(&angles, s, |t, s| bhabha.annihilation(t, s))),
        Series::new("scattering", ORANGE_RED, x.clone(), scan::angular(&angles, s, |t, s| bhabha.scattering(t, s))),
        Series::new("interference", DARK_GREEN, x.clone(), scan::angular(&angles, s, |t, s| bhabha.interference(t, s))),
        Series::new("dσ/dΩ", BLACK, x.clone(), scan::angular(&angles, s, |t, s| bhabha.diff_cross_section(t, s))),
    ];

    LinePlot {
        title: format!("Differential cross section of Bhabha scattering, √s = {} GeV", config.sqrt_s_gev),
        x_label: "cos θ".into(),
        y_label: format!("{} per steradian", PLOT_UNIT.symbol()),
        x_range: (-1.0, 1.0),
        y_range: (1e-3, 1e3),
        y_scale: YScale::Log,
        series,
    }
}

/// Muon pair s/t-channel shapes against the Bhabha s/t/u terms.
pub fn channel_comparison(config: &ScanConfig) -> LinePlot {
    let s = config.s();
    let angles = exclude_forward(&AngularScan::new(config.angular.points));
    let bhabha = Bhabha::in_units(PLOT_UNIT);
    let muon = MuonPairProduction::in_units(PLOT_UNIT);
    let x = &angles.cos_theta;
    let mu = Process::MuonPair.reaction();
    let ee = Process::Bhabha.reaction();

    let series = vec![
        Series::new(format!("{mu}, t-channel"), RED, x.clone(), scan::angular(&angles, s, |t, s| muon.scattering(t, s))),
        Series::new(format!("{mu}, s-channel"), NAVY, x.clone(), scan::angular(&angles, s, |t, s| muon.annihilation(t, s))),
        Series::new(format!("{ee}, t-channel"), ORANGE_RED, x.clone(), scan::angular(&angles, s, |t, s| bhabha.scattering(t, s))),
        Series::new(format!("{ee}, s-channel"), BLUE, x.clone(), scan::angular(&angles, s, |t, s| bhabha.annihilation(t, s))),
        Series::new(format!("{ee}, u-channel"), DARK_GREEN, x.clone(), scan::angular(&angles, s, |t, s| bhabha.interference(t, s))),
    ];

    LinePlot {
        title: format!("Differential cross section for √s = {} GeV", config.sqrt_s_gev),
        x_label: "cos θ".into(),
        y_label: format!("dσ/dΩ ({} per steradian)", PLOT_UNIT.symbol()),
        x_range: (-1.0, 1.0),
        y_range: (1e-2, 1e3),
        y_scale: YScale::Log,
        series,
    }
}

/// Bhabha dσ/dΩ over (cos θ, √s), clipped at the configured bound.
pub fn bhabha_surface(config: &ScanConfig) -> SurfacePlot {
    let cfg = &config.surface;
    let grid = KinematicGrid::new(cfg.theta_points, cfg.sqrt_s_min, cfg.sqrt_s_max, cfg.sqrt_s_points);
    let bhabha = Bhabha::in_units(PLOT_UNIT);

    let mut values = scan::surface(&grid, |t, s| bhabha.diff_cross_section(t, s));
    clip_above(&mut values, cfg.upper_bound_nb);

    SurfacePlot {
        title: "Differential cross section for Bhabha scattering".into(),
        x_label: "cos θ".into(),
        depth_label: "√s [GeV]".into(),
        value_label: format!("dσ/dΩ [{}/sr]", PLOT_UNIT.symbol()),
        x: grid.theta.mapv(f64::cos),
        depth: grid.sqrt_s.clone(),
        values,
        log_values: true,
    }
}

fn energy_totals(config: &ScanConfig) -> (EnergyScan, Array1<f64>, Array1<f64>) {
    let cfg = &config.energy;
    let energies = EnergyScan::new(cfg.sqrt_s_min, cfg.sqrt_s_max, cfg.points);
    let bhabha = Bhabha::in_units(PLOT_UNIT);
    let muon = MuonPairProduction::in_units(PLOT_UNIT);
    let bhabha_total = bhabha.total_with_cutoff(config.cutoff);
    let muon_total = muon.total();

    let sigma_b = scan::energy(&energies, |s| bhabha_total.cross_section(s));
    let sigma_m = scan::energy(&energies, |s| muon_total.cross_section(s));
    (energies, sigma_b, sigma_m)
}

/// σ vs √s for both processes.
pub fn total_cross_section(config: &ScanConfig) -> LinePlot {
    let (energies, sigma_b, sigma_m) = energy_totals(config);
    let y_range = log_bounds(sigma_b.iter().chain(sigma_m.iter())).unwrap_or(DEFAULT_LOG_RANGE);

    LinePlot {
        title: format!("Total cross section (cos θ ≤ {} for Bhabha)", config.cutoff),
        x_label: "√s [GeV]".into(),
        y_label: format!("σ [{}]", PLOT_UNIT.symbol()),
        x_range: (0.0, config.energy.sqrt_s_max),
        y_range,
        y_scale: YScale::Log,
        series: vec![
            Series::new(Process::MuonPair.reaction(), RED, energies.sqrt_s.clone(), sigma_m),
            Series::new(Process::Bhabha.reaction(), BLACK, energies.sqrt_s.clone(), sigma_b),
        ],
    }
}

/// |σ_Bhabha − σ_μμ| vs √s.
pub fn cross_section_difference(config: &ScanConfig) -> LinePlot {
    let (energies, sigma_b, sigma_m) = energy_totals(config);
    let diff = (&sigma_b - &sigma_m).mapv(f64::abs);

    LinePlot {
        title: "Absolute difference in total cross section".into(),
        x_label: "√s [GeV]".into(),
        y_label: format!("σ [{}]", PLOT_UNIT.symbol()),
        x_range: (0.0, config.energy.sqrt_s_max),
        y_range: (0.0, 1e3),
        y_scale: YScale::Linear,
        series: vec![Series::new("|σ(Bhabha) − σ(μμ)|", BLACK, energies.sqrt_s, diff)],
    }
}

/// Expected Bhabha events over (√s, L).
pub fn expected_events_surface(config: &ScanConfig) -> SurfacePlot {
    let cfg = &config.events_surface;
    let sqrt_s = arange(cfg.sqrt_s_min, cfg.sqrt_s_max, cfg.sqrt_s_step);
    let luminosity = arange(cfg.luminosity_min, cfg.luminosity_max, cfg.luminosity_step);
    let bhabha = Bhabha::in_units(CrossSectionUnit::Picobarn);
    let total = bhabha.total_with_cutoff(config.cutoff);

    let events = scan::events_surface(&sqrt_s, &luminosity, |s, l| {
        total.expected_events(s, l, config.efficiency)
    });

    SurfacePlot {
        title: "Number of expected events for Bhabha scattering".into(),
        x_label: "√s [GeV]".into(),
        depth_label: format!("L [{}⁻¹]", CrossSectionUnit::Picobarn.symbol()),
        value_label: "N".into(),
        x: sqrt_s,
        depth: luminosity,
        values: events.t().to_owned(),
        log_values: true,
    }
}

/// Every figure of a scan run, in rendering order.
pub fn all_figures(config: &ScanConfig) -> Vec<Figure> {
    vec![
        Figure {
            file_name: "bhabha_differential.png",
            kind: FigureKind::Line(bhabha_differential(config)),
        },
        Figure {
            file_name: "channel_comparison.png",
            kind: FigureKind::Line(channel_comparison(config)),
        },
        Figure {
            file_name: "bhabha_surface.png",
            kind: FigureKind::Surface(bhabha_surface(config)),
        },
        Figure {
            file_name: "total_cross_section.png",
            kind: FigureKind::Line(total_cross_section(config)),
        },
        Figure {
            file_name: "cross_section_difference.png",
            kind: FigureKind::Line(cross_section_difference(config)),
        },
        Figure {
            file_name: "expected_events_surface.png",
            kind: FigureKind::Surface(expected_events_surface(config)),
        },
    ]
}

/// Render a figure into `out_dir`, returning the written path.
pub fn render_figure(out_dir: &Path, figure: &Figure) -> QedResult<PathBuf> {
    let path = out_dir.join(figure.file_name);
    match &figure.kind {
        FigureKind::Line(plot) => render_line_plot(&path, plot)?,
        FigureKind::Surface(plot) => render_surface(&path, plot)?,
    }
    Ok(path)
}

/// Create the output directory and render every figure into it.
pub fn render_all(config: &ScanConfig) -> QedResult<Vec<PathBuf>> {
    let out_dir = Path::new(&config.output_dir);
    std::fs::create_dir_all(out_dir)?;

    let figures = all_figures(config);
    let mut written = Vec::with_capacity(figures.len());
    for figure in &figures {
        written.push(render_figure(out_dir, figure)?);
    }
    Ok(written)
}
