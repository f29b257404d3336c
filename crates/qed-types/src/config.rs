// ─────────────────────────────────────────────────────────────────────
// SCPN QED Scan — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::constants::{DEFAULT_CUTOFF, DEFAULT_EFFICIENCY};
use crate::error::{QedError, QedResult};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::path::Path;

/// Top-level scan configuration.
/// Every field has a default, so `{}` reproduces the reference run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Fixed collision energy for the event estimate [GeV].
    #[serde(default = "default_sqrt_s")]
    pub sqrt_s_gev: f64,
    /// Integrated luminosity [pb⁻¹].
    #[serde(default = "default_luminosity")]
    pub luminosity_pb_inv: f64,
    #[serde(default = "default_efficiency")]
    pub efficiency: f64,
    /// cos(θ_max) for the integrated Bhabha cross section.
    #[serde(default = "default_cutoff")]
    pub cutoff: f64,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default)]
    pub angular: AngularScanConfig,
    #[serde(default)]
    pub energy: EnergyScanConfig,
    #[serde(default)]
    pub surface: SurfaceConfig,
    #[serde(default)]
    pub events_surface: EventsSurfaceConfig,
}

/// θ ∈ [0, π] sampling for the differential plots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AngularScanConfig {
    #[serde(default = "default_angular_points")]
    pub points: usize,
}

/// √s sampling for the total cross-section plots [GeV].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyScanConfig {
    #[serde(default = "default_energy_min")]
    pub sqrt_s_min: f64,
    #[serde(default = "default_energy_max")]
    pub sqrt_s_max: f64,
    #[serde(default = "default_energy_points")]
    pub points: usize,
}

/// (cos θ, √s) surface of the Bhabha differential cross section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceConfig {
    #[serde(default = "default_surface_points")]
    pub theta_points: usize,
    #[serde(default = "default_surface_sqrt_s_min")]
    pub sqrt_s_min: f64,
    #[serde(default = "default_surface_sqrt_s_max")]
    pub sqrt_s_max: f64,
    #[serde(default = "default_surface_points")]
    pub sqrt_s_points: usize,
    /// Values above this bound [nb/sr] are clipped before rendering.
    #[serde(default = "default_upper_bound")]
    pub upper_bound_nb: f64,
}

/// (√s, L) surface of expected Bhabha events. Axes are half-open stepped ranges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsSurfaceConfig {
    #[serde(default = "default_events_sqrt_s_min")]
    pub sqrt_s_min: f64,
    #[serde(default = "default_energy_max")]
    pub sqrt_s_max: f64,
    #[serde(default = "default_events_sqrt_s_step")]
    pub sqrt_s_step: f64,
    #[serde(default = "default_luminosity_min")]
    pub luminosity_min: f64,
    #[serde(default = "default_luminosity_max")]
    pub luminosity_max: f64,
    #[serde(default = "default_luminosity_step")]
    pub luminosity_step: f64,
}

fn default_sqrt_s() -> f64 {
    14.0
}
fn default_luminosity() -> f64 {
    10.0
}
fn default_efficiency() -> f64 {
    DEFAULT_EFFICIENCY
}
fn default_cutoff() -> f64 {
    DEFAULT_CUTOFF
}
fn default_output_dir() -> String {
    "figs".to_string()
}
fn default_angular_points() -> usize {
    100_000
}
fn default_energy_min() -> f64 {
    0.1
}
fn default_energy_max() -> f64 {
    40.0
}
fn default_energy_points() -> usize {
    1000
}
fn default_surface_points() -> usize {
    50
}
fn default_surface_sqrt_s_min() -> f64 {
    1.0
}
fn default_surface_sqrt_s_max() -> f64 {
    40.0
}
fn default_upper_bound() -> f64 {
    10.0
}
fn default_events_sqrt_s_min() -> f64 {
    5.0
}
fn default_events_sqrt_s_step() -> f64 {
    0.25
}
fn default_luminosity_min() -> f64 {
    1.0
}
fn default_luminosity_max() -> f64 {
    100.0 * PI
}
fn default_luminosity_step() -> f64 {
    1.0
}

impl Default for AngularScanConfig {
    fn default() -> Self {
        AngularScanConfig {
            points: default_angular_points(),
        }
    }
}

impl Default for EnergyScanConfig {
    fn default() -> Self {
        EnergyScanConfig {
            sqrt_s_min: default_energy_min(),
            sqrt_s_max: default_energy_max(),
            points: default_energy_points(),
        }
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        SurfaceConfig {
            theta_points: default_surface_points(),
            sqrt_s_min: default_surface_sqrt_s_min(),
            sqrt_s_max: default_surface_sqrt_s_max(),
            sqrt_s_points: default_surface_points(),
            upper_bound_nb: default_upper_bound(),
        }
    }
}

impl Default for EventsSurfaceConfig {
    fn default() -> Self {
        EventsSurfaceConfig {
            sqrt_s_min: default_events_sqrt_s_min(),
            sqrt_s_max: default_energy_max(),
            sqrt_s_step: default_events_sqrt_s_step(),
            luminosity_min: default_luminosity_min(),
            luminosity_max: default_luminosity_max(),
            luminosity_step: default_luminosity_step(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            sqrt_s_gev: default_sqrt_s(),
            luminosity_pb_inv: default_luminosity(),
            efficiency: default_efficiency(),
            cutoff: default_cutoff(),
            output_dir: default_output_dir(),
            angular: AngularScanConfig::default(),
            energy: EnergyScanConfig::default(),
            surface: SurfaceConfig::default(),
            events_surface: EventsSurfaceConfig::default(),
        }
    }
}

impl ScanConfig {
    /// Load from a JSON file. Missing fields take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> QedResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> QedResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Mandelstam s for the event estimate [GeV²].
    pub fn s(&self) -> f64 {
        self.sqrt_s_gev * self.sqrt_s_gev
    }

    /// Reject sampling parameters that cannot produce a plot.
    ///
    /// Only the scan setup is checked here; formula inputs are never validated.
    pub fn validate(&self) -> QedResult<()> {
        check_positive("sqrt_s_gev", self.sqrt_s_gev)?;
        check_positive("luminosity_pb_inv", self.luminosity_pb_inv)?;
        if !(0.0..=1.0).contains(&self.efficiency) {
            return Err(QedError::InvalidParameter {
                name: "efficiency",
                value: self.efficiency,
                reason: "must lie in [0, 1]",
            });
        }
        if !(self.cutoff > -1.0 && self.cutoff < 1.0) {
            return Err(QedError::InvalidParameter {
                name: "cutoff",
                value: self.cutoff,
                reason: "must lie in (-1, 1)",
            });
        }
        if self.output_dir.trim().is_empty() {
            return Err(QedError::Config("output_dir is empty".to_string()));
        }

        check_points("angular.points", self.angular.points)?;
        check_points("energy.points", self.energy.points)?;
        check_range("energy", self.energy.sqrt_s_min, self.energy.sqrt_s_max)?;
        check_positive("energy.sqrt_s_min", self.energy.sqrt_s_min)?;

        check_points("surface.theta_points", self.surface.theta_points)?;
        check_points("surface.sqrt_s_points", self.surface.sqrt_s_points)?;
        check_range("surface", self.surface.sqrt_s_min, self.surface.sqrt_s_max)?;
        check_positive("surface.sqrt_s_min", self.surface.sqrt_s_min)?;
        check_positive("surface.upper_bound_nb", self.surface.upper_bound_nb)?;

        let ev = &self.events_surface;
        check_range("events_surface.sqrt_s", ev.sqrt_s_min, ev.sqrt_s_max)?;
        check_range("events_surface.luminosity", ev.luminosity_min, ev.luminosity_max)?;
        check_positive("events_surface.sqrt_s_min", ev.sqrt_s_min)?;
        check_positive("events_surface.luminosity_min", ev.luminosity_min)?;
        check_positive("events_surface.sqrt_s_step", ev.sqrt_s_step)?;
        check_positive("events_surface.luminosity_step", ev.luminosity_step)?;
        Ok(())
    }
}

fn check_positive(name: &'static str, value: f64) -> QedResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(QedError::InvalidParameter {
            name,
            value,
            reason: "must be finite and positive",
        })
    }
}

fn check_points(name: &str, points: usize) -> QedResult<()> {
    if points < 2 {
        return Err(QedError::Config(format!(
            "{name} must be at least 2, got {points}"
        )));
    }
    Ok(())
}

fn check_range(name: &str, min: f64, max: f64) -> QedResult<()> {
    if !(min.is_finite() && max.is_finite() && min < max) {
        return Err(QedError::Config(format!(
            "{name} range is empty: [{min}, {max}]"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_matches_reference_run() {
        let cfg = ScanConfig::default();
        assert_eq!(cfg.sqrt_s_gev, 14.0);
        assert_eq!(cfg.s(), 196.0);
        assert_eq!(cfg.luminosity_pb_inv, 10.0);
        assert_eq!(cfg.efficiency, 0.5);
        assert_eq!(cfg.cutoff, 0.98);
        assert_eq!(cfg.angular.points, 100_000);
        assert_eq!(cfg.energy.points, 1000);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_empty_json_is_default() {
        let cfg = ScanConfig::from_json("{}").unwrap();
        assert_eq!(cfg.output_dir, "figs");
        assert_eq!(cfg.surface.theta_points, 50);
        assert!((cfg.events_surface.luminosity_max - 100.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_partial_override() {
        let cfg =
            ScanConfig::from_json(r#"{"sqrt_s_gev": 10.58, "surface": {"upper_bound_nb": 0.1}}"#)
                .unwrap();
        assert!((cfg.sqrt_s_gev - 10.58).abs() < 1e-12);
        assert!((cfg.surface.upper_bound_nb - 0.1).abs() < 1e-12);
        assert_eq!(cfg.surface.sqrt_s_points, 50);
    }

    #[test]
    fn test_cutoff_outside_open_interval_rejected() {
        for bad in [1.0, -1.0, 1.5] {
            let json = format!(r#"{{"cutoff": {bad}}}"#);
            match ScanConfig::from_json(&json) {
                Err(QedError::InvalidParameter { name, .. }) => assert_eq!(name, "cutoff"),
                other => panic!("expected cutoff rejection for {bad}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_degenerate_scan_rejected() {
        let mut cfg = ScanConfig::default();
        cfg.angular.points = 1;
        assert!(matches!(cfg.validate(), Err(QedError::Config(_))));

        let mut cfg = ScanConfig::default();
        cfg.energy.sqrt_s_max = cfg.energy.sqrt_s_min;
        assert!(matches!(cfg.validate(), Err(QedError::Config(_))));

        let mut cfg = ScanConfig::default();
        cfg.events_surface.luminosity_step = 0.0;
        assert!(cfg.validate().is_err());

        let mut cfg = ScanConfig::default();
        cfg.efficiency = 1.2;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_from_file_roundtrip() {
        let cfg = ScanConfig {
            luminosity_pb_inv: 250.0,
            output_dir: "out/plots".to_string(),
            ..ScanConfig::default()
        };
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string_pretty(&cfg).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = ScanConfig::from_file(file.path()).unwrap();
        assert_eq!(loaded.luminosity_pb_inv, 250.0);
        assert_eq!(loaded.output_dir, "out/plots");
        assert_eq!(loaded.angular.points, cfg.angular.points);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ScanConfig::from_file("/nonexistent/qed_scan.json").unwrap_err();
        assert!(matches!(err, QedError::Io(_)));
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let err = ScanConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, QedError::Json(_)));
    }
}
