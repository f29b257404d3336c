// ─────────────────────────────────────────────────────────────────────
// SCPN QED Scan — Kinematic Samples
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ndarray::{Array1, Array2};
use std::f64::consts::PI;

/// Scattering-angle sample over [0, π] with precomputed cos θ.
#[derive(Debug, Clone)]
pub struct AngularScan {
    pub theta: Array1<f64>,     // [n] - linspace(0, π, n)
    pub cos_theta: Array1<f64>, // [n] - runs from +1 down to -1
}

impl AngularScan {
    pub fn new(points: usize) -> Self {
        let theta = Array1::linspace(0.0, PI, points);
        let cos_theta = theta.mapv(f64::cos);
        AngularScan { theta, cos_theta }
    }

    pub fn len(&self) -> usize {
        self.theta.len()
    }

    pub fn is_empty(&self) -> bool {
        self.theta.is_empty()
    }
}

/// Center-of-mass energy sample. `s` is the Mandelstam invariant √s².
#[derive(Debug, Clone)]
pub struct EnergyScan {
    pub sqrt_s: Array1<f64>, // [n] GeV
    pub s: Array1<f64>,      // [n] GeV²
}

impl EnergyScan {
    pub fn new(sqrt_s_min: f64, sqrt_s_max: f64, points: usize) -> Self {
        let sqrt_s = Array1::linspace(sqrt_s_min, sqrt_s_max, points);
        let s = sqrt_s.mapv(|e| e * e);
        EnergyScan { sqrt_s, s }
    }

    pub fn len(&self) -> usize {
        self.sqrt_s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sqrt_s.is_empty()
    }
}

/// (θ, √s) meshgrid for surface scans.
///
/// Rows index √s, columns index θ.
#[derive(Debug, Clone)]
pub struct KinematicGrid {
    pub theta: Array1<f64>,       // [n_theta]
    pub sqrt_s: Array1<f64>,      // [n_sqrt_s]
    pub theta_mesh: Array2<f64>,  // [n_sqrt_s, n_theta]
    pub sqrt_s_mesh: Array2<f64>, // [n_sqrt_s, n_theta]
}

impl KinematicGrid {
    pub fn new(theta_points: usize, sqrt_s_min: f64, sqrt_s_max: f64, sqrt_s_points: usize) -> Self {
        let theta = Array1::linspace(0.0, PI, theta_points);
        let sqrt_s = Array1::linspace(sqrt_s_min, sqrt_s_max, sqrt_s_points);
        let shape = (sqrt_s.len(), theta.len());
        let theta_mesh = Array2::from_shape_fn(shape, |(_, it)| theta[it]);
        let sqrt_s_mesh = Array2::from_shape_fn(shape, |(is, _)| sqrt_s[is]);

        KinematicGrid {
            theta,
            sqrt_s,
            theta_mesh,
            sqrt_s_mesh,
        }
    }

    /// (rows, cols) = (n_sqrt_s, n_theta).
    pub fn shape(&self) -> (usize, usize) {
        (self.sqrt_s.len(), self.theta.len())
    }
}

/// Half-open stepped sample `[start, start + step, ...)` below `stop`.
pub fn arange(start: f64, stop: f64, step: f64) -> Array1<f64> {
    Array1::range(start, stop, step)
}
