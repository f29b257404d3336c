// ─────────────────────────────────────────────────────────────────────
// SCPN QED Scan — Surface Plots
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! 3D surfaces over a rectangular sample grid.
//!
//! plotters draws the vertical axis as y, so a surface value z(x, d) is
//! mapped to (x, height, d). Cells touching a non-finite sample are skipped.

use crate::colormap::{autumn, normalize};
use crate::{render_err, FIGURE_SIZE};
use ndarray::{Array1, Array2};
use plotters::prelude::*;
use qed_types::error::{QedError, QedResult};
use std::path::Path;

/// Description of a surface figure.
#[derive(Debug, Clone)]
pub struct SurfacePlot {
    pub title: String,
    pub x_label: String,
    pub depth_label: String,
    pub value_label: String,
    /// Horizontal axis samples [nx].
    pub x: Array1<f64>,
    /// Depth axis samples [nd].
    pub depth: Array1<f64>,
    /// Surface values [nd, nx].
    pub values: Array2<f64>,
    /// Draw log10 of the values. Non-positive values become gaps.
    pub log_values: bool,
}

impl SurfacePlot {
    /// Heights actually drawn: the values, or their log10.
    pub fn heights(&self) -> Array2<f64> {
        if self.log_values {
            self.values
                .mapv(|v| if v > 0.0 { v.log10() } else { f64::NAN })
        } else {
            self.values.clone()
        }
    }

    /// Grid cells with four finite corners, as (corners, mean height).
    pub fn cells(&self) -> Vec<([(f64, f64, f64); 4], f64)> {
        let h = self.heights();
        let (nd, nx) = h.dim();
        let mut cells = Vec::with_capacity(nd.saturating_sub(1) * nx.saturating_sub(1));
        for i in 0..nd.saturating_sub(1) {
            for j in 0..nx.saturating_sub(1) {
                let corners = [
                    (self.x[j], h[[i, j]], self.depth[i]),
                    (self.x[j + 1], h[[i, j + 1]], self.depth[i]),
                    (self.x[j + 1], h[[i + 1, j + 1]], self.depth[i + 1]),
                    (self.x[j], h[[i + 1, j]], self.depth[i + 1]),
                ];
                if corners.iter().all(|c| c.1.is_finite()) {
                    let mean = corners.iter().map(|c| c.1).sum::<f64>() / 4.0;
                    cells.push((corners, mean));
                }
            }
        }
        cells
    }

    fn check_shape(&self) -> QedResult<()> {
        if self.values.dim() != (self.depth.len(), self.x.len()) {
            return Err(QedError::Render(format!(
                "surface '{}' has values {:?} for axes ({}, {})",
                self.title,
                self.values.dim(),
                self.depth.len(),
                self.x.len()
            )));
        }
        Ok(())
    }
}

fn span(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let (lo, hi) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if lo.is_finite() {
        Some(if hi > lo { (lo, hi) } else { (lo - 0.5, lo + 0.5) })
    } else {
        None
    }
}

/// Render `plot` as a PNG at `path`.
pub fn render_surface(path: &Path, plot: &SurfacePlot) -> QedResult<()> {
    plot.check_shape()?;
    let cells = plot.cells();
    let (h_lo, h_hi) = span(cells.iter().flat_map(|c| c.0.iter().map(|p| p.1)))
        .ok_or_else(|| QedError::Render(format!("surface '{}' has no finite cells", plot.title)))?;
    let (x_lo, x_hi) = span(plot.x.iter().copied()).unwrap_or((0.0, 1.0));
    let (d_lo, d_hi) = span(plot.depth.iter().copied()).unwrap_or((0.0, 1.0));

    let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let height_axis = if plot.log_values {
        format!("log10 {}", plot.value_label)
    } else {
        plot.value_label.clone()
    };
    let caption = format!(
        "{}  [x: {}, depth: {}, height: {}]",
        plot.title, plot.x_label, plot.depth_label, height_axis
    );

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 22))
        .margin(20)
        .build_cartesian_3d(x_lo..x_hi, h_lo..h_hi, d_lo..d_hi)
        .map_err(render_err)?;

    chart.with_projection(|mut pb| {
        pb.yaw = 0.6;
        pb.pitch = 0.35;
        pb.scale = 0.85;
        pb.into_matrix()
    });

    chart
        .configure_axes()
        .light_grid_style(BLACK.mix(0.1))
        .max_light_lines(3)
        .draw()
        .map_err(render_err)?;

    let n_cells = cells.len();
    chart
        .draw_series(cells.into_iter().map(|(corners, mean)| {
            let color = autumn(normalize(mean, h_lo, h_hi));
            Polygon::new(corners.to_vec(), color.mix(0.9).filled())
        }))
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    tracing::info!(path = %path.display(), cells = n_cells, "surface written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn plot(values: Array2<f64>, log_values: bool) -> SurfacePlot {
        SurfacePlot {
            title: "t".into(),
            x_label: "x".into(),
            depth_label: "d".into(),
            value_label: "v".into(),
            x: array![0.0, 1.0, 2.0],
            depth: array![10.0, 20.0],
            values,
            log_values,
        }
    }

    #[test]
    fn test_cells_skip_nan_corners() {
        let p = plot(array![[1.0, 2.0, f64::NAN], [3.0, 4.0, 5.0]], false);
        let cells = p.cells();
        assert_eq!(cells.len(), 1);
        let (corners, mean) = cells[0];
        assert_eq!(corners[0], (0.0, 1.0, 10.0));
        assert_eq!(corners[2], (1.0, 4.0, 20.0));
        assert!((mean - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_log_heights() {
        let p = plot(array![[1.0, 10.0, 100.0], [0.0, -1.0, 1000.0]], true);
        let h = p.heights();
        assert!((h[[0, 2]] - 2.0).abs() < 1e-12);
        assert!(h[[1, 0]].is_nan());
        assert!(h[[1, 1]].is_nan());
        assert_eq!(p.cells().len(), 0);
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let p = plot(array![[1.0, 2.0], [3.0, 4.0]], false);
        assert!(matches!(p.check_shape(), Err(QedError::Render(_))));
    }

    #[test]
    fn test_render_surface_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("surface.png");
        let p = plot(array![[1.0, 10.0, f64::NAN], [2.0, 20.0, 200.0]], true);
        render_surface(&path, &p).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_render_surface_without_cells_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");
        let p = plot(array![[f64::NAN, 1.0, 1.0], [1.0, 1.0, f64::NAN]], false);
        assert!(matches!(render_surface(&path, &p), Err(QedError::Render(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_span_degenerate() {
        assert_eq!(span([2.0, 2.0].into_iter()), Some((1.5, 2.5)));
        assert_eq!(span([f64::NAN].into_iter()), None);
    }
}
