use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;

use crate::grid::types::PnlSurface;
use crate::render::format_price;

/// Dimensions of the rendered SVG.
const CHART_SIZE: (u32, u32) = (1280, 768);

fn lerp(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t).round() as u8
}

/// Map a P&L value to a diverging fill: losses shade towards red, profits
/// towards green, zero stays white.  `max_abs` is the normalisation
/// constant (largest |P&L| in the grid).
fn pnl_color(value: f64, max_abs: f64) -> RGBColor {
    if max_abs <= 0.0 {
        return RGBColor(255, 255, 255);
    }
    let t = (value / max_abs).clamp(-1.0, 1.0);
    if t < 0.0 {
        let s = -t;
        RGBColor(255, lerp(255, 0, s), lerp(255, 0, s))
    } else {
        RGBColor(lerp(255, 0, t), 255, lerp(255, 0, t))
    }
}

/// Padded plot-range bounds for an axis of cell-centre samples.  Handles
/// descending (reversed time) and degenerate axes: the padding floor keeps
/// the range non-empty even when every sample coincides.
fn axis_bounds(axis: &[f64], half_step: f64) -> (f64, f64) {
    let lo = axis.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = axis.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let pad = half_step.max(1e-6);
    (lo - pad, hi + pad)
}

/// Uniform half-step between consecutive axis samples (absolute value, so
/// reversed axes work too).
fn half_step(axis: &[f64]) -> f64 {
    if axis.len() > 1 {
        ((axis[axis.len() - 1] - axis[0]) / (axis.len() - 1) as f64).abs() / 2.0
    } else {
        0.5
    }
}

/// Render the P&L surface as an SVG heatmap.
///
/// Each grid cell becomes a filled rectangle centred on its sample point.
/// Colour policy lives entirely here: the scale is normalised to the
/// largest absolute P&L in the grid so the zero level is always white.
pub fn render_heatmap<P: AsRef<Path>>(surface: &PnlSurface, path: P) -> Result<()> {
    let root = SVGBackend::new(path.as_ref(), CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let hx = half_step(&surface.spot_axis);
    let hy = half_step(&surface.secondary_axis);
    let (x_lo, x_hi) = axis_bounds(&surface.spot_axis, hx);
    let (y_lo, y_hi) = axis_bounds(&surface.secondary_axis, hy);

    let caption = format!(
        "P&L Heatmap: {} vs Spot Price | Option Price: {}",
        surface.secondary_label,
        format_price(surface.baseline_price)
    );

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(caption, ("sans-serif", 30))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

    chart
        .configure_mesh()
        .x_desc("Spot Price")
        .y_desc(surface.secondary_label)
        .draw()?;

    let max_abs = surface
        .pnl
        .iter()
        .flatten()
        .fold(0.0_f64, |acc, &v| acc.max(v.abs()));

    let mut cells = Vec::with_capacity(surface.pnl.len() * surface.spot_axis.len());
    for (i, row) in surface.pnl.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            let x = surface.spot_axis[j];
            let y = surface.secondary_axis[i];
            cells.push(Rectangle::new(
                [(x - hx, y - hy), (x + hx, y + hy)],
                pnl_color(value, max_abs).filled(),
            ));
        }
    }
    chart.draw_series(cells)?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pnl_color_diverges_around_white() {
        assert_eq!(pnl_color(0.0, 10.0), RGBColor(255, 255, 255));
        // Full loss is pure red, full profit pure green
        assert_eq!(pnl_color(-10.0, 10.0), RGBColor(255, 0, 0));
        assert_eq!(pnl_color(10.0, 10.0), RGBColor(0, 255, 0));
        // An all-zero grid (max_abs = 0) stays white everywhere
        assert_eq!(pnl_color(0.0, 0.0), RGBColor(255, 255, 255));
    }

    #[test]
    fn test_axis_bounds_cover_reversed_axis() {
        let axis = vec![0.1, 0.075, 0.05];
        let h = half_step(&axis);
        let (lo, hi) = axis_bounds(&axis, h);
        assert!(lo < 0.05 && hi > 0.1);
        // Degenerate axis still yields a non-empty range
        let flat = vec![0.1; 3];
        let (lo, hi) = axis_bounds(&flat, half_step(&flat));
        assert!(hi > lo);
    }
}
