//! Baseband waveform plot.

use linkscope_proto::IqSeries;

use crate::{Point, Surface, palette};

/// Smallest amplitude used for vertical scaling.
pub const MIN_AMPLITUDE: f64 = 1e-3;
/// Vertical margin kept free above and below the traces.
pub const VERTICAL_MARGIN: f64 = 6.0;

/// Draw the I and Q traces on a shared vertical scale.
///
/// `None` leaves the surface untouched; a series with no samples clears it.
pub fn draw_waveform<S: Surface>(surface: &mut S, series: Option<&IqSeries>) {
    let Some(series) = series else {
        return;
    };
    let (width, height) = surface.size();
    surface.clear();
    if series.is_empty() {
        return;
    }

    let max_abs = series.i.iter().chain(&series.q).fold(MIN_AMPLITUDE, |acc, v| acc.max(v.abs()));
    let scale = (height / 2.0 - VERTICAL_MARGIN) / max_abs;
    let mid = height / 2.0;

    surface.line(Point::new(0.0, mid), Point::new(width, mid), palette::AXIS);
    surface.polyline(&trace(&series.i, width, mid, scale), palette::IN_PHASE);
    surface.polyline(&trace(&series.q, width, mid, scale), palette::QUADRATURE);
}

/// Samples spread evenly across the full width.
fn trace(samples: &[f64], width: f64, mid: f64, scale: f64) -> Vec<Point> {
    let last = samples.len().saturating_sub(1).max(1) as f64;
    samples
        .iter()
        .enumerate()
        .map(|(idx, v)| Point::new(idx as f64 / last * width, mid - v * scale))
        .collect()
}
