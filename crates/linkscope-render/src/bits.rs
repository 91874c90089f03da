//! Bit-level square-wave chart.

use crate::{Color, Point, Surface, palette};

/// Fraction of the height where a `1` bit is drawn.
pub const HIGH_LEVEL: f64 = 0.25;
/// Fraction of the height where a `0` bit is drawn.
pub const LOW_LEVEL: f64 = 0.75;

const LEGEND: [(&str, f64, Color); 3] = [
    ("raw", 6.0, palette::LABEL),
    ("clean", 50.0, palette::CLEAN),
    ("noisy", 110.0, palette::QUADRATURE),
];
const LEGEND_BASELINE: f64 = 12.0;

/// Draw up to three bit sequences over the high and low reference lines.
///
/// Any nonzero value counts as a `1`. Missing or empty sequences are skipped.
pub fn draw_bit_chart<S: Surface>(
    surface: &mut S,
    raw: Option<&[u8]>,
    clean: Option<&[u8]>,
    noisy: Option<&[u8]>,
) {
    let (width, height) = surface.size();
    surface.clear();

    for level in [HIGH_LEVEL, LOW_LEVEL] {
        let y = height * level;
        surface.line(Point::new(0.0, y), Point::new(width, y), palette::AXIS);
    }

    for (bits, (_, _, color)) in [raw, clean, noisy].into_iter().zip(LEGEND) {
        if let Some(bits) = bits.filter(|bits| !bits.is_empty()) {
            surface.polyline(&square_wave(bits, width, height), color);
        }
    }

    for (label, x, color) in LEGEND {
        surface.text(Point::new(x, LEGEND_BASELINE), label, color);
    }
}

/// Each bit holds its level for one step of `width / len`.
fn square_wave(bits: &[u8], width: f64, height: f64) -> Vec<Point> {
    let step = width / bits.len() as f64;
    let level = |bit: u8| if bit == 0 { height * LOW_LEVEL } else { height * HIGH_LEVEL };

    let mut points = Vec::with_capacity(bits.len() * 2);
    for (idx, &bit) in bits.iter().enumerate() {
        let y = level(bit);
        points.push(Point::new(idx as f64 * step, y));
        points.push(Point::new((idx + 1) as f64 * step, y));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DisplayList, Shape};

    #[test]
    fn square_wave_holds_level_per_bit() {
        let points = square_wave(&[1, 0], 100.0, 40.0);
        assert_eq!(points, vec![
            Point::new(0.0, 10.0),
            Point::new(50.0, 10.0),
            Point::new(50.0, 30.0),
            Point::new(100.0, 30.0),
        ]);
    }

    #[test]
    fn draws_reference_lines_series_and_legend() {
        let mut surface = DisplayList::new(100.0, 40.0);
        draw_bit_chart(&mut surface, Some(&[0, 1][..]), None, Some(&[1, 1][..]));

        let shapes = surface.shapes();
        let lines = shapes.iter().filter(|s| matches!(s, Shape::Line { .. })).count();
        let traces: Vec<Color> = shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Polyline { color, .. } => Some(*color),
                _ => None,
            })
            .collect();
        let labels: Vec<&str> = shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();

        assert_eq!(lines, 2);
        assert_eq!(traces, vec![palette::LABEL, palette::QUADRATURE]);
        assert_eq!(labels, vec!["raw", "clean", "noisy"]);
    }

    #[test]
    fn empty_input_draws_only_frame() {
        let mut surface = DisplayList::new(100.0, 40.0);
        draw_bit_chart(&mut surface, Some(&[][..]), None, None);
        assert!(!surface.shapes().iter().any(|s| matches!(s, Shape::Polyline { .. })));
    }
}
