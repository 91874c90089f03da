//! Constellation scatter plot.

use linkscope_proto::IqPoint;

use crate::{Point, Surface, palette};

/// Lower bound of both plot axes.
pub const SCALE_MIN: f64 = -1.6;
/// Upper bound of both plot axes.
pub const SCALE_MAX: f64 = 1.6;
/// Radius of a plotted symbol.
pub const POINT_RADIUS: f64 = 2.0;
/// Baseline position of the scheme label.
pub const LABEL_AT: Point = Point::new(6.0, 14.0);

/// Map an I/Q sample onto a `width` x `height` surface.
///
/// The scale is fixed, so samples outside `SCALE_MIN..=SCALE_MAX` land
/// outside the surface bounds rather than being clipped.
pub fn to_pixel(point: IqPoint, width: f64, height: f64) -> Point {
    let span = SCALE_MAX - SCALE_MIN;
    let x = (point.i - SCALE_MIN) * (width / span);
    let y = height - (point.q - SCALE_MIN) * (height / span);
    Point::new(x, y)
}

/// Draw a constellation with a centred crosshair and the scheme label.
///
/// `None` leaves the surface untouched.
pub fn draw_constellation<S: Surface>(
    surface: &mut S,
    points: Option<&[IqPoint]>,
    scheme: Option<&str>,
) {
    let Some(points) = points else {
        return;
    };
    let (width, height) = surface.size();
    surface.clear();

    surface.line(Point::new(0.0, height / 2.0), Point::new(width, height / 2.0), palette::AXIS);
    surface.line(Point::new(width / 2.0, 0.0), Point::new(width / 2.0, height), palette::AXIS);

    for &point in points {
        surface.circle(to_pixel(point, width, height), POINT_RADIUS, palette::IN_PHASE);
    }

    surface.text(LABEL_AT, scheme.unwrap_or_default(), palette::LABEL);
}
