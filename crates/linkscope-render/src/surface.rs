//! Drawing surface abstraction.
//!
//! Plot routines draw through the [`Surface`] trait in pixel coordinates with
//! the origin at the top-left corner and y growing downwards. A frontend
//! implements the trait for its own canvas; [`DisplayList`] records the calls
//! so the result can be stored, compared, or painted later.

/// Point in surface pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal offset from the left edge.
    pub x: f64,
    /// Vertical offset from the top edge.
    pub y: f64,
}

impl Point {
    /// Create a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// 24-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Create a colour from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Plot palette.
pub mod palette {
    use super::Color;

    /// Axes and reference lines.
    pub const AXIS: Color = Color::rgb(0x33, 0x41, 0x55);
    /// Labels and the raw bit series.
    pub const LABEL: Color = Color::rgb(0x94, 0xa3, 0xb8);
    /// Constellation points and the I trace.
    pub const IN_PHASE: Color = Color::rgb(0x93, 0xc5, 0xfd);
    /// Q trace and the noisy bit series.
    pub const QUADRATURE: Color = Color::rgb(0xf4, 0x72, 0xb6);
    /// Clean bit series.
    pub const CLEAN: Color = Color::rgb(0x38, 0xbd, 0xf8);
}

/// Target of the plot routines.
pub trait Surface {
    /// Width and height in pixels.
    fn size(&self) -> (f64, f64);

    /// Erase everything drawn so far.
    fn clear(&mut self);

    /// Stroke a straight segment.
    fn line(&mut self, from: Point, to: Point, color: Color);

    /// Stroke connected segments through `points`.
    fn polyline(&mut self, points: &[Point], color: Color);

    /// Fill a circle.
    fn circle(&mut self, center: Point, radius: f64, color: Color);

    /// Draw a text label with its baseline starting at `at`.
    fn text(&mut self, at: Point, text: &str, color: Color);
}

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Straight segment.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Stroke colour.
        color: Color,
    },
    /// Connected segments.
    Polyline {
        /// Vertices in drawing order.
        points: Vec<Point>,
        /// Stroke colour.
        color: Color,
    },
    /// Filled circle.
    Circle {
        /// Centre.
        center: Point,
        /// Radius in pixels.
        radius: f64,
        /// Fill colour.
        color: Color,
    },
    /// Text label.
    Text {
        /// Baseline start.
        at: Point,
        /// Label text.
        text: String,
        /// Text colour.
        color: Color,
    },
}

/// Surface that records drawing operations in order.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayList {
    width: f64,
    height: f64,
    shapes: Vec<Shape>,
}

impl DisplayList {
    /// Create an empty list for a surface of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, shapes: Vec::new() }
    }

    /// Recorded shapes in drawing order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// True when nothing has been drawn since the last clear.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Surface width in pixels.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Surface for DisplayList {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.shapes.clear();
    }

    fn line(&mut self, from: Point, to: Point, color: Color) {
        self.shapes.push(Shape::Line { from, to, color });
    }

    fn polyline(&mut self, points: &[Point], color: Color) {
        if points.is_empty() {
            return;
        }
        self.shapes.push(Shape::Polyline { points: points.to_vec(), color });
    }

    fn circle(&mut self, center: Point, radius: f64, color: Color) {
        self.shapes.push(Shape::Circle { center, radius, color });
    }

    fn text(&mut self, at: Point, text: &str, color: Color) {
        self.shapes.push(Shape::Text { at, text: text.to_owned(), color });
    }
}
