//! Plot primitives
//!
//! Stateless routines that turn frame telemetry into 2-D drawings. Each one
//! is a pure function of the surface size and its input: same data, same
//! shapes. Drawing goes through the [`Surface`] trait so the same code feeds
//! the terminal canvas and the [`DisplayList`] used by tests and view models.
//!
//! # Components
//!
//! - [`draw_constellation`]: I/Q scatter on a fixed ±1.6 scale
//! - [`draw_waveform`]: I and Q traces on a shared auto-scaled axis
//! - [`draw_bit_chart`]: raw, clean and noisy bits as square waves

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod bits;
pub mod constellation;
mod surface;
pub mod waveform;

pub use bits::draw_bit_chart;
pub use constellation::draw_constellation;
pub use surface::{Color, DisplayList, Point, Shape, Surface, palette};
pub use waveform::draw_waveform;
